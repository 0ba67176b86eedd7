/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of side-brake-force.
 *
 * side-brake-force is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * side-brake-force is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with side-brake-force. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use std::path::PathBuf;
use itertools::{Itertools, MinMaxResult};
use plotters::chart::{ChartBuilder, LabelAreaPosition, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::PathElement;
use plotters::prelude::{FontDesc, FontFamily, FontStyle, LineSeries, SVGBackend, BLACK, WHITE};
use plotters::style::{Color, Palette, Palette99};
use tracing::info;
use tyre_model::CurveSeries;
use utils::numeric::padded_range;
use crate::error::AppError;

pub const CHART_TITLE: &str = "Side and brake force";
pub const X_AXIS_DESC: &str = "Longitudinal slip κ [%]";
pub const Y_AXIS_DESC: &str = "Side force / Brake force [N]";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Draw side and brake force curves, one `[Fy, Fx]` pair per vertical load,
/// to an SVG file
pub fn draw_force_chart(curves: &[[CurveSeries; 2]], options: &ChartOptions) -> Result<(), AppError> {
    let chart_error = |e: String| AppError::Chart(options.path.display().to_string(), e);
    let svg = render_svg(curves, options.width, options.height).map_err(|e| chart_error(e.to_string()))?;
    fs::write(&options.path, svg).map_err(|e| chart_error(e.to_string()))?;
    info!("Chart written to {}", options.path.display());
    Ok(())
}

fn render_svg(curves: &[[CurveSeries; 2]], width: u32, height: u32) -> Result<String, Box<dyn std::error::Error>> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        draw(&root, curves)?;
        root.present()?;
    }
    Ok(svg)
}

fn draw(root: &DrawingArea<SVGBackend, Shift>, curves: &[[CurveSeries; 2]]) -> Result<(), Box<dyn std::error::Error>> {
    let (y_min, y_max) = finite_y_range(curves);
    let (y_axis_start, y_axis_limit) = padded_range(y_min, y_max, 0.05);
    let font_desc = FontDesc::new(FontFamily::Name("sans-serif"), 20.0, FontStyle::Normal);

    root.fill(&WHITE)?;
    let mut context = ChartBuilder::on(root)
        .margin(15)
        .caption(CHART_TITLE, font_desc.color(&BLACK))
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .build_cartesian_2d(0f64..100f64,
                            y_axis_start..y_axis_limit)?;

    context
        .configure_mesh()
        .x_labels(11)
        .x_label_formatter(&as_usize)
        .x_desc(X_AXIS_DESC)
        .y_label_formatter(&as_isize)
        .y_desc(Y_AXIS_DESC)
        .bold_line_style(&BLACK.mix(0.2))
        .light_line_style(&BLACK.mix(0.05))
        .draw()?;

    for (load_idx, pair) in curves.iter().enumerate() {
        let base_colour = Palette99::pick(load_idx);
        for (curve_idx, series) in pair.iter().enumerate() {
            // side force solid, brake force faded
            let colour = match curve_idx {
                0 => base_colour.to_rgba(),
                _ => base_colour.mix(0.55)
            };
            for (segment_idx, segment) in finite_segments(&series.points).into_iter().enumerate() {
                let series_anno = context.draw_series(LineSeries::new(segment, &colour))?;
                if segment_idx == 0 {
                    series_anno
                        .label(series.label.as_str())
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], colour));
                }
            }
        }
    }

    context
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

/// Split a curve into runs of finite points so gaps are left where the
/// model produced NaN or infinity
fn finite_segments(points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let runs = points.iter().chunk_by(|p| p.0.is_finite() && p.1.is_finite());
    for (finite, run) in &runs {
        if finite {
            segments.push(run.copied().collect());
        }
    }
    segments
}

fn finite_y_range(curves: &[[CurveSeries; 2]]) -> (f64, f64) {
    let finite_values = curves
        .iter()
        .flat_map(|pair| pair.iter())
        .flat_map(|series| series.points.iter().map(|p| p.1))
        .filter(|y| y.is_finite());
    match finite_values.minmax() {
        MinMaxResult::NoElements => (f64::NAN, f64::NAN),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(min, max) => (min, max)
    }
}

fn as_usize(x: &f64) -> String {
    format!("{}", *x as usize)
}

fn as_isize(x: &f64) -> String {
    format!("{}", *x as isize)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tyre_model::{CurveSeries, ForceModel, LoadSweep, OperatingPoint, SlipSweep};
    use crate::chart::{draw_force_chart, finite_segments, finite_y_range, render_svg, ChartOptions,
                       CHART_TITLE, X_AXIS_DESC, Y_AXIS_DESC};

    fn default_load_curves(alpha_deg: f64) -> Vec<[CurveSeries; 2]> {
        let op = OperatingPoint::from_degrees(1500.0, alpha_deg, 0.0, 1.0).unwrap();
        let sweep = SlipSweep::new();
        ForceModel::default()
            .evaluate(&op, &LoadSweep::default(), &sweep)
            .iter()
            .map(|pair| pair.series(&sweep))
            .collect()
    }

    fn assert_chart_text(svg: &str) {
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(CHART_TITLE));
        assert!(svg.contains(X_AXIS_DESC));
        assert!(svg.contains(Y_AXIS_DESC));
        for load_n in [2000, 4000, 6000, 8000] {
            assert!(svg.contains(&format!("Fy at {} N", load_n)), "missing Fy at {} N", load_n);
            assert!(svg.contains(&format!("Fx at {} N", load_n)), "missing Fx at {} N", load_n);
        }
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn renders_title_axes_and_legend() {
        let svg = render_svg(&default_load_curves(5.0), 1024, 768).unwrap();
        assert_chart_text(&svg);
    }

    #[test]
    fn renders_without_slip_angle() {
        let curves = default_load_curves(0.0);
        assert!(curves[0][0].points[0].1.is_nan());
        let svg = render_svg(&curves, 1024, 768).unwrap();
        assert_chart_text(&svg);
    }

    #[test]
    fn chart_file_is_written() {
        let path = std::env::temp_dir().join(format!("side_brake_force_chart_{}.svg", std::process::id()));
        let options = ChartOptions { path: path.clone(), width: 800, height: 600 };
        draw_force_chart(&default_load_curves(5.0), &options).unwrap();
        let svg = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_chart_text(&svg);
    }

    fn series(label: &str, ys: &[f64]) -> CurveSeries {
        CurveSeries {
            label: label.to_string(),
            points: ys.iter().enumerate().map(|(i, y)| (i as f64, *y)).collect(),
        }
    }

    #[test]
    fn segments_break_at_non_finite_points() {
        let points = vec![(0.0, f64::NAN), (1.0, 1.0), (2.0, 2.0), (3.0, f64::INFINITY), (4.0, 4.0)];
        let segments = finite_segments(&points);
        assert_eq!(segments, vec![vec![(1.0, 1.0), (2.0, 2.0)], vec![(4.0, 4.0)]]);
    }

    #[test]
    fn all_finite_is_one_segment() {
        let points = vec![(0.0, 0.0), (1.0, 1.0)];
        assert_eq!(finite_segments(&points), vec![points.clone()]);
        assert!(finite_segments(&[(0.0, f64::NAN)]).is_empty());
    }

    #[test]
    fn y_range_ignores_non_finite_values() {
        let curves = vec![
            [series("Fy at 2000 N", &[f64::NAN, 10.0, -5.0]), series("Fx at 2000 N", &[f64::NAN, 300.0, 20.0])],
            [series("Fy at 4000 N", &[f64::NEG_INFINITY, 50.0]), series("Fx at 4000 N", &[0.0, 1.0])],
        ];
        assert_eq!(finite_y_range(&curves), (-5.0, 300.0));
    }

    #[test]
    fn y_range_without_finite_values() {
        let curves = vec![[series("Fy at 0 N", &[f64::NAN]), series("Fx at 0 N", &[f64::NAN])]];
        let (min, max) = finite_y_range(&curves);
        assert!(min.is_nan() && max.is_nan());
    }
}
