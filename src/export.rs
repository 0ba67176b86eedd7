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

use std::io;
use std::path::Path;
use csv::Writer;
use tracing::info;
use tyre_model::CurveSeries;
use crate::error::AppError;

pub const X_COLUMN: &str = "kappa_percent";

pub fn write_curves_csv_to_path(path: &Path, curves: &[[CurveSeries; 2]]) -> Result<(), AppError> {
    let to_error = |e: csv::Error| AppError::Csv(path.display().to_string(), e.to_string());
    let mut writer = Writer::from_path(path).map_err(to_error)?;
    write_curves(&mut writer, curves).map_err(to_error)?;
    info!("Curve data written to {}", path.display());
    Ok(())
}

/// One row per slip sample: the slip in percent followed by every curve's value
/// in the order the curves were given
pub fn write_curves<W: io::Write>(writer: &mut Writer<W>, curves: &[[CurveSeries; 2]]) -> csv::Result<()> {
    let all_series: Vec<&CurveSeries> = curves.iter().flat_map(|pair| pair.iter()).collect();

    let mut header = vec![X_COLUMN.to_string()];
    header.extend(all_series.iter().map(|s| s.label.clone()));
    writer.write_record(&header)?;

    let num_rows = all_series.first().map(|s| s.points.len()).unwrap_or(0);
    for row_idx in 0..num_rows {
        let mut record = Vec::with_capacity(all_series.len() + 1);
        record.push(all_series[0].points[row_idx].0.to_string());
        for series in &all_series {
            match series.points.get(row_idx) {
                Some((_, y)) => record.push(y.to_string()),
                None => record.push(String::new())
            }
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
