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

mod cli;
mod chart;
mod error;
mod export;
mod report;
mod settings;

use std::env;
use std::io;
use std::process::ExitCode;
use clap::Parser;
use tracing_subscriber;
use tracing_appender;
use tracing::{error, info};

use tyre_model::{CurveSeries, ForceModel, SlipSweep, TyreCoefficients};
use crate::cli::Cli;
use crate::error::AppError;
use crate::settings::GlobalSettings;
use crate::settings::defaults::DefaultValues;


fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e.to_string());
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "side_brake_force.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut settings = GlobalSettings::load()?;
    if let Some(path) = &cli.defaults {
        settings.set_defaults_path(path);
    }
    if let Some(path) = &cli.chart {
        settings.set_chart_path(path);
    }

    let defaults = DefaultValues::load_from_path(&settings.defaults_path())?;
    let inputs = cli.resolve(&defaults)?;
    let operating_point = inputs.operating_point()?;
    let loads = inputs.load_sweep()?;
    let coefficients = match settings.coefficients_path() {
        Some(path) => TyreCoefficients::load_from_path(&path)?,
        None => TyreCoefficients::DEFAULT
    };

    report::write_report(&mut io::stdout().lock(), &inputs, &operating_point)?;

    let model = ForceModel::new(coefficients);
    let sweep = SlipSweep::new();
    info!("Evaluating {} vertical loads over {} slip samples", loads.len(), sweep.len());
    let curves: Vec<[CurveSeries; 2]> = model.evaluate(&operating_point, &loads, &sweep)
        .iter()
        .map(|pair| pair.series(&sweep))
        .collect();

    let chart_options = settings.chart_options();
    chart::draw_force_chart(&curves, &chart_options)?;
    println!("Chart written to {}", chart_options.path.display());

    if let Some(csv_path) = &cli.csv {
        export::write_curves_csv_to_path(csv_path, &curves)?;
        println!("Curve data written to {}", csv_path.display());
    }
    Ok(())
}
