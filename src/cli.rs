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

use std::path::PathBuf;
use clap::Parser;
use tyre_model::{Error, LoadSweep, OperatingPoint, Result};
use crate::settings::defaults::DefaultValues;

#[derive(Parser, Debug)]
#[command(name = "side-brake-force")]
#[command(about = "Side and brake force curves from a Magic Formula tyre model")]
pub struct Cli {
    /// vehicle mass in kg
    #[arg(long = "veh_mass")]
    pub veh_mass: Option<f64>,

    /// slip angle in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub alpha: Option<f64>,

    /// camber in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub gamma: Option<f64>,

    /// friction coefficient
    #[arg(long)]
    pub my: Option<f64>,

    /// vertical loads in kN
    #[arg(long = "v_load", num_args = 1.., allow_negative_numbers = true,
          default_values_t = LoadSweep::DEFAULT_LOADS_KN)]
    pub v_load: Vec<f64>,

    /// text file to read default values from
    #[arg(long)]
    pub defaults: Option<PathBuf>,

    /// where to write the chart (SVG)
    #[arg(long)]
    pub chart: Option<PathBuf>,

    /// also write the curve data to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Operating point inputs after command line overrides have been applied
/// on top of the defaults file. Angles are still in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInputs {
    pub veh_mass: f64,
    pub alpha: f64,
    pub gamma: f64,
    pub my: f64,
    pub v_load: Vec<f64>,
}

impl Cli {
    pub fn resolve(&self, defaults: &DefaultValues) -> Result<ResolvedInputs> {
        Ok(ResolvedInputs {
            veh_mass: required("veh_mass", self.veh_mass, defaults.veh_mass)?,
            alpha: required("alpha", self.alpha, defaults.alpha)?,
            gamma: required("gamma", self.gamma, defaults.gamma)?,
            my: required("my", self.my, defaults.my)?,
            v_load: self.v_load.clone(),
        })
    }
}

impl ResolvedInputs {
    pub fn operating_point(&self) -> Result<OperatingPoint> {
        OperatingPoint::from_degrees(self.veh_mass, self.alpha, self.gamma, self.my)
    }

    pub fn load_sweep(&self) -> Result<LoadSweep> {
        LoadSweep::new(self.v_load.clone())
    }
}

fn required(name: &str, cli_value: Option<f64>, default: Option<f64>) -> Result<f64> {
    cli_value.or(default).ok_or_else(|| Error::missing_input(name))
}
