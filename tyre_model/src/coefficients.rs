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
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::error::Result;

/// Magic Formula coefficients for the side force (A1_FY..A13_FY)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LateralCoefficients {
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    pub a4: f64,
    pub a5: f64,
    pub a6: f64,
    pub a7: f64,
    pub a8: f64,
    pub a9: f64,
    pub a10: f64,
    pub a11: f64,
    pub a12: f64,
    pub a13: f64,
}

impl LateralCoefficients {
    pub const DEFAULT: LateralCoefficients = LateralCoefficients {
        a1: -22.1,
        a2: 1011.0,
        a3: 1078.0,
        a4: 1.82,
        a5: 0.208,
        a6: 0.0,
        a7: -0.354,
        a8: 0.707,
        a9: 0.028,
        a10: 0.0,
        a11: 14.8,
        a12: 0.022,
        a13: 0.0,
    };
}

/// Magic Formula coefficients for the brake force (A1_FX..A8_FX)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LongitudinalCoefficients {
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    pub a4: f64,
    pub a5: f64,
    pub a6: f64,
    pub a7: f64,
    pub a8: f64,
}

impl LongitudinalCoefficients {
    pub const DEFAULT: LongitudinalCoefficients = LongitudinalCoefficients {
        a1: -21.3,
        a2: 1144.0,
        a3: 49.6,
        a4: 226.0,
        a5: 0.069,
        a6: -0.006,
        a7: 0.056,
        a8: 0.486,
    };
}

/// A complete tyre characterization.
///
/// Stored on disk as TOML with a `[lateral]` and a `[longitudinal]` table:
/// ```toml
/// [lateral]
/// a1 = -22.1
/// # ...
/// a13 = 0.0
///
/// [longitudinal]
/// a1 = -21.3
/// # ...
/// a8 = 0.486
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TyreCoefficients {
    pub lateral: LateralCoefficients,
    pub longitudinal: LongitudinalCoefficients,
}

impl TyreCoefficients {
    pub const DEFAULT: TyreCoefficients = TyreCoefficients {
        lateral: LateralCoefficients::DEFAULT,
        longitudinal: LongitudinalCoefficients::DEFAULT,
    };

    pub fn from_toml_str(data: &str) -> Result<TyreCoefficients> {
        Ok(toml::from_str(data)?)
    }

    pub fn load_from_path(path: &Path) -> Result<TyreCoefficients> {
        info!("Loading tyre coefficients from {}", path.display());
        let data = fs::read_to_string(path)?;
        TyreCoefficients::from_toml_str(&data)
    }
}

impl Default for TyreCoefficients {
    fn default() -> Self {
        TyreCoefficients::DEFAULT
    }
}
