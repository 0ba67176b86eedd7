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

//! Static Magic Formula tyre model producing side and brake force curves
//! against longitudinal slip.

pub mod error;
pub mod coefficients;
pub mod operating_point;
pub mod sweep;
pub mod lateral;
pub mod longitudinal;
pub mod combined;
pub mod evaluator;

pub use error::{Error, ErrorKind, Result};
pub use coefficients::{LateralCoefficients, LongitudinalCoefficients, TyreCoefficients};
pub use operating_point::OperatingPoint;
pub use sweep::{LoadSweep, SlipSweep};
pub use evaluator::{CurveSeries, ForceCurvePair, ForceModel};
