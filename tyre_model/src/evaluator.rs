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

use ndarray::Array1;
use tracing::debug;
use utils::units::kn_to_n;
use crate::coefficients::TyreCoefficients;
use crate::combined::combine;
use crate::lateral::LateralFactors;
use crate::longitudinal::LongitudinalFactors;
use crate::operating_point::OperatingPoint;
use crate::sweep::{LoadSweep, SlipSweep};

/// A labelled line of (x, y) points ready to be drawn or exported
#[derive(Clone, Debug, PartialEq)]
pub struct CurveSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Combined side and brake force over a slip sweep at one vertical load
#[derive(Clone, Debug, PartialEq)]
pub struct ForceCurvePair {
    pub vertical_load_kn: f64,
    pub lateral: Array1<f64>,
    pub longitudinal: Array1<f64>,
}

impl ForceCurvePair {
    pub fn len(&self) -> usize {
        self.lateral.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lateral.is_empty()
    }

    pub fn lateral_label(&self) -> String {
        format!("Fy at {} N", kn_to_n(self.vertical_load_kn))
    }

    pub fn longitudinal_label(&self) -> String {
        format!("Fx at {} N", kn_to_n(self.vertical_load_kn))
    }

    /// Side then brake force against slip in percent
    pub fn series(&self, sweep: &SlipSweep) -> [CurveSeries; 2] {
        let x = sweep.percent();
        [
            CurveSeries { label: self.lateral_label(), points: zip_points(&x, &self.lateral) },
            CurveSeries { label: self.longitudinal_label(), points: zip_points(&x, &self.longitudinal) },
        ]
    }
}

fn zip_points(x: &Array1<f64>, y: &Array1<f64>) -> Vec<(f64, f64)> {
    x.iter().copied().zip(y.iter().copied()).collect()
}

/// Evaluates force curves for a given tyre characterization
#[derive(Clone, Debug)]
pub struct ForceModel {
    coefficients: TyreCoefficients,
}

impl ForceModel {
    pub fn new(coefficients: TyreCoefficients) -> ForceModel {
        ForceModel { coefficients }
    }

    pub fn coefficients(&self) -> &TyreCoefficients {
        &self.coefficients
    }

    /// Curves for a single vertical load `fz` (kN)
    pub fn evaluate_load(&self, operating_point: &OperatingPoint, fz: f64, sweep: &SlipSweep) -> ForceCurvePair {
        let slip_angle = operating_point.slip_angle();
        let lateral_factors = LateralFactors::derive(&self.coefficients.lateral,
                                                     fz,
                                                     operating_point.camber_angle());
        let fy0 = lateral_factors.force(slip_angle);
        debug!("Fz {} kN side force factors {:?}, Fy0 {}", fz, lateral_factors, fy0);
        let longitudinal_factors = LongitudinalFactors::derive(&self.coefficients.longitudinal, fz);
        debug!("Fz {} kN brake force factors {:?}", fz, longitudinal_factors);

        let fx0 = longitudinal_factors.force_over(sweep.values());
        let (longitudinal, lateral) = combine(sweep.values(), &fx0, fy0, slip_angle);
        ForceCurvePair { vertical_load_kn: fz, lateral, longitudinal }
    }

    /// One curve pair per load, in the order of `loads`
    pub fn evaluate(&self, operating_point: &OperatingPoint, loads: &LoadSweep, sweep: &SlipSweep) -> Vec<ForceCurvePair> {
        loads.loads_kn()
            .iter()
            .map(|fz| self.evaluate_load(operating_point, *fz, sweep))
            .collect()
    }
}

impl Default for ForceModel {
    fn default() -> Self {
        ForceModel::new(TyreCoefficients::DEFAULT)
    }
}
