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

use ndarray::{Array1, Zip};

/// Components of the combined slip vector at one slip ratio
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CombinedSlip {
    pub sigma_x: f64,
    pub sigma_y: f64,
}

impl CombinedSlip {
    pub fn new(kappa: f64, slip_angle: f64) -> CombinedSlip {
        CombinedSlip {
            sigma_x: -kappa / (1.0 + kappa),
            sigma_y: -slip_angle.tan() / (1.0 + kappa),
        }
    }

    pub fn magnitude(&self) -> f64 {
        (self.sigma_x * self.sigma_x + self.sigma_y * self.sigma_y).sqrt()
    }

    /// Project the pure-slip forces onto the slip direction, returning (Fx, Fy).
    ///
    /// With no slip at all the direction is undefined and both components are NaN.
    pub fn decompose(&self, fx0: f64, fy0: f64) -> (f64, f64) {
        let sigma = self.magnitude();
        (-(self.sigma_x / sigma) * fx0, -(self.sigma_y / sigma) * fy0)
    }
}

/// Combined brake and side forces over a slip sweep.
///
/// - `kappa`: longitudinal slip ratios
/// - `fx0`: pure brake force at each slip ratio
/// - `fy0`: pure side force, constant across the sweep
/// - `slip_angle`: radians
///
/// Returns (Fx, Fy), index-aligned with `kappa`.
pub fn combine(kappa: &Array1<f64>, fx0: &Array1<f64>, fy0: f64, slip_angle: f64) -> (Array1<f64>, Array1<f64>) {
    let mut fx = Array1::<f64>::zeros(kappa.len());
    let mut fy = Array1::<f64>::zeros(kappa.len());
    Zip::from(&mut fx)
        .and(&mut fy)
        .and(kappa)
        .and(fx0)
        .for_each(|out_x, out_y, &k, &pure_x| {
            let (x, y) = CombinedSlip::new(k, slip_angle).decompose(pure_x, fy0);
            *out_x = x;
            *out_y = y;
        });
    (fx, fy)
}
