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
use crate::coefficients::LongitudinalCoefficients;

/// Derived Magic Formula factors for the brake force at one vertical load
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongitudinalFactors {
    pub peak: f64,
    pub shape: f64,
    pub stiffness: f64,
    pub curvature: f64,
}

impl LongitudinalFactors {
    pub const SHAPE_FACTOR: f64 = 1.65;

    /// - `fz`: vertical load in kN
    pub fn derive(coefficients: &LongitudinalCoefficients, fz: f64) -> LongitudinalFactors {
        let c = coefficients;
        let peak = c.a1 * fz.powi(2) + c.a2 * fz;
        let shape = LongitudinalFactors::SHAPE_FACTOR;
        let stiffness = (c.a3 * fz.powi(2) + c.a4 * fz) / (shape * peak * (c.a5 * fz).exp());
        let curvature = c.a6 * fz.powi(2) + c.a7 * fz + c.a8;
        LongitudinalFactors { peak, shape, stiffness, curvature }
    }

    /// The arctangent term is scaled to degrees while the linear term stays a
    /// plain ratio.
    pub fn phi(&self, kappa: f64) -> f64 {
        let b = self.stiffness;
        let e = self.curvature;
        (1.0 - e) * kappa + (e / b) * (b * kappa).atan() * 180.0 / std::f64::consts::PI
    }

    /// Pure brake force (N) at longitudinal slip ratio `kappa`
    pub fn force(&self, kappa: f64) -> f64 {
        let phi = self.phi(kappa);
        self.peak * (self.shape * (self.stiffness * phi).atan()).sin()
    }

    pub fn force_over(&self, kappa: &Array1<f64>) -> Array1<f64> {
        kappa.mapv(|k| self.force(k))
    }
}

/// Pure brake force Fx0 (N) at vertical load `fz` (kN) for every slip ratio in `kappa`
pub fn pure_longitudinal_force(coefficients: &LongitudinalCoefficients, fz: f64, kappa: &Array1<f64>) -> Array1<f64> {
    LongitudinalFactors::derive(coefficients, fz).force_over(kappa)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;
    use crate::coefficients::LongitudinalCoefficients;
    use crate::longitudinal::{pure_longitudinal_force, LongitudinalFactors};
    use crate::sweep::SlipSweep;

    const COEFFS: LongitudinalCoefficients = LongitudinalCoefficients::DEFAULT;

    #[test]
    fn factors_at_2kn() {
        let f = LongitudinalFactors::derive(&COEFFS, 2.0);
        assert_relative_eq!(f.peak, 2202.8, max_relative = 1e-12);
        assert_eq!(f.shape, 1.65);
        assert_relative_eq!(f.stiffness, 0.15587945620490373, max_relative = 1e-12);
        assert_relative_eq!(f.curvature, 0.574, max_relative = 1e-12);
    }

    #[test]
    fn brake_force_regression() {
        let kappa = array![0.05, 0.1, 0.5, 1.0];
        let fx = pure_longitudinal_force(&COEFFS, 2.0, &kappa);
        assert_relative_eq!(fx[0], 896.5111024061366, max_relative = 1e-10);
        assert_relative_eq!(fx[1], 1565.130209599453, max_relative = 1e-10);
        assert_relative_eq!(fx[2], 2017.3034837549235, max_relative = 1e-10);
        assert_relative_eq!(fx[3], 1678.1240511858375, max_relative = 1e-10);

        let fx = pure_longitudinal_force(&COEFFS, 6.0, &array![0.2]);
        assert_relative_eq!(fx[0], 6095.412630347565, max_relative = 1e-10);
    }

    #[test]
    fn phi_scales_only_the_arctangent_to_degrees() {
        let straight = LongitudinalFactors { peak: 1.0, shape: 1.65, stiffness: 0.2, curvature: 0.0 };
        assert_relative_eq!(straight.phi(0.3), 0.3, max_relative = 1e-12);

        let curved = LongitudinalFactors { curvature: 1.0, ..straight };
        assert_relative_eq!(curved.phi(0.3), ((0.2f64 * 0.3).atan() / 0.2).to_degrees(), max_relative = 1e-12);
    }

    #[test]
    fn factors_reused_over_sweep() {
        let sweep = SlipSweep::new();
        let factors = LongitudinalFactors::derive(&COEFFS, 4.0);
        let fx = factors.force_over(sweep.values());
        assert_eq!(fx, pure_longitudinal_force(&COEFFS, 4.0, sweep.values()));
        assert_eq!(fx[100], factors.force(sweep.values()[100]));
    }

    #[test]
    fn zero_slip_gives_zero_force() {
        let sweep = SlipSweep::new();
        for fz in [2.0, 4.0, 6.0, 8.0] {
            let fx = pure_longitudinal_force(&COEFFS, fz, sweep.values());
            assert_eq!(fx.len(), sweep.len());
            assert_eq!(fx[0], 0.0);
            assert!(fx.iter().skip(1).all(|f| f.is_finite() && *f > 0.0));
        }
    }
}
