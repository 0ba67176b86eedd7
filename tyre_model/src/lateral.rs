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

use crate::coefficients::LateralCoefficients;

/// Derived Magic Formula factors for the side force at one vertical load
/// and camber angle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LateralFactors {
    pub peak: f64,
    pub shape: f64,
    pub stiffness: f64,
    pub curvature: f64,
    pub horizontal_shift: f64,
    pub vertical_shift: f64,
}

impl LateralFactors {
    pub const SHAPE_FACTOR: f64 = 1.30;

    /// - `fz`: vertical load in kN
    /// - `camber`: camber angle in radians
    pub fn derive(coefficients: &LateralCoefficients, fz: f64, camber: f64) -> LateralFactors {
        let c = coefficients;
        let peak = c.a1 * fz.powi(2) + c.a2 * fz;
        let shape = LateralFactors::SHAPE_FACTOR;
        let stiffness = ((c.a3 * (c.a4 * (c.a5 * fz).atan()).sin()) / (shape * peak))
            * (1.0 - c.a12 * camber.abs());
        let curvature = c.a6 * fz.powi(2) + c.a7 * fz + c.a8;
        let horizontal_shift = c.a9 * camber;
        let vertical_shift = (c.a10 * fz.powi(2) + c.a11 * fz) * camber;
        LateralFactors { peak, shape, stiffness, curvature, horizontal_shift, vertical_shift }
    }

    /// The slip angle enters the linear term in degrees but the arctangent
    /// term in radians.
    pub fn phi(&self, slip_angle: f64) -> f64 {
        let b = self.stiffness;
        let e = self.curvature;
        (1.0 - e) * (slip_angle.to_degrees() + self.horizontal_shift)
            + (e / b) * (b * (slip_angle + self.horizontal_shift)).atan()
    }

    /// Pure side force (N) at `slip_angle` (radians)
    pub fn force(&self, slip_angle: f64) -> f64 {
        let phi = self.phi(slip_angle);
        self.peak * (self.shape * (self.stiffness * phi).atan()).sin() + self.vertical_shift
    }
}

/// Pure side force Fy0 (N) for vertical load `fz` (kN), `slip_angle` and `camber` (radians).
///
/// A zero load leaves the stiffness factor undefined and the result non-finite.
pub fn pure_lateral_force(coefficients: &LateralCoefficients, fz: f64, slip_angle: f64, camber: f64) -> f64 {
    LateralFactors::derive(coefficients, fz, camber).force(slip_angle)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use crate::coefficients::LateralCoefficients;
    use crate::lateral::{pure_lateral_force, LateralFactors};

    const COEFFS: LateralCoefficients = LateralCoefficients::DEFAULT;

    #[test]
    fn factors_at_2kn() {
        let f = LateralFactors::derive(&COEFFS, 2.0, 0.0);
        assert_relative_eq!(f.peak, 1933.6, max_relative = 1e-12);
        assert_eq!(f.shape, 1.30);
        assert_relative_eq!(f.stiffness, 0.2819677779753134, max_relative = 1e-12);
        assert_relative_eq!(f.curvature, -0.001, max_relative = 1e-9);
        assert_eq!(f.horizontal_shift, 0.0);
        assert_eq!(f.vertical_shift, 0.0);
    }

    #[test]
    fn camber_shifts() {
        let f = LateralFactors::derive(&COEFFS, 4.0, 2f64.to_radians());
        assert_relative_eq!(f.stiffness, 0.2139742556689617, max_relative = 1e-12);
        assert_relative_eq!(f.horizontal_shift, 0.0009773843811168245, max_relative = 1e-12);
        assert_relative_eq!(f.vertical_shift, 2.0664698343612864, max_relative = 1e-12);
    }

    #[test]
    fn side_force_regression() {
        assert_relative_eq!(pure_lateral_force(&COEFFS, 2.0, 5f64.to_radians(), 0.0),
                            1829.153426565693, max_relative = 1e-10);
        assert_relative_eq!(pure_lateral_force(&COEFFS, 4.0, 5f64.to_radians(), 2f64.to_radians()),
                            3630.640717185396, max_relative = 1e-10);
        assert_relative_eq!(pure_lateral_force(&COEFFS, 2.0, 0.0, 3f64.to_radians()),
                            2.5877762939810527, max_relative = 1e-9);
    }

    #[test]
    fn phi_uses_degrees_linear_and_radians_in_arctangent() {
        let straight = LateralFactors {
            peak: 1.0, shape: 1.30, stiffness: 0.5, curvature: 0.0, horizontal_shift: 0.0, vertical_shift: 0.0
        };
        assert_relative_eq!(straight.phi(5f64.to_radians()), 5.0, max_relative = 1e-12);

        let curved = LateralFactors { curvature: 1.0, ..straight };
        let alpha = 5f64.to_radians();
        assert_relative_eq!(curved.phi(alpha), (0.5 * alpha).atan() / 0.5, max_relative = 1e-12);
    }

    #[test]
    fn odd_symmetry_without_camber() {
        for fz in [2.0, 4.0, 6.0, 8.0] {
            for alpha_deg in [0.5, 1.0, 3.0, 5.0, 10.0] {
                let alpha = f64::to_radians(alpha_deg);
                let pos = pure_lateral_force(&COEFFS, fz, alpha, 0.0);
                let neg = pure_lateral_force(&COEFFS, fz, -alpha, 0.0);
                assert!(pos.is_finite());
                assert_relative_eq!(neg, -pos, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn no_slip_no_camber_gives_zero() {
        for fz in [2.0, 4.0, 6.0, 8.0] {
            assert_eq!(pure_lateral_force(&COEFFS, fz, 0.0, 0.0), 0.0);
        }
    }

    #[test]
    fn zero_load_is_not_finite() {
        let fy = pure_lateral_force(&COEFFS, 0.0, 5f64.to_radians(), 0.0);
        assert!(!fy.is_finite());
    }
}
