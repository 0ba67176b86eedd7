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

use utils::units::wheel_load_kn;
use crate::error::{Error, ErrorKind, Result};

/// The fixed conditions a set of force curves is evaluated at.
///
/// Angles are held in radians; use [`OperatingPoint::from_degrees`] to build one
/// from user input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperatingPoint {
    vehicle_mass: f64,
    slip_angle: f64,
    camber_angle: f64,
    friction_coefficient: f64,
}

impl OperatingPoint {
    pub const NUM_WHEELS: u32 = 4;

    pub fn try_new(vehicle_mass: f64,
                   slip_angle: f64,
                   camber_angle: f64,
                   friction_coefficient: f64) -> Result<OperatingPoint>
    {
        for (name, val) in [("veh_mass", vehicle_mass),
                            ("alpha", slip_angle),
                            ("gamma", camber_angle),
                            ("my", friction_coefficient)] {
            if !val.is_finite() {
                return Err(Error::new(ErrorKind::InvalidInput,
                                      format!("{} must be a finite number, got {}", name, val)));
            }
        }
        Ok(OperatingPoint { vehicle_mass, slip_angle, camber_angle, friction_coefficient })
    }

    pub fn from_degrees(vehicle_mass: f64,
                        slip_angle_deg: f64,
                        camber_angle_deg: f64,
                        friction_coefficient: f64) -> Result<OperatingPoint>
    {
        OperatingPoint::try_new(vehicle_mass,
                                slip_angle_deg.to_radians(),
                                camber_angle_deg.to_radians(),
                                friction_coefficient)
    }

    /// Vehicle mass in kg
    pub fn vehicle_mass(&self) -> f64 {
        self.vehicle_mass
    }

    /// Slip angle in radians
    pub fn slip_angle(&self) -> f64 {
        self.slip_angle
    }

    /// Camber angle in radians
    pub fn camber_angle(&self) -> f64 {
        self.camber_angle
    }

    /// Not used by the force equations
    pub fn friction_coefficient(&self) -> f64 {
        self.friction_coefficient
    }

    /// Static vertical load of one wheel in kN
    pub fn wheel_load_kn(&self) -> f64 {
        wheel_load_kn(self.vehicle_mass, OperatingPoint::NUM_WHEELS)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use crate::error::ErrorKind;
    use crate::operating_point::OperatingPoint;

    #[test]
    fn angles_are_converted_to_radians() {
        let op = OperatingPoint::from_degrees(1500.0, 5.0, -2.0, 1.0).unwrap();
        assert_abs_diff_eq!(op.slip_angle(), 0.08726646259971647, epsilon = 1e-15);
        assert_abs_diff_eq!(op.camber_angle(), -0.03490658503988659, epsilon = 1e-15);
        assert_eq!(op.vehicle_mass(), 1500.0);
        assert_eq!(op.friction_coefficient(), 1.0);
    }

    #[test]
    fn wheel_load_from_mass() {
        let op = OperatingPoint::from_degrees(1500.0, 5.0, 0.0, 1.0).unwrap();
        assert_abs_diff_eq!(op.wheel_load_kn(), 3.67749375, epsilon = 1e-12);
        assert_eq!((op.wheel_load_kn() * 1000.0).round(), 3677.0);
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let err = OperatingPoint::from_degrees(f64::NAN, 5.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("veh_mass"));
        let err = OperatingPoint::try_new(1500.0, 0.0, f64::INFINITY, 1.0).unwrap_err();
        assert!(err.to_string().contains("gamma"));
    }
}
