/*
 * Copyright (c):
 * 2024 zephyrj
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

pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s^2

pub fn kn_to_n(force_kn: f64) -> f64 {
    force_kn * 1000.0
}

/// Static vertical load on one wheel (kN) for a vehicle of `mass_kg`
/// spread evenly over `num_wheels`
pub fn wheel_load_kn(mass_kg: f64, num_wheels: u32) -> f64 {
    mass_kg * STANDARD_GRAVITY / (num_wheels as f64 * 1000.0)
}
