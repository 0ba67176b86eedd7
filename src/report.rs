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

use std::io;
use std::io::Write;
use tracing::info;
use tyre_model::OperatingPoint;
use utils::numeric::round_float_to;
use utils::units::kn_to_n;
use crate::cli::ResolvedInputs;

pub fn write_report<W: Write>(out: &mut W, inputs: &ResolvedInputs, operating_point: &OperatingPoint) -> io::Result<()> {
    let wheel_load_n = round_float_to(kn_to_n(operating_point.wheel_load_kn()), 0);
    info!("Resolved inputs {:?}, wheel load {}N", inputs, wheel_load_n);
    writeln!(out, "veh_mass = {:?}kg", inputs.veh_mass)?;
    writeln!(out, "Vertical load Fz = {}N", wheel_load_n)?;
    writeln!(out, "Slip = {:?}°", inputs.alpha)?;
    writeln!(out, "Camber = {:?}°", inputs.gamma)?;
    writeln!(out, "my = {:?}", inputs.my)?;
    Ok(())
}
