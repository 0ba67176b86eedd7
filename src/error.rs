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

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("io error. {0}")]
    IoError(#[from] io::Error),
    #[error("settings error. {0}")]
    SettingsError(#[from] config::ConfigError),
    #[error("bad defaults pattern. {0}")]
    PatternError(#[from] regex::Error),
    #[error("failed to read defaults file `{0}`. {1}")]
    DefaultsFile(String, String),
    #[error("{0}")]
    ModelError(#[from] tyre_model::Error),
    #[error("failed to draw chart `{0}`. {1}")]
    Chart(String, String),
    #[error("failed to write csv `{0}`. {1}")]
    Csv(String, String)
}
