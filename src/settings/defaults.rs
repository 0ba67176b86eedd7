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
use std::io::ErrorKind;
use std::path::Path;
use regex::Regex;
use tracing::{info, warn};
use crate::error::AppError;

/// Operating point defaults scraped from a free-text readme.
///
/// Each value is taken from the first line that matches its pattern:
/// - `Vehicle mass=<int>kg`
/// - `Slip=<int>°`
/// - `Camber=<int>°`
/// - `my=<int>`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DefaultValues {
    pub veh_mass: Option<f64>,
    pub alpha: Option<f64>,
    pub gamma: Option<f64>,
    pub my: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefaultKey {
    VehMass,
    Alpha,
    Gamma,
    My,
}

impl DefaultKey {
    fn as_str(&self) -> &'static str {
        match self {
            DefaultKey::VehMass => "veh_mass",
            DefaultKey::Alpha => "alpha",
            DefaultKey::Gamma => "gamma",
            DefaultKey::My => "my",
        }
    }
}

struct DefaultPattern {
    key: DefaultKey,
    regex: Regex,
}

impl DefaultValues {
    const PATTERNS: [(DefaultKey, &'static str); 4] = [
        (DefaultKey::VehMass, r"Vehicle mass=(\d+)kg"),
        (DefaultKey::Alpha, r"Slip=(\d+)°"),
        (DefaultKey::Gamma, r"Camber=(\d+)°"),
        (DefaultKey::My, r"my=(\d+)"),
    ];

    pub fn parse(text: &str) -> Result<DefaultValues, AppError> {
        let patterns = DefaultValues::PATTERNS
            .iter()
            .map(|&(key, pattern)| Ok(DefaultPattern { key, regex: Regex::new(pattern)? }))
            .collect::<Result<Vec<DefaultPattern>, regex::Error>>()?;

        let mut values = DefaultValues::default();
        for (line_idx, line) in text.lines().enumerate() {
            for pattern in &patterns {
                let Some(captures) = pattern.regex.captures(line) else {
                    continue;
                };
                let val: f64 = match captures[1].parse() {
                    Ok(v) => v,
                    Err(e) => {
                        warn!("Ignoring {} on line {}. {}", pattern.key.as_str(), line_idx + 1, e.to_string());
                        continue;
                    }
                };
                let slot = values.slot_mut(pattern.key);
                if let Some(existing) = *slot {
                    warn!("Ignoring duplicate {}={} on line {}, keeping {}",
                          pattern.key.as_str(), val, line_idx + 1, existing);
                } else {
                    *slot = Some(val);
                }
            }
        }
        Ok(values)
    }

    /// Read defaults from `path`. A missing file yields no defaults at all.
    pub fn load_from_path(path: &Path) -> Result<DefaultValues, AppError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                info!("Reading operating point defaults from {}", path.display());
                DefaultValues::parse(&text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Defaults file {} not found. All inputs must be given on the command line", path.display());
                Ok(DefaultValues::default())
            }
            Err(e) => Err(AppError::DefaultsFile(path.display().to_string(), e.to_string()))
        }
    }

    fn slot_mut(&mut self, key: DefaultKey) -> &mut Option<f64> {
        match key {
            DefaultKey::VehMass => &mut self.veh_mass,
            DefaultKey::Alpha => &mut self.alpha,
            DefaultKey::Gamma => &mut self.gamma,
            DefaultKey::My => &mut self.my,
        }
    }
}
