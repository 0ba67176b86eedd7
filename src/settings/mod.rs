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

pub mod defaults;

use std::path::{Path, PathBuf};
use config::{Config, ConfigError};
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::chart::ChartOptions;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GlobalSettings {
    defaults_path: String,
    chart_path: String,
    chart_width: u32,
    chart_height: u32,
    coefficients_path: Option<String>
}

impl GlobalSettings {
    const DEFAULTS_PATH: &'static str = "defaults_path";
    const CHART_PATH: &'static str = "chart_path";
    const CHART_WIDTH: &'static str = "chart_width";
    const CHART_HEIGHT: &'static str = "chart_height";
    const CONFIG_FILENAME: &'static str = "side-brake-force-conf";
    const ENV_PREFIX: &'static str = "SBF";

    const DEFAULT_DEFAULTS_PATH: &'static str = "Readme.txt";
    const DEFAULT_CHART_PATH: &'static str = "side_and_brake_force.svg";
    const DEFAULT_CHART_WIDTH: u32 = 1024;
    const DEFAULT_CHART_HEIGHT: u32 = 768;

    /// Built-in defaults, then `side-brake-force-conf.toml` if present, then
    /// `SBF_*` environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let builder = GlobalSettings::with_defaults(Config::builder())?
            .add_source(config::File::with_name(GlobalSettings::CONFIG_FILENAME).required(false))
            .add_source(config::Environment::with_prefix(GlobalSettings::ENV_PREFIX));
        return match GlobalSettings::from_builder(builder) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                GlobalSettings::from_builder(GlobalSettings::with_defaults(Config::builder())?)
            }
        }
    }

    fn with_defaults(builder: ConfigBuilder<DefaultState>) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default(GlobalSettings::DEFAULTS_PATH, GlobalSettings::DEFAULT_DEFAULTS_PATH)?
            .set_default(GlobalSettings::CHART_PATH, GlobalSettings::DEFAULT_CHART_PATH)?
            .set_default(GlobalSettings::CHART_WIDTH, GlobalSettings::DEFAULT_CHART_WIDTH as i64)?
            .set_default(GlobalSettings::CHART_HEIGHT, GlobalSettings::DEFAULT_CHART_HEIGHT as i64)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn defaults_path(&self) -> PathBuf {
        PathBuf::from(&self.defaults_path)
    }

    pub fn set_defaults_path(&mut self, new_path: &Path) {
        self.defaults_path = new_path.to_string_lossy().into_owned();
    }

    pub fn chart_path(&self) -> PathBuf {
        PathBuf::from(&self.chart_path)
    }

    pub fn set_chart_path(&mut self, new_path: &Path) {
        self.chart_path = new_path.to_string_lossy().into_owned();
    }

    pub fn coefficients_path(&self) -> Option<PathBuf> {
        self.coefficients_path.as_ref().map(PathBuf::from)
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            path: self.chart_path(),
            width: self.chart_width,
            height: self.chart_height
        }
    }
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            defaults_path: GlobalSettings::DEFAULT_DEFAULTS_PATH.to_string(),
            chart_path: GlobalSettings::DEFAULT_CHART_PATH.to_string(),
            chart_width: GlobalSettings::DEFAULT_CHART_WIDTH,
            chart_height: GlobalSettings::DEFAULT_CHART_HEIGHT,
            coefficients_path: None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use config::{Config, FileFormat};
    use crate::settings::GlobalSettings;

    #[test]
    fn defaults_without_config_file() {
        let settings = GlobalSettings::from_builder(
            GlobalSettings::with_defaults(Config::builder()).unwrap()
        ).unwrap();
        assert_eq!(settings, GlobalSettings::default());
        assert_eq!(settings.defaults_path(), PathBuf::from("Readme.txt"));
        assert_eq!(settings.coefficients_path(), None);
        let options = settings.chart_options();
        assert_eq!(options.path, PathBuf::from("side_and_brake_force.svg"));
        assert_eq!((options.width, options.height), (1024, 768));
    }

    #[test]
    fn config_file_overrides_defaults() {
        let data = r#"
chart_path = "curves.svg"
chart_width = 1600
coefficients_path = "tyres/soft.toml"
"#;
        let builder = GlobalSettings::with_defaults(Config::builder()).unwrap()
            .add_source(config::File::from_str(data, FileFormat::Toml));
        let settings = GlobalSettings::from_builder(builder).unwrap();
        assert_eq!(settings.chart_path(), PathBuf::from("curves.svg"));
        assert_eq!(settings.chart_options().width, 1600);
        assert_eq!(settings.chart_options().height, 768);
        assert_eq!(settings.coefficients_path(), Some(PathBuf::from("tyres/soft.toml")));
        assert_eq!(settings.defaults_path(), PathBuf::from("Readme.txt"));
    }

    #[test]
    fn setters_override_paths() {
        let mut settings = GlobalSettings::default();
        settings.set_defaults_path(Path::new("other/Readme.txt"));
        settings.set_chart_path(Path::new("out.svg"));
        assert_eq!(settings.defaults_path(), PathBuf::from("other/Readme.txt"));
        assert_eq!(settings.chart_path(), PathBuf::from("out.svg"));
    }
}
