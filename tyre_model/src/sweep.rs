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
use crate::error::{Error, ErrorKind, Result};

/// Uniformly spaced longitudinal slip ratios over [0, 1], both ends included
#[derive(Clone, Debug, PartialEq)]
pub struct SlipSweep {
    kappa: Array1<f64>,
}

impl SlipSweep {
    pub const NUM_SAMPLES: usize = 1001;

    pub fn new() -> SlipSweep {
        SlipSweep::with_samples(SlipSweep::NUM_SAMPLES)
    }

    pub fn with_samples(num_samples: usize) -> SlipSweep {
        SlipSweep { kappa: Array1::linspace(0.0, 1.0, num_samples) }
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.kappa
    }

    pub fn len(&self) -> usize {
        self.kappa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kappa.is_empty()
    }

    /// Slip expressed in percent, as drawn on the chart x-axis
    pub fn percent(&self) -> Array1<f64> {
        self.kappa.mapv(|k| k * 100.0)
    }
}

impl Default for SlipSweep {
    fn default() -> Self {
        SlipSweep::new()
    }
}

/// Vertical wheel loads (kN) to evaluate, kept in the order given
#[derive(Clone, Debug, PartialEq)]
pub struct LoadSweep {
    loads_kn: Vec<f64>,
}

impl LoadSweep {
    pub const DEFAULT_LOADS_KN: [f64; 4] = [2.0, 4.0, 6.0, 8.0];

    pub fn new(loads_kn: Vec<f64>) -> Result<LoadSweep> {
        if loads_kn.is_empty() {
            return Err(Error::new(ErrorKind::InvalidInput,
                                  "at least one vertical load is required".to_string()));
        }
        Ok(LoadSweep { loads_kn })
    }

    pub fn loads_kn(&self) -> &[f64] {
        &self.loads_kn
    }

    pub fn len(&self) -> usize {
        self.loads_kn.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads_kn.is_empty()
    }
}

impl Default for LoadSweep {
    fn default() -> Self {
        LoadSweep { loads_kn: LoadSweep::DEFAULT_LOADS_KN.to_vec() }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use crate::error::ErrorKind;
    use crate::sweep::{LoadSweep, SlipSweep};

    #[test]
    fn slip_sweep_includes_both_ends() {
        let sweep = SlipSweep::new();
        assert_eq!(sweep.len(), 1001);
        assert_eq!(sweep.values()[0], 0.0);
        assert_abs_diff_eq!(sweep.values()[1000], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sweep.values()[1], 0.001, epsilon = 1e-15);
        assert_abs_diff_eq!(sweep.values()[500], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn slip_sweep_is_uniform() {
        let sweep = SlipSweep::new();
        let kappa = sweep.values();
        for i in 1..kappa.len() {
            assert_abs_diff_eq!(kappa[i] - kappa[i - 1], 0.001, epsilon = 1e-12);
        }
    }

    #[test]
    fn slip_sweep_percent() {
        let percent = SlipSweep::new().percent();
        assert_eq!(percent[0], 0.0);
        assert_abs_diff_eq!(percent[1000], 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(percent[250], 25.0, epsilon = 1e-9);
    }

    #[test]
    fn load_sweep_keeps_order() {
        let loads = LoadSweep::new(vec![6.0, 2.0, 4.0]).unwrap();
        assert_eq!(loads.loads_kn(), &[6.0, 2.0, 4.0]);
        assert_eq!(loads.len(), 3);
        assert_eq!(LoadSweep::default().loads_kn(), &[2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn empty_load_sweep_is_rejected() {
        let err = LoadSweep::new(Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
