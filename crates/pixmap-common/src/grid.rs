//! Grid specification for a temperature–pressure pixelmap source.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Specification of a regular temperature–pressure grid, as recovered from a
/// Theriak-Domino `pixinfo` file.
///
/// One `GridSpec` is produced per pixelmap directory and shared read-only by
/// every query against that directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSpec {
    /// Temperature range (min, max), typically °C
    pub temperature_range: (f64, f64),
    /// Pressure range (min, max), typically bar
    pub pressure_range: (f64, f64),
    /// Number of grid points along the temperature axis
    pub temperature_steps: usize,
    /// Number of grid points along the pressure axis
    pub pressure_steps: usize,
    /// Bulk composition string, recorded verbatim (not parsed further)
    pub bulk_composition: String,
    /// Names of the per-variable pixelmap files known to exist
    pub available_variable_files: BTreeSet<String>,
}

impl GridSpec {
    /// Total number of grid points. Every valid data file for this source
    /// flattens to exactly this length.
    pub fn len(&self) -> usize {
        self.temperature_steps * self.pressure_steps
    }

    /// Check if the grid is degenerate.
    pub fn is_empty(&self) -> bool {
        self.temperature_steps == 0 || self.pressure_steps == 0
    }

    /// Whether a pixelmap file with this name was listed in the metadata.
    pub fn contains_file(&self, name: &str) -> bool {
        self.available_variable_files.contains(name)
    }

    /// Temperature values at each grid point along the temperature axis.
    pub fn temperature_axis(&self) -> Vec<f64> {
        let (min, max) = self.temperature_range;
        linspace(min, max, self.temperature_steps)
    }

    /// Pressure values at each grid point along the pressure axis.
    pub fn pressure_axis(&self) -> Vec<f64> {
        let (min, max) = self.pressure_range;
        linspace(min, max, self.pressure_steps)
    }

    /// Outer-product mesh of the two axes, for isoline plotting.
    ///
    /// Returns `(t, p)` where both matrices are flattened row-major with
    /// `temperature_steps` rows and `pressure_steps` columns: `t` repeats the
    /// temperature value down each row, `p` repeats the pressure axis across
    /// every row.
    pub fn mesh(&self) -> (Vec<f64>, Vec<f64>) {
        let t_axis = self.temperature_axis();
        let p_axis = self.pressure_axis();

        let mut t = Vec::with_capacity(self.len());
        let mut p = Vec::with_capacity(self.len());
        for &tv in &t_axis {
            for &pv in &p_axis {
                t.push(tv);
                p.push(pv);
            }
        }
        (t, p)
    }
}

/// `n` evenly spaced values over `[min, max]`, endpoints included.
pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (n - 1) as f64;
            (0..n).map(|i| min + i as f64 * step).collect()
        }
    }
}
