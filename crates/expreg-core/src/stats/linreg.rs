use crate::stats::stats::{mean, pearson_correlation, sample_std_dev};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Least-squares line `y = intercept + slope * x`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinReg {
    pub intercept: f64,
    pub slope: f64,
}

impl fmt::Display for LinReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y={}+{}*x", self.intercept, self.slope)
    }
}

impl Default for LinReg {
    fn default() -> Self {
        Self::new()
    }
}

impl LinReg {
    pub fn new() -> Self {
        Self { intercept: 0., slope: 0. }
    }
    pub fn calculate(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
    pub fn from_val(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// OLS through the correlation identity `slope = r * s_y / s_x`.
    ///
    /// No checks: constant x or y, or fewer than two points, give a
    /// non-finite slope and intercept.
    ///
    /// # Panics
    ///
    /// Panics if `x` and `y` differ in length.
    pub fn train(x: &[f64], y: &[f64]) -> Self {
        let r = pearson_correlation(x, y);
        let slope = r * sample_std_dev(y) / sample_std_dev(x);
        let intercept = mean(y) - slope * mean(x);

        Self { intercept, slope }
    }
}
