use crate::stats::linreg::LinReg;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fitted exponential model. Immutable once trained, copy it freely.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpReg {
    /// a in y = a * exp(b * x)
    pub a: f64,
    /// b in y = a * exp(b * x)
    pub b: f64,
}

impl fmt::Display for ExpReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y={}*e^({}*x)", self.a, self.b)
    }
}

impl ExpReg {
    pub fn new() -> Self {
        Self { a: 1.0, b: 0.0 }
    }

    pub fn from_val(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Evaluate y = a * exp(b * x)
    pub fn predict(&self, x: f64) -> f64 {
        self.a * (self.b * x).exp()
    }
    /// dy/dx = a * b * exp(b * x)
    pub fn derivative(&self, x: f64) -> f64 {
        self.a * self.b * (self.b * x).exp()
    }

    /// The same model in log space: ln(y) = ln(a) + b * x
    pub fn log_linear(&self) -> LinReg {
        LinReg::from_val(self.a.ln(), self.b)
    }

    /// Formula text, e.g. `y=2*e^(0.5*x)`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Closure form of the predictor. Every call emits the formula as a
    /// debug event before returning the same value as [`ExpReg::predict`].
    pub fn into_fn(self) -> impl Fn(f64) -> f64 {
        move |x| {
            tracing::debug!(target: "expreg_core::predict", a = self.a, b = self.b, "{}", self);
            self.predict(x)
        }
    }

    /// Train from (x, y) data with no input checks.
    /// Uses log-transform: ln(y) = ln(a) + b * x
    ///
    /// Non-positive y, constant x or y, or fewer than two points all come
    /// back as non-finite parameters. Use [`crate::regression::fit_exponential`]
    /// for the checked version.
    ///
    /// # Panics
    ///
    /// Panics if `x` and `y` differ in length.
    pub fn train(x: &[f64], y: &[f64]) -> Self {
        let z: Vec<f64> = y.iter().map(|v| v.ln()).collect();

        let lin = LinReg::train(x, &z);

        Self { a: lin.intercept.exp(), b: lin.slope }
    }
}

impl Default for ExpReg {
    fn default() -> Self {
        Self::new()
    }
}
