//! Exponential regression `y = a * e^(b * x)` by log-linearization.
//!
//! ```
//! use expreg_core::fit_exponential;
//!
//! let x = [1., 3., 7., 9., 11., 14.];
//! let y = [19., 16., 13., 12., 11.2, 10.3];
//!
//! let model = fit_exponential(&x, &y).unwrap();
//! assert!((model.predict(20.) - 7.42).abs() < 0.05);
//! println!("{model}");
//! ```

pub mod regression;
pub mod stats;

#[cfg(test)]
mod test_support;

pub use regression::{
    fit_batch, fit_exponential, fit_exponential_with, DegeneratePolicy, FitError, FitOptions,
    FitResult,
};
pub use stats::{mean, pearson_correlation, sample_std_dev, ExpReg, LinReg};
