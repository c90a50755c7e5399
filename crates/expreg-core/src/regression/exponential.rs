use crate::regression::fiterror::{FitError, FitResult};
use crate::regression::fitoptions::{DegeneratePolicy, FitOptions};
use crate::stats::ExpReg;

/// Fit y = a * exp(b * x) with the default options.
///
/// Degenerate input (fewer than two points, constant x, constant y) is
/// rejected with a typed error. See [`fit_exponential_with`] to get the raw
/// non-finite parameters instead.
pub fn fit_exponential(x: &[f64], y: &[f64]) -> FitResult<ExpReg> {
    fit_exponential_with(x, y, &FitOptions::default())
}

pub fn fit_exponential_with(x: &[f64], y: &[f64], options: &FitOptions) -> FitResult<ExpReg> {
    let result = checked_fit(x, y, options);

    match &result {
        Ok(model) => tracing::debug!(
            n = x.len(),
            a = model.a,
            b = model.b,
            formula = %model,
            "fitted exponential model"
        ),
        Err(e) => tracing::debug!(error = %e, "exponential fit rejected"),
    }

    result
}

fn checked_fit(x: &[f64], y: &[f64], options: &FitOptions) -> FitResult<ExpReg> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch { len_x: x.len(), len_y: y.len() });
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(FitError::NonFiniteInput { input: "x" });
    }
    if y.iter().any(|v| !v.is_finite()) {
        return Err(FitError::NonFiniteInput { input: "y" });
    }
    if let Some((index, &value)) = y.iter().enumerate().find(|(_, v)| **v <= 0.0) {
        return Err(FitError::NonPositiveY { index, value });
    }

    if options.degenerate == DegeneratePolicy::Propagate {
        return Ok(ExpReg::train(x, y));
    }

    if x.len() < 2 {
        return Err(FitError::NotEnoughPoints { len: x.len(), needed: 2 });
    }
    if is_constant(x) {
        return Err(FitError::DegenerateX);
    }
    // distinct large y can still share one ln(y)
    let z: Vec<f64> = y.iter().map(|v| v.ln()).collect();
    if is_constant(&z) {
        return Err(FitError::DegenerateY);
    }

    let model = ExpReg::train(x, y);
    if !model.a.is_finite() || !model.b.is_finite() {
        return Err(FitError::NonFiniteParameters { a: model.a, b: model.b });
    }

    Ok(model)
}

fn is_constant(data: &[f64]) -> bool {
    data.iter().all(|&v| v == data[0])
}
