use serde::{Deserialize, Serialize};

/// What a fit does with input the math cannot handle: fewer than two
/// points, constant x, or constant y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Return a typed [`crate::regression::FitError`].
    #[default]
    Reject,
    /// Return the model anyway, carrying whatever NaN or infinity the
    /// arithmetic produced.
    Propagate,
}

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("invalid fit options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for [`crate::regression::fit_exponential_with`].
///
/// Length mismatches, non-finite input and non-positive y are always
/// rejected, whatever the policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitOptions {
    pub degenerate: DegeneratePolicy,
}

impl FitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_degenerate(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    /// Parse options from JSON such as `{"degenerate": "propagate"}`.
    /// Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(s)?)
    }
}
