#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    #[error("x and y have different lengths: {len_x} vs {len_y}")]
    LengthMismatch { len_x: usize, len_y: usize },

    #[error("not enough points: got {len}, need at least {needed}")]
    NotEnoughPoints { len: usize, needed: usize },

    #[error("non-finite value in {input}")]
    NonFiniteInput { input: &'static str },

    #[error("exponential model requires all y > 0, got y[{index}] = {value}")]
    NonPositiveY { index: usize, value: f64 },

    #[error("degenerate x: no variance in x")]
    DegenerateX,

    #[error("degenerate y: no variance in ln(y)")]
    DegenerateY,

    #[error("fit produced non-finite parameters: a = {a}, b = {b}")]
    NonFiniteParameters { a: f64, b: f64 },
}

pub type FitResult<T> = Result<T, FitError>;

#[cfg(test)]
mod tests {
    use super::FitError;

    #[test]
    fn test_messages() {
        let err = FitError::LengthMismatch { len_x: 3, len_y: 2 };
        assert_eq!(err.to_string(), "x and y have different lengths: 3 vs 2");

        let err = FitError::NonPositiveY { index: 1, value: -2.5 };
        assert_eq!(err.to_string(), "exponential model requires all y > 0, got y[1] = -2.5");
    }
}
