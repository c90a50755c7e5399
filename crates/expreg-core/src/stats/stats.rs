/// Arithmetic mean. Empty input is a caller bug and comes back as NaN (0 / 0).
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample standard deviation with the unbiased n - 1 denominator.
///
/// Needs at least two values. A single value divides zero by zero and the
/// NaN is returned as is, it is not turned into 0.
pub fn sample_std_dev(data: &[f64]) -> f64 {
    let mean_x = mean(data);
    let sum_squares: f64 = data.iter().map(|&xi| (xi - mean_x).powi(2)).sum();

    (sum_squares / (data.len() as f64 - 1.0)).sqrt()
}

/// Signed Pearson correlation coefficient of two equal length sequences.
///
/// A constant sequence makes the denominator zero and the result NaN.
///
/// # Panics
///
/// Panics if `x` and `y` differ in length.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    assert!(x.len() == y.len(), "Input vectors x and y must have the same length");

    let mean_x = mean(x);
    let mean_y = mean(y);

    let numerator: f64 =
        x.iter().zip(y.iter()).map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y)).sum();

    let sum_squares_x: f64 = x.iter().map(|&xi| (xi - mean_x).powi(2)).sum();
    let sum_squares_y: f64 = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum();

    let denominator = (sum_squares_x * sum_squares_y).sqrt();

    numerator / denominator
}
