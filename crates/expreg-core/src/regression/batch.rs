use crate::regression::exponential::fit_exponential_with;
use crate::regression::fiterror::FitResult;
use crate::regression::fitoptions::FitOptions;
use crate::stats::ExpReg;

use rayon::prelude::*;

/// Fit many independent (x, y) datasets in parallel.
///
/// Results come back in input order, one per dataset. A bad dataset only
/// fails its own slot.
pub fn fit_batch(
    datasets: &[(Vec<f64>, Vec<f64>)],
    options: &FitOptions,
) -> Vec<FitResult<ExpReg>> {
    datasets.par_iter().map(|(x, y)| fit_exponential_with(x, y, options)).collect()
}
