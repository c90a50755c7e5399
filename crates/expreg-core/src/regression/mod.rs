pub mod batch;
pub mod exponential;
pub mod fiterror;
pub mod fitoptions;

pub use batch::fit_batch;
pub use exponential::{fit_exponential, fit_exponential_with};
pub use fiterror::{FitError, FitResult};
pub use fitoptions::{DegeneratePolicy, FitOptions, OptionsError};
