pub mod expreg;
pub mod linreg;
pub mod stats;

pub use expreg::ExpReg;
pub use linreg::LinReg;
pub use stats::{mean, pearson_correlation, sample_std_dev};
