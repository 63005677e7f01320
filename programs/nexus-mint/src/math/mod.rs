pub mod calculator;
pub mod fees;

pub use calculator::MintCalculator;
pub use fees::{Fees, FEE_RATE_DENOMINATOR_VALUE};
