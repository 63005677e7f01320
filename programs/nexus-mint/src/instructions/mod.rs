pub mod batch_convert;
pub mod convert;
pub mod emergency_withdraw;
pub mod initialise_configs;
pub mod retire;
pub mod set_verifier;
pub mod submit_waste;
pub mod update_configs;
pub mod verify_conversion;
pub mod verify_waste;

pub use batch_convert::*;
pub use convert::*;
pub use emergency_withdraw::*;
pub use initialise_configs::*;
pub use retire::*;
pub use set_verifier::*;
pub use submit_waste::*;
pub use update_configs::*;
pub use verify_conversion::*;
pub use verify_waste::*;
