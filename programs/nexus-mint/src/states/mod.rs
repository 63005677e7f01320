pub mod conversion_record;
pub mod events;
pub mod global_config;
pub mod stats;
pub mod verifier_info;
pub mod waste_submission;

pub use conversion_record::*;
pub use events::*;
pub use global_config::*;
pub use stats::*;
pub use verifier_info::*;
pub use waste_submission::*;
