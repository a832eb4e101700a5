pub mod classifier;
pub mod value;

pub use classifier::{classify, determine_severity, status_message};
pub use value::ErrorValue;
