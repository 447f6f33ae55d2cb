pub mod error;
pub mod logger;
pub mod validation;

pub use error::{DevToolsError, Result};
pub use validation::Validate;
