pub mod config;
pub mod server;
pub mod utils;
pub mod version_check;

pub use config::{check::CheckConfig, ServeConfig};
pub use server::create_router;
pub use utils::error::{DevToolsError, Result};
pub use version_check::{check_workspace, CheckReport};
