pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::LookupConfig;
pub use crate::core::{engine::LookupEngine, ifsc::IfscService};
pub use domain::model::{IfscCode, TxtRecord};
pub use domain::ports::Service;
pub use utils::error::{IfscError, Result};
