pub mod engine;
pub mod ifsc;

pub use crate::domain::model::{BranchDetails, IfscCode, TxtRecord};
pub use crate::domain::ports::{ConfigProvider, Service};
pub use crate::utils::error::Result;
