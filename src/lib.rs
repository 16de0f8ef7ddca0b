pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{file_manager::FileManager, local_fs::LocalFileStore, permissions::PermissionManager};
pub use crate::core::sort::sort;
pub use crate::core::time::{TimeField, TimeValue};
pub use domain::model::SortKind;
pub use utils::error::{Result, UtilsError};
