pub mod sort;
pub mod time;

pub use crate::domain::model::SortKind;
pub use crate::domain::ports::{FileStore, PermissionPlatform};
pub use crate::utils::error::Result;
