// Adapters layer: concrete implementations of the domain ports.

pub mod file_manager;
pub mod local_fs;
pub mod permissions;
