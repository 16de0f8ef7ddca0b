use crate::domain::model::StoragePermission;
use crate::utils::error::Result;
use std::path::Path;

/// Filesystem primitives the file manager is composed with.
pub trait FileStore {
    /// Returns `true` when the directory was newly created.
    fn create_dir_if_absent(&self, path: &Path) -> Result<bool>;

    /// Returns `true` when the file was newly created.
    fn create_file_if_absent(&self, path: &Path) -> Result<bool>;

    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;

    fn write_lines(&self, path: &Path, lines: &[String], append: bool) -> Result<()>;
}

/// Host platform hooks for storage permissions. The embedding application implements
/// this on top of its native permission APIs.
pub trait PermissionPlatform {
    fn sdk_version(&self) -> u32;

    fn is_external_storage_manager(&self) -> bool;

    fn is_granted(&self, permission: StoragePermission) -> bool;

    fn package_name(&self) -> String;

    /// Opens the all-files-access screen for this package.
    fn open_app_all_files_settings(&self, package: &str, request_code: i32) -> Result<()>;

    /// Opens the generic all-files-access screen.
    fn open_all_files_settings(&self, request_code: i32) -> Result<()>;

    fn request_permissions(&self, permissions: &[StoragePermission], request_code: i32) -> Result<()>;
}
