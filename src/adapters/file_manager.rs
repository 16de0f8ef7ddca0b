use crate::core::FileStore;
use crate::utils::error::{Result, UtilsError};
use crate::utils::validation::validate_entry_name;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Creates folders and files through a [`FileStore`] and remembers what it created.
///
/// The registries belong to this instance; two managers never see each other's entries.
/// Entries are keyed by name, so registering the same name twice keeps the latest path.
#[derive(Debug)]
pub struct FileManager<S: FileStore> {
    store: S,
    created_files: HashMap<String, PathBuf>,
    created_folders: HashMap<String, PathBuf>,
}

impl<S: FileStore> FileManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            created_files: HashMap::new(),
            created_folders: HashMap::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates `parent/name` unless it already exists and registers it under `name`.
    pub fn create_folder(&mut self, parent: impl AsRef<Path>, name: &str) -> Result<PathBuf> {
        let parent = parent.as_ref();
        if parent.as_os_str().is_empty() {
            return Err(UtilsError::InvalidName {
                name: name.to_string(),
                reason: "folder path cannot be empty".to_string(),
            });
        }
        validate_entry_name(name)?;

        let folder = parent.join(name);
        if !self.store.create_dir_if_absent(&folder)? {
            tracing::warn!(
                "Folder \"{}\" was not created. Does it already exist?",
                name
            );
        } else {
            tracing::debug!(path = %folder.display(), "created folder");
        }

        self.created_folders.insert(name.to_string(), folder.clone());
        Ok(folder)
    }

    /// Creates `folder/name` unless it already exists and registers it under `name`.
    pub fn create_file(&mut self, folder: impl AsRef<Path>, name: &str) -> Result<PathBuf> {
        validate_entry_name(name)?;

        let file = folder.as_ref().join(name);
        if !self.store.create_file_if_absent(&file)? {
            tracing::warn!("File \"{}\" was not created. Does it already exist?", name);
        } else {
            tracing::debug!(path = %file.display(), "created file");
        }

        self.created_files.insert(name.to_string(), file.clone());
        Ok(file)
    }

    pub fn created_folder(&self, name: &str) -> Option<&Path> {
        self.created_folders.get(name).map(PathBuf::as_path)
    }

    pub fn created_file(&self, name: &str) -> Option<&Path> {
        self.created_files.get(name).map(PathBuf::as_path)
    }

    pub fn created_folders(&self) -> &HashMap<String, PathBuf> {
        &self.created_folders
    }

    pub fn created_files(&self) -> &HashMap<String, PathBuf> {
        &self.created_files
    }

    pub fn read_lines(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        self.store.read_lines(path.as_ref())
    }

    /// Writes one record per line, appending or overwriting. No records, no write.
    pub fn print<R: AsRef<str>>(&self, path: impl AsRef<Path>, append: bool, records: &[R]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }
        let lines: Vec<String> = records.iter().map(|r| r.as_ref().to_string()).collect();
        self.store.write_lines(path.as_ref(), &lines, append)
    }
}
