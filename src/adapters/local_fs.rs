use crate::core::FileStore;
use crate::utils::error::Result;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// `std::fs` backed store. Relative paths are resolved against `base_path`.
#[derive(Debug, Clone, Default)]
pub struct LocalFileStore {
    base_path: PathBuf,
}

impl LocalFileStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl FileStore for LocalFileStore {
    fn create_dir_if_absent(&self, path: &Path) -> Result<bool> {
        let full_path = self.resolve(path);
        if full_path.exists() {
            return Ok(false);
        }
        fs::create_dir(&full_path)?;
        Ok(true)
    }

    fn create_file_if_absent(&self, path: &Path) -> Result<bool> {
        let full_path = self.resolve(path);
        match OpenOptions::new().write(true).create_new(true).open(&full_path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let file = fs::File::open(self.resolve(path))?;
        let lines = BufReader::new(file).lines().collect::<std::io::Result<Vec<_>>>()?;
        Ok(lines)
    }

    fn write_lines(&self, path: &Path, lines: &[String], append: bool) -> Result<()> {
        if lines.is_empty() {
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(self.resolve(path))?;

        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }
}
