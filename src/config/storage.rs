use crate::core::Storage;
use crate::utils::error::{Result, SuiteError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn create_dir(&self, path: &str) -> Result<()> {
        let full_path = self.base_path.join(path);
        fs::create_dir_all(&full_path)?;
        Ok(())
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);
        let parent = full_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(parent)?;

        // Write beside the target, then swap it in
        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(data)?;
        temp.as_file().sync_all()?;
        temp.persist(&full_path)
            .map_err(|e| SuiteError::IoError(e.error))?;

        tracing::debug!("Replaced {}", full_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_dir_is_recursive_and_repeatable() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("out"));

        storage.create_dir("suite").await.unwrap();
        storage.create_dir("suite").await.unwrap();

        assert!(temp_dir.path().join("out").join("suite").is_dir());
    }

    #[tokio::test]
    async fn test_write_file_replaces_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        let target = temp_dir.path().join("suite.json");
        fs::write(&target, b"[{\"expr\":\"old\"}, ...a much longer old payload...]").unwrap();

        storage.write_file("suite.json", b"[]").await.unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"[]");
        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("suite.json")]);
    }

    #[tokio::test]
    async fn test_write_file_creates_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("a").join("b"));

        storage.write_file("suite.json", b"[]").await.unwrap();

        assert!(temp_dir.path().join("a/b/suite.json").is_file());
    }

    #[tokio::test]
    async fn test_failed_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        let target = temp_dir.path().join("suite.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), b"old").unwrap();

        let err = storage.write_file("suite.json", b"[]").await.unwrap_err();

        assert!(matches!(err, SuiteError::IoError(_)));
        assert_eq!(fs::read(target.join("keep.txt")).unwrap(), b"old");
        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("suite.json")]);
    }
}
