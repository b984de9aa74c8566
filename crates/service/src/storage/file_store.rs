use std::{
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

/// Filesystem operations the record stores rely on.
/// Implementations can be local disk, in-memory, or remote object storage.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn exists(&self, path: &Path) -> io::Result<bool>;
    /// Fails with `ErrorKind::NotFound` when the file is absent.
    async fn read_text(&self, path: &Path) -> io::Result<String>;
    /// Create or overwrite.
    async fn write_text(&self, path: &Path, content: &str) -> io::Result<()>;
    async fn delete(&self, path: &Path) -> io::Result<()>;
    /// File names (not paths) in `dir`; empty when the directory is missing.
    async fn list_names(&self, dir: &Path) -> io::Result<Vec<String>>;
}

// Hidden and without the `.json` suffix, so listings skip it.
fn temp_sibling(path: &Path) -> io::Result<PathBuf> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    Ok(path.with_file_name(format!(".{name}.{}.tmp", Uuid::new_v4().simple())))
}

/// `FileStore` backed by `tokio::fs`.
#[derive(Debug, Clone, Default)]
pub struct FsFileStore;

impl FsFileStore {
    pub fn new() -> Self { Self }
}

#[async_trait]
impl FileStore for FsFileStore {
    async fn exists(&self, path: &Path) -> io::Result<bool> {
        fs::try_exists(path).await
    }

    async fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path).await
    }

    /// Writes a sibling temp file and renames it over `path`, so readers see
    /// either the old or the new content, never a partial file.
    async fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let tmp = temp_sibling(path)?;
        if let Err(e) = fs::write(&tmp, content).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp, path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e);
        }
        Ok(())
    }

    async fn delete(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path).await
    }

    async fn list_names(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut entries = match fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }
}
