#![cfg(test)]
use std::{
    io,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use uuid::Uuid;

use crate::shop::ShopService;
use crate::storage::{FileStore, FsFileStore};

/// Local-disk store whose deletes can be switched to fail.
#[derive(Default)]
pub struct FlakyFileStore {
    inner: FsFileStore,
    fail_deletes: AtomicBool,
}

impl FlakyFileStore {
    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl FileStore for FlakyFileStore {
    async fn exists(&self, path: &Path) -> io::Result<bool> { self.inner.exists(path).await }

    async fn read_text(&self, path: &Path) -> io::Result<String> { self.inner.read_text(path).await }

    async fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        self.inner.write_text(path, content).await
    }

    async fn delete(&self, path: &Path) -> io::Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "delete disabled by test"));
        }
        self.inner.delete(path).await
    }

    async fn list_names(&self, dir: &Path) -> io::Result<Vec<String>> { self.inner.list_names(dir).await }
}

/// `ShopService` over a fresh temp directory, removed on drop.
pub struct TestShop {
    pub service: ShopService,
    pub files: Arc<FlakyFileStore>,
    root: PathBuf,
}

impl TestShop {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("shop_service_{}", Uuid::new_v4()));
        let files = Arc::new(FlakyFileStore::default());
        let service = ShopService::new(files.clone(), root.join("carts"), root.join("products"));
        Self { service, files, root }
    }

    pub async fn cart_file_names(&self) -> io::Result<Vec<String>> {
        self.files.list_names(self.service.carts_store().dir()).await
    }

    pub async fn product_file_names(&self) -> io::Result<Vec<String>> {
        self.files.list_names(self.service.products_store().dir()).await
    }
}

impl Drop for TestShop {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
