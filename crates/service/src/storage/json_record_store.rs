use std::{io, marker::PhantomData, path::PathBuf, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::file_store::FileStore;

const EXTENSION: &str = ".json";

/// One JSON file per record, named `{id}.json`, in a single directory.
///
/// There is no index: the directory listing is the set of records.
pub struct JsonRecordStore<V> {
    files: Arc<dyn FileStore>,
    dir: PathBuf,
    kind: &'static str,
    _marker: PhantomData<fn() -> V>,
}

impl<V> Clone for JsonRecordStore<V> {
    fn clone(&self) -> Self {
        Self {
            files: Arc::clone(&self.files),
            dir: self.dir.clone(),
            kind: self.kind,
            _marker: PhantomData,
        }
    }
}

impl<V> std::fmt::Debug for JsonRecordStore<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonRecordStore")
            .field("dir", &self.dir)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<V> JsonRecordStore<V>
where
    V: Serialize + DeserializeOwned,
{
    /// `kind` labels log lines (`"cart"`, `"product"`).
    pub fn new<P: Into<PathBuf>>(files: Arc<dyn FileStore>, dir: P, kind: &'static str) -> Self {
        Self { files, dir: dir.into(), kind, _marker: PhantomData }
    }

    pub fn dir(&self) -> &std::path::Path { &self.dir }

    pub fn kind(&self) -> &'static str { self.kind }

    pub fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}{EXTENSION}"))
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(self.files.exists(&self.path_for(id)).await?)
    }

    /// Read and parse one record; `None` when its file is absent.
    pub async fn load(&self, id: Uuid) -> Result<Option<V>, ServiceError> {
        match self.files.read_text(&self.path_for(id)).await {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Every record in listing order. Non-JSON files are ignored, as are files
    /// removed between listing and reading.
    pub async fn list(&self) -> Result<Vec<V>, ServiceError> {
        let names = self.files.list_names(&self.dir).await?;
        let mut values = Vec::with_capacity(names.len());

        for name in names.iter().filter(|n| n.ends_with(EXTENSION)) {
            let path = self.dir.join(name);
            match self.files.read_text(&path).await {
                Ok(text) => values.push(serde_json::from_str(&text)?),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!(kind = self.kind, file = %name, "record vanished while listing");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(values)
    }

    /// Serialize and write, replacing any previous content.
    pub async fn save(&self, id: Uuid, value: &V) -> Result<(), ServiceError> {
        let json = serde_json::to_string(value)?;
        self.files.write_text(&self.path_for(id), &json).await?;
        Ok(())
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        self.files.delete(&self.path_for(id)).await?;
        Ok(())
    }
}
