//! Cart and product operations over the file-backed record stores.
//!
//! Every operation reads the stores directly; nothing is cached between calls.
//! Mutations of one existing record run under that record's key lock.

mod carts;
mod products;

use std::{path::PathBuf, sync::Arc};

use models::{Cart, Product};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::{FileStore, JsonRecordStore, KeyLocks};

#[derive(Clone, Debug)]
pub struct ShopService {
    carts: JsonRecordStore<Cart>,
    products: JsonRecordStore<Product>,
    locks: KeyLocks,
}

impl ShopService {
    /// Directories are created lazily on first write.
    pub fn new<C, P>(files: Arc<dyn FileStore>, carts_dir: C, products_dir: P) -> Self
    where
        C: Into<PathBuf>,
        P: Into<PathBuf>,
    {
        Self {
            carts: JsonRecordStore::new(Arc::clone(&files), carts_dir, "cart"),
            products: JsonRecordStore::new(files, products_dir, "product"),
            locks: KeyLocks::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn carts_store(&self) -> &JsonRecordStore<Cart> { &self.carts }

    #[cfg(test)]
    pub(crate) fn products_store(&self) -> &JsonRecordStore<Product> { &self.products }

    async fn load_cart(&self, cart_id: Uuid) -> Result<Cart, ServiceError> {
        self.carts.load(cart_id).await?.ok_or_else(ServiceError::cart_not_found)
    }

    async fn load_product(&self, product_id: Uuid) -> Result<Product, ServiceError> {
        self.products
            .load(product_id)
            .await?
            .ok_or_else(ServiceError::product_not_found)
    }
}
