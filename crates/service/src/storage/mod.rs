//! Storage abstractions for the service layer
//!
//! `FileStore` is the narrow filesystem contract; `JsonRecordStore` maps one
//! directory of `{id}.json` files to one entity type.

pub mod file_store;
pub mod json_record_store;
pub mod key_locks;

pub use file_store::{FileStore, FsFileStore};
pub use json_record_store::JsonRecordStore;
pub use key_locks::{KeyGuard, KeyLocks};
