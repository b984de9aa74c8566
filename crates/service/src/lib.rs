//! Service layer: cart and product operations over a file-backed JSON store.
//! - `storage` holds the filesystem contract and the per-directory record store.
//! - `shop` implements the queries and mutations on top of it.
//! - Errors are returned as `ServiceError`, never raised through the transport.

pub mod errors;
pub mod ids;
pub mod shop;
pub mod storage;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use shop::ShopService;
