//! Persisted entity types for carts and products.
//!
//! Field names serialize in camelCase, which is also the on-disk JSON layout.

pub mod cart;
pub mod errors;
pub mod product;

pub use cart::{Cart, NewCart};
pub use product::{NewProduct, Product};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a delete; `success` is false when the file could not be removed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted_id: Uuid,
    pub success: bool,
}
