use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::product::Product;

/// Shopping cart holding product snapshots as line items.
///
/// `total_amount` is derived from `products`; every mutating method below
/// recomputes it before returning.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub cart_id: Uuid,
    pub cart_name: String,
    pub total_amount: f64,
    pub products: Vec<Product>,
}

impl Cart {
    pub fn new(cart_id: Uuid, cart_name: String) -> Self {
        Self { cart_id, cart_name, total_amount: 0.0, products: Vec::new() }
    }

    /// Sum of `productPrice * amount` over all line items.
    pub fn computed_total(&self) -> f64 {
        self.products.iter().map(Product::line_total).sum()
    }

    pub fn recompute_total(&mut self) {
        self.total_amount = self.computed_total();
    }

    /// Bump the matching line item by one, or append a copy of `product`.
    pub fn add_product(&mut self, product: &Product) {
        match self
            .products
            .iter_mut()
            .find(|item| item.product_id == product.product_id)
        {
            Some(item) => item.amount = item.amount.saturating_add(1),
            None => self.products.push(product.clone()),
        }
        self.recompute_total();
    }

    /// Remove the line item for `product_id`. Returns false when the cart has
    /// no such item, in which case nothing changes.
    pub fn remove_product(&mut self, product_id: Uuid) -> bool {
        let Some(index) = self
            .products
            .iter()
            .position(|item| item.product_id == product_id)
        else {
            return false;
        };
        self.products.remove(index);
        self.recompute_total();
        true
    }

    pub fn clear(&mut self) {
        self.products.clear();
        self.recompute_total();
    }
}

/// Input for creating a cart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCart {
    pub cart_name: String,
}

impl NewCart {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.cart_name.is_empty() {
            return Err(ModelError::Validation(
                "The cart name must be at least 1 character long".into(),
            ));
        }
        Ok(())
    }

    pub fn into_cart(self, cart_id: Uuid) -> Cart {
        Cart::new(cart_id, self.cart_name)
    }
}
