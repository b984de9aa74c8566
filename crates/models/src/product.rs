use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

/// Catalog product. Inside a cart the same shape is used as a line item,
/// where `amount` is the cart-local quantity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: Uuid,
    pub product_name: String,
    pub product_price: f64,
    pub amount: u32,
}

impl Product {
    /// Line total for this entry.
    pub fn line_total(&self) -> f64 {
        self.product_price * f64::from(self.amount)
    }
}

/// Input for creating a product; id and amount are assigned by the service.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub product_name: String,
    pub product_price: f64,
}

impl NewProduct {
    pub const INITIAL_AMOUNT: u32 = 1;

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.product_name.is_empty() {
            return Err(ModelError::Validation(
                "The product name must be at least 1 character long".into(),
            ));
        }
        Ok(())
    }

    pub fn into_product(self, product_id: Uuid) -> Product {
        Product {
            product_id,
            product_name: self.product_name,
            product_price: self.product_price,
            amount: Self::INITIAL_AMOUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() -> anyhow::Result<()> {
        let id = Uuid::new_v4();
        let product = NewProduct { product_name: "Pen".into(), product_price: 2.0 }.into_product(id);
        let json = serde_json::to_value(&product)?;

        assert_eq!(json["productId"], id.to_string());
        assert_eq!(json["productName"], "Pen");
        assert_eq!(json["productPrice"], 2.0);
        assert_eq!(json["amount"], 1);
        Ok(())
    }

    #[test]
    fn reads_integer_prices_written_by_other_tools() -> anyhow::Result<()> {
        let raw = r#"{"productId":"9b2f7c1e-3d4a-4f8e-9a6b-1c2d3e4f5a6b","productName":"Mug","productPrice":12,"amount":1}"#;
        let product: Product = serde_json::from_str(raw)?;
        assert_eq!(product.product_price, 12.0);
        assert_eq!(product.line_total(), 12.0);
        Ok(())
    }

    #[test]
    fn empty_name_is_rejected() {
        let input = NewProduct { product_name: String::new(), product_price: 1.0 };
        assert!(matches!(input.validate(), Err(ModelError::Validation(_))));
    }
}
