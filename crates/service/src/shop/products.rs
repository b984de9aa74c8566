use models::{DeleteResult, NewProduct, Product};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::ShopService;
use crate::errors::ServiceError;
use crate::ids::allocate_id;

impl ShopService {
    #[instrument(skip(self))]
    pub async fn get_product(&self, product_id: Uuid) -> Result<Product, ServiceError> {
        self.load_product(product_id).await
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        self.products.list().await
    }

    /// New products start with `amount = 1`.
    #[instrument(skip(self, input), fields(product_name = %input.product_name))]
    pub async fn create_product(&self, input: NewProduct) -> Result<Product, ServiceError> {
        input.validate()?;
        let product_id = allocate_id(&self.products).await?;
        let product = input.into_product(product_id);
        self.products.save(product_id, &product).await?;
        info!(%product_id, "product created");
        Ok(product)
    }

    /// Carts keep their own snapshot of the product; nothing cascades.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, product_id: Uuid) -> Result<DeleteResult, ServiceError> {
        let _guard = self.locks.lock(product_id).await;
        if !self.products.exists(product_id).await? {
            return Err(ServiceError::product_not_found());
        }

        let success = match self.products.remove(product_id).await {
            Ok(()) => {
                info!(%product_id, "product deleted");
                true
            }
            Err(e) => {
                warn!(%product_id, error = %e, "product delete failed; reporting success=false");
                false
            }
        };
        Ok(DeleteResult { deleted_id: product_id, success })
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ServiceError;
    use crate::test_support::TestShop;
    use models::{NewCart, NewProduct};
    use uuid::Uuid;

    #[tokio::test]
    async fn create_and_fetch_product() -> Result<(), anyhow::Error> {
        let shop = TestShop::new();
        let svc = &shop.service;

        let created = svc
            .create_product(NewProduct { product_name: "Lamp".into(), product_price: 19.5 })
            .await?;
        assert_eq!(created.amount, 1);
        assert_eq!(svc.get_product(created.product_id).await?, created);
        assert_eq!(svc.list_products().await?, vec![created]);
        Ok(())
    }

    #[tokio::test]
    async fn empty_name_writes_nothing() -> Result<(), anyhow::Error> {
        let shop = TestShop::new();
        let result = shop
            .service
            .create_product(NewProduct { product_name: String::new(), product_price: 3.0 })
            .await;

        assert!(
            matches!(&result, Err(ServiceError::Validation(msg)) if msg == "The product name must be at least 1 character long"),
            "expected Validation, got {result:?}"
        );
        assert!(shop.product_file_names().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() -> Result<(), anyhow::Error> {
        let shop = TestShop::new();
        let result = shop.service.get_product(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))), "got {result:?}");

        let result = shop.service.delete_product(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))), "got {result:?}");
        assert!(shop.product_file_names().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn created_ids_are_unique() -> Result<(), anyhow::Error> {
        let shop = TestShop::new();
        let mut ids = std::collections::HashSet::new();
        for i in 0..20 {
            let p = shop
                .service
                .create_product(NewProduct { product_name: format!("p{i}"), product_price: 1.0 })
                .await?;
            assert!(ids.insert(p.product_id));
        }
        assert_eq!(shop.service.list_products().await?.len(), 20);
        Ok(())
    }

    #[tokio::test]
    async fn delete_product_keeps_cart_snapshots() -> Result<(), anyhow::Error> {
        let shop = TestShop::new();
        let svc = &shop.service;

        let pen = svc
            .create_product(NewProduct { product_name: "Pen".into(), product_price: 2.0 })
            .await?;
        let cart = svc.create_cart(NewCart { cart_name: "c".into() }).await?;
        svc.add_product_to_cart(cart.cart_id, pen.product_id).await?;

        let result = svc.delete_product(pen.product_id).await?;
        assert_eq!(result.deleted_id, pen.product_id);
        assert!(result.success);
        assert!(matches!(svc.get_product(pen.product_id).await, Err(ServiceError::NotFound(_))));

        let cart = svc.get_cart(cart.cart_id).await?;
        assert_eq!(cart.products, vec![pen]);
        assert_eq!(cart.total_amount, 2.0);
        Ok(())
    }

    #[tokio::test]
    async fn failed_delete_reports_unsuccessful() -> Result<(), anyhow::Error> {
        let shop = TestShop::new();
        let pen = shop
            .service
            .create_product(NewProduct { product_name: "Pen".into(), product_price: 2.0 })
            .await?;

        shop.files.fail_deletes(true);
        let result = shop.service.delete_product(pen.product_id).await?;
        assert!(!result.success);
        assert_eq!(result.deleted_id, pen.product_id);
        assert!(shop.service.get_product(pen.product_id).await.is_ok());
        Ok(())
    }
}
