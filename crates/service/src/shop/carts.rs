use models::{Cart, DeleteResult, NewCart};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::ShopService;
use crate::errors::ServiceError;
use crate::ids::allocate_id;

impl ShopService {
    #[instrument(skip(self))]
    pub async fn get_cart(&self, cart_id: Uuid) -> Result<Cart, ServiceError> {
        self.load_cart(cart_id).await
    }

    pub async fn list_carts(&self) -> Result<Vec<Cart>, ServiceError> {
        self.carts.list().await
    }

    #[instrument(skip(self, input), fields(cart_name = %input.cart_name))]
    pub async fn create_cart(&self, input: NewCart) -> Result<Cart, ServiceError> {
        input.validate()?;
        let cart_id = allocate_id(&self.carts).await?;
        let cart = input.into_cart(cart_id);
        self.carts.save(cart_id, &cart).await?;
        info!(%cart_id, "cart created");
        Ok(cart)
    }

    /// A failed file removal is reported as `success = false`, not as an error.
    #[instrument(skip(self))]
    pub async fn delete_cart(&self, cart_id: Uuid) -> Result<DeleteResult, ServiceError> {
        let _guard = self.locks.lock(cart_id).await;
        if !self.carts.exists(cart_id).await? {
            return Err(ServiceError::cart_not_found());
        }

        let success = match self.carts.remove(cart_id).await {
            Ok(()) => {
                info!(%cart_id, "cart deleted");
                true
            }
            Err(e) => {
                warn!(%cart_id, error = %e, "cart delete failed; reporting success=false");
                false
            }
        };
        Ok(DeleteResult { deleted_id: cart_id, success })
    }

    #[instrument(skip(self))]
    pub async fn empty_cart(&self, cart_id: Uuid) -> Result<Cart, ServiceError> {
        let _guard = self.locks.lock(cart_id).await;
        let mut cart = self.load_cart(cart_id).await?;
        cart.clear();
        self.persist_cart(&cart).await?;
        info!(%cart_id, "cart emptied");
        Ok(cart)
    }

    /// Increments an existing line item by one or appends a snapshot of the
    /// stored product.
    #[instrument(skip(self))]
    pub async fn add_product_to_cart(&self, cart_id: Uuid, product_id: Uuid) -> Result<Cart, ServiceError> {
        let _guard = self.locks.lock(cart_id).await;
        let mut cart = self.load_cart(cart_id).await?;
        let product = self.load_product(product_id).await?;

        cart.add_product(&product);
        self.persist_cart(&cart).await?;
        info!(%cart_id, %product_id, total_amount = cart.total_amount, "product added to cart");
        Ok(cart)
    }

    #[instrument(skip(self))]
    pub async fn delete_product_from_cart(&self, cart_id: Uuid, product_id: Uuid) -> Result<Cart, ServiceError> {
        let _guard = self.locks.lock(cart_id).await;
        let mut cart = self.load_cart(cart_id).await?;
        // must still exist in the catalog
        self.load_product(product_id).await?;

        if !cart.remove_product(product_id) {
            return Err(ServiceError::product_not_in_cart());
        }
        self.persist_cart(&cart).await?;
        info!(%cart_id, %product_id, total_amount = cart.total_amount, "product removed from cart");
        Ok(cart)
    }

    async fn persist_cart(&self, cart: &Cart) -> Result<(), ServiceError> {
        self.carts.save(cart.cart_id, cart).await?;
        debug!(?cart, "cart persisted");
        Ok(())
    }
}
