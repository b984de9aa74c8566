use async_graphql::{Context, Object, Result, ID};
use service::{ServiceError, ShopService};

use crate::errors::ServiceResultExt;
use crate::graphql::types::{parse_id, CartObject, ProductObject};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn get_cart_by_id(&self, ctx: &Context<'_>, cart_id: ID) -> Result<Option<CartObject>> {
        let shop = ctx.data::<ShopService>()?;
        let cart_id = parse_id(&cart_id, ServiceError::cart_not_found).into_gql()?;
        let cart = shop.get_cart(cart_id).await.into_gql()?;
        Ok(Some(CartObject(cart)))
    }

    async fn get_all_carts(&self, ctx: &Context<'_>) -> Result<Vec<CartObject>> {
        let shop = ctx.data::<ShopService>()?;
        let carts = shop.list_carts().await.into_gql()?;
        Ok(carts.into_iter().map(CartObject).collect())
    }

    async fn get_product_by_id(&self, ctx: &Context<'_>, product_id: ID) -> Result<Option<ProductObject>> {
        let shop = ctx.data::<ShopService>()?;
        let product_id = parse_id(&product_id, ServiceError::product_not_found).into_gql()?;
        let product = shop.get_product(product_id).await.into_gql()?;
        Ok(Some(ProductObject(product)))
    }

    async fn get_all_products(&self, ctx: &Context<'_>) -> Result<Vec<ProductObject>> {
        let shop = ctx.data::<ShopService>()?;
        let products = shop.list_products().await.into_gql()?;
        Ok(products.into_iter().map(ProductObject).collect())
    }
}
