use async_graphql::{Context, Object, Result, ID};
use common::metrics::record_mutation;
use models::{NewCart, NewProduct};
use service::{ServiceError, ShopService};

use crate::errors::ServiceResultExt;
use crate::graphql::types::{
    parse_id, resolve_product_arg, CartObject, CartProductInput, CreateProductInput,
    DeleteResultObject, ProductObject,
};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_cart(&self, ctx: &Context<'_>, cart_name: String) -> Result<Option<CartObject>> {
        let shop = ctx.data::<ShopService>()?;
        let cart = shop.create_cart(NewCart { cart_name }).await.into_gql()?;
        record_mutation("createCart");
        Ok(Some(CartObject(cart)))
    }

    /// `success` is false when the file could not be removed.
    async fn delete_cart(&self, ctx: &Context<'_>, cart_id: ID) -> Result<Option<DeleteResultObject>> {
        let shop = ctx.data::<ShopService>()?;
        let cart_id = parse_id(&cart_id, ServiceError::cart_not_found).into_gql()?;
        let result = shop.delete_cart(cart_id).await.into_gql()?;
        record_mutation("deleteCart");
        Ok(Some(result.into()))
    }

    async fn create_product(&self, ctx: &Context<'_>, input: CreateProductInput) -> Result<Option<ProductObject>> {
        let shop = ctx.data::<ShopService>()?;
        let product = shop
            .create_product(NewProduct {
                product_name: input.product_name,
                product_price: input.product_price,
            })
            .await
            .into_gql()?;
        record_mutation("createProduct");
        Ok(Some(ProductObject(product)))
    }

    /// Carts that already hold this product keep their copy.
    async fn delete_product(&self, ctx: &Context<'_>, product_id: ID) -> Result<Option<DeleteResultObject>> {
        let shop = ctx.data::<ShopService>()?;
        let product_id = parse_id(&product_id, ServiceError::product_not_found).into_gql()?;
        let result = shop.delete_product(product_id).await.into_gql()?;
        record_mutation("deleteProduct");
        Ok(Some(result.into()))
    }

    async fn add_product_to_cart(
        &self,
        ctx: &Context<'_>,
        cart_id: ID,
        input: Option<CartProductInput>,
        product_id: Option<ID>,
    ) -> Result<Option<CartObject>> {
        let shop = ctx.data::<ShopService>()?;
        let cart_id = parse_id(&cart_id, ServiceError::cart_not_found).into_gql()?;
        let product_id = resolve_product_arg(input, product_id).into_gql()?;
        let cart = shop.add_product_to_cart(cart_id, product_id).await.into_gql()?;
        record_mutation("addProductToCart");
        Ok(Some(CartObject(cart)))
    }

    async fn delete_product_from_cart(
        &self,
        ctx: &Context<'_>,
        cart_id: ID,
        input: Option<CartProductInput>,
        product_id: Option<ID>,
    ) -> Result<Option<CartObject>> {
        let shop = ctx.data::<ShopService>()?;
        let cart_id = parse_id(&cart_id, ServiceError::cart_not_found).into_gql()?;
        let product_id = resolve_product_arg(input, product_id).into_gql()?;
        let cart = shop.delete_product_from_cart(cart_id, product_id).await.into_gql()?;
        record_mutation("deleteProductFromCart");
        Ok(Some(CartObject(cart)))
    }

    async fn empty_cart(&self, ctx: &Context<'_>, cart_id: ID) -> Result<Option<CartObject>> {
        let shop = ctx.data::<ShopService>()?;
        let cart_id = parse_id(&cart_id, ServiceError::cart_not_found).into_gql()?;
        let cart = shop.empty_cart(cart_id).await.into_gql()?;
        record_mutation("emptyCart");
        Ok(Some(CartObject(cart)))
    }
}
