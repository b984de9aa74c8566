use async_graphql::{InputObject, Object, SimpleObject, ID};
use models::{Cart, DeleteResult, Product};
use service::ServiceError;
use uuid::Uuid;

/// Ids that are not UUIDs cannot name a stored record.
pub(crate) fn parse_id(id: &ID, not_found: fn() -> ServiceError) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(id).map_err(|_| not_found())
}

fn to_id(uuid: Uuid) -> ID {
    ID(uuid.to_string())
}

pub struct ProductObject(pub Product);

#[Object(name = "Product")]
impl ProductObject {
    async fn product_id(&self) -> ID {
        to_id(self.0.product_id)
    }

    async fn product_name(&self) -> &str {
        &self.0.product_name
    }

    async fn product_price(&self) -> f64 {
        self.0.product_price
    }

    /// Catalog default, or the cart-local quantity for a line item.
    async fn amount(&self) -> u32 {
        self.0.amount
    }
}

pub struct CartObject(pub Cart);

#[Object(name = "Cart")]
impl CartObject {
    async fn cart_id(&self) -> ID {
        to_id(self.0.cart_id)
    }

    async fn cart_name(&self) -> &str {
        &self.0.cart_name
    }

    /// Sum of `productPrice * amount` over the line items.
    async fn total_amount(&self) -> f64 {
        self.0.total_amount
    }

    async fn products(&self) -> Vec<ProductObject> {
        self.0.products.iter().cloned().map(ProductObject).collect()
    }
}

#[derive(SimpleObject)]
#[graphql(name = "DeleteResult")]
pub struct DeleteResultObject {
    pub deleted_id: ID,
    pub success: bool,
}

impl From<DeleteResult> for DeleteResultObject {
    fn from(result: DeleteResult) -> Self {
        Self { deleted_id: to_id(result.deleted_id), success: result.success }
    }
}

#[derive(InputObject)]
pub struct CreateProductInput {
    pub product_name: String,
    pub product_price: f64,
}

#[derive(InputObject)]
pub struct CartProductInput {
    pub product_id: ID,
}

/// Product argument of the cart mutations: the nested `input` form, or the
/// older direct `productId` argument. Exactly one must be present.
pub(crate) fn resolve_product_arg(
    input: Option<CartProductInput>,
    product_id: Option<ID>,
) -> Result<Uuid, ServiceError> {
    let raw = match (input, product_id) {
        (Some(input), None) => input.product_id,
        (None, Some(id)) => id,
        _ => {
            return Err(ServiceError::Validation(
                "Provide either input.productId or productId".into(),
            ))
        }
    };
    parse_id(&raw, ServiceError::product_not_found)
}
