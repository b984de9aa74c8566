//! GraphQL surface: query/mutation roots over `ShopService`.

pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};
use service::ShopService;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type ShopSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(shop: ShopService) -> ShopSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(shop)
        .finish()
}
