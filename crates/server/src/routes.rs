use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use common::{metrics, types::Health};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::graphql::ShopSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_handler() -> (StatusCode, String) {
    metrics::encode_metrics()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn graphql_handler(State(schema): State<ShopSchema>, req: GraphQLRequest) -> GraphQLResponse {
    metrics::GRAPHQL_REQUESTS_TOTAL.inc();
    // observed when the timer drops, after the response is built
    let _timer = metrics::REQUEST_DURATION.start_timer();
    schema.execute(req.into_inner()).await.into()
}

async fn schema_sdl(State(schema): State<ShopSchema>) -> String {
    schema.sdl()
}

/// Build the application router: GraphQL endpoint plus health, metrics and SDL.
pub fn build_router(schema: ShopSchema, cors: CorsLayer) -> Router {
    // GraphQL: GET serves the GraphiQL page, POST executes operations
    let graphql = Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .route("/schema.graphql", get(schema_sdl));

    // Operational endpoints
    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler));

    // Compose
    graphql
        .merge(ops)
        .with_state(schema)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request, headers left out
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status and latency on completion
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and handler failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
