use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Encoder, Histogram,
    IntCounter, IntCounterVec, TextEncoder,
};

// Prometheus metrics (default registry)
pub static GRAPHQL_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "shop_graphql_requests_total",
        "Total GraphQL requests handled"
    )
    .expect("register graphql_requests_total")
});

pub static MUTATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "shop_mutations_total",
        "Total successful mutations by operation",
        &["operation"]
    )
    .expect("register mutations_total")
});

pub static REQUEST_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "shop_request_duration_seconds",
        "GraphQL request duration in seconds",
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]
    )
    .expect("register request_duration")
});

/// Count one successful mutation.
pub fn record_mutation(operation: &str) {
    MUTATIONS_TOTAL.with_label_values(&[operation]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_mutations_show_up_in_exposition() {
        record_mutation("createCart");
        GRAPHQL_REQUESTS_TOTAL.inc();

        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("shop_mutations_total"));
        assert!(body.contains("operation=\"createCart\""));
        assert!(body.contains("shop_graphql_requests_total"));
    }
}
