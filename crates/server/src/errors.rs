use async_graphql::ErrorExtensions;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

/// Turn a service failure into a GraphQL field error carrying
/// `extensions.code`. The HTTP response itself stays successful.
pub fn to_graphql_error(err: ServiceError) -> async_graphql::Error {
    let code = err.code();
    if !err.is_client_error() {
        error!(code, error = %err, "operation failed");
    }
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

pub trait ServiceResultExt<T> {
    fn into_gql(self) -> async_graphql::Result<T>;
}

impl<T> ServiceResultExt<T> for Result<T, ServiceError> {
    fn into_gql(self) -> async_graphql::Result<T> {
        self.map_err(to_graphql_error)
    }
}
