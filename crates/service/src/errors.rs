use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Domain(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ServiceError {
    pub fn cart_not_found() -> Self { Self::NotFound("That shopping cart does not exist".into()) }

    pub fn product_not_found() -> Self { Self::NotFound("That product does not exist".into()) }

    pub fn product_not_in_cart() -> Self { Self::Domain("That product is not in this cart".into()) }

    /// Stable code for external mapping/logging
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "VALIDATION_ERROR",
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::Domain(_) => "DOMAIN_ERROR",
            ServiceError::Storage(_) => "STORAGE_ERROR",
            ServiceError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Caller-facing errors, as opposed to infrastructure failures.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Validation(_) | ServiceError::NotFound(_) | ServiceError::Domain(_))
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self { ServiceError::Storage(e.to_string()) }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self { ServiceError::Serialization(e.to_string()) }
}
