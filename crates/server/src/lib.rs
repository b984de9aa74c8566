pub mod errors;
pub mod graphql;
pub mod routes;
pub mod startup;

pub use startup::{load_config, run};
