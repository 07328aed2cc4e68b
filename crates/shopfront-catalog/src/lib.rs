pub mod client;
pub mod error;
mod rate_limit;

pub use client::CatalogClient;
pub use error::CatalogError;
