//! Remote catalog client: typed requests against the product REST API.

mod client;
mod error;
mod types;

pub use client::CatalogClient;
pub use error::ApiError;
pub use types::{Category, NewProduct, Product, ProductEdit, ProductPatch};
