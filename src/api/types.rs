use serde::{Deserialize, Serialize};

/// A product as returned by the catalog service.
///
/// The remote service assigns `id`; everything else is free-form enough
/// that absent fields deserialize to their defaults rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Shallow-merge an update response into this record.
    ///
    /// Only fields present in the response overwrite local values; fields
    /// the server omitted keep whatever was already cached.
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(category) = &patch.category {
            self.category = Some(category.clone());
        }
        if let Some(images) = &patch.images {
            self.images = images.clone();
        }
    }
}

/// A product category. Fetched once at startup and immutable for the
/// session; only used to populate the create-form picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// The shape of an update response: every field optional, so that a
/// partial server response merges instead of clobbering.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub images: Option<Vec<String>>,
}

/// Request body for updating an existing product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductEdit {
    pub title: String,
    pub price: f64,
    pub description: String,
}

/// Request body for creating a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    #[serde(rename = "categoryId")]
    pub category_id: u64,
    pub images: Vec<String>,
}
