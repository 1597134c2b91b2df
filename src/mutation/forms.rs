use crate::api::{NewProduct, ProductEdit};
use crate::mutation::error::MutationError;

/// Raw edit-form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditForm {
    pub id: u64,
    pub title: String,
    pub price: String,
    pub description: String,
}

impl EditForm {
    /// Title must be non-empty after trimming and price must parse to a
    /// finite number. No network call happens unless this passes.
    pub fn validate(&self) -> Result<ProductEdit, MutationError> {
        let title = non_empty(&self.title, "title")?;
        let price = finite_price(&self.price)?;
        Ok(ProductEdit {
            title,
            price,
            description: self.description.trim().to_string(),
        })
    }
}

/// Raw create-form input. `images_text` is the multi-line URL field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category_id: Option<u64>,
    pub images_text: String,
}

impl CreateForm {
    /// All five fields are required: non-empty title and description, a
    /// finite price, a selected category, and at least one non-empty
    /// image URL line.
    pub fn validate(&self) -> Result<NewProduct, MutationError> {
        let title = non_empty(&self.title, "title")?;
        let price = finite_price(&self.price)?;
        let description = non_empty(&self.description, "description")?;
        let category_id = self.category_id.ok_or(MutationError::Validation {
            field: "category",
            reason: "select a category",
        })?;
        let images = split_image_urls(&self.images_text);
        if images.is_empty() {
            return Err(MutationError::Validation {
                field: "images",
                reason: "at least one image URL is required",
            });
        }
        Ok(NewProduct {
            title,
            price,
            description,
            category_id,
            images,
        })
    }
}

/// Split the multi-line image field on line breaks, trim each line, and
/// drop empties.
pub fn split_image_urls(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(value: &str, field: &'static str) -> Result<String, MutationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MutationError::Validation {
            field,
            reason: "must not be empty",
        });
    }
    Ok(trimmed.to_string())
}

fn finite_price(value: &str) -> Result<f64, MutationError> {
    let parsed: f64 = value.trim().parse().map_err(|_| MutationError::Validation {
        field: "price",
        reason: "must be a number",
    })?;
    if !parsed.is_finite() {
        return Err(MutationError::Validation {
            field: "price",
            reason: "must be finite",
        });
    }
    Ok(parsed)
}
