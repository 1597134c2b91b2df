use crate::api::{Product, ProductPatch};
use crate::view::mvi::Intent;
use crate::view::state::SortColumn;

#[derive(Debug, Clone)]
pub enum TableIntent {
    /// Initial load (or reload): replaces the full set.
    ProductsLoaded { products: Vec<Product> },
    FilterChanged { text: String },
    SortToggled { column: SortColumn },
    /// `size` must come from [`crate::view::state::PAGE_SIZES`]; anything
    /// else is a caller bug, not a condition to recover from.
    PageSizeChanged { size: usize },
    PageSelected { page: usize },
    /// Server-confirmed edit: shallow-merge into the matching record.
    ProductMerged { id: u64, patch: ProductPatch },
    /// Server-confirmed creation: new items appear first until a sort is
    /// applied.
    ProductCreated { product: Product },
}

impl Intent for TableIntent {}
