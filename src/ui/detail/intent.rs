use crate::api::Product;
use crate::view::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    Open { product: Product },
    /// Switch the read-only view to the in-place edit form, prefilled
    /// with the current field values.
    StartEdit,
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    /// Discard the form and fall back to the read-only view.
    CancelEdit,
    Close,
}

impl Intent for DetailIntent {}
