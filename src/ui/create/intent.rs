use crate::api::Category;
use crate::view::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CreateIntent {
    Open { categories: Vec<Category> },
    Input(char),
    Backspace,
    /// Only meaningful in the multi-line images field.
    Newline,
    FocusNext,
    FocusPrev,
    CategoryNext,
    CategoryPrev,
    Close,
}

impl Intent for CreateIntent {}
