use crate::api::Category;
use crate::mutation::CreateForm;
use crate::view::mvi::UiState;

/// Fields of the creation form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateField {
    #[default]
    Title,
    Price,
    Description,
    Category,
    Images,
}

impl CreateField {
    pub fn next(self) -> Self {
        match self {
            CreateField::Title => CreateField::Price,
            CreateField::Price => CreateField::Description,
            CreateField::Description => CreateField::Category,
            CreateField::Category => CreateField::Images,
            CreateField::Images => CreateField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CreateField::Title => CreateField::Images,
            CreateField::Price => CreateField::Title,
            CreateField::Description => CreateField::Price,
            CreateField::Category => CreateField::Description,
            CreateField::Images => CreateField::Category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateFields {
    pub title: String,
    pub price: String,
    pub description: String,
    /// Multi-line: one image URL per line.
    pub images: String,
}

impl CreateFields {
    pub fn field_mut(&mut self, field: CreateField) -> Option<&mut String> {
        match field {
            CreateField::Title => Some(&mut self.title),
            CreateField::Price => Some(&mut self.price),
            CreateField::Description => Some(&mut self.description),
            CreateField::Images => Some(&mut self.images),
            CreateField::Category => None,
        }
    }
}

/// Creation dialog. Carries its own snapshot of the category list so the
/// picker needs nothing from outside while open.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CreateDialogState {
    #[default]
    Hidden,
    Visible {
        fields: CreateFields,
        focused: CreateField,
        categories: Vec<Category>,
        /// Index into `categories`; `None` until the user picks one.
        category_cursor: Option<usize>,
    },
}

impl UiState for CreateDialogState {}

impl CreateDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Raw form input for the mutation coordinator.
    pub fn form(&self) -> Option<CreateForm> {
        match self {
            Self::Visible {
                fields,
                categories,
                category_cursor,
                ..
            } => Some(CreateForm {
                title: fields.title.clone(),
                price: fields.price.clone(),
                description: fields.description.clone(),
                category_id: category_cursor.and_then(|i| categories.get(i)).map(|c| c.id),
                images_text: fields.images.clone(),
            }),
            _ => None,
        }
    }
}
