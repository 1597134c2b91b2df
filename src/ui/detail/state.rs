use crate::api::Product;
use crate::mutation::EditForm;
use crate::view::mvi::UiState;

/// Fields of the in-place edit form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Title,
    Price,
    Description,
}

impl EditField {
    pub fn next(self) -> Self {
        match self {
            EditField::Title => EditField::Price,
            EditField::Price => EditField::Description,
            EditField::Description => EditField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EditField::Title => EditField::Description,
            EditField::Price => EditField::Title,
            EditField::Description => EditField::Price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditFields {
    pub title: String,
    pub price: String,
    pub description: String,
}

impl EditFields {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone().unwrap_or_default(),
        }
    }

    pub fn field_mut(&mut self, field: EditField) -> &mut String {
        match field {
            EditField::Title => &mut self.title,
            EditField::Price => &mut self.price,
            EditField::Description => &mut self.description,
        }
    }
}

/// Detail dialog: read-only view of one product, switchable to an
/// in-place edit form over title/price/description.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailDialogState {
    #[default]
    Hidden,
    Viewing {
        product: Product,
    },
    Editing {
        product: Product,
        fields: EditFields,
        focused: EditField,
    },
}

impl UiState for DetailDialogState {}

impl DetailDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Raw form input for the mutation coordinator, when editing.
    pub fn edit_form(&self) -> Option<EditForm> {
        match self {
            Self::Editing {
                product, fields, ..
            } => Some(EditForm {
                id: product.id,
                title: fields.title.clone(),
                price: fields.price.clone(),
                description: fields.description.clone(),
            }),
            _ => None,
        }
    }
}
