use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::{DetailDialogState, EditFields};
use crate::view::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailDialogState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open { product } => DetailDialogState::Viewing { product },
            DetailIntent::Close => DetailDialogState::Hidden,
            DetailIntent::StartEdit => match state {
                DetailDialogState::Viewing { product } => {
                    let fields = EditFields::from_product(&product);
                    DetailDialogState::Editing {
                        product,
                        fields,
                        focused: Default::default(),
                    }
                }
                other => other,
            },
            DetailIntent::CancelEdit => match state {
                DetailDialogState::Editing { product, .. } => {
                    DetailDialogState::Viewing { product }
                }
                other => other,
            },
            DetailIntent::Input(ch) => match state {
                DetailDialogState::Editing {
                    product,
                    mut fields,
                    focused,
                } => {
                    fields.field_mut(focused).push(ch);
                    DetailDialogState::Editing {
                        product,
                        fields,
                        focused,
                    }
                }
                other => other,
            },
            DetailIntent::Backspace => match state {
                DetailDialogState::Editing {
                    product,
                    mut fields,
                    focused,
                } => {
                    fields.field_mut(focused).pop();
                    DetailDialogState::Editing {
                        product,
                        fields,
                        focused,
                    }
                }
                other => other,
            },
            DetailIntent::FocusNext => match state {
                DetailDialogState::Editing {
                    product,
                    fields,
                    focused,
                } => DetailDialogState::Editing {
                    product,
                    fields,
                    focused: focused.next(),
                },
                other => other,
            },
            DetailIntent::FocusPrev => match state {
                DetailDialogState::Editing {
                    product,
                    fields,
                    focused,
                } => DetailDialogState::Editing {
                    product,
                    fields,
                    focused: focused.prev(),
                },
                other => other,
            },
        }
    }
}
