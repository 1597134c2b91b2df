use crate::ui::create::intent::CreateIntent;
use crate::ui::create::state::{CreateDialogState, CreateField};
use crate::view::mvi::Reducer;

pub struct CreateReducer;

impl Reducer for CreateReducer {
    type State = CreateDialogState;
    type Intent = CreateIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CreateIntent::Open { categories } => CreateDialogState::Visible {
                fields: Default::default(),
                focused: Default::default(),
                categories,
                category_cursor: None,
            },
            CreateIntent::Close => CreateDialogState::Hidden,
            CreateIntent::Input(ch) => edit_text(state, |text| text.push(ch)),
            CreateIntent::Backspace => edit_text(state, |text| {
                text.pop();
            }),
            CreateIntent::Newline => match state {
                CreateDialogState::Visible {
                    mut fields,
                    focused: CreateField::Images,
                    categories,
                    category_cursor,
                } => {
                    fields.images.push('\n');
                    CreateDialogState::Visible {
                        fields,
                        focused: CreateField::Images,
                        categories,
                        category_cursor,
                    }
                }
                other => other,
            },
            CreateIntent::FocusNext => move_focus(state, CreateField::next),
            CreateIntent::FocusPrev => move_focus(state, CreateField::prev),
            CreateIntent::CategoryNext => move_category(state, 1),
            CreateIntent::CategoryPrev => move_category(state, -1),
        }
    }
}

fn edit_text(state: CreateDialogState, apply: impl FnOnce(&mut String)) -> CreateDialogState {
    match state {
        CreateDialogState::Visible {
            mut fields,
            focused,
            categories,
            category_cursor,
        } => {
            if let Some(text) = fields.field_mut(focused) {
                apply(text);
            }
            CreateDialogState::Visible {
                fields,
                focused,
                categories,
                category_cursor,
            }
        }
        other => other,
    }
}

fn move_focus(
    state: CreateDialogState,
    step: impl FnOnce(CreateField) -> CreateField,
) -> CreateDialogState {
    match state {
        CreateDialogState::Visible {
            fields,
            focused,
            categories,
            category_cursor,
        } => CreateDialogState::Visible {
            fields,
            focused: step(focused),
            categories,
            category_cursor,
        },
        other => other,
    }
}

/// Cycle the category picker. With no categories the cursor stays `None`
/// (the fetch may have failed; the form then fails validation instead of
/// the picker crashing).
fn move_category(state: CreateDialogState, direction: i32) -> CreateDialogState {
    match state {
        CreateDialogState::Visible {
            fields,
            focused,
            categories,
            category_cursor,
        } => {
            let len = categories.len();
            let next = if len == 0 {
                None
            } else {
                Some(match category_cursor {
                    None => {
                        if direction.is_negative() {
                            len - 1
                        } else {
                            0
                        }
                    }
                    Some(current) => {
                        if direction.is_negative() {
                            if current == 0 {
                                len - 1
                            } else {
                                current - 1
                            }
                        } else if current + 1 >= len {
                            0
                        } else {
                            current + 1
                        }
                    }
                })
            };
            CreateDialogState::Visible {
                fields,
                focused,
                categories,
                category_cursor: next,
            }
        }
        other => other,
    }
}
