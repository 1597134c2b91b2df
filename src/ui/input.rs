use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::mutation::{CreateForm, EditForm};
use crate::ui::app::{App, InputMode};
use crate::ui::create::{CreateField, CreateIntent};
use crate::ui::detail::DetailIntent;
use crate::view::{SortColumn, TableIntent};

/// Action the runtime must take after a key event; mutations need the
/// async side, so they bubble out of the sync handler.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    None,
    SubmitEdit(EditForm),
    SubmitCreate(CreateForm),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if app.detail().is_visible() {
        return handle_detail_key(app, key);
    }
    if app.create().is_visible() {
        return handle_create_key(app, key);
    }
    if app.input_mode() == InputMode::Search {
        handle_search_key(app, key);
        return InputAction::None;
    }
    handle_table_key(app, key);
    InputAction::None
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Char('t') => app.dispatch_table(TableIntent::SortToggled {
            column: SortColumn::Title,
        }),
        KeyCode::Char('p') => app.dispatch_table(TableIntent::SortToggled {
            column: SortColumn::Price,
        }),
        KeyCode::Char('[') => app.prev_page(),
        KeyCode::Char(']') => app.next_page(),
        KeyCode::Char('s') => app.cycle_page_size(),
        KeyCode::Char('n') => app.open_create_dialog(),
        KeyCode::Char('x') => app.export_visible_page(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Enter => app.open_detail_for_selection(),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.leave_search(),
        KeyCode::Backspace => app.pop_filter_char(),
        KeyCode::Char(ch) => app.push_filter_char(ch),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) -> InputAction {
    if app.detail().is_editing() {
        match key.code {
            KeyCode::Esc => app.dispatch_detail(DetailIntent::CancelEdit),
            KeyCode::Tab | KeyCode::Down => app.dispatch_detail(DetailIntent::FocusNext),
            KeyCode::BackTab | KeyCode::Up => app.dispatch_detail(DetailIntent::FocusPrev),
            KeyCode::Backspace => app.dispatch_detail(DetailIntent::Backspace),
            KeyCode::Enter => {
                let form = app.detail().edit_form();
                if let Some(form) = submit_guard(app, form) {
                    return InputAction::SubmitEdit(form);
                }
            }
            KeyCode::Char(ch) => app.dispatch_detail(DetailIntent::Input(ch)),
            _ => {}
        }
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('e') => app.dispatch_detail(DetailIntent::StartEdit),
        KeyCode::Esc | KeyCode::Char('q') => app.dispatch_detail(DetailIntent::Close),
        _ => {}
    }
    InputAction::None
}

fn handle_create_key(app: &mut App, key: KeyEvent) -> InputAction {
    let focused = match app.create() {
        crate::ui::create::CreateDialogState::Visible { focused, .. } => *focused,
        _ => return InputAction::None,
    };
    let images_focused = focused == CreateField::Images;

    // Ctrl+S submits from any field; Enter submits everywhere except the
    // multi-line images field, where it inserts a line break.
    let is_submit = (key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('s')))
        || (key.code == KeyCode::Enter && !images_focused);

    if is_submit {
        let form = app.create().form();
        if let Some(form) = submit_guard(app, form) {
            return InputAction::SubmitCreate(form);
        }
        return InputAction::None;
    }

    match key.code {
        KeyCode::Esc => app.dispatch_create(CreateIntent::Close),
        KeyCode::Tab | KeyCode::Down => app.dispatch_create(CreateIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_create(CreateIntent::FocusPrev),
        KeyCode::Left if focused == CreateField::Category => {
            app.dispatch_create(CreateIntent::CategoryPrev)
        }
        KeyCode::Right if focused == CreateField::Category => {
            app.dispatch_create(CreateIntent::CategoryNext)
        }
        KeyCode::Enter => app.dispatch_create(CreateIntent::Newline),
        KeyCode::Backspace => app.dispatch_create(CreateIntent::Backspace),
        KeyCode::Char(ch) => app.dispatch_create(CreateIntent::Input(ch)),
        _ => {}
    }
    InputAction::None
}

/// One mutation at a time: while a request is outstanding, further
/// submissions are refused with a notice instead of racing the first.
fn submit_guard<T>(app: &mut App, form: Option<T>) -> Option<T> {
    if app.busy() {
        app.set_flash("Still saving…", true);
        return None;
    }
    form
}
