use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::ui::create::state::{CreateDialogState, CreateField};
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{FIELD_FOCUS, TEXT, TEXT_DIM};

const DIALOG_WIDTH: u16 = 64;

pub fn render_create_dialog(frame: &mut Frame<'_>, state: &CreateDialogState) {
    let CreateDialogState::Visible {
        fields,
        focused,
        categories,
        category_cursor,
    } = state
    else {
        return;
    };

    let category_label = match category_cursor.and_then(|i| categories.get(i)) {
        Some(category) => category.name.clone(),
        None if categories.is_empty() => "(no categories available)".to_string(),
        None => "◂ pick ▸".to_string(),
    };

    let mut lines = vec![
        field_line("Title", &fields.title, *focused == CreateField::Title),
        field_line("Price", &fields.price, *focused == CreateField::Price),
        field_line(
            "Description",
            &fields.description,
            *focused == CreateField::Description,
        ),
        field_line(
            "Category",
            &category_label,
            *focused == CreateField::Category,
        ),
    ];

    // The images field is multi-line; render each URL on its own row.
    let image_focused = *focused == CreateField::Images;
    if fields.images.is_empty() {
        lines.push(field_line("Images", "", image_focused));
    } else {
        for (idx, line) in fields.images.split('\n').enumerate() {
            let label = if idx == 0 { "Images" } else { "" };
            lines.push(field_line(label, line, image_focused));
        }
    }

    lines.push(Line::from(""));
    lines.push(hint_line(
        "Tab: Next  ◂▸: Category  Enter: Create (newline in Images)  Ctrl+S: Create  Esc: Close",
    ));

    PopupDialog::new("New Product", lines)
        .fixed_width(DIALOG_WIDTH)
        .render(frame, frame.area());
}

fn field_line<'a>(label: &'a str, value: &str, focused: bool) -> Line<'a> {
    let value_style = if focused {
        Style::default().fg(FIELD_FOCUS)
    } else {
        Style::default().fg(TEXT)
    };
    let marker = if focused { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(marker, value_style),
        Span::styled(format!("{:<12}", label), Style::default().fg(TEXT_DIM)),
        Span::styled(value.to_string(), value_style),
    ])
}

fn hint_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        format!("  {}", text),
        Style::default().fg(TEXT_DIM),
    ))
}
