use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::ui::detail::state::{DetailDialogState, EditField};
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{FIELD_FOCUS, TEXT, TEXT_DIM};
use crate::ui::format_price;

const DIALOG_WIDTH: u16 = 64;

pub fn render_detail_dialog(frame: &mut Frame<'_>, state: &DetailDialogState) {
    match state {
        DetailDialogState::Hidden => {}
        DetailDialogState::Viewing { product } => {
            let mut lines = vec![
                field_line("ID", &product.id.to_string(), false),
                field_line("Title", &product.title, false),
                field_line("Price", &format_price(product.price), false),
                field_line(
                    "Category",
                    product
                        .category
                        .as_ref()
                        .map(|c| c.name.as_str())
                        .unwrap_or("—"),
                    false,
                ),
                field_line(
                    "Description",
                    product.description.as_deref().unwrap_or("—"),
                    false,
                ),
            ];
            for (idx, url) in product.images.iter().enumerate() {
                let label = if idx == 0 { "Images" } else { "" };
                lines.push(field_line(label, url, false));
            }
            lines.push(Line::from(""));
            lines.push(hint_line("e: Edit  Esc: Close"));
            PopupDialog::new("Product", lines)
                .fixed_width(DIALOG_WIDTH)
                .render(frame, frame.area());
        }
        DetailDialogState::Editing {
            product,
            fields,
            focused,
        } => {
            let lines = vec![
                field_line("ID", &product.id.to_string(), false),
                field_line("Title", &fields.title, *focused == EditField::Title),
                field_line("Price", &fields.price, *focused == EditField::Price),
                field_line(
                    "Description",
                    &fields.description,
                    *focused == EditField::Description,
                ),
                Line::from(""),
                hint_line("Tab: Next field  Enter: Save  Esc: Cancel"),
            ];
            PopupDialog::new("Edit Product", lines)
                .fixed_width(DIALOG_WIDTH)
                .render(frame, frame.area());
        }
    }
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
