use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

use crate::api::Product;
use crate::ui::app::{App, InputMode, LoadPhase};
use crate::ui::create::render_create_dialog;
use crate::ui::detail::render_detail_dialog;
use crate::ui::format_price;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, FIELD_FOCUS, GLOBAL_BORDER, ROW_HIGHLIGHT, STATUS_ERROR, STATUS_OK, TEXT, TEXT_DIM,
};
use crate::view::{SortColumn, SortOrder};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, search, body, footer) = layout_regions(area);

    draw_header(frame, app, header);
    draw_search_bar(frame, app, search);
    draw_body(frame, app, body);
    draw_footer(frame, app, footer);

    render_detail_dialog(frame, app.detail());
    render_create_dialog(frame, app.create());
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let count = app.table().products.len();
    let line = Line::from(vec![
        Span::styled("shopdesk", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {} products cached", count),
            Style::default().fg(TEXT_DIM),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(bordered()),
        area,
    );
}

fn draw_search_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let searching = app.input_mode() == InputMode::Search;
    let border = if searching { FIELD_FOCUS } else { GLOBAL_BORDER };
    let cursor = if searching { "▏" } else { "" };
    let line = Line::from(vec![
        Span::styled("Search title: ", Style::default().fg(TEXT_DIM)),
        Span::styled(app.table().filter.clone(), Style::default().fg(TEXT)),
        Span::styled(cursor, Style::default().fg(FIELD_FOCUS)),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        ),
        area,
    );
}

fn draw_body(frame: &mut Frame<'_>, app: &App, area: Rect) {
    frame.render_widget(Clear, area);
    match app.load() {
        LoadPhase::Loading => {
            frame.render_widget(
                Paragraph::new("Loading products…")
                    .style(Style::default().fg(TEXT_DIM))
                    .alignment(Alignment::Center)
                    .block(bordered()),
                area,
            );
        }
        LoadPhase::Failed(message) => {
            // The table never rendered; the body is the error surface.
            frame.render_widget(
                Paragraph::new(format!("Failed to load products: {}", message))
                    .style(Style::default().fg(STATUS_ERROR))
                    .alignment(Alignment::Center)
                    .block(bordered()),
                area,
            );
        }
        LoadPhase::Ready => draw_table(frame, app, area),
    }
}

fn draw_table(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let slice = app.table().page_slice();

    if slice.is_empty() {
        frame.render_widget(
            Paragraph::new("No matching products")
                .style(Style::default().fg(TEXT_DIM))
                .alignment(Alignment::Center)
                .block(bordered()),
            area,
        );
        return;
    }

    let sort = &app.table().sort;
    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from(format!(
            "Title {}",
            sort_indicator(sort.order_for(SortColumn::Title))
        )),
        Cell::from(format!(
            "Price {}",
            sort_indicator(sort.order_for(SortColumn::Price))
        )),
        Cell::from("Category"),
        Cell::from("Images"),
    ])
    .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let selected = app.selected_row();
    let rows: Vec<Row> = slice
        .iter()
        .enumerate()
        .map(|(idx, product)| {
            let row = product_row(product);
            if idx == selected {
                row.style(Style::default().bg(ROW_HIGHLIGHT))
            } else {
                row
            }
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Min(24),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths).header(header).block(bordered());
    frame.render_widget(table, area);
}

fn product_row(product: &Product) -> Row<'static> {
    let category = product
        .category
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "—".to_string());
    let images = match product.images.len() {
        0 => "—".to_string(),
        n => n.to_string(),
    };
    Row::new(vec![
        Cell::from(product.id.to_string()),
        Cell::from(product.title.clone()),
        Cell::from(format_price(product.price)),
        Cell::from(category),
        Cell::from(images),
    ])
    .style(Style::default().fg(TEXT))
}

fn sort_indicator(order: SortOrder) -> &'static str {
    match order {
        SortOrder::None => "↕",
        SortOrder::Ascending => "↑",
        SortOrder::Descending => "↓",
    }
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let summary = app.table().summary();
    let summary_text = match summary.shown {
        None => "No products to show".to_string(),
        Some((start, end)) => format!(
            "Showing {}–{} / {}  (page {} of {})",
            start, end, summary.total, summary.page, summary.total_pages
        ),
    };

    let mut status_spans = vec![Span::styled(summary_text, Style::default().fg(TEXT))];
    if app.busy() {
        status_spans.push(Span::styled("  Saving…", Style::default().fg(ACCENT)));
    }
    if let Some(flash) = app.flash() {
        let color = if flash.is_error { STATUS_ERROR } else { STATUS_OK };
        status_spans.push(Span::styled(
            format!("  {}", flash.text),
            Style::default().fg(color),
        ));
    }

    let hints = " /: Search │ t/p: Sort │ [ ]: Page │ s: Page size │ Enter: Detail │ n: New │ x: Export │ q: Quit";
    let version = format!("v{} ", VERSION);
    let hints_width = hints.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version.chars().count());

    let dim = Style::default().fg(TEXT_DIM).add_modifier(Modifier::DIM);
    let hint_line = Line::from(vec![
        Span::styled(hints, dim),
        Span::styled(" ".repeat(padding), dim),
        Span::styled(version, dim),
    ]);

    frame.render_widget(
        Paragraph::new(vec![Line::from(status_spans), hint_line]).block(bordered()),
        area,
    );
}

fn bordered() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}
