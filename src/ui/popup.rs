use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, POPUP_BORDER};

/// Centered modal dialog: bordered block over a cleared area, sized to
/// its content unless a fixed width is requested.
pub struct PopupDialog<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    fixed_width: Option<u16>,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title,
            lines,
            fixed_width: None,
        }
    }

    pub fn fixed_width(mut self, width: u16) -> Self {
        self.fixed_width = Some(width);
        self
    }

    pub fn render(self, frame: &mut Frame<'_>, area: Rect) {
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = self
            .fixed_width
            .unwrap_or_else(|| content_width.saturating_add(4));
        let height = self.lines.len().saturating_add(2) as u16;
        let popup_area = centered_rect_by_size(area, width, height);

        frame.render_widget(Clear, popup_area);
        let block = Block::default()
            .title(Span::styled(self.title, Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        frame.render_widget(Paragraph::new(self.lines).block(block), popup_area);
    }
}
