use ratatui::layout::Rect;

/// Split the terminal into header / search bar / table body / footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let search_height = 3.min(area.height.saturating_sub(header_height));
    let footer_height = 4.min(
        area.height
            .saturating_sub(header_height + search_height),
    );
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let search = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: search_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + search_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + search_height + footer_height),
    };
    (header, search, body, footer)
}

/// Center a fixed-size popup inside `area`, shrinking to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
