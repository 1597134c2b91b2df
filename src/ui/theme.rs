use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x5e, 0x9c, 0xd6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ROW_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const FIELD_FOCUS: Color = Color::Rgb(0xea, 0xb3, 0x08);
