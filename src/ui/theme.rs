use ratatui::style::Color;

pub const BRAND_ACCENT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const ACTIVE_BORDER: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DIM_TEXT: Color = Color::Rgb(0x73, 0x73, 0x73);
pub const PRICE_TEXT: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
