use ratatui::style::Color;

pub const POKE_YELLOW: Color = Color::Rgb(0xff, 0xcb, 0x05);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xff, 0xcb, 0x05);
pub const PANE_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
