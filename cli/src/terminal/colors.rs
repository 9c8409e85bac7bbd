use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const CAR: Color = Color::Cyan;
pub const MOTORCYCLE: Color = Color::Magenta;
pub const ENGINE_ON: Color = Color::Green;
pub const ENGINE_OFF: Color = Color::BrightBlack;
pub const EVENT: Color = Color::Blue;
