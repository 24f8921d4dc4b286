use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 230, g: 57, b: 70 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 183, b: 3 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MUTED: Color = Color::TrueColor { r: 140, g: 140, b: 140 };

pub const BLOOD_POSITIVE: Color = Color::TrueColor { r: 220, g: 20, b: 60 };
pub const BLOOD_NEGATIVE: Color = Color::TrueColor { r: 255, g: 105, b: 180 };

pub const STOCK_CRITICAL: Color = Color::Red;
pub const STOCK_STABLE: Color = Color::Yellow;
pub const STOCK_WELL: Color = Color::Green;
