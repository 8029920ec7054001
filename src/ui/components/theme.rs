//! Fixed color palette shared by the review screen widgets

use ratatui::style::Color;

pub const BG_BASE: Color = Color::Rgb(30, 30, 46);
pub const BG_SURFACE: Color = Color::Rgb(49, 50, 68);
pub const FOOTER_BG: Color = Color::Rgb(24, 24, 37);
pub const KEY_HINT_BG: Color = Color::Rgb(69, 71, 90);

pub const TEXT_PRIMARY: Color = Color::Rgb(205, 214, 244);
pub const TEXT_SECONDARY: Color = Color::Rgb(186, 194, 222);
pub const TEXT_MUTED: Color = Color::Rgb(127, 132, 156);
pub const TEXT_FAINT: Color = Color::Rgb(88, 91, 112);

pub const ACCENT_PRIMARY: Color = Color::Rgb(137, 180, 250);
pub const ACCENT_SUCCESS: Color = Color::Rgb(166, 227, 161);
pub const ACCENT_WARNING: Color = Color::Rgb(249, 226, 175);
pub const ACCENT_ERROR: Color = Color::Rgb(243, 139, 168);

pub const BORDER_DEFAULT: Color = Color::Rgb(69, 71, 90);
pub const BORDER_FOCUSED: Color = Color::Rgb(137, 180, 250);
