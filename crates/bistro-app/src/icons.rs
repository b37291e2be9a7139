//! Glyphs for the menu icons (drawn with egui's bundled emoji font)

use bistro_shared::uac::IconKey;

/// Shown for icons the server names but the app does not have
pub const PLACEHOLDER_GLYPH: &str = "□";

pub fn glyph(icon: &IconKey) -> &'static str {
    match icon {
        IconKey::Home => "🏠",
        IconKey::Package => "📦",
        IconKey::ShoppingCart => "🛒",
        IconKey::BarChart3 => "📊",
        IconKey::Menu => "☰",
        IconKey::Users => "👥",
        IconKey::X => "❌",
        IconKey::Unknown(_) => PLACEHOLDER_GLYPH,
    }
}
