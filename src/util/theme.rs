//! Inline styles for widget elements.
//!
//! The widget lives inside arbitrary host pages, so it sets no ids, classes,
//! or stylesheet rules. Every element carries its own `style` attribute built
//! here.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::widget::Sender;

pub const CLOSED_GLYPH: &str = "💬";
pub const OPEN_GLYPH: &str = "❌";
pub const SEND_GLYPH: &str = "➤";

/// Reply links open in a new browsing context with no `window.opener`.
pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";

const Z_INDEX: &str = "2147483000";
const BOT_BACKGROUND: &str = "#E5E7EB";
const BOT_FOREGROUND: &str = "#111827";

fn style(rules: &[(&str, &str)]) -> String {
    rules
        .iter()
        .map(|(prop, value)| format!("{prop}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Glyph shown on the bubble for the given open state.
#[must_use]
pub fn bubble_glyph(open: bool) -> &'static str {
    if open { OPEN_GLYPH } else { CLOSED_GLYPH }
}

#[must_use]
pub fn bubble_style(accent: &str) -> String {
    style(&[
        ("position", "fixed"),
        ("bottom", "20px"),
        ("right", "20px"),
        ("width", "60px"),
        ("height", "60px"),
        ("background-color", accent),
        ("color", "white"),
        ("border-radius", "50%"),
        ("box-shadow", "0 4px 12px rgba(0,0,0,0.3)"),
        ("cursor", "pointer"),
        ("display", "flex"),
        ("align-items", "center"),
        ("justify-content", "center"),
        ("font-size", "30px"),
        ("user-select", "none"),
        ("z-index", Z_INDEX),
    ])
}

#[must_use]
pub fn panel_style(open: bool) -> String {
    style(&[
        ("position", "fixed"),
        ("bottom", "90px"),
        ("right", "20px"),
        ("width", "350px"),
        ("max-width", "calc(100vw - 40px)"),
        ("height", "500px"),
        ("max-height", "calc(100vh - 110px)"),
        ("background-color", "white"),
        ("border-radius", "12px"),
        ("box-shadow", "0 5px 20px rgba(0,0,0,0.2)"),
        ("display", if open { "flex" } else { "none" }),
        ("flex-direction", "column"),
        ("overflow", "hidden"),
        ("z-index", Z_INDEX),
        ("font-family", "Arial, sans-serif"),
    ])
}

#[must_use]
pub fn header_style(accent: &str) -> String {
    style(&[
        ("background-color", accent),
        ("color", "white"),
        ("padding", "15px"),
        ("font-weight", "bold"),
    ])
}

#[must_use]
pub fn messages_style() -> String {
    style(&[
        ("flex", "1"),
        ("padding", "15px"),
        ("overflow-y", "auto"),
        ("background-color", "#f9f9f9"),
        ("display", "flex"),
        ("flex-direction", "column"),
        ("gap", "10px"),
    ])
}

#[must_use]
pub fn message_style(sender: Sender, accent: &str) -> String {
    let (align, background, color) = match sender {
        Sender::User => ("flex-end", accent, "white"),
        Sender::Bot => ("flex-start", BOT_BACKGROUND, BOT_FOREGROUND),
    };
    style(&[
        ("max-width", "80%"),
        ("padding", "10px"),
        ("border-radius", "10px"),
        ("font-size", "14px"),
        ("line-height", "1.4"),
        ("overflow-wrap", "anywhere"),
        ("align-self", align),
        ("background-color", background),
        ("color", color),
    ])
}

/// Links inherit the bubble's text color, bold and underlined.
#[must_use]
pub fn link_style() -> String {
    style(&[("color", "inherit"), ("font-weight", "bold"), ("text-decoration", "underline")])
}

#[must_use]
pub fn input_row_style() -> String {
    style(&[("display", "flex"), ("border-top", "1px solid #eee")])
}

#[must_use]
pub fn input_style() -> String {
    style(&[
        ("flex", "1"),
        ("padding", "15px"),
        ("border", "none"),
        ("outline", "none"),
        ("font-size", "14px"),
    ])
}

#[must_use]
pub fn send_button_style(accent: &str, enabled: bool) -> String {
    style(&[
        ("padding", "0 20px"),
        ("background-color", "transparent"),
        ("border", "none"),
        ("cursor", if enabled { "pointer" } else { "default" }),
        ("opacity", if enabled { "1" } else { "0.4" }),
        ("color", accent),
        ("font-size", "18px"),
    ])
}
