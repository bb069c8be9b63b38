//! Widget configuration parsed from the embedding script tag.
//!
//! Every attribute is optional. Missing, blank, or malformed values fall back
//! to the defaults below; configuration never fails.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CLIENT_ID: &str = "demo_client";
pub const DEFAULT_ENDPOINT: &str = "https://bot-rdv.onrender.com/chat";
pub const DEFAULT_TITLE: &str = "Assistant 🤖";
pub const DEFAULT_PLACEHOLDER: &str = "Type here...";
pub const DEFAULT_ACCENT: &str = "#2563EB";
pub const DEFAULT_ERROR_TEXT: &str = "❌ Connection error.";
pub const DEFAULT_STORAGE_KEY: &str = "bot_user_id";

pub const ATTR_CLIENT_ID: &str = "data-client-id";
pub const ATTR_ENDPOINT: &str = "data-endpoint";
pub const ATTR_TITLE: &str = "data-title";
pub const ATTR_PLACEHOLDER: &str = "data-placeholder";
pub const ATTR_COLOR: &str = "data-color";
pub const ATTR_HISTORY: &str = "data-history";
pub const ATTR_ERROR_TEXT: &str = "data-error-text";
pub const ATTR_STORAGE_KEY: &str = "data-storage-key";
pub const ATTR_AUTO_MOUNT: &str = "data-auto-mount";

/// Tenant identifier scoping which backend configuration answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self(DEFAULT_CLIENT_ID.to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub client_id: ClientId,
    pub endpoint: String,
    pub title: String,
    pub placeholder: String,
    /// CSS hex color used for the bubble, header, and user messages.
    pub accent: String,
    /// Send prior turns with each request.
    pub track_history: bool,
    pub error_text: String,
    pub storage_key: String,
    pub auto_mount: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            client_id: ClientId::default(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            accent: DEFAULT_ACCENT.to_owned(),
            track_history: true,
            error_text: DEFAULT_ERROR_TEXT.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            auto_mount: true,
        }
    }
}

impl WidgetConfig {
    /// Build config from an attribute lookup (`name -> value`).
    pub fn from_attributes<F>(attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str, default: &str| non_blank(attr(name)).unwrap_or_else(|| default.to_owned());
        let flag = |name: &str| non_blank(attr(name)).map_or(true, |raw| parse_flag(&raw));

        Self {
            client_id: non_blank(attr(ATTR_CLIENT_ID)).map(ClientId::new).unwrap_or_default(),
            endpoint: text(ATTR_ENDPOINT, DEFAULT_ENDPOINT),
            title: text(ATTR_TITLE, DEFAULT_TITLE),
            placeholder: text(ATTR_PLACEHOLDER, DEFAULT_PLACEHOLDER),
            accent: non_blank(attr(ATTR_COLOR))
                .filter(|c| is_hex_color(c))
                .unwrap_or_else(|| DEFAULT_ACCENT.to_owned()),
            track_history: flag(ATTR_HISTORY),
            error_text: text(ATTR_ERROR_TEXT, DEFAULT_ERROR_TEXT),
            storage_key: text(ATTR_STORAGE_KEY, DEFAULT_STORAGE_KEY),
            auto_mount: flag(ATTR_AUTO_MOUNT),
        }
    }

    /// Read config from a script element's `data-*` attributes.
    #[cfg(feature = "csr")]
    pub fn from_element(element: Option<&web_sys::Element>) -> Self {
        match element {
            Some(el) => Self::from_attributes(|name| el.get_attribute(name)),
            None => Self::default(),
        }
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_flag(raw: &str) -> bool {
    !matches!(raw.to_ascii_lowercase().as_str(), "off" | "false" | "0" | "no")
}

/// Accepts `#rgb`, `#rrggbb`, and `#rrggbbaa`.
fn is_hex_color(raw: &str) -> bool {
    let Some(hex) = raw.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

