//! # chat-widget
//!
//! Embeddable chat widget compiled to WebAssembly. A host page adds one
//! script tag; the widget injects a floating bubble and chat panel, sends
//! each message (plus prior turns) to a chat endpoint, and renders the reply
//! with link and line-break formatting.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`util::config`] | Script-tag attributes parsed into [`util::config::WidgetConfig`] |
//! | [`util::identity`] | Durable per-visitor id backed by a key-value store |
//! | [`util::markup`] | Two-rule link/line-break renderer over a text model |
//! | [`util::theme`] | Inline style strings (no global selectors) |
//! | [`net`] | Wire schema and the HTTP [`net::api::Transport`] |
//! | [`state`] | Per-instance [`state::widget::WidgetState`] state machine |
//! | [`controller`] | Submission flow from input to rendered reply |
//! | [`components`] | Leptos view tree |
//! | [`app`] | Browser entry point and [`app::WidgetHandle`] (`csr` only) |

#[cfg(feature = "csr")]
pub mod app;
pub mod components;
pub mod controller;
pub mod net;
pub mod state;
pub mod util;
