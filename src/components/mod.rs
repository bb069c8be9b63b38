//! Leptos view tree for the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` builds the bubble, panel, message list, and input row from a
//! widget's state signal; `message_bubble` renders one message's segments.

pub mod chat_widget;
pub mod message_bubble;
