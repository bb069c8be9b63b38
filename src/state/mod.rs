//! Per-instance widget state.
//!
//! DESIGN
//! ======
//! Each mounted widget owns exactly one [`widget::WidgetState`]. Nothing is
//! module-global, so several widgets on one page never share history or UI
//! state.

pub mod widget;
