//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (script-tag
//! attributes, `localStorage`, inline styling) and pure text transforms from
//! component logic so they can be tested without a DOM.

pub mod config;
pub mod identity;
pub mod markup;
pub mod theme;
