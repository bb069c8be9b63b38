//! Networking modules for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the request/response wire schema and `api` performs the
//! single POST per message behind the [`api::Transport`] seam.

pub mod api;
pub mod types;
