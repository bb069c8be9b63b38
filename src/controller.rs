//! Submission flow: input -> transport -> rendered reply.
//!
//! SYSTEM CONTEXT
//! ==============
//! The view calls [`begin`] synchronously on send-button clicks and Enter,
//! clears its input when a request comes back, and spawns [`dispatch`]. The
//! widget handle calls [`submit`], which does both. Either way the same
//! Idle -> `AwaitingReply` -> Idle cycle runs on [`WidgetState`].
//!
//! State is only borrowed between awaits, never across one. The single
//! suspension point is the transport round trip.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::Transport;
use crate::net::types::ChatRequest;
use crate::state::widget::WidgetState;

/// Shared mutable access to a widget's state.
pub trait StateCell {
    /// Run `f` against the state; `None` once the widget is gone.
    fn with_state<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R>;
}

impl StateCell for RefCell<WidgetState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl StateCell for RwSignal<WidgetState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Send `text` as a new message. Returns `false` when nothing was sent.
pub async fn submit<S, T>(state: &S, transport: &T, text: &str) -> bool
where
    S: StateCell,
    T: Transport,
{
    let Some(request) = begin(state, text) else {
        return false;
    };
    dispatch(state, transport, request).await;
    true
}

/// Idle -> `AwaitingReply`: show the user's message and build the request.
///
/// `None` for blank text, while a reply is pending, or once the widget is gone.
pub fn begin<S: StateCell>(state: &S, text: &str) -> Option<ChatRequest> {
    state.with_state(|s| s.begin_send(text)).flatten()
}

/// Send a request from [`begin`] and apply the outcome.
pub async fn dispatch<S, T>(state: &S, transport: &T, request: ChatRequest)
where
    S: StateCell,
    T: Transport,
{
    log::debug!("chat: sending message with {} prior turns", request.history.len());
    let result = transport.send(&request).await;
    if state.with_state(|s| s.finish_send(&request, result)).is_none() {
        log::debug!("chat: widget destroyed before reply arrived");
    }
}

/// Enter submits; Shift+Enter and keys inside an IME composition do not.
#[must_use]
pub fn is_submit_key(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}
