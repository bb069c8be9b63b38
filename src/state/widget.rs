#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use crate::net::api::TransportError;
use crate::net::types::{ChatReply, ChatRequest, ConversationTurn};
use crate::util::config::WidgetConfig;
use crate::util::markup::{self, Segment};

/// Who a message bubble belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// Request lifecycle. At most one request is outstanding per widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingReply,
}

/// A rendered message in the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bubble {
    pub id: u64,
    pub sender: Sender,
    pub segments: Vec<Segment>,
}

/// State for one mounted widget.
///
/// In the browser this lives in an `RwSignal` owned by the widget handle.
/// The text being typed is not part of it; the input row keeps its own
/// signal so keystrokes never touch the message list.
#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    pub open: bool,
    pub phase: Phase,
    pub messages: Vec<Bubble>,
    /// Completed turns, append-only, `user` then `assistant`.
    pub history: Vec<ConversationTurn>,
    track_history: bool,
    error_text: String,
    next_bubble_id: u64,
}

impl WidgetState {
    pub fn new(track_history: bool, error_text: impl Into<String>) -> Self {
        Self { track_history, error_text: error_text.into(), ..Self::default() }
    }

    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.track_history, config.error_text.clone())
    }

    /// Flip the panel open/closed and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    #[must_use]
    pub fn is_awaiting(&self) -> bool {
        self.phase == Phase::AwaitingReply
    }

    /// Whether the send affordance is enabled for `draft`.
    #[must_use]
    pub fn can_send(&self, draft: &str) -> bool {
        !self.is_awaiting() && !draft.trim().is_empty()
    }

    /// Changes exactly when the message list has to scroll to its end.
    #[must_use]
    pub fn scroll_key(&self) -> (usize, bool) {
        (self.messages.len(), self.is_awaiting())
    }

    /// Append a bubble; the view scrolls to it.
    pub fn append_message(&mut self, segments: Vec<Segment>, sender: Sender) {
        self.next_bubble_id += 1;
        self.messages.push(Bubble { id: self.next_bubble_id, sender, segments });
    }

    /// Idle -> `AwaitingReply` for non-empty `raw`.
    ///
    /// Shows the user's message and returns the request to send. Returns
    /// `None` (and changes nothing) for blank input or while a reply is
    /// outstanding.
    pub fn begin_send(&mut self, raw: &str) -> Option<ChatRequest> {
        let message = raw.trim();
        if message.is_empty() || self.is_awaiting() {
            return None;
        }

        self.append_message(markup::plain(message), Sender::User);
        self.phase = Phase::AwaitingReply;

        let history = if self.track_history { self.history.clone() } else { Vec::new() };
        Some(ChatRequest { message: message.to_owned(), history })
    }

    /// `AwaitingReply` -> Idle with the transport outcome.
    ///
    /// A reply is rendered and, when tracking is on, recorded as a
    /// `user`/`assistant` pair. A failure shows the fixed error text and
    /// leaves history untouched.
    pub fn finish_send(&mut self, request: &ChatRequest, result: Result<ChatReply, TransportError>) {
        self.phase = Phase::Idle;
        match result {
            Ok(reply) => {
                if let Some(status) = reply.status.as_deref() {
                    log::debug!("chat: reply received (status {status})");
                }
                self.append_message(markup::render(&reply.reply), Sender::Bot);
                if self.track_history {
                    self.history.push(ConversationTurn::user(request.message.clone()));
                    self.history.push(ConversationTurn::assistant(reply.reply));
                }
            }
            Err(e) => {
                log::warn!("chat: request failed: {e}");
                let text = self.error_text.clone();
                self.append_message(markup::plain(&text), Sender::Bot);
            }
        }
    }
}
