//! One chat message rendered from its segments.

use leptos::prelude::*;

use crate::state::widget::Bubble;
use crate::util::markup::Segment;
use crate::util::theme;

/// A message aligned and colored by sender.
///
/// Text segments become escaped text nodes; reply content is never set as
/// inner HTML.
#[component]
pub fn MessageBubble(bubble: Bubble, accent: String) -> impl IntoView {
    let style = theme::message_style(bubble.sender, &accent);
    let content = bubble.segments.into_iter().map(render_segment).collect::<Vec<_>>();

    view! { <div style=style>{content}</div> }
}

fn render_segment(segment: Segment) -> AnyView {
    match segment {
        Segment::Text(text) => view! { <span>{text}</span> }.into_any(),
        Segment::Link { label, url } => view! {
            <a href=url target=theme::LINK_TARGET rel=theme::LINK_REL style=theme::link_style()>
                {label}
            </a>
        }
        .into_any(),
        Segment::LineBreak => view! { <br/> }.into_any(),
    }
}
