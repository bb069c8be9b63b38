//! Floating bubble plus expandable chat panel.

use leptos::prelude::*;

use crate::components::message_bubble::MessageBubble;
use crate::controller;
use crate::net::api::HttpTransport;
use crate::state::widget::{Bubble, Sender, WidgetState};
use crate::util::config::WidgetConfig;
use crate::util::theme;

/// The whole widget: bubble toggle, header, message list, and input row.
#[component]
pub fn ChatWidget(config: WidgetConfig, state: RwSignal<WidgetState>, transport: HttpTransport) -> impl IntoView {
    let transport = StoredValue::new(transport);
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let input = RwSignal::new(String::new());
    let messages = Memo::new(move |_| state.with(|s| s.messages.clone()));
    let scroll_key = Memo::new(move |_| state.with(WidgetState::scroll_key));

    // Keep the newest message (or the pending indicator) in view.
    Effect::new(move || {
        scroll_key.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    Effect::new(move || {
        if state.with(|s| s.open) {
            #[cfg(feature = "csr")]
            {
                if let Some(input_el) = input_ref.get() {
                    if let Err(e) = input_el.focus() {
                        log::debug!("widget: input focus failed: {e:?}");
                    }
                }
            }
        }
    });

    let do_send = move || {
        let Some(request) = controller::begin(&state, &input.get_untracked()) else {
            return;
        };
        input.set(String::new());
        let transport = transport.get_value();
        leptos::task::spawn_local(async move {
            controller::dispatch(&state, &transport, request).await;
        });
    };

    let on_toggle = move |_| {
        state.update(|s| {
            s.toggle();
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if controller::is_submit_key(&ev.key(), ev.shift_key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || input.with(|draft| state.with(|s| s.can_send(draft)));
    let is_open = move || state.with(|s| s.open);

    let header_style = theme::header_style(&config.accent);
    let bubble_style = theme::bubble_style(&config.accent);
    let send_accent = config.accent.clone();
    let list_accent = config.accent.clone();
    let pending_style = theme::message_style(Sender::Bot, &config.accent);

    view! {
        <div>
            <div style=move || theme::panel_style(is_open()) role="dialog" aria-label=config.title.clone()>
                <div style=header_style>{config.title.clone()}</div>

                <div style=theme::messages_style() node_ref=messages_ref aria-live="polite">
                    <For
                        each=move || messages.get()
                        key=|bubble| bubble.id
                        children=move |bubble: Bubble| view! { <MessageBubble bubble=bubble accent=list_accent.clone()/> }
                    />

                    {move || {
                        let style = pending_style.clone();
                        state.with(WidgetState::is_awaiting).then(|| view! { <div style=style>"…"</div> })
                    }}
                </div>

                <div style=theme::input_row_style()>
                    <input
                        type="text"
                        style=theme::input_style()
                        placeholder=config.placeholder.clone()
                        aria-label=config.placeholder.clone()
                        node_ref=input_ref
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button
                        type="button"
                        aria-label="Send"
                        style=move || theme::send_button_style(&send_accent, can_send())
                        disabled=move || !can_send()
                        on:click=move |_| do_send()
                    >
                        {theme::SEND_GLYPH}
                    </button>
                </div>
            </div>

            <div style=bubble_style role="button" aria-label="Chat" on:click=on_toggle>
                {move || theme::bubble_glyph(is_open())}
            </div>
        </div>
    }
}
