//! Browser entry point and per-instance widget handle.
//!
//! On module start the widget reads its configuration from the embedding
//! script tag and mounts itself, unless the tag sets
//! `data-auto-mount="false"`. Hosts that need more control call
//! `mountChatWidget()` and keep the returned [`WidgetHandle`].
//!
//! ERROR HANDLING
//! ==============
//! Nothing here throws into the host page except `mountChatWidget` when the
//! document has no `<body>`. Transport and storage failures are absorbed by
//! the controller and identity store.

use std::any::Any;
use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::controller;
use crate::net::api::HttpTransport;
use crate::state::widget::WidgetState;
use crate::util::config::WidgetConfig;
use crate::util::identity::{LocalStore, visitor_id_or_create};

const SCRIPT_SELECTORS: [&str; 2] = ["script[data-chat-widget]", "script[data-client-id]"];

thread_local! {
    static AUTO_WIDGET: RefCell<Option<WidgetHandle>> = const { RefCell::new(None) };
}

/// A mounted widget. Dropping or destroying it removes the widget from the page.
#[wasm_bindgen]
pub struct WidgetHandle {
    state: RwSignal<WidgetState>,
    transport: HttpTransport,
    host: Option<web_sys::HtmlElement>,
    mount: Option<Box<dyn Any>>,
}

#[wasm_bindgen]
impl WidgetHandle {
    /// Open or close the panel. Returns the new open state.
    pub fn toggle(&self) -> bool {
        self.state.try_update(WidgetState::toggle).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.state.try_with(|s| s.open).unwrap_or(false)
    }

    /// Send `text` as if the visitor typed it. Resolves to `false` when the
    /// text is blank, a reply is still pending, or the widget is destroyed.
    pub fn send(&self, text: String) -> js_sys::Promise {
        let state = self.state;
        let transport = self.transport.clone();
        wasm_bindgen_futures::future_to_promise(async move {
            let sent = controller::submit(&state, &transport, &text).await;
            Ok(JsValue::from_bool(sent))
        })
    }

    /// Unmount the widget and release its state.
    pub fn destroy(&mut self) {
        self.teardown();
    }
}

impl WidgetHandle {
    fn teardown(&mut self) {
        let Some(mount) = self.mount.take() else {
            return;
        };
        drop(mount);
        if let Some(host) = self.host.take() {
            host.remove();
        }
        self.state.dispose();
        log::info!("widget: unmounted");
    }
}

impl Drop for WidgetHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Mount a widget configured by `config` into a new host element on `<body>`.
///
/// # Errors
///
/// Returns a JS error when there is no document body to mount into.
pub fn mount(config: WidgetConfig) -> Result<WidgetHandle, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("chat widget: no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("chat widget: no <body>"))?;

    let host = document.create_element("div")?.dyn_into::<web_sys::HtmlElement>()?;
    body.append_child(&host)?;

    let visitor_id = visitor_id_or_create(&LocalStore::open(), &config.storage_key);
    let transport = HttpTransport::new(config.endpoint.clone(), config.client_id.clone(), visitor_id);
    let state = RwSignal::new(WidgetState::from_config(&config));

    log::debug!("widget: mounting for client {}", config.client_id.as_str());
    let view_transport = transport.clone();
    let unmount = leptos::mount::mount_to(host.clone(), move || {
        view! { <ChatWidget config=config state=state transport=view_transport/> }
    });

    Ok(WidgetHandle { state, transport, host: Some(host), mount: Some(Box::new(unmount)) })
}

/// Locate the embedding script tag.
fn find_script() -> Option<web_sys::Element> {
    let document = web_sys::window()?.document()?;
    if let Some(current) = document.current_script() {
        return Some(current);
    }
    SCRIPT_SELECTORS
        .iter()
        .find_map(|selector| document.query_selector(selector).ok().flatten())
}

/// Mount a widget from a script element's `data-*` attributes.
///
/// Without an element, the embedding script tag is located automatically.
///
/// # Errors
///
/// Returns a JS error when there is no document body to mount into.
#[wasm_bindgen(js_name = mountChatWidget)]
pub fn mount_chat_widget(script: Option<web_sys::Element>) -> Result<WidgetHandle, JsValue> {
    let script = script.or_else(find_script);
    mount(WidgetConfig::from_element(script.as_ref()))
}

/// Remove the automatically mounted widget, if any.
#[wasm_bindgen(js_name = destroyChatWidget)]
pub fn destroy_chat_widget() {
    if let Some(mut handle) = AUTO_WIDGET.with(|slot| slot.borrow_mut().take()) {
        handle.destroy();
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("widget: logger already installed");
    }

    let config = WidgetConfig::from_element(find_script().as_ref());
    if !config.auto_mount {
        log::info!("widget: auto-mount disabled; call mountChatWidget()");
        return;
    }

    match mount(config) {
        Ok(handle) => AUTO_WIDGET.with(|slot| *slot.borrow_mut() = Some(handle)),
        Err(e) => log::warn!("widget: mount failed: {e:?}"),
    }
}
