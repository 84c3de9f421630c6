use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{
    Document, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollToOptions, Window,
};

use tracing::{debug, warn};

use common::{nav::SectionBounds, theme::ThemeView};

// thin helpers over web_sys
//
// everything here tolerates missing nodes; the page structure is fixed, so a
// missing node is a bug worth a log line but not a panic

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    let element = document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());

    if element.is_none() {
        warn!(id, "missing element");
    }
    element
}

pub fn active_element() -> Option<HtmlElement> {
    document()
        .and_then(|d| d.active_element())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

pub fn focus(element: &HtmlElement) {
    if let Err(err) = element.focus() {
        debug!("failed to move focus: {err:?}");
    }
}

pub fn focus_by_id(id: &str) {
    if let Some(element) = element_by_id(id) {
        focus(&element);
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_section(id: &str) {
    if let Some(element) = element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

// every <section id=...> on the page, top to bottom
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all("section[id]").ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds::new(section.id(), f64::from(section.offset_top())))
        .collect()
}

pub fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn apply_theme(view: ThemeView) {
    let Some(root) = document().and_then(|d| d.document_element()) else {
        return;
    };

    if let Err(err) = root.class_list().toggle_with_force("dark", view.dark) {
        warn!("failed to apply theme: {err:?}");
    }
}

pub fn set_body_class(class: &str, on: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        if let Err(err) = body.class_list().toggle_with_force(class, on) {
            warn!(class, "failed to set body class: {err:?}");
        }
    }
}

// an event listener that is removed again when dropped
//
// the closure has to outlive the registration, so it is kept here instead of being
// forgotten
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: EventTarget, event: &'static str, callback: F) -> Option<Listener>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);

        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Listener {
                target,
                event,
                callback,
            }),
            Err(err) => {
                warn!(event, "failed to add event listener: {err:?}");
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback = self.callback.as_ref().unchecked_ref();

        if let Err(err) = self.target.remove_event_listener_with_callback(self.event, callback) {
            debug!(event = self.event, "failed to remove event listener: {err:?}");
        }
    }
}
