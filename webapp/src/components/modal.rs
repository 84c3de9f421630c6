use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement, KeyboardEvent, Node};

use common::focus::{FOCUSABLE_SELECTOR, trap_tab};

use crate::{
    state::{MODAL, catalog, close_modal},
    web::dom::{self, Listener},
};

// keeps Tab and Shift+Tab cycling inside the dialog
//
// focus can end up outside the dialog (on the body after clicking the image, say),
// in which case the next Tab pulls it back in
fn trap_focus(evt: &KeyboardEvent) {
    let Some(modal) = dom::element_by_id("project-modal") else {
        return;
    };
    let Ok(nodes) = modal.query_selector_all(FOCUSABLE_SELECTOR) else {
        return;
    };

    let focusables: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();

    let current = dom::active_element().and_then(|active| {
        let active: &Node = &active;
        focusables.iter().position(|f| f.is_same_node(Some(active)))
    });

    if let Some(next) = trap_tab(focusables.len(), current, evt.shift_key()) {
        evt.prevent_default();
        dom::focus(&focusables[next]);
    }
}

// listens on the document rather than the dialog, so Tab is trapped wherever focus
// happens to be while the modal is visible
pub fn use_focus_trap() {
    use_hook(|| {
        let listener = dom::document().and_then(|document| {
            Listener::new(EventTarget::from(document), "keydown", |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };

                if event.key() == "Tab" && MODAL.peek().should_trap_focus() {
                    trap_focus(event);
                }
            })
        });

        Rc::new(listener)
    });
}

// project detail dialog
//
// the fields are always in the document so that their ids are stable; while closed
// they just hold whatever was shown last (or nothing)
#[component]
pub fn ProjectModal() -> Element {
    let modal = MODAL.read();
    let visible = modal.is_visible();
    let shown = modal.is_shown();
    let hidden = modal.aria_hidden();
    let detail = modal.detail(catalog()).unwrap_or_default();
    drop(modal);

    rsx! {
        div {
            id: "project-modal",
            class: if visible { "modal flex" } else { "modal hidden" },
            "role": "dialog",
            "aria-modal": "true",
            "aria-labelledby": "m-title",
            "aria-hidden": if hidden { "true" } else { "false" },

            div {
                id: "modal-backdrop",
                class: "modal-backdrop",
                onclick: move |_| close_modal(),
            }

            div { class: if shown { "modal-content shown" } else { "modal-content" },
                div { class: "modal-hero",
                    img { id: "m-image", src: "{detail.image}", alt: "{detail.title}" }
                    div { id: "m-tags", class: "modal-tags",
                        if !detail.tag.is_empty() {
                            span { "{detail.tag}" }
                        }
                    }
                    button {
                        id: "close-modal",
                        class: "btn-close",
                        r#type: "button",
                        "aria-label": "Close project details",
                        onclick: move |_| close_modal(),
                        "×"
                    }
                }

                div { class: "modal-body",
                    h2 { id: "m-title", class: "section-title", "{detail.title}" }
                    p { id: "m-summary", "{detail.summary}" }

                    div {
                        h3 { "The Problem" }
                        p { id: "m-problem", "{detail.problem}" }
                    }

                    div {
                        h3 { "Key Features" }
                        ol { id: "m-features",
                            for feature in detail.features.iter() {
                                li { "{feature}" }
                            }
                        }
                    }

                    div {
                        h3 { "Tech Stack" }
                        div { id: "m-stack", class: "badges",
                            for tech in detail.tech.iter() {
                                span { class: "badge", "{tech}" }
                            }
                        }
                    }

                    div { class: "modal-actions",
                        a {
                            id: "m-repo",
                            class: "btn btn-outline",
                            href: "{detail.repo}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "View Code"
                        }
                        a {
                            id: "m-demo",
                            class: "btn btn-primary",
                            href: "{detail.demo}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Live Demo"
                        }
                    }
                }
            }
        }
    }
}
