use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::warn;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{EventTarget, KeyboardEvent};

use common::nav::ScrollThrottle;

use crate::{
    state::{MODAL, close_modal, update_nav},
    web::dom::{self, Listener},
};

// window scroll tracking
//
// scroll events can fire many times per frame, so they only ever request an
// animation frame; the nav state is recomputed once inside it
struct ScrollTracker {
    _listener: Option<Listener>,
    _frame: Rc<Closure<dyn FnMut()>>,
}

impl ScrollTracker {
    fn new() -> Option<Self> {
        let window = dom::window()?;
        let throttle = Rc::new(RefCell::new(ScrollThrottle::default()));

        let frame = {
            let throttle = throttle.clone();
            Rc::new(Closure::<dyn FnMut()>::new(move || {
                if throttle.borrow_mut().take() {
                    update_nav();
                }
            }))
        };

        let listener = {
            let frame = frame.clone();
            let window = window.clone();

            Listener::new(EventTarget::from(window.clone()), "scroll", move |_| {
                if !throttle.borrow_mut().request() {
                    return;
                }

                let callback: &Closure<dyn FnMut()> = &frame;
                let callback = callback.as_ref().unchecked_ref();

                if let Err(err) = window.request_animation_frame(callback) {
                    warn!("failed to schedule nav update: {err:?}");
                    throttle.borrow_mut().take();
                }
            })
        };

        // pick up the position the page was loaded at
        update_nav();

        Some(ScrollTracker {
            _listener: listener,
            _frame: frame,
        })
    }
}

pub fn use_scroll_tracking() {
    use_hook(|| Rc::new(ScrollTracker::new()));
}

// Escape closes the modal from anywhere on the page, but only while it is showing
pub fn use_escape_to_close() {
    use_hook(|| {
        let listener = dom::document().and_then(|document| {
            Listener::new(EventTarget::from(document), "keydown", |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };

                if event.key() == "Escape" && MODAL.peek().should_close_on_escape() {
                    close_modal();
                }
            })
        });

        Rc::new(listener)
    });
}
