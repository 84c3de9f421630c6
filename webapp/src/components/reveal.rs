use std::{collections::HashSet, rc::Rc};

use dioxus::prelude::*;
use js_sys::Array;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use common::config::RevealConfig;

use crate::{
    state::{CARDS, REVEAL, config},
    web::dom,
};

pub const REVEAL_ATTR: &str = "data-reveal";

// class list for a revealable element
pub fn reveal_class(base: &str, key: &str) -> String {
    if REVEAL.read().is_revealed(key) {
        format!("{base} reveal active")
    } else {
        format!("{base} reveal")
    }
}

// IntersectionObserver feeding the reveal tracker
//
// elements opt in with a data-reveal key.  the tracker decides when a key is
// revealed, and the observer just stops watching that element afterwards
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn new(reveal: &RevealConfig) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };

                    if !entry.is_intersecting() {
                        continue;
                    }

                    let target = entry.target();
                    let Some(key) = target.get_attribute(REVEAL_ATTR) else {
                        continue;
                    };

                    if REVEAL.write().intersect(key.as_str(), entry.intersection_ratio()) {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(reveal.threshold));
        options.set_root_margin(&reveal.root_margin);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => Some(RevealObserver {
                observer,
                _callback: callback,
            }),
            Err(err) => {
                warn!("failed to create reveal observer: {err:?}");
                None
            }
        }
    }

    // observe every revealable element currently in the document
    //
    // old observations are dropped wholesale, which also forgets elements that were
    // removed since the last call
    fn rearm(&self) {
        let Some(nodes) = dom::document()
            .and_then(|d| d.query_selector_all(&format!("[{REVEAL_ATTR}]")).ok())
        else {
            return;
        };

        let elements: Vec<(String, Element)> = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|element| element.get_attribute(REVEAL_ATTR).map(|key| (key, element)))
            .collect();

        let armed: HashSet<String> = REVEAL
            .write()
            .arm(elements.iter().map(|(key, _)| key.clone()))
            .into_iter()
            .collect();

        self.observer.disconnect();
        for (key, element) in &elements {
            if armed.contains(key) {
                self.observer.observe(element);
            }
        }

        debug!(observed = armed.len(), total = elements.len(), "re-armed reveal observer");
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// re-arms after every card render, since those replace the grid's elements
pub fn use_reveal() {
    let observer = use_hook(|| Rc::new(RevealObserver::new(&config().reveal)));

    use_effect(move || {
        // subscribe to card renders
        let _ = CARDS.read().generation();

        if let Some(observer) = &*observer {
            observer.rearm();
        }
    });
}
