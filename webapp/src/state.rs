use std::sync::OnceLock;

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{debug, error, info, warn};
use web_sys::HtmlElement;

use api::{Catalog, Filter, ProjectId};
use common::{
    Ticket,
    cards::CardRenderer,
    config::{SiteConfig, read_config},
    contact::ContactForm,
    filter::FilterController,
    modal::{ModalController, Settled, Transition},
    nav::NavController,
    reveal::RevealTracker,
    theme::ThemeStore,
};

use crate::web::{dom, storage::LocalPreferences};

const SITE_TOML: &str = include_str!("../site.toml");

// read-only data, loaded on first use
static CONFIG: OnceLock<SiteConfig> = OnceLock::new();
static CATALOG: OnceLock<Catalog> = OnceLock::new();

pub fn config() -> &'static SiteConfig {
    CONFIG.get_or_init(|| match read_config(SITE_TOML) {
        Ok(config) => config,
        Err(err) => {
            error!("failed to parse site config, using defaults: {err}");
            SiteConfig::default()
        }
    })
}

pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| match Catalog::bundled() {
        Ok(catalog) if catalog.is_empty() => {
            warn!("project catalog is empty");
            catalog
        }
        Ok(catalog) => {
            info!(projects = catalog.len(), "loaded project catalog");
            catalog
        }
        Err(err) => {
            error!("failed to load project catalog: {err}");
            Catalog::default()
        }
    })
}

// global ui state
//
// each of these is owned by exactly one state machine from the common crate, and
// only the functions below (or the component that owns the concern) write to them.
// everything runs on the browser thread, including the timer callbacks
pub static THEME: GlobalSignal<ThemeStore> = Signal::global(|| {
    let mut theme = ThemeStore::load(&LocalPreferences, dom::system_prefers_dark());

    // first access applies the resolved theme to the document
    if let Some(view) = theme.apply() {
        dom::apply_theme(view);
    }
    theme
});

pub static FILTER: GlobalSignal<FilterController> = Signal::global(FilterController::new);

pub static CARDS: GlobalSignal<CardRenderer> = Signal::global(|| {
    let mut cards = CardRenderer::new(config().cards.clone());
    cards.render(catalog(), &Filter::All);
    cards
});

pub static MODAL: GlobalSignal<ModalController<HtmlElement>> =
    Signal::global(|| ModalController::new(config().modal.clone()));

pub static NAV: GlobalSignal<NavController> =
    Signal::global(|| NavController::new(config().nav.clone(), dom::scroll_y()));

pub static REVEAL: GlobalSignal<RevealTracker<String>> =
    Signal::global(|| RevealTracker::new(config().reveal.threshold));

pub static CONTACT: GlobalSignal<ContactForm> = Signal::global(ContactForm::new);

// theme

pub fn toggle_theme() {
    let view = {
        let mut theme = THEME.write();
        theme.toggle(&mut LocalPreferences);
        theme.apply()
    };

    if let Some(view) = view {
        dom::apply_theme(view);
    }
}

// filtering

pub fn set_filter(filter: Filter) {
    FILTER.write().set_filter(filter);
    CARDS.write().render(catalog(), FILTER.peek().active());
}

// modal

pub fn open_modal(id: ProjectId) {
    let focused = dom::active_element();

    let Some(transition) = MODAL.write().open(id, focused, catalog()) else {
        return;
    };

    dom::set_body_class("modal-open", true);
    schedule_modal(transition);
}

pub fn close_modal() {
    let transition = MODAL.write().close();
    schedule_modal(transition);
}

fn schedule_modal(transition: Transition) {
    let ticket = transition.ticket;
    Timeout::new(transition.delay_ms, move || settle_modal(ticket)).forget();
}

fn settle_modal(ticket: Ticket) {
    // bind first so the write guard is gone before focus events fire
    let settled = MODAL.write().settle(ticket);

    match settled {
        Settled::FocusClose => dom::focus_by_id("close-modal"),
        Settled::RestoreFocus(target) => {
            dom::set_body_class("modal-open", false);

            match target {
                Some(element) if element.is_connected() => dom::focus(&element),
                Some(_) => debug!("element focused before the modal is gone"),
                None => {}
            }
        }
        Settled::Ignored => {}
    }
}

// navigation

pub fn update_nav() {
    let sections = dom::section_bounds();
    let scroll_y = dom::scroll_y();

    NAV.write().on_scroll(scroll_y, &sections);
}
