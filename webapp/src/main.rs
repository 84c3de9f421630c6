#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod web;

mod state;

mod components;
use components::layout::SiteLayout;

mod contact;

mod home;
use home::{Home, PageNotFound};

mod projects;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the portfolio is a single page; sections are reached by scrolling rather than
// routing, so anything else is a 404
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
    #[end_layout]
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{web::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
