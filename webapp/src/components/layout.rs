use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

use super::{
    modal::{ProjectModal, use_focus_trap},
    navigation::{BackToTop, NavBar},
    reveal::use_reveal,
    scroll::{use_escape_to_close, use_scroll_tracking},
};

// the page chrome around every route: nav, footer, back-to-top and the modal
#[component]
pub fn SiteLayout() -> Element {
    use_scroll_tracking();
    use_escape_to_close();
    use_focus_trap();
    use_reveal();

    rsx! {
        NavBar {}
        main { Outlet::<Route> {} }
        footer { class: "site-footer",
            p { "Built with Rust and Dioxus." }
        }
        BackToTop {}
        ProjectModal {}
    }
}
