use dioxus::prelude::*;

use crate::{
    state::{NAV, THEME, toggle_theme},
    web::dom,
};

// (section id, link text), top to bottom
pub const SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[derive(Clone, PartialEq, Props)]
struct NavLinkProps {
    section: &'static str,
    label: &'static str,
    mobile: bool,
}

// one link in either the desktop bar or the mobile menu; both sets highlight the
// same section
#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let section = props.section;
    let mobile = props.mobile;
    let active = NAV.read().link_active(section);

    let class = match (mobile, active) {
        (false, false) => "nav-link",
        (false, true) => "nav-link active",
        (true, false) => "mobile-nav-link",
        (true, true) => "mobile-nav-link active",
    };

    rsx! {
        a {
            class,
            href: "#{section}",
            "data-section": section,
            "aria-current": if active { "true" } else { "false" },
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                if mobile {
                    NAV.write().close_mobile_menu();
                }
                dom::scroll_to_section(section);
            },
            "{props.label}"
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let view = THEME.read().view();

    rsx! {
        button {
            id: "theme-toggle",
            class: "icon-btn",
            r#type: "button",
            "aria-label": "Toggle dark mode",
            onclick: move |_| toggle_theme(),
            span {
                id: "theme-toggle-dark-icon",
                style: if view.show_dark_icon { "" } else { "display: none;" },
                "☾"
            }
            span {
                id: "theme-toggle-light-icon",
                style: if view.show_light_icon { "" } else { "display: none;" },
                "☀"
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let nav = NAV.read();
    let hidden = nav.view().nav_hidden;
    let menu_open = nav.mobile_menu_open();
    let expanded = nav.aria_expanded();
    drop(nav);

    rsx! {
        nav {
            id: "main-nav",
            class: if hidden { "main-nav nav-hidden" } else { "main-nav" },
            div { class: "nav-container",
                a {
                    class: "logo",
                    href: "#home",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        dom::scroll_to_section("home");
                    },
                    span { style: "font-weight: 700; font-size: 1.25rem;", "Portfolio" }
                }

                div { class: "nav-links",
                    for (section , label) in SECTIONS {
                        NavLink { section, label, mobile: false }
                    }
                }

                div { class: "nav-controls",
                    ThemeToggle {}
                    button {
                        id: "mobile-menu-btn",
                        class: "icon-btn mobile-menu-btn",
                        r#type: "button",
                        "aria-controls": "navbar-sticky",
                        "aria-expanded": expanded,
                        "aria-label": "Open main menu",
                        onclick: move |_| {
                            NAV.write().toggle_mobile_menu();
                        },
                        "☰"
                    }
                }
            }

            div {
                id: "navbar-sticky",
                class: if menu_open { "mobile-menu" } else { "mobile-menu hidden" },
                for (section , label) in SECTIONS {
                    NavLink { section, label, mobile: true }
                }
            }
        }
    }
}

#[component]
pub fn BackToTop() -> Element {
    let visible = NAV.read().view().back_to_top_visible;

    rsx! {
        button {
            id: "back-to-top",
            class: if visible { "back-to-top" } else { "back-to-top concealed" },
            r#type: "button",
            "aria-label": "Back to top",
            onclick: move |_| dom::scroll_to_top(),
            "↑"
        }
    }
}
