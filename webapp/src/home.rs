use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route, components::reveal::reveal_class, contact::ContactSection, projects::ProjectsSection,
    web::dom,
};

const SKILLS: [(&str, &str); 4] = [
    ("Frontend", "React, Vue, Tailwind CSS and accessible, responsive layouts."),
    ("Backend", "Node.js, Go and REST APIs backed by MongoDB or SQL."),
    ("Full Stack", "Next.js, Firebase and CMS-backed sites end to end."),
    ("Tooling", "Docker, CI pipelines and command line automation."),
];

#[component]
fn Hero() -> Element {
    rsx! {
        section { id: "home", class: "page-section hero",
            h1 { class: "hero-title", "Hi, I build things for the web." }
            p { class: "hero-subtitle",
                "Full stack developer focused on fast, accessible and maintainable applications."
            }
            div { class: "hero-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| dom::scroll_to_section("projects"),
                    "View Projects"
                }
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| dom::scroll_to_section("contact"),
                    "Contact Me"
                }
            }
        }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        section { id: "about", class: "page-section",
            div { class: reveal_class("about", "about"), "data-reveal": "about",
                h2 { class: "section-title", "About Me" }
                p { class: "about-text",
                    "I enjoy turning messy problems into simple, reliable software. Most of my \
                     work sits somewhere between a polished interface and the services behind it."
                }
            }
            div { class: reveal_class("skills-grid", "skills"), "data-reveal": "skills",
                for (title , text) in SKILLS {
                    div { class: "skill-card",
                        h3 { "{title}" }
                        p { style: "color: var(--text-secondary);", "{text}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        About {}
        ProjectsSection {}
        ContactSection {}
    }
}

#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        section { class: "page-section hero",
            h1 { class: "hero-title", "Page not found" }
            p { class: "hero-subtitle", "There is nothing at /{path}." }
            div { class: "hero-actions",
                Link { to: Route::Home {}, class: "btn btn-primary", "Back to the portfolio" }
            }
        }
    }
}
