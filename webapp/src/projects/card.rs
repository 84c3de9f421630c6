use dioxus::prelude::*;

use common::cards::Card;

use crate::{
    components::reveal::reveal_class,
    state::{catalog, open_modal},
};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    card: Card,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let card = props.card;
    let project_id = card.project_id;

    // cards are only ever built from the catalog, so this is always found
    let Some(project) = catalog().get(project_id) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: reveal_class("project-card", &card.reveal_key),
            "data-reveal": "{card.reveal_key}",
            style: "transition-delay: {card.delay_ms}ms;",

            button {
                class: "project-thumb",
                r#type: "button",
                "aria-label": "View details for {project.title}",
                onclick: move |_| open_modal(project_id),
                img { src: "{project.image}", alt: "{project.title}" }
                div { class: "overlay",
                    span { "View Details" }
                }
            }

            div { class: "project-body",
                span { class: "category-tag", "{project.category}" }
                h3 { style: "font-size: 1.25rem; font-weight: 700; margin-bottom: var(--space-2);",
                    "{project.title}"
                }
                p { style: "color: var(--text-secondary); margin-bottom: var(--space-4);",
                    "{project.summary}"
                }
                div { class: "badges",
                    for badge in card.badges.iter() {
                        span { class: "badge", "{badge}" }
                    }
                }
            }
        }
    }
}
