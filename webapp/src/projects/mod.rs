use dioxus::prelude::*;

use crate::{components::reveal::reveal_class, state::CARDS};

pub mod card;
use card::ProjectCard;

pub mod filter;
use filter::FilterBar;

#[component]
pub fn ProjectsSection() -> Element {
    let cards = CARDS.read().cards().to_vec();

    rsx! {
        section { id: "projects", class: "page-section",
            div {
                class: reveal_class("section-heading", "projects"),
                "data-reveal": "projects",
                h2 { class: "section-title", "Featured Projects" }
            }

            FilterBar {}

            // an empty filter result is just an empty grid
            div { id: "projects-grid", class: "projects-grid",
                for card in cards {
                    ProjectCard { key: "{card.reveal_key}", card: card.clone() }
                }
            }
        }
    }
}
