use api::{Catalog, Filter, ProjectId};
use tracing::debug;

use crate::config::CardConfig;

// a renderable project card
//
// only carries what the grid needs beyond the project itself; the component looks
// the project up in the catalog by id
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub project_id: ProjectId,
    // position within the filtered list
    pub stagger_index: usize,
    // cosmetic entrance offset, nothing waits on it
    pub delay_ms: u32,
    pub reveal_key: String,
    pub badges: Vec<String>,
}

// projects the catalog through a filter into cards
//
// every render replaces the previous output wholesale and bumps the generation, so
// the reveal keys of a re-render never collide with ones that were already revealed
#[derive(Clone, Debug, Default)]
pub struct CardRenderer {
    config: CardConfig,
    generation: u64,
    cards: Vec<Card>,
}

impl CardRenderer {
    pub fn new(config: CardConfig) -> Self {
        CardRenderer {
            config,
            generation: 0,
            cards: Vec::new(),
        }
    }

    pub fn render(&mut self, catalog: &Catalog, filter: &Filter) -> &[Card] {
        self.generation += 1;
        let generation = self.generation;
        let stagger_ms = self.config.stagger_ms;
        let badge_limit = self.config.badge_limit;

        self.cards = catalog
            .filtered(filter)
            .enumerate()
            .map(|(index, project)| Card {
                project_id: project.id,
                stagger_index: index,
                delay_ms: stagger_ms.saturating_mul(index as u32),
                reveal_key: format!("card-{generation}-{}", project.id),
                badges: project.tech.iter().take(badge_limit).cloned().collect(),
            })
            .collect();

        debug!(
            filter = %filter,
            generation,
            count = self.cards.len(),
            "rendered project cards"
        );

        &self.cards
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
