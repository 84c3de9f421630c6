use api::{Category, Filter};
use tracing::debug;

// one button in the filter bar
#[derive(Clone, Debug, PartialEq)]
pub struct FilterButton {
    pub filter: Filter,
    pub label: &'static str,
    pub active: bool,
}

impl FilterButton {
    // value for the data-filter attribute
    pub fn value(&self) -> String {
        self.filter.to_string()
    }
}

// active category filter
//
// the active button is never stored, it is always derived from the filter, so the
// two cannot drift apart
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterController {
    active: Filter,
}

impl FilterController {
    pub fn new() -> Self {
        FilterController::default()
    }

    pub fn active(&self) -> &Filter {
        &self.active
    }

    // the caller re-renders the cards from active() afterwards, even when the filter
    // is unchanged, so the stagger animation replays
    pub fn set_filter(&mut self, filter: Filter) {
        debug!(filter = %filter, "setting project filter");
        self.active = filter;
    }

    pub fn buttons(&self) -> Vec<FilterButton> {
        std::iter::once((Filter::All, "All"))
            .chain(Category::ALL.iter().map(|c| (Filter::Category(*c), c.label())))
            .map(|(filter, label)| FilterButton {
                active: filter == self.active,
                filter,
                label,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(controller: &FilterController) -> usize {
        controller.buttons().iter().filter(|b| b.active).count()
    }

    #[test]
    fn starts_on_all() {
        let controller = FilterController::new();
        let buttons = controller.buttons();

        assert_eq!(buttons.len(), 4);
        assert_eq!(buttons[0].value(), "all");
        assert!(buttons[0].active);
        assert_eq!(active_count(&controller), 1);
    }

    #[test]
    fn exactly_one_active_after_any_sequence() {
        let mut controller = FilterController::new();
        let sequence = ["backend", "backend", "all", "fullstack", "frontend", "all"];

        for value in sequence {
            controller.set_filter(Filter::from(value));
            assert_eq!(active_count(&controller), 1);

            let active: Vec<String> = controller
                .buttons()
                .iter()
                .filter(|b| b.active)
                .map(|b| b.value())
                .collect();
            assert_eq!(active, vec![value.to_string()]);
        }
    }

    #[test]
    fn tracks_active_filter() {
        let mut controller = FilterController::new();
        assert_eq!(controller.active(), &Filter::All);

        controller.set_filter(Filter::Category(Category::Backend));
        controller.set_filter(Filter::Category(Category::Backend));
        assert_eq!(controller.active(), &Filter::Category(Category::Backend));
    }

    #[test]
    fn unknown_filter_activates_no_button() {
        let mut controller = FilterController::new();

        controller.set_filter(Filter::from("mobile"));
        assert_eq!(controller.active(), &Filter::Unknown(String::from("mobile")));
        assert_eq!(active_count(&controller), 0);

        // every button still offers a reachable filter, and picking one restores the
        // single active button
        let buttons = controller.buttons();
        assert!(buttons.iter().all(|b| !matches!(b.filter, Filter::Unknown(_))));

        controller.set_filter(buttons[2].filter.clone());
        assert_eq!(active_count(&controller), 1);
        assert!(controller.buttons()[2].active);
    }

    #[test]
    fn button_labels() {
        let labels: Vec<&str> = FilterController::new()
            .buttons()
            .iter()
            .map(|b| b.label)
            .collect();
        assert_eq!(labels, vec!["All", "Frontend", "Backend", "Full Stack"]);
    }
}
