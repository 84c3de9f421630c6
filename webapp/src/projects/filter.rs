use dioxus::prelude::*;

use common::filter::FilterButton;

use crate::state::{FILTER, set_filter};

#[derive(Clone, PartialEq, Props)]
struct FilterChipProps {
    chip: FilterButton,
}

#[component]
fn FilterChip(props: FilterChipProps) -> Element {
    let chip = props.chip;
    let filter = chip.filter.clone();

    rsx! {
        button {
            class: if chip.active { "filter-btn active" } else { "filter-btn" },
            r#type: "button",
            "data-filter": chip.value(),
            "aria-pressed": if chip.active { "true" } else { "false" },
            onclick: move |_| set_filter(filter.clone()),
            "{chip.label}"
        }
    }
}

// one button per category plus "all"; exactly one is active
#[component]
pub fn FilterBar() -> Element {
    let buttons = FILTER.read().buttons();

    rsx! {
        div { class: "filter-bar", "role": "group", "aria-label": "Filter projects",
            for chip in buttons {
                FilterChip { key: "{chip.value()}", chip: chip.clone() }
            }
        }
    }
}
