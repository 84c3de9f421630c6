use tracing::trace;

use crate::config::NavConfig;

// vertical extent of a page section, as measured by the front end
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        SectionBounds { id: id.into(), top }
    }
}

// navigation state derived from the scroll position
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavView {
    pub nav_hidden: bool,
    pub back_to_top_visible: bool,
    pub active_section: Option<String>,
}

// the last section (in document order) whose top, less the offset, has been
// scrolled past.  sections are assumed to be listed top to bottom
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - offset)
        .last()
        .map(|s| s.id.as_str())
}

#[derive(Clone, Debug, Default)]
pub struct NavController {
    config: NavConfig,
    last_scroll_y: f64,
    view: NavView,
    mobile_menu_open: bool,
}

impl NavController {
    pub fn new(config: NavConfig, initial_scroll_y: f64) -> Self {
        NavController {
            config,
            last_scroll_y: initial_scroll_y,
            view: NavView::default(),
            mobile_menu_open: false,
        }
    }

    pub fn view(&self) -> &NavView {
        &self.view
    }

    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> &NavView {
        // hide on the way down once past the threshold, show on any upward move
        self.view.nav_hidden =
            scroll_y > self.last_scroll_y && scroll_y > self.config.hide_threshold;
        self.last_scroll_y = scroll_y;

        self.view.back_to_top_visible = scroll_y > self.config.back_to_top_threshold;
        self.view.active_section =
            active_section(sections, scroll_y, self.config.spy_offset).map(str::to_owned);

        trace!(scroll_y, view = ?self.view, "recomputed nav state");
        &self.view
    }

    // whether the desktop and mobile links for this section get the active style
    pub fn link_active(&self, section_id: &str) -> bool {
        self.view.active_section.as_deref() == Some(section_id)
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    // value for aria-expanded on the menu button
    pub fn aria_expanded(&self) -> &'static str {
        if self.mobile_menu_open { "true" } else { "false" }
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

// coalesces scroll events into one recomputation per animation frame
//
// request() is called for every scroll event and says whether a frame callback
// must be scheduled; take() is called from that callback
#[derive(Clone, Debug, Default)]
pub struct ScrollThrottle {
    pending: bool,
}

impl ScrollThrottle {
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0),
            SectionBounds::new("projects", 800.0),
            SectionBounds::new("contact", 1600.0),
        ]
    }

    fn controller() -> NavController {
        NavController::new(NavConfig::default(), 0.0)
    }

    #[test]
    fn scroll_spy_picks_lowest_crossed_section() {
        let sections = sections();
        assert_eq!(active_section(&sections, 850.0, 300.0), Some("projects"));
        assert_eq!(active_section(&sections, 0.0, 300.0), Some("home"));
        assert_eq!(active_section(&sections, 499.0, 300.0), Some("home"));
        assert_eq!(active_section(&sections, 500.0, 300.0), Some("projects"));
        assert_eq!(active_section(&sections, 1300.0, 300.0), Some("contact"));
    }

    #[test]
    fn scroll_spy_without_qualifying_section() {
        let sections = vec![SectionBounds::new("about", 900.0)];
        assert_eq!(active_section(&sections, 100.0, 300.0), None);
        assert_eq!(active_section(&[], 100.0, 300.0), None);
    }

    #[test]
    fn navbar_hides_only_scrolling_down_past_threshold() {
        let sections = sections();
        let mut nav = controller();

        // down, but not past 100
        assert!(!nav.on_scroll(80.0, &sections).nav_hidden);
        // down past 100
        assert!(nav.on_scroll(150.0, &sections).nav_hidden);
        // up
        assert!(!nav.on_scroll(120.0, &sections).nav_hidden);
        // no movement counts as not scrolling down
        assert!(!nav.on_scroll(120.0, &sections).nav_hidden);
        assert_eq!(nav.last_scroll_y(), 120.0);
    }

    #[test]
    fn back_to_top_is_independent() {
        let sections = sections();
        let mut nav = controller();

        assert!(!nav.on_scroll(500.0, &sections).back_to_top_visible);
        assert!(nav.on_scroll(501.0, &sections).back_to_top_visible);
        // scrolling up keeps it visible while above the threshold
        let view = nav.on_scroll(700.0, &sections).clone();
        assert!(view.back_to_top_visible);
        let view = nav.on_scroll(600.0, &sections).clone();
        assert!(view.back_to_top_visible && !view.nav_hidden);
        assert!(!nav.on_scroll(100.0, &sections).back_to_top_visible);
    }

    #[test]
    fn exactly_one_link_active() {
        let sections = sections();
        let mut nav = controller();

        nav.on_scroll(850.0, &sections);
        let active: Vec<&str> = ["home", "projects", "contact"]
            .into_iter()
            .filter(|id| nav.link_active(id))
            .collect();
        assert_eq!(active, vec!["projects"]);
    }

    #[test]
    fn mobile_menu_toggles() {
        let mut nav = controller();
        assert_eq!(nav.aria_expanded(), "false");
        assert!(nav.toggle_mobile_menu());
        assert_eq!(nav.aria_expanded(), "true");
        nav.close_mobile_menu();
        assert!(!nav.mobile_menu_open());
        assert!(nav.toggle_mobile_menu());
        assert!(!nav.toggle_mobile_menu());
    }

    #[test]
    fn throttle_coalesces_until_taken() {
        let mut throttle = ScrollThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());
        assert!(throttle.take());
        assert!(!throttle.take());
        assert!(throttle.request());
    }
}
