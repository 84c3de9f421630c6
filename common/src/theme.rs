use std::fmt;

use tracing::{debug, warn};

// light/dark theme resolution
//
// an explicit stored preference always beats the system preference, and the only
// thing that writes one is the toggle button.  nothing ever clears it

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// where the explicit preference lives between page loads
pub trait PreferenceStore {
    fn load(&self) -> Option<Theme>;

    fn save(&mut self, theme: Theme) -> anyhow::Result<()>;
}

// what the document needs to look like for a theme
//
// the toggle shows the icon of the theme you would switch *to*, so in dark mode the
// light icon is visible
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ThemeView {
    pub dark: bool,
    pub show_light_icon: bool,
    pub show_dark_icon: bool,
}

impl From<Theme> for ThemeView {
    fn from(theme: Theme) -> ThemeView {
        let dark = theme == Theme::Dark;
        ThemeView {
            dark,
            show_light_icon: dark,
            show_dark_icon: !dark,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ThemeStore {
    stored: Option<Theme>,
    system_prefers_dark: bool,
    applied: Option<Theme>,
}

impl ThemeStore {
    pub fn new(stored: Option<Theme>, system_prefers_dark: bool) -> Self {
        ThemeStore {
            stored,
            system_prefers_dark,
            applied: None,
        }
    }

    pub fn load(store: &impl PreferenceStore, system_prefers_dark: bool) -> Self {
        ThemeStore::new(store.load(), system_prefers_dark)
    }

    pub fn effective(&self) -> Theme {
        match self.stored {
            Some(theme) => theme,
            None if self.system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn is_explicit(&self) -> bool {
        self.stored.is_some()
    }

    // flip the effective theme and pin it
    //
    // the new value is stored even when it matches the system preference, so a later
    // change in system preference no longer affects this site
    pub fn toggle(&mut self, store: &mut impl PreferenceStore) -> Theme {
        let next = self.effective().toggled();
        self.stored = Some(next);

        match store.save(next) {
            Ok(()) => debug!(theme = %next, "stored theme preference"),
            Err(err) => {
                warn!("failed to store theme preference, it will not survive a reload: {err}")
            }
        }

        next
    }

    // returns the changes to make to the document, or None if it already shows the
    // effective theme
    pub fn apply(&mut self) -> Option<ThemeView> {
        let theme = self.effective();

        if self.applied == Some(theme) {
            return None;
        }

        self.applied = Some(theme);
        Some(ThemeView::from(theme))
    }

    pub fn view(&self) -> ThemeView {
        ThemeView::from(self.effective())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        value: Option<Theme>,
        fail: bool,
        writes: usize,
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Option<Theme> {
            self.value
        }

        fn save(&mut self, theme: Theme) -> anyhow::Result<()> {
            self.writes += 1;
            if self.fail {
                return Err(anyhow::Error::msg("quota exceeded"));
            }
            self.value = Some(theme);
            Ok(())
        }
    }

    #[test]
    fn follows_system_without_preference() {
        assert_eq!(ThemeStore::new(None, true).effective(), Theme::Dark);
        assert_eq!(ThemeStore::new(None, false).effective(), Theme::Light);
    }

    #[test]
    fn explicit_preference_beats_system() {
        let store = ThemeStore::new(Some(Theme::Light), true);
        assert_eq!(store.effective(), Theme::Light);
        assert!(store.is_explicit());
    }

    #[test]
    fn toggle_pins_value_matching_system() {
        let mut prefs = MemoryStore {
            value: Some(Theme::Light),
            ..Default::default()
        };
        let mut theme = ThemeStore::load(&prefs, true);

        assert_eq!(theme.toggle(&mut prefs), Theme::Dark);
        assert_eq!(prefs.value, Some(Theme::Dark));

        // reload with the system flipped, the pinned value still wins
        let theme = ThemeStore::load(&prefs, false);
        assert_eq!(theme.effective(), Theme::Dark);
    }

    #[test]
    fn failed_write_keeps_session_theme() {
        let mut prefs = MemoryStore {
            fail: true,
            ..Default::default()
        };
        let mut theme = ThemeStore::load(&prefs, false);

        assert_eq!(theme.toggle(&mut prefs), Theme::Dark);
        assert_eq!(theme.effective(), Theme::Dark);
        assert_eq!(prefs.writes, 1);
        assert_eq!(prefs.value, None);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut prefs = MemoryStore::default();
        let mut theme = ThemeStore::load(&prefs, false);

        let view = theme.apply().unwrap();
        assert!(!view.dark);
        assert!(view.show_dark_icon);
        assert!(!view.show_light_icon);
        assert_eq!(theme.apply(), None);

        theme.toggle(&mut prefs);
        let view = theme.apply().unwrap();
        assert!(view.dark);
        assert!(view.show_light_icon);
        assert_eq!(theme.apply(), None);
    }

    #[test]
    fn parses_stored_strings() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
