use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use common::theme::{PreferenceStore, Theme};

pub const THEME_KEY: &str = "color-theme";

// values are stored as bare strings rather than gloo's json encoding, so the
// preference reads "dark" and not "\"dark\""
pub fn set_local_storage(key: &str, value: &str) -> anyhow::Result<()> {
    LocalStorage::raw().set_item(key, value).map_err(|err| {
        console_error!(format!("Failed to set local storage {key}: {err:?}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

pub fn get_local_storage(key: &str) -> Option<String> {
    match LocalStorage::raw().get_item(key) {
        Ok(value) => value,
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            None
        }
    }
}

// the theme preference, kept under a single key
pub struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn load(&self) -> Option<Theme> {
        get_local_storage(THEME_KEY).and_then(|value| Theme::parse(&value))
    }

    fn save(&mut self, theme: Theme) -> anyhow::Result<()> {
        set_local_storage(THEME_KEY, theme.as_str())
    }
}
