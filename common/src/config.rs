use serde::{Deserialize, Serialize};
use toml;
use tracing::{Level, debug, instrument};

// folio configuration
//
// every threshold and delay the ui state machines use.  all fields have defaults so
// that the embedded site.toml only needs to list what it overrides
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub cards: CardConfig,
    pub modal: ModalConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    // scrolling down past this hides the navbar
    pub hide_threshold: f64,

    // back-to-top shows past this
    pub back_to_top_threshold: f64,

    // a section becomes active this far before its top reaches the viewport top
    pub spy_offset: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct CardConfig {
    pub stagger_ms: u32,

    // tech badges shown on a card; the modal always shows all of them
    pub badge_limit: usize,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ModalConfig {
    // lets display:flex land before the opacity transition starts
    pub open_delay_ms: u32,

    // must match the css transition duration
    pub close_delay_ms: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    pub latency_ms: u32,
    pub reset_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            nav: NavConfig::default(),
            cards: CardConfig::default(),
            modal: ModalConfig::default(),
            reveal: RevealConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            hide_threshold: 100.0,
            back_to_top_threshold: 500.0,
            spy_offset: 300.0,
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        CardConfig {
            stagger_ms: 100,
            badge_limit: 3,
        }
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        ModalConfig {
            open_delay_ms: 10,
            close_delay_ms: 300,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            threshold: 0.1,
            root_margin: String::from("0px"),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            latency_ms: 1500,
            reset_delay_ms: 3000,
        }
    }
}

// as with the server config, the settings live under a [config] table so the file
// can carry other top-level sections later
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> anyhow::Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc)?;

    debug!("successfully parsed site config");
    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = read_config("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.modal.close_delay_ms, 300);
        assert_eq!(config.contact.latency_ms, 1500);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let doc = r#"
            [config.nav]
            spy_offset = 200.0

            [config.contact]
            reset_delay_ms = 5000
        "#;

        let config = read_config(doc).unwrap();
        assert_eq!(config.nav.spy_offset, 200.0);
        assert_eq!(config.nav.hide_threshold, 100.0);
        assert_eq!(config.contact.reset_delay_ms, 5000);
        assert_eq!(config.contact.latency_ms, 1500);
        assert_eq!(config.reveal.threshold, 0.1);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(read_config("[config.nav]\nspy_offset = \"far\"").is_err());
    }
}
