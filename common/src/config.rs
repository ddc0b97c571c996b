use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use api::contact::{DEFAULT_MIN_MESSAGE_LEN, DEFAULT_STATUS_RESET_MS, DEFAULT_SUBMIT_DELAY_MS};

// the site.toml shipped with the build
pub const SITE_TOML: &str = include_str!("../site.toml");

// folio configuration
//
// this struct contains the handful of knobs the webapp reads at startup.  it
// is handed to the component tree as a context, so every section sees the
// same copy
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub site: SiteInfo,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub hero: HeroConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteInfo {
    pub owner: String,
    // short mark shown in the header and footer, e.g. "MU."
    pub brand: String,
    // document title and meta description, set once on mount
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tagline: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_delay_ms: u32,
    pub status_reset_ms: u32,
    pub min_message_len: usize,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            status_reset_ms: DEFAULT_STATUS_RESET_MS,
            min_message_len: DEFAULT_MIN_MESSAGE_LEN,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct HeaderConfig {
    // pixels scrolled before the header switches to its solid style
    pub scroll_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        HeaderConfig {
            scroll_threshold: 10.0,
        }
    }
}

impl HeaderConfig {
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.scroll_threshold
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct HeroConfig {
    pub type_speed_ms: u32,
    pub delete_speed_ms: u32,
    pub pause_ms: u32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        HeroConfig {
            type_speed_ms: 80,
            delete_speed_ms: 50,
            pause_ms: 1500,
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;

    if data.config.contact.min_message_len == 0 {
        debug!("min_message_len is 0, message length will not be checked");
    }

    debug!("successfully parsed site config");
    Ok(data.config)
}

pub fn read_config() -> anyhow::Result<SiteConfig> {
    parse_config(SITE_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = read_config().unwrap();
        assert_eq!(config.site.brand, "MU");
        assert_eq!(config.site.title, "Portfolio | Usman Developer");
        assert_eq!(config.contact.submit_delay_ms, 1500);
        assert_eq!(config.contact.status_reset_ms, 5000);
        assert_eq!(config.contact.min_message_len, 10);
    }

    #[test]
    fn test_missing_tables_use_defaults() {
        let doc = r#"
            [config.site]
            owner = "Someone"
            brand = "SO"
            title = "Portfolio"
            description = "A portfolio"
        "#;
        let config = parse_config(doc).unwrap();
        assert_eq!(config.contact, ContactConfig::default());
        assert_eq!(config.header.scroll_threshold, 10.0);
        assert_eq!(config.hero.pause_ms, 1500);
        assert!(config.site.tagline.is_empty());
    }

    #[test]
    fn test_partial_table_fills_remaining_fields() {
        let doc = r#"
            [config.site]
            owner = "Someone"
            brand = "SO"
            title = "Portfolio"
            description = "A portfolio"

            [config.contact]
            submit_delay_ms = 10
        "#;
        let config = parse_config(doc).unwrap();
        assert_eq!(config.contact.submit_delay_ms, 10);
        assert_eq!(config.contact.status_reset_ms, DEFAULT_STATUS_RESET_MS);
    }

    #[test]
    fn test_missing_site_table_is_an_error() {
        let err = parse_config("[config.header]\nscroll_threshold = 4.0\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse site config"));
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let header = HeaderConfig::default();
        assert!(!header.is_scrolled(0.0));
        assert!(!header.is_scrolled(10.0));
        assert!(header.is_scrolled(10.5));
    }
}
