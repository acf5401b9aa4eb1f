//! Bundled inspector configuration and its runtime overrides.

use leptos::logging;
use serde::Deserialize;

include!(concat!(env!("OUT_DIR"), "/inspector_config_generated.rs"));

/// Meta tag whose `content` replaces the bundled API base.
pub const API_BASE_META_NAME: &str = "wiremaps-api-base";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
/// Completion lookup tuning.
pub struct AutocompleteConfig {
    /// Characters required before a lookup is issued.
    pub min_chars: usize,
    /// Quiet period after the last keystroke.
    pub debounce_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
/// Port table tuning.
pub struct TableConfig {
    /// Coalescing window for deferred sort passes.
    pub sort_delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
/// Status banner tuning.
pub struct BannerConfig {
    /// How long success banners stay up.
    pub dismiss_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Runtime configuration of the inspector.
pub struct InspectorConfig {
    /// Version of the config layout.
    pub schema_version: u32,
    /// Prefix joined in front of every endpoint path.
    pub api_base: String,
    /// Completion lookup tuning.
    pub autocomplete: AutocompleteConfig,
    /// Port table tuning.
    pub table: TableConfig,
    /// Status banner tuning.
    pub banner: BannerConfig,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            api_base: String::new(),
            autocomplete: AutocompleteConfig {
                min_chars: 3,
                debounce_ms: 300,
            },
            table: TableConfig { sort_delay_ms: 300 },
            banner: BannerConfig { dismiss_ms: 4000 },
        }
    }
}

impl InspectorConfig {
    /// Parses a JSON config payload.
    ///
    /// # Errors
    ///
    /// Returns the decoder message when the payload is malformed.
    pub fn parse(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|err| err.to_string())
    }

    /// Returns the configuration generated from `inspector.toml` at build time.
    ///
    /// Falls back to defaults, with a warning, if the generated payload does not decode.
    pub fn bundled() -> Self {
        match Self::parse(INSPECTOR_CONFIG_JSON) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("bundled inspector config is invalid, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Replaces the API base when `override_base` is present.
    pub fn with_api_base_override(mut self, override_base: Option<String>) -> Self {
        if let Some(base) = override_base {
            self.api_base = base.trim().to_string();
        }
        self
    }

    /// Bundled configuration with the page's API base meta tag applied.
    pub fn resolved() -> Self {
        Self::bundled()
            .with_api_base_override(platform_host_web::document_meta_content(API_BASE_META_NAME))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_config_matches_checked_in_toml() {
        let config = InspectorConfig::bundled();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.autocomplete.min_chars, 3);
        assert_eq!(config.autocomplete.debounce_ms, 300);
        assert_eq!(config.table.sort_delay_ms, 300);
        assert_eq!(config.api_base, "");
    }

    #[test]
    fn meta_override_replaces_api_base() {
        let config = InspectorConfig::default()
            .with_api_base_override(Some(" https://wiremaps.example.net/api ".to_string()));
        assert_eq!(config.api_base, "https://wiremaps.example.net/api");

        let untouched = InspectorConfig::default().with_api_base_override(None);
        assert_eq!(untouched.api_base, "");
    }

    #[test]
    fn malformed_payload_is_reported() {
        assert!(InspectorConfig::parse("{\"schema_version\": 1}").is_err());
    }
}
