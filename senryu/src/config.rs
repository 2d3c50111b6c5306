use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::vibrato_source::FeatureLayout;

/// Host configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `senryu_core::Config` (flattened via serde)
/// - The channel allow-list and bot filtering used by the reply use case
/// - Which morphological analyzer to load and how to read its features
///
/// # Example
///
/// ```rust
/// use senryu::BotConfig;
///
/// let config = BotConfig::from_toml_str(r#"
/// search_mode = "gapped"
/// target_channels = [767778360133812234]
/// dictionary = "system.dic.zst"
/// "#).unwrap();
/// assert!(config.is_target_channel(767778360133812234));
/// assert!(!config.is_target_channel(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BotConfig {
    /// Base configuration fields (search mode, banner, diagnostics, ...)
    #[serde(flatten)]
    pub base: senryu_core::Config,

    /// Channels whose messages are checked. Empty means every channel.
    pub target_channels: HashSet<u64>,

    /// Skip messages written by bots (including ourselves).
    pub ignore_bots: bool,

    /// Compiled vibrato system dictionary (`.dic`, or `.dic.zst`).
    pub dictionary: Option<PathBuf>,

    /// Lexicon file for the built-in analyzer, used when no dictionary is set.
    pub lexicon: Option<PathBuf>,

    /// Feature field holding the coarse POS tag.
    pub pos_field: usize,

    /// Feature field holding the katakana reading.
    pub reading_field: usize,
}

impl Default for BotConfig {
    fn default() -> Self {
        let layout = FeatureLayout::default();
        Self {
            base: senryu_core::Config::default(),
            target_channels: HashSet::new(),
            ignore_bots: true,
            dictionary: None,
            lexicon: None,
            pos_field: layout.pos_field,
            reading_field: layout.reading_field,
        }
    }
}

impl BotConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: BotConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// True if messages from `channel_id` should be checked.
    pub fn is_target_channel(&self, channel_id: u64) -> bool {
        self.target_channels.is_empty() || self.target_channels.contains(&channel_id)
    }

    /// Feature layout for the vibrato analyzer.
    pub fn feature_layout(&self) -> FeatureLayout {
        FeatureLayout {
            pos_field: self.pos_field,
            reading_field: self.reading_field,
        }
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &senryu_core::Config {
        &self.base
    }

    /// Convert into the base config for use with `Extractor::with_config()`
    pub fn into_base(self) -> senryu_core::Config {
        self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use senryu_core::SearchMode;

    #[test]
    fn defaults() {
        let cfg = BotConfig::default();
        assert!(cfg.ignore_bots);
        assert!(cfg.is_target_channel(42));
        assert_eq!(cfg.base.search_mode, SearchMode::Contiguous);
        assert_eq!(cfg.feature_layout(), FeatureLayout::default());
    }

    #[test]
    fn flattened_base_fields_parse() {
        let cfg = BotConfig::from_toml_str(
            "banner = \"川柳です\"\nignore_bots = false\nreading_field = 17\n",
        )
        .unwrap();
        assert_eq!(cfg.base.banner, "川柳です");
        assert!(!cfg.ignore_bots);
        assert_eq!(cfg.feature_layout().reading_field, 17);
        assert_eq!(cfg.feature_layout().pos_field, 0);
    }

    #[test]
    fn toml_round_trip() {
        let mut cfg = BotConfig::default();
        cfg.target_channels.insert(965883155544428656);
        cfg.lexicon = Some(PathBuf::from("words.tsv"));
        cfg.base.diagnostics = true;
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(BotConfig::from_toml_str(&text).unwrap(), cfg);
    }
}
