//! senryu-core
//!
//! Extraction pipeline for senryu, three-line 5-7-5 mora verses hidden in
//! ordinary Japanese text, shared by host crates (CLI, chat bots).
//!
//! The pipeline is analyzer-agnostic: morphemes come from any
//! [`MorphologicalSource`], are filtered into [`Token`]s, cut into mora-exact
//! [`Phrase`]s, and searched exhaustively for the best-scoring 5-7-5 triple.
//!
//! Public API:
//! - `Extractor` - `extract(text, diagnostics)` entry point
//! - `MorphologicalSource` / `Morpheme` - the analyzer seam
//! - `LexiconSource` - built-in dictionary analyzer
//! - `Token`, `PosTag`, `Phrase`, `Candidate` - pipeline data
//! - `SenryuSearcher`, `SearchMode` - the 5-7-5 search
//! - `Config` - configuration shared by hosts
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{LexiconError, TokenizationError};

pub mod analyzer;
pub use analyzer::{Morpheme, MorphologicalSource};

pub mod pos;
pub use pos::PosTag;

pub mod token;
pub use token::{tokenize, Token};

pub mod trie;
pub use trie::TrieNode;

pub mod lexicon;
pub use lexicon::{LexEntry, LexiconSource};

pub mod phrase;
pub use phrase::{is_valid, Phrase};

pub mod candidate;
pub use candidate::{find, find_at, Candidate};

pub mod score;
pub use score::{score_combination, score_phrase, score_transition};

pub mod search;
pub use search::{Combination, ScoredCombination, SearchMode, SenryuSearcher, LINE_MORA};

pub mod extractor;
pub use extractor::{Diagnostics, Extractor, PhraseReport, TokenReport};

/// Banner that precedes a detected senryu in replies.
pub const DEFAULT_BANNER: &str = "📜 川柳を検知しました";

/// Generic configuration for the extraction core.
///
/// Host-specific options (channel allow-lists, dictionary paths) belong in the
/// host crate's own config, which flattens this one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// How lines are anchored to each other: "contiguous" (default) or "gapped".
    pub search_mode: SearchMode,

    /// Always log diagnostics, as if every `extract` call asked for them.
    pub diagnostics: bool,

    /// NFC-normalize and trim input text before analysis.
    pub normalize_input: bool,

    /// First line of a reply announcing a detected senryu.
    pub banner: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_mode: SearchMode::Contiguous,
            diagnostics: false,
            normalize_input: true,
            banner: DEFAULT_BANNER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Render a detected senryu as a reply: the banner, then one line each.
    ///
    /// # Example
    /// ```
    /// # use senryu_core::Config;
    /// let lines = ["空青い".to_string(), "雲が流れる".to_string(), "夏の朝".to_string()];
    /// let reply = Config::default().format_reply(&lines);
    /// assert_eq!(reply, "📜 川柳を検知しました\n空青い\n雲が流れる\n夏の朝");
    /// ```
    pub fn format_reply(&self, lines: &[String; 3]) -> String {
        let mut out = self.banner.clone();
        for line in lines {
            out.push('\n');
            out.push_str(line);
        }
        out
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_toml_round_trip() {
        let cfg = Config {
            search_mode: SearchMode::Gapped,
            diagnostics: true,
            normalize_input: false,
            banner: "川柳".to_string(),
        };
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let cfg = Config::from_toml_str("search_mode = \"gapped\"").unwrap();
        assert_eq!(cfg.search_mode, SearchMode::Gapped);
        assert!(cfg.normalize_input);
        assert_eq!(cfg.banner, DEFAULT_BANNER);
    }

    #[test]
    fn config_file_round_trip() {
        let path = std::env::temp_dir().join(format!("senryu_core_config_{}.toml", std::process::id()));
        let cfg = Config {
            diagnostics: true,
            ..Config::default()
        };
        cfg.save_toml(&path).unwrap();
        let loaded = Config::load_toml(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn normalize_composes_and_trims() {
        // か + combining dakuten → が
        assert_eq!(utils::normalize(" \u{304B}\u{3099} "), "が");
    }
}
