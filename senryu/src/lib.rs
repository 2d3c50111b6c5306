//! senryu
//!
//! Host crate for the senryu extractor: a vibrato-backed analyzer, the chat
//! reply use case and the `senryu` command-line tool.
//!
//! The extraction pipeline itself lives in `senryu-core` and is re-exported
//! here for convenience.
//!
//! # Example
//!
//! ```
//! use senryu::{BotConfig, LexiconSource, Message, ReplyToMessage};
//!
//! let bot = ReplyToMessage::new(LexiconSource::demo(), BotConfig::default());
//! let reply = bot
//!     .execute(&Message::new(1, "空青い雲が流れる夏の朝"))
//!     .unwrap();
//! assert_eq!(
//!     reply.as_deref(),
//!     Some("📜 川柳を検知しました\n空青い\n雲が流れる\n夏の朝")
//! );
//! ```

pub mod config;
pub mod reply;
pub mod vibrato_source;

pub use config::BotConfig;
pub use reply::{Message, ReplyToMessage};
pub use vibrato_source::{DictionaryError, FeatureLayout, VibratoSource};

// Re-export the core pipeline
pub use senryu_core::{
    Config, Diagnostics, Extractor, LexiconError, LexiconSource, Morpheme, MorphologicalSource,
    SearchMode, TokenizationError,
};
