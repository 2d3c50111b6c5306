//! Reply use case: decide whether a chat message gets a senryu reply.
//!
//! The chat gateway itself lives outside this crate. A host hands each
//! incoming message over as a [`Message`] and posts whatever reply comes back.

use senryu_core::{Extractor, MorphologicalSource, TokenizationError};

use crate::config::BotConfig;

/// The parts of a chat message the use case looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub channel_id: u64,
    pub author_is_bot: bool,
    pub content: String,
}

impl Message {
    pub fn new(channel_id: u64, content: impl Into<String>) -> Self {
        Self {
            channel_id,
            author_is_bot: false,
            content: content.into(),
        }
    }

    pub fn from_bot(mut self) -> Self {
        self.author_is_bot = true;
        self
    }
}

pub struct ReplyToMessage<S> {
    extractor: Extractor<S>,
    config: BotConfig,
}

impl<S: MorphologicalSource> ReplyToMessage<S> {
    pub fn new(source: S, config: BotConfig) -> Self {
        let extractor = Extractor::with_config(source, config.base().clone());
        Self { extractor, config }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn extractor(&self) -> &Extractor<S> {
        &self.extractor
    }

    /// Returns the reply text for `message`, or `None` when the message is
    /// skipped or holds no senryu.
    pub fn execute(&self, message: &Message) -> Result<Option<String>, TokenizationError> {
        if message.author_is_bot && self.config.ignore_bots {
            tracing::trace!(channel = message.channel_id, "skipping bot message");
            return Ok(None);
        }
        if !self.config.is_target_channel(message.channel_id) {
            tracing::trace!(channel = message.channel_id, "channel not in allow-list");
            return Ok(None);
        }

        let content = message.content.trim();
        if content.is_empty() {
            return Ok(None);
        }

        let Some(lines) = self.extractor.extract(content, false)? else {
            return Ok(None);
        };
        tracing::info!(channel = message.channel_id, senryu = %lines.join(" / "), "replying with senryu");
        Ok(Some(self.config.base().format_reply(&lines)))
    }
}

impl<S> std::fmt::Debug for ReplyToMessage<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyToMessage")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
