//! Error types shared by analyzers and the extraction pipeline.
use thiserror::Error;

/// Failure of the morphological source.
///
/// Propagated unchanged through tokenization and extraction; the pipeline
/// never recovers a partial token sequence. Not finding a senryu is not an
/// error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizationError {
    #[error("morphological analysis failed: {0}")]
    Analyzer(String),
}

impl TokenizationError {
    pub fn analyzer<T: Into<String>>(message: T) -> Self {
        TokenizationError::Analyzer(message.into())
    }
}

/// Errors raised while loading a lexicon file for [`crate::LexiconSource`].
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("read lexicon: {0}")]
    Io(#[from] std::io::Error),

    #[error("lexicon line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
