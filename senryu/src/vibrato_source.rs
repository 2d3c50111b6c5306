//! Morphological source backed by a vibrato (MeCab-compatible) dictionary.
//!
//! vibrato reports each token as a surface plus a comma-separated feature
//! string. Where the POS tag and the reading live in that string depends on
//! the dictionary, so the positions are configurable through
//! [`FeatureLayout`]. The defaults match IPADIC:
//!
//! ```text
//! 名詞,一般,*,*,*,*,空,ソラ,ソラ
//! ^0                   ^7
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use senryu_core::{Morpheme, MorphologicalSource, TokenizationError};
use vibrato::{Dictionary, Tokenizer};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to open dictionary: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read dictionary: {0}")]
    Read(String),
}

/// Positions of the fields we need inside a vibrato feature string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureLayout {
    pub pos_field: usize,
    pub reading_field: usize,
}

impl Default for FeatureLayout {
    fn default() -> Self {
        Self {
            pos_field: 0,
            reading_field: 7,
        }
    }
}

impl FeatureLayout {
    /// Split a feature string into `(pos, reading)`.
    ///
    /// A missing field or `*` means "unknown". Unknown words in IPADIC carry
    /// only the POS columns, so a missing reading is common.
    pub fn parse<'f>(&self, feature: &'f str) -> (&'f str, Option<&'f str>) {
        let fields: Vec<&str> = feature.split(',').collect();
        let pick = |idx: usize| {
            fields
                .get(idx)
                .map(|f| f.trim())
                .filter(|f| !f.is_empty() && *f != "*")
        };
        (pick(self.pos_field).unwrap_or(""), pick(self.reading_field))
    }
}

/// `MorphologicalSource` over a loaded vibrato tokenizer.
///
/// The tokenizer is immutable after loading. Each `analyze` call creates its
/// own worker, so one source can serve many threads.
pub struct VibratoSource {
    tokenizer: Tokenizer,
    layout: FeatureLayout,
}

impl VibratoSource {
    pub fn new(dict: Dictionary, layout: FeatureLayout) -> Self {
        Self {
            tokenizer: Tokenizer::new(dict),
            layout,
        }
    }

    /// Load a compiled system dictionary. Files ending in `.zst` are
    /// decompressed on the fly.
    pub fn open<P: AsRef<Path>>(path: P, layout: FeatureLayout) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = BufReader::new(File::open(path)?);
        let compressed = path.extension().is_some_and(|ext| ext == "zst");
        let dict = if compressed {
            Self::read_dictionary(zstd::Decoder::new(file)?)?
        } else {
            Self::read_dictionary(file)?
        };
        tracing::info!(path = %path.display(), compressed, "loaded vibrato dictionary");
        Ok(Self::new(dict, layout))
    }

    fn read_dictionary<R: Read>(reader: R) -> Result<Dictionary, DictionaryError> {
        Dictionary::read(reader).map_err(|e| DictionaryError::Read(e.to_string()))
    }

    pub fn layout(&self) -> FeatureLayout {
        self.layout
    }
}

impl std::fmt::Debug for VibratoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VibratoSource")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl MorphologicalSource for VibratoSource {
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, TokenizationError> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();
        let morphemes = worker
            .token_iter()
            .map(|t| {
                let (pos, reading) = self.layout.parse(t.feature());
                Morpheme::new(t.surface(), reading, pos)
            })
            .collect();
        Ok(morphemes)
    }
}
