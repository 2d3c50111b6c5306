// core/src/analyzer.rs
//
// The seam between the extraction pipeline and whatever morphological
// analyzer the host wires in (vibrato, the built-in lexicon analyzer, a fake
// in tests).

use std::sync::Arc;

use crate::TokenizationError;

/// One raw morpheme as reported by an analyzer, before any filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    /// Surface form as it appears in the input text.
    pub surface: String,

    /// Phonetic reading (katakana). `None` when the analyzer has no reading,
    /// in which case the surface form is used for mora counting.
    pub reading: Option<String>,

    /// Coarse part-of-speech tag as the analyzer spells it (e.g. "名詞").
    pub pos: String,
}

impl Morpheme {
    pub fn new<S: Into<String>, P: Into<String>>(surface: S, reading: Option<&str>, pos: P) -> Self {
        Self {
            surface: surface.into(),
            reading: reading.map(str::to_string),
            pos: pos.into(),
        }
    }
}

/// Trait that morphological analyzers implement to feed the extractor.
///
/// Implementations must be safe to share between threads: the extractor holds
/// no cross-call state, so concurrent `extract` calls only meet here.
pub trait MorphologicalSource: Send + Sync {
    /// Split `text` into an ordered morpheme sequence.
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, TokenizationError>;
}

impl<T: MorphologicalSource + ?Sized> MorphologicalSource for &T {
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, TokenizationError> {
        (**self).analyze(text)
    }
}

impl<T: MorphologicalSource + ?Sized> MorphologicalSource for Box<T> {
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, TokenizationError> {
        (**self).analyze(text)
    }
}

impl<T: MorphologicalSource + ?Sized> MorphologicalSource for Arc<T> {
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, TokenizationError> {
        (**self).analyze(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl MorphologicalSource for Failing {
        fn analyze(&self, _text: &str) -> Result<Vec<Morpheme>, TokenizationError> {
            Err(TokenizationError::analyzer("dictionary not loaded"))
        }
    }

    #[test]
    fn boxed_and_shared_sources_delegate() {
        let boxed: Box<dyn MorphologicalSource> = Box::new(Failing);
        let shared: Arc<dyn MorphologicalSource> = Arc::new(Failing);
        assert_eq!(
            boxed.analyze("x").unwrap_err(),
            TokenizationError::analyzer("dictionary not loaded")
        );
        assert!((&shared).analyze("x").is_err());
    }

    #[test]
    fn morpheme_new_copies_reading() {
        let m = Morpheme::new("音", Some("オト"), "名詞");
        assert_eq!(m.reading.as_deref(), Some("オト"));
        assert_eq!(Morpheme::new("x", None, "名詞").reading, None);
    }
}
