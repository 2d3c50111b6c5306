//! Token type and the tokenizer that filters analyzer output.
//!
//! The tokenizer drops morphemes that can never take part in a verse
//! (symbols, whitespace, Latin/numeric runs) and attaches a mora count to
//! everything it keeps. Mora is approximated as the character length of the
//! reading; long vowels, ン and small kana are not special-cased.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::{Morpheme, MorphologicalSource, PosTag, TokenizationError};

static ASCII_ALNUM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]+$").expect("static regex")
});

/// A filtered morpheme with its mora count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub surface: String,
    pub reading: String,
    pub mora: usize,
    pub pos: PosTag,
}

impl Token {
    /// Build a token; the reading falls back to the surface form.
    pub fn new<S: Into<String>>(surface: S, reading: Option<&str>, pos: PosTag) -> Self {
        let surface = surface.into();
        let reading = match reading {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => surface.clone(),
        };
        let mora = reading.chars().count();
        Self {
            surface,
            reading,
            mora,
            pos,
        }
    }

    /// Convert a raw morpheme, or `None` when the tokenizer drops it.
    pub fn from_morpheme(morpheme: &Morpheme) -> Option<Self> {
        let pos = PosTag::from_tag(&morpheme.pos);
        if pos.is_noise() || is_noise_surface(&morpheme.surface) {
            return None;
        }
        Some(Token::new(
            morpheme.surface.as_str(),
            morpheme.reading.as_deref(),
            pos,
        ))
    }
}

fn is_noise_surface(surface: &str) -> bool {
    surface.trim().is_empty() || ASCII_ALNUM.is_match(surface)
}

/// Analyze `text` and return the filtered token sequence.
pub fn tokenize<S: MorphologicalSource + ?Sized>(
    source: &S,
    text: &str,
) -> Result<Vec<Token>, TokenizationError> {
    let morphemes = source.analyze(text)?;
    let tokens: Vec<Token> = morphemes.iter().filter_map(Token::from_morpheme).collect();
    tracing::trace!(
        morphemes = morphemes.len(),
        kept = tokens.len(),
        "tokenized input"
    );
    Ok(tokens)
}
