//! Phrase views over a token sequence and the poetic-validity rules.

use std::ops::Range;

use crate::Token;

/// A contiguous, non-empty run of tokens, borrowed from one token sequence.
///
/// A phrase remembers its index range so that later lines of a verse can be
/// anchored where an earlier one ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrase<'a> {
    tokens: &'a [Token],
    start: usize,
    end: usize,
}

impl<'a> Phrase<'a> {
    /// View `tokens[range]`. Returns `None` for an empty or out-of-bounds range.
    pub fn new(tokens: &'a [Token], range: Range<usize>) -> Option<Self> {
        if range.start >= range.end || range.end > tokens.len() {
            return None;
        }
        Some(Self {
            tokens,
            start: range.start,
            end: range.end,
        })
    }

    /// Index of the first token in the underlying sequence.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index just past the last token.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn tokens(&self) -> &'a [Token] {
        &self.tokens[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn first(&self) -> &'a Token {
        &self.tokens[self.start]
    }

    pub fn last(&self) -> &'a Token {
        &self.tokens[self.end - 1]
    }

    pub fn total_mora(&self) -> usize {
        self.tokens().iter().map(|t| t.mora).sum()
    }

    /// Concatenated surface forms.
    pub fn text(&self) -> String {
        self.tokens().iter().map(|t| t.surface.as_str()).collect()
    }

    /// True if the two phrases share no token position.
    pub fn is_disjoint(&self, other: &Phrase<'_>) -> bool {
        self.end <= other.start || other.end <= self.start
    }
}

/// Decide whether a phrase is acceptable as one line of a verse.
///
/// - at least two tokens (a lone morpheme reads flat)
/// - neither end is a purely grammatical unit
/// - at least one content-bearing token
pub fn is_valid(phrase: &Phrase<'_>) -> bool {
    if phrase.len() < 2 {
        return false;
    }
    if phrase.first().pos.is_bad_boundary() || phrase.last().pos.is_bad_boundary() {
        return false;
    }
    phrase.tokens().iter().any(|t| t.pos.is_core())
}
