// core/src/search.rs
//
// Exhaustive 5-7-5 search over phrase candidates. Every combination the
// finder can produce is scored and the strictly best one wins; on equal
// scores the earliest in enumeration order (ascending start index, nested)
// is kept, so the result is a pure function of the token sequence.

use serde::{Deserialize, Serialize};

use crate::candidate::{find, find_at, Candidate};
use crate::score::score_combination;
use crate::{Phrase, Token};

/// Mora targets of the three lines.
pub const LINE_MORA: [usize; 3] = [5, 7, 5];

/// How later lines are anchored to earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Each line starts exactly where the previous one ended.
    #[default]
    Contiguous,
    /// Each line starts at or after the end of the previous one; skipped
    /// tokens between lines are allowed, overlap never is.
    Gapped,
}

/// Three sequential, non-overlapping phrases of 5, 7 and 5 mora.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination<'a> {
    pub first: Phrase<'a>,
    pub second: Phrase<'a>,
    pub third: Phrase<'a>,
}

impl<'a> Combination<'a> {
    pub fn lines(&self) -> [String; 3] {
        [self.first.text(), self.second.text(), self.third.text()]
    }

    pub fn phrases(&self) -> [Phrase<'a>; 3] {
        [self.first, self.second, self.third]
    }
}

/// A combination together with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCombination<'a> {
    pub combination: Combination<'a>,
    pub score: f32,
}

/// Searches a token sequence for its best-scoring senryu.
#[derive(Debug, Clone, Copy, Default)]
pub struct SenryuSearcher {
    mode: SearchMode,
}

impl SenryuSearcher {
    pub fn new(mode: SearchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Candidates for a line that follows a line ending at `anchor`.
    fn continuations<'a>(&self, tokens: &'a [Token], anchor: usize, target: usize) -> Vec<Candidate<'a>> {
        match self.mode {
            SearchMode::Contiguous => find_at(tokens, anchor, target).into_iter().collect(),
            SearchMode::Gapped => find(tokens, anchor, target),
        }
    }

    /// Return the maximum-scoring combination, or `None` if the tokens hold
    /// no senryu. Never fails; an empty sequence simply yields `None`.
    pub fn search<'a>(&self, tokens: &'a [Token]) -> Option<ScoredCombination<'a>> {
        let [first_mora, second_mora, third_mora] = LINE_MORA;
        let mut best: Option<ScoredCombination<'a>> = None;
        let mut examined = 0usize;

        for first in find(tokens, 0, first_mora) {
            for second in self.continuations(tokens, first.end_index, second_mora) {
                for third in self.continuations(tokens, second.end_index, third_mora) {
                    examined += 1;
                    let score = score_combination(&first.phrase, &second.phrase, &third.phrase);
                    let better = match &best {
                        Some(current) => score > current.score,
                        None => true,
                    };
                    if better {
                        best = Some(ScoredCombination {
                            combination: Combination {
                                first: first.phrase,
                                second: second.phrase,
                                third: third.phrase,
                            },
                            score,
                        });
                    }
                }
            }
        }

        tracing::debug!(
            tokens = tokens.len(),
            examined,
            best_score = ?best.as_ref().map(|b| b.score),
            "senryu search finished"
        );
        best
    }
}
