// core/src/extractor.rs
//
// Orchestrates the pipeline: analyze → tokenize → search → render.

use serde::Serialize;

use crate::candidate::find;
use crate::search::{SenryuSearcher, LINE_MORA};
use crate::token::tokenize;
use crate::utils::normalize;
use crate::{Config, MorphologicalSource, Phrase, PosTag, Token, TokenizationError};

/// Per-token line of a diagnostics report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenReport {
    pub surface: String,
    pub mora: usize,
    pub pos: PosTag,
}

/// One enumerated phrase with its token breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhraseReport {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub tokens: Vec<TokenReport>,
}

impl PhraseReport {
    fn from_phrase(phrase: &Phrase<'_>) -> Self {
        Self {
            text: phrase.text(),
            start: phrase.start(),
            end: phrase.end(),
            tokens: phrase
                .tokens()
                .iter()
                .map(|t| TokenReport {
                    surface: t.surface.clone(),
                    mora: t.mora,
                    pos: t.pos,
                })
                .collect(),
        }
    }
}

/// Observational detail about one extraction. Never affects the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    pub tokens: Vec<Token>,
    /// 5-mora candidates from the start of the text.
    pub candidates_5: Vec<PhraseReport>,
    /// 7-mora candidates from the start of the text.
    pub candidates_7: Vec<PhraseReport>,
    pub senryu: Option<[String; 3]>,
    pub score: Option<f32>,
}

/// Extracts a 5-7-5 senryu from text with an injected analyzer.
///
/// Type parameter S is the morphological source (e.g. `LexiconSource`, a
/// vibrato adapter, or a fake in tests). The extractor itself keeps no state
/// between calls.
#[derive(Debug)]
pub struct Extractor<S> {
    source: S,
    searcher: SenryuSearcher,
    config: Config,
}

impl<S: MorphologicalSource> Extractor<S> {
    /// Create an extractor with the default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, Config::default())
    }

    pub fn with_config(source: S, config: Config) -> Self {
        Self {
            source,
            searcher: SenryuSearcher::new(config.search_mode),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn prepare<'t>(&self, text: &'t str) -> std::borrow::Cow<'t, str> {
        if self.config.normalize_input {
            std::borrow::Cow::Owned(normalize(text))
        } else {
            std::borrow::Cow::Borrowed(text)
        }
    }

    /// Extract the best senryu from `text`.
    ///
    /// Returns `Ok(None)` when the text holds no senryu, which is the common
    /// case. With `diagnostics` (or `Config::diagnostics`) the enumerated
    /// candidates and the winning score are logged at info level on target
    /// `senryu::diagnostics`.
    pub fn extract(
        &self,
        text: &str,
        diagnostics: bool,
    ) -> Result<Option<[String; 3]>, TokenizationError> {
        let _span = tracing::debug_span!("extract", chars = text.chars().count()).entered();
        if diagnostics || self.config.diagnostics {
            let report = self.diagnose(text)?;
            log_diagnostics(&report);
            return Ok(report.senryu);
        }

        let text = self.prepare(text);
        let tokens = tokenize(&self.source, &text)?;
        let found = self
            .searcher
            .search(&tokens)
            .map(|best| best.combination.lines());
        if let Some(lines) = &found {
            tracing::debug!(senryu = %lines.join(" / "), "senryu found");
        }
        Ok(found)
    }

    /// Run an extraction and return the full diagnostics report.
    pub fn diagnose(&self, text: &str) -> Result<Diagnostics, TokenizationError> {
        let text = self.prepare(text);
        let tokens = tokenize(&self.source, &text)?;
        let [five, seven, _] = LINE_MORA;
        let candidates_5 = find(&tokens, 0, five)
            .iter()
            .map(|c| PhraseReport::from_phrase(&c.phrase))
            .collect();
        let candidates_7 = find(&tokens, 0, seven)
            .iter()
            .map(|c| PhraseReport::from_phrase(&c.phrase))
            .collect();
        let best = self.searcher.search(&tokens);
        let senryu = best.as_ref().map(|b| b.combination.lines());
        let score = best.as_ref().map(|b| b.score);
        Ok(Diagnostics {
            candidates_5,
            candidates_7,
            senryu,
            score,
            tokens,
        })
    }
}

fn log_diagnostics(report: &Diagnostics) {
    for (label, list) in [("5", &report.candidates_5), ("7", &report.candidates_7)] {
        for phrase in list {
            let breakdown: Vec<String> = phrase
                .tokens
                .iter()
                .map(|t| format!("{}({},{:?})", t.surface, t.mora, t.pos))
                .collect();
            tracing::info!(
                target: "senryu::diagnostics",
                mora = label,
                phrase = %phrase.text,
                tokens = %breakdown.join(" "),
                "candidate phrase"
            );
        }
    }
    match (&report.senryu, report.score) {
        (Some(lines), Some(score)) => tracing::info!(
            target: "senryu::diagnostics",
            score,
            senryu = %lines.join(" / "),
            "best combination"
        ),
        _ => tracing::info!(
            target: "senryu::diagnostics",
            candidates_5 = report.candidates_5.len(),
            candidates_7 = report.candidates_7.len(),
            "no senryu"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LexiconSource, SearchMode};

    #[test]
    fn extract_from_demo_lexicon() {
        let ex = Extractor::new(LexiconSource::demo());
        let got = ex.extract("空青い雲が流れる夏の朝", false).unwrap();
        assert_eq!(
            got,
            Some([
                "空青い".to_string(),
                "雲が流れる".to_string(),
                "夏の朝".to_string()
            ])
        );
    }

    #[test]
    fn diagnostics_do_not_change_result() {
        let ex = Extractor::new(LexiconSource::demo());
        for text in ["空青い雲が流れる夏の朝", "夏の朝", ""] {
            assert_eq!(
                ex.extract(text, false).unwrap(),
                ex.extract(text, true).unwrap()
            );
        }
    }

    #[test]
    fn diagnose_reports_candidates_and_score() {
        let ex = Extractor::new(LexiconSource::demo());
        let report = ex.diagnose("空青い雲が流れる夏の朝").unwrap();
        let fives: Vec<&str> = report.candidates_5.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(fives, vec!["空青い", "青い雲", "夏の朝"]);
        let sevens: Vec<&str> = report.candidates_7.iter().map(|p| p.text.as_str()).collect();
        // 空青い雲 is a valid 7 too, but nothing 5-mora follows it
        assert_eq!(sevens, vec!["空青い雲", "雲が流れる"]);
        assert_eq!(report.score, Some(8.0));
        assert_eq!(report.candidates_5[0].tokens[1].mora, 3);
        assert_eq!(report.candidates_5[0].tokens[1].pos, PosTag::Adjective);
    }

    #[test]
    fn normalization_trims_input() {
        let ex = Extractor::new(LexiconSource::demo());
        let report = ex.diagnose("  夏の朝\n").unwrap();
        assert_eq!(report.tokens.len(), 3);

        let cfg = Config {
            normalize_input: false,
            search_mode: SearchMode::Gapped,
            ..Config::default()
        };
        let ex = Extractor::with_config(LexiconSource::demo(), cfg);
        // whitespace is still dropped by the tokenizer
        assert_eq!(ex.diagnose("  夏の朝\n").unwrap().tokens.len(), 3);
    }
}
