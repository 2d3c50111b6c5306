//! Phrase candidates and the mora-exact phrase finder.
//!
//! This module provides:
//! - `Candidate`: a valid phrase plus the index where the next line may start
//! - `find_at` / `find`: enumerate candidates for a target mora count

use crate::phrase::{is_valid, Phrase};
use crate::Token;

/// A phrase produced by the finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Token index immediately after the phrase.
    pub end_index: usize,
    pub phrase: Phrase<'a>,
}

impl<'a> Candidate<'a> {
    pub fn new(phrase: Phrase<'a>) -> Self {
        Candidate {
            end_index: phrase.end(),
            phrase,
        }
    }
}

/// The candidate starting exactly at `start`, if any.
///
/// Tokens are accumulated from `start` until the running mora sum reaches or
/// passes `target_mora`. Mora counts are positive, so once the sum passes the
/// target no longer span from `start` can match; the first exact match is the
/// only one, and it is returned only if it passes [`is_valid`].
pub fn find_at<'a>(tokens: &'a [Token], start: usize, target_mora: usize) -> Option<Candidate<'a>> {
    let mut total = 0usize;
    for (end, token) in tokens.iter().enumerate().skip(start) {
        total += token.mora;
        if total == target_mora {
            let phrase = Phrase::new(tokens, start..end + 1)?;
            return is_valid(&phrase).then(|| Candidate::new(phrase));
        }
        if total > target_mora {
            return None;
        }
    }
    None
}

/// All candidates starting at or after `start_index`, by ascending start.
///
/// At most one candidate per start position. Worst case O(n²) per target.
pub fn find(tokens: &[Token], start_index: usize, target_mora: usize) -> Vec<Candidate<'_>> {
    (start_index..tokens.len())
        .filter_map(|i| find_at(tokens, i, target_mora))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PosTag;

    fn tok(surface: &str, mora: usize, pos: PosTag) -> Token {
        let reading: String = "ア".repeat(mora);
        Token::new(surface, Some(&reading), pos)
    }

    #[test]
    fn finds_one_candidate_per_start_in_order() {
        let tokens = vec![
            tok("空", 2, PosTag::Noun),
            tok("青い", 3, PosTag::Adjective),
            tok("雲", 2, PosTag::Noun),
            tok("が", 1, PosTag::Particle),
            tok("流れる", 4, PosTag::Verb),
        ];
        let found = find(&tokens, 0, 5);
        let texts: Vec<String> = found.iter().map(|c| c.phrase.text()).collect();
        // "が流れる" sums to 5 but starts on a particle
        assert_eq!(texts, vec!["空青い", "青い雲"]);
        assert_eq!(found[0].end_index, 2);
        assert_eq!(found[1].end_index, 3);
        for c in &found {
            assert_eq!(c.phrase.total_mora(), 5);
            assert_eq!(c.end_index, c.phrase.end());
        }
    }

    #[test]
    fn stops_once_sum_overshoots() {
        // 4 then 6: overshoots 5 and may never come back
        let tokens = vec![
            tok("昼寝", 4, PosTag::Noun),
            tok("夢", 2, PosTag::Noun),
            tok("猫", 3, PosTag::Noun),
        ];
        assert!(find_at(&tokens, 0, 5).is_none());
        let c = find_at(&tokens, 1, 5).unwrap();
        assert_eq!(c.phrase.text(), "夢猫");
        assert!(c.phrase.total_mora() <= 5);
    }

    #[test]
    fn first_exact_match_decides_even_if_invalid() {
        // a particle inside the span is fine
        let tokens = vec![
            tok("雨", 2, PosTag::Noun),
            tok("が", 1, PosTag::Particle),
            tok("降る", 2, PosTag::Verb),
            tok("よ", 1, PosTag::Particle),
        ];
        assert_eq!(find_at(&tokens, 0, 5).unwrap().phrase.text(), "雨が降る");

        // exact match ends on a particle: rejected, and no longer span is tried
        let tokens = vec![
            tok("雨", 2, PosTag::Noun),
            tok("降る", 2, PosTag::Verb),
            tok("よ", 1, PosTag::Particle),
        ];
        assert!(find_at(&tokens, 0, 5).is_none());
    }

    #[test]
    fn start_index_past_end_or_empty_tokens() {
        let tokens = vec![tok("空", 2, PosTag::Noun), tok("青い", 3, PosTag::Adjective)];
        assert!(find(&tokens, 2, 5).is_empty());
        assert!(find(&tokens, 10, 5).is_empty());
        assert!(find(&[], 0, 5).is_empty());
        assert!(find_at(&tokens, 5, 5).is_none());
    }

    #[test]
    fn never_emits_wrong_mora_totals() {
        let moras = [1, 2, 3, 1, 1, 4, 2, 2, 1, 3, 2, 1];
        let tokens: Vec<Token> = moras
            .iter()
            .enumerate()
            .map(|(i, &m)| {
                let pos = if i % 3 == 1 { PosTag::Particle } else { PosTag::Noun };
                tok(&format!("w{}", i), m, pos)
            })
            .collect();
        for target in [5, 7] {
            for start in 0..tokens.len() {
                for c in find(&tokens, start, target) {
                    assert_eq!(c.phrase.total_mora(), target);
                    assert!(c.phrase.start() >= start);
                    assert!(is_valid(&c.phrase));
                }
            }
        }
    }
}
