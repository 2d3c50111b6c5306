//! Hand-authored scoring for phrases and the joins between them.
//!
//! All weights are fixed; nothing here is learned or configurable.

use crate::{Phrase, PosTag};

/// Bonus per content-bearing token.
pub const CORE_TOKEN_BONUS: f32 = 1.0;

/// Flat penalty for a phrase made only of grammatical tokens.
///
/// Validated phrases always carry a content token, so the finder never hands
/// the scorer such a phrase; the branch stays for callers scoring raw spans.
pub const ALL_FILLER_PENALTY: f32 = -2.0;

/// Bonus for a smooth join between consecutive lines.
pub const SMOOTH_TRANSITION_BONUS: f32 = 1.0;

/// (last POS of the earlier line, first POS of the later line)
const SMOOTH_TRANSITIONS: [(PosTag, PosTag); 4] = [
    (PosTag::Noun, PosTag::Particle),
    (PosTag::Particle, PosTag::Verb),
    (PosTag::Adjective, PosTag::Noun),
    (PosTag::Verb, PosTag::Noun),
];

/// Local quality of one phrase.
pub fn score_phrase(phrase: &Phrase<'_>) -> f32 {
    let tokens = phrase.tokens();
    let core = tokens.iter().filter(|t| t.pos.is_core()).count() as f32;
    let mut score = core * CORE_TOKEN_BONUS;
    if tokens.iter().all(|t| t.pos.is_filler()) {
        score += ALL_FILLER_PENALTY;
    }
    score
}

/// Bonus for reading `a` followed by `b`.
pub fn score_transition(a: &Phrase<'_>, b: &Phrase<'_>) -> f32 {
    let pair = (a.last().pos, b.first().pos);
    if SMOOTH_TRANSITIONS.contains(&pair) {
        SMOOTH_TRANSITION_BONUS
    } else {
        0.0
    }
}

/// Score of a full 5-7-5 combination.
pub fn score_combination(first: &Phrase<'_>, second: &Phrase<'_>, third: &Phrase<'_>) -> f32 {
    score_phrase(first)
        + score_phrase(second)
        + score_phrase(third)
        + score_transition(first, second)
        + score_transition(second, third)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token;

    fn tok(surface: &str, pos: PosTag) -> Token {
        Token::new(surface, None, pos)
    }

    #[test]
    fn phrase_score_counts_core_tokens() {
        let tokens = vec![
            tok("水", PosTag::Noun),
            tok("の", PosTag::Particle),
            tok("音", PosTag::Noun),
            tok("ね", PosTag::Other),
        ];
        let p = Phrase::new(&tokens, 0..4).unwrap();
        assert_eq!(score_phrase(&p), 2.0);
        let p = Phrase::new(&tokens, 3..4).unwrap();
        assert_eq!(score_phrase(&p), 0.0);
    }

    #[test]
    fn all_filler_phrase_is_penalized() {
        let tokens = vec![
            tok("に", PosTag::Particle),
            tok("だ", PosTag::AuxiliaryVerb),
            tok("、", PosTag::AuxiliarySymbol),
        ];
        let p = Phrase::new(&tokens, 0..3).unwrap();
        assert_eq!(score_phrase(&p), ALL_FILLER_PENALTY);
    }

    #[test]
    fn transition_table_is_ordered() {
        let tokens = vec![
            tok("白い", PosTag::Adjective),
            tok("雲", PosTag::Noun),
            tok("が", PosTag::Particle),
            tok("流れる", PosTag::Verb),
        ];
        let adj = Phrase::new(&tokens, 0..1).unwrap();
        let noun = Phrase::new(&tokens, 1..2).unwrap();
        let particle = Phrase::new(&tokens, 2..3).unwrap();
        let verb = Phrase::new(&tokens, 3..4).unwrap();

        assert_eq!(score_transition(&adj, &noun), 1.0);
        assert_eq!(score_transition(&noun, &adj), 0.0);
        assert_eq!(score_transition(&noun, &particle), 1.0);
        assert_eq!(score_transition(&particle, &verb), 1.0);
        assert_eq!(score_transition(&verb, &noun), 1.0);
        assert_eq!(score_transition(&verb, &particle), 0.0);
    }

    #[test]
    fn combination_sums_phrases_and_joins() {
        let tokens = vec![
            tok("空", PosTag::Noun),
            tok("青い", PosTag::Adjective),
            tok("雲", PosTag::Noun),
            tok("が", PosTag::Particle),
            tok("流れる", PosTag::Verb),
            tok("夏", PosTag::Noun),
            tok("の", PosTag::Particle),
            tok("朝", PosTag::Noun),
        ];
        let first = Phrase::new(&tokens, 0..2).unwrap();
        let second = Phrase::new(&tokens, 2..5).unwrap();
        let third = Phrase::new(&tokens, 5..8).unwrap();
        assert_eq!(score_combination(&first, &second, &third), 8.0);
    }
}
