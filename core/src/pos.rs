//! Coarse part-of-speech tags and the tag subsets the extractor cares about.
use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag of a morpheme.
///
/// Only membership in the subsets below matters to phrase validation and
/// scoring; the full tag inventory of the analyzer is collapsed into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    AdjectivalNoun,
    Interjection,
    Particle,
    AuxiliaryVerb,
    Symbol,
    AuxiliarySymbol,
    Conjunction,
    PreNounAdjectival,
    Prefix,
    Whitespace,
    Other,
}

impl PosTag {
    /// Map an analyzer tag to a `PosTag`.
    ///
    /// Accepts the IPADIC/UniDic coarse tags (`名詞`, `助詞`, ...) as well as
    /// the kebab-case English names used by `Serialize`. Unknown tags map to
    /// `Other`.
    ///
    /// # Example
    /// ```
    /// use senryu_core::PosTag;
    ///
    /// assert_eq!(PosTag::from_tag("名詞"), PosTag::Noun);
    /// assert_eq!(PosTag::from_tag("形状詞"), PosTag::AdjectivalNoun);
    /// assert_eq!(PosTag::from_tag("particle"), PosTag::Particle);
    /// assert_eq!(PosTag::from_tag("フィラー"), PosTag::Other);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "名詞" | "noun" => PosTag::Noun,
            "動詞" | "verb" => PosTag::Verb,
            "形容詞" | "adjective" => PosTag::Adjective,
            "副詞" | "adverb" => PosTag::Adverb,
            // UniDic calls adjectival nouns 形状詞
            "形容動詞" | "形状詞" | "adjectival-noun" => PosTag::AdjectivalNoun,
            "感動詞" | "interjection" => PosTag::Interjection,
            "助詞" | "particle" => PosTag::Particle,
            "助動詞" | "auxiliary-verb" => PosTag::AuxiliaryVerb,
            "記号" | "symbol" => PosTag::Symbol,
            "補助記号" | "auxiliary-symbol" => PosTag::AuxiliarySymbol,
            "接続詞" | "conjunction" => PosTag::Conjunction,
            "連体詞" | "pre-noun-adjectival" => PosTag::PreNounAdjectival,
            // IPADIC spells prefix 接頭詞
            "接頭辞" | "接頭詞" | "prefix" => PosTag::Prefix,
            "空白" | "whitespace" => PosTag::Whitespace,
            _ => PosTag::Other,
        }
    }

    /// Content-bearing tags. Every phrase needs at least one of these.
    pub fn is_core(self) -> bool {
        matches!(
            self,
            PosTag::Noun
                | PosTag::Verb
                | PosTag::Adjective
                | PosTag::Adverb
                | PosTag::Interjection
                | PosTag::AdjectivalNoun
        )
    }

    /// Tags a phrase may neither start nor end with.
    pub fn is_bad_boundary(self) -> bool {
        matches!(
            self,
            PosTag::Particle
                | PosTag::AuxiliaryVerb
                | PosTag::Symbol
                | PosTag::AuxiliarySymbol
                | PosTag::Conjunction
                | PosTag::PreNounAdjectival
                | PosTag::Prefix
        )
    }

    /// Purely grammatical tags, penalized by the phrase scorer.
    pub fn is_filler(self) -> bool {
        matches!(
            self,
            PosTag::Particle | PosTag::AuxiliaryVerb | PosTag::Symbol | PosTag::AuxiliarySymbol
        )
    }

    /// Tags the tokenizer drops before any search.
    pub fn is_noise(self) -> bool {
        matches!(
            self,
            PosTag::Symbol | PosTag::AuxiliarySymbol | PosTag::Whitespace
        )
    }
}
