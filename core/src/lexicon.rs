//! Dictionary-backed morphological analyzer.
//!
//! `LexiconSource` is a small, self-contained [`MorphologicalSource`]: a
//! surface → (reading, POS) dictionary held in a character trie, plus a
//! minimum-cost segmentation over the input. It is meant for tests, demos and
//! hosts that only need a curated vocabulary; full Japanese coverage comes
//! from a real analyzer such as vibrato.
//!
//! Lexicon file format, one entry per line:
//!
//! ```text
//! # surface<TAB>reading<TAB>pos
//! 古池	フルイケ	名詞
//! や	ヤ	助詞
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. A reading of `*` or
//! an empty reading means "no reading". When a surface appears more than
//! once the first entry wins.

use std::path::Path;

use crate::trie::TrieNode;
use crate::{LexiconError, Morpheme, MorphologicalSource, TokenizationError};

/// Cost of a segment found in the dictionary.
const KNOWN_COST: f32 = 1.0;
/// Cost of a segment made of unknown characters.
const UNKNOWN_COST: f32 = 10.0;

/// Reading and POS stored for one dictionary surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexEntry {
    pub reading: Option<String>,
    pub pos: String,
}

/// Built-in vocabulary for the demo analyzer.
const DEMO_ENTRIES: &[(&str, &str, &str)] = &[
    ("古池", "フルイケ", "名詞"),
    ("蛙", "カワズ", "名詞"),
    ("飛び込む", "トビコム", "動詞"),
    ("水", "ミズ", "名詞"),
    ("音", "オト", "名詞"),
    ("空", "ソラ", "名詞"),
    ("青い", "アオイ", "形容詞"),
    ("白い", "シロイ", "形容詞"),
    ("雲", "クモ", "名詞"),
    ("流れる", "ナガレル", "動詞"),
    ("夏", "ナツ", "名詞"),
    ("冬", "フユ", "名詞"),
    ("朝", "アサ", "名詞"),
    ("夜", "ヨル", "名詞"),
    ("海", "ウミ", "名詞"),
    ("波", "ナミ", "名詞"),
    ("静か", "シズカ", "形容動詞"),
    ("ああ", "アア", "感動詞"),
    ("そっと", "ソット", "副詞"),
    ("今日", "キョウ", "名詞"),
    ("会議", "カイギ", "名詞"),
    ("長い", "ナガイ", "形容詞"),
    ("眠い", "ネムイ", "形容詞"),
    ("猫", "ネコ", "名詞"),
    ("鳴く", "ナク", "動詞"),
    ("や", "ヤ", "助詞"),
    ("が", "ガ", "助詞"),
    ("の", "ノ", "助詞"),
    ("は", "ハ", "助詞"),
    ("に", "ニ", "助詞"),
    ("を", "ヲ", "助詞"),
    ("も", "モ", "助詞"),
    ("で", "デ", "助詞"),
    ("だ", "ダ", "助動詞"),
    ("です", "デス", "助動詞"),
    ("そして", "ソシテ", "接続詞"),
    ("この", "コノ", "連体詞"),
    ("お", "オ", "接頭辞"),
];

/// Dictionary analyzer over a character trie.
#[derive(Debug, Default)]
pub struct LexiconSource {
    trie: TrieNode<LexEntry>,
    len: usize,
}

impl LexiconSource {
    /// Create an empty lexicon. Every character is then analyzed as unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from `(surface, reading, pos)` triples.
    ///
    /// # Example
    /// ```
    /// use senryu_core::{LexiconSource, MorphologicalSource};
    ///
    /// let lx = LexiconSource::from_entries([("水", "ミズ", "名詞"), ("の", "ノ", "助詞")]);
    /// let ms = lx.analyze("水の").unwrap();
    /// assert_eq!(ms[0].surface, "水");
    /// assert_eq!(ms[1].pos, "助詞");
    /// ```
    pub fn from_entries<'e, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'e str, &'e str, &'e str)>,
    {
        let mut lx = Self::new();
        for (surface, reading, pos) in entries {
            lx.insert(surface, reading, pos);
        }
        lx
    }

    /// A small built-in vocabulary, enough to try the extractor without a
    /// dictionary on disk.
    pub fn demo() -> Self {
        Self::from_entries(DEMO_ENTRIES.iter().copied())
    }

    /// Parse lexicon text (see module docs for the format).
    pub fn parse(content: &str) -> Result<Self, LexiconError> {
        let mut lx = Self::new();
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 3 {
                return Err(LexiconError::Parse {
                    line: idx + 1,
                    reason: format!("expected 3 tab-separated fields, found {}", fields.len()),
                });
            }
            let surface = fields[0].trim();
            if surface.is_empty() {
                return Err(LexiconError::Parse {
                    line: idx + 1,
                    reason: "empty surface".to_string(),
                });
            }
            lx.insert(surface, fields[1].trim(), fields[2].trim());
        }
        tracing::debug!(entries = lx.len, "parsed lexicon");
        Ok(lx)
    }

    /// Load a lexicon file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Add one entry; a surface already present keeps its first entry.
    pub fn insert(&mut self, surface: &str, reading: &str, pos: &str) {
        let reading = match reading {
            "" | "*" => None,
            r => Some(r.to_string()),
        };
        let mut inserted = false;
        self.trie.entry_or_insert_with(surface, || {
            inserted = true;
            LexEntry {
                reading,
                pos: pos.to_string(),
            }
        });
        if inserted {
            self.len += 1;
        }
    }

    pub fn lookup(&self, surface: &str) -> Option<&LexEntry> {
        self.trie.get(surface)
    }

    /// Number of distinct surfaces.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Minimum-cost segmentation of `chars`.
    ///
    /// Backward DP: `best_cost[pos]` is the cheapest way to analyze
    /// `chars[pos..]`. Dictionary words cost `KNOWN_COST`; when nothing in
    /// the dictionary fits, a run of unknown characters costs `UNKNOWN_COST`.
    fn segment(&self, chars: &[char]) -> Vec<Morpheme> {
        let n = chars.len();
        let mut best_cost = vec![f32::INFINITY; n + 1];
        let mut best_choice: Vec<Option<(usize, Option<&LexEntry>)>> = vec![None; n + 1];
        best_cost[n] = 0.0;

        for pos in (0..n).rev() {
            for (end, entry) in self.trie.walk_prefixes(chars, pos) {
                let cand = KNOWN_COST + best_cost[end];
                if cand < best_cost[pos] {
                    best_cost[pos] = cand;
                    best_choice[pos] = Some((end, Some(entry)));
                }
            }
            if best_choice[pos].is_none() {
                let end = unknown_run_end(chars, pos);
                best_cost[pos] = UNKNOWN_COST + best_cost[end];
                best_choice[pos] = Some((end, None));
            }
        }

        let mut out = Vec::new();
        let mut cur = 0usize;
        while cur < n {
            let Some((next, entry)) = best_choice[cur] else {
                break;
            };
            let surface: String = chars[cur..next].iter().collect();
            let morpheme = match entry {
                Some(e) => Morpheme {
                    surface,
                    reading: e.reading.clone(),
                    pos: e.pos.clone(),
                },
                None => {
                    let pos = unknown_pos(chars[cur]);
                    Morpheme {
                        surface,
                        reading: None,
                        pos: pos.to_string(),
                    }
                }
            };
            out.push(morpheme);
            cur = next;
        }
        out
    }
}

impl MorphologicalSource for LexiconSource {
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>, TokenizationError> {
        let chars: Vec<char> = text.chars().collect();
        Ok(self.segment(&chars))
    }
}

#[derive(PartialEq, Eq)]
enum CharClass {
    Space,
    AsciiAlnum,
    Punct,
    Other,
}

fn char_class(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Space
    } else if ch.is_ascii_alphanumeric() {
        CharClass::AsciiAlnum
    } else if ch.is_ascii_punctuation()
        || ('\u{3001}'..='\u{303F}').contains(&ch)
        || ('\u{FF01}'..='\u{FF0F}').contains(&ch)
        || ('\u{FF1A}'..='\u{FF20}').contains(&ch)
        || ('\u{FF3B}'..='\u{FF40}').contains(&ch)
        || ('\u{FF5B}'..='\u{FF65}').contains(&ch)
        || ch == '…'
        || ch == '・'
    {
        CharClass::Punct
    } else {
        CharClass::Other
    }
}

/// End of the unknown segment starting at `pos`. Whitespace and ASCII
/// alphanumerics group into runs; anything else is one character.
fn unknown_run_end(chars: &[char], pos: usize) -> usize {
    let class = char_class(chars[pos]);
    if !matches!(class, CharClass::Space | CharClass::AsciiAlnum) {
        return pos + 1;
    }
    let mut end = pos + 1;
    while end < chars.len() && char_class(chars[end]) == class {
        end += 1;
    }
    end
}

fn unknown_pos(ch: char) -> &'static str {
    match char_class(ch) {
        CharClass::Space => "空白",
        CharClass::Punct => "補助記号",
        // analyzers conventionally guess unknown words as nouns
        CharClass::AsciiAlnum | CharClass::Other => "名詞",
    }
}
