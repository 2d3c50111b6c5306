/// Character trie keyed by surface form, used for dictionary segmentation.
use std::collections::HashMap;

/// A character trie mapping surface strings to a value.
///
/// Used by [`crate::LexiconSource`] to find every dictionary word that starts
/// at a given character position of the input.
///
/// # Example
/// ```
/// use senryu_core::trie::TrieNode;
///
/// let mut trie = TrieNode::new();
/// trie.insert("古池", 1);
/// trie.insert("古", 2);
///
/// let input: Vec<char> = "古池や".chars().collect();
/// let prefixes = trie.walk_prefixes(&input, 0);
/// assert_eq!(prefixes, vec![(1, &2), (2, &1)]);
/// ```
#[derive(Debug)]
pub struct TrieNode<V> {
    children: HashMap<char, Box<TrieNode<V>>>,
    value: Option<V>,
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TrieNode<V> {
    /// Create a new empty trie root.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }

    /// Insert `key`, replacing any value already stored for it.
    pub fn insert(&mut self, key: &str, value: V) {
        let node = self.node_mut(key);
        node.value = Some(value);
    }

    /// Mutable access to the value for `key`, inserting `default()` first if
    /// the key is new.
    pub fn entry_or_insert_with<F: FnOnce() -> V>(&mut self, key: &str, default: F) -> &mut V {
        self.node_mut(key).value.get_or_insert_with(default)
    }

    fn node_mut(&mut self, key: &str) -> &mut TrieNode<V> {
        let mut node = self;
        for ch in key.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(TrieNode::new()));
        }
        node
    }

    /// Exact lookup. A key that is only a prefix of stored keys is absent.
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut node = self;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        node.value.as_ref()
    }

    /// Walk the trie from `start` in `input` and return every stored key that
    /// is a prefix of `input[start..]`.
    ///
    /// Returns `(end_index, value)` pairs, `end_index` exclusive, in order of
    /// increasing length.
    pub fn walk_prefixes<'t>(&'t self, input: &[char], start: usize) -> Vec<(usize, &'t V)> {
        let mut res = Vec::new();
        let mut node = self;
        let mut idx = start;
        while idx < input.len() {
            match node.children.get(&input[idx]) {
                Some(child) => {
                    node = child;
                    idx += 1;
                    if let Some(v) = &node.value {
                        res.push((idx, v));
                    }
                }
                None => break,
            }
        }
        res
    }
}
