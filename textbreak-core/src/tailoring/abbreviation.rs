//! Abbreviation trie
//!
//! Nodes live in one vector and refer to their children by index.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, u32>,
    /// Category of the abbreviation ending here, if any
    category: Option<String>,
}

/// Set of abbreviations grouped by category
#[derive(Debug, Clone)]
pub struct AbbreviationTrie {
    nodes: Vec<TrieNode>,
    case_sensitive: bool,
    len: usize,
}

impl Default for AbbreviationTrie {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AbbreviationTrie {
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            case_sensitive,
            len: 0,
        }
    }

    /// Build from configuration categories.
    ///
    /// A trailing full stop on an entry is ignored, so `"Dr."` and `"Dr"` are
    /// the same abbreviation.
    pub fn from_categories<'a, I, W>(categories: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = (&'a String, W)>,
        W: IntoIterator<Item = &'a String>,
    {
        let mut trie = Self::new(case_sensitive);
        for (category, words) in categories {
            for word in words {
                trie.insert(word.trim_end_matches('.'), category);
            }
        }
        trie
    }

    fn normalize(&self, word: &str) -> String {
        if self.case_sensitive {
            word.to_string()
        } else {
            word.to_lowercase()
        }
    }

    pub fn insert(&mut self, abbreviation: &str, category: &str) {
        if abbreviation.is_empty() {
            return;
        }

        let mut current = 0usize;
        for ch in self.normalize(abbreviation).chars() {
            current = match self.nodes[current].children.get(&ch) {
                Some(&child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(ch, child as u32);
                    child
                }
            };
        }

        let node = &mut self.nodes[current];
        if node.category.is_none() {
            self.len += 1;
        }
        node.category = Some(category.to_string());
    }

    /// Category of `word` if it is a known abbreviation.
    pub fn category(&self, word: &str) -> Option<&str> {
        let mut current = 0usize;
        for ch in self.normalize(word).chars() {
            current = *self.nodes[current].children.get(&ch)? as usize;
        }
        self.nodes[current].category.as_deref()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.category(word).is_some()
    }

    /// Number of distinct abbreviations.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
