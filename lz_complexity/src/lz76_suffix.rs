use suffix_tree::{NodeId, SuffixTree};

use crate::error::ComplexityError;

/// LZ76 phrase counter built on top of an online suffix tree (component C3).
///
/// The tree always holds the text already parsed into complete phrases,
/// minus its very last symbol: `add_symbol` pushes the *previous* character
/// into the tree before testing whether the *current* one still extends the
/// in-progress phrase. This one-symbol lag is what lets the match point be
/// tracked incrementally instead of re-searching the tree from scratch on
/// every character — see the component design note on why the match point
/// is keyed by `(node, first edge symbol)` rather than a cached edge: a
/// split of the very edge being matched is transparently picked up on the
/// next lookup.
#[derive(Debug, Clone)]
pub struct Lz76SuffixParser {
    tree: SuffixTree,
    current_word: Vec<u8>,
    last_char: Option<u8>,
    dictionary_size: usize,
    dictionary: Vec<Vec<u8>>,
    match_node: NodeId,
    match_edge_symbol: Option<u8>,
    match_length: usize,
}

impl Default for Lz76SuffixParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Lz76SuffixParser {
    pub fn new() -> Self {
        Lz76SuffixParser {
            tree: SuffixTree::new(),
            current_word: Vec::new(),
            last_char: None,
            dictionary_size: 0,
            dictionary: Vec::new(),
            match_node: SuffixTree::root(),
            match_edge_symbol: None,
            match_length: 0,
        }
    }

    /// Clears all state so the parser can be reused for a new string
    /// without reallocating its tree arena. Used by batch workers (C6).
    pub fn reset(&mut self) {
        self.tree.reset();
        self.current_word.clear();
        self.last_char = None;
        self.dictionary_size = 0;
        self.dictionary.clear();
        self.match_node = SuffixTree::root();
        self.match_edge_symbol = None;
        self.match_length = 0;
    }

    /// Feeds one symbol. Returns `true` if this symbol completed a phrase.
    pub fn add_symbol(&mut self, c: u8) -> Result<bool, ComplexityError> {
        self.current_word.push(c);
        let previous_last = self.last_char.replace(c);
        if let Some(prev) = previous_last {
            self.tree.add_symbol(prev)?;
        }

        if self.extend_match(c) {
            Ok(false)
        } else {
            self.dictionary_size += 1;
            log::debug!(
                "lz76: phrase #{} complete, length {}",
                self.dictionary_size,
                self.current_word.len()
            );
            let phrase = std::mem::take(&mut self.current_word);
            self.dictionary.push(phrase);
            self.match_node = SuffixTree::root();
            self.match_edge_symbol = None;
            self.match_length = 0;
            Ok(true)
        }
    }

    /// Tries to extend the in-progress phrase by `c`. `self.match_*` always
    /// describes the match for the phrase *before* `c` was appended.
    fn extend_match(&mut self, c: u8) -> bool {
        if self.match_length > 0 {
            let symbol = self
                .match_edge_symbol
                .expect("match_length > 0 implies an active edge symbol");
            let edge = self
                .tree
                .child_edge(self.match_node, symbol)
                .expect("match edge must still exist while match_length > 0");

            if self.match_length < edge.length {
                let next = self.tree.text()[edge.start + self.match_length];
                return if next == c {
                    self.match_length += 1;
                    true
                } else {
                    false
                };
            }

            // Exhausted the edge; fall through to the node-level check below
            // using the edge's destination as the new match node.
            self.match_node = edge.dest;
            self.match_edge_symbol = None;
            self.match_length = 0;
        }

        if self.tree.child_edge(self.match_node, c).is_some() {
            self.match_edge_symbol = Some(c);
            self.match_length = 1;
            true
        } else {
            false
        }
    }

    /// `dictionary_size + 1` if a phrase is in progress, else `dictionary_size`.
    pub fn phrase_count(&self) -> usize {
        self.dictionary_size + usize::from(!self.current_word.is_empty())
    }

    /// The completed phrases, plus the in-progress one if any. Mirrors the
    /// Python reference's `return_dictionary`; exposed mainly for tests and
    /// diagnostics (see scenario S1).
    pub fn dictionary(&self) -> Vec<Vec<u8>> {
        if self.current_word.is_empty() {
            self.dictionary.clone()
        } else {
            let mut d = self.dictionary.clone();
            d.push(self.current_word.clone());
            d
        }
    }

    pub fn text_len(&self) -> usize {
        self.tree.len() + usize::from(self.last_char.is_some())
    }
}

/// Parses `s` start to finish with a fresh parser and returns the LZ76
/// phrase count (the raw, un-scaled count used by the suffix-tree path).
pub fn lz76_suffix_phrase_count(s: &[u8]) -> Result<usize, ComplexityError> {
    let mut parser = Lz76SuffixParser::new();
    for &b in s {
        parser.add_symbol(b)?;
    }
    Ok(parser.phrase_count())
}
