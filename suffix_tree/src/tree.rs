use crate::edge::Edge;
use crate::error::TreeError;
use crate::node::{Arena, NodeId, ROOT};

/// A resolved view of one outgoing edge, with the open end already
/// collapsed against the tree's current `global_end`. This is what callers
/// outside the crate (the LZ76 parser, most notably) are allowed to see —
/// the `Edge`/`Arena` types stay private so the tree alone can uphold its
/// invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeInfo {
    pub start: usize,
    pub length: usize,
    pub dest: NodeId,
}

/// An online (Ukkonen) suffix tree, built one symbol at a time.
///
/// The tree is always an implicit suffix tree of the text appended so far:
/// every suffix is spelled by some root-to-point path. No terminator is
/// added automatically — callers that need an explicit tree (every suffix
/// ending in a leaf) must append a symbol outside the alphabet themselves.
#[derive(Debug, Clone)]
pub struct SuffixTree {
    text: Vec<u8>,
    arena: Arena,
    active_node: NodeId,
    active_edge_symbol: u8,
    active_length: usize,
    remainder: usize,
    global_end: usize,
}

impl Default for SuffixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixTree {
    pub fn new() -> Self {
        SuffixTree {
            text: Vec::new(),
            arena: Arena::new(),
            active_node: ROOT,
            active_edge_symbol: 0,
            active_length: 0,
            remainder: 0,
            global_end: 0,
        }
    }

    /// Rebuilds from scratch, reusing the allocation backing `self`. Batch
    /// workers hold one `SuffixTree` per thread and `reset` it between
    /// inputs instead of allocating a fresh arena each time.
    pub fn reset(&mut self) {
        self.text.clear();
        self.arena = Arena::new();
        self.active_node = ROOT;
        self.active_edge_symbol = 0;
        self.active_length = 0;
        self.remainder = 0;
        self.global_end = 0;
    }

    #[inline]
    pub fn root() -> NodeId {
        ROOT
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Resolves the edge leaving `node` keyed by `symbol`, if any, with its
    /// open end (if a leaf edge) collapsed to the tree's current length.
    pub fn child_edge(&self, node: NodeId, symbol: u8) -> Option<EdgeInfo> {
        self.arena.child(node, symbol).map(|e| EdgeInfo {
            start: e.start,
            length: e.length(self.global_end),
            dest: e.dest,
        })
    }

    /// One phase of Ukkonen's algorithm: appends `c` and restores the
    /// implicit-suffix-tree invariant for the now one-symbol-longer text.
    pub fn add_symbol(&mut self, c: u8) -> Result<(), TreeError> {
        #[cfg(debug_assertions)]
        let prior_len = self.arena.len();

        self.text.push(c);
        self.global_end = self.text.len() - 1;
        self.remainder += 1;
        let mut last_new_internal: Option<NodeId> = None;

        while self.remainder > 0 {
            if self.active_length == 0 {
                self.active_edge_symbol = c;
            }

            let edge = self.arena.child(self.active_node, self.active_edge_symbol).copied();
            match edge {
                None => {
                    let leaf = self.arena.new_node();
                    let new_edge = Edge::new_leaf(self.global_end, leaf);
                    self.arena.add_edge(self.active_node, self.active_edge_symbol, new_edge);
                    if let Some(u) = last_new_internal.take() {
                        self.arena.set_suffix_link(u, self.active_node);
                    }
                }
                Some(edge) => {
                    let edge_len = edge.length(self.global_end);

                    if self.active_length >= edge_len {
                        self.active_node = edge.dest;
                        self.active_length -= edge_len;
                        self.active_edge_symbol = self.text[self.global_end - self.active_length];
                        continue;
                    }

                    let c_on_edge = self.text[edge.start + self.active_length];
                    if c_on_edge == c {
                        // Rule 3: the suffix already exists in the tree. Stop
                        // the phase without consuming the remainder.
                        self.active_length += 1;
                        if let Some(u) = last_new_internal.take() {
                            self.arena.set_suffix_link(u, self.active_node);
                        }
                        break;
                    }

                    let new_internal = self.arena.split_edge(
                        self.active_node,
                        self.active_edge_symbol,
                        self.active_length,
                        c,
                    )?;
                    if let Some(u) = last_new_internal.take() {
                        self.arena.set_suffix_link(u, new_internal);
                    }
                    last_new_internal = Some(new_internal);
                }
            }

            self.remainder -= 1;
            if self.active_node == ROOT && self.active_length > 0 {
                self.active_length -= 1;
                self.active_edge_symbol = self.text[self.global_end - self.remainder + 1];
            } else if self.active_node != ROOT {
                self.active_node = self.arena.suffix_link(self.active_node).unwrap_or(ROOT);
            }
        }

        log::trace!(
            "add_symbol: global_end={} remainder={} nodes={}",
            self.global_end,
            self.remainder,
            self.arena.len()
        );

        #[cfg(debug_assertions)]
        if let Err(e) = self.arena.check_invariants(prior_len) {
            debug_assert!(false, "internal consistency check failed: {}", e);
            return Err(e);
        }

        Ok(())
    }

    /// Returns whether `pattern` occurs in the text accumulated so far.
    pub fn find(&self, pattern: &[u8]) -> bool {
        if pattern.is_empty() {
            return true;
        }
        let mut node = ROOT;
        let mut i = 0;
        while i < pattern.len() {
            let edge = match self.arena.child(node, pattern[i]) {
                Some(e) => *e,
                None => return false,
            };
            let real_end = edge.real_end(self.global_end).min(self.global_end);
            let start = edge.start;
            let mut j = 0;
            while start + j <= real_end && i + j < pattern.len() {
                if self.text[start + j] != pattern[i + j] {
                    return false;
                }
                j += 1;
            }
            if i + j == pattern.len() {
                return true;
            }
            node = edge.dest;
            i += j;
        }
        true
    }
}
