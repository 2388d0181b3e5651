use crate::edge::{Edge, EdgeEnd};
use crate::error::TreeError;

pub type NodeId = usize;

/// Children of a node, keyed by the first byte of their edge label.
///
/// The design note in the component spec calls for a small inline table
/// rather than a balanced tree: real workloads are binary or otherwise
/// tiny-alphabet, so a node rarely has more than a couple of children and a
/// linear scan over a `Vec` beats the constant overhead of a `BTreeMap` while
/// keeping the arena allocation-free beyond that one `Vec`.
#[derive(Debug, Default, Clone)]
pub(crate) struct ChildMap {
    entries: Vec<(u8, Edge)>,
}

impl ChildMap {
    #[inline]
    fn position(&self, symbol: u8) -> Option<usize> {
        self.entries.iter().position(|&(b, _)| b == symbol)
    }

    #[inline]
    pub fn get(&self, symbol: u8) -> Option<&Edge> {
        self.position(symbol).map(|i| &self.entries[i].1)
    }

    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.position(symbol).is_some()
    }

    /// Used only by the debug-build consistency check.
    #[inline]
    #[cfg(debug_assertions)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first first-symbol found more than once, if any. Used
    /// only by the debug-build consistency check; `insert` already refuses
    /// to create a duplicate in the first place.
    #[cfg(debug_assertions)]
    pub fn duplicate_symbol(&self) -> Option<u8> {
        for i in 0..self.entries.len() {
            for j in i + 1..self.entries.len() {
                if self.entries[i].0 == self.entries[j].0 {
                    return Some(self.entries[i].0);
                }
            }
        }
        None
    }

    /// Inserts a new edge. Caller is responsible for not violating the
    /// "distinct first symbols" invariant (enforced in debug builds).
    pub fn insert(&mut self, symbol: u8, edge: Edge) {
        debug_assert!(
            !self.contains(symbol),
            "duplicate child symbol {} inserted",
            symbol
        );
        self.entries.push((symbol, edge));
    }

    pub fn replace(&mut self, symbol: u8, edge: Edge) {
        match self.position(symbol) {
            Some(i) => self.entries[i].1 = edge,
            None => self.entries.push((symbol, edge)),
        }
    }
}

/// A vertex in the suffix tree. Nodes never hold payload beyond identity;
/// path information lives on the incoming edge.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub children: ChildMap,
    pub suffix_link: Option<NodeId>,
}

/// The arena owning every node and edge in the tree (component C1).
///
/// Node identities are dense `usize` indices into `nodes` and are stable for
/// the lifetime of the arena: nodes are appended, never removed, so a
/// `NodeId` obtained from one call stays valid across every later call.
#[derive(Debug, Clone)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
}

pub(crate) const ROOT: NodeId = 0;

impl Arena {
    pub fn new() -> Self {
        Arena {
            nodes: vec![Node::default()],
        }
    }

    #[inline]
    pub fn new_node(&mut self) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::default());
        id
    }

    /// Attaches a brand-new edge from `from`, keyed by its first symbol.
    pub fn add_edge(&mut self, from: NodeId, symbol: u8, edge: Edge) {
        self.nodes[from].children.insert(symbol, edge);
    }

    #[inline]
    pub fn child(&self, from: NodeId, symbol: u8) -> Option<&Edge> {
        self.nodes[from].children.get(symbol)
    }

    pub fn set_suffix_link(&mut self, node: NodeId, target: NodeId) {
        self.nodes[node].suffix_link = Some(target);
    }

    pub fn suffix_link(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node].suffix_link
    }

    /// Splits the edge `from --symbol--> e.dest` at `split_at` symbols into
    /// the label, inserting a new internal node at the split point. Returns
    /// the new internal node.
    ///
    /// `from --(e.start..e.start+split_at-1])--> new_internal --(..e.end)--> e.dest`
    pub fn split_edge(
        &mut self,
        from: NodeId,
        symbol: u8,
        split_at: usize,
        next_symbol: u8,
    ) -> Result<NodeId, TreeError> {
        let edge = *self
            .child(from, symbol)
            .ok_or(TreeError::DanglingActiveEdge { node: from, symbol })?;

        let new_internal = self.new_node();
        let shortened = Edge::new_concrete(edge.start, edge.start + split_at - 1, new_internal);
        self.nodes[from].children.replace(symbol, shortened);

        let continuation = match edge.end {
            EdgeEnd::Open => Edge::new_leaf(edge.start + split_at, edge.dest),
            EdgeEnd::Concrete(e) => Edge::new_concrete(edge.start + split_at, e, edge.dest),
        };
        self.nodes[new_internal].children.insert(next_symbol, continuation);

        Ok(new_internal)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Per-phase consistency check (component C1/C2's contract): every
    /// node that existed before the phase now in progress and has grown
    /// children must have acquired a suffix link by now, and no node's
    /// children may share a first symbol. Nodes created during the
    /// current phase are exempt — the last one created in a phase is
    /// only linked once the *next* phase resolves it.
    ///
    /// Debug-only: walking every pre-existing node on every phase would
    /// make construction quadratic, which defeats the point of an O(n)
    /// online algorithm, so this never runs in a release build.
    #[cfg(debug_assertions)]
    pub fn check_invariants(&self, prior_len: usize) -> Result<(), TreeError> {
        for id in 1..prior_len.min(self.nodes.len()) {
            let node = &self.nodes[id];
            if let Some(symbol) = node.children.duplicate_symbol() {
                return Err(TreeError::DuplicateChildSymbol { node: id, symbol });
            }
            if !node.children.is_empty() && node.suffix_link.is_none() {
                return Err(TreeError::MissingSuffixLink(id));
            }
        }
        Ok(())
    }
}
