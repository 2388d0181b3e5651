use thiserror::Error;

/// Internal invariant violations detected while building or reading the tree.
///
/// These never fire on well-formed input; they guard against bugs in the
/// Ukkonen construction itself (a missing suffix link, a corrupt active
/// point, a node with two same-keyed children). `DanglingActiveEdge` is
/// checked unconditionally in `split_edge`. `MissingSuffixLink` and
/// `DuplicateChildSymbol` come from the per-phase consistency check in
/// `Arena::check_invariants`, which only runs in debug builds (`cfg(debug_assertions)`)
/// and panics via `debug_assert!` on violation rather than returning
/// normally — walking every node on every phase in a release build would
/// make construction quadratic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node {0} has no suffix link but was expected to have acquired one")]
    MissingSuffixLink(usize),

    #[error("active point referenced edge '{symbol}' from node {node} which does not exist")]
    DanglingActiveEdge { node: usize, symbol: u8 },

    #[error("two children of node {node} share first symbol '{symbol}'")]
    DuplicateChildSymbol { node: usize, symbol: u8 },
}
