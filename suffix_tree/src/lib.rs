//! Online suffix tree construction via Ukkonen's algorithm.
//!
//! Builds an implicit suffix tree one byte at a time in amortized O(1) per
//! byte, O(n) total. This crate only concerns itself with the tree: node
//! and edge storage (the arena), the Ukkonen construction, and substring
//! search. The LZ76/LZ78 complexity measures built on top live in the
//! `lz_complexity` crate.

mod edge;
mod error;
mod node;
mod tree;

pub use error::TreeError;
pub use node::NodeId;
pub use tree::{EdgeInfo, SuffixTree};
