use crate::error::ComplexityError;
use crate::lz76_direct::lz76_direct_phrase_count;
use crate::lz76_suffix::lz76_suffix_phrase_count;
use crate::lz78::lz78_phrase_count;

/// Which raw phrase-counting algorithm to run. Used to parameterize the
/// batch driver (C6) and the symmetric/conditional wrappers so they don't
/// need a separate copy of each for every measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Suffix-tree-backed LZ76 (component C3). O(n) per string.
    Lz76Suffix,
    /// Direct sliding-window LZ76 (component C4). O(n^2)-ish, used for
    /// short strings and as a correctness oracle for `Lz76Suffix`.
    Lz76Direct,
    /// Trie-backed LZ78 (component C4).
    Lz78,
}

impl Op {
    pub fn raw_count(self, s: &[u8]) -> Result<usize, ComplexityError> {
        match self {
            Op::Lz76Suffix => lz76_suffix_phrase_count(s),
            Op::Lz76Direct => Ok(lz76_direct_phrase_count(s)),
            Op::Lz78 => Ok(lz78_phrase_count(s)),
        }
    }
}
