use thiserror::Error;

/// The single error type threaded through every fallible public function in
/// this crate. One variant per row of the component spec's error table,
/// ordered the same way: input validation first, resource limits next,
/// batch-local and internal-invariant failures last.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComplexityError {
    #[error("block size must be >= 1 and <= sequence length, got {block_size} for length {len}")]
    InvalidBlockSize { block_size: usize, len: usize },

    #[error("L must be a positive integer, got {0}")]
    InvalidLength(i64),

    #[error("input contains a multi-byte character; the suffix-tree path requires single-byte symbols")]
    UnsupportedSymbol,

    #[error("L={l} exceeds the hard cap of {cap} for this mode")]
    ResourceLimit { l: u32, cap: u32 },

    #[error("{count} of {total} batch items failed their precondition")]
    BatchItemError { count: usize, total: usize },

    #[error("internal suffix tree invariant violated: {0}")]
    ContractViolation(#[from] suffix_tree::TreeError),
}
