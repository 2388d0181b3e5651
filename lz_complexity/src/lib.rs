//! Lempel-Ziv complexity measures built on top of the `suffix_tree` crate.
//!
//! Three independent ways to count phrases (an O(n) suffix-tree-backed
//! LZ76 parser, a direct sliding-window LZ76 parser, and a trie-backed
//! LZ78 parser), normalized against the random-sequence asymptote, plus
//! symmetric and conditional variants, block entropy, a parallel batch
//! driver, and exhaustive enumeration over all binary strings of a given
//! length.
//!
//! All public entry points take `&str` and require every character to fit
//! in one byte (`UnsupportedSymbol` otherwise): the underlying parsers
//! operate on raw bytes, one byte per symbol.

mod batch;
mod entropy;
mod error;
mod exhaustive;
mod lz76_direct;
mod lz76_suffix;
mod lz78;
mod ops;
mod scaling;
mod variants;

pub use batch::BatchConfig;
pub use error::ComplexityError;
pub use exhaustive::ExhaustiveConfig;
pub use lz76_suffix::Lz76SuffixParser;
pub use lz78::Lz78Parser;
pub use ops::Op;

fn validate_single_byte(s: &str) -> Result<&[u8], ComplexityError> {
    if s.is_ascii() {
        Ok(s.as_bytes())
    } else {
        Err(ComplexityError::UnsupportedSymbol)
    }
}

fn validate_all(strings: &[String]) -> Result<Vec<Vec<u8>>, ComplexityError> {
    strings
        .iter()
        .map(|s| validate_single_byte(s).map(|b| b.to_vec()))
        .collect()
}

/// LZ76 complexity of `s`, scaled by `log2(len(s))` (the bare phrase count
/// when `len(s) <= 1`, `0.0` when empty), computed via the O(n)
/// suffix-tree parser (component C3).
pub fn lz76_scaled(s: &str) -> Result<f64, ComplexityError> {
    let bytes = validate_single_byte(s)?;
    let count = lz76_suffix::lz76_suffix_phrase_count(bytes)?;
    Ok(scaling::normalize(count, bytes.len()))
}

/// LZ76 complexity of `s` via the direct sliding-window parser (component
/// C4). Quadratic in `s.len()`; intended for short strings or as a
/// correctness check against [`lz76_scaled`].
pub fn lz76_direct_scaled(s: &str) -> Result<f64, ComplexityError> {
    let bytes = validate_single_byte(s)?;
    let count = lz76_direct::lz76_direct_phrase_count(bytes);
    Ok(scaling::normalize(count, bytes.len()))
}

/// LZ78 complexity of `s`, normalized the same way as [`lz76_scaled`].
pub fn lz78_scaled(s: &str) -> Result<f64, ComplexityError> {
    let bytes = validate_single_byte(s)?;
    let count = lz78::lz78_phrase_count(bytes);
    Ok(scaling::normalize(count, bytes.len()))
}

/// Shannon entropy, in bits, of `s`'s length-`block_size` sliding windows
/// (component C5).
pub fn block_entropy(s: &str, block_size: usize) -> Result<f64, ComplexityError> {
    let bytes = validate_single_byte(s)?;
    entropy::block_entropy(bytes, block_size)
}

/// Average of `s`'s and its reverse's normalized LZ76 complexity.
pub fn lz76_symmetric(s: &str) -> Result<f64, ComplexityError> {
    let bytes = validate_single_byte(s)?;
    variants::symmetric_variant(Op::Lz76Suffix, bytes)
}

/// Average of `s`'s and its reverse's normalized LZ78 complexity.
pub fn lz78_symmetric(s: &str) -> Result<f64, ComplexityError> {
    let bytes = validate_single_byte(s)?;
    variants::symmetric_variant(Op::Lz78, bytes)
}

/// `K(y|x)` under LZ76: how many additional phrases `y` costs once `x` is
/// already parsed.
pub fn lz76_conditional(x: &str, y: &str) -> Result<f64, ComplexityError> {
    let xb = validate_single_byte(x)?;
    let yb = validate_single_byte(y)?;
    variants::conditional(Op::Lz76Suffix, xb, yb)
}

/// `K(y|x)` under LZ78.
pub fn lz78_conditional(x: &str, y: &str) -> Result<f64, ComplexityError> {
    let xb = validate_single_byte(x)?;
    let yb = validate_single_byte(y)?;
    variants::conditional(Op::Lz78, xb, yb)
}

/// Normalized LZ76 complexity of every string in `inputs`, computed in
/// parallel via the suffix-tree path (component C6). Same function as
/// [`lz76_suffix_batch`]; both names are kept because callers reach for
/// either depending on whether they're thinking "the default LZ76 batch"
/// or "specifically the suffix-tree one".
pub fn lz76_batch(inputs: &[String], config: &BatchConfig) -> Result<Vec<f64>, ComplexityError> {
    let bytes = validate_all(inputs)?;
    batch::lz_batch(&bytes, Op::Lz76Suffix, config)
}

/// See [`lz76_batch`].
pub fn lz76_suffix_batch(inputs: &[String], config: &BatchConfig) -> Result<Vec<f64>, ComplexityError> {
    lz76_batch(inputs, config)
}

/// Normalized LZ76 complexity of every string in `inputs`, via the direct
/// parser. Only worthwhile for batches of short strings.
pub fn lz76_direct_batch(inputs: &[String], config: &BatchConfig) -> Result<Vec<f64>, ComplexityError> {
    let bytes = validate_all(inputs)?;
    batch::lz_batch(&bytes, Op::Lz76Direct, config)
}

/// Normalized LZ78 complexity of every string in `inputs`, in parallel.
pub fn lz78_batch(inputs: &[String], config: &BatchConfig) -> Result<Vec<f64>, ComplexityError> {
    let bytes = validate_all(inputs)?;
    batch::lz_batch(&bytes, Op::Lz78, config)
}

/// Block entropy of every string in `inputs`, in parallel.
pub fn block_entropy_batch(
    inputs: &[String],
    block_size: usize,
    config: &BatchConfig,
) -> Result<Vec<f64>, ComplexityError> {
    let bytes = validate_all(inputs)?;
    batch::entropy_batch(&bytes, block_size, config)
}

/// Raw LZ76 phrase count of every one of the `2^l` binary strings of
/// length `l`, indexed by the string read as an `l`-bit integer (component
/// C7). `op` selects which parser computes each count; `Op::Lz76Suffix` is
/// the natural choice since it is the only one that stays fast as `l`
/// grows.
pub fn lz76_enumerate_counts(l: i64, op: Op, config: &ExhaustiveConfig) -> Result<Vec<usize>, ComplexityError> {
    exhaustive::lz76_enumerate_counts(l, op, config)
}

/// Distribution (`phrase_count -> occurrences`) over all `2^l` binary
/// strings of length `l`. Scales further than
/// [`lz76_enumerate_counts`] because it never materializes the full
/// `2^l`-length vector.
pub fn lz76_enumerate_distribution(
    l: i64,
    op: Op,
    config: &ExhaustiveConfig,
) -> Result<std::collections::HashMap<usize, usize>, ComplexityError> {
    exhaustive::lz76_enumerate_distribution(l, op, config)
}
