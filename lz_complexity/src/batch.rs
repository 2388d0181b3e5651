use std::cell::RefCell;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::entropy::block_entropy;
use crate::error::ComplexityError;
use crate::lz76_suffix::Lz76SuffixParser;
use crate::lz78::Lz78Parser;
use crate::ops::Op;
use crate::scaling::normalize;

thread_local! {
    static LZ76_SUFFIX: RefCell<Lz76SuffixParser> = RefCell::new(Lz76SuffixParser::new());
    static LZ78: RefCell<Lz78Parser> = RefCell::new(Lz78Parser::new());
}

/// Tuning for the parallel batch driver (component C6). A bare `usize`
/// rather than a global or environment variable, so concurrent callers that
/// want different thread counts never clobber one another.
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    pub threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        let threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        BatchConfig { threads }
    }
}

/// Runs `op` against `s`, reusing the calling thread's parser rather than
/// allocating a fresh one. Effective only inside a `rayon` pool, where each
/// worker is a long-lived OS thread and the `thread_local` genuinely
/// persists across many items; called directly it behaves like a one-shot
/// allocation, same as `Op::raw_count`.
fn raw_count_reusing_thread_state(op: Op, s: &[u8]) -> Result<usize, ComplexityError> {
    match op {
        Op::Lz76Suffix => LZ76_SUFFIX.with(|cell| {
            let mut parser = cell.borrow_mut();
            parser.reset();
            for &b in s {
                parser.add_symbol(b)?;
            }
            Ok(parser.phrase_count())
        }),
        Op::Lz78 => LZ78.with(|cell| {
            let mut parser = cell.borrow_mut();
            parser.reset();
            for &b in s {
                parser.add_symbol(b);
            }
            Ok(parser.phrase_count())
        }),
        Op::Lz76Direct => op.raw_count(s),
    }
}

fn build_pool(config: &BatchConfig) -> Option<rayon::ThreadPool> {
    let threads = config.threads.max(1);
    match ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => Some(pool),
        Err(e) => {
            log::warn!(
                "failed to build a {}-thread pool ({}); falling back to the calling thread",
                threads,
                e
            );
            None
        }
    }
}

/// Runs `op` over every string in `inputs`, returning one result per input
/// in the same order as given. A failing item never aborts the others: the
/// result is a sentinel `Err` at that index, not an early return. Use
/// [`summarize`] to collapse the vector into a single success-or-error
/// value.
pub fn run_batch(
    inputs: &[Vec<u8>],
    op: Op,
    config: &BatchConfig,
) -> Vec<Result<f64, ComplexityError>> {
    let compute = |s: &Vec<u8>| raw_count_reusing_thread_state(op, s).map(|c| normalize(c, s.len()));

    match build_pool(config) {
        Some(pool) => pool.install(|| inputs.par_iter().map(compute).collect()),
        None => inputs.iter().map(compute).collect(),
    }
}

/// Same as [`run_batch`] but for block entropy, which takes a shared
/// `block_size` instead of a raw-count `Op`.
pub fn run_entropy_batch(
    inputs: &[Vec<u8>],
    block_size: usize,
    config: &BatchConfig,
) -> Vec<Result<f64, ComplexityError>> {
    let compute = |s: &Vec<u8>| block_entropy(s, block_size);

    match build_pool(config) {
        Some(pool) => pool.install(|| inputs.par_iter().map(compute).collect()),
        None => inputs.iter().map(compute).collect(),
    }
}

/// Collapses a batch's per-item results: `Ok` with every value in original
/// order if all items succeeded, else a single `BatchItemError` naming how
/// many failed.
pub fn summarize(results: Vec<Result<f64, ComplexityError>>) -> Result<Vec<f64>, ComplexityError> {
    let total = results.len();
    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed == 0 {
        Ok(results.into_iter().map(|r| r.unwrap()).collect())
    } else {
        log::warn!("{} of {} batch items failed their precondition", failed, total);
        Err(ComplexityError::BatchItemError {
            count: failed,
            total,
        })
    }
}

pub fn lz_batch(inputs: &[Vec<u8>], op: Op, config: &BatchConfig) -> Result<Vec<f64>, ComplexityError> {
    summarize(run_batch(inputs, op, config))
}

pub fn entropy_batch(
    inputs: &[Vec<u8>],
    block_size: usize,
    config: &BatchConfig,
) -> Result<Vec<f64>, ComplexityError> {
    summarize(run_entropy_batch(inputs, block_size, config))
}
