use std::collections::HashMap;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::error::ComplexityError;
use crate::ops::Op;

const WARN_LENGTH: u32 = 22;
const MAX_VECTOR_LENGTH: u32 = 28;
const MAX_DISTRIBUTION_LENGTH: u32 = 35;

/// Tuning for the exhaustive enumeration engine (component C7). Separate
/// from [`crate::batch::BatchConfig`] because the two have different
/// natural defaults and independent callers should be able to tune them
/// independently.
#[derive(Debug, Clone, Copy)]
pub struct ExhaustiveConfig {
    pub threads: usize,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        let threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        ExhaustiveConfig { threads }
    }
}

/// Decodes `i` into its length-`l` binary representation, MSB-first: the
/// string's first symbol is `i`'s highest-order bit among the `l` used.
fn to_bits(i: u64, l: u32) -> Vec<u8> {
    (0..l)
        .map(|pos| {
            let bit = l - 1 - pos;
            if (i >> bit) & 1 == 1 {
                b'1'
            } else {
                b'0'
            }
        })
        .collect()
}

fn build_pool(config: &ExhaustiveConfig) -> Option<rayon::ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(config.threads.max(1))
        .build()
        .map_err(|e| log::warn!("failed to build exhaustive worker pool: {}", e))
        .ok()
}

fn check_length(l: i64, cap: u32) -> Result<u32, ComplexityError> {
    if l <= 0 {
        return Err(ComplexityError::InvalidLength(l));
    }
    let l = l as u32;
    if l > cap {
        return Err(ComplexityError::ResourceLimit { l, cap });
    }
    if l > WARN_LENGTH {
        log::warn!(
            "enumerating all 2^{} strings; this is {} strings and may take a while",
            l,
            1u64 << l
        );
    }
    Ok(l)
}

/// Computes the raw phrase count of every one of the `2^L` binary strings
/// of length `L`, indexed by the string's value read as an `L`-bit
/// unsigned integer, MSB-first. Refuses `L <= 0` and `L > 28`
/// outright (at `L = 28` the output vector alone is already ~2 GiB of
/// `usize`); warns above `L = 22` since the work is already large there.
pub fn lz76_enumerate_counts(
    l: i64,
    op: Op,
    config: &ExhaustiveConfig,
) -> Result<Vec<usize>, ComplexityError> {
    let l = check_length(l, MAX_VECTOR_LENGTH)?;
    let total = 1u64 << l;

    let compute = |i: u64| op.raw_count(&to_bits(i, l)).unwrap_or(0);

    let counts = match build_pool(config) {
        Some(pool) => pool.install(|| (0..total).into_par_iter().map(compute).collect()),
        None => (0..total).map(compute).collect(),
    };
    Ok(counts)
}

/// Same enumeration as [`lz76_enumerate_counts`], but folds the result into
/// a histogram of `phrase_count -> occurrences` instead of materializing a
/// `2^L`-length vector, which is what lets `L` scale up to 35.
pub fn lz76_enumerate_distribution(
    l: i64,
    op: Op,
    config: &ExhaustiveConfig,
) -> Result<HashMap<usize, usize>, ComplexityError> {
    let l = check_length(l, MAX_DISTRIBUTION_LENGTH)?;
    let total = 1u64 << l;

    let fold_one = |mut acc: HashMap<usize, usize>, i: u64| {
        let count = op.raw_count(&to_bits(i, l)).unwrap_or(0);
        *acc.entry(count).or_insert(0) += 1;
        acc
    };
    let merge = |mut a: HashMap<usize, usize>, b: HashMap<usize, usize>| {
        for (k, v) in b {
            *a.entry(k).or_insert(0) += v;
        }
        a
    };

    let histogram = match build_pool(config) {
        Some(pool) => pool.install(|| {
            (0..total)
                .into_par_iter()
                .fold(HashMap::new, fold_one)
                .reduce(HashMap::new, merge)
        }),
        None => (0..total).fold(HashMap::new(), fold_one),
    };
    Ok(histogram)
}
