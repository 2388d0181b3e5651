use std::collections::HashMap;

use crate::error::ComplexityError;

/// Shannon entropy, in bits, of the distribution of length-`block_size`
/// windows sliding over `s` (component C5). Grounded on the Python
/// reference's `block_entropy`: count each overlapping window of length
/// `block_size`, then take `-sum(p * log2(p))` over the resulting
/// frequencies.
pub fn block_entropy(s: &[u8], block_size: usize) -> Result<f64, ComplexityError> {
    if block_size == 0 || block_size > s.len() {
        return Err(ComplexityError::InvalidBlockSize {
            block_size,
            len: s.len(),
        });
    }

    let window_count = s.len() - block_size + 1;
    let mut counts: HashMap<&[u8], usize> = HashMap::new();
    for window in s.windows(block_size) {
        *counts.entry(window).or_insert(0) += 1;
    }

    let total = window_count as f64;
    let entropy = counts
        .values()
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum();

    Ok(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_block_size_zero() {
        assert!(matches!(
            block_entropy(b"abc", 0),
            Err(ComplexityError::InvalidBlockSize { .. })
        ));
    }

    #[test]
    fn rejects_block_size_larger_than_input() {
        assert!(matches!(
            block_entropy(b"ab", 5),
            Err(ComplexityError::InvalidBlockSize { .. })
        ));
    }

    #[test]
    fn constant_string_has_zero_entropy() {
        let e = block_entropy(&vec![b'a'; 20], 3).unwrap();
        assert!(e.abs() < 1e-9);
    }

    #[test]
    fn uniform_alternation_has_one_bit_entropy() {
        // Windows of size 1 over "0101..." are exactly half '0', half '1'.
        let s = b"0101010101";
        let e = block_entropy(s, 1).unwrap();
        assert!((e - 1.0).abs() < 1e-9);
    }

    #[test]
    fn whole_string_block_has_zero_entropy() {
        let e = block_entropy(b"abcdef", 6).unwrap();
        assert!(e.abs() < 1e-9);
    }
}
