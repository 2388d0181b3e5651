/// Direct (non-suffix-tree) LZ76 phrase counter (component C4).
///
/// Straightforward port of the textbook "parsed + current_word[:-1]" search:
/// after appending a new character to the in-progress word `w`, look for `w`
/// as a substring of `parsed · w[:-1]`. This is the O(n^2)-ish fallback used
/// for short strings or as a correctness oracle against the suffix-tree path
/// (see cross-path consistency); it does no incremental bookkeeping beyond a
/// growing `parsed` buffer.
pub fn lz76_direct_phrase_count(s: &[u8]) -> usize {
    if s.is_empty() {
        return 0;
    }

    let mut parsed: Vec<u8> = Vec::with_capacity(s.len());
    let mut current_word: Vec<u8> = Vec::new();
    let mut dictionary_size = 0usize;

    for &c in s {
        current_word.push(c);
        let l = current_word.len();

        // haystack = parsed followed by current_word minus its last symbol.
        let mut haystack = Vec::with_capacity(parsed.len() + l - 1);
        haystack.extend_from_slice(&parsed);
        haystack.extend_from_slice(&current_word[..l - 1]);

        let included = haystack
            .windows(l)
            .any(|window| window == current_word.as_slice());

        if !included {
            dictionary_size += 1;
            parsed.extend_from_slice(&current_word);
            current_word.clear();
        }
    }

    if !current_word.is_empty() {
        dictionary_size += 1;
    }

    dictionary_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_zero_phrases() {
        assert_eq!(lz76_direct_phrase_count(b""), 0);
    }

    #[test]
    fn single_symbol_has_one_phrase() {
        assert_eq!(lz76_direct_phrase_count(b"a"), 1);
    }

    #[test]
    fn classic_alternating_string() {
        assert_eq!(lz76_direct_phrase_count(b"0101010101"), 3);
    }

    #[test]
    fn all_same_symbol() {
        // "aaaa...": phrase 1 is "a"; every following 'a' trivially
        // extends phrase 2 since the window being matched against is
        // always a single repeated symbol, so the whole remainder
        // collapses into one final phrase.
        assert_eq!(lz76_direct_phrase_count(&vec![b'a'; 10]), 2);
    }

    #[test]
    fn agrees_with_suffix_tree_path_on_random_strings() {
        use rand::Rng;
        use rand::SeedableRng;

        let alphabet = [b'0', b'1'];
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x9E37_79B9_7F4A_7C15);
        for _ in 0..20 {
            let len = 1 + rng.gen_range(0..40);
            let s: Vec<u8> = (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();
            let direct = lz76_direct_phrase_count(&s);
            let suffix = crate::lz76_suffix::lz76_suffix_phrase_count(&s).unwrap();
            assert_eq!(direct, suffix, "mismatch on {:?}", s);
        }
    }
}
