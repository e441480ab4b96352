use std::cmp;

use log::debug;

use crate::pattern::Pattern;
use crate::tables::{bad_character_table, good_suffix_table, ALPHABET_LEN};
use crate::Matcher;

///
/// Boyer-Moore search of `pattern` in `haystack`, using the tables computed from
/// that same pattern. Returns the offset of the leftmost match, or `None`.
///
/// The pattern is compared from its last byte backward. On a mismatch the
/// alignment moves forward by the larger of the two table shifts, so most
/// haystack bytes are never looked at when the pattern is not repetitive.
///
/// An empty pattern never matches.
pub fn search(
    haystack: &[u8],
    pattern: &[u8],
    bad_character: &[usize; ALPHABET_LEN],
    good_suffix: &[usize],
) -> Option<usize> {
    if pattern.is_empty() {
        return None;
    }
    debug_assert_eq!(good_suffix.len(), pattern.len(), "Tables of another pattern");

    let last = pattern.len() - 1;
    // Position in the haystack of the byte compared, starting where the first full match would end
    let mut i = last;
    while i < haystack.len() {
        let mut j = last;
        loop {
            if haystack[i] != pattern[j] {
                break;
            }
            if j == 0 {
                return Some(i);
            }
            i -= 1;
            j -= 1;
        }
        i += cmp::max(bad_character[haystack[i] as usize], good_suffix[j]);
    }
    None
}

///
/// A pattern with its precomputed skip tables, ready to search any number of buffers.
/// Immutable once built, so it can be shared between threads.
pub struct BoyerMoore {
    pattern: Pattern,
    bad_character: [usize; ALPHABET_LEN],
    good_suffix: Vec<usize>,
}
impl BoyerMoore {
    pub fn new(pattern: Pattern) -> Self {
        let bad_character = bad_character_table(&pattern);
        let good_suffix = good_suffix_table(&pattern);
        debug!("Skip tables built for {:?}", pattern);
        Self {
            pattern,
            bad_character,
            good_suffix,
        }
    }
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
    pub fn bad_character(&self) -> &[usize; ALPHABET_LEN] {
        &self.bad_character
    }
    pub fn good_suffix(&self) -> &[usize] {
        &self.good_suffix
    }
}
impl Matcher for BoyerMoore {
    fn len(&self) -> usize {
        self.pattern.len()
    }
    fn find(&self, haystack: &[u8]) -> Option<usize> {
        search(
            haystack,
            &self.pattern,
            &self.bad_character,
            &self.good_suffix,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimpleMatcher;

    fn boyer_moore(pattern: &[u8]) -> BoyerMoore {
        BoyerMoore::new(Pattern::new(pattern).unwrap())
    }

    fn offsets<M: Matcher>(matcher: &M, haystack: &[u8]) -> Vec<usize> {
        matcher.find_iter(haystack).map(|m| m.offset).collect()
    }

    ///
    /// Tiny xorshift generator, enough to sweep many cases deterministically
    struct Rand(u64);
    impl Rand {
        fn next(&mut self) -> u64 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            self.0
        }
        fn below(&mut self, n: usize) -> usize {
            (self.next() % n as u64) as usize
        }
        fn bytes(&mut self, len: usize, alphabet: &[u8]) -> Vec<u8> {
            (0..len)
                .map(|_| alphabet[self.below(alphabet.len())])
                .collect()
        }
    }

    #[test]
    fn test_search_free_function() {
        let pattern = b"AB";
        let bad = bad_character_table(pattern);
        let good = good_suffix_table(pattern);
        assert_eq!(search(b"CABABD", pattern, &bad, &good), Some(1));
        assert_eq!(search(b"ABD", pattern, &bad, &good), Some(0));
        assert_eq!(search(b"CAB", pattern, &bad, &good), Some(1));
        assert_eq!(search(b"BA", pattern, &bad, &good), None);
    }

    #[test]
    fn test_successive_matches() {
        let bm = boyer_moore(b"AB");
        let haystack = b"CABABD";
        assert_eq!(bm.find(haystack), Some(1), "Case 1");
        assert_eq!(bm.find(&haystack[3..]), Some(0), "Case 2");
        assert_eq!(bm.find(&haystack[5..]), None, "Case 3");
        assert_eq!(offsets(&bm, haystack), vec![1, 3]);
    }

    #[test]
    fn test_non_overlapping() {
        assert_eq!(offsets(&boyer_moore(b"AA"), b"AAAA"), vec![0, 2]);
    }

    #[test]
    fn test_not_found() {
        let bm = boyer_moore(b"needle");
        assert_eq!(bm.find(b""), None, "Empty buffer");
        assert_eq!(bm.find(b"needl"), None, "Pattern longer than buffer");
        assert_eq!(bm.find(b"haystack without it"), None);
        assert_eq!(search(b"abc", b"", &[0; ALPHABET_LEN], &[]), None, "Empty pattern");
    }

    #[test]
    fn test_whole_buffer() {
        assert_eq!(boyer_moore(b"needle").find(b"needle"), Some(0));
    }

    #[test]
    fn test_binary_bytes() {
        let bm = boyer_moore(&[0x00, 0xff, 0x00]);
        let haystack = [0xff, 0x00, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00];
        assert_eq!(offsets(&bm, &haystack), vec![2, 6]);
    }

    #[test]
    fn test_repeated_bytes() {
        // n identical bytes in n + k identical bytes : (n + k) / n matches
        for n in 1..12 {
            let bm = boyer_moore(&vec![0x41; n]);
            assert_eq!(offsets(&bm, &vec![0x41; n]), vec![0], "Exact n={n}");
            for k in 0..30 {
                let found = offsets(&bm, &vec![0x41; n + k]);
                let expected: Vec<usize> = (0..(n + k) / n).map(|m| m * n).collect();
                assert_eq!(found, expected, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn test_match_is_pattern() {
        let mut rand = Rand(0x9e37_79b9_7f4a_7c15);
        for _ in 0..2000 {
            let pattern_len = 1 + rand.below(6);
            let pattern = rand.bytes(pattern_len, b"ab");
            let haystack_len = rand.below(64);
            let haystack = rand.bytes(haystack_len, b"abc");
            let bm = boyer_moore(&pattern);
            if let Some(offset) = bm.find(&haystack) {
                assert_eq!(&haystack[offset..offset + pattern.len()], pattern.as_slice());
            }
        }
    }

    #[test]
    fn test_agrees_with_naive_search() {
        let mut rand = Rand(0x2545_f491_4f6c_dd1d);
        for alphabet in [&b"ab"[..], &b"abc"[..], &b"\x00\x01\xff\x80"[..]] {
            for _ in 0..3000 {
                let pattern_len = 1 + rand.below(8);
                let pattern = rand.bytes(pattern_len, alphabet);
                let haystack_len = rand.below(100);
                let haystack = rand.bytes(haystack_len, alphabet);

                let bm = boyer_moore(&pattern);
                let naive = SimpleMatcher::new(&pattern);
                assert_eq!(
                    bm.find(&haystack),
                    naive.find(&haystack),
                    "First match of {pattern:?} in {haystack:?}"
                );
                assert_eq!(
                    offsets(&bm, &haystack),
                    offsets(&naive, &haystack),
                    "All matches of {pattern:?} in {haystack:?}"
                );
            }
        }
    }

    #[test]
    fn test_shared_between_threads() {
        let bm = boyer_moore(b"\xca\xfe");
        let mut haystack = vec![0u8; 4096];
        for offset in (0..4096).step_by(512) {
            haystack[offset] = 0xca;
            haystack[offset + 1] = 0xfe;
        }
        std::thread::scope(|scope| {
            let handles: Vec<_> = haystack
                .chunks(1024)
                .map(|chunk| {
                    let bm = &bm;
                    scope.spawn(move || offsets(bm, chunk))
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), vec![0, 512]);
            }
        });
    }
}
