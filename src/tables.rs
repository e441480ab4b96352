//! Skip tables of the Boyer-Moore search.
//!
//! Both tables are computed once per pattern and only read afterwards, see
//! [`crate::scanner::search`] for the way they are combined.

/// Number of distinct byte values, so the size of the bad-character table
pub const ALPHABET_LEN: usize = 256;

///
/// Bad-character table (delta1)
///
/// `table[c]` is the distance between the last byte of `pattern` and the
/// rightmost occurrence of `c` in `pattern[..len - 1]`, or `len` if `c` does not
/// occur there. On a mismatch against text byte `c`, the pattern can be shifted
/// by that distance to line `c` up with its rightmost occurrence.
pub fn bad_character_table(pattern: &[u8]) -> [usize; ALPHABET_LEN] {
    let len = pattern.len();
    let mut table = [len; ALPHABET_LEN];
    // The last byte is excluded : its distance would be 0
    for (i, &c) in pattern.iter().enumerate().take(len.saturating_sub(1)) {
        // Later occurrences overwrite earlier ones, so the rightmost wins
        table[c as usize] = len - 1 - i;
    }
    table
}

///
/// Good-suffix table (delta2)
///
/// `table[j]` is the shift to apply when `pattern[j]` mismatches after
/// `pattern[j + 1..]` already matched. Every entry lies in `1..=2 * len - 1`.
///
/// Two passes :
///  1- right to left, the shift that aligns the longest prefix of the pattern
///     which is also a suffix of the already matched part
///  2- left to right, the smaller shift that aligns a reoccurrence of the
///     matched suffix elsewhere in the pattern (preceded by a different byte)
///
/// Example with "ABYXCDEYX" matching "YX" then failing on 'E' : no prefix
/// of the pattern lies in "YX", so the first pass alone shifts past the whole
/// pattern, but "YX" also occurs at index 2, which the second pass catches.
pub fn good_suffix_table(pattern: &[u8]) -> Vec<usize> {
    let len = pattern.len();
    let mut table = vec![0usize; len];
    if len == 0 {
        return table;
    }

    // First pass
    let mut last_prefix_index = len - 1;
    for p in (0..len).rev() {
        if is_prefix(pattern, p + 1) {
            last_prefix_index = p + 1;
        }
        table[p] = last_prefix_index + (len - 1 - p);
    }

    // Second pass, the last position is excluded
    for p in 0..len - 1 {
        let suffix_len = suffix_length(pattern, p);
        if pattern[p - suffix_len] != pattern[len - 1 - suffix_len] {
            table[len - 1 - suffix_len] = len - 1 - p + suffix_len;
        }
    }

    table
}

///
/// True if the suffix of `word` starting at `pos` is also a prefix of `word`
/// (an empty suffix always is)
fn is_prefix(word: &[u8], pos: usize) -> bool {
    word.starts_with(&word[pos..])
}

///
/// Length of the longest suffix of `word[..=pos]` which is also a suffix of `word`.
/// Stops at the first mismatch or when the start of `word` is reached.
fn suffix_length(word: &[u8], pos: usize) -> usize {
    let last = word.len() - 1;
    let mut i = 0;
    while i < pos && word[pos - i] == word[last - i] {
        i += 1;
    }
    i
}
