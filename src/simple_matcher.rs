use crate::Matcher;

///
/// Naive matcher : tries every position from left to right.
/// Slow, but obviously correct, useful to cross-check the Boyer-Moore search.
pub struct SimpleMatcher {
    to_match: Vec<u8>,
}
impl SimpleMatcher {
    pub fn new(to_match: &[u8]) -> Self {
        Self {
            to_match: Vec::from(to_match),
        }
    }
}
impl Matcher for SimpleMatcher {
    fn len(&self) -> usize {
        self.to_match.len()
    }
    fn find(&self, haystack: &[u8]) -> Option<usize> {
        if self.to_match.is_empty() {
            return None;
        }
        haystack
            .windows(self.to_match.len())
            .position(|window| window == self.to_match.as_slice())
    }
}
