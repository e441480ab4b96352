use crate::match_result::Match;
use crate::Matcher;

///
/// Search session over one buffer : yields the non-overlapping matches, leftmost first.
///
/// After a match at `offset`, the search resumes at `offset + len`, so overlapping
/// occurrences of a periodic pattern are not reported ("AA" in "AAAA" gives 0 and 2).
pub struct FindIter<'m, 'h, M: Matcher> {
    matcher: &'m M,
    haystack: &'h [u8],
    next_pos: usize,
}
impl<'m, 'h, M: Matcher> FindIter<'m, 'h, M> {
    pub fn new(matcher: &'m M, haystack: &'h [u8]) -> Self {
        Self {
            matcher,
            haystack,
            next_pos: 0,
        }
    }
    ///
    /// Restart the session at `pos` : earlier bytes are ignored, offsets stay relative
    /// to the start of the whole buffer
    pub fn starting_at(mut self, pos: usize) -> Self {
        self.next_pos = pos;
        self
    }
    ///
    /// Position where the next search starts
    pub fn position(&self) -> usize {
        self.next_pos
    }
}
impl<'m, 'h, M: Matcher> Iterator for FindIter<'m, 'h, M> {
    type Item = Match;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.haystack.get(self.next_pos..)?;
        match self.matcher.find(remaining) {
            Some(found) => {
                let m = Match::new(self.next_pos + found, self.matcher.len());
                self.next_pos = m.end();
                Some(m)
            }
            None => {
                // Exhausted, further calls don't search again
                self.next_pos = self.haystack.len() + 1;
                None
            }
        }
    }
}
