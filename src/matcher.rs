use crate::find_iter::FindIter;

///
/// A searcher for one fixed pattern
pub trait Matcher {
    ///
    /// Length of the pattern
    fn len(&self) -> usize;
    ///
    /// Offset of the leftmost occurrence of the pattern in `haystack`, `None` if there's none
    fn find(&self, haystack: &[u8]) -> Option<usize>;
    ///
    /// All the non-overlapping occurrences in `haystack`, leftmost first
    fn find_iter<'m, 'h>(&'m self, haystack: &'h [u8]) -> FindIter<'m, 'h, Self>
    where
        Self: Sized,
    {
        FindIter::new(self, haystack)
    }
}
