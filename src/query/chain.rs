use crate::query::get_inner;
use crate::types::Error;
use std::iter::FusedIterator;

/// Iterator over an error and its causes, outermost first.
///
/// Created by [`chain`](crate::chain). Cycles are not detected; a chain that
/// refers back to itself never ends.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<'a> {
    next: Option<&'a Error>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub(crate) fn new(err: &'a Error) -> Self {
        Self { next: Some(err) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = get_inner(current);
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}
