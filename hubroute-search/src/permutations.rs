//! Iterative permutation generation.

/// Every ordering of a set of items, produced by Heap's algorithm.
///
/// The generator swaps items in place and lends out each ordering, so one
/// buffer serves the whole enumeration. An empty set has exactly one
/// ordering, the empty one.
///
/// # Examples
/// ```
/// use hubroute_search::Permutations;
///
/// let mut perms = Permutations::new(vec!['a', 'b', 'c']);
/// let mut seen = Vec::new();
/// while let Some(perm) = perms.next_permutation() {
///     seen.push(perm.iter().collect::<String>());
/// }
/// seen.sort();
/// assert_eq!(seen, ["abc", "acb", "bac", "bca", "cab", "cba"]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    cursor: usize,
    started: bool,
}

impl<T> Permutations<T> {
    /// Prepare to enumerate every ordering of `items`.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        let counters = vec![0; items.len()];
        Self {
            items,
            counters,
            cursor: 1,
            started: false,
        }
    }

    /// Advance to the next ordering, or `None` once every ordering was seen.
    pub fn next_permutation(&mut self) -> Option<&[T]> {
        if !self.started {
            self.started = true;
            return Some(&self.items);
        }
        while self.cursor < self.items.len() {
            let cursor = self.cursor;
            let counter = self.counters.get_mut(cursor)?;
            if *counter < cursor {
                let other = if cursor.is_multiple_of(2) { 0 } else { *counter };
                *counter += 1;
                self.items.swap(other, cursor);
                self.cursor = 1;
                return Some(&self.items);
            }
            *counter = 0;
            self.cursor += 1;
        }
        None
    }
}
