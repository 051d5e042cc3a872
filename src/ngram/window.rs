use std::collections::VecDeque;

/// Iterator over overlapping fixed-length windows of another iterator
///
/// Unlike `slice::windows`, this works on any iterator, so a line can be
/// windowed by `char` without first collecting it.
pub struct SlidingWindow<I: Iterator> {
    iter: I,
    window: VecDeque<I::Item>,
    size: usize,
}

/// Overlapping windows of `size` items
///
/// The first window is produced once `size` items have been seen, so an input
/// shorter than `size` (or `size == 0`) produces nothing. The buffer grows with
/// the input, never with `size`.
///
/// # Example
/// ```
/// use cryptogram::ngram::sliding_window;
///
/// let windows: Vec<String> = sliding_window("ABCDEFG".chars(), 4)
///     .map(|w| w.into_iter().collect())
///     .collect();
/// assert_eq!(windows, ["ABCD", "BCDE", "CDEF", "DEFG"]);
/// ```
pub fn sliding_window<I>(iter: I, size: usize) -> SlidingWindow<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    SlidingWindow {
        iter: iter.into_iter(),
        window: VecDeque::new(),
        size,
    }
}

impl<I> Iterator for SlidingWindow<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 {
            return None;
        }

        loop {
            let item = self.iter.next()?;
            if self.window.len() == self.size {
                self.window.pop_front();
            }
            self.window.push_back(item);

            if self.window.len() == self.size {
                return Some(self.window.iter().cloned().collect());
            }
        }
    }
}
