use crate::error::MinigradError;
use num_traits::{Float, Zero};

/// Lazily applies `f` to every element of `xs`.
pub fn map<I, F, U>(xs: I, f: F) -> impl Iterator<Item = U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    xs.into_iter().map(f)
}

/// Iterator returned by [`zip_with`].
#[derive(Debug, Clone)]
pub struct ZipWith<A, B, F> {
    xs: A,
    ys: B,
    f: F,
    index: usize,
    exhausted: bool,
}

impl<A, B, F, U> Iterator for ZipWith<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: FnMut(A::Item, B::Item) -> U,
{
    type Item = Result<U, MinigradError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let x = self.xs.next()?;
        match self.ys.next() {
            Some(y) => {
                self.index += 1;
                Some(Ok((self.f)(x, y)))
            }
            None => {
                self.exhausted = true;
                Some(Err(MinigradError::SequenceExhausted { index: self.index }))
            }
        }
    }
}

/// Lazily combines `xs` and `ys` element-wise with `f`.
///
/// Yields one item per element of `xs`. If `ys` runs out first, the next item is
/// a `SequenceExhausted` error and iteration ends there. Extra `ys` are ignored.
pub fn zip_with<A, B, F, U>(xs: A, ys: B, f: F) -> ZipWith<A::IntoIter, B::IntoIter, F>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> U,
{
    ZipWith {
        xs: xs.into_iter(),
        ys: ys.into_iter(),
        f,
        index: 0,
        exhausted: false,
    }
}

/// Left fold of `xs` with `f`, seeded by the first element.
///
/// An empty sequence reduces to zero whatever `f` is, which is only the right
/// identity for additive folds.
pub fn reduce<I, F, T>(xs: I, mut f: F) -> T
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> T,
    T: Zero,
{
    let mut iter = xs.into_iter();
    match iter.next() {
        Some(first) => iter.fold(first, |acc, x| f(acc, x)),
        None => T::zero(),
    }
}

pub fn neg_list<T: Float>(xs: &[T]) -> Vec<T> {
    map(xs.iter().copied(), |x| -x).collect()
}

/// Element-wise sum of two lists; `ys` must be at least as long as `xs`.
pub fn add_lists<T: Float>(xs: &[T], ys: &[T]) -> Result<Vec<T>, MinigradError> {
    zip_with(xs.iter().copied(), ys.iter().copied(), |x, y| x + y).collect()
}

pub fn sum<T: Float>(xs: &[T]) -> T {
    reduce(xs.iter().copied(), |acc, x| acc + x)
}

/// Product of all elements. Note that an empty list gives zero, not one.
pub fn prod<T: Float>(xs: &[T]) -> T {
    reduce(xs.iter().copied(), |acc, x| acc * x)
}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod tests;
