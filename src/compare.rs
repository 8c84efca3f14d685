use std::cmp::Ordering;

/// Three-way ordering used by every tree operation.
///
/// A comparator must be a strict total order and the same comparator must be
/// used for every call made against one tree. Closures of the shape
/// `Fn(&T, &T) -> Ordering` implement this trait directly.
///
/// ```rust
/// use std::cmp::Ordering;
/// use avl_rs::Comparator;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
/// ```
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders keys by their [`Ord`] implementation.
///
/// Covers the integer and lexicographic string comparators; `&str` keys
/// compare byte-wise, the same order `strcmp` gives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips any comparator, producing descending trees.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
