//! Product of an iterator's items with overflow checking.

use num_traits::{CheckedMul, One};

/// Iterator extension for multiplying items together without silently overflowing.
pub trait CheckedProduct<T> {
    /// Multiply every item together, returning `None` if any step overflowed.
    ///
    /// An empty iterator has a product of one.
    fn checked_product(self) -> Option<T>;
}

impl<T, I> CheckedProduct<T> for I
where
    T: CheckedMul + One,
    I: Iterator<Item = T>,
{
    fn checked_product(mut self) -> Option<T> {
        self.try_fold(T::one(), |acc, value| acc.checked_mul(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::CheckedProduct;

    #[test]
    fn multiplies_all_items() {
        assert_eq!([4u32, 1, 6].into_iter().checked_product(), Some(24));
    }

    #[test]
    fn empty_product_is_one() {
        assert_eq!(std::iter::empty::<u64>().checked_product(), Some(1));
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!([16u8, 16].into_iter().checked_product(), None);
        assert_eq!([0u8, 200, 200].into_iter().checked_product(), Some(0));
    }
}
