//! `sum_by` as an extension trait on slices.
//!
//! Callers opt in with `use crate::services::sum_by_ext::SumBy;`. The method is
//! visible only where the trait is in scope.

use std::iter::Sum;

pub trait SumBy<T> {
    fn sum_by<F>(&self, f: F) -> T
    where
        F: Fn(&T) -> T;
}

impl<T: Sum<T>> SumBy<T> for [T] {
    fn sum_by<F>(&self, f: F) -> T
    where
        F: Fn(&T) -> T,
    {
        self.iter().map(f).sum()
    }
}
