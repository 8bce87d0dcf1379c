//! A small list wrapper whose reductions are parameterized by a caller-supplied
//! transformation.
//!
//! The same `sum_by` is offered three ways: a generic closure parameter, a
//! closure passed as a trait object, and an optional closure that falls back to
//! summing the raw elements.

use std::iter::Sum;

#[derive(Debug, Clone, PartialEq)]
pub struct MyList<T> {
    items: Vec<T>,
}

impl<T: Copy + Sum<T>> MyList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn sum_by<F>(&self, f: F) -> T
    where
        F: Fn(T) -> T,
    {
        self.items.iter().copied().map(f).sum()
    }

    pub fn sum_by_block(&self, block: &dyn Fn(T) -> T) -> T {
        self.items.iter().map(|&el| block(el)).sum()
    }

    pub fn sum_by_optional<F>(&self, block: Option<F>) -> T
    where
        F: Fn(T) -> T,
    {
        match block {
            Some(f) => self.sum_by(f),
            None => self.items.iter().copied().sum(),
        }
    }
}

impl MyList<i64> {
    pub fn odds(&self) -> MyList<i64> {
        MyList::new(self.items.iter().copied().filter(|n| n % 2 != 0).collect())
    }

    /// Forwards the caller's closure unchanged to `sum_by`.
    pub fn sum_odds_by<F>(&self, f: F) -> i64
    where
        F: Fn(i64) -> i64,
    {
        self.odds().sum_by(f)
    }
}

pub fn square(x: i64) -> i64 {
    x * x
}

pub fn cube(x: i64) -> i64 {
    x * x * x
}
