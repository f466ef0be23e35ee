/*
 * Created on Wed Feb 21 2024
 *
 * This file is a part of Skymap
 * Skymap is a free and open-source ordered indexed map library written by
 * Sayan Nandan ("the Author") with the vision to provide a positionally
 * addressable associative container without compromising on correctness
 * or performance.
 *
 * Copyright (c) 2024, Sayan Nandan <ohsayan@outlook.com>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 *
*/

//! Total-order comparator capability and combinators. The contract checks that a dynamically
//! typed host would do at run time (null operands, non-comparable operands, asymmetric
//! comparisons) are all pushed into the type system here: operands are never null, the
//! [`Natural`] comparator demands `Ord`, and [`Reversed`] flips orderings by construction

use core::cmp::Ordering;

/// A total-order comparison capability over `T`
pub trait Comparator<T: ?Sized> {
    /// Compare the two operands
    fn compare(&self, a: &T, b: &T) -> Ordering;
    /// Returns this comparator with its ordering flipped
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }
    /// Returns a comparator that breaks this comparator's ties with `other`
    fn then<C: Comparator<T>>(self, other: C) -> Chained<Self, C>
    where
        Self: Sized,
    {
        Chained(self, other)
    }
}

/// Every closure of the right shape is a comparator
impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The natural ordering of the type itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the ordering of the inner comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(C);

impl<C> Reversed<C> {
    pub fn new(c: C) -> Self {
        Self(c)
    }
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}

/// Compares with the first comparator, falling back to the second on ties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chained<A, B>(A, B);

impl<A, B> Chained<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self(a, b)
    }
}

impl<T: ?Sized, A: Comparator<T>, B: Comparator<T>> Comparator<T> for Chained<A, B> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).then_with(|| self.1.compare(a, b))
    }
}

/// Lifts a comparator over `T` to `Option<T>`, placing `None` before every `Some`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullsFirst<C>(C);

impl<C> NullsFirst<C> {
    pub fn new(c: C) -> Self {
        Self(c)
    }
}

impl<T, C: Comparator<T>> Comparator<Option<T>> for NullsFirst<C> {
    fn compare(&self, a: &Option<T>, b: &Option<T>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.0.compare(a, b),
        }
    }
}

/// Lifts a comparator over `T` to `Option<T>`, placing `None` after every `Some`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullsLast<C>(C);

impl<C> NullsLast<C> {
    pub fn new(c: C) -> Self {
        Self(c)
    }
}

impl<T, C: Comparator<T>> Comparator<Option<T>> for NullsLast<C> {
    fn compare(&self, a: &Option<T>, b: &Option<T>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => self.0.compare(a, b),
        }
    }
}

/// Compares the outputs of a pure transform instead of the operands themselves
#[derive(Debug, Clone, Copy)]
pub struct Transformed<F, C> {
    f: F,
    c: C,
}

impl<F, C> Transformed<F, C> {
    pub fn new(f: F, c: C) -> Self {
        Self { f, c }
    }
}

impl<T: ?Sized, U, F: Fn(&T) -> U, C: Comparator<U>> Comparator<T> for Transformed<F, C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.c.compare(&(self.f)(a), &(self.f)(b))
    }
}

/// Returns the lesser of the two operands under the comparator; the second wins a tie
pub fn min<T, C: Comparator<T>>(a: T, b: T, c: &C) -> T {
    if c.compare(&a, &b) == Ordering::Less {
        a
    } else {
        b
    }
}

/// Returns the greater of the two operands under the comparator; the second wins a tie
pub fn max<T, C: Comparator<T>>(a: T, b: T, c: &C) -> T {
    if c.compare(&a, &b) == Ordering::Greater {
        a
    } else {
        b
    }
}
