//! Atomic match tests under a pluggable equivalence

use specimen_kernel::TypeRef;
use std::borrow::Borrow;
use std::fmt;

/// Equivalence relation between a candidate and a reference value
///
/// Absent operands are passed as `None` and must be handled explicitly.
pub trait Equivalence<T: ?Sized>: fmt::Debug + Send + Sync {
    /// Check whether `candidate` is equivalent to `reference`
    fn equivalent(&self, candidate: Option<&T>, reference: Option<&T>) -> bool;
}

/// Plain equality; two absent operands are equal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactEquality;

impl<T: PartialEq + ?Sized> Equivalence<T> for ExactEquality {
    fn equivalent(&self, candidate: Option<&T>, reference: Option<&T>) -> bool {
        candidate == reference
    }
}

/// Case-insensitive name equality
///
/// Characters are folded one at a time; a character whose uppercase form
/// spans several characters (`ß`) is compared as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoreCase;

fn fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl Equivalence<str> for IgnoreCase {
    fn equivalent(&self, candidate: Option<&str>, reference: Option<&str>) -> bool {
        match (candidate, reference) {
            (None, None) => true,
            (Some(a), Some(b)) => a.chars().map(fold).eq(b.chars().map(fold)),
            _ => false,
        }
    }
}

/// Type assignability: the reference type is assignable from the
/// candidate type
///
/// Two absent types are equal; present against absent is unequal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivesFrom;

impl Equivalence<TypeRef> for DerivesFrom {
    fn equivalent(&self, candidate: Option<&TypeRef>, reference: Option<&TypeRef>) -> bool {
        match (candidate, reference) {
            (None, None) => true,
            (Some(candidate), Some(reference)) => reference.is_assignable_from(candidate),
            _ => false,
        }
    }
}

/// Evaluate `candidate` against `reference` under `equivalence`
#[inline]
pub fn matches<T: ?Sized, E: Equivalence<T>>(
    candidate: Option<&T>,
    reference: Option<&T>,
    equivalence: &E,
) -> bool {
    equivalence.equivalent(candidate, reference)
}

/// A reference value paired with the equivalence used to test candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion<T, E> {
    reference: Option<T>,
    equivalence: E,
}

impl<T, E> Criterion<T, E> {
    /// Create criterion with a reference value
    #[inline]
    #[must_use]
    pub fn new(reference: T, equivalence: E) -> Self {
        Self {
            reference: Some(reference),
            equivalence,
        }
    }

    /// Create criterion whose reference is absent
    #[inline]
    #[must_use]
    pub fn absent(equivalence: E) -> Self {
        Self {
            reference: None,
            equivalence,
        }
    }

    /// Reference value
    #[inline]
    #[must_use]
    pub fn reference(&self) -> Option<&T> {
        self.reference.as_ref()
    }

    /// Test a candidate against the reference
    pub fn matches<Q>(&self, candidate: Option<&Q>) -> bool
    where
        Q: ?Sized,
        T: Borrow<Q>,
        E: Equivalence<Q>,
    {
        matches(
            candidate,
            self.reference.as_ref().map(Borrow::borrow),
            &self.equivalence,
        )
    }
}
