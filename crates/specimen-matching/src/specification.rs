//! Request specification algebra
//!
//! [`RequestSpec`] is an immutable predicate tree over [`Request`]. Leaves
//! inspect one facet of a request; `And`/`Or`/`Not` compose them with the
//! usual short-circuit evaluation. Evaluation is pure, so a tree can be
//! shared and evaluated from any number of threads.

use crate::criterion::{Criterion, DerivesFrom, IgnoreCase};
use specimen_kernel::{Request, TypeRef};

/// Type and name test for parameter, property and field requests
///
/// The member's declared type must be assignable to the reference type,
/// and its name must equal the reference name ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAndName {
    ty: Criterion<TypeRef, DerivesFrom>,
    name: Criterion<String, IgnoreCase>,
}

impl TypeAndName {
    /// Create criterion for `ty` and `name`
    #[inline]
    #[must_use]
    pub fn new(ty: &TypeRef, name: impl Into<String>) -> Self {
        Self {
            ty: Criterion::new(ty.clone(), DerivesFrom),
            name: Criterion::new(name.into(), IgnoreCase),
        }
    }

    /// Test a member's type and name
    #[inline]
    #[must_use]
    pub fn matches(&self, ty: &TypeRef, name: &str) -> bool {
        self.ty.matches(Some(ty)) && self.name.matches(Some(name))
    }
}

/// Predicate over generation requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestSpec {
    /// Always satisfied
    True,

    /// Never satisfied
    False,

    /// Request equals the given request
    Equal(Request),

    /// Type request for exactly this type
    ExactType(TypeRef),

    /// Seeded request for exactly this type
    Seed(TypeRef),

    /// Type request for this type or its direct base class
    ///
    /// Matches the type itself too; compose with `Not(ExactType)` to keep
    /// only the base.
    DirectBaseType(TypeRef),

    /// Type request for this type or an interface it implements
    ///
    /// Matches the type itself too; compose with `Not(ExactType)` to keep
    /// only the interfaces.
    ImplementedInterface(TypeRef),

    /// Parameter request whose type and name match
    Parameter(TypeAndName),

    /// Property request whose type and name match
    Property(TypeAndName),

    /// Field request whose type and name match
    Field(TypeAndName),

    /// Every child is satisfied (true when empty)
    And(Vec<RequestSpec>),

    /// Some child is satisfied (false when empty)
    Or(Vec<RequestSpec>),

    /// Child is not satisfied
    Not(Box<RequestSpec>),
}

impl RequestSpec {
    /// Evaluate against a request
    #[must_use]
    pub fn is_satisfied_by(&self, request: &Request) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Equal(expected) => request == expected,
            Self::ExactType(target) => matches!(request, Request::Type(ty) if ty == target),
            Self::Seed(target) => matches!(request, Request::Seeded { ty, .. } if ty == target),
            Self::DirectBaseType(target) => match request {
                Request::Type(ty) => ty == target || target.base() == Some(ty),
                _ => false,
            },
            Self::ImplementedInterface(target) => match request {
                Request::Type(ty) => ty == target || target.implements(ty),
                _ => false,
            },
            Self::Parameter(criterion) => match request {
                Request::Parameter(p) => criterion.matches(p.ty(), p.name()),
                _ => false,
            },
            Self::Property(criterion) => match request {
                Request::Property(m) => criterion.matches(m.ty(), m.name()),
                _ => false,
            },
            Self::Field(criterion) => match request {
                Request::Field(m) => criterion.matches(m.ty(), m.name()),
                _ => false,
            },
            Self::And(children) => children.iter().all(|c| c.is_satisfied_by(request)),
            Self::Or(children) => children.iter().any(|c| c.is_satisfied_by(request)),
            Self::Not(inner) => !inner.is_satisfied_by(request),
        }
    }

    /// Conjunction of two specifications
    #[must_use]
    pub fn and(self, other: RequestSpec) -> Self {
        match self {
            Self::And(mut children) => {
                children.push(other);
                Self::And(children)
            }
            first => Self::And(vec![first, other]),
        }
    }

    /// Disjunction of two specifications
    #[must_use]
    pub fn or(self, other: RequestSpec) -> Self {
        match self {
            Self::Or(mut children) => {
                children.push(other);
                Self::Or(children)
            }
            first => Self::Or(vec![first, other]),
        }
    }

    /// Count of nodes in the tree
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::And(children) | Self::Or(children) => {
                1 + children.iter().map(RequestSpec::node_count).sum::<usize>()
            }
            Self::Not(inner) => 1 + inner.node_count(),
            _ => 1,
        }
    }
}

impl std::ops::Not for RequestSpec {
    type Output = Self;

    fn not(self) -> Self {
        Self::Not(Box::new(self))
    }
}
