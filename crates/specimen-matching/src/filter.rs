//! Flag-driven freeze filters
//!
//! [`FilterBuilder`] turns a [`Matching`] flag set and a target parameter
//! into one [`RequestSpec`]:
//!
//! ```text
//! Equal(target)
//!   OR ExactType(ty) OR Seed(ty)               if EXACT_TYPE
//!   OR NOT ExactType(ty) AND DirectBase(ty)    if DIRECT_BASE_TYPE
//!   OR NOT ExactType(ty) AND Interfaces(ty)    if IMPLEMENTED_INTERFACES
//!   OR Parameter(ty, name)                     if PARAMETER_NAME
//!   OR Property(ty, name)                      if PROPERTY_NAME
//!   OR Field(ty, name)                         if FIELD_NAME
//! ```
//!
//! Disabled criteria contribute [`RequestSpec::False`].

use crate::specification::{RequestSpec, TypeAndName};
use serde::{Deserialize, Serialize};
use specimen_kernel::{ParameterInfo, Request, TypeRef};

bitflags::bitflags! {
    /// Criteria deciding which requests a frozen value satisfies
    ///
    /// Enabled criteria are OR-ed together.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Matching: u32 {
        /// Requests for exactly the frozen type
        const EXACT_TYPE = 1;
        /// Requests for the direct base class of the frozen type
        const DIRECT_BASE_TYPE = 1 << 1;
        /// Requests for interfaces the frozen type implements
        const IMPLEMENTED_INTERFACES = 1 << 2;
        /// Parameters with a compatible type and the same name
        const PARAMETER_NAME = 1 << 3;
        /// Properties with a compatible type and the same name
        const PROPERTY_NAME = 1 << 4;
        /// Fields with a compatible type and the same name
        const FIELD_NAME = 1 << 5;
    }
}

impl Default for Matching {
    fn default() -> Self {
        Self::EXACT_TYPE
    }
}

type LeafFactory = fn(&TypeRef, &str) -> RequestSpec;

/// Criterion table, in composition order
const CRITERIA: [(Matching, LeafFactory); 6] = [
    (Matching::EXACT_TYPE, by_exact_type),
    (Matching::DIRECT_BASE_TYPE, by_base_type),
    (Matching::IMPLEMENTED_INTERFACES, by_implemented_interfaces),
    (Matching::PARAMETER_NAME, by_parameter_name),
    (Matching::PROPERTY_NAME, by_property_name),
    (Matching::FIELD_NAME, by_field_name),
];

fn by_exact_type(ty: &TypeRef, _name: &str) -> RequestSpec {
    RequestSpec::Or(vec![
        RequestSpec::ExactType(ty.clone()),
        RequestSpec::Seed(ty.clone()),
    ])
}

fn by_base_type(ty: &TypeRef, _name: &str) -> RequestSpec {
    RequestSpec::And(vec![
        !RequestSpec::ExactType(ty.clone()),
        RequestSpec::DirectBaseType(ty.clone()),
    ])
}

fn by_implemented_interfaces(ty: &TypeRef, _name: &str) -> RequestSpec {
    RequestSpec::And(vec![
        !RequestSpec::ExactType(ty.clone()),
        RequestSpec::ImplementedInterface(ty.clone()),
    ])
}

fn by_parameter_name(ty: &TypeRef, name: &str) -> RequestSpec {
    RequestSpec::Parameter(TypeAndName::new(ty, name))
}

fn by_property_name(ty: &TypeRef, name: &str) -> RequestSpec {
    RequestSpec::Property(TypeAndName::new(ty, name))
}

fn by_field_name(ty: &TypeRef, name: &str) -> RequestSpec {
    RequestSpec::Field(TypeAndName::new(ty, name))
}

/// Builds the composite freeze predicate for a target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterBuilder {
    by: Matching,
}

impl FilterBuilder {
    /// Create builder for a flag set
    #[inline]
    #[must_use]
    pub fn new(by: Matching) -> Self {
        Self { by }
    }

    /// Flag set in use
    #[inline]
    #[must_use]
    pub fn matching(&self) -> Matching {
        self.by
    }

    /// Build the predicate for `original`, targeting `ty` and `name`
    ///
    /// `original` always matches, whatever the flags.
    #[must_use]
    pub fn build(&self, original: &Request, ty: &TypeRef, name: &str) -> RequestSpec {
        let mut branches = Vec::with_capacity(CRITERIA.len() + 1);
        branches.push(RequestSpec::Equal(original.clone()));
        branches.extend(CRITERIA.iter().map(|(flag, leaf)| {
            if self.by.contains(*flag) {
                leaf(ty, name)
            } else {
                RequestSpec::False
            }
        }));
        RequestSpec::Or(branches)
    }

    /// Build the predicate for a parameter
    #[inline]
    #[must_use]
    pub fn for_parameter(&self, parameter: &ParameterInfo) -> RequestSpec {
        self.build(
            &Request::Parameter(parameter.clone()),
            parameter.ty(),
            parameter.name(),
        )
    }
}
