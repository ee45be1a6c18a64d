//! Generation requests
//!
//! A [`Request`] describes what is being asked for. The engine issues
//! nested requests while it resolves (parameter -> seeded type -> type),
//! and every stage of the customization chain gets to inspect each one.

use crate::types::{MemberInfo, ParameterInfo, TypeRef};
use std::fmt;

/// Immutable description of a requested specimen
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Request {
    /// Any value of the type
    Type(TypeRef),

    /// Value of the type, seeded with a hint (usually a member name)
    Seeded {
        /// Requested type
        ty: TypeRef,
        /// Seed hint
        seed: String,
    },

    /// Argument for a method or constructor parameter
    Parameter(ParameterInfo),

    /// Value for a writable property
    Property(MemberInfo),

    /// Value for a public field
    Field(MemberInfo),
}

impl Request {
    /// Create type request
    #[inline]
    #[must_use]
    pub fn of_type(ty: &TypeRef) -> Self {
        Self::Type(ty.clone())
    }

    /// Create seeded request
    #[inline]
    #[must_use]
    pub fn seeded(ty: &TypeRef, seed: impl Into<String>) -> Self {
        Self::Seeded {
            ty: ty.clone(),
            seed: seed.into(),
        }
    }

    /// Type this request ultimately asks for
    #[must_use]
    pub fn target_type(&self) -> &TypeRef {
        match self {
            Self::Type(ty) | Self::Seeded { ty, .. } => ty,
            Self::Parameter(p) => p.ty(),
            Self::Property(m) | Self::Field(m) => m.ty(),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(ty) => write!(f, "type {ty}"),
            Self::Seeded { ty, seed } => write!(f, "seeded {ty} ({seed})"),
            Self::Parameter(p) => write!(f, "parameter {p}"),
            Self::Property(m) => write!(f, "property {m}"),
            Self::Field(m) => write!(f, "field {m}"),
        }
    }
}
