//! Generated values

use crate::types::TypeRef;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A generated value
///
/// Objects are reference-counted: cloning a [`Specimen::Object`] yields
/// the same instance, which is what frozen values rely on.
#[derive(Debug, Clone, PartialEq)]
pub enum Specimen {
    /// Integer
    Int(i64),

    /// String
    Text(String),

    /// Boolean
    Bool(bool),

    /// Array of specimens
    Array {
        /// Element type
        element: TypeRef,
        /// Items in generation order
        items: Arc<[Specimen]>,
    },

    /// Constructed object
    Object(Arc<Instance>),
}

impl Specimen {
    /// Check reference identity for objects and arrays, value equality
    /// for primitives
    #[must_use]
    pub fn same_instance(&self, other: &Specimen) -> bool {
        match (self, other) {
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Array { items: a, .. }, Self::Array { items: b, .. }) => Arc::ptr_eq(a, b),
            (a, b) => a == b,
        }
    }

    /// Object instance, if this is an object
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Arc<Instance>> {
        match self {
            Self::Object(instance) => Some(instance),
            _ => None,
        }
    }

    /// Integer value
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// String value
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Array items
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Specimen]> {
        match self {
            Self::Array { items, .. } => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Specimen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Array { element, .. } => write!(f, "{element}[]"),
            Self::Object(instance) => write!(f, "{}", instance.ty()),
        }
    }
}

/// Constructed object: its type, constructor arguments and assigned members
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    ty: TypeRef,
    arguments: IndexMap<String, Specimen>,
    properties: IndexMap<String, Specimen>,
    fields: IndexMap<String, Specimen>,
}

impl Instance {
    /// Create instance from resolved parts
    #[must_use]
    pub fn new(
        ty: &TypeRef,
        arguments: IndexMap<String, Specimen>,
        properties: IndexMap<String, Specimen>,
        fields: IndexMap<String, Specimen>,
    ) -> Self {
        Self {
            ty: ty.clone(),
            arguments,
            properties,
            fields,
        }
    }

    /// Runtime type
    #[inline]
    #[must_use]
    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    /// Constructor argument by parameter name
    #[inline]
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&Specimen> {
        self.arguments.get(name)
    }

    /// Constructor arguments in parameter order
    #[inline]
    #[must_use]
    pub fn arguments(&self) -> &IndexMap<String, Specimen> {
        &self.arguments
    }

    /// Property value by name
    #[inline]
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Specimen> {
        self.properties.get(name)
    }

    /// Field value by name
    #[inline]
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Specimen> {
        self.fields.get(name)
    }
}
