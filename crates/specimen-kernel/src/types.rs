//! Type model
//!
//! A small, immutable description of the types a test can ask for:
//! primitives, arrays, classes with a single base class, and interfaces.
//! Type identity is the type name. Everything the matching layer needs
//! (direct base, implemented interfaces, assignability) is answered here.

use crate::error::GenerationError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Shape of a type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Signed integer
    Int,

    /// String
    Text,

    /// Boolean
    Bool,

    /// Constructible class
    Class,

    /// Interface (never constructed directly)
    Interface,

    /// Array of the element type
    Array(TypeRef),
}

/// Immutable type definition
#[derive(Debug)]
pub struct TypeInfo {
    name: String,
    kind: TypeKind,
    base: Option<TypeRef>,
    interfaces: Vec<TypeRef>,
    constructors: Vec<Constructor>,
    properties: Vec<MemberInfo>,
    fields: Vec<MemberInfo>,
}

impl TypeInfo {
    /// Start a class definition
    #[inline]
    #[must_use]
    pub fn class(name: impl Into<String>) -> TypeBuilder {
        TypeBuilder::new(name, TypeKind::Class)
    }

    /// Start an interface definition
    #[inline]
    #[must_use]
    pub fn interface(name: impl Into<String>) -> TypeBuilder {
        TypeBuilder::new(name, TypeKind::Interface)
    }

    fn primitive(name: &str, kind: TypeKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            base: None,
            interfaces: Vec::new(),
            constructors: Vec::new(),
            properties: Vec::new(),
            fields: Vec::new(),
        }
    }
}

/// Shared handle to a type definition
///
/// Equality and hashing use the type name only.
#[derive(Clone)]
pub struct TypeRef(Arc<TypeInfo>);

impl TypeRef {
    /// Integer type
    #[must_use]
    pub fn int() -> Self {
        Self(Arc::new(TypeInfo::primitive("int", TypeKind::Int)))
    }

    /// String type
    #[must_use]
    pub fn text() -> Self {
        Self(Arc::new(TypeInfo::primitive("string", TypeKind::Text)))
    }

    /// Boolean type
    #[must_use]
    pub fn boolean() -> Self {
        Self(Arc::new(TypeInfo::primitive("bool", TypeKind::Bool)))
    }

    /// Array type with the given element type
    #[must_use]
    pub fn array_of(element: &TypeRef) -> Self {
        let name = format!("{}[]", element.name());
        Self(Arc::new(TypeInfo::primitive(
            &name,
            TypeKind::Array(element.clone()),
        )))
    }

    /// Type name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Type shape
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &TypeKind {
        &self.0.kind
    }

    /// Direct base class, if any
    #[inline]
    #[must_use]
    pub fn base(&self) -> Option<&TypeRef> {
        self.0.base.as_ref()
    }

    /// Directly declared interfaces
    #[inline]
    #[must_use]
    pub fn interfaces(&self) -> &[TypeRef] {
        &self.0.interfaces
    }

    /// Declared constructors, in declaration order
    #[inline]
    #[must_use]
    pub fn constructors(&self) -> &[Constructor] {
        &self.0.constructors
    }

    /// Declared properties (not inherited)
    #[inline]
    #[must_use]
    pub fn properties(&self) -> &[MemberInfo] {
        &self.0.properties
    }

    /// Declared public fields (not inherited)
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[MemberInfo] {
        &self.0.fields
    }

    /// Check if this is an interface
    #[inline]
    #[must_use]
    pub fn is_interface(&self) -> bool {
        matches!(self.kind(), TypeKind::Interface)
    }

    /// Element type for arrays
    #[inline]
    #[must_use]
    pub fn element(&self) -> Option<&TypeRef> {
        match self.kind() {
            TypeKind::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Base chain, nearest first
    pub fn ancestors(&self) -> impl Iterator<Item = TypeRef> {
        std::iter::successors(self.base().cloned(), |t| t.base().cloned())
    }

    /// Every interface implemented by this type, its ancestors and
    /// the interfaces they extend
    #[must_use]
    pub fn all_interfaces(&self) -> Vec<TypeRef> {
        let mut pending: Vec<TypeRef> = self.interfaces().to_vec();
        for ancestor in self.ancestors() {
            pending.extend(ancestor.interfaces().iter().cloned());
        }

        let mut seen: Vec<TypeRef> = Vec::new();
        while let Some(iface) = pending.pop() {
            if !seen.contains(&iface) {
                pending.extend(iface.interfaces().iter().cloned());
                seen.push(iface);
            }
        }
        seen
    }

    /// Check if this type implements `iface` (directly or inherited)
    #[must_use]
    pub fn implements(&self, iface: &TypeRef) -> bool {
        iface.is_interface() && self.all_interfaces().contains(iface)
    }

    /// Check if a value of `candidate` can be assigned to this type
    #[must_use]
    pub fn is_assignable_from(&self, candidate: &TypeRef) -> bool {
        self == candidate
            || candidate.ancestors().any(|ancestor| &ancestor == self)
            || candidate.implements(self)
    }

    /// Properties including inherited ones, root-most class first
    #[must_use]
    pub fn inherited_properties(&self) -> Vec<MemberInfo> {
        self.collect_members(TypeRef::properties)
    }

    /// Public fields including inherited ones, root-most class first
    #[must_use]
    pub fn inherited_fields(&self) -> Vec<MemberInfo> {
        self.collect_members(TypeRef::fields)
    }

    fn collect_members(&self, select: fn(&TypeRef) -> &[MemberInfo]) -> Vec<MemberInfo> {
        let mut chain: Vec<TypeRef> = self.ancestors().collect();
        chain.reverse();
        chain.push(self.clone());
        chain
            .iter()
            .flat_map(|t| select(t).iter().cloned())
            .collect()
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.name == other.0.name
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({})", self.name())
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Member that declares a parameter list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    /// Named method (test methods included)
    Method {
        /// Declaring type or suite, may be empty
        owner: String,
        /// Method name
        name: String,
    },

    /// Constructor of a type, by declaration index
    Constructor {
        /// Declaring type
        owner: String,
        /// Index among the type's constructors
        index: usize,
    },
}

impl Member {
    /// Create method member
    #[inline]
    #[must_use]
    pub fn method(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Method {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method { owner, name } if owner.is_empty() => f.write_str(name),
            Self::Method { owner, name } => write!(f, "{owner}::{name}"),
            Self::Constructor { owner, index } => write!(f, "{owner}::new#{index}"),
        }
    }
}

/// Parameter descriptor: declaring member, position, name and type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterInfo {
    member: Member,
    position: usize,
    name: String,
    ty: TypeRef,
}

impl ParameterInfo {
    /// Create parameter descriptor
    #[inline]
    #[must_use]
    pub fn new(member: Member, position: usize, name: impl Into<String>, ty: &TypeRef) -> Self {
        Self {
            member,
            position,
            name: name.into(),
            ty: ty.clone(),
        }
    }

    /// Declaring member
    #[inline]
    #[must_use]
    pub fn member(&self) -> &Member {
        &self.member
    }

    /// Zero-based position in the parameter list
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Parameter name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type
    #[inline]
    #[must_use]
    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }
}

impl fmt::Display for ParameterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}: {})", self.member, self.name, self.ty)
    }
}

/// Property or field descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberInfo {
    owner: String,
    name: String,
    ty: TypeRef,
}

impl MemberInfo {
    /// Create member descriptor
    #[inline]
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>, ty: &TypeRef) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            ty: ty.clone(),
        }
    }

    /// Declaring type name
    #[inline]
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Member name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member type
    #[inline]
    #[must_use]
    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }
}

impl fmt::Display for MemberInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {}", self.owner, self.name, self.ty)
    }
}

/// Constructor signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    parameters: Vec<ParameterInfo>,
}

impl Constructor {
    /// Parameters in declaration order
    #[inline]
    #[must_use]
    pub fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }

    /// Number of array-typed parameters
    #[must_use]
    pub fn array_parameter_count(&self) -> usize {
        self.parameters
            .iter()
            .filter(|p| p.ty().element().is_some())
            .count()
    }
}

/// Builder for class and interface definitions
#[derive(Debug)]
pub struct TypeBuilder {
    name: String,
    kind: TypeKind,
    base: Option<TypeRef>,
    interfaces: Vec<TypeRef>,
    constructors: Vec<Vec<(String, TypeRef)>>,
    properties: Vec<(String, TypeRef)>,
    fields: Vec<(String, TypeRef)>,
}

impl TypeBuilder {
    fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            base: None,
            interfaces: Vec::new(),
            constructors: Vec::new(),
            properties: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Set the direct base class
    #[must_use]
    pub fn extends(mut self, base: &TypeRef) -> Self {
        self.base = Some(base.clone());
        self
    }

    /// Declare an implemented (or, for interfaces, extended) interface
    #[must_use]
    pub fn implements(mut self, iface: &TypeRef) -> Self {
        self.interfaces.push(iface.clone());
        self
    }

    /// Declare a constructor
    #[must_use]
    pub fn constructor<'a>(
        mut self,
        parameters: impl IntoIterator<Item = (&'a str, &'a TypeRef)>,
    ) -> Self {
        let parameters = parameters
            .into_iter()
            .map(|(name, ty)| (name.to_string(), ty.clone()))
            .collect();
        self.constructors.push(parameters);
        self
    }

    /// Declare a parameterless constructor
    #[must_use]
    pub fn default_constructor(mut self) -> Self {
        self.constructors.push(Vec::new());
        self
    }

    /// Declare a writable property
    #[must_use]
    pub fn property(mut self, name: &str, ty: &TypeRef) -> Self {
        self.properties.push((name.to_string(), ty.clone()));
        self
    }

    /// Declare a public field
    #[must_use]
    pub fn field(mut self, name: &str, ty: &TypeRef) -> Self {
        self.fields.push((name.to_string(), ty.clone()));
        self
    }

    /// Validate and freeze the definition
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidType`] for an empty name, a
    /// non-class base, a non-interface in the interface list, an interface
    /// declaring constructors, fields or a base, or a constructor with
    /// unnamed or duplicate parameter names.
    pub fn build(self) -> Result<TypeRef, GenerationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(GenerationError::invalid_type(&self.name, "name must not be empty"));
        }

        if let Some(base) = &self.base {
            if self.kind == TypeKind::Interface {
                return Err(GenerationError::invalid_type(
                    &name,
                    "interfaces extend other interfaces through `implements`",
                ));
            }
            if base.kind() != &TypeKind::Class {
                return Err(GenerationError::invalid_type(
                    &name,
                    format!("base type {base} is not a class"),
                ));
            }
        }

        if let Some(iface) = self.interfaces.iter().find(|i| !i.is_interface()) {
            return Err(GenerationError::invalid_type(
                &name,
                format!("{iface} is not an interface"),
            ));
        }

        if self.kind == TypeKind::Interface
            && (!self.constructors.is_empty() || !self.fields.is_empty())
        {
            return Err(GenerationError::invalid_type(
                &name,
                "interfaces cannot declare constructors or fields",
            ));
        }

        let mut constructors = Vec::with_capacity(self.constructors.len());
        for (index, parameters) in self.constructors.into_iter().enumerate() {
            let member = Member::Constructor {
                owner: name.clone(),
                index,
            };
            let mut seen: Vec<&str> = Vec::with_capacity(parameters.len());
            for (param, _) in &parameters {
                if param.trim().is_empty() || seen.contains(&param.as_str()) {
                    return Err(GenerationError::invalid_type(
                        &name,
                        format!("constructor #{index} has an unnamed or duplicate parameter"),
                    ));
                }
                seen.push(param.as_str());
            }
            constructors.push(Constructor {
                parameters: parameters
                    .iter()
                    .enumerate()
                    .map(|(position, (param, ty))| {
                        ParameterInfo::new(member.clone(), position, param.as_str(), ty)
                    })
                    .collect(),
            });
        }

        let members = |declared: Vec<(String, TypeRef)>| -> Vec<MemberInfo> {
            declared
                .iter()
                .map(|(member, ty)| MemberInfo::new(name.as_str(), member.as_str(), ty))
                .collect()
        };
        let properties = members(self.properties);
        let fields = members(self.fields);

        Ok(TypeRef(Arc::new(TypeInfo {
            name,
            kind: self.kind,
            base: self.base,
            interfaces: self.interfaces,
            constructors,
            properties,
            fields,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparable() -> TypeRef {
        TypeInfo::interface("IComparable").build().unwrap()
    }

    #[test]
    fn primitive_identity_is_by_name() {
        assert_eq!(TypeRef::int(), TypeRef::int());
        assert_ne!(TypeRef::int(), TypeRef::text());
        assert_eq!(TypeRef::array_of(&TypeRef::int()).name(), "int[]");
    }

    #[test]
    fn class_is_assignable_to_base_and_interfaces() {
        let iface = comparable();
        let base = TypeInfo::class("Component").implements(&iface).build().unwrap();
        let derived = TypeInfo::class("Widget").extends(&base).build().unwrap();

        assert!(base.is_assignable_from(&derived));
        assert!(iface.is_assignable_from(&derived));
        assert!(derived.is_assignable_from(&derived));
        assert!(!derived.is_assignable_from(&base));
        assert!(derived.implements(&iface));
    }

    #[test]
    fn interface_inheritance_is_transitive() {
        let root = comparable();
        let child = TypeInfo::interface("IOrdered").implements(&root).build().unwrap();
        let class = TypeInfo::class("Ranked").implements(&child).build().unwrap();

        assert!(class.implements(&root));
        assert!(root.is_assignable_from(&child));
    }

    #[test]
    fn ancestors_nearest_first() {
        let a = TypeInfo::class("A").build().unwrap();
        let b = TypeInfo::class("B").extends(&a).build().unwrap();
        let c = TypeInfo::class("C").extends(&b).build().unwrap();

        let chain: Vec<_> = c.ancestors().map(|t| t.name().to_string()).collect();
        assert_eq!(chain, vec!["B", "A"]);
    }

    #[test]
    fn inherited_members_root_first() {
        let int = TypeRef::int();
        let a = TypeInfo::class("A").property("id", &int).build().unwrap();
        let b = TypeInfo::class("B").extends(&a).property("size", &int).build().unwrap();

        let names: Vec<_> = b
            .inherited_properties()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        assert_eq!(names, vec!["id", "size"]);
    }

    #[test]
    fn rejects_empty_name() {
        assert!(TypeInfo::class("  ").build().is_err());
    }

    #[test]
    fn rejects_interface_with_constructor() {
        let int = TypeRef::int();
        let result = TypeInfo::interface("IThing")
            .constructor([("x", &int)])
            .build();
        assert!(matches!(result, Err(GenerationError::InvalidType { .. })));
    }

    #[test]
    fn rejects_class_as_interface() {
        let class = TypeInfo::class("Plain").build().unwrap();
        assert!(TypeInfo::class("Other").implements(&class).build().is_err());
    }

    #[test]
    fn rejects_duplicate_constructor_parameter() {
        let int = TypeRef::int();
        let result = TypeInfo::class("Pair")
            .constructor([("x", &int), ("x", &int)])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn constructor_parameters_carry_member() {
        let int = TypeRef::int();
        let ints = TypeRef::array_of(&int);
        let ty = TypeInfo::class("Bag")
            .constructor([("count", &int), ("items", &ints)])
            .build()
            .unwrap();

        let ctor = &ty.constructors()[0];
        assert_eq!(ctor.array_parameter_count(), 1);
        assert_eq!(ctor.parameters()[1].position(), 1);
        assert_eq!(
            ctor.parameters()[0].member(),
            &Member::Constructor {
                owner: "Bag".into(),
                index: 0
            }
        );
    }
}
