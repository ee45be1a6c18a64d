//! Constructor selection and invocation

use crate::error::GenerationError;
use crate::fixture::Pipeline;
use crate::request::Request;
use crate::specimen::{Instance, Specimen};
use crate::types::{Constructor, MemberInfo, TypeRef};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Orders the constructors of a type by preference
pub trait ConstructorQuery: Send + Sync + fmt::Debug {
    /// Candidate constructors, most preferred first
    fn select<'t>(&self, ty: &'t TypeRef) -> Vec<&'t Constructor>;
}

/// Prefers the constructor with the fewest parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModestConstructorQuery;

impl ConstructorQuery for ModestConstructorQuery {
    fn select<'t>(&self, ty: &'t TypeRef) -> Vec<&'t Constructor> {
        let mut constructors: Vec<_> = ty.constructors().iter().collect();
        constructors.sort_by_key(|c| c.parameters().len());
        constructors
    }
}

/// Prefers constructors taking the most array arguments, then the most
/// arguments overall
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayFavoringConstructorQuery;

impl ConstructorQuery for ArrayFavoringConstructorQuery {
    fn select<'t>(&self, ty: &'t TypeRef) -> Vec<&'t Constructor> {
        let mut constructors: Vec<_> = ty.constructors().iter().collect();
        constructors.sort_by_key(|c| {
            (
                std::cmp::Reverse(c.array_parameter_count()),
                std::cmp::Reverse(c.parameters().len()),
            )
        });
        constructors
    }
}

/// Build an instance of `ty` with the first constructor whose arguments
/// all resolve, then populate writable members
///
/// Arguments, properties and fields are requested from the head of the
/// chain, so every registered stage sees them.
///
/// # Errors
/// Returns [`GenerationError::NotConstructible`] if no constructor can be
/// satisfied. An argument that cannot be produced, including a nested type
/// with no usable constructor, skips to the next constructor; other errors
/// propagate unchanged.
pub fn construct_with(
    ty: &TypeRef,
    query: &dyn ConstructorQuery,
    pipeline: &Pipeline<'_>,
) -> Result<Specimen, GenerationError> {
    for constructor in query.select(ty) {
        let arguments = match resolve_arguments(constructor, pipeline) {
            Ok(arguments) => arguments,
            Err(e) if e.is_unsatisfiable() => {
                tracing::trace!(%ty, error = %e, "constructor skipped");
                continue;
            }
            Err(e) => return Err(e),
        };

        let (properties, fields) = if pipeline.config().omit_auto_properties {
            (IndexMap::new(), IndexMap::new())
        } else {
            (
                resolve_members(ty.inherited_properties(), Request::Property, pipeline)?,
                resolve_members(ty.inherited_fields(), Request::Field, pipeline)?,
            )
        };

        return Ok(Specimen::Object(Arc::new(Instance::new(
            ty, arguments, properties, fields,
        ))));
    }

    Err(GenerationError::NotConstructible {
        type_name: ty.name().to_string(),
    })
}

fn resolve_arguments(
    constructor: &Constructor,
    pipeline: &Pipeline<'_>,
) -> Result<IndexMap<String, Specimen>, GenerationError> {
    constructor
        .parameters()
        .iter()
        .map(|p| {
            let value = pipeline.resolve(&Request::Parameter(p.clone()))?;
            Ok((p.name().to_string(), value))
        })
        .collect()
}

fn resolve_members(
    members: Vec<MemberInfo>,
    request: fn(MemberInfo) -> Request,
    pipeline: &Pipeline<'_>,
) -> Result<IndexMap<String, Specimen>, GenerationError> {
    members
        .into_iter()
        .map(|member| {
            let name = member.name().to_string();
            Ok((name, pipeline.resolve(&request(member))?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeInfo;

    fn bag() -> TypeRef {
        let int = TypeRef::int();
        let ints = TypeRef::array_of(&int);
        let text = TypeRef::text();
        TypeInfo::class("Bag")
            .constructor([("name", &text), ("count", &int)])
            .default_constructor()
            .constructor([("items", &ints)])
            .constructor([("items", &ints), ("extra", &ints), ("name", &text)])
            .build()
            .unwrap()
    }

    #[test]
    fn modest_prefers_fewest_parameters() {
        let ty = bag();
        let order: Vec<_> = ModestConstructorQuery
            .select(&ty)
            .iter()
            .map(|c| c.parameters().len())
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn array_favoring_prefers_array_parameters() {
        let ty = bag();
        let order: Vec<_> = ArrayFavoringConstructorQuery
            .select(&ty)
            .iter()
            .map(|c| (c.array_parameter_count(), c.parameters().len()))
            .collect();
        assert_eq!(order, vec![(2, 3), (1, 1), (0, 2), (0, 0)]);
    }

    #[test]
    fn class_without_constructor_is_not_constructible() {
        let ty = TypeInfo::class("Sealed").build().unwrap();
        let err = crate::Fixture::new().create(&ty).unwrap_err();
        assert_eq!(
            err,
            GenerationError::NotConstructible {
                type_name: "Sealed".into()
            }
        );
    }

    #[test]
    fn skips_constructor_with_unresolvable_argument() {
        let iface = TypeInfo::interface("IPort").build().unwrap();
        let int = TypeRef::int();
        let ty = TypeInfo::class("Adapter")
            .constructor([("port", &iface)])
            .constructor([("size", &int), ("limit", &int)])
            .build()
            .unwrap();

        let specimen = crate::Fixture::new().create(&ty).unwrap();
        let instance = specimen.as_object().unwrap();
        assert!(instance.argument("size").is_some());
        assert!(instance.argument("port").is_none());
    }

    #[test]
    fn skips_constructor_with_unconstructible_argument() {
        let sealed = TypeInfo::class("Sealed").build().unwrap();
        let int = TypeRef::int();
        let ty = TypeInfo::class("Holder")
            .constructor([("inner", &sealed)])
            .constructor([("size", &int), ("limit", &int)])
            .build()
            .unwrap();

        let specimen = crate::Fixture::new().create(&ty).unwrap();
        let instance = specimen.as_object().unwrap();
        assert!(instance.argument("inner").is_none());
        assert!(instance.argument("limit").is_some());
    }
}
