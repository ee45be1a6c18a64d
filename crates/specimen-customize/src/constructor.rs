//! Constructor selection override for one type

use specimen_kernel::{
    construct_with, ConstructorQuery, Customization, Fixture, GenerationError, Pipeline, Request,
    Specimen, SpecimenBuilder, TypeRef,
};
use std::sync::Arc;

/// Customization that builds `ty` with a different constructor query
#[derive(Debug, Clone)]
pub struct ConstructorCustomization {
    ty: TypeRef,
    query: Arc<dyn ConstructorQuery>,
}

impl ConstructorCustomization {
    /// Create customization for `ty`
    #[inline]
    #[must_use]
    pub fn new(ty: &TypeRef, query: Arc<dyn ConstructorQuery>) -> Self {
        Self {
            ty: ty.clone(),
            query,
        }
    }

    /// Type whose construction is overridden
    #[inline]
    #[must_use]
    pub fn target(&self) -> &TypeRef {
        &self.ty
    }
}

impl Customization for ConstructorCustomization {
    fn customize(&self, fixture: &mut Fixture) {
        fixture.insert_front(Arc::new(QueryBuilder {
            ty: self.ty.clone(),
            query: self.query.clone(),
        }));
    }
}

/// Answers type requests for one type through a constructor query
#[derive(Debug)]
struct QueryBuilder {
    ty: TypeRef,
    query: Arc<dyn ConstructorQuery>,
}

impl SpecimenBuilder for QueryBuilder {
    fn create(
        &self,
        request: &Request,
        pipeline: &Pipeline<'_>,
    ) -> Result<Option<Specimen>, GenerationError> {
        match request {
            Request::Type(ty) if *ty == self.ty => {
                construct_with(ty, self.query.as_ref(), pipeline).map(Some)
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specimen_kernel::{ArrayFavoringConstructorQuery, TypeInfo};

    #[test]
    fn overrides_constructor_choice() {
        let int = TypeRef::int();
        let ints = TypeRef::array_of(&int);
        let ty = TypeInfo::class("Bag")
            .constructor([("count", &int)])
            .constructor([("items", &ints)])
            .build()
            .unwrap();

        let mut fixture = Fixture::new();
        let modest = fixture.create(&ty).unwrap();
        assert!(modest.as_object().unwrap().argument("count").is_some());

        fixture.customize(&ConstructorCustomization::new(
            &ty,
            Arc::new(ArrayFavoringConstructorQuery),
        ));
        let favored = fixture.create(&ty).unwrap();
        assert!(favored.as_object().unwrap().argument("items").is_some());
    }

    #[test]
    fn other_types_untouched() {
        let ty = TypeInfo::class("Bag").default_constructor().build().unwrap();
        let mut fixture = Fixture::new();
        fixture.customize(&ConstructorCustomization::new(
            &ty,
            Arc::new(ArrayFavoringConstructorQuery),
        ));
        assert!(fixture.create(&TypeRef::int()).unwrap().as_int().is_some());
    }
}
