//! Default engine: relays and primitive generators at the tail of the chain

use crate::construction::{construct_with, ModestConstructorQuery};
use crate::error::GenerationError;
use crate::fixture::{Pipeline, SpecimenBuilder};
use crate::request::Request;
use crate::specimen::Specimen;
use crate::types::{TypeKind, TypeRef};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Relays member requests to seeded type requests, seeded requests to
/// type requests, and answers type requests
///
/// Integers are unique and increasing per engine, booleans alternate,
/// strings embed a fresh UUID.
#[derive(Debug)]
pub(crate) struct DefaultEngine {
    numbers: AtomicI64,
    toggle: AtomicBool,
}

impl DefaultEngine {
    pub(crate) fn new() -> Self {
        Self {
            numbers: AtomicI64::new(0),
            toggle: AtomicBool::new(false),
        }
    }

    fn create_type(
        &self,
        ty: &TypeRef,
        pipeline: &Pipeline<'_>,
    ) -> Result<Option<Specimen>, GenerationError> {
        let specimen = match ty.kind() {
            TypeKind::Int => Specimen::Int(self.numbers.fetch_add(1, Ordering::Relaxed) + 1),
            TypeKind::Bool => Specimen::Bool(!self.toggle.fetch_xor(true, Ordering::Relaxed)),
            TypeKind::Text => Specimen::Text(Uuid::new_v4().to_string()),
            TypeKind::Array(element) => {
                let items = (0..pipeline.config().repeat_count)
                    .map(|_| pipeline.resolve(&Request::of_type(element)))
                    .collect::<Result<Vec<_>, _>>()?;
                Specimen::Array {
                    element: element.clone(),
                    items: Arc::from(items),
                }
            }
            TypeKind::Class => construct_with(ty, &ModestConstructorQuery, pipeline)?,
            TypeKind::Interface => return Ok(None),
        };
        Ok(Some(specimen))
    }
}

impl SpecimenBuilder for DefaultEngine {
    fn create(
        &self,
        request: &Request,
        pipeline: &Pipeline<'_>,
    ) -> Result<Option<Specimen>, GenerationError> {
        match request {
            Request::Parameter(p) => pipeline
                .resolve(&Request::seeded(p.ty(), p.name()))
                .map(Some),
            Request::Property(m) | Request::Field(m) => pipeline
                .resolve(&Request::seeded(m.ty(), m.name()))
                .map(Some),
            Request::Seeded { ty, seed } if ty.kind() == &TypeKind::Text => {
                Ok(Some(Specimen::Text(format!("{seed}{}", Uuid::new_v4()))))
            }
            Request::Seeded { ty, .. } => pipeline.resolve(&Request::of_type(ty)).map(Some),
            Request::Type(ty) => self.create_type(ty, pipeline),
        }
    }
}
