//! Generation context
//!
//! A [`Fixture`] owns an ordered chain of [`SpecimenBuilder`] stages that
//! sit in front of the default engine. Resolution walks the chain from the
//! head; the first stage that answers wins, and a stage that declines
//! (`Ok(None)`) lets the request fall through.
//!
//! Stages receive a [`Pipeline`] so they can either continue with the
//! stages behind them ([`Pipeline::proceed`]) or issue a fresh sub-request
//! from the head ([`Pipeline::resolve`]).

use crate::config::FixtureConfig;
use crate::engine::DefaultEngine;
use crate::error::GenerationError;
use crate::request::Request;
use crate::specimen::Specimen;
use crate::types::TypeRef;
use std::fmt;
use std::sync::Arc;

/// One stage of the resolution chain
pub trait SpecimenBuilder: Send + Sync + fmt::Debug {
    /// Try to satisfy `request`
    ///
    /// # Returns
    /// - `Ok(Some(specimen))` to answer the request
    /// - `Ok(None)` to let it fall through to later stages
    ///
    /// # Errors
    /// Any error aborts the whole resolution.
    fn create(
        &self,
        request: &Request,
        pipeline: &Pipeline<'_>,
    ) -> Result<Option<Specimen>, GenerationError>;
}

/// A mutation applied to a fixture
pub trait Customization: fmt::Debug {
    /// Apply this customization
    fn customize(&self, fixture: &mut Fixture);
}

/// View of the chain from a given stage onwards
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    fixture: &'a Fixture,
    next: usize,
}

impl Pipeline<'_> {
    /// Resolve `request` with the stages behind the current one
    ///
    /// # Errors
    /// Returns [`GenerationError::NoSpecimen`] if no remaining stage answers.
    #[inline]
    pub fn proceed(&self, request: &Request) -> Result<Specimen, GenerationError> {
        self.fixture.resolve_from(self.next, request)
    }

    /// Resolve a sub-request from the head of the chain
    ///
    /// # Errors
    /// Returns [`GenerationError::NoSpecimen`] if no stage answers.
    #[inline]
    pub fn resolve(&self, request: &Request) -> Result<Specimen, GenerationError> {
        self.fixture.resolve(request)
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &FixtureConfig {
        self.fixture.config()
    }
}

/// Saved customization chain of a [`Fixture`]
#[derive(Debug, Clone)]
pub struct ChainSnapshot(Vec<Arc<dyn SpecimenBuilder>>);

/// Generation context for one test invocation
#[derive(Debug)]
pub struct Fixture {
    config: FixtureConfig,
    customizations: Vec<Arc<dyn SpecimenBuilder>>,
    engine: DefaultEngine,
}

impl Fixture {
    /// Create fixture with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FixtureConfig::default())
    }

    /// Create fixture with configuration
    #[must_use]
    pub fn with_config(config: FixtureConfig) -> Self {
        Self {
            config,
            customizations: Vec::new(),
            engine: DefaultEngine::new(),
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// Apply a customization
    pub fn customize(&mut self, customization: &dyn Customization) -> &mut Self {
        tracing::debug!(?customization, "applying customization");
        customization.customize(self);
        self
    }

    /// Insert a stage at the head of the chain
    ///
    /// The stage is consulted before every stage registered earlier.
    pub fn insert_front(&mut self, builder: Arc<dyn SpecimenBuilder>) {
        self.customizations.insert(0, builder);
    }

    /// Append a stage just in front of the default engine
    pub fn push(&mut self, builder: Arc<dyn SpecimenBuilder>) {
        self.customizations.push(builder);
    }

    /// Registered stages, head first
    #[inline]
    #[must_use]
    pub fn customizations(&self) -> &[Arc<dyn SpecimenBuilder>] {
        &self.customizations
    }

    /// Capture the current chain
    #[must_use]
    pub fn snapshot(&self) -> ChainSnapshot {
        ChainSnapshot(self.customizations.clone())
    }

    /// Put back a chain captured by [`Fixture::snapshot`]
    ///
    /// Stages registered since the snapshot are dropped; generator state
    /// of the default engine is kept.
    pub fn restore(&mut self, snapshot: ChainSnapshot) {
        let dropped = self.customizations.len().saturating_sub(snapshot.0.len());
        tracing::trace!(dropped, "customization chain restored");
        self.customizations = snapshot.0;
    }

    /// Resolve a request from the head of the chain
    ///
    /// # Errors
    /// Returns [`GenerationError::NoSpecimen`] if no stage answers, or the
    /// first error raised by a stage.
    pub fn resolve(&self, request: &Request) -> Result<Specimen, GenerationError> {
        self.resolve_from(0, request)
    }

    /// Create an anonymous value of `ty`
    ///
    /// # Errors
    /// See [`Fixture::resolve`].
    #[inline]
    pub fn create(&self, ty: &TypeRef) -> Result<Specimen, GenerationError> {
        self.resolve(&Request::of_type(ty))
    }

    fn resolve_from(&self, stage: usize, request: &Request) -> Result<Specimen, GenerationError> {
        let start = stage.min(self.customizations.len());
        for (offset, builder) in self.customizations[start..].iter().enumerate() {
            let pipeline = Pipeline {
                fixture: self,
                next: start + offset + 1,
            };
            if let Some(specimen) = builder.create(request, &pipeline)? {
                return Ok(specimen);
            }
        }

        let pipeline = Pipeline {
            fixture: self,
            next: self.customizations.len(),
        };
        self.engine
            .create(request, &pipeline)?
            .ok_or_else(|| GenerationError::no_specimen(request))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers int requests with a fixed value and counts calls
    #[derive(Debug)]
    struct Fixed {
        value: i64,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn new(value: i64) -> Arc<Self> {
            Arc::new(Self {
                value,
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl SpecimenBuilder for Fixed {
        fn create(
            &self,
            request: &Request,
            _pipeline: &Pipeline<'_>,
        ) -> Result<Option<Specimen>, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(matches!(request, Request::Type(ty) if ty == &TypeRef::int())
                .then_some(Specimen::Int(self.value)))
        }
    }

    /// Doubles whatever the remaining chain produces for ints
    #[derive(Debug)]
    struct Doubling;

    impl SpecimenBuilder for Doubling {
        fn create(
            &self,
            request: &Request,
            pipeline: &Pipeline<'_>,
        ) -> Result<Option<Specimen>, GenerationError> {
            match request {
                Request::Type(ty) if ty == &TypeRef::int() => {
                    let inner = pipeline.proceed(request)?;
                    Ok(inner.as_int().map(|v| Specimen::Int(v * 2)))
                }
                _ => Ok(None),
            }
        }
    }

    #[test]
    fn head_insertion_wins() {
        let mut fixture = Fixture::new();
        fixture.insert_front(Fixed::new(1));
        fixture.insert_front(Fixed::new(2));

        assert_eq!(fixture.create(&TypeRef::int()).unwrap(), Specimen::Int(2));
    }

    #[test]
    fn declined_requests_fall_through() {
        let mut fixture = Fixture::new();
        let fixed = Fixed::new(1);
        fixture.insert_front(fixed.clone());

        let text = fixture.create(&TypeRef::text()).unwrap();
        assert!(text.as_text().is_some());
        assert_eq!(fixed.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn proceed_skips_earlier_stages() {
        let mut fixture = Fixture::new();
        fixture.push(Arc::new(Doubling));
        fixture.push(Fixed::new(21));

        assert_eq!(fixture.create(&TypeRef::int()).unwrap(), Specimen::Int(42));
    }

    #[test]
    fn interface_request_has_no_specimen() {
        let iface = crate::types::TypeInfo::interface("IThing").build().unwrap();
        let err = Fixture::new().create(&iface).unwrap_err();
        assert!(err.is_no_specimen());
    }

    #[test]
    fn restore_drops_later_stages() {
        let mut fixture = Fixture::new();
        fixture.insert_front(Fixed::new(1));
        let snapshot = fixture.snapshot();

        fixture.insert_front(Fixed::new(2));
        fixture.push(Arc::new(Doubling));
        assert_eq!(fixture.create(&TypeRef::int()).unwrap(), Specimen::Int(2));

        fixture.restore(snapshot);
        assert_eq!(fixture.customizations().len(), 1);
        assert_eq!(fixture.create(&TypeRef::int()).unwrap(), Specimen::Int(1));
    }
}
