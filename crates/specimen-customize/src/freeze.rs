//! Freeze-on-match
//!
//! [`FreezeOnMatch`] registers a [`FrozenBinding`] at the head of a
//! fixture's chain. The binding is empty until the first request its
//! predicate accepts; it then lets the stages behind it produce a value,
//! caches it, and from then on answers every accepted request with that
//! value. Requests the predicate rejects pass through untouched.
//!
//! Head insertion makes the most recently registered binding win when
//! predicates overlap.

use parking_lot::Mutex;
use specimen_kernel::{
    Customization, Fixture, GenerationError, Pipeline, Request, Specimen, SpecimenBuilder,
};
use specimen_matching::RequestSpec;
use std::sync::Arc;

/// Cache slot of a binding
#[derive(Debug, Clone)]
enum Slot {
    Empty,
    /// Value is being produced by the stages behind this binding;
    /// nested requests pass through.
    Filling,
    Filled(Specimen),
}

/// Observable state of a registered binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    /// No value cached yet
    Empty,
    /// Value cached; every accepted request returns it
    Filled,
}

/// A registered freeze: predicate plus a write-once cached value
#[derive(Debug)]
pub struct FrozenBinding {
    matcher: RequestSpec,
    slot: Mutex<Slot>,
}

impl FrozenBinding {
    /// Create empty binding
    #[inline]
    #[must_use]
    pub fn new(matcher: RequestSpec) -> Self {
        Self {
            matcher,
            slot: Mutex::new(Slot::Empty),
        }
    }

    /// Predicate deciding which requests receive the frozen value
    #[inline]
    #[must_use]
    pub fn matcher(&self) -> &RequestSpec {
        &self.matcher
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> BindingState {
        match &*self.slot.lock() {
            Slot::Filled(_) => BindingState::Filled,
            Slot::Empty | Slot::Filling => BindingState::Empty,
        }
    }

    /// Cached value, if filled
    #[must_use]
    pub fn cached(&self) -> Option<Specimen> {
        match &*self.slot.lock() {
            Slot::Filled(specimen) => Some(specimen.clone()),
            Slot::Empty | Slot::Filling => None,
        }
    }
}

impl SpecimenBuilder for FrozenBinding {
    fn create(
        &self,
        request: &Request,
        pipeline: &Pipeline<'_>,
    ) -> Result<Option<Specimen>, GenerationError> {
        if !self.matcher.is_satisfied_by(request) {
            return Ok(None);
        }

        {
            let mut slot = self.slot.lock();
            match &*slot {
                Slot::Filled(specimen) => {
                    tracing::trace!(%request, ty = %request.target_type(), "serving frozen value");
                    return Ok(Some(specimen.clone()));
                }
                Slot::Filling => return Ok(None),
                Slot::Empty => {}
            }
            *slot = Slot::Filling;
        }

        // Lock released: producing the value may re-enter this binding.
        match pipeline.proceed(request) {
            Ok(specimen) => {
                tracing::trace!(
                    %request,
                    ty = %request.target_type(),
                    value = %specimen,
                    "freezing value"
                );
                *self.slot.lock() = Slot::Filled(specimen.clone());
                Ok(Some(specimen))
            }
            Err(e) => {
                *self.slot.lock() = Slot::Empty;
                Err(e)
            }
        }
    }
}

/// Customization that freezes the first value matching a predicate
#[derive(Debug, Clone)]
pub struct FreezeOnMatch {
    target: Request,
    matcher: RequestSpec,
}

impl FreezeOnMatch {
    /// Create freeze for `target` with `matcher`
    #[inline]
    #[must_use]
    pub fn new(target: Request, matcher: RequestSpec) -> Self {
        Self { target, matcher }
    }

    /// Request the freeze was built for
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Request {
        &self.target
    }

    /// Predicate of the binding this customization registers
    #[inline]
    #[must_use]
    pub fn matcher(&self) -> &RequestSpec {
        &self.matcher
    }

    /// Register a fresh binding at the head of the chain and return it
    pub fn bind(&self, fixture: &mut Fixture) -> Arc<FrozenBinding> {
        let binding = Arc::new(FrozenBinding::new(self.matcher.clone()));
        fixture.insert_front(binding.clone());
        tracing::debug!(request = %self.target, "frozen binding registered");
        binding
    }
}

impl Customization for FreezeOnMatch {
    fn customize(&self, fixture: &mut Fixture) {
        self.bind(fixture);
    }
}
