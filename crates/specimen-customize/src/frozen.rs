//! `Frozen` parameter directive

use crate::error::CustomizationError;
use crate::freeze::FreezeOnMatch;
use crate::source::{CustomizationKind, ParameterCustomizationSource};
use serde::{Deserialize, Serialize};
use specimen_kernel::{Customization, ParameterInfo, Request};
use specimen_matching::{FilterBuilder, Matching};

/// Freeze the parameter's value and reuse it for every matching request
///
/// Which requests count as matching is controlled by [`Matching`];
/// the default is [`Matching::EXACT_TYPE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frozen {
    #[serde(default)]
    by: Matching,
}

impl Frozen {
    /// Create directive matching by `by`
    #[inline]
    #[must_use]
    pub fn new(by: Matching) -> Self {
        Self { by }
    }

    /// Matching criteria
    #[inline]
    #[must_use]
    pub fn by(&self) -> Matching {
        self.by
    }

    /// Freeze customization for `parameter`
    #[must_use]
    pub fn freeze_for(&self, parameter: &ParameterInfo) -> FreezeOnMatch {
        let matcher = FilterBuilder::new(self.by).for_parameter(parameter);
        FreezeOnMatch::new(Request::Parameter(parameter.clone()), matcher)
    }
}

impl ParameterCustomizationSource for Frozen {
    fn customization(
        &self,
        parameter: &ParameterInfo,
    ) -> Result<Box<dyn Customization>, CustomizationError> {
        Ok(Box::new(self.freeze_for(parameter)))
    }

    fn kind(&self) -> CustomizationKind {
        CustomizationKind::Matching
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specimen_kernel::{Fixture, Member, TypeRef};

    fn parameter(ty: &TypeRef, name: &str) -> ParameterInfo {
        ParameterInfo::new(Member::method("Suite", "test"), 0, name, ty)
    }

    #[test]
    fn defaults_to_exact_type() {
        assert_eq!(Frozen::default().by(), Matching::EXACT_TYPE);
    }

    #[test]
    fn freeze_targets_the_parameter() {
        let p = parameter(&TypeRef::int(), "count");
        let freeze = Frozen::default().freeze_for(&p);
        assert_eq!(freeze.target(), &Request::Parameter(p.clone()));
        assert_eq!(freeze.matcher(), &FilterBuilder::default().for_parameter(&p));
    }

    #[test]
    fn frozen_parameter_value_is_reused() {
        let int = TypeRef::int();
        let p = parameter(&int, "count");
        let mut fixture = Fixture::new();
        let customization = Frozen::default().customization(&p).unwrap();
        fixture.customize(customization.as_ref());

        let frozen = fixture.resolve(&Request::Parameter(p)).unwrap();
        assert_eq!(fixture.create(&int).unwrap(), frozen);
        assert_eq!(fixture.create(&int).unwrap(), frozen);
    }

    #[test]
    fn missing_flags_deserialize_to_default() {
        let frozen: Frozen = serde_json::from_str("{}").unwrap();
        assert_eq!(frozen, Frozen::default());
    }
}
