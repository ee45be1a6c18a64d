//! Parameter customization sources
//!
//! A source is a directive attached to one test-method parameter. Given the
//! parameter's descriptor it produces a [`Customization`] to apply to the
//! fixture before that parameter is resolved.

use crate::error::CustomizationError;
use serde::{Deserialize, Serialize};
use specimen_kernel::{Customization, ParameterInfo};
use std::fmt;
use std::sync::Arc;

/// Broad category of a source, used for ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CustomizationKind {
    /// Changes how values are built
    Construction,
    /// Freezes values for matching requests
    Matching,
}

/// Produces a customization from a parameter descriptor
pub trait ParameterCustomizationSource: Send + Sync + fmt::Debug {
    /// Customization for `parameter`
    ///
    /// # Errors
    /// Returns [`CustomizationError`] if the parameter cannot be customized
    /// this way.
    fn customization(
        &self,
        parameter: &ParameterInfo,
    ) -> Result<Box<dyn Customization>, CustomizationError>;

    /// Category of this source
    fn kind(&self) -> CustomizationKind;
}

/// Order in which the sources of one parameter are applied
///
/// Sorting is stable: sources of the same kind keep declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomizationOrder {
    /// Construction sources first, then matching sources
    #[default]
    ConstructionFirst,
    /// Matching sources first, then construction sources
    MatchingFirst,
    /// Exactly as declared
    Declaration,
}

impl CustomizationOrder {
    /// Reorder `sources` in place
    pub fn arrange(self, sources: &mut [Arc<dyn ParameterCustomizationSource>]) {
        match self {
            Self::ConstructionFirst => sources.sort_by_key(|s| s.kind()),
            Self::MatchingFirst => sources.sort_by_key(|s| std::cmp::Reverse(s.kind())),
            Self::Declaration => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specimen_kernel::Fixture;

    #[derive(Debug)]
    struct Noop;

    impl Customization for Noop {
        fn customize(&self, _fixture: &mut Fixture) {}
    }

    #[derive(Debug)]
    struct Tagged(&'static str, CustomizationKind);

    impl ParameterCustomizationSource for Tagged {
        fn customization(
            &self,
            _parameter: &ParameterInfo,
        ) -> Result<Box<dyn Customization>, CustomizationError> {
            Ok(Box::new(Noop))
        }

        fn kind(&self) -> CustomizationKind {
            self.1
        }
    }

    fn tags(sources: &[Arc<dyn ParameterCustomizationSource>]) -> Vec<String> {
        sources.iter().map(|s| format!("{s:?}")).collect()
    }

    fn declared() -> Vec<Arc<dyn ParameterCustomizationSource>> {
        vec![
            Arc::new(Tagged("freeze-a", CustomizationKind::Matching)),
            Arc::new(Tagged("ctor-a", CustomizationKind::Construction)),
            Arc::new(Tagged("freeze-b", CustomizationKind::Matching)),
            Arc::new(Tagged("ctor-b", CustomizationKind::Construction)),
        ]
    }

    #[test]
    fn construction_first_is_stable() {
        let mut sources = declared();
        CustomizationOrder::ConstructionFirst.arrange(&mut sources);
        let order = tags(&sources);
        assert!(order[0].contains("ctor-a"));
        assert!(order[1].contains("ctor-b"));
        assert!(order[2].contains("freeze-a"));
        assert!(order[3].contains("freeze-b"));
    }

    #[test]
    fn matching_first_is_stable() {
        let mut sources = declared();
        CustomizationOrder::MatchingFirst.arrange(&mut sources);
        let order = tags(&sources);
        assert!(order[0].contains("freeze-a"));
        assert!(order[1].contains("freeze-b"));
        assert!(order[2].contains("ctor-a"));
    }

    #[test]
    fn declaration_keeps_order() {
        let mut sources = declared();
        let before = tags(&sources);
        CustomizationOrder::Declaration.arrange(&mut sources);
        assert_eq!(tags(&sources), before);
    }

    #[test]
    fn order_serializes_snake_case() {
        let json = serde_json::to_string(&CustomizationOrder::MatchingFirst).unwrap();
        assert_eq!(json, "\"matching_first\"");
        assert_eq!(CustomizationOrder::default(), CustomizationOrder::ConstructionFirst);
    }
}
