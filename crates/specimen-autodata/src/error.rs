//! Error types for argument resolution

use specimen_customize::CustomizationError;
use specimen_kernel::GenerationError;

/// Errors raised while describing a test method or resolving its arguments
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AutoDataError {
    /// Builder finished without a fixture factory or configuration
    #[error("no fixture factory configured")]
    MissingFixtureFactory,

    /// Test method description rejected
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// Why it was rejected
        reason: String,
    },

    /// Customization source attached to a position the method does not declare
    #[error("no parameter at position {position}")]
    UnknownParameter {
        /// Requested position
        position: usize,
    },

    /// A parameter customization could not be produced
    #[error("customization failed: {0}")]
    Customization(#[from] CustomizationError),

    /// A parameter value could not be generated
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl AutoDataError {
    /// Create invalid parameter error
    #[inline]
    #[must_use]
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    /// Check if this is a configuration error, raised before any value is
    /// generated
    #[inline]
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingFixtureFactory | Self::InvalidParameter { .. } | Self::UnknownParameter { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(AutoDataError::MissingFixtureFactory.is_configuration());
        assert!(AutoDataError::UnknownParameter { position: 2 }.is_configuration());
        let generation: AutoDataError = GenerationError::invalid_type("X", "bad").into();
        assert!(!generation.is_configuration());
    }

    #[test]
    fn messages() {
        assert_eq!(
            AutoDataError::UnknownParameter { position: 4 }.to_string(),
            "no parameter at position 4"
        );
        assert_eq!(
            AutoDataError::invalid_parameter("empty name").to_string(),
            "invalid parameter: empty name"
        );
    }
}
