//! Error types for parameter customizations

use specimen_kernel::GenerationError;

/// Errors raised while producing or applying a customization
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomizationError {
    /// The parameter's type cannot be built through constructors
    #[error("{type_name} has no public constructors")]
    NotConstructible {
        /// Name of the type
        type_name: String,
    },

    /// Generation failed while applying
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl CustomizationError {
    /// Create not-constructible error
    #[inline]
    #[must_use]
    pub fn not_constructible(type_name: impl Into<String>) -> Self {
        Self::NotConstructible {
            type_name: type_name.into(),
        }
    }
}
