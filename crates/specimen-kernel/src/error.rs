//! Error types for the specimen kernel

use crate::request::Request;

/// Errors raised while defining types or generating specimens
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// No stage of the pipeline could satisfy the request
    #[error("no specimen could be created for request {request}")]
    NoSpecimen {
        /// Rendered request
        request: String,
    },

    /// No constructor of the type could be invoked
    #[error("type {type_name} has no usable constructor")]
    NotConstructible {
        /// Name of the type
        type_name: String,
    },

    /// Type definition rejected at construction
    #[error("invalid type {type_name}: {reason}")]
    InvalidType {
        /// Name of the offending type
        type_name: String,
        /// Why it was rejected
        reason: String,
    },
}

impl GenerationError {
    /// Create no-specimen error for a request
    #[inline]
    #[must_use]
    pub fn no_specimen(request: &Request) -> Self {
        Self::NoSpecimen {
            request: request.to_string(),
        }
    }

    /// Create invalid type error
    #[inline]
    #[must_use]
    pub fn invalid_type(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidType {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Check if the pipeline simply ran out of stages
    ///
    /// Constructor selection treats this as "try the next constructor".
    #[inline]
    #[must_use]
    pub fn is_no_specimen(&self) -> bool {
        matches!(self, Self::NoSpecimen { .. })
    }

    /// Check if the value simply could not be produced
    ///
    /// True for [`NoSpecimen`](Self::NoSpecimen) and
    /// [`NotConstructible`](Self::NotConstructible); constructor selection
    /// moves on to the next candidate for both.
    #[inline]
    #[must_use]
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(self, Self::NoSpecimen { .. } | Self::NotConstructible { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeRef;

    #[test]
    fn no_specimen_renders_request() {
        let err = GenerationError::no_specimen(&Request::Type(TypeRef::int()));
        assert!(err.is_no_specimen());
        assert_eq!(err.to_string(), "no specimen could be created for request type int");
    }

    #[test]
    fn invalid_type_is_not_no_specimen() {
        let err = GenerationError::invalid_type("", "name must not be empty");
        assert!(!err.is_no_specimen());
        assert!(!err.is_unsatisfiable());
        assert!(err.to_string().contains("name must not be empty"));
    }

    #[test]
    fn not_constructible_is_unsatisfiable() {
        let err = GenerationError::NotConstructible {
            type_name: "Sealed".into(),
        };
        assert!(err.is_unsatisfiable());
        assert!(!err.is_no_specimen());
    }
}
