//! Test method descriptors
//!
//! A [`TestMethod`] lists its parameters in declaration order together with
//! the customization sources attached to each one. It stands in for the
//! attribute metadata a test framework would read by reflection.

use crate::error::AutoDataError;
use specimen_customize::ParameterCustomizationSource;
use specimen_kernel::{Member, ParameterInfo, TypeRef};
use std::fmt;
use std::sync::Arc;

/// One declared parameter and its attached sources
#[derive(Clone)]
pub struct TestParameter {
    info: ParameterInfo,
    sources: Vec<Arc<dyn ParameterCustomizationSource>>,
}

impl TestParameter {
    /// Parameter descriptor
    #[inline]
    #[must_use]
    pub fn info(&self) -> &ParameterInfo {
        &self.info
    }

    /// Attached sources, in declaration order
    #[inline]
    #[must_use]
    pub fn sources(&self) -> &[Arc<dyn ParameterCustomizationSource>] {
        &self.sources
    }
}

impl fmt::Debug for TestParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestParameter")
            .field("name", &self.info.name())
            .field("ty", &self.info.ty().name())
            .field("sources", &self.sources)
            .finish()
    }
}

/// A test method: name, declaring type, ordered parameters
#[derive(Debug, Clone)]
pub struct TestMethod {
    member: Member,
    name: String,
    parameters: Vec<TestParameter>,
}

impl TestMethod {
    /// Start describing a method
    #[inline]
    #[must_use]
    pub fn builder(name: impl Into<String>) -> TestMethodBuilder {
        TestMethodBuilder::new(name)
    }

    /// Method name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member identity used in parameter descriptors
    #[inline]
    #[must_use]
    pub fn member(&self) -> &Member {
        &self.member
    }

    /// Parameters in declaration order
    #[inline]
    #[must_use]
    pub fn parameters(&self) -> &[TestParameter] {
        &self.parameters
    }
}

/// Builder for [`TestMethod`]
///
/// Validation is deferred to [`TestMethodBuilder::build`].
#[derive(Debug)]
pub struct TestMethodBuilder {
    name: String,
    owner: String,
    parameters: Vec<(String, TypeRef)>,
    attachments: Vec<(Option<usize>, Arc<dyn ParameterCustomizationSource>)>,
}

impl TestMethodBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: String::new(),
            parameters: Vec::new(),
            attachments: Vec::new(),
        }
    }

    /// Declaring type
    #[must_use]
    pub fn declared_in(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Declare the next parameter
    #[must_use]
    pub fn parameter(mut self, name: impl Into<String>, ty: &TypeRef) -> Self {
        self.parameters.push((name.into(), ty.clone()));
        self
    }

    /// Attach a source to the most recently declared parameter
    #[must_use]
    pub fn with(mut self, source: impl ParameterCustomizationSource + 'static) -> Self {
        let position = self.parameters.len().checked_sub(1);
        self.attachments.push((position, Arc::new(source)));
        self
    }

    /// Attach a source to the parameter at `position`
    #[must_use]
    pub fn attach(
        mut self,
        position: usize,
        source: Arc<dyn ParameterCustomizationSource>,
    ) -> Self {
        self.attachments.push((Some(position), source));
        self
    }

    /// Validate and build
    ///
    /// # Errors
    /// - [`AutoDataError::InvalidParameter`] for an empty method or
    ///   parameter name, a duplicate parameter name, or a source attached
    ///   before any parameter was declared
    /// - [`AutoDataError::UnknownParameter`] for a source attached to a
    ///   position past the last parameter
    pub fn build(self) -> Result<TestMethod, AutoDataError> {
        if self.name.trim().is_empty() {
            return Err(AutoDataError::invalid_parameter("method name must not be empty"));
        }

        let member = Member::method(self.owner, self.name.clone());
        let mut parameters: Vec<TestParameter> = Vec::with_capacity(self.parameters.len());
        for (position, (name, ty)) in self.parameters.into_iter().enumerate() {
            if name.is_empty() {
                return Err(AutoDataError::invalid_parameter(format!(
                    "parameter {position} of {member} has no name"
                )));
            }
            if parameters.iter().any(|p| p.info.name() == name) {
                return Err(AutoDataError::invalid_parameter(format!(
                    "duplicate parameter {name} in {member}"
                )));
            }
            parameters.push(TestParameter {
                info: ParameterInfo::new(member.clone(), position, name, &ty),
                sources: Vec::new(),
            });
        }

        for (position, source) in self.attachments {
            let Some(position) = position else {
                return Err(AutoDataError::invalid_parameter(
                    "source attached before any parameter was declared",
                ));
            };
            parameters
                .get_mut(position)
                .ok_or(AutoDataError::UnknownParameter { position })?
                .sources
                .push(source);
        }

        Ok(TestMethod {
            member,
            name: self.name,
            parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specimen_customize::{FavorArrays, Frozen};

    #[test]
    fn parameters_keep_declaration_order() {
        let int = TypeRef::int();
        let method = TestMethod::builder("adds")
            .declared_in("CalculatorTests")
            .parameter("a", &int)
            .parameter("b", &int)
            .build()
            .unwrap();

        let names: Vec<_> = method.parameters().iter().map(|p| p.info().name()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(method.parameters()[1].info().position(), 1);
        assert_eq!(method.member().to_string(), "CalculatorTests::adds");
    }

    #[test]
    fn with_attaches_to_last_parameter() {
        let int = TypeRef::int();
        let method = TestMethod::builder("m")
            .parameter("a", &int)
            .with(Frozen::default())
            .parameter("b", &int)
            .build()
            .unwrap();

        assert_eq!(method.parameters()[0].sources().len(), 1);
        assert!(method.parameters()[1].sources().is_empty());
    }

    #[test]
    fn attach_by_position() {
        let int = TypeRef::int();
        let method = TestMethod::builder("m")
            .parameter("a", &int)
            .parameter("b", &int)
            .attach(1, Arc::new(FavorArrays))
            .attach(1, Arc::new(Frozen::default()))
            .build()
            .unwrap();

        assert_eq!(method.parameters()[1].sources().len(), 2);
    }

    #[test]
    fn unknown_position_rejected() {
        let err = TestMethod::builder("m")
            .parameter("a", &TypeRef::int())
            .attach(3, Arc::new(Frozen::default()))
            .build()
            .unwrap_err();
        assert_eq!(err, AutoDataError::UnknownParameter { position: 3 });
    }

    #[test]
    fn source_before_parameters_rejected() {
        let err = TestMethod::builder("m")
            .with(Frozen::default())
            .parameter("a", &TypeRef::int())
            .build()
            .unwrap_err();
        assert!(matches!(err, AutoDataError::InvalidParameter { .. }));
    }

    #[test]
    fn invalid_names_rejected() {
        let int = TypeRef::int();
        assert!(TestMethod::builder(" ").build().is_err());
        assert!(TestMethod::builder("m").parameter("", &int).build().is_err());
        assert!(TestMethod::builder("m")
            .parameter("a", &int)
            .parameter("a", &int)
            .build()
            .is_err());
    }

    #[test]
    fn names_differing_in_case_are_distinct() {
        let int = TypeRef::int();
        let method = TestMethod::builder("m")
            .parameter("count", &int)
            .parameter("Count", &int)
            .build()
            .unwrap();
        assert_eq!(method.parameters().len(), 2);
    }
}
