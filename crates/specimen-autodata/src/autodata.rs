//! Resolution driver
//!
//! [`AutoData`] turns a [`TestMethod`] into one row of arguments. For each
//! parameter, in declaration order, it orders the attached sources, applies
//! their customizations to the fixture, then resolves the parameter.
//! Freezes registered for earlier parameters are therefore visible to
//! later ones.
//!
//! The fixture is built on first use. Concurrent first uses may each run
//! the factory, but only one fixture is ever published. Customizations
//! applied for a row live only as long as that row: the chain is restored
//! once the row is resolved or has failed.

use crate::config::AutoDataConfig;
use crate::error::AutoDataError;
use crate::method::{TestMethod, TestParameter};
use once_cell::race::OnceBox;
use parking_lot::Mutex;
use specimen_customize::{CustomizationOrder, ParameterCustomizationSource};
use specimen_kernel::{Fixture, Request, Specimen};
use std::fmt;
use std::sync::Arc;

/// Creates the fixture a driver resolves against
pub type FixtureFactory = Arc<dyn Fn() -> Fixture + Send + Sync>;

/// Supplies argument rows and display names to a test framework
pub trait TestDataSource {
    /// Argument rows for `method`
    ///
    /// # Errors
    /// Fails as a whole if any argument of any row cannot be produced.
    fn get_data(&self, method: &TestMethod) -> Result<Vec<Vec<Specimen>>, AutoDataError>;

    /// Display name for one invocation of `method`
    fn display_name(&self, method: &TestMethod, arguments: Option<&[Specimen]>) -> Option<String>;
}

/// Resolves test-method arguments from a lazily built fixture
pub struct AutoData {
    factory: FixtureFactory,
    fixture: OnceBox<Mutex<Fixture>>,
    config: AutoDataConfig,
}

impl AutoData {
    /// Create driver with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(AutoDataConfig::default())
    }

    /// Create driver whose fixture is built from `config.fixture`
    #[must_use]
    pub fn from_config(config: AutoDataConfig) -> Self {
        let fixture = config.fixture.clone();
        Self::assemble(Arc::new(move || Fixture::with_config(fixture.clone())), config)
    }

    /// Create driver with a custom fixture factory
    #[must_use]
    pub fn with_factory(factory: impl Fn() -> Fixture + Send + Sync + 'static) -> Self {
        Self::assemble(Arc::new(factory), AutoDataConfig::default())
    }

    /// Start building a driver
    #[inline]
    #[must_use]
    pub fn builder() -> AutoDataBuilder {
        AutoDataBuilder::default()
    }

    fn assemble(factory: FixtureFactory, config: AutoDataConfig) -> Self {
        Self {
            factory,
            fixture: OnceBox::new(),
            config,
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &AutoDataConfig {
        &self.config
    }

    /// Fixture, built on first access
    fn fixture(&self) -> &Mutex<Fixture> {
        self.fixture.get_or_init(|| {
            tracing::debug!("creating fixture");
            Box::new(Mutex::new((self.factory)()))
        })
    }

    /// Run `f` against the fixture
    pub fn with_fixture<R>(&self, f: impl FnOnce(&mut Fixture) -> R) -> R {
        f(&mut self.fixture().lock())
    }

    /// Resolve one argument per parameter, in declaration order
    ///
    /// # Errors
    /// Returns the first customization or generation failure; no partial
    /// row is produced.
    pub fn resolve(&self, method: &TestMethod) -> Result<Vec<Specimen>, AutoDataError> {
        let mut fixture = self.fixture().lock();
        let snapshot = fixture.snapshot();
        let row = resolve_row(&mut fixture, method, self.config.order);
        fixture.restore(snapshot);

        let arguments = row?;
        tracing::debug!(
            method = %method.member(),
            arguments = arguments.len(),
            "argument row resolved"
        );
        Ok(arguments)
    }
}

/// Customize and resolve every parameter of `method` against `fixture`
///
/// Customizations stay registered on `fixture` afterwards.
///
/// # Errors
/// Returns the first customization or generation failure.
pub fn resolve_row(
    fixture: &mut Fixture,
    method: &TestMethod,
    order: CustomizationOrder,
) -> Result<Vec<Specimen>, AutoDataError> {
    method
        .parameters()
        .iter()
        .map(|parameter| {
            customize_by_parameter(fixture, parameter, order)?;
            let value = fixture.resolve(&Request::Parameter(parameter.info().clone()))?;
            tracing::trace!(parameter = parameter.info().name(), %value, "parameter resolved");
            Ok(value)
        })
        .collect()
}

/// Apply the customizations of one parameter's sources in `order`
///
/// Every source produces its customization before any is applied, so a
/// failing source leaves the fixture untouched.
///
/// # Errors
/// Returns the first source failure.
pub fn customize_by_parameter(
    fixture: &mut Fixture,
    parameter: &TestParameter,
    order: CustomizationOrder,
) -> Result<(), AutoDataError> {
    let mut sources: Vec<Arc<dyn ParameterCustomizationSource>> = parameter.sources().to_vec();
    order.arrange(&mut sources);

    let customizations = sources
        .iter()
        .map(|source| source.customization(parameter.info()))
        .collect::<Result<Vec<_>, _>>()?;

    for customization in &customizations {
        fixture.customize(customization.as_ref());
    }
    Ok(())
}

/// Default display name for an invocation: `"{method} ({a},{b})"`
#[must_use]
pub fn format_display_name(method: &str, arguments: &[Specimen]) -> String {
    let rendered: Vec<String> = arguments.iter().map(ToString::to_string).collect();
    format!("{method} ({})", rendered.join(","))
}

impl TestDataSource for AutoData {
    fn get_data(&self, method: &TestMethod) -> Result<Vec<Vec<Specimen>>, AutoDataError> {
        Ok(vec![self.resolve(method)?])
    }

    fn display_name(&self, method: &TestMethod, arguments: Option<&[Specimen]>) -> Option<String> {
        if let Some(name) = self.config.display_name() {
            return Some(name.to_string());
        }
        arguments.map(|arguments| format_display_name(method.name(), arguments))
    }
}

impl Default for AutoData {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AutoData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoData")
            .field("config", &self.config)
            .field("fixture_created", &self.fixture.get().is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`AutoData`]
#[derive(Default)]
pub struct AutoDataBuilder {
    config: Option<AutoDataConfig>,
    factory: Option<FixtureFactory>,
}

impl AutoDataBuilder {
    /// With configuration
    #[must_use]
    pub fn config(mut self, config: AutoDataConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// With fixture factory; takes precedence over `config.fixture`
    #[must_use]
    pub fn factory(mut self, factory: impl Fn() -> Fixture + Send + Sync + 'static) -> Self {
        self.factory = Some(Arc::new(factory));
        self
    }

    /// Build the driver
    ///
    /// # Errors
    /// Returns [`AutoDataError::MissingFixtureFactory`] if neither a
    /// factory nor a configuration was given.
    pub fn build(self) -> Result<AutoData, AutoDataError> {
        match (self.factory, self.config) {
            (Some(factory), config) => Ok(AutoData::assemble(factory, config.unwrap_or_default())),
            (None, Some(config)) => Ok(AutoData::from_config(config)),
            (None, None) => Err(AutoDataError::MissingFixtureFactory),
        }
    }
}

impl fmt::Debug for AutoDataBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoDataBuilder")
            .field("config", &self.config)
            .field("factory", &self.factory.is_some())
            .finish()
    }
}
