//! Resolution driver configuration

use serde::{Deserialize, Serialize};
use specimen_customize::CustomizationOrder;
use specimen_kernel::FixtureConfig;

/// Configuration of an [`AutoData`](crate::AutoData) driver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoDataConfig {
    /// Display name override; blank values count as unset
    pub display_name: Option<String>,
    /// Relative order of construction and matching sources
    pub order: CustomizationOrder,
    /// Configuration of the default fixture
    pub fixture: FixtureConfig,
}

impl AutoDataConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With display name override
    #[inline]
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// With source order
    #[inline]
    #[must_use]
    pub fn with_order(mut self, order: CustomizationOrder) -> Self {
        self.order = order;
        self
    }

    /// With fixture configuration
    #[inline]
    #[must_use]
    pub fn with_fixture(mut self, fixture: FixtureConfig) -> Self {
        self.fixture = fixture;
        self
    }

    /// Display name override, if set and not blank
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}
