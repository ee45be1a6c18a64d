//! Fixture configuration

use serde::{Deserialize, Serialize};

/// Default number of items generated for arrays
pub const DEFAULT_REPEAT_COUNT: usize = 3;

/// Configuration of a [`Fixture`](crate::Fixture)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Items generated per array request
    pub repeat_count: usize,
    /// Skip filling writable properties and public fields
    pub omit_auto_properties: bool,
}

impl FixtureConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With repeat count
    #[inline]
    #[must_use]
    pub fn with_repeat_count(mut self, count: usize) -> Self {
        self.repeat_count = count;
        self
    }

    /// With auto-property population switched off or on
    #[inline]
    #[must_use]
    pub fn with_omit_auto_properties(mut self, omit: bool) -> Self {
        self.omit_auto_properties = omit;
        self
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            repeat_count: DEFAULT_REPEAT_COUNT,
            omit_auto_properties: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FixtureConfig::new();
        assert_eq!(config.repeat_count, 3);
        assert!(!config.omit_auto_properties);
    }

    #[test]
    fn builder_methods() {
        let config = FixtureConfig::new()
            .with_repeat_count(5)
            .with_omit_auto_properties(true);
        assert_eq!(config.repeat_count, 5);
        assert!(config.omit_auto_properties);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: FixtureConfig = serde_json::from_str(r#"{"repeat_count": 1}"#).unwrap();
        assert_eq!(config, FixtureConfig::new().with_repeat_count(1));
    }
}
