//! Specimen AutoData
//!
//! Supplies test methods with generated arguments:
//!
//! - [`TestMethod`]: parameters in declaration order with attached
//!   customization sources
//! - [`AutoData`]: applies each parameter's customizations, then resolves
//!   it, producing one argument row per method
//! - [`TestDataSource`]: the seam a test framework calls into
//!
//! # Example
//!
//! ```rust,ignore
//! use specimen_autodata::{AutoData, Frozen, Matching, TestDataSource, TestMethod};
//!
//! let method = TestMethod::builder("sorts_widgets")
//!     .parameter("widget", &widget)
//!     .with(Frozen::new(Matching::IMPLEMENTED_INTERFACES))
//!     .parameter("comparable", &comparable)
//!     .build()?;
//!
//! let rows = AutoData::new().get_data(&method)?;
//! assert!(rows[0][0].same_instance(&rows[0][1]));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod autodata;
mod config;
mod error;
mod method;

pub use autodata::{
    customize_by_parameter, format_display_name, resolve_row, AutoData, AutoDataBuilder,
    FixtureFactory, TestDataSource,
};
pub use config::AutoDataConfig;
pub use error::AutoDataError;
pub use method::{TestMethod, TestMethodBuilder, TestParameter};

pub use specimen_customize::{CustomizationOrder, FavorArrays, Frozen};
pub use specimen_matching::Matching;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
