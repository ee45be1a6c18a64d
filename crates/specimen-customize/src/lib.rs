//! Specimen Customize
//!
//! Fixture customizations driven by test-method parameters:
//!
//! - [`FreezeOnMatch`] / [`FrozenBinding`]: cache the first matching value
//!   and hand it to every later matching request
//! - [`ConstructorCustomization`]: change constructor selection for a type
//! - [`ParameterCustomizationSource`]: directives attached to a parameter,
//!   with [`Frozen`] and [`FavorArrays`] built in
//! - [`CustomizationOrder`]: how the directives of one parameter are ordered
//!
//! # Example
//!
//! ```rust,ignore
//! use specimen_customize::{Frozen, ParameterCustomizationSource};
//!
//! let customization = Frozen::default().customization(&parameter)?;
//! fixture.customize(customization.as_ref());
//! let value = fixture.resolve(&Request::Parameter(parameter))?;
//! assert_eq!(fixture.create(parameter.ty())?, value);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod constructor;
mod error;
mod favor_arrays;
mod freeze;
mod frozen;
mod source;

pub use constructor::ConstructorCustomization;
pub use error::CustomizationError;
pub use favor_arrays::FavorArrays;
pub use freeze::{BindingState, FreezeOnMatch, FrozenBinding};
pub use frozen::Frozen;
pub use source::{CustomizationKind, CustomizationOrder, ParameterCustomizationSource};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
