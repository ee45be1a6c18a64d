//! Specimen Kernel
//!
//! The generation side of parameter resolution:
//!
//! - [`TypeRef`]: immutable type model (base class, interfaces, constructors, members)
//! - [`Request`]: what is being asked for
//! - [`Specimen`]: what was produced
//! - [`Fixture`]: the generation context, an ordered chain of
//!   [`SpecimenBuilder`] stages in front of a default engine
//!
//! # Example
//!
//! ```rust,ignore
//! use specimen_kernel::{Fixture, TypeInfo, TypeRef};
//!
//! let int = TypeRef::int();
//! let order = TypeInfo::class("Order")
//!     .constructor([("id", &int)])
//!     .build()?;
//!
//! let fixture = Fixture::new();
//! let value = fixture.create(&order)?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod construction;
mod engine;
mod error;
mod fixture;
mod request;
mod specimen;
mod types;

pub use config::{FixtureConfig, DEFAULT_REPEAT_COUNT};
pub use construction::{
    construct_with, ArrayFavoringConstructorQuery, ConstructorQuery, ModestConstructorQuery,
};
pub use error::GenerationError;
pub use fixture::{ChainSnapshot, Customization, Fixture, Pipeline, SpecimenBuilder};
pub use request::Request;
pub use specimen::{Instance, Specimen};
pub use types::{Constructor, Member, MemberInfo, ParameterInfo, TypeBuilder, TypeInfo, TypeKind, TypeRef};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
