//! Specimen Matching
//!
//! Decides which generation requests count as "the same thing" as a
//! frozen parameter.
//!
//! - [`Criterion`]: a reference value plus an [`Equivalence`]
//! - [`RequestSpec`]: composable predicates over [`Request`](specimen_kernel::Request)
//! - [`Matching`]: independently toggled criteria
//! - [`FilterBuilder`]: flags + target parameter -> one composite predicate
//!
//! # Example
//!
//! ```rust,ignore
//! use specimen_matching::{FilterBuilder, Matching};
//!
//! let filter = FilterBuilder::new(Matching::EXACT_TYPE | Matching::PARAMETER_NAME)
//!     .for_parameter(&parameter);
//! assert!(filter.is_satisfied_by(&Request::of_type(parameter.ty())));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod criterion;
mod filter;
mod specification;

pub use criterion::{matches, Criterion, DerivesFrom, Equivalence, ExactEquality, IgnoreCase};
pub use filter::{FilterBuilder, Matching};
pub use specification::{RequestSpec, TypeAndName};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
