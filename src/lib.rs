#![deny(missing_docs)]
//! A present-or-empty value container.
//!
//! [`Optional`] holds either exactly one value (*present*) or nothing
//! (*empty*) and keeps absence in the type instead of behind a null
//! check:
//!
//! ```
//! use optional::Optional;
//!
//! let port = Optional::of_nullable(None).or_else(8080);
//! assert_eq!(port, 8080);
//!
//! let label = Optional::of(" password ")
//!     .map(str::trim)
//!     .filter(|l| *l == "password");
//! assert!(label.is_present());
//! ```
//!
//! Strict construction and unconditional extraction surface their
//! failure modes as [`Error`] values rather than panics; the defaulted
//! forms ([`Optional::or_else`], [`Optional::or_else_get`],
//! [`Optional::or_else_throw`]) never fail on their own.

pub use crate::error::{Error, Result};
pub use crate::optional::Optional;

mod error;
mod optional;
#[cfg(feature = "serde")]
mod serde;
