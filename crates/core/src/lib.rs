//! Core types for izedio primitives.
//!
//! - [`Error`]/[`Result`]: the failure kinds raised by option, bus and future misuse
//! - [`Optional`]: a value-or-absence wrapper with collapsing combinators
//! - [`OptionExt`]/[`ResultExt`]: bridges from std `Option`/`Result`
//!
//! # Example
//!
//! ```rust
//! use izedio_core::{option, some, Optional};
//!
//! let name = option(Some("izedio")).map(|s| Some(s.len()));
//! assert_eq!(name, some(6));
//!
//! let missing: Optional<&str> = option(None);
//! assert_eq!(missing.or(|| Some("fallback")).get(), Ok(&"fallback"));
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

pub mod error;
pub mod option;
pub mod result;

pub use error::{Error, Result};
pub use option::{none, option, some, try_some, Optional};
pub use result::{OptionExt, ResultExt};
