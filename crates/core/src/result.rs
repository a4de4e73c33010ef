//! Extension traits bridging std `Option`/`Result` and izedio types.
//!
//! These keep call sites free of `unwrap`/`expect`: a missing value turns
//! into an [`Error`] or an [`Optional`] instead of a panic.

use crate::error::{Error, Result};
use crate::option::{option, Optional};

/// Extension trait for std `Option`.
pub trait OptionExt<T> {
    /// Converts into an [`Optional`].
    fn into_optional(self) -> Optional<T>;

    /// Converts into a [`Result`], reporting a missing value as an invalid argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] carrying `reason` when `self` is `None`.
    fn ok_or_invalid(self, reason: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn into_optional(self) -> Optional<T> {
        option(self)
    }

    fn ok_or_invalid(self, reason: &str) -> Result<T> {
        self.ok_or_else(|| Error::invalid_argument(reason))
    }
}

/// Extension trait for izedio results.
pub trait ResultExt<T> {
    /// Converts into an [`Optional`], logging the error if present.
    fn into_optional_logged(self) -> Optional<T>;

    /// Inspect the error without consuming the Result.
    #[must_use]
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_optional_logged(self) -> Optional<T> {
        match self {
            Ok(value) => Optional::Some(value),
            Err(e) => {
                tracing::error!("Operation failed: {}", e);
                Optional::None
            }
        }
    }

    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_into_optional() {
        assert_eq!(Some(42).into_optional(), Optional::Some(42));
        assert_eq!(None::<i32>.into_optional(), Optional::None);
    }

    #[test]
    fn test_option_ok_or_invalid() {
        assert_eq!(Some(1).ok_or_invalid("listener expected"), Ok(1));
        assert_eq!(
            None::<i32>.ok_or_invalid("listener expected"),
            Err(Error::invalid_argument("listener expected"))
        );
    }

    #[test]
    fn test_result_into_optional_logged() {
        let ok: Result<i32> = Ok(42);
        assert_eq!(ok.into_optional_logged(), Optional::Some(42));

        let err: Result<i32> = Err(Error::no_value("missing"));
        assert!(err.into_optional_logged().is_none());
    }

    #[test]
    fn test_result_inspect_error() {
        let mut seen = None;
        let result: Result<i32> = Err(Error::illegal_state("done"));
        let result = result.inspect_error(|e| seen = Some(e.clone()));
        assert!(result.is_err());
        assert_eq!(seen, Some(Error::illegal_state("done")));
    }
}
