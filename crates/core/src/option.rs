//! Value-or-absence wrapper.
//!
//! `Optional<T>` holds exactly one value (`Some`) or nothing (`None`). Unlike
//! `std::option::Option`, its mapping combinators treat a mapper that yields
//! `None` as "no value" and collapse the result, and its checked variants
//! reject a missing option with [`Error::InvalidArgument`].
//!
//! Plain `std::option::Option` is used at the edges wherever a caller may pass
//! "nothing at all": [`option`], [`try_some`], [`Optional::try_flat_map`] and
//! [`Optional::try_flat_or`] all treat `None` there as a null-like input.

use crate::error::{Error, Result};

/// Exactly one value, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// Holds a value fixed at construction.
    Some(T),
    /// Holds nothing; asking for its value fails.
    None,
}

/// Wraps `value` as `Some`, or returns `None` if there is no value.
#[must_use]
pub fn option<T>(value: Option<T>) -> Optional<T> {
    value.map_or(Optional::None, Optional::Some)
}

/// Wraps a value that is known to be present.
#[must_use]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// Wraps a value that must be present.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `value` is `None`.
pub fn try_some<T>(value: Option<T>) -> Result<Optional<T>> {
    value
        .map(Optional::Some)
        .ok_or_else(|| Error::invalid_argument("a value expected"))
}

/// The empty option.
#[must_use]
pub const fn none<T>() -> Optional<T> {
    Optional::None
}

impl<T> Optional<T> {
    /// Returns true if a value is held.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns true if no value is held.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Borrows the held value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValue`] on `None`.
    pub fn get(&self) -> Result<&T> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Error::no_value("option is not set")),
        }
    }

    /// Takes the held value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValue`] on `None`.
    pub fn into_value(self) -> Result<T> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Error::no_value("option is not set")),
        }
    }

    /// Runs `f` with the held value; does nothing on `None`.
    pub fn exec<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = self {
            f(value);
        }
    }

    /// Runs `f` only when no value is held.
    pub fn not_exec<F>(&self, f: F)
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
    }

    /// Maps the held value. A mapper returning `None` produces `None`.
    ///
    /// On `None` the mapper is never called.
    #[must_use]
    pub fn map<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Option<R>,
    {
        match self {
            Self::Some(value) => option(f(value)),
            Self::None => Optional::None,
        }
    }

    /// Replaces the held value by the option the mapper returns.
    #[must_use]
    pub fn flat_map<R, F>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => Optional::None,
        }
    }

    /// Like [`Optional::flat_map`], for mappers that may return no option at all.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the mapper returns `None`.
    pub fn try_flat_map<R, F>(self, f: F) -> Result<Optional<R>>
    where
        F: FnOnce(T) -> Option<Optional<R>>,
    {
        match self {
            Self::Some(value) => {
                f(value).ok_or_else(|| Error::invalid_argument("an option is required"))
            }
            Self::None => Ok(Optional::None),
        }
    }

    /// Keeps a held value; otherwise wraps what `f` produces.
    #[must_use]
    pub fn or<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Self::Some(_) => self,
            Self::None => option(f()),
        }
    }

    /// Keeps a held value; otherwise returns the option `f` produces.
    #[must_use]
    pub fn flat_or<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => f(),
        }
    }

    /// Like [`Optional::flat_or`], for fallbacks that may return no option at all.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `f` is called and returns `None`.
    pub fn try_flat_or<F>(self, f: F) -> Result<Self>
    where
        F: FnOnce() -> Option<Self>,
    {
        match self {
            Self::Some(_) => Ok(self),
            Self::None => f().ok_or_else(|| Error::invalid_argument("an option is required")),
        }
    }

    /// The held value, or `None` as the null sentinel.
    #[must_use]
    pub const fn or_null(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Borrows the held value as an `Optional<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Converts into a std option.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        option(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}
