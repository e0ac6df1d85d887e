use std::fmt;

use crate::error::{Error, Result};

// -----------------------------------------------------------------------------
//   - Optional -
// -----------------------------------------------------------------------------
/// A value that is either *present* (holds exactly one `T`) or *empty*
/// (holds nothing).
///
/// Built through the factory methods, never mutated afterwards: every
/// operation consumes `self` and returns a new container or the payload
/// itself. Absence lives in the type, so there is no null to forget to
/// check for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// Holds exactly one value.
    Present(T),
    /// Holds nothing.
    Empty,
}

impl<T> Optional<T> {
    /// Create an empty container.
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Wrap a value that is known to exist.
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// Strict constructor for nullable input.
    ///
    /// `Some(value)` wraps the value; `None` fails with
    /// [`Error::NullReference`]. Use [`Optional::of_nullable`] when an
    /// absent input should simply produce an empty container.
    pub fn try_of(value: Option<T>) -> Result<Self> {
        match value {
            Some(value) => Ok(Self::Present(value)),
            None => Err(Error::NullReference),
        }
    }

    /// Lenient constructor for nullable input: `Some(value)` wraps the
    /// value, `None` becomes an empty container. Never fails.
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }

    /// Returns true if a value is present.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns true if the container holds nothing.
    ///
    /// Always the negation of [`Optional::is_present`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Extract the value, failing with [`Error::NoSuchElement`] if the
    /// container is empty.
    pub fn get(self) -> Result<T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(Error::NoSuchElement),
        }
    }

    /// Run `action` with the value if one is present; do nothing
    /// otherwise.
    ///
    /// The action runs to completion on the caller's thread before this
    /// returns.
    pub fn if_present(self, action: impl FnOnce(T)) {
        if let Self::Present(value) = self {
            action(value);
        }
    }

    /// The value if present, otherwise `default`.
    ///
    /// `default` is a finished value: whatever expression produced it
    /// ran at the call site whether or not it ends up used. For a
    /// default that should only be computed on demand, use
    /// [`Optional::or_else_get`].
    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    /// The value if present, otherwise whatever `supplier` produces.
    ///
    /// The supplier runs only when the container is empty.
    pub fn or_else_get(self, supplier: impl FnOnce() -> T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => supplier(),
        }
    }

    /// The value if present, otherwise fail with the error produced by
    /// `err`.
    ///
    /// The error comes back exactly as the factory made it, never
    /// wrapped or inspected. The factory runs only when the container
    /// is empty.
    pub fn or_else_throw<E>(self, err: impl FnOnce() -> E) -> Result<T, E> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(err()),
        }
    }

    /// Keep the value only if `predicate` holds for it.
    ///
    /// An empty container stays empty and the predicate never runs.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Empty
                }
            }
            Self::Empty => Self::Empty,
        }
    }

    /// Transform the value, keeping emptiness as is.
    ///
    /// A mapper that itself returns an [`Optional`] produces a nested
    /// `Optional<Optional<U>>`. That nesting is well formed; use
    /// [`Optional::flat_map`] when one layer is wanted.
    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Self::Present(value) => Optional::Present(mapper(value)),
            Self::Empty => Optional::Empty,
        }
    }

    /// Transform with a mapper that already returns an [`Optional`],
    /// handing its result back directly with no extra wrapping.
    pub fn flat_map<U>(self, mapper: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Self::Present(value) => mapper(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Borrow the value as a standard [`Option`].
    #[must_use]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Mutably borrow the value as a standard [`Option`].
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Convert into a standard [`Option`].
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Empty
    }
}

// -----------------------------------------------------------------------------
//   - Conversions -
// -----------------------------------------------------------------------------
impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }
}

// -----------------------------------------------------------------------------
//   - Display -
// -----------------------------------------------------------------------------
impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(f, "Optional[{value}]"),
            Self::Empty => f.write_str("Optional.empty"),
        }
    }
}
