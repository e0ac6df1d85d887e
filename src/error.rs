/// Result alias for operations on an [`Optional`](crate::Optional).
///
/// The error parameter defaults to the crate [`Error`] but can carry a
/// caller-supplied type, as it does for
/// [`Optional::or_else_throw`](crate::Optional::or_else_throw).
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure modes of the container.
///
/// Every fallible operation returns one of these synchronously; the
/// container never retries, recovers or logs. Check presence with
/// [`Optional::is_present`](crate::Optional::is_present) or fall back
/// to a default to avoid them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// A null (`None`) input reached the strict constructor.
    #[error("null value where a present value is required")]
    NullReference,
    /// A value was extracted from an empty container.
    #[error("no value present")]
    NoSuchElement,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::NullReference.to_string(),
            "null value where a present value is required"
        );
        assert_eq!(Error::NoSuchElement.to_string(), "no value present");
    }
}
