//! Serde support, enabled with the `serde` feature.
//!
//! On the wire an [`Optional`] is indistinguishable from the matching
//! [`Option`]: a present value serializes as the bare value, an empty
//! container as null. Deserialization accepts whatever `Option<T>`
//! accepts and maps `None` to empty, the same rule as
//! [`Optional::of_nullable`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Optional;

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_ref() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod test {
    use crate::Optional;

    #[test]
    fn present_serializes_as_the_bare_value() {
        let json = serde_json::to_string(&Optional::of(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn empty_serializes_as_null() {
        let json = serde_json::to_string(&Optional::<i32>::empty()).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn round_trip() {
        let present: Optional<String> = serde_json::from_str("\"john\"").unwrap();
        assert_eq!(present, Optional::of("john".to_string()));

        let empty: Optional<String> = serde_json::from_str("null").unwrap();
        assert!(empty.is_empty());
    }
}
