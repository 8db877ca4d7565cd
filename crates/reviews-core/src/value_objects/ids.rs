//! Integer identifiers backed by PostgreSQL `INTEGER`/`SERIAL` columns
//!
//! Each table key gets its own newtype so a product id can never be passed
//! where a review id is expected. All of them serialize as plain JSON
//! numbers and accept either a number or a numeric string on input.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Error when parsing an identifier from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid identifier format")]
    InvalidFormat,
}

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident, $expecting:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(i32);

        impl $name {
            /// Create from a raw column value
            #[inline]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the inner column value
            #[inline]
            pub const fn into_inner(self) -> i32 {
                self.0
            }

            /// Parse from string representation
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                s.trim()
                    .parse::<i32>()
                    .map(Self)
                    .map_err(|_| IdParseError::InvalidFormat)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_i32(self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(IdVisitor($expecting)).map($name)
            }
        }
    };
}

integer_id!(
    /// Primary key of the `review` table
    ReviewId,
    "a review id as integer or numeric string"
);

integer_id!(
    /// Product identifier; products live outside this service
    ProductId,
    "a product id as integer or numeric string"
);

integer_id!(
    /// Key into the external `characteristics` catalog
    CharacteristicId,
    "a characteristic id as integer or numeric string"
);

struct IdVisitor(&'static str);

impl serde::de::Visitor<'_> for IdVisitor {
    type Value = i32;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.0)
    }

    fn visit_i64<E>(self, value: i64) -> Result<i32, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(value).map_err(|_| E::custom("identifier out of range"))
    }

    fn visit_u64<E>(self, value: u64) -> Result<i32, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(value).map_err(|_| E::custom("identifier out of range"))
    }

    fn visit_str<E>(self, value: &str) -> Result<i32, E>
    where
        E: serde::de::Error,
    {
        value
            .trim()
            .parse::<i32>()
            .map_err(|_| E::custom("invalid identifier format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(ReviewId::parse("42").unwrap(), ReviewId::new(42));
        assert_eq!(" 7 ".parse::<ProductId>().unwrap(), ProductId::new(7));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(ReviewId::parse("abc"), Err(IdParseError::InvalidFormat));
        assert_eq!(ProductId::parse(""), Err(IdParseError::InvalidFormat));
        assert!(ReviewId::parse("99999999999").is_err());
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ReviewId::new(12)).unwrap();
        assert_eq!(json, "12");
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let from_number: ProductId = serde_json::from_str("5").unwrap();
        let from_string: ProductId = serde_json::from_str("\"5\"").unwrap();
        assert_eq!(from_number, from_string);

        assert!(serde_json::from_str::<ProductId>("\"five\"").is_err());
        assert!(serde_json::from_str::<ProductId>("4294967296").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CharacteristicId::new(3).to_string(), "3");
    }
}
