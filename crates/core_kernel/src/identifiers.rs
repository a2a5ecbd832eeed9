//! Strongly-typed identifiers for domain entities
//!
//! Using newtype wrappers around UUIDs provides type safety and prevents
//! accidental mixing of different identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

// Quotes are the only entities this system identifies; they are ephemeral
// (never persisted) but the id lets a caller correlate request and response.
define_id!(QuoteId, "QTE");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_id_display_carries_prefix() {
        let id = QuoteId::new_v7();
        assert!(id.to_string().starts_with("QTE-"));
    }

    #[test]
    fn test_quote_id_round_trips_with_and_without_prefix() {
        let id = QuoteId::new();

        let parsed: QuoteId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        let bare: QuoteId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(bare, id);
    }

    #[test]
    fn test_v7_ids_carry_version() {
        let id = QuoteId::new_v7();
        assert_eq!(id.as_uuid().get_version_num(), 7);
    }
}
