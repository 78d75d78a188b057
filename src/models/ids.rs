//! Strongly-typed ID wrappers for configuration entries
//!
//! Income streams and expense categories are identified by random UUIDs so
//! that entries added in quick succession never collide.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Check whether a user-supplied reference matches this ID
            ///
            /// Accepts the full UUID, the short display form (`inc-1a2b3c4d`)
            /// or the bare eight-character prefix.
            pub fn matches(&self, reference: &str) -> bool {
                let full = self.0.to_string();
                if reference.eq_ignore_ascii_case(&full) {
                    return true;
                }
                let short = reference.strip_prefix($display_prefix).unwrap_or(reference);
                short.len() == 8 && full[..8].eq_ignore_ascii_case(short)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(IncomeStreamId, "inc-");
define_id!(ExpenseCategoryId, "exp-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = IncomeStreamId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = ExpenseCategoryId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("exp-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_ids_are_unique_in_quick_succession() {
        let ids: Vec<IncomeStreamId> = (0..100).map(|_| IncomeStreamId::new()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_id_serialization() {
        let id = IncomeStreamId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: IncomeStreamId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_matches_short_and_full_forms() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = IncomeStreamId::parse(uuid_str).unwrap();

        assert!(id.matches(uuid_str));
        assert!(id.matches("inc-550e8400"));
        assert!(id.matches("550e8400"));
        assert!(!id.matches("inc-deadbeef"));
        assert!(!id.matches("550e"));
    }
}
