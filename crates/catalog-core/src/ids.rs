//! Typed ID wrappers for type safety across the catalog.
//!
//! The store assigns integer row ids. These newtypes keep an item id from
//! being used where a category id is expected.

use serde::{Deserialize, Serialize};

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw row id.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// The raw row id as stored in the database.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }
    };
}

row_id!(
    /// Identifier of a catalog item.
    ItemId
);

row_id!(
    /// Identifier of a category.
    CategoryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse() {
        let id = ItemId::new(12);
        assert_eq!(id.to_string(), "12");
        assert_eq!("12".parse::<ItemId>().unwrap(), id);
    }

    #[test]
    fn parse_rejects_non_integer() {
        assert!("abc".parse::<ItemId>().is_err());
        assert!("1.5".parse::<CategoryId>().is_err());
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&CategoryId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(), 3);
    }
}
