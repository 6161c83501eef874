//! String identifiers for storefront records.
//!
//! Demo data uses short numeric strings ("1", "2", ...) for products, reviews
//! and addresses, and formatted numbers for orders ("ORD-2024-004217").

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Catalog product; also keys cart lines together with the variant.
    ProductId
);
string_id!(ReviewId);
string_id!(
    /// Customer, shared by reviews and the account profile.
    UserId
);
string_id!(AddressId);
string_id!(
    /// Order number shown to the customer.
    OrderId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compares_with_str() {
        let id = ProductId::from("4");
        assert_eq!(id, "4");
        assert_eq!(id.as_str(), "4");
        assert_eq!(id.to_string(), "4");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = OrderId::new("ORD-2024-004217");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""ORD-2024-004217""#);

        let back: OrderId = serde_json::from_str(r#""ORD-2024-004217""#).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_ordering_is_lexical() {
        let mut ids = vec![ProductId::new("6"), ProductId::new("10"), ProductId::new("2")];
        ids.sort();
        assert_eq!(ids, vec!["10", "2", "6"]);
    }
}
