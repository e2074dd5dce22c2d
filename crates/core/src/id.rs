//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

/// Identifier of a store (unique within a chain).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(u32);

macro_rules! impl_int_newtype {
    ($t:ty) => {
        impl $t {
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub const fn value(self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u32> for $t {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_int_newtype!(ProductId);
impl_int_newtype!(StoreId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_as_plain_integers() {
        assert_eq!(ProductId::new(12).to_string(), "12");
        assert_eq!(StoreId::new(1).to_string(), "1");
    }

    #[test]
    fn ids_round_trip_through_u32() {
        let id: ProductId = 9u32.into();
        assert_eq!(u32::from(id), 9);
        assert_eq!(id, ProductId::new(9));
    }
}
