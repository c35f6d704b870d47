//! Newtype IDs for type-safe entity references.
//!
//! Shopify identifies resources by opaque global ID strings
//! (e.g., `gid://shopify/Product/123`). The `define_gid!` macro creates
//! type-safe wrappers around those strings so a product ID can never be
//! handed to an operation expecting a variant ID. The GID is never parsed
//! or inspected - it is owned by the upstream platform and only ever
//! round-tripped.

/// Macro to define a type-safe GID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_string()`
/// - `From<String>`, `From<&str>`, and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use merchdesk_core::define_gid;
/// define_gid!(ProductId);
/// define_gid!(VariantId);
///
/// let product_id = ProductId::new("gid://shopify/Product/123");
/// let variant_id = VariantId::new("gid://shopify/ProductVariant/456");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = variant_id;
/// ```
#[macro_export]
macro_rules! define_gid {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a GID string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying GID string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the GID string.
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_gid!(ProductId);
define_gid!(VariantId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_gid_display_round_trips_opaque_string() {
        let id = ProductId::new("gid://shopify/Product/123");
        assert_eq!(id.to_string(), "gid://shopify/Product/123");
        assert_eq!(id.as_str(), "gid://shopify/Product/123");
    }

    #[test]
    fn test_gid_serde_transparent() {
        let id = VariantId::new("gid://shopify/ProductVariant/456");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"gid://shopify/ProductVariant/456\"");

        let back: VariantId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_gid_types_are_distinct() {
        // Same underlying string, different types - equality only compiles
        // within a single type.
        let product = ProductId::new("gid://shopify/Product/1");
        let same = ProductId::from("gid://shopify/Product/1");
        assert_eq!(product, same);
    }
}
