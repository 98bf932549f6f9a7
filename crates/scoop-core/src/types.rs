//! # Domain Types
//!
//! Core domain types used throughout Scoop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductPatch   │   │     Theme       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  name?          │   │  Light          │       │
//! │  │  name           │   │  cost_price?    │   │  Dark           │       │
//! │  │  cost_price     │   │  selling_price? │   └─────────────────┘       │
//! │  │  selling_price  │   │  quantity_sold? │                             │
//! │  │  quantity_sold  │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! Everything here serializes camelCase because the persisted snapshot
//! document uses the JS-style field names (`costPrice`, `quantitySold`).
//! Fields that older documents omitted carry serde defaults so arithmetic
//! downstream never guards against an absent value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalog entry: one sellable ice-cream product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4). Assigned at creation, immutable,
    /// never reused.
    pub id: String,

    /// Display name shown on the listing and detail views.
    pub name: String,

    /// What one unit costs the vendor. Zero when never entered.
    #[serde(default)]
    pub cost_price: Money,

    /// What one unit sells for.
    pub selling_price: Money,

    /// Running counter of units sold. Unsigned: the counter can never
    /// hold a negative value, operations reject deltas that would.
    #[serde(default)]
    pub quantity_sold: u64,

    /// When the product was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a product with fresh timestamps.
    ///
    /// The caller supplies the id (see `scoop_store::generate_product_id`)
    /// and an already-validated, trimmed name.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cost_price: Money,
        selling_price: Money,
        quantity_sold: u64,
    ) -> Self {
        let now = Utc::now();
        Product {
            id: id.into(),
            name: name.into(),
            cost_price,
            selling_price,
            quantity_sold,
            created_at: now,
            updated_at: now,
        }
    }

    /// Margin on a single unit: selling price minus cost price.
    ///
    /// May be negative when a product sells below cost.
    #[inline]
    pub fn profit_per_unit(&self) -> Money {
        self.selling_price - self.cost_price
    }

    /// Revenue this product has brought in: quantity sold × selling price.
    #[inline]
    pub fn revenue(&self) -> Money {
        self.selling_price.multiply_quantity(self.quantity_sold)
    }

    /// Profit this product has brought in: quantity sold × profit per unit.
    #[inline]
    pub fn profit(&self) -> Money {
        self.profit_per_unit().multiply_quantity(self.quantity_sold)
    }

    /// Merges a patch into this product, leaving unspecified fields
    /// unchanged, and bumps `updated_at`.
    pub fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(cost_price) = patch.cost_price {
            self.cost_price = cost_price;
        }
        if let Some(selling_price) = patch.selling_price {
            self.selling_price = selling_price;
        }
        if let Some(quantity_sold) = patch.quantity_sold {
            self.quantity_sold = quantity_sold;
        }
        self.updated_at = Utc::now();
    }
}

// =============================================================================
// Product Patch
// =============================================================================

/// A partial update: only the fields present are merged into the product.
///
/// ## Usage
/// ```rust
/// use scoop_core::types::ProductPatch;
///
/// // Record two more sales, touch nothing else
/// let patch = ProductPatch {
///     quantity_sold: Some(5),
///     ..ProductPatch::default()
/// };
/// assert!(patch.name.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub cost_price: Option<Money>,
    pub selling_price: Option<Money>,
    pub quantity_sold: Option<u64>,
}

impl ProductPatch {
    /// Patch that sets the sold counter to an absolute value.
    ///
    /// The sale-recording flow reads the current counter, applies the
    /// delta, then writes the result back through this patch.
    pub fn with_quantity_sold(quantity_sold: u64) -> Self {
        ProductPatch {
            quantity_sold: Some(quantity_sold),
            ..ProductPatch::default()
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// The two-valued display preference, persisted alongside the products.
///
/// Independent of product data; it rides in the same snapshot document
/// so one load restores the whole application state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light backgrounds, dark text.
    #[default]
    Light,
    /// Dark backgrounds, light text.
    Dark,
}

impl Theme {
    /// Flips between the two values. Toggling twice is the identity.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The lowercase wire/display name.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product() -> Product {
        Product::new(
            "test-id",
            "Es Krim Coklat",
            Money::from_rupiah(3000),
            Money::from_rupiah(5000),
            4,
        )
    }

    #[test]
    fn test_derived_figures() {
        let product = test_product();
        assert_eq!(product.profit_per_unit().rupiah(), 2000);
        assert_eq!(product.revenue().rupiah(), 20000);
        assert_eq!(product.profit().rupiah(), 8000);
    }

    #[test]
    fn test_negative_profit_per_unit() {
        let mut product = test_product();
        product.cost_price = Money::from_rupiah(6000);
        assert_eq!(product.profit_per_unit().rupiah(), -1000);
        assert_eq!(product.profit().rupiah(), -4000);
    }

    #[test]
    fn test_apply_patch_merges_only_given_fields() {
        let mut product = test_product();
        let before = product.clone();

        product.apply_patch(ProductPatch::with_quantity_sold(9));

        assert_eq!(product.quantity_sold, 9);
        // Everything else untouched
        assert_eq!(product.id, before.id);
        assert_eq!(product.name, before.name);
        assert_eq!(product.cost_price, before.cost_price);
        assert_eq!(product.selling_price, before.selling_price);
        assert_eq!(product.created_at, before.created_at);
    }

    #[test]
    fn test_apply_patch_bumps_updated_at() {
        let mut product = test_product();
        let before = product.updated_at;
        product.apply_patch(ProductPatch {
            name: Some("Es Krim Vanila".to_string()),
            ..ProductPatch::default()
        });
        assert_eq!(product.name, "Es Krim Vanila");
        assert!(product.updated_at >= before);
    }

    #[test]
    fn test_theme_toggle_is_involutive() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        // Odd number of toggles flips exactly once
        assert_eq!(Theme::Dark.toggle().toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_theme_default_and_names() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
    }

    #[test]
    fn test_product_wire_shape_is_camel_case() {
        let product = test_product();
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("costPrice").is_some());
        assert!(json.get("sellingPrice").is_some());
        assert!(json.get("quantitySold").is_some());
        assert!(json.get("cost_price").is_none());
    }

    #[test]
    fn test_product_tolerates_missing_optional_fields() {
        // Documents written before cost tracking carried neither costPrice
        // nor quantitySold nor timestamps
        let json = r#"{"id":"1700000000000","name":"Es Krim Vanila","sellingPrice":10000}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.cost_price, Money::zero());
        assert_eq!(product.quantity_sold, 0);
        assert_eq!(product.selling_price.rupiah(), 10000);
    }
}
