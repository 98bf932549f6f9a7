//! # Totals Module
//!
//! Aggregation over a product snapshot.
//!
//! ## Recompute, Don't Cache
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Aggregation Strategy                               │
//! │                                                                         │
//! │  Snapshot of products ──► single linear pass ──► SalesTotals           │
//! │                                                                         │
//! │  • No cached totals to invalidate                                      │
//! │  • No incremental maintenance to get wrong                             │
//! │  • Sums are commutative, so iteration order never matters              │
//! │                                                                         │
//! │  A street vendor's catalog is tens of products; recomputing on         │
//! │  every query is O(n) over n you can count on your hands                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Product;

/// Aggregate figures across the full product collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTotals {
    /// Total units sold across every product.
    pub total_items_sold: u64,

    /// Total revenue: Σ (selling price × quantity sold).
    pub total_revenue: Money,
}

impl SalesTotals {
    /// Computes totals over a product sequence in one pass.
    ///
    /// Pure: reads only the slice it is given, never ambient state.
    ///
    /// ## Example
    /// ```rust
    /// use scoop_core::SalesTotals;
    ///
    /// let totals = SalesTotals::for_products(&[]);
    /// assert_eq!(totals.total_items_sold, 0);
    /// assert!(totals.total_revenue.is_zero());
    /// ```
    pub fn for_products(products: &[Product]) -> Self {
        products.iter().fold(SalesTotals::default(), |acc, p| {
            SalesTotals {
                total_items_sold: acc.total_items_sold + p.quantity_sold,
                total_revenue: acc.total_revenue + p.revenue(),
            }
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, selling_price: i64, quantity_sold: u64) -> Product {
        Product::new(
            format!("id-{name}"),
            name,
            Money::zero(),
            Money::from_rupiah(selling_price),
            quantity_sold,
        )
    }

    #[test]
    fn test_empty_collection_totals_are_zero() {
        let totals = SalesTotals::for_products(&[]);
        assert_eq!(totals.total_items_sold, 0);
        assert_eq!(totals.total_revenue, Money::zero());
    }

    #[test]
    fn test_totals_sum_across_products() {
        let products = vec![product("A", 10000, 3), product("B", 5000, 2)];

        let totals = SalesTotals::for_products(&products);
        assert_eq!(totals.total_items_sold, 5);
        assert_eq!(totals.total_revenue.rupiah(), 40000);
    }

    #[test]
    fn test_unsold_products_contribute_nothing() {
        let products = vec![product("A", 10000, 0), product("B", 5000, 2)];

        let totals = SalesTotals::for_products(&products);
        assert_eq!(totals.total_items_sold, 2);
        assert_eq!(totals.total_revenue.rupiah(), 10000);
    }

    #[test]
    fn test_totals_are_order_independent() {
        let mut products = vec![product("A", 10000, 3), product("B", 5000, 2)];
        let forward = SalesTotals::for_products(&products);
        products.reverse();
        assert_eq!(SalesTotals::for_products(&products), forward);
    }
}
