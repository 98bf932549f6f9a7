//! # Snapshot Document
//!
//! The single persisted record holding the whole application state.
//!
//! ## On-Disk Shape
//! ```json
//! {
//!   "products": [
//!     {
//!       "id": "550e8400-e29b-41d4-a716-446655440000",
//!       "name": "Es Krim Coklat",
//!       "costPrice": 3000,
//!       "sellingPrice": 5000,
//!       "quantitySold": 4,
//!       "createdAt": "2025-11-02T09:15:00Z",
//!       "updatedAt": "2025-11-02T11:40:00Z"
//!     }
//!   ],
//!   "theme": "light"
//! }
//! ```
//!
//! Insertion order of `products` is the display order and is preserved
//! verbatim across save/load. Ids are unique by construction (UUID v4,
//! generated at the creation site).

use serde::{Deserialize, Serialize};

use scoop_core::{Product, Theme};

/// Everything the application persists, as one serializable unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    /// Ordered product catalog. Append-at-end on creation.
    #[serde(default)]
    pub products: Vec<Product>,

    /// Display preference, independent of product data.
    #[serde(default)]
    pub theme: Theme,
}

impl StoreSnapshot {
    /// Finds a product by id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Finds a product by id, mutably.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Index of the product with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
