//! # Sales Store
//!
//! The single source of truth for products and theme.
//!
//! ## Mutation Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations Flow                                │
//! │                                                                         │
//! │  Caller Action             Store Operation          State Change        │
//! │  ─────────────             ───────────────          ────────────        │
//! │                                                                         │
//! │  Create product ─────────► add_product() ─────────► products.push(p)   │
//! │                                                                         │
//! │  Record/fix sales ───────► update_product() ──────► merge patch        │
//! │                                                                         │
//! │  Remove product ─────────► delete_product() ──────► products.remove(i) │
//! │                                                                         │
//! │  Switch appearance ──────► toggle_theme() ────────► theme.toggle()     │
//! │                                                                         │
//! │  EVERY mutation holds the lock from first read to the persist call:    │
//! │  acquire ─► apply ─► SnapshotFile::save ─► release.                    │
//! │  A mutation is never observable without an attempted persist.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not-Found Policy
//! `update_product` and `delete_product` return [`StoreError::NotFound`]
//! for an unknown id, and guarantee the collection and the file are left
//! exactly as they were. Callers who prefer quiet degradation can match
//! the variant away.
//!
//! ## Persistence-Failure Policy
//! If the write-through fails, the in-memory change stands and the error
//! surfaces to the caller; there is no retry. The worst observable
//! failure is a change that does not survive a restart.

use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{debug, info};
use uuid::Uuid;

use scoop_core::{Product, ProductPatch, SalesTotals, Theme};

use crate::error::{StoreError, StoreResult};
use crate::persist::SnapshotFile;
use crate::snapshot::StoreSnapshot;

/// The persisted product store.
///
/// ## Thread Safety
/// Mutations take `&self` and serialize through one `Mutex`: none of the
/// operations are designed to interleave, and the lock also covers the
/// write-through so saves can never race each other.
///
/// ## Why Not RwLock?
/// Reads clone small data and release immediately; a read/write split
/// would add complexity with no measurable benefit at this scale.
#[derive(Debug)]
pub struct SalesStore {
    state: Mutex<StoreSnapshot>,
    file: SnapshotFile,
}

impl SalesStore {
    /// Opens the store backed by the given snapshot file.
    ///
    /// A missing file starts the store empty with the light theme; a
    /// present-but-corrupt file is an error (never silently discarded).
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let file = SnapshotFile::new(path);
        let snapshot = file.load()?;

        info!(
            path = %file.path().display(),
            products = snapshot.products.len(),
            theme = snapshot.theme.as_str(),
            "Sales store opened"
        );

        Ok(SalesStore {
            state: Mutex::new(snapshot),
            file,
        })
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Owned snapshot of the product sequence, in insertion order.
    pub fn products(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    /// Resolves a single product by id.
    pub fn get_product(&self, id: &str) -> Option<Product> {
        self.lock().find(id).cloned()
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.lock().theme
    }

    /// Aggregate totals over the current catalog.
    ///
    /// Recomputed from scratch on every call; see
    /// [`SalesTotals::for_products`] for the pure form over any slice.
    pub fn totals(&self) -> SalesTotals {
        SalesTotals::for_products(&self.lock().products)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends a fully-formed product to the end of the catalog.
    ///
    /// The caller assigns the id ([`generate_product_id`]) and has already
    /// validated the fields; the store performs no de-duplication check
    /// because v4 ids do not collide in practice.
    pub fn add_product(&self, product: Product) -> StoreResult<()> {
        debug!(id = %product.id, name = %product.name, "Adding product");

        let mut state = self.lock();
        state.products.push(product);
        self.file.save(&state)
    }

    /// Merges a patch into the product with the given id.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The product after the merge
    /// * `Err(StoreError::NotFound)` - No such id; nothing changed,
    ///   nothing persisted
    pub fn update_product(&self, id: &str, patch: ProductPatch) -> StoreResult<Product> {
        debug!(id = %id, "Updating product");

        let mut state = self.lock();
        let product = state
            .find_mut(id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        product.apply_patch(patch);
        let updated = product.clone();

        self.file.save(&state)?;
        Ok(updated)
    }

    /// Removes the product with the given id.
    ///
    /// ## Returns
    /// * `Ok(())` - Exactly one entry removed
    /// * `Err(StoreError::NotFound)` - No such id; nothing changed
    pub fn delete_product(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "Deleting product");

        let mut state = self.lock();
        let index = state
            .position(id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        state.products.remove(index);
        self.file.save(&state)
    }

    /// Flips the theme and returns the new value.
    pub fn toggle_theme(&self) -> StoreResult<Theme> {
        let mut state = self.lock();
        state.theme = state.theme.toggle();
        let theme = state.theme;

        debug!(theme = theme.as_str(), "Theme toggled");
        self.file.save(&state)?;
        Ok(theme)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreSnapshot> {
        self.state.lock().expect("Store mutex poisoned")
    }
}

/// Generates a fresh product id.
///
/// UUID v4: collision-resistant without coordination, unlike the
/// wall-clock tokens this store once received from its callers.
///
/// ## Usage
/// ```rust
/// use scoop_store::generate_product_id;
///
/// let id = generate_product_id();
/// assert_eq!(id.len(), 36);
/// ```
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
