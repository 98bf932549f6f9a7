//! # scoop-store: Persistence Layer for Scoop
//!
//! The durable home of the product catalog and theme preference.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Data Flow                                 │
//! │                                                                         │
//! │  Startup:                                                               │
//! │    SnapshotFile::load() ──► StoreSnapshot ──► SalesStore                │
//! │    (missing file ⇒ empty catalog, light theme)                          │
//! │                                                                         │
//! │  Every mutation:                                                        │
//! │    lock ──► apply change ──► SnapshotFile::save() ──► unlock            │
//! │                                                                         │
//! │  Every read:                                                            │
//! │    lock ──► clone what was asked for ──► unlock                         │
//! │                                                                         │
//! │  The snapshot document is ONE JSON file; there is no partial write      │
//! │  path and no cross-record consistency to maintain                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`snapshot`] - The persisted document (products + theme)
//! - [`persist`] - File-backed load/save with atomic replacement
//! - [`store`] - The mutating [`SalesStore`] and id generation
//! - [`error`] - Store error types

pub mod error;
pub mod persist;
pub mod snapshot;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use persist::SnapshotFile;
pub use snapshot::StoreSnapshot;
pub use store::{generate_product_id, SalesStore};
