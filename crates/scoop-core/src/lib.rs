//! # scoop-core: Pure Business Logic for Scoop
//!
//! Scoop is a single-vendor ice-cream sales tracker. This crate is its
//! **heart**: every rule about products, money, and totals lives here as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Scoop Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     apps/cli (scoop binary)                     │   │
//! │  │     add ──► list ──► show ──► sell/unsell ──► delete ──► theme  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  scoop-store (Persistence Layer)                │   │
//! │  │          SalesStore, snapshot document, JSON file I/O           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ scoop-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  totals   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │SalesTotals│  │   rules   │  │   │
//! │  │   │   Theme   │  │  Rupiah   │  │  figures  │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILE SYSTEM • NO TERMINAL • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductPatch, Theme)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`totals`] - Aggregation over a product snapshot
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation and input parsing
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system, network, terminal access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole Rupiah (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use scoop_core::money::Money;
//! use scoop_core::totals::SalesTotals;
//!
//! // Create money from whole Rupiah (never from floats!)
//! let price = Money::from_rupiah(5000); // Rp 5.000
//!
//! let totals = SalesTotals::for_products(&[]);
//! assert_eq!(totals.total_items_sold, 0);
//! assert!(totals.total_revenue.is_zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use scoop_core::Money` instead of
// `use scoop_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use totals::SalesTotals;
pub use types::{Product, ProductPatch, Theme};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
///
/// ## Business Reason
/// Keeps names renderable on a single listing row. Can be made
/// configurable in future versions.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum quantity accepted in a single sale recording.
///
/// ## Business Reason
/// Prevents accidental over-recording (e.g., typing 1000 instead of 10).
/// A street vendor does not move a thousand cones in one transaction.
pub const MAX_SALE_QUANTITY: u64 = 999;
