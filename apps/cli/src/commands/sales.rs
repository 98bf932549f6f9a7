//! # Sales Commands
//!
//! Record sales and correct over-counted ones.
//!
//! ## Delta Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  scoop sell / scoop unsell                              │
//! │                                                                         │
//! │  sell <id> [qty]     counter ──► counter + qty                          │
//! │                                                                         │
//! │  unsell <id> [qty]   counter >= qty ?                                   │
//! │                        yes ──► counter - qty                            │
//! │                        no  ──► InsufficientSales, counter UNTOUCHED     │
//! │                                                                         │
//! │  qty defaults to 1 (the listing's quick +/− buttons); any positive     │
//! │  amount covers the detail view's +5/+10 and custom entries.            │
//! │  A rejected removal is rejected WHOLE, never clamped to zero.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use scoop_core::validation::{parse_quantity, validate_sale_quantity};
use scoop_core::{CoreError, ProductPatch};
use scoop_store::SalesStore;

use crate::error::AppError;

/// Records `qty` sales (default 1) against a product.
pub fn sell(store: &SalesStore, args: &[String]) -> Result<(), AppError> {
    let (id, qty) = parse_operands(args, "sell")?;

    let product = store
        .get_product(id)
        .ok_or_else(|| AppError::not_found("Product", id))?;

    let updated = store.update_product(
        id,
        ProductPatch::with_quantity_sold(product.quantity_sold + qty),
    )?;
    info!(id = %id, qty, total = updated.quantity_sold, "Sales recorded");

    println!(
        "Recorded {} sale(s) of {}: {} sold in total",
        qty, updated.name, updated.quantity_sold
    );
    Ok(())
}

/// Removes `qty` previously recorded sales (default 1) from a product.
///
/// Rejected whole when fewer than `qty` sales are recorded; the counter
/// can never go below zero.
pub fn unsell(store: &SalesStore, args: &[String]) -> Result<(), AppError> {
    let (id, qty) = parse_operands(args, "unsell")?;

    let product = store
        .get_product(id)
        .ok_or_else(|| AppError::not_found("Product", id))?;

    if product.quantity_sold < qty {
        return Err(CoreError::InsufficientSales {
            name: product.name,
            recorded: product.quantity_sold,
            requested: qty,
        }
        .into());
    }

    let updated = store.update_product(
        id,
        ProductPatch::with_quantity_sold(product.quantity_sold - qty),
    )?;
    info!(id = %id, qty, total = updated.quantity_sold, "Sales removed");

    println!(
        "Removed {} sale(s) of {}: {} sold in total",
        qty, updated.name, updated.quantity_sold
    );
    Ok(())
}

/// Splits `<id> [qty]`, defaulting the quantity to 1.
fn parse_operands<'a>(args: &'a [String], command: &str) -> Result<(&'a str, u64), AppError> {
    let id = args
        .first()
        .ok_or_else(|| AppError::usage(format!("{command} requires a product id")))?;

    let qty = match args.get(1) {
        Some(raw) => parse_quantity(raw)?,
        None => 1,
    };
    validate_sale_quantity(qty)?;

    Ok((id, qty))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use scoop_core::{Money, Product};

    fn store_with_product(dir: &tempfile::TempDir, quantity_sold: u64) -> SalesStore {
        let store = SalesStore::open(dir.path().join("sales-tracker.json")).unwrap();
        store
            .add_product(Product::new(
                "prod-1",
                "Es Krim Coklat",
                Money::from_rupiah(3000),
                Money::from_rupiah(5000),
                quantity_sold,
            ))
            .unwrap();
        store
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sell_defaults_to_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_product(&dir, 3);

        sell(&store, &strings(&["prod-1"])).unwrap();
        assert_eq!(store.get_product("prod-1").unwrap().quantity_sold, 4);
    }

    #[test]
    fn test_sell_accepts_bulk_quantities() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_product(&dir, 0);

        sell(&store, &strings(&["prod-1", "10"])).unwrap();
        sell(&store, &strings(&["prod-1", "5"])).unwrap();
        assert_eq!(store.get_product("prod-1").unwrap().quantity_sold, 15);
    }

    #[test]
    fn test_unsell_subtracts() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_product(&dir, 10);

        unsell(&store, &strings(&["prod-1", "4"])).unwrap();
        assert_eq!(store.get_product("prod-1").unwrap().quantity_sold, 6);
    }

    #[test]
    fn test_unsell_more_than_recorded_is_rejected_whole() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_product(&dir, 3);

        let err = unsell(&store, &strings(&["prod-1", "5"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientSales);

        // Rejected, not clamped: the counter still reads 3
        assert_eq!(store.get_product("prod-1").unwrap().quantity_sold, 3);
    }

    #[test]
    fn test_unsell_at_zero_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_product(&dir, 0);

        let err = unsell(&store, &strings(&["prod-1"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientSales);
        assert_eq!(store.get_product("prod-1").unwrap().quantity_sold, 0);
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_product(&dir, 3);

        let err = sell(&store, &strings(&["prod-1", "0"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(store.get_product("prod-1").unwrap().quantity_sold, 3);
    }

    #[test]
    fn test_unknown_product_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_product(&dir, 3);

        let err = sell(&store, &strings(&["missing"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
