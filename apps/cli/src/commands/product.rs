//! # Product Commands
//!
//! Create, list, inspect, and delete catalog entries.
//!
//! ## Create Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       scoop add                                         │
//! │                                                                         │
//! │  scoop add "Es Krim Coklat" 5000 --cost 3000                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_product_name ── empty? ──► "name is required", store          │
//! │       │                              untouched                          │
//! │       ▼                                                                 │
//! │  parse_price ── negative/non-numeric? ──► rejected, store untouched     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Product::new(generate_product_id(), …) ──► store.add_product           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  appended at the end of the listing, persisted                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use tracing::info;

use scoop_core::validation::{parse_price, parse_quantity, validate_product_name};
use scoop_core::{Money, Product};
use scoop_store::{generate_product_id, SalesStore};

use crate::error::AppError;

/// Creates a product and appends it to the catalog.
///
/// ## Arguments
/// `<name> <selling-price> [--cost <price>] [--sold <qty>]`
///
/// Validation happens entirely here; the store is only called with a
/// fully-formed product.
pub fn add(store: &SalesStore, args: &[String]) -> Result<(), AppError> {
    let mut positionals: Vec<&str> = Vec::new();
    let mut cost_raw: Option<&str> = None;
    let mut sold_raw: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--cost" | "-c" => {
                cost_raw = Some(flag_value(args, i, "--cost")?);
                i += 2;
            }
            "--sold" | "-s" => {
                sold_raw = Some(flag_value(args, i, "--sold")?);
                i += 2;
            }
            other => {
                positionals.push(other);
                i += 1;
            }
        }
    }

    let &[name_raw, selling_raw] = positionals.as_slice() else {
        return Err(AppError::usage(
            "add requires <name> and <selling-price> (see scoop --help)",
        ));
    };

    let name = validate_product_name(name_raw)?;
    let selling_price = parse_price(selling_raw)?;
    let cost_price = match cost_raw {
        Some(raw) => parse_price(raw)?,
        None => Money::zero(),
    };
    let quantity_sold = match sold_raw {
        Some(raw) => parse_quantity(raw)?,
        None => 0,
    };

    let product = Product::new(
        generate_product_id(),
        name,
        cost_price,
        selling_price,
        quantity_sold,
    );
    let id = product.id.clone();
    let label = product.name.clone();

    store.add_product(product)?;
    info!(id = %id, "Product created");

    println!("Added {} at {} (id {})", label, selling_price, id);
    Ok(())
}

/// Renders the catalog with per-product revenue and the aggregate totals.
pub fn list(store: &SalesStore) -> Result<(), AppError> {
    let products = store.products();

    if products.is_empty() {
        println!("No products yet. Add your first product to start tracking sales!");
        return Ok(());
    }

    println!("Products");
    for product in &products {
        println!("  {}  [{}]", product.name, product.id);
        println!(
            "      price {}   sold {}   revenue {}",
            product.selling_price,
            product.quantity_sold,
            product.revenue()
        );
    }

    let totals = store.totals();
    println!();
    println!("Items sold:    {}", totals.total_items_sold);
    println!("Total revenue: {}", totals.total_revenue);
    Ok(())
}

/// Shows one product in full, with its derived figures.
pub fn show(store: &SalesStore, args: &[String]) -> Result<(), AppError> {
    let id = args
        .first()
        .ok_or_else(|| AppError::usage("show requires a product id"))?;

    let product = store
        .get_product(id)
        .ok_or_else(|| AppError::not_found("Product", id))?;

    println!("{}", product.name);
    println!("  id              {}", product.id);
    println!(
        "  added           {}",
        product.created_at.format("%Y-%m-%d %H:%M")
    );
    println!("  cost price      {}", product.cost_price);
    println!("  selling price   {}", product.selling_price);
    println!("  profit per unit {}", product.profit_per_unit());
    println!("  quantity sold   {}", product.quantity_sold);
    println!("  total revenue   {}", product.revenue());
    println!("  total profit    {}", product.profit());
    Ok(())
}

/// Deletes a product after an explicit confirmation step.
///
/// ## Arguments
/// `<id> [--yes]`, where `--yes` skips the interactive prompt.
pub fn delete(store: &SalesStore, args: &[String]) -> Result<(), AppError> {
    let mut id: Option<&str> = None;
    let mut assume_yes = false;

    for arg in args {
        match arg.as_str() {
            "--yes" | "-y" => assume_yes = true,
            other => id = Some(other),
        }
    }

    let id = id.ok_or_else(|| AppError::usage("delete requires a product id"))?;

    // Resolve first so the confirmation can name the product, and so an
    // unknown id fails before any prompt
    let product = store
        .get_product(id)
        .ok_or_else(|| AppError::not_found("Product", id))?;

    if !assume_yes && !confirm(&format!(
        "Delete \"{}\"? This action cannot be undone. [y/N] ",
        product.name
    ))? {
        println!("Cancelled.");
        return Ok(());
    }

    store.delete_product(id)?;
    info!(id = %id, "Product deleted");

    println!("Deleted {}", product.name);
    Ok(())
}

/// Prompts on stdout and reads a single y/N line from stdin.
fn confirm(prompt: &str) -> Result<bool, AppError> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|e| AppError::internal(format!("terminal I/O failed: {e}")))?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| AppError::internal(format!("terminal I/O failed: {e}")))?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// Returns the value following a flag, or a usage error.
fn flag_value<'a>(args: &'a [String], index: usize, flag: &str) -> Result<&'a str, AppError> {
    args.get(index + 1)
        .map(String::as_str)
        .ok_or_else(|| AppError::usage(format!("{flag} requires a value")))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn open_store(dir: &tempfile::TempDir) -> SalesStore {
        SalesStore::open(dir.path().join("sales-tracker.json")).unwrap()
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_creates_trimmed_product() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        add(&store, &strings(&["  Es Krim Coklat ", "5000", "--cost", "3000"])).unwrap();

        let products = store.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Es Krim Coklat");
        assert_eq!(products[0].selling_price.rupiah(), 5000);
        assert_eq!(products[0].cost_price.rupiah(), 3000);
        assert_eq!(products[0].quantity_sold, 0);
    }

    #[test]
    fn test_add_rejects_empty_name_before_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let err = add(&store, &strings(&["   ", "5000"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_add_rejects_bad_price_before_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let err = add(&store, &strings(&["Es Krim Vanila", "-5000"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add(&store, &strings(&["Es Krim Vanila", "murah"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(store.products().is_empty());
    }

    #[test]
    fn test_add_requires_both_operands() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let err = add(&store, &strings(&["Es Krim Vanila"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::Usage);

        let err = add(&store, &strings(&["Es Krim Vanila", "5000", "--cost"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::Usage);
    }

    #[test]
    fn test_delete_with_yes_removes_product() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        add(&store, &strings(&["Es Krim Coklat", "5000"])).unwrap();
        let id = store.products()[0].id.clone();

        delete(&store, &strings(&[&id, "--yes"])).unwrap();
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let err = delete(&store, &strings(&["missing", "--yes"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_show_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        let err = show(&store, &strings(&["missing"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
