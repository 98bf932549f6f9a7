//! # Config Commands
//!
//! The theme preference rides in the same snapshot document as the
//! catalog, so flipping it is a store mutation like any other.

use tracing::info;

use scoop_store::SalesStore;

use crate::error::AppError;

/// Flips the display theme and reports the new value.
pub fn toggle_theme(store: &SalesStore) -> Result<(), AppError> {
    let theme = store.toggle_theme()?;
    info!(theme = theme.as_str(), "Theme toggled");

    println!("Theme is now {}", theme.as_str());
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use scoop_core::Theme;

    #[test]
    fn test_toggle_flips_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales-tracker.json");

        let store = SalesStore::open(&path).unwrap();
        toggle_theme(&store).unwrap();
        assert_eq!(store.theme(), Theme::Dark);
        drop(store);

        let reopened = SalesStore::open(&path).unwrap();
        assert_eq!(reopened.theme(), Theme::Dark);
    }
}
