//! # Cart State
//!
//! The server-held shopping cart with an on-disk snapshot.
//!
//! ## Persistence Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Persistence                                     │
//! │                                                                         │
//! │  startup ──► restore() ──► read cart.json ──► Cart (or empty)          │
//! │                                                                         │
//! │  mutation ──► with_cart_mut(f) ──► f(&mut cart) ──► write cart.json    │
//! │                                                                         │
//! │  A failed snapshot write is logged and ignored: the in-memory cart      │
//! │  is authoritative for the running process, the file only survives       │
//! │  restarts.                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! `Arc<Mutex<Cart>>` gives each request exclusive access for the duration
//! of its closure. Cart operations are quick, so a Mutex over RwLock keeps
//! things simple.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;
use tracing::{debug, warn};

use atelier_core::Cart;

const SNAPSHOT_FILE: &str = "cart.json";

/// Shared cart state.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
    snapshot_path: Option<PathBuf>,
}

impl CartState {
    /// Restores the cart from its on-disk snapshot, or starts empty.
    pub fn restore() -> Self {
        let snapshot_path = snapshot_path();
        let cart = snapshot_path
            .as_deref()
            .and_then(|path| match std::fs::read_to_string(path) {
                Ok(json) => match serde_json::from_str::<Cart>(&json) {
                    Ok(cart) => {
                        debug!(items = cart.item_count(), "Restored cart snapshot");
                        Some(cart)
                    }
                    Err(error) => {
                        warn!(%error, "Cart snapshot unreadable, starting empty");
                        None
                    }
                },
                Err(_) => None,
            })
            .unwrap_or_default();

        CartState {
            cart: Arc::new(Mutex::new(cart)),
            snapshot_path,
        }
    }

    /// Creates a cart with no snapshot file (tests).
    pub fn in_memory() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
            snapshot_path: None,
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(|e| e.into_inner());
        f(&cart)
    }

    /// Executes a function with write access to the cart, then refreshes
    /// the on-disk snapshot.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(|e| e.into_inner());
        let result = f(&mut cart);
        self.write_snapshot(&cart);
        result
    }

    fn write_snapshot(&self, cart: &Cart) {
        let Some(path) = self.snapshot_path.as_deref() else {
            return;
        };

        let json = match serde_json::to_string(cart) {
            Ok(json) => json,
            Err(error) => {
                warn!(%error, "Cart snapshot serialization failed");
                return;
            }
        };

        if let Err(error) = std::fs::write(path, json) {
            warn!(%error, path = %path.display(), "Cart snapshot write failed");
        }
    }
}

/// Resolves the snapshot file inside the platform app-data directory,
/// creating the directory if needed.
fn snapshot_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("com", "atelier", "storefront")?;
    let data_dir = dirs.data_dir();

    if let Err(error) = std::fs::create_dir_all(data_dir) {
        warn!(%error, dir = %data_dir.display(), "Cannot create app-data dir, cart will not persist");
        return None;
    }

    Some(data_dir.join(SNAPSHOT_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::Product;
    use chrono::Utc;

    fn sample_product() -> Product {
        Product {
            id: "p-1".to_string(),
            slug: "atlas-armchair".to_string(),
            name: "Atlas Armchair".to_string(),
            collection: "Wrought".to_string(),
            collection_slug: "wrought".to_string(),
            category: "Seating".to_string(),
            category_slug: "seating".to_string(),
            price_cents: 24_900,
            exchange_rate_scaled: 150_000,
            description: String::new(),
            long_description: String::new(),
            material: None,
            color: None,
            dimensions: None,
            weight: None,
            finish: None,
            images: vec![],
            featured: false,
            product_details: None,
            shipping_info: None,
            returns_info: None,
            homepage_title: None,
            homepage_subtitle: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_in_memory_cart_mutation() {
        let state = CartState::in_memory();
        let product = sample_product();

        state.with_cart_mut(|cart| cart.add_item(&product, 2));

        let subtotal = state.with_cart(|cart| cart.subtotal_cents());
        assert_eq!(subtotal, 49_800);
    }

    #[test]
    fn test_clones_share_the_same_cart() {
        let state = CartState::in_memory();
        let clone = state.clone();

        state.with_cart_mut(|cart| cart.add_item(&sample_product(), 1));

        assert_eq!(clone.with_cart(|cart| cart.total_quantity()), 1);
    }
}
