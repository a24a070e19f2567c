//! # Catalog State
//!
//! In-memory product catalog, seeded from the catalog source at startup.
//!
//! The catalog is a plain `Mutex<Vec<Product>>` rather than anything
//! keyed: the workshop carries a few dozen products, and commands take
//! a full snapshot for display anyway.

use std::sync::{Mutex, MutexGuard};

use serde::Deserialize;
use tracing::info;

use ovro_core::{CoreError, CoreResult, Product};

/// Fields a cashier can edit on an existing product.
///
/// Stock is signed on the wire so a fat-fingered negative entry
/// deserializes cleanly; it is clamped to zero on apply.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: String,
    pub category: String,
    pub price_poisha: i64,
    pub buy_price_poisha: i64,
    pub stock: i64,
}

/// Tauri-managed product catalog.
#[derive(Debug, Default)]
pub struct CatalogState {
    products: Mutex<Vec<Product>>,
}

impl CatalogState {
    /// Creates an empty catalog. Call [`CatalogState::replace_all`]
    /// once the catalog source has been fetched.
    pub fn new() -> Self {
        CatalogState {
            products: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        match self.products.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Replaces the whole catalog with a freshly fetched product list.
    pub fn replace_all(&self, products: Vec<Product>) {
        let mut guard = self.lock();
        info!(count = products.len(), "Catalog loaded");
        *guard = products;
    }

    /// Returns a snapshot of all products.
    pub fn all(&self) -> Vec<Product> {
        self.lock().clone()
    }

    /// Looks up a single product by id.
    pub fn find(&self, id: &str) -> Option<Product> {
        self.lock().iter().find(|p| p.id == id).cloned()
    }

    /// Adds a product. Used for manual-item entry, where the caller
    /// has already built the product via [`Product::manual`].
    pub fn add(&self, product: Product) {
        self.lock().push(product);
    }

    /// Applies an inventory edit to an existing product.
    ///
    /// Stock is clamped at zero; the data layer does not reject
    /// negative entries outright.
    pub fn update(&self, id: &str, update: ProductUpdate) -> CoreResult<Product> {
        let mut guard = self.lock();
        let product = guard
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        product.name = update.name;
        product.category = update.category;
        product.price_poisha = update.price_poisha;
        product.buy_price_poisha = update.buy_price_poisha;
        product.stock = update.stock.max(0);

        Ok(product.clone())
    }

    /// Removes a product from the catalog.
    pub fn remove(&self, id: &str) -> CoreResult<()> {
        let mut guard = self.lock();
        let before = guard.len();
        guard.retain(|p| p.id != id);

        if guard.len() == before {
            Err(CoreError::ProductNotFound(id.to_string()))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovro_core::Money;

    fn test_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: "Parts".to_string(),
            price_poisha: 10_000,
            buy_price_poisha: 6_000,
            stock: 5,
        }
    }

    #[test]
    fn test_replace_and_find() {
        let state = CatalogState::new();
        state.replace_all(vec![test_product("1"), test_product("2")]);

        assert_eq!(state.all().len(), 2);
        assert!(state.find("2").is_some());
        assert!(state.find("99").is_none());
    }

    #[test]
    fn test_update_clamps_negative_stock() {
        let state = CatalogState::new();
        state.replace_all(vec![test_product("1")]);

        let updated = state
            .update(
                "1",
                ProductUpdate {
                    name: "Renamed".to_string(),
                    category: "Lubricants".to_string(),
                    price_poisha: 20_000,
                    buy_price_poisha: 12_000,
                    stock: -3,
                },
            )
            .unwrap();

        assert_eq!(updated.stock, 0);
        assert_eq!(updated.name, "Renamed");
    }

    #[test]
    fn test_update_unknown_product() {
        let state = CatalogState::new();
        let result = state.update(
            "missing",
            ProductUpdate {
                name: "x".to_string(),
                category: "Parts".to_string(),
                price_poisha: 1,
                buy_price_poisha: 0,
                stock: 0,
            },
        );
        assert!(matches!(result, Err(CoreError::ProductNotFound(_))));
    }

    #[test]
    fn test_remove() {
        let state = CatalogState::new();
        state.replace_all(vec![test_product("1")]);

        state.remove("1").unwrap();
        assert!(state.all().is_empty());
        assert!(state.remove("1").is_err());
    }

    #[test]
    fn test_manual_item_entry() {
        let state = CatalogState::new();
        state.add(Product::manual(
            "Odd Bolt",
            Money::from_poisha(5_000),
            Money::zero(),
        ));

        let all = state.all();
        assert_eq!(all.len(), 1);
        assert!(all[0].id.starts_with("manual-"));
        assert_eq!(all[0].category, "Parts");
    }
}
