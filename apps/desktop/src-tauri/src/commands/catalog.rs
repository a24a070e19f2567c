//! # Catalog Commands
//!
//! Tauri commands for catalog browsing, manual-item entry, and
//! inventory edits.

use tauri::State;
use tracing::{debug, info};

use ovro_core::{validation, Product};

use crate::error::ApiError;
use crate::state::{CatalogState, ProductUpdate};

/// Returns the full product catalog.
#[tauri::command]
pub fn get_products(catalog: State<'_, CatalogState>) -> Vec<Product> {
    debug!("get_products command");
    catalog.all()
}

/// Creates a one-off manual item and adds it to the catalog.
///
/// Manual items cover parts the shop sells but never catalogued:
/// they get a generated `manual-<uuid>` id, the "Parts" category,
/// and a sentinel stock of 999.
///
/// ## Arguments
/// * `name` - Item name as entered
/// * `price` - Sell price in taka, as entered
/// * `buy_price` - Cost price in taka, as entered (may be empty)
///
/// ## Returns
/// The created product
#[tauri::command]
pub fn add_manual_item(
    catalog: State<'_, CatalogState>,
    name: String,
    price: String,
    buy_price: String,
) -> Result<Product, ApiError> {
    debug!(name = %name, price = %price, "add_manual_item command");

    validation::validate_product_name(&name).map_err(|e| ApiError::validation(e.to_string()))?;

    let price = validation::parse_taka_or_zero(&price);
    validation::validate_price_poisha(price.poisha())
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let buy_price = validation::parse_taka_or_zero(&buy_price);

    let product = Product::manual(name.trim(), price, buy_price);
    info!(product_id = %product.id, name = %product.name, "Manual item created");
    catalog.add(product.clone());
    Ok(product)
}

/// Applies an inventory edit to an existing product.
///
/// Negative stock entries are clamped to zero rather than rejected.
///
/// ## Returns
/// The updated product
#[tauri::command]
pub fn update_product(
    catalog: State<'_, CatalogState>,
    product_id: String,
    update: ProductUpdate,
) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "update_product command");

    validation::validate_product_name(&update.name)
        .map_err(|e| ApiError::validation(e.to_string()))?;
    validation::validate_price_poisha(update.price_poisha)
        .map_err(|e| ApiError::validation(e.to_string()))?;
    validation::validate_buy_price_poisha(update.buy_price_poisha)
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let product = catalog.update(&product_id, update)?;
    info!(product_id = %product.id, "Product updated");
    Ok(product)
}

/// Deletes a product from the catalog.
#[tauri::command]
pub fn delete_product(
    catalog: State<'_, CatalogState>,
    product_id: String,
) -> Result<(), ApiError> {
    debug!(product_id = %product_id, "delete_product command");

    catalog.remove(&product_id)?;
    info!(product_id = %product_id, "Product deleted");
    Ok(())
}
