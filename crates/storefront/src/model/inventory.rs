use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stock counter for one (product, variant) pair. `quantity` never goes
/// negative; the checkout transaction enforces it under a row lock.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Inventory {
    pub inventory_id: i32,
    pub product_id: i32,
    pub variant_id: i32,
    pub quantity: i32,
    pub last_updated: NaiveDate,
}
