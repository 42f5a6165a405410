//! Stock records.

use serde::{Deserialize, Serialize};

/// Coarse inventory status reported by the platform for the base product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InventoryStatus {
    InStock,
    OutOfStock,
    PartiallyOutOfStock,
}

impl InventoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryStatus::InStock => "in stock",
            InventoryStatus::OutOfStock => "out of stock",
            InventoryStatus::PartiallyOutOfStock => "partially out of stock",
        }
    }
}

/// Stock record for a product or variant.
///
/// Only `track_inventory` and `quantity` decide availability; `in_stock` and
/// `inventory_status` are the platform's own summary and are informational.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    /// Whether the platform tracks inventory. Absent means untracked.
    #[serde(default, alias = "trackQuantity")]
    pub track_inventory: bool,
    /// Remaining quantity. Absent means unlimited.
    #[serde(default)]
    pub quantity: Option<i64>,
    /// Platform's own in-stock flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    /// Platform's coarse inventory status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_status: Option<InventoryStatus>,
}

impl StockRecord {
    /// A tracked record with the given remaining quantity.
    pub fn tracked(quantity: i64) -> Self {
        Self {
            track_inventory: true,
            quantity: Some(quantity),
            ..Default::default()
        }
    }

    /// A record with no tracking (infinite stock).
    pub fn untracked() -> Self {
        Self::default()
    }

    /// Check if the item is available for purchase.
    ///
    /// Untracked records are always available, whatever the quantity says.
    pub fn is_available(&self) -> bool {
        if !self.track_inventory {
            return true;
        }
        self.quantity.map_or(true, |q| q > 0)
    }

    /// Check if out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        !self.is_available()
    }

    /// Check if stock is below the given threshold.
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.track_inventory && self.quantity.map_or(false, |q| q < threshold)
    }
}
