//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Variant resolution itself never fails; these cover loading platform
/// records and validating what the shopper is about to hand off.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Requested listing page is past the last page.
    #[error("Page {page} is out of range (last page is {total_pages})")]
    PageOutOfRange { page: i64, total_pages: i64 },

    /// The current selection is out of stock.
    #[error("Out of stock: {0}")]
    OutOfStock(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds what the platform reports as available.
    #[error("Quantity {requested} exceeds available stock ({available})")]
    QuantityExceedsAvailable { requested: i64, available: i64 },

    /// Selection names an option the product does not declare.
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Selection names a choice the option does not declare.
    #[error("Unknown choice {choice:?} for option {option:?}")]
    UnknownChoice { option: String, choice: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
