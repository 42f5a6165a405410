//! Storefront domain types and logic over the hosted commerce platform.
//!
//! The platform owns inventory, pricing, payments and fulfillment. This crate
//! owns the typed shape of what the platform returns and the small amount of
//! logic a storefront derives from it:
//!
//! - **Catalog**: Products, options, choices, variants, stock, media
//! - **Selection**: Default selection, variant matching, stock evaluation,
//!   price/media selection for the product detail page
//! - **Listing**: Product cards, page and cursor pagination
//! - **Reviews**: Moderated customer reviews
//! - **Orders**: Order history labels
//! - **Checkout**: Quick-buy and back-in-stock hand-off requests
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//!
//! let product = Product::from_json(&body)?;
//!
//! // Seed the selection from the first choice of each option
//! let mut selection = derive_default_selection(&product.product_options);
//!
//! // Shopper clicks "Yellow"
//! selection = selection.with("Color", "Yellow");
//!
//! let variant = find_variant(&product, &selection);
//! let in_stock = check_in_stock(&product, &selection);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod checkout;
pub mod listing;
pub mod orders;
pub mod reviews;
pub mod selection;

pub use error::CommerceError;
pub use ids::*;
pub use money::{format_amount, Currency, FormattedPrice, Money, PriceData};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{format_amount, Currency, FormattedPrice, Money, PriceData};

    // Catalog
    pub use crate::catalog::{
        Choice, DataAnomaly, Discount, DiscountKind, MediaGallery, MediaItem, OptionKind,
        PriceRange, Product, ProductOption, StockRecord, Variant, VariantChoices,
    };

    // Selection
    pub use crate::selection::{
        check_in_stock, choice_availability, choice_in_stock, derive_default_selection,
        effective_stock, find_variant, select_media, select_price_data, ChoiceAvailability,
        PriceDisplay, ProductView, QuantityCheck, SelectedOptions, DEFAULT_LOW_STOCK_THRESHOLD,
    };

    // Listing
    pub use crate::listing::{card_price_label, result_count_label, CursorPage, Pagination};

    // Reviews
    pub use crate::reviews::{ModerationStatus, NewReview, Review};

    // Orders
    pub use crate::orders::{FulfillmentStatus, Order, PaymentStatus};

    // Checkout
    pub use crate::checkout::{BackInStockRequest, QuickBuyRequest};
}
