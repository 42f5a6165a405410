//! Per-render view of a product under one selection.

use crate::catalog::{MediaItem, Product, StockRecord, Variant};
use crate::money::PriceData;
use crate::selection::{
    choice_availability, derive_default_selection, find_variant, select_media, select_price_data,
    stock_for, ChoiceAvailability, PriceDisplay, QuantityCheck, SelectedOptions,
};

/// Below this many remaining units the page shows "Only N remaining".
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// Everything the product detail page derives from a product, a selection
/// and a requested quantity.
///
/// A view is immutable; a new choice or quantity produces a new view.
#[derive(Debug, Clone)]
pub struct ProductView<'a> {
    product: &'a Product,
    selection: SelectedOptions,
    variant: Option<&'a Variant>,
    quantity: i64,
    low_stock_threshold: i64,
}

impl<'a> ProductView<'a> {
    /// View seeded with the default selection and a quantity of 1.
    pub fn new(product: &'a Product) -> Self {
        Self::with_selection(product, derive_default_selection(&product.product_options))
    }

    /// View for an explicit selection.
    pub fn with_selection(product: &'a Product, selection: SelectedOptions) -> Self {
        let variant = find_variant(product, &selection);
        Self {
            product,
            selection,
            variant,
            quantity: 1,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// New view with one option switched to `choice`.
    pub fn select(&self, option: &str, choice: &str) -> Self {
        Self::with_selection(self.product, self.selection.with(option, choice))
            .with_quantity(self.quantity)
            .with_low_stock_threshold(self.low_stock_threshold)
    }

    pub fn product(&self) -> &'a Product {
        self.product
    }

    pub fn selection(&self) -> &SelectedOptions {
        &self.selection
    }

    /// The matched variant, if any.
    pub fn variant(&self) -> Option<&'a Variant> {
        self.variant
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Stock record governing this selection.
    pub fn stock(&self) -> &'a StockRecord {
        stock_for(self.product, self.variant)
    }

    pub fn in_stock(&self) -> bool {
        self.stock().is_available()
    }

    pub fn price_data(&self) -> Option<&'a PriceData> {
        select_price_data(self.product, self.variant)
    }

    pub fn price_display(&self) -> PriceDisplay {
        PriceDisplay::new(self.product, self.price_data())
    }

    pub fn media(&self) -> Vec<&'a MediaItem> {
        select_media(self.product, &self.selection)
    }

    /// Requested quantity against the remaining count.
    ///
    /// The count is the matched variant's quantity, else the product's. It
    /// applies whether or not inventory is tracked.
    pub fn quantity_check(&self) -> QuantityCheck {
        let available = self
            .variant
            .and_then(|v| v.stock.quantity)
            .or(self.product.stock.quantity);
        QuantityCheck::new(self.quantity, available, self.low_stock_threshold)
    }

    pub fn choice_availability(&self) -> Vec<ChoiceAvailability> {
        choice_availability(self.product, &self.selection)
    }

    /// Add to cart / buy now are enabled.
    pub fn can_purchase(&self) -> bool {
        self.in_stock() && self.quantity_check().is_valid()
    }
}
