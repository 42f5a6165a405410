//! Price, media and quantity derivations for the product detail page.

use crate::catalog::{MediaItem, Product, Variant};
use crate::money::PriceData;
use crate::selection::SelectedOptions;
use serde::Serialize;

/// Price data to display: the matched variant's, else the product's.
pub fn select_price_data<'a>(
    product: &'a Product,
    matched: Option<&'a Variant>,
) -> Option<&'a PriceData> {
    matched
        .and_then(Variant::price_data)
        .or(product.price_data.as_ref())
}

/// Media to display for a selection.
///
/// Collects, in option order, the media overrides of every selected choice.
/// When no selected choice carries media, the full product gallery is used.
pub fn select_media<'a>(product: &'a Product, selection: &SelectedOptions) -> Vec<&'a MediaItem> {
    let overrides: Vec<&MediaItem> = product
        .product_options
        .iter()
        .filter_map(|option| {
            selection
                .get(&option.name)
                .and_then(|chosen| option.choice(chosen))
        })
        .flat_map(|choice| choice.media_items())
        .collect();

    if overrides.is_empty() {
        product.media.items.iter().collect()
    } else {
        overrides
    }
}

/// Display strings for the price block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriceDisplay {
    /// Regular price; struck through when `discounted` is present.
    pub regular: Option<String>,
    /// Discounted price, only when it differs from the regular price.
    pub discounted: Option<String>,
    /// Product-level discount badge (e.g. "-20%").
    pub badge: Option<String>,
}

impl PriceDisplay {
    pub fn new(product: &Product, price_data: Option<&PriceData>) -> Self {
        let badge = product
            .discount
            .as_ref()
            .and_then(|d| d.badge_label(product.currency()));

        match price_data {
            Some(data) => Self {
                regular: data.formatted_price(),
                discounted: if data.has_discount() {
                    data.formatted_discounted_price()
                } else {
                    None
                },
                badge,
            },
            None => Self {
                regular: None,
                discounted: None,
                badge,
            },
        }
    }

    /// Whether the regular price should be struck through.
    pub fn is_discounted(&self) -> bool {
        self.discounted.is_some()
    }

    /// The price the shopper actually pays.
    pub fn current(&self) -> Option<&str> {
        self.discounted.as_deref().or(self.regular.as_deref())
    }
}

/// Requested quantity checked against remaining stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuantityCheck {
    pub requested: i64,
    /// Remaining quantity when stock is tracked and the platform reports a
    /// positive count.
    pub available: Option<i64>,
    /// Requested more than remains.
    pub exceeded: bool,
    /// "Only N remaining" hint.
    pub remaining_hint: Option<String>,
}

impl QuantityCheck {
    pub fn new(requested: i64, available: Option<i64>, low_stock_threshold: i64) -> Self {
        let available = available.filter(|&q| q > 0);
        let exceeded = available.map_or(false, |q| requested > q);
        let remaining_hint = available
            .filter(|&q| exceeded || q < low_stock_threshold)
            .map(|q| format!("Only {q} remaining"));

        Self {
            requested,
            available,
            exceeded,
            remaining_hint,
        }
    }

    /// Whether the quantity input holds a purchasable amount.
    pub fn is_valid(&self) -> bool {
        self.requested >= 1 && !self.exceeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Choice, Discount, DiscountKind, MediaGallery, OptionKind, ProductOption};
    use crate::money::FormattedPrice;

    fn price(regular: f64, discounted: f64) -> PriceData {
        PriceData {
            currency: Some("USD".into()),
            price: Some(regular),
            discounted_price: Some(discounted),
            formatted: None,
        }
    }

    #[test]
    fn test_variant_price_preferred() {
        let mut product = Product::new("p", "P", "p");
        product.price_data = Some(price(10.0, 10.0));
        let variant = Variant::new("v", [("Size", "L")]).with_price(price(12.0, 12.0));

        assert_eq!(select_price_data(&product, Some(&variant)).and_then(|p| p.price), Some(12.0));
        assert_eq!(select_price_data(&product, None).and_then(|p| p.price), Some(10.0));

        let bare = Variant::new("v2", [("Size", "M")]);
        assert_eq!(select_price_data(&product, Some(&bare)).and_then(|p| p.price), Some(10.0));
    }

    #[test]
    fn test_select_media_uses_choice_overrides() {
        let mut product = Product::new("p", "P", "p");
        product.media.items = vec![MediaItem::image("base", "base.jpg")];
        let mut red = Choice::new("Red");
        red.media = Some(MediaGallery {
            main_media: None,
            items: vec![MediaItem::image("red", "red.jpg")],
        });
        product.product_options = vec![ProductOption::new("Color", OptionKind::Color)
            .with_choice(red)
            .with_choice(Choice::new("Blue"))];

        let red_sel: SelectedOptions = [("Color", "Red")].into_iter().collect();
        let ids: Vec<_> = select_media(&product, &red_sel).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["red"]);

        let blue_sel: SelectedOptions = [("Color", "Blue")].into_iter().collect();
        let ids: Vec<_> = select_media(&product, &blue_sel).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["base"]);
    }

    #[test]
    fn test_price_display_discount() {
        let mut product = Product::new("p", "P", "p");
        product.price_data = Some(price(25.0, 20.0));
        product.discount = Some(Discount {
            kind: DiscountKind::Percent,
            value: 20.0,
        });

        let display = PriceDisplay::new(&product, product.price_data.as_ref());
        assert_eq!(display.regular.as_deref(), Some("$25.00"));
        assert_eq!(display.discounted.as_deref(), Some("$20.00"));
        assert_eq!(display.current(), Some("$20.00"));
        assert_eq!(display.badge.as_deref(), Some("-20%"));
        assert!(display.is_discounted());
    }

    #[test]
    fn test_price_display_without_discount() {
        let data = PriceData {
            formatted: Some(FormattedPrice {
                price: Some("$9.00".into()),
                discounted_price: Some("$9.00".into()),
            }),
            ..price(9.0, 9.0)
        };
        let product = Product::new("p", "P", "p");
        let display = PriceDisplay::new(&product, Some(&data));
        assert_eq!(display.regular.as_deref(), Some("$9.00"));
        assert_eq!(display.discounted, None);
        assert!(!display.is_discounted());
    }

    #[test]
    fn test_quantity_check() {
        let check = QuantityCheck::new(1, Some(5), 10);
        assert!(!check.exceeded);
        assert_eq!(check.remaining_hint.as_deref(), Some("Only 5 remaining"));
        assert!(check.is_valid());

        let check = QuantityCheck::new(30, Some(20), 10);
        assert!(check.exceeded);
        assert_eq!(check.remaining_hint.as_deref(), Some("Only 20 remaining"));
        assert!(!check.is_valid());

        let check = QuantityCheck::new(2, Some(20), 10);
        assert_eq!(check.remaining_hint, None);

        let check = QuantityCheck::new(0, None, 10);
        assert!(!check.is_valid());

        let check = QuantityCheck::new(3, Some(0), 10);
        assert_eq!(check.available, None);
        assert!(!check.exceeded);
    }
}
