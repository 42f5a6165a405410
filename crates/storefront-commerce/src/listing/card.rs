//! Product cards on listing grids.

use crate::catalog::Product;
use crate::money::format_amount;
use serde::Serialize;

/// Price label for a product card.
///
/// Products whose variants span a price range show "from <min>"; otherwise
/// the discounted price, then the regular price, then "n/a".
pub fn card_price_label(product: &Product) -> String {
    if let Some(range) = &product.price_range {
        if let (Some(min), Some(max)) = (range.min_value, range.max_value) {
            if min != max {
                return format!("from {}", format_amount(min, product.currency()));
            }
        }
    }

    let formatted = product
        .price_data
        .as_ref()
        .and_then(|p| p.formatted.as_ref());
    formatted
        .and_then(|f| f.discounted_price.clone())
        .or_else(|| formatted.and_then(|f| f.price.clone()))
        .unwrap_or_else(|| "n/a".to_string())
}

/// "1 product found" / "12 products found".
pub fn result_count_label(total: i64) -> String {
    if total == 1 {
        "1 product found".to_string()
    } else {
        format!("{total} products found")
    }
}

/// Everything a listing grid shows for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub name: String,
    pub href: String,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub price_label: String,
    pub ribbon: Option<String>,
    pub discount_badge: Option<String>,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        let image = product.media.main_image();
        Self {
            name: product.name.clone(),
            href: format!("/products/{}", product.slug),
            image_url: image.map(|i| i.url.clone()),
            image_alt: image.and_then(|i| i.alt_text.clone()),
            price_label: card_price_label(product),
            ribbon: product.ribbon.clone(),
            discount_badge: product
                .discount
                .as_ref()
                .and_then(|d| d.badge_label(product.currency())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MediaItem, PriceRange};
    use crate::money::{FormattedPrice, PriceData};

    fn priced(formatted_price: Option<&str>, formatted_discounted: Option<&str>) -> Product {
        let mut product = Product::new("p", "Vase", "vase");
        product.price_data = Some(PriceData {
            currency: Some("USD".into()),
            price: Some(30.0),
            discounted_price: Some(30.0),
            formatted: Some(FormattedPrice {
                price: formatted_price.map(String::from),
                discounted_price: formatted_discounted.map(String::from),
            }),
        });
        product
    }

    #[test]
    fn test_price_range_label() {
        let mut product = priced(Some("$30.00"), Some("$30.00"));
        product.price_range = Some(PriceRange {
            min_value: Some(10.0),
            max_value: Some(30.0),
        });
        assert_eq!(card_price_label(&product), "from $10.00");
    }

    #[test]
    fn test_flat_range_uses_formatted_price() {
        let mut product = priced(Some("$30.00"), Some("$24.00"));
        product.price_range = Some(PriceRange {
            min_value: Some(30.0),
            max_value: Some(30.0),
        });
        assert_eq!(card_price_label(&product), "$24.00");

        let product = priced(Some("$30.00"), None);
        assert_eq!(card_price_label(&product), "$30.00");

        let product = Product::new("p", "Vase", "vase");
        assert_eq!(card_price_label(&product), "n/a");
    }

    #[test]
    fn test_result_count_label() {
        assert_eq!(result_count_label(1), "1 product found");
        assert_eq!(result_count_label(0), "0 products found");
        assert_eq!(result_count_label(12), "12 products found");
    }

    #[test]
    fn test_card_from_product() {
        let mut product = priced(Some("$30.00"), Some("$30.00"));
        product.media.items = vec![MediaItem::image("m", "vase.jpg")];
        product.ribbon = Some("New".into());

        let card = ProductCard::from_product(&product);
        assert_eq!(card.href, "/products/vase");
        assert_eq!(card.image_url.as_deref(), Some("vase.jpg"));
        assert_eq!(card.ribbon.as_deref(), Some("New"));
    }
}
