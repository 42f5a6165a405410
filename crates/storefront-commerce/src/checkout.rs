//! Hand-off requests to the platform's checkout and notification services.
//!
//! The storefront never prices or reserves anything itself; it validates
//! what the shopper picked and hands it to the platform.

use crate::error::CommerceError;
use crate::ids::{ProductId, VariantId};
use crate::selection::{ProductView, SelectedOptions};
use serde::Serialize;

/// App ID under which the platform's stores catalog is registered.
pub const STORES_APP_ID: &str = "1380b703-ce81-ff05-f115-39571d94dfcd";

/// Catalog reference sent with a checkout line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogReference {
    pub app_id: String,
    pub catalog_item_id: ProductId,
    pub options: CatalogOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogOptions {
    pub options: SelectedOptions,
}

/// "Buy now" for a single product selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickBuyRequest {
    pub product_id: ProductId,
    /// Matched variant, for logging only; the platform resolves it again.
    pub variant_id: Option<VariantId>,
    pub quantity: i64,
    pub options: SelectedOptions,
}

impl QuickBuyRequest {
    /// Build a request from the current view, rejecting unpurchasable state.
    pub fn from_view(view: &ProductView<'_>) -> Result<Self, CommerceError> {
        let product = view.product();
        if !view.in_stock() {
            return Err(CommerceError::OutOfStock(product.name.clone()));
        }

        let check = view.quantity_check();
        if check.requested < 1 {
            return Err(CommerceError::InvalidQuantity(check.requested));
        }
        if let (true, Some(available)) = (check.exceeded, check.available) {
            return Err(CommerceError::QuantityExceedsAvailable {
                requested: check.requested,
                available,
            });
        }

        Ok(Self {
            product_id: product.id.clone(),
            variant_id: view.variant().map(|v| v.id.clone()),
            quantity: check.requested,
            options: view.selection().clone(),
        })
    }

    pub fn catalog_reference(&self) -> CatalogReference {
        CatalogReference {
            app_id: STORES_APP_ID.to_string(),
            catalog_item_id: self.product_id.clone(),
            options: CatalogOptions {
                options: self.options.clone(),
            },
        }
    }
}

/// "Notify when available" for an out-of-stock selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackInStockRequest {
    pub email: String,
    /// Link included in the notification mail.
    pub item_url: String,
    pub product_id: ProductId,
    pub options: SelectedOptions,
}

impl BackInStockRequest {
    pub fn new(view: &ProductView<'_>, email: &str, base_url: &str) -> Result<Self, CommerceError> {
        if view.in_stock() {
            return Err(CommerceError::ValidationError(
                "selection is already in stock".into(),
            ));
        }
        let email = email.trim();
        if !is_plausible_email(email) {
            return Err(CommerceError::ValidationError(format!(
                "invalid email address: {email:?}"
            )));
        }

        let product = view.product();
        Ok(Self {
            email: email.to_string(),
            item_url: format!("{}/products/{}", base_url.trim_end_matches('/'), product.slug),
            product_id: product.id.clone(),
            options: view.selection().clone(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Choice, OptionKind, Product, ProductOption, StockRecord, Variant};

    fn mum() -> Product {
        let mut product = Product::new("mum", "Mum", "mum");
        product.product_options = vec![ProductOption::new("Color", OptionKind::Color)
            .with_choice(Choice::new("Red"))
            .with_choice(Choice::new("Yellow"))];
        product.variants = vec![
            Variant::new("red", [("Color", "Red")]).with_stock(StockRecord::tracked(0)),
            Variant::new("yellow", [("Color", "Yellow")]).with_stock(StockRecord::tracked(5)),
        ];
        product
    }

    #[test]
    fn test_quick_buy_in_stock() {
        let product = mum();
        let view = ProductView::new(&product).select("Color", "Yellow").with_quantity(2);

        let request = QuickBuyRequest::from_view(&view).unwrap();
        assert_eq!(request.quantity, 2);
        assert_eq!(request.variant_id.as_ref().map(|v| v.as_str()), Some("yellow"));

        let reference = request.catalog_reference();
        assert_eq!(reference.app_id, STORES_APP_ID);
        assert_eq!(reference.options.options.get("Color"), Some("Yellow"));
    }

    #[test]
    fn test_quick_buy_rejections() {
        let product = mum();

        let out = ProductView::new(&product);
        assert!(matches!(
            QuickBuyRequest::from_view(&out),
            Err(CommerceError::OutOfStock(_))
        ));

        let zero = ProductView::new(&product).select("Color", "Yellow").with_quantity(0);
        assert!(matches!(
            QuickBuyRequest::from_view(&zero),
            Err(CommerceError::InvalidQuantity(0))
        ));

        let many = ProductView::new(&product).select("Color", "Yellow").with_quantity(9);
        assert!(matches!(
            QuickBuyRequest::from_view(&many),
            Err(CommerceError::QuantityExceedsAvailable {
                requested: 9,
                available: 5
            })
        ));
    }

    #[test]
    fn test_back_in_stock() {
        let product = mum();
        let view = ProductView::new(&product);

        let request =
            BackInStockRequest::new(&view, " ana@example.com ", "https://shop.example/").unwrap();
        assert_eq!(request.email, "ana@example.com");
        assert_eq!(request.item_url, "https://shop.example/products/mum");

        assert!(BackInStockRequest::new(&view, "not-an-email", "https://shop.example").is_err());
        assert!(BackInStockRequest::new(&view, "a@b", "https://shop.example").is_err());

        let in_stock = view.select("Color", "Yellow");
        assert!(
            BackInStockRequest::new(&in_stock, "ana@example.com", "https://shop.example").is_err()
        );
    }
}
