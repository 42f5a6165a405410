//! Variant matching.

use crate::catalog::{Product, Variant};
use crate::selection::SelectedOptions;
use tracing::{debug, warn};

/// Find the variant declared for exactly this selection.
///
/// Returns `None` when the product declares no variants or no variant's
/// choice mapping equals `selection`; the caller then falls back to the base
/// product's price and stock. If the platform declares the same combination
/// twice, the first in declaration order wins.
pub fn find_variant<'a>(product: &'a Product, selection: &SelectedOptions) -> Option<&'a Variant> {
    if product.variants.is_empty() {
        return None;
    }

    let mut matches = product.variants.iter().filter(|v| v.matches(selection));
    let found = matches.next();

    match found {
        Some(variant) => {
            if let Some(duplicate) = matches.next() {
                warn!(
                    product_id = %product.id,
                    first = %variant.id,
                    duplicate = %duplicate.id,
                    "product declares duplicate variants for one selection"
                );
            }
            debug!(product_id = %product.id, variant_id = %variant.id, "variant matched");
        }
        None => {
            debug!(product_id = %product.id, ?selection, "no variant matches selection");
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StockRecord;

    fn mum() -> Product {
        let mut product = Product::new("mum", "Mum", "mum");
        product.variants = vec![
            Variant::new("red", [("Color", "Red")]).with_stock(StockRecord::tracked(0)),
            Variant::new("yellow", [("Color", "Yellow")]).with_stock(StockRecord::tracked(5)),
        ];
        product
    }

    fn sel(pairs: &[(&str, &str)]) -> SelectedOptions {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_no_variants_never_matches() {
        let product = Product::new("p", "Plain", "plain");
        assert!(find_variant(&product, &sel(&[])).is_none());
        assert!(find_variant(&product, &sel(&[("Color", "Red")])).is_none());
    }

    #[test]
    fn test_exact_match() {
        let product = mum();
        let variant = find_variant(&product, &sel(&[("Color", "Yellow")])).unwrap();
        assert_eq!(variant.id.as_str(), "yellow");
    }

    #[test]
    fn test_unknown_choice_is_no_match() {
        let product = mum();
        assert!(find_variant(&product, &sel(&[("Color", "Purple")])).is_none());
        assert!(find_variant(&product, &sel(&[("Color", "yellow")])).is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let mut product = mum();
        product.variants.push(Variant::new("yellow-dup", [("Color", "Yellow")]));

        let variant = find_variant(&product, &sel(&[("Color", "Yellow")])).unwrap();
        assert_eq!(variant.id.as_str(), "yellow");
    }

    #[test]
    fn test_partial_variant_never_matches_full_selection() {
        let mut product = Product::new("p", "Shirt", "shirt");
        product.variants = vec![Variant::new("partial", [("Size", "M")])];

        let full = sel(&[("Size", "M"), ("Color", "Blue")]);
        assert!(find_variant(&product, &full).is_none());
    }
}
