//! Stock evaluation for a selection.

use crate::catalog::{Product, StockRecord, Variant};
use crate::selection::{find_variant, SelectedOptions};
use serde::Serialize;

/// The stock record that governs a selection.
///
/// The matched variant's record if there is one, else the base product's.
pub fn effective_stock<'a>(product: &'a Product, selection: &SelectedOptions) -> &'a StockRecord {
    stock_for(product, find_variant(product, selection))
}

/// Stock record for an already-resolved variant, falling back to the product.
pub fn stock_for<'a>(product: &'a Product, variant: Option<&'a Variant>) -> &'a StockRecord {
    variant.map(|v| &v.stock).unwrap_or(&product.stock)
}

/// Check whether the selection can be purchased.
///
/// Untracked stock is always in stock. Tracked stock is in stock when the
/// quantity is unknown or positive.
pub fn check_in_stock(product: &Product, selection: &SelectedOptions) -> bool {
    effective_stock(product, selection).is_available()
}

/// Would the selection be in stock if `option` were switched to `choice`?
///
/// Used for the dimmed-choice hint in the option picker. The caller's
/// selection is left untouched.
pub fn choice_in_stock(
    product: &Product,
    selection: &SelectedOptions,
    option: &str,
    choice: &str,
) -> bool {
    check_in_stock(product, &selection.with(option, choice))
}

/// Picker state for one choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceAvailability {
    pub option: String,
    pub choice: String,
    /// Whether this choice is the current selection for its option.
    pub selected: bool,
    /// Whether picking this choice yields an in-stock selection.
    pub in_stock: bool,
}

/// Picker state for every declared choice, in option then choice order.
pub fn choice_availability(
    product: &Product,
    selection: &SelectedOptions,
) -> Vec<ChoiceAvailability> {
    product
        .product_options
        .iter()
        .flat_map(|option| {
            option.choices.iter().map(move |choice| ChoiceAvailability {
                option: option.name.clone(),
                choice: choice.description.clone(),
                selected: selection.get(&option.name) == Some(choice.description.as_str()),
                in_stock: choice_in_stock(product, selection, &option.name, &choice.description),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Choice, OptionKind, ProductOption};

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

    fn sel(pairs: &[(&str, &str)]) -> SelectedOptions {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_variant_stock_overrides_base() {
        let mut product = mum();
        product.stock = StockRecord::untracked();

        assert!(!check_in_stock(&product, &sel(&[("Color", "Red")])));
        assert!(check_in_stock(&product, &sel(&[("Color", "Yellow")])));
    }

    #[test]
    fn test_unmatched_falls_back_to_base() {
        let mut product = mum();
        product.stock = StockRecord::tracked(0);
        assert!(!check_in_stock(&product, &sel(&[("Color", "Purple")])));

        product.stock = StockRecord::untracked();
        assert!(check_in_stock(&product, &sel(&[("Color", "Purple")])));
    }

    #[test]
    fn test_untracked_variant_ignores_negative_quantity() {
        let mut product = mum();
        product.variants[0].stock = StockRecord {
            track_inventory: false,
            quantity: Some(-1),
            ..Default::default()
        };
        assert!(check_in_stock(&product, &sel(&[("Color", "Red")])));
    }

    #[test]
    fn test_stock_for_resolved_variant() {
        let product = mum();
        let yellow = find_variant(&product, &sel(&[("Color", "Yellow")]));

        assert_eq!(stock_for(&product, yellow).quantity, Some(5));
        assert_eq!(stock_for(&product, None), &product.stock);
        assert_eq!(
            stock_for(&product, yellow),
            effective_stock(&product, &sel(&[("Color", "Yellow")]))
        );
    }

    #[test]
    fn test_choice_hint_does_not_mutate_selection() {
        let product = mum();
        let selection = sel(&[("Color", "Red")]);

        assert!(choice_in_stock(&product, &selection, "Color", "Yellow"));
        assert!(!choice_in_stock(&product, &selection, "Color", "Red"));
        assert_eq!(selection.get("Color"), Some("Red"));
    }

    #[test]
    fn test_choice_availability_grid() {
        let product = mum();
        let grid = choice_availability(&product, &sel(&[("Color", "Red")]));

        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0].choice, "Red");
        assert!(grid[0].selected);
        assert!(!grid[0].in_stock);
        assert_eq!(grid[1].choice, "Yellow");
        assert!(!grid[1].selected);
        assert!(grid[1].in_stock);
    }
}
