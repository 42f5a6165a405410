//! Option selection and variant resolution.
//!
//! Everything here is a pure function of a `Product` and a caller-owned
//! `SelectedOptions`. The product detail page seeds a selection with
//! [`derive_default_selection`], replaces it wholesale on every choice click,
//! and re-runs the queries against the new value.

mod availability;
mod defaults;
mod display;
mod matcher;
mod view;

pub use availability::{
    check_in_stock, choice_availability, choice_in_stock, effective_stock, stock_for,
    ChoiceAvailability,
};
pub use defaults::derive_default_selection;
pub use display::{select_media, select_price_data, PriceDisplay, QuantityCheck};
pub use matcher::find_variant;
pub use view::{ProductView, DEFAULT_LOW_STOCK_THRESHOLD};

use crate::catalog::Product;
use crate::error::CommerceError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The shopper's current choice per option, keyed by option name.
///
/// Insertion order follows option order when seeded from defaults; equality
/// ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedOptions(IndexMap<String, String>);

impl SelectedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chosen description for an option.
    pub fn get(&self, option: &str) -> Option<&str> {
        self.0.get(option).map(String::as_str)
    }

    /// Set the choice for one option, keeping its position if already present.
    pub fn set(&mut self, option: impl Into<String>, choice: impl Into<String>) {
        self.0.insert(option.into(), choice.into());
    }

    /// Copy of this selection with one option's choice replaced.
    pub fn with(&self, option: impl Into<String>, choice: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(option, choice);
        next
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.0
    }

    /// Check every entry names a declared option and one of its choices.
    pub fn validate(&self, product: &Product) -> Result<(), CommerceError> {
        for (name, choice) in self.iter() {
            let option = product
                .option(name)
                .ok_or_else(|| CommerceError::UnknownOption(name.to_string()))?;
            if option.choice(choice).is_none() {
                return Err(CommerceError::UnknownChoice {
                    option: name.to_string(),
                    choice: choice.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SelectedOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Choice, OptionKind, ProductOption};

    #[test]
    fn test_with_replaces_single_entry() {
        let base: SelectedOptions = [("Color", "Red"), ("Size", "S")].into_iter().collect();
        let next = base.with("Color", "Yellow");

        assert_eq!(next.get("Color"), Some("Yellow"));
        assert_eq!(next.get("Size"), Some("S"));
        assert_eq!(base.get("Color"), Some("Red"));
        assert_eq!(next.iter().next(), Some(("Color", "Yellow")));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: SelectedOptions = [("Color", "Red"), ("Size", "S")].into_iter().collect();
        let b: SelectedOptions = [("Size", "S"), ("Color", "Red")].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_validate() {
        let mut product = Product::new("p", "P", "p");
        product.product_options = vec![ProductOption::new("Color", OptionKind::Color)
            .with_choice(Choice::new("Red"))];

        let ok: SelectedOptions = [("Color", "Red")].into_iter().collect();
        assert!(ok.validate(&product).is_ok());

        let bad_option: SelectedOptions = [("Size", "S")].into_iter().collect();
        assert!(matches!(
            bad_option.validate(&product),
            Err(CommerceError::UnknownOption(name)) if name == "Size"
        ));

        let bad_choice: SelectedOptions = [("Color", "Green")].into_iter().collect();
        assert!(matches!(
            bad_choice.validate(&product),
            Err(CommerceError::UnknownChoice { .. })
        ));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let selection: SelectedOptions = [("Color", "Red")].into_iter().collect();
        assert_eq!(serde_json::to_string(&selection).unwrap(), r#"{"Color":"Red"}"#);
    }
}
