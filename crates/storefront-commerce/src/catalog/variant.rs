//! Product variants.

use crate::catalog::StockRecord;
use crate::ids::VariantId;
use crate::money::PriceData;
use crate::selection::SelectedOptions;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Option name to chosen choice description.
pub type VariantChoices = IndexMap<String, String>;

/// Variant-level commercial details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDetails {
    /// Price of this variant.
    #[serde(default)]
    pub price_data: Option<PriceData>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub visible: Option<bool>,
}

/// One fully specified combination of choices (e.g., Size: L, Color: Blue).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Unique variant identifier.
    #[serde(rename = "_id", default)]
    pub id: VariantId,
    /// Chosen description per option name.
    #[serde(default)]
    pub choices: VariantChoices,
    #[serde(default)]
    pub variant: VariantDetails,
    /// Stock for this variant; overrides the product's when matched.
    #[serde(default)]
    pub stock: StockRecord,
}

impl Variant {
    /// Create a variant from option/choice pairs.
    pub fn new<I, K, V>(id: impl Into<VariantId>, choices: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id: id.into(),
            choices: choices
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Default::default()
        }
    }

    /// Builder-style stock setter.
    pub fn with_stock(mut self, stock: StockRecord) -> Self {
        self.stock = stock;
        self
    }

    /// Builder-style price setter.
    pub fn with_price(mut self, price_data: PriceData) -> Self {
        self.variant.price_data = Some(price_data);
        self
    }

    /// Price data of this variant, if the platform sent any.
    pub fn price_data(&self) -> Option<&PriceData> {
        self.variant.price_data.as_ref()
    }

    /// Whether this variant's choice mapping equals `selection` exactly.
    ///
    /// Key sets must be identical and every description must match byte for
    /// byte; a variant covering a subset of the selected options never matches.
    pub fn matches(&self, selection: &SelectedOptions) -> bool {
        self.choices.len() == selection.len()
            && self
                .choices
                .iter()
                .all(|(name, choice)| selection.get(name) == Some(choice.as_str()))
    }

    /// Build a display name from the chosen values.
    pub fn build_name(&self) -> String {
        if self.choices.is_empty() {
            "Default".to_string()
        } else {
            self.choices
                .values()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" / ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_name() {
        let variant = Variant::new("v1", [("Size", "Large"), ("Color", "Blue")]);
        assert_eq!(variant.build_name(), "Large / Blue");
        assert_eq!(Variant::default().build_name(), "Default");
    }

    #[test]
    fn test_matches_requires_same_key_set() {
        let variant = Variant::new("v1", [("Size", "L"), ("Color", "Blue")]);

        let full: SelectedOptions = [("Color", "Blue"), ("Size", "L")].into_iter().collect();
        assert!(variant.matches(&full));

        let partial: SelectedOptions = [("Color", "Blue")].into_iter().collect();
        assert!(!variant.matches(&partial));

        let extra: SelectedOptions = [("Color", "Blue"), ("Size", "L"), ("Fit", "Slim")]
            .into_iter()
            .collect();
        assert!(!variant.matches(&extra));
    }

    #[test]
    fn test_matches_is_case_and_whitespace_sensitive() {
        let variant = Variant::new("v1", [("Color", "Blue")]);
        let lower: SelectedOptions = [("Color", "blue")].into_iter().collect();
        let padded: SelectedOptions = [("Color", " Blue")].into_iter().collect();
        assert!(!variant.matches(&lower));
        assert!(!variant.matches(&padded));
    }

    #[test]
    fn test_deserialize_platform_variant() {
        let variant: Variant = serde_json::from_str(
            r#"{"_id":"v-red","choices":{"Color":"Red"},
                "variant":{"priceData":{"currency":"USD","price":10,"discountedPrice":8}},
                "stock":{"trackQuantity":true,"quantity":0,"inStock":false}}"#,
        )
        .unwrap();
        assert_eq!(variant.id.as_str(), "v-red");
        assert_eq!(variant.price_data().and_then(|p| p.price), Some(10.0));
        assert!(variant.stock.is_out_of_stock());
    }
}
