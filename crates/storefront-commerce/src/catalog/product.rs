//! The product record as returned by the platform's product-read API.

use std::fmt;

use crate::catalog::{MediaGallery, ProductOption, StockRecord, Variant};
use crate::error::CommerceError;
use crate::ids::{ProductId, VariantId};
use crate::money::{format_amount, PriceData};
use serde::{Deserialize, Serialize};

/// Kind of product-level discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    #[default]
    None,
    Amount,
    Percent,
    #[serde(other)]
    Undefined,
}

/// Product-level discount shown as a badge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(rename = "type", default)]
    pub kind: DiscountKind,
    #[serde(default)]
    pub value: f64,
}

impl Discount {
    /// Badge label, e.g. "-20%" or "-$5.00". `None` when there is no discount.
    pub fn badge_label(&self, currency: Option<&str>) -> Option<String> {
        if self.value <= 0.0 {
            return None;
        }
        match self.kind {
            DiscountKind::Percent => Some(format!("-{}%", self.value)),
            DiscountKind::Amount => Some(format!("-{}", format_amount(self.value, currency))),
            DiscountKind::None | DiscountKind::Undefined => None,
        }
    }
}

/// Min/max price across variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    #[serde(default)]
    pub min_value: Option<f64>,
    #[serde(default)]
    pub max_value: Option<f64>,
}

/// Extra collapsible description section (care instructions, shipping...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoSection {
    #[serde(default)]
    pub title: Option<String>,
    /// Trusted HTML from the platform.
    #[serde(default)]
    pub description: Option<String>,
}

/// A product in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    #[serde(rename = "_id", default)]
    pub id: ProductId,
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// URL-friendly slug (unique).
    #[serde(default)]
    pub slug: String,
    /// Full description; trusted HTML from the platform.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    /// Short merchandising label (e.g., "New").
    #[serde(default)]
    pub ribbon: Option<String>,
    /// Base price, used when no variant is matched.
    #[serde(default)]
    pub price_data: Option<PriceData>,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub discount: Option<Discount>,
    /// Base stock, used when no variant is matched.
    #[serde(default)]
    pub stock: StockRecord,
    /// Declared options, in display order.
    #[serde(default)]
    pub product_options: Vec<ProductOption>,
    /// Declared variants, in declaration order.
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub media: MediaGallery,
    #[serde(default)]
    pub additional_info_sections: Vec<InfoSection>,
}

impl Product {
    /// Create a bare product with no options or variants.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            ..Default::default()
        }
    }

    /// Parse a product from the platform's JSON.
    ///
    /// A product lookup with no match exports `null`.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        serde_json::from_str::<Option<Self>>(json)?
            .ok_or_else(|| CommerceError::ProductNotFound("export is null".to_string()))
    }

    /// Check if the product declares any variants.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Look up a declared option by name.
    pub fn option(&self, name: &str) -> Option<&ProductOption> {
        self.product_options.iter().find(|o| o.name == name)
    }

    /// Currency code of the base price.
    pub fn currency(&self) -> Option<&str> {
        self.price_data.as_ref().and_then(|p| p.currency.as_deref())
    }

    /// Report platform data that breaks the catalog's invariants.
    ///
    /// None of these are fatal: matching simply never succeeds for the
    /// affected variants.
    pub fn data_anomalies(&self) -> Vec<DataAnomaly> {
        let mut anomalies = Vec::new();

        for option in &self.product_options {
            for description in option.duplicate_descriptions() {
                anomalies.push(DataAnomaly::DuplicateChoice {
                    option: option.name.clone(),
                    description: description.to_string(),
                });
            }
        }

        for (index, variant) in self.variants.iter().enumerate() {
            let missing: Vec<String> = self
                .product_options
                .iter()
                .filter(|o| !variant.choices.contains_key(&o.name))
                .map(|o| o.name.clone())
                .collect();
            let unexpected: Vec<String> = variant
                .choices
                .keys()
                .filter(|name| self.option(name).is_none())
                .cloned()
                .collect();
            if !missing.is_empty() || !unexpected.is_empty() {
                anomalies.push(DataAnomaly::OptionSetMismatch {
                    variant: variant.id.clone(),
                    missing,
                    unexpected,
                });
            }

            for (name, choice) in &variant.choices {
                if let Some(option) = self.option(name) {
                    if option.choice(choice).is_none() {
                        anomalies.push(DataAnomaly::UnknownChoice {
                            variant: variant.id.clone(),
                            option: name.clone(),
                            choice: choice.clone(),
                        });
                    }
                }
            }

            if let Some(first) = self.variants[..index]
                .iter()
                .find(|earlier| earlier.choices == variant.choices)
            {
                anomalies.push(DataAnomaly::DuplicateVariant {
                    first: first.id.clone(),
                    duplicate: variant.id.clone(),
                });
            }
        }

        anomalies
    }
}

/// A platform data-shape problem found in a product record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataAnomaly {
    /// Two choices of one option share a description.
    DuplicateChoice { option: String, description: String },
    /// A variant does not cover exactly the declared options.
    OptionSetMismatch {
        variant: VariantId,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
    /// A variant references a choice its option does not declare.
    UnknownChoice {
        variant: VariantId,
        option: String,
        choice: String,
    },
    /// Two variants declare the same combination; the first one wins.
    DuplicateVariant { first: VariantId, duplicate: VariantId },
}

impl fmt::Display for DataAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataAnomaly::DuplicateChoice { option, description } => {
                write!(f, "option {option:?} declares choice {description:?} more than once")
            }
            DataAnomaly::OptionSetMismatch {
                variant,
                missing,
                unexpected,
            } => write!(
                f,
                "variant {variant} covers the wrong options (missing: [{}], unexpected: [{}])",
                missing.join(", "),
                unexpected.join(", ")
            ),
            DataAnomaly::UnknownChoice {
                variant,
                option,
                choice,
            } => write!(f, "variant {variant} uses undeclared choice {choice:?} for {option:?}"),
            DataAnomaly::DuplicateVariant { first, duplicate } => {
                write!(f, "variant {duplicate} duplicates {first}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Choice, OptionKind};

    fn shirt() -> Product {
        let mut product = Product::new("p1", "Shirt", "shirt");
        product.product_options = vec![
            ProductOption::new("Size", OptionKind::DropDown)
                .with_choice(Choice::new("S"))
                .with_choice(Choice::new("M")),
            ProductOption::new("Color", OptionKind::Color).with_choice(Choice::new("Blue")),
        ];
        product.variants = vec![
            Variant::new("v1", [("Size", "S"), ("Color", "Blue")]),
            Variant::new("v2", [("Size", "M"), ("Color", "Blue")]),
        ];
        product
    }

    #[test]
    fn test_clean_product_has_no_anomalies() {
        assert!(shirt().data_anomalies().is_empty());
    }

    #[test]
    fn test_partial_variant_is_reported() {
        let mut product = shirt();
        product.variants.push(Variant::new("v3", [("Size", "S")]));

        let anomalies = product.data_anomalies();
        assert_eq!(
            anomalies,
            vec![DataAnomaly::OptionSetMismatch {
                variant: "v3".into(),
                missing: vec!["Color".into()],
                unexpected: vec![],
            }]
        );
    }

    #[test]
    fn test_duplicates_and_unknown_choices_are_reported() {
        let mut product = shirt();
        product.variants.push(Variant::new("v4", [("Size", "S"), ("Color", "Blue")]));
        product.variants.push(Variant::new("v5", [("Size", "XL"), ("Color", "Blue")]));

        let anomalies = product.data_anomalies();
        assert!(anomalies.contains(&DataAnomaly::DuplicateVariant {
            first: "v1".into(),
            duplicate: "v4".into(),
        }));
        assert!(anomalies.contains(&DataAnomaly::UnknownChoice {
            variant: "v5".into(),
            option: "Size".into(),
            choice: "XL".into(),
        }));
    }

    #[test]
    fn test_discount_badge() {
        let percent = Discount {
            kind: DiscountKind::Percent,
            value: 20.0,
        };
        assert_eq!(percent.badge_label(Some("USD")).as_deref(), Some("-20%"));

        let amount = Discount {
            kind: DiscountKind::Amount,
            value: 5.0,
        };
        assert_eq!(amount.badge_label(Some("USD")).as_deref(), Some("-$5.00"));

        assert_eq!(Discount::default().badge_label(None), None);
    }

    #[test]
    fn test_from_json_minimal() {
        let product = Product::from_json(r#"{"_id":"p9","name":"Mug","slug":"mug"}"#).unwrap();
        assert_eq!(product.id.as_str(), "p9");
        assert!(!product.has_variants());
        assert!(product.stock.is_available());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Product::from_json("not json").unwrap_err();
        assert!(matches!(err, CommerceError::SerializationError(_)));
    }

    #[test]
    fn test_from_json_null_is_not_found() {
        let err = Product::from_json(" null ").unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(_)));
        assert_eq!(err.to_string(), "Product not found: export is null");
    }
}
