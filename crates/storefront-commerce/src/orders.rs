//! Order history.

use crate::ids::{LineItemId, OrderId};
use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters `encodeURIComponent` leaves alone; mail clients expect the same.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Payment state reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    NotPaid,
    FullyRefunded,
    PartiallyPaid,
    PartiallyRefunded,
    Pending,
    Unspecified,
    PendingMerchant,
    Canceled,
    Declined,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::NotPaid => "Not paid",
            PaymentStatus::FullyRefunded => "Refunded",
            PaymentStatus::PartiallyPaid => "Partially paid",
            PaymentStatus::PartiallyRefunded => "Partially refunded",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Unspecified => "No information",
            PaymentStatus::PendingMerchant => "Pending merchant",
            PaymentStatus::Canceled => "Canceled",
            PaymentStatus::Declined => "Declined",
        }
    }
}

/// Fulfillment state reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentStatus {
    Fulfilled,
    NotFulfilled,
    PartiallyFulfilled,
}

impl FulfillmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FulfillmentStatus::Fulfilled => "Delivered",
            FulfillmentStatus::NotFulfilled => "Not delivered",
            FulfillmentStatus::PartiallyFulfilled => "Partially delivered",
        }
    }
}

const NO_INFORMATION: &str = "No information";

/// Platform-formatted amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedAmount {
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub formatted_amount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    #[serde(default)]
    pub subtotal: Option<FormattedAmount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslatedText {
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub translated: Option<String>,
}

impl TranslatedText {
    pub fn text(&self) -> Option<&str> {
        self.translated.as_deref().or(self.original.as_deref())
    }
}

/// Option line printed under a line item (e.g. "Yellow").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionLine {
    #[serde(default)]
    pub plain_text: Option<TranslatedText>,
    #[serde(default)]
    pub color_info: Option<TranslatedText>,
}

impl DescriptionLine {
    pub fn text(&self) -> Option<&str> {
        self.color_info
            .as_ref()
            .and_then(TranslatedText::text)
            .or_else(|| self.plain_text.as_ref().and_then(TranslatedText::text))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    #[serde(rename = "_id", default)]
    pub id: LineItemId,
    #[serde(default)]
    pub product_name: Option<TranslatedText>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub price: Option<FormattedAmount>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description_lines: Vec<DescriptionLine>,
}

impl OrderLineItem {
    /// "2 x $10.00".
    pub fn quantity_label(&self) -> String {
        let price = self
            .price
            .as_ref()
            .and_then(|p| p.formatted_amount.as_deref())
            .unwrap_or_default();
        format!("{} x {}", self.quantity, price)
    }

    /// Chosen options joined with ", ".
    pub fn description(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .description_lines
            .iter()
            .filter_map(DescriptionLine::text)
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreetAddress {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(default)]
    pub street_address: Option<StreetAddress>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub subdivision: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDestination {
    #[serde(default)]
    pub contact_details: Option<ContactDetails>,
    #[serde(default)]
    pub address: Option<PostalAddress>,
}

impl ShippingDestination {
    /// Address block lines: name, street, postal code + city, region.
    pub fn lines(&self) -> Vec<String> {
        fn join(a: Option<&str>, b: Option<&str>) -> String {
            [a, b].into_iter().flatten().collect::<Vec<_>>().join(" ")
        }

        let contact = self.contact_details.clone().unwrap_or_default();
        let address = self.address.clone().unwrap_or_default();
        let street = address.street_address.clone().unwrap_or_default();

        vec![
            join(contact.first_name.as_deref(), contact.last_name.as_deref()),
            join(street.name.as_deref(), street.number.as_deref()),
            join(address.postal_code.as_deref(), address.city.as_deref()),
            address
                .subdivision
                .or(address.country)
                .unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logistics {
    #[serde(default)]
    pub shipping_destination: Option<ShippingDestination>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingInfo {
    /// Shipping method name.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub logistics: Option<Logistics>,
}

/// A customer order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", default)]
    pub id: OrderId,
    /// Human-facing order number.
    #[serde(default)]
    pub number: Option<String>,
    #[serde(rename = "_createdDate", default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub price_summary: Option<PriceSummary>,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default)]
    pub fulfillment_status: Option<FulfillmentStatus>,
    #[serde(default)]
    pub line_items: Vec<OrderLineItem>,
    #[serde(default)]
    pub shipping_info: Option<ShippingInfo>,
}

impl Order {
    pub fn payment_label(&self) -> &'static str {
        self.payment_status
            .map(|s| s.label())
            .unwrap_or(NO_INFORMATION)
    }

    pub fn fulfillment_label(&self) -> &'static str {
        self.fulfillment_status
            .map(|s| s.label())
            .unwrap_or(NO_INFORMATION)
    }

    /// Creation date as "Mar 4, 2024".
    pub fn display_date(&self) -> Option<String> {
        self.created_date.map(|d| d.format("%b %-d, %Y").to_string())
    }

    pub fn subtotal(&self) -> Option<&str> {
        self.price_summary
            .as_ref()
            .and_then(|p| p.subtotal.as_ref())
            .and_then(|s| s.formatted_amount.as_deref())
    }

    pub fn shipping_destination(&self) -> Option<&ShippingDestination> {
        self.shipping_info
            .as_ref()
            .and_then(|s| s.logistics.as_ref())
            .and_then(|l| l.shipping_destination.as_ref())
    }

    /// `mailto:` link asking support about this order.
    pub fn help_link(&self, support_email: &str) -> String {
        let number = self.number.as_deref().unwrap_or_default();
        let subject = format!("Order #{number} help");
        let body = format!("Help request for order #{number}\n\n<Describe your help request>");
        format!(
            "mailto:{}?subject={}&body={}",
            support_email,
            utf8_percent_encode(&subject, URI_COMPONENT),
            utf8_percent_encode(&body, URI_COMPONENT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order {
        serde_json::from_str(
            r#"{
                "_id": "o1",
                "number": "10042",
                "_createdDate": "2024-11-05T08:30:00Z",
                "priceSummary": {"subtotal": {"amount": "45", "formattedAmount": "$45.00"}},
                "paymentStatus": "PAID",
                "fulfillmentStatus": "NOT_FULFILLED",
                "lineItems": [{
                    "_id": "li1",
                    "productName": {"original": "Mum", "translated": "Mum"},
                    "quantity": 3,
                    "price": {"formattedAmount": "$15.00"},
                    "descriptionLines": [
                        {"colorInfo": {"translated": "Yellow"}},
                        {"plainText": {"translated": "Large"}}
                    ]
                }],
                "shippingInfo": {
                    "title": "Standard",
                    "logistics": {"shippingDestination": {
                        "contactDetails": {"firstName": "Ana", "lastName": "Lee"},
                        "address": {"streetAddress": {"name": "Main St", "number": "5"},
                                    "postalCode": "12345", "city": "Springfield", "country": "US"}
                    }}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_status_labels() {
        let o = order();
        assert_eq!(o.payment_label(), "Paid");
        assert_eq!(o.fulfillment_label(), "Not delivered");

        let bare = Order::default();
        assert_eq!(bare.payment_label(), "No information");
        assert_eq!(bare.fulfillment_label(), "No information");
    }

    #[test]
    fn test_display_fields() {
        let o = order();
        assert_eq!(o.display_date().as_deref(), Some("Nov 5, 2024"));
        assert_eq!(o.subtotal(), Some("$45.00"));

        let item = &o.line_items[0];
        assert_eq!(item.quantity_label(), "3 x $15.00");
        assert_eq!(item.description().as_deref(), Some("Yellow, Large"));
    }

    #[test]
    fn test_shipping_lines() {
        let o = order();
        let lines = o.shipping_destination().unwrap().lines();
        assert_eq!(lines, vec!["Ana Lee", "Main St 5", "12345 Springfield", "US"]);
    }

    #[test]
    fn test_help_link() {
        let link = order().help_link("help@example.com");
        assert!(link.starts_with("mailto:help@example.com?subject=Order%20%2310042%20help&body="));
        assert!(link.contains("%0A%0A"));
    }
}
