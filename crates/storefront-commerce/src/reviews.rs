//! Customer reviews.

use crate::error::CommerceError;
use crate::ids::{ProductId, ReviewId};
use crate::listing::CursorPage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reviews loaded per "More reviews..." click.
pub const REVIEWS_PAGE_SIZE: u32 = 2;

/// Moderation state assigned by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModerationStatus {
    Approved,
    Rejected,
    InModeration,
    Submitted,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    #[serde(default)]
    pub author_name: Option<String>,
}

/// Media attached to a review; exactly one of the fields is normally set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewMedia {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    /// 1 to 5.
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub media: Vec<ReviewMedia>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moderation {
    #[serde(default)]
    pub moderation_status: ModerationStatus,
}

/// Merchant reply to a review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewReply {
    #[serde(default)]
    pub message: Option<String>,
}

/// A review as returned by the platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", default)]
    pub id: ReviewId,
    /// Reviewed product.
    #[serde(default)]
    pub entity_id: ProductId,
    #[serde(default)]
    pub author: Option<ReviewAuthor>,
    #[serde(default)]
    pub review_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content: Option<ReviewContent>,
    #[serde(default)]
    pub moderation: Option<Moderation>,
    #[serde(default)]
    pub reply: Option<ReviewReply>,
}

impl Review {
    pub fn is_approved(&self) -> bool {
        self.moderation
            .as_ref()
            .map_or(false, |m| m.moderation_status == ModerationStatus::Approved)
    }

    /// Author name, "Anonymous" when missing.
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|a| a.author_name.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or("Anonymous")
    }

    pub fn rating(&self) -> u8 {
        self.content
            .as_ref()
            .and_then(|c| c.rating)
            .unwrap_or(0)
            .min(5)
    }

    /// Filled state of the five rating stars.
    pub fn stars(&self) -> [bool; 5] {
        let rating = self.rating() as usize;
        std::array::from_fn(|i| i < rating)
    }

    pub fn title(&self) -> Option<&str> {
        self.content.as_ref().and_then(|c| c.title.as_deref())
    }

    pub fn body(&self) -> Option<&str> {
        self.content.as_ref().and_then(|c| c.body.as_deref())
    }

    pub fn reply_message(&self) -> Option<&str> {
        self.reply.as_ref().and_then(|r| r.message.as_deref())
    }

    /// Review date as shown under the title (e.g. "Mar 4, 2024").
    pub fn display_date(&self) -> Option<String> {
        self.review_date.map(|d| d.format("%b %-d, %Y").to_string())
    }
}

/// Drop reviews that have not been approved by moderation.
pub fn approved_only(page: CursorPage<Review>) -> CursorPage<Review> {
    page.retain(Review::is_approved)
}

/// A review the shopper is about to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReview {
    pub product_id: ProductId,
    pub title: String,
    pub body: String,
    pub rating: u8,
}

impl NewReview {
    /// Validate and normalize the form input.
    pub fn new(
        product_id: ProductId,
        title: &str,
        body: &str,
        rating: u8,
    ) -> Result<Self, CommerceError> {
        if product_id.is_empty() {
            return Err(CommerceError::ValidationError("product ID missing".into()));
        }
        let title = title.trim();
        let body = body.trim();
        if title.is_empty() {
            return Err(CommerceError::ValidationError("title is required".into()));
        }
        if body.is_empty() {
            return Err(CommerceError::ValidationError("body is required".into()));
        }
        if !(1..=5).contains(&rating) {
            return Err(CommerceError::ValidationError(
                "rating must be between 1 and 5".into(),
            ));
        }
        Ok(Self {
            product_id,
            title: title.to_string(),
            body: body.to_string(),
            rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(json: &str) -> Review {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_platform_review() {
        let r = review(
            r#"{"_id":"r1","entityId":"p1","author":{"authorName":"Ana"},
                "reviewDate":"2024-03-04T10:00:00Z",
                "content":{"title":"Lovely","body":"Bright yellow","rating":4},
                "moderation":{"moderationStatus":"APPROVED"},
                "reply":{"message":"Thanks!"}}"#,
        );
        assert!(r.is_approved());
        assert_eq!(r.author_name(), "Ana");
        assert_eq!(r.stars(), [true, true, true, true, false]);
        assert_eq!(r.display_date().as_deref(), Some("Mar 4, 2024"));
        assert_eq!(r.reply_message(), Some("Thanks!"));
    }

    #[test]
    fn test_defaults() {
        let r = review(r#"{"_id":"r2","moderation":{"moderationStatus":"SOMETHING_NEW"}}"#);
        assert!(!r.is_approved());
        assert_eq!(r.author_name(), "Anonymous");
        assert_eq!(r.rating(), 0);
        assert_eq!(r.display_date(), None);
    }

    #[test]
    fn test_approved_only() {
        let approved = review(r#"{"_id":"a","moderation":{"moderationStatus":"APPROVED"}}"#);
        let pending = review(r#"{"_id":"b","moderation":{"moderationStatus":"IN_MODERATION"}}"#);
        let page = approved_only(CursorPage::new(vec![approved, pending], Some("n".into())));

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id.as_str(), "a");
        assert!(page.has_next());
    }

    #[test]
    fn test_new_review_validation() {
        let ok = NewReview::new("p1".into(), " Great ", "Would buy again", 5).unwrap();
        assert_eq!(ok.title, "Great");

        assert!(NewReview::new("p1".into(), "  ", "body", 3).is_err());
        assert!(NewReview::new("p1".into(), "title", "", 3).is_err());
        assert!(NewReview::new("p1".into(), "title", "body", 0).is_err());
        assert!(NewReview::new("p1".into(), "title", "body", 6).is_err());
        assert!(NewReview::new(ProductId::default(), "title", "body", 3).is_err());
    }
}
