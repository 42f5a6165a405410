//! Product catalog module.
//!
//! Contains the platform's product record: options, choices, variants,
//! stock and media.

mod media;
mod option;
mod product;
mod stock;
mod variant;

pub use media::{ImageInfo, MediaGallery, MediaItem, MediaType, VideoFile, VideoInfo};
pub use option::{Choice, OptionKind, ProductOption};
pub use product::{
    DataAnomaly, Discount, DiscountKind, InfoSection, PriceRange, Product,
};
pub use stock::{InventoryStatus, StockRecord};
pub use variant::{Variant, VariantChoices, VariantDetails};
