//! Observability for server-rendered storefront pages.
//!
//! This crate provides:
//! - `RenderId` - Correlation identifier for one page render
//! - `StructuredLogger` - Structured logging with render context
//! - `RenderMetrics` - Per-section render timings

mod logging;
mod metrics;
mod render_id;

pub use logging::*;
pub use metrics::*;
pub use render_id::RenderId;
