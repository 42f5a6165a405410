//! Per-section render timings.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::RenderId;

/// Timings for one page render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderMetrics {
    pub render_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Sections in render order.
    pub sections: Vec<SectionMetrics>,
    /// Total render duration (microseconds).
    pub total_duration_us: u64,
    /// Size of the assembled page in bytes.
    pub page_bytes: usize,
}

impl RenderMetrics {
    /// Names of sections that were replaced by their fallback.
    pub fn fallback_sections(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.used_fallback)
            .map(|s| s.name.as_str())
            .collect()
    }
}

/// Metrics for a single section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionMetrics {
    pub name: String,
    /// Time from render start to section start (microseconds).
    pub start_us: u64,
    /// Section render duration (microseconds).
    pub duration_us: u64,
    /// Bytes of HTML produced.
    pub bytes: usize,
    /// Whether the section used its fallback.
    pub used_fallback: bool,
}

/// Collector for render metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    render_id: RenderId,
    product: Option<String>,
    start: Instant,
    sections: Vec<SectionMetrics>,
}

impl MetricsCollector {
    pub fn new(render_id: RenderId) -> Self {
        Self {
            render_id,
            product: None,
            start: Instant::now(),
            sections: Vec::new(),
        }
    }

    pub fn with_product(mut self, slug: impl Into<String>) -> Self {
        self.product = Some(slug.into());
        self
    }

    /// Record a finished section that started at `started`.
    pub fn record_section(
        &mut self,
        name: impl Into<String>,
        started: Instant,
        bytes: usize,
        used_fallback: bool,
    ) {
        let start_us = started.saturating_duration_since(self.start).as_micros() as u64;
        self.sections.push(SectionMetrics {
            name: name.into(),
            start_us,
            duration_us: started.elapsed().as_micros() as u64,
            bytes,
            used_fallback,
        });
    }

    /// Finish collection.
    pub fn finish(self, page_bytes: usize) -> RenderMetrics {
        RenderMetrics {
            render_id: self.render_id.to_string(),
            product: self.product,
            sections: self.sections,
            total_duration_us: self.start.elapsed().as_micros() as u64,
            page_bytes,
        }
    }
}
