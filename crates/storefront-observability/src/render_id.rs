//! Render correlation identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

static SEED: AtomicU32 = AtomicU32::new(12345);

/// Identifier correlating every log line and timing of one page render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderId(String);

impl RenderId {
    /// Generate a new render ID.
    pub fn generate() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        Self(format!("{:x}-{:x}-{:x}", nanos, next_seed(), next_seed()))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn next_seed() -> u32 {
    let step = |s: u32| s.wrapping_mul(1103515245).wrapping_add(12345);
    let prev = SEED
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| Some(step(s)))
        .unwrap_or_else(|s| s);
    step(prev)
}

impl fmt::Display for RenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for RenderId {
    fn default() -> Self {
        Self::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() {
        let a = RenderId::generate();
        let b = RenderId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().split('-').count(), 3);
    }

    #[test]
    fn test_from_string() {
        let id = RenderId::from_string("render-1");
        assert_eq!(id.to_string(), "render-1");
    }
}
