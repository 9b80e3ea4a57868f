//! Intent type definitions
//!
//! MotionIntent is the tagged inbound command produced by an external
//! natural-language or rule-based parser. Only motion intents are modeled
//! here; non-motion commands never reach this engine.

use serde::{Deserialize, Serialize};

/// A resolved, tagged motion command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum MotionIntent {
    /// Pick up the object best matching the free-text description.
    Pick {
        /// Free-text target description, e.g. "the red box"
        description: String,
    },
    /// Release the currently held object near the ground.
    Drop,
}

impl MotionIntent {
    /// Create a pick intent.
    pub fn pick(description: impl Into<String>) -> Self {
        Self::Pick {
            description: description.into(),
        }
    }
}
