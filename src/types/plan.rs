//! Plan type definitions
//!
//! A Plan is an ordered, immutable sequence of action steps representing one
//! high-level goal. Step order is execution order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ActionStep;

/// Strongly-typed Plan ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(pub String);

impl PlanId {
    /// Generate a fresh random plan id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An ordered sequence of action steps for one goal.
///
/// A plan with zero steps completes immediately when executed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier for this plan
    pub id: PlanId,
    /// Human-readable description of the target, e.g. "red box"
    #[serde(default)]
    pub description: Option<String>,
    /// Execution order is step order
    pub steps: Vec<ActionStep>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Plan {
    /// Create a new plan from steps.
    pub fn new(steps: Vec<ActionStep>) -> Self {
        Self {
            id: PlanId::generate(),
            description: None,
            steps,
            created_at: Utc::now(),
        }
    }

    /// Attach a human-readable target description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Number of steps in this plan.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StepKind;

    #[test]
    fn test_plan_preserves_step_order() {
        let plan = Plan::new(vec![
            ActionStep::Squat { duration_ms: 700 },
            ActionStep::Drop { duration_ms: 200 },
            ActionStep::Stand { duration_ms: 700 },
        ])
        .with_description("release");

        let kinds: Vec<StepKind> = plan.steps.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, vec![StepKind::Squat, StepKind::Drop, StepKind::Stand]);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.description.as_deref(), Some("release"));
    }

    #[test]
    fn test_plan_ids_are_unique() {
        let a = Plan::new(Vec::new());
        let b = Plan::new(Vec::new());
        assert!(a.is_empty());
        assert_ne!(a.id, b.id);
    }
}
