//! # Marionette
//!
//! Motion orchestration engine for articulated figures.
//!
//! This crate contains:
//! - Pose / Actor / Object / Step / Plan definitions
//! - Joint constraints, interpolation and the named-motion library
//! - Deterministic geometric planning (pick / drop)
//! - Tick-driven plan execution as an explicit state machine
//!
//! This crate does NOT care about:
//! - How intents are parsed from natural language
//! - How the resulting poses are rendered
//! - Scene authoring, persistence, or UI

pub mod config;
pub mod constraint;
pub mod executor;
pub mod motion;
pub mod planner;
pub mod runtime;
pub mod scene;
pub mod scheduler;
pub mod types;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, EngineConfig};
    pub use crate::constraint::constrain;
    pub use crate::executor::{
        CursorStatus, ExecState, ExecutionResult, Executor, PlanCursor, PlanObserver, StepEvent,
    };
    pub use crate::motion::{easing::Easing, interpolate, library};
    pub use crate::planner::{create_drop_plan, create_pick_plan, find_target};
    pub use crate::runtime::{DispatchOutcome, MotionRuntime, RuntimeError};
    pub use crate::scene::{Scene, SceneError, SceneHandle};
    pub use crate::scheduler::TickScheduler;
    pub use crate::types::{
        ActionStep, Actor, ActorId, MotionIntent, ObjectId, Plan, PlanId, Pose, SceneObject,
        Shape, StepKind,
    };
}

// Re-export key types at crate root
pub use config::EngineConfig;
pub use executor::{ExecutionResult, Executor, PlanCursor, PlanObserver};
pub use runtime::{MotionRuntime, RuntimeError};
pub use scene::{Scene, SceneHandle};
pub use scheduler::TickScheduler;
pub use types::{ActionStep, Actor, ActorId, MotionIntent, ObjectId, Plan, Pose, SceneObject};
