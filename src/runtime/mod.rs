//! Motion runtime
//!
//! The MotionRuntime is the engine's front door: it accepts a tagged
//! [`MotionIntent`] for an actor, checks the intent's preconditions against
//! the current scene, plans, and drives the plan to completion. Precondition
//! failures reject the intent before any step is created, so a rejected
//! dispatch leaves the scene untouched.

use std::sync::Arc;

use thiserror::Error;

use crate::config::EngineConfig;
use crate::executor::{ExecutionResult, Executor, PlanObserver};
use crate::planner::{create_drop_plan, create_pick_plan, find_target};
use crate::scene::SceneHandle;
use crate::scheduler::TickScheduler;
use crate::types::{ActorId, MotionIntent, Plan, PlanId};

/// Intent dispatch errors. All are precondition rejections: none of them
/// leaves a partially-executed plan behind.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unknown actor: {0}")]
    UnknownActor(ActorId),
    #[error("actor {0} is already holding an object")]
    AlreadyHolding(ActorId),
    #[error("actor {0} is not holding anything")]
    NothingHeld(ActorId),
    #[error("no object matches description: {0:?}")]
    NoMatchingObject(String),
}

/// What a successful dispatch produced and how it ended.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    pub plan: PlanId,
    pub steps: usize,
    pub result: ExecutionResult,
}

/// The intent-to-motion pipeline over one shared scene.
pub struct MotionRuntime {
    scene: SceneHandle,
    config: EngineConfig,
    executor: Executor,
    scheduler: TickScheduler,
}

impl MotionRuntime {
    /// Create a runtime over a shared scene.
    pub fn new(scene: SceneHandle, config: EngineConfig) -> Self {
        let executor = Executor::new(config.clone());
        Self {
            scene,
            config,
            executor,
            scheduler: TickScheduler::new(),
        }
    }

    /// Attach a plan lifecycle observer.
    pub fn with_observer(mut self, observer: Arc<dyn PlanObserver>) -> Self {
        self.executor = Executor::new(self.config.clone()).with_observer(observer);
        self
    }

    /// The shared scene handle.
    pub fn scene(&self) -> &SceneHandle {
        &self.scene
    }

    /// Cancel every plan this runtime is currently driving.
    pub fn shutdown(&self) {
        self.scheduler.shutdown();
    }

    /// Dispatch an intent for an actor and drive the resulting plan to
    /// completion.
    ///
    /// Holds the scene lock only while checking preconditions and planning;
    /// execution re-acquires it tick by tick.
    pub async fn dispatch(
        &self,
        intent: MotionIntent,
        actor_id: &ActorId,
    ) -> Result<DispatchOutcome, RuntimeError> {
        let plan = self.plan_for(intent, actor_id).await?;
        let steps = plan.len();
        let plan_id = plan.id.clone();
        tracing::info!(actor = %actor_id, plan = %plan_id, steps, "intent dispatched");

        let result = self
            .executor
            .run(
                plan,
                actor_id.clone(),
                self.scene.clone(),
                self.scheduler.register(),
            )
            .await;

        Ok(DispatchOutcome {
            plan: plan_id,
            steps,
            result,
        })
    }

    async fn plan_for(
        &self,
        intent: MotionIntent,
        actor_id: &ActorId,
    ) -> Result<Plan, RuntimeError> {
        let scene = self.scene.read().await;
        let actor = scene
            .actor(actor_id)
            .ok_or_else(|| RuntimeError::UnknownActor(actor_id.clone()))?;

        match intent {
            MotionIntent::Pick { description } => {
                if actor.is_holding() {
                    return Err(RuntimeError::AlreadyHolding(actor_id.clone()));
                }
                let objects: Vec<_> = scene.objects().cloned().collect();
                let target = find_target(&objects, &description)
                    .ok_or(RuntimeError::NoMatchingObject(description))?;
                Ok(create_pick_plan(actor, target, &self.config))
            }
            MotionIntent::Drop => {
                if !actor.is_holding() {
                    return Err(RuntimeError::NothingHeld(actor_id.clone()));
                }
                Ok(create_drop_plan(actor, &self.config))
            }
        }
    }
}
