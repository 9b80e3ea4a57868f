//! Executor module
//!
//! The Executor is responsible for:
//! - Driving one plan's steps strictly in order, exactly one live at a time
//! - Tick-driven interpolation of pose, position and heading per step kind
//! - Signalling plan completion to its caller exactly once
//!
//! The state machine is explicit: [`PlanCursor`] holds
//! `Idle → Running(step) → Done` and a single [`PlanCursor::advance`]
//! transition driven by a caller-supplied `Instant`, so it is testable with a
//! synthetic clock and no real timers. The async driver in [`Executor`] wraps
//! the cursor in a `tokio::time::interval` loop at the configured tick.

use std::f32::consts::TAU;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use glam::Vec3;
use tokio_util::sync::CancellationToken;

use crate::config::EngineConfig;
use crate::constraint::constrain;
use crate::motion::easing::Easing;
use crate::motion::interpolate::{lerp, lerp_arms_split, lerp_pose, lerp_vec3};
use crate::motion::library;
use crate::scene::{Scene, SceneHandle};
use crate::types::{ActionStep, ActorId, Plan, PlanId, Pose, StepKind, TorsoPose};

/// Reach: the shoulder runs ahead of overall progress by this factor.
const REACH_SHOULDER_LEAD: f32 = 1.4;
/// Reach: the elbow only starts moving after this share of progress.
const REACH_ELBOW_DELAY: f32 = 0.25;
/// Squat: share of progress spent blending into the preparation pose.
const SQUAT_PREP_SHARE: f32 = 0.3;

/// Execution state of one plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecState {
    /// Not yet started
    Idle,
    /// Executing the step at this index
    Running { step: usize },
    /// All steps completed
    Done,
}

/// Result of advancing a cursor by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStatus {
    Running,
    Completed,
}

/// Terminal outcome of the async driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionResult {
    /// Every step ran to full progress
    Completed,
    /// The cancellation handle fired mid-plan
    Cancelled,
}

/// Lifecycle event emitted at step and plan boundaries.
#[derive(Debug, Clone)]
pub enum StepEvent {
    StepStarted {
        plan: PlanId,
        actor: ActorId,
        index: usize,
        kind: StepKind,
    },
    StepCompleted {
        plan: PlanId,
        actor: ActorId,
        index: usize,
        kind: StepKind,
    },
    /// Emitted exactly once per executed plan.
    PlanCompleted { plan: PlanId, actor: ActorId },
}

/// Sink interface for plan lifecycle reporting.
#[async_trait]
pub trait PlanObserver: Send + Sync {
    async fn on_event(&self, event: StepEvent);
}

/// Actor state captured at step start; the interpolation "from" value.
#[derive(Debug, Clone, Copy)]
struct StepSnapshot {
    pose: Pose,
    position: Vec3,
    heading: f32,
}

/// The execution cursor for one plan: which step is live, when it started,
/// and the actor snapshot it interpolates from. Created when a plan begins
/// executing and discarded when it completes.
pub struct PlanCursor {
    plan: Plan,
    actor: ActorId,
    config: EngineConfig,
    state: ExecState,
    step_started: Option<Instant>,
    snapshot: Option<StepSnapshot>,
    /// The live step degraded to a no-op (missing runtime referent).
    noop: bool,
    events: Vec<StepEvent>,
}

impl PlanCursor {
    /// Create an idle cursor for a plan.
    pub fn new(plan: Plan, actor: ActorId, config: EngineConfig) -> Self {
        Self {
            plan,
            actor,
            config,
            state: ExecState::Idle,
            step_started: None,
            snapshot: None,
            noop: false,
            events: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> ExecState {
        self.state
    }

    /// Drain lifecycle events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<StepEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin executing the plan. A plan with zero steps completes
    /// immediately.
    pub fn start(&mut self, scene: &mut Scene, now: Instant) -> CursorStatus {
        debug_assert_eq!(self.state, ExecState::Idle);
        if self.plan.is_empty() {
            self.finish_plan();
            return CursorStatus::Completed;
        }
        self.state = ExecState::Running { step: 0 };
        self.begin_step(scene, now);
        CursorStatus::Running
    }

    /// Advance the live step to `now`. When the step reaches full progress
    /// its successor starts synchronously at the same instant; the status is
    /// `Completed` once the final step finishes.
    pub fn advance(&mut self, scene: &mut Scene, now: Instant) -> CursorStatus {
        let ExecState::Running { step } = self.state else {
            return match self.state {
                ExecState::Done => CursorStatus::Completed,
                _ => CursorStatus::Running,
            };
        };

        let t = self.progress(now);
        if !self.noop {
            self.apply_step(scene, step, t);
        }

        if t >= 1.0 {
            let kind = self.plan.steps[step].kind();
            self.events.push(StepEvent::StepCompleted {
                plan: self.plan.id.clone(),
                actor: self.actor.clone(),
                index: step,
                kind,
            });
            tracing::debug!(
                plan = %self.plan.id,
                actor = %self.actor,
                step = %kind,
                index = step,
                "step completed"
            );

            let next = step + 1;
            if next >= self.plan.len() {
                self.finish_plan();
                return CursorStatus::Completed;
            }
            self.state = ExecState::Running { step: next };
            self.begin_step(scene, now);
        }
        CursorStatus::Running
    }

    /// Normalized progress of the live step at `now`, clamped to [0, 1].
    fn progress(&self, now: Instant) -> f32 {
        if self.noop {
            return 1.0;
        }
        let Some(started) = self.step_started else {
            return 1.0;
        };
        let ExecState::Running { step } = self.state else {
            return 1.0;
        };
        let duration = self.plan.steps[step].duration();
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
    }

    fn finish_plan(&mut self) {
        self.state = ExecState::Done;
        self.step_started = None;
        self.snapshot = None;
        self.events.push(StepEvent::PlanCompleted {
            plan: self.plan.id.clone(),
            actor: self.actor.clone(),
        });
        tracing::info!(plan = %self.plan.id, actor = %self.actor, "plan completed");
    }

    /// Snapshot the actor, perform any instantaneous mutation the step
    /// requires, and record the start instant.
    fn begin_step(&mut self, scene: &mut Scene, now: Instant) {
        let ExecState::Running { step } = self.state else {
            return;
        };
        self.step_started = Some(now);
        self.noop = false;

        let Some(actor) = scene.actor(&self.actor) else {
            tracing::warn!(actor = %self.actor, "actor vanished mid-plan, step degraded to no-op");
            self.noop = true;
            return;
        };
        self.snapshot = Some(StepSnapshot {
            pose: actor.pose,
            position: actor.position,
            heading: actor.heading,
        });

        let kind = self.plan.steps[step].kind();
        self.events.push(StepEvent::StepStarted {
            plan: self.plan.id.clone(),
            actor: self.actor.clone(),
            index: step,
            kind,
        });
        tracing::debug!(
            plan = %self.plan.id,
            actor = %self.actor,
            step = %kind,
            index = step,
            "step started"
        );

        match &self.plan.steps[step] {
            // Heading snaps immediately; only position interpolates.
            ActionStep::Navigate { heading, .. } => {
                let heading = *heading;
                if let Some(actor) = scene.actor_mut(&self.actor) {
                    actor.heading = heading;
                }
            }
            // Discrete: mutate now, then wait out the nominal duration.
            ActionStep::Grasp { object, .. } => {
                let object = object.clone();
                if let Err(err) = scene.attach(&self.actor, &object) {
                    tracing::warn!(
                        actor = %self.actor,
                        object = %object,
                        error = %err,
                        "grasp degraded to no-op"
                    );
                    self.noop = true;
                }
            }
            ActionStep::Drop { .. } => match scene.detach(&self.actor) {
                Ok(Some(released)) => {
                    tracing::debug!(actor = %self.actor, object = %released, "object released");
                }
                Ok(None) => {
                    tracing::warn!(actor = %self.actor, "drop with empty hands, no-op");
                    self.noop = true;
                }
                Err(err) => {
                    tracing::warn!(actor = %self.actor, error = %err, "drop degraded to no-op");
                    self.noop = true;
                }
            },
            ActionStep::Lift { .. } => {
                if scene.actor(&self.actor).is_some_and(|a| a.held.is_none()) {
                    tracing::warn!(actor = %self.actor, "lift with empty hands, no-op");
                    self.noop = true;
                }
            }
            _ => {}
        }
    }

    /// Apply the live step's interpolation at progress `t`. Every pose
    /// commit passes through the joint constraint system.
    fn apply_step(&mut self, scene: &mut Scene, step: usize, t: f32) {
        let Some(snapshot) = self.snapshot else {
            return;
        };
        // Weight is read at evaluation time, before the actor borrow.
        let held_weight = scene
            .actor(&self.actor)
            .and_then(|a| a.held.as_ref())
            .and_then(|id| scene.object(id))
            .map(|o| o.size)
            .unwrap_or(0.0);

        let config = &self.config;
        let action = &self.plan.steps[step];
        let Some(actor) = scene.actor_mut(&self.actor) else {
            return;
        };

        match action {
            ActionStep::Navigate {
                target,
                duration_ms,
                ..
            } => {
                let eased = Easing::EaseInOut.apply(t);
                let mut position = lerp_vec3(snapshot.position, *target, eased);

                // Stride phase runs on elapsed time, not step progress, so
                // footstep cadence is constant regardless of distance.
                let elapsed_ms = t * *duration_ms as f32;
                let phase =
                    (elapsed_ms / config.stride_period_ms as f32).rem_euclid(1.0);
                position.y =
                    snapshot.position.y + config.walk_bob * (phase * TAU).sin().max(0.0);

                if t >= 1.0 {
                    // Exact final position, no floating-point drift.
                    position = *target;
                }
                actor.position = position;
                actor.pose = constrain(library::walk_cycle(phase));
            }
            ActionStep::Align { heading, .. } => {
                // Raw numeric interpolation; no shortest-path handling.
                let eased = Easing::EaseInOut.apply(t);
                actor.heading = lerp(snapshot.heading, *heading, eased);
            }
            ActionStep::Squat { .. } => {
                let eased = Easing::Back.apply(t);
                let pose = if eased < SQUAT_PREP_SHARE {
                    lerp_pose(
                        &snapshot.pose,
                        &library::squat_prep(),
                        eased / SQUAT_PREP_SHARE,
                    )
                } else {
                    lerp_pose(
                        &library::squat_prep(),
                        &library::squat(),
                        (eased - SQUAT_PREP_SHARE) / (1.0 - SQUAT_PREP_SHARE),
                    )
                };
                actor.pose = constrain(pose);
                actor.position.y = snapshot.position.y - config.squat_descent * eased;
            }
            ActionStep::Reach { .. } => {
                let shoulder_t = (t * REACH_SHOULDER_LEAD).min(1.0);
                let elbow_t =
                    ((t - REACH_ELBOW_DELAY) / (1.0 - REACH_ELBOW_DELAY)).clamp(0.0, 1.0);
                let pose = lerp_arms_split(
                    &snapshot.pose,
                    &library::reach_down(),
                    shoulder_t,
                    elbow_t,
                );
                actor.pose = constrain(pose);
            }
            ActionStep::Lift { .. } => {
                let eased = Easing::EaseInOut.apply(t);
                let target = library::holding(held_weight);
                let mut pose = lerp_pose(&snapshot.pose, &target, eased);
                // Torso straightens only in the second half of the step.
                pose.torso = if t < 0.5 {
                    snapshot.pose.torso
                } else {
                    let t2 = (t - 0.5) * 2.0;
                    TorsoPose {
                        pitch: lerp(snapshot.pose.torso.pitch, target.torso.pitch, t2),
                        roll: lerp(snapshot.pose.torso.roll, target.torso.roll, t2),
                    }
                };
                actor.pose = constrain(pose);
                actor.position.y = snapshot.position.y + config.squat_descent * eased;
            }
            ActionStep::Stand { .. } => {
                let eased = Easing::EaseInOut.apply(t);
                actor.pose = constrain(lerp_pose(&snapshot.pose, &library::idle(), eased));
                actor.position.y = snapshot.position.y + config.squat_descent * eased;
            }
            // Pure delays: state was mutated at step start.
            ActionStep::Grasp { .. } | ActionStep::Drop { .. } => {}
        }
    }
}

/// The async driver: runs one cursor per call at the configured tick.
///
/// Stateless between invocations — all cursor state lives for the duration
/// of one plan's execution only.
pub struct Executor {
    config: EngineConfig,
    observer: Option<Arc<dyn PlanObserver>>,
}

impl Executor {
    /// Create an executor with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    /// Attach a lifecycle observer.
    pub fn with_observer(mut self, observer: Arc<dyn PlanObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Run a plan for an actor to completion (or cancellation).
    ///
    /// One `tokio::time::interval` drives the cursor; no second driver runs
    /// for the same plan. `cancel` is the scheduler-issued teardown handle.
    pub async fn run(
        &self,
        plan: Plan,
        actor: ActorId,
        scene: SceneHandle,
        cancel: CancellationToken,
    ) -> ExecutionResult {
        let mut cursor = PlanCursor::new(plan, actor, self.config.clone());

        let started = {
            let mut guard = scene.write().await;
            cursor.start(&mut guard, Instant::now())
        };
        self.report(&mut cursor).await;
        if started == CursorStatus::Completed {
            return ExecutionResult::Completed;
        }

        let mut interval = tokio::time::interval(self.config.tick_interval());
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::warn!("plan execution cancelled by scheduler teardown");
                    return ExecutionResult::Cancelled;
                }
                _ = interval.tick() => {
                    let status = {
                        let mut guard = scene.write().await;
                        cursor.advance(&mut guard, Instant::now())
                    };
                    self.report(&mut cursor).await;
                    if status == CursorStatus::Completed {
                        return ExecutionResult::Completed;
                    }
                }
            }
        }
    }

    async fn report(&self, cursor: &mut PlanCursor) {
        let events = cursor.drain_events();
        if let Some(observer) = &self.observer {
            for event in events {
                observer.on_event(event).await;
            }
        }
    }
}
