//! Planner module
//!
//! The Planner is responsible for:
//! - Resolving a free-text target description to one eligible scene object
//! - Decomposing a goal into an ordered list of parameterized action steps
//!
//! The Planner does NOT handle:
//! - Precondition checks (already holding / empty hands) — the caller's job
//! - Timing, interpolation, or any state mutation — the executor's job

use crate::config::EngineConfig;
use crate::types::{ActionStep, Actor, Plan, SceneObject, Shape};

/// Keyword → color-token table for the second resolution tier.
const COLOR_KEYWORDS: [(&str, &[&str]); 6] = [
    ("red", &["red", "crimson", "scarlet"]),
    ("blue", &["blue", "navy", "azure"]),
    ("green", &["green", "emerald"]),
    ("yellow", &["yellow", "gold"]),
    ("purple", &["purple", "violet"]),
    ("orange", &["orange"]),
];

/// Shape keywords for the third resolution tier.
const SHAPE_KEYWORDS: [(&str, Shape); 6] = [
    ("box", Shape::Box),
    ("cube", Shape::Box),
    ("sphere", Shape::Sphere),
    ("ball", Shape::Sphere),
    ("cylinder", Shape::Cylinder),
    ("can", Shape::Cylinder),
];

/// Resolve a free-text query to one eligible (not already held) object.
///
/// Tiers, first successful one wins:
/// 1. substring match against the object's display name;
/// 2. the query names a known color keyword, and the object's color or name
///    contains one of that keyword's tokens;
/// 3. the query names a shape keyword, and the object has that shape tag.
pub fn find_target<'a>(objects: &'a [SceneObject], query: &str) -> Option<&'a SceneObject> {
    let query = query.to_lowercase();
    let eligible = || objects.iter().filter(|o| !o.attached);

    if let Some(hit) = eligible().find(|o| o.name.to_lowercase().contains(&query)) {
        return Some(hit);
    }

    for (keyword, tokens) in COLOR_KEYWORDS {
        if !query.contains(keyword) {
            continue;
        }
        let hit = eligible().find(|o| {
            let color = o.color.to_lowercase();
            let name = o.name.to_lowercase();
            tokens.iter().any(|t| color.contains(t) || name.contains(t))
        });
        if hit.is_some() {
            return hit;
        }
    }

    for (keyword, shape) in SHAPE_KEYWORDS {
        if !query.contains(keyword) {
            continue;
        }
        let hit = eligible().find(|o| o.shape == shape);
        if hit.is_some() {
            return hit;
        }
    }

    None
}

/// Build the step sequence for picking up an object.
///
/// Step order encodes the physical precondition chain: be near and facing
/// the object before bending, reach before grasping, grasp before lifting.
/// `Navigate` is emitted only when the actor is farther than the configured
/// threshold, with duration proportional to planar distance.
pub fn create_pick_plan(actor: &Actor, object: &SceneObject, config: &EngineConfig) -> Plan {
    let distance = actor.planar_distance_to(object.position);
    let heading = actor.heading_toward(object.position);

    let mut steps = Vec::with_capacity(6);
    if distance > config.nav_threshold {
        steps.push(ActionStep::Navigate {
            target: glam::Vec3::new(object.position.x, actor.position.y, object.position.z),
            heading,
            duration_ms: (distance * config.nav_ms_per_unit) as u64,
        });
    }
    steps.push(ActionStep::Align {
        heading,
        duration_ms: config.align_ms,
    });
    steps.push(ActionStep::Squat {
        duration_ms: config.squat_ms,
    });
    steps.push(ActionStep::Reach {
        duration_ms: config.reach_ms,
    });
    steps.push(ActionStep::Grasp {
        object: object.id.clone(),
        duration_ms: config.grasp_ms,
    });
    steps.push(ActionStep::Lift {
        duration_ms: config.lift_ms,
    });

    tracing::debug!(
        actor = %actor.id,
        object = %object.id,
        distance,
        heading,
        step_count = steps.len(),
        "pick plan created"
    );
    Plan::new(steps).with_description(object.name.clone())
}

/// Build the step sequence for releasing the held object near the ground:
/// always `Squat`, `Drop`, `Stand`.
pub fn create_drop_plan(actor: &Actor, config: &EngineConfig) -> Plan {
    tracing::debug!(actor = %actor.id, "drop plan created");
    Plan::new(vec![
        ActionStep::Squat {
            duration_ms: config.squat_ms,
        },
        ActionStep::Drop {
            duration_ms: config.drop_ms,
        },
        ActionStep::Stand {
            duration_ms: config.stand_ms,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StepKind;
    use glam::Vec3;

    fn object(id: &str, name: &str, color: &str, shape: Shape) -> SceneObject {
        SceneObject::new(id, name, color, shape, Vec3::new(2.0, 0.5, 0.0), 1.0)
    }

    fn kinds(plan: &Plan) -> Vec<StepKind> {
        plan.steps.iter().map(|s| s.kind()).collect()
    }

    #[test]
    fn test_find_target_prefers_name_match() {
        let objects = vec![
            object("o1", "blue ball", "blue", Shape::Sphere),
            object("o2", "red box", "red", Shape::Box),
        ];
        let hit = find_target(&objects, "red box").unwrap();
        assert_eq!(hit.id.as_str(), "o2");
    }

    #[test]
    fn test_find_target_falls_back_to_color_then_shape() {
        let objects = vec![
            object("o1", "crate", "crimson", Shape::Box),
            object("o2", "orb", "blue", Shape::Sphere),
        ];
        // "red" matches no name; the color table maps it onto "crimson".
        let hit = find_target(&objects, "something red").unwrap();
        assert_eq!(hit.id.as_str(), "o1");

        // No name or color match; "ball" resolves by shape tag.
        let hit = find_target(&objects, "the ball").unwrap();
        assert_eq!(hit.id.as_str(), "o2");

        assert!(find_target(&objects, "purple cylinder").is_none());
    }

    #[test]
    fn test_attached_objects_are_never_eligible() {
        let mut held = object("o1", "red sphere", "red", Shape::Sphere);
        held.attached = true;
        let free = object("o2", "red box", "red", Shape::Box);

        let objects = vec![held.clone(), free];
        let hit = find_target(&objects, "red").unwrap();
        assert_eq!(hit.id.as_str(), "o2");

        let only_held = vec![held];
        assert!(find_target(&only_held, "red").is_none());
    }

    #[test]
    fn test_pick_plan_far_away_starts_with_navigate() {
        let config = EngineConfig::default();
        let actor = Actor::new("a1", "Robo", Vec3::ZERO);
        let target = object("o1", "red box", "red", Shape::Box);

        let plan = create_pick_plan(&actor, &target, &config);
        assert_eq!(
            kinds(&plan),
            vec![
                StepKind::Navigate,
                StepKind::Align,
                StepKind::Squat,
                StepKind::Reach,
                StepKind::Grasp,
                StepKind::Lift,
            ]
        );
        // distance 2.0 at the configured time-per-unit
        match &plan.steps[0] {
            ActionStep::Navigate { duration_ms, .. } => {
                assert_eq!(*duration_ms, (2.0 * config.nav_ms_per_unit) as u64);
            }
            other => panic!("expected navigate, got {:?}", other),
        }
    }

    #[test]
    fn test_pick_plan_nearby_skips_navigate() {
        let config = EngineConfig::default();
        let actor = Actor::new("a1", "Robo", Vec3::new(1.8, 0.0, 0.0));
        let target = object("o1", "red box", "red", Shape::Box);

        let plan = create_pick_plan(&actor, &target, &config);
        assert_eq!(plan.steps[0].kind(), StepKind::Align);
        assert_eq!(plan.len(), 5);
    }

    #[test]
    fn test_pick_plan_ends_with_lift_and_carries_one_grasp() {
        let config = EngineConfig::default();
        let actor = Actor::new("a1", "Robo", Vec3::ZERO);
        let target = object("o7", "green cube", "green", Shape::Box);

        let plan = create_pick_plan(&actor, &target, &config);
        assert_eq!(plan.steps.last().unwrap().kind(), StepKind::Lift);

        let grasps: Vec<_> = plan
            .steps
            .iter()
            .filter_map(|s| match s {
                ActionStep::Grasp { object, .. } => Some(object.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(grasps, vec!["o7".into()]);
    }

    #[test]
    fn test_drop_plan_is_squat_drop_stand() {
        let config = EngineConfig::default();
        let actor = Actor::new("a1", "Robo", Vec3::ZERO);
        let plan = create_drop_plan(&actor, &config);
        assert_eq!(
            kinds(&plan),
            vec![StepKind::Squat, StepKind::Drop, StepKind::Stand]
        );
    }

    #[test]
    fn test_pick_plan_heading_faces_the_object() {
        let config = EngineConfig::default();
        let actor = Actor::new("a1", "Robo", Vec3::ZERO);
        let mut target = object("o1", "red box", "red", Shape::Box);
        target.position = Vec3::new(0.0, 0.5, 3.0);

        let plan = create_pick_plan(&actor, &target, &config);
        match &plan.steps[1] {
            ActionStep::Align { heading, .. } => assert_eq!(*heading, 0.0),
            other => panic!("expected align, got {:?}", other),
        }
    }
}
