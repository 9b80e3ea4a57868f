//! Scene state container
//!
//! The Scene owns the mutable actor and object records the engine plans from
//! and executes against. It is shared as a [`SceneHandle`]
//! (`Arc<tokio::sync::RwLock<Scene>>`): every executor tick takes the write
//! lock once, mutates, and releases, so per-tick mutations are applied
//! atomically even when several actors' plans run concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec3;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::types::{Actor, ActorId, ObjectId, SceneObject};

/// Shared, single-writer-per-tick scene state.
pub type SceneHandle = Arc<RwLock<Scene>>;

/// Scene mutation errors.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("actor not found: {0}")]
    ActorNotFound(ActorId),
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),
    #[error("object already attached: {0}")]
    ObjectAttached(ObjectId),
    #[error("actor already holding an object: {0}")]
    ActorBusy(ActorId),
}

/// Current actors and pickable objects.
#[derive(Debug, Default)]
pub struct Scene {
    actors: HashMap<ActorId, Actor>,
    objects: HashMap<ObjectId, SceneObject>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a scene in a shared handle.
    pub fn into_handle(self) -> SceneHandle {
        Arc::new(RwLock::new(self))
    }

    /// Add or replace an actor.
    pub fn insert_actor(&mut self, actor: Actor) {
        self.actors.insert(actor.id.clone(), actor);
    }

    /// Add or replace an object.
    pub fn insert_object(&mut self, object: SceneObject) {
        self.objects.insert(object.id.clone(), object);
    }

    pub fn actor(&self, id: &ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn actor_mut(&mut self, id: &ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id)
    }

    pub fn object(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    pub fn object_mut(&mut self, id: &ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id)
    }

    /// Iterate over all objects, in no particular order.
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// Attach an object to an actor's hand.
    ///
    /// Enforces the one-holder invariant: fails if the actor already holds
    /// something or the object is already attached elsewhere.
    pub fn attach(&mut self, actor_id: &ActorId, object_id: &ObjectId) -> Result<(), SceneError> {
        let actor = self
            .actors
            .get(actor_id)
            .ok_or_else(|| SceneError::ActorNotFound(actor_id.clone()))?;
        if actor.held.is_some() {
            return Err(SceneError::ActorBusy(actor_id.clone()));
        }
        let object = self
            .objects
            .get_mut(object_id)
            .ok_or_else(|| SceneError::ObjectNotFound(object_id.clone()))?;
        if object.attached {
            return Err(SceneError::ObjectAttached(object_id.clone()));
        }

        object.attached = true;
        if let Some(actor) = self.actors.get_mut(actor_id) {
            actor.held = Some(object_id.clone());
        }
        Ok(())
    }

    /// Detach whatever the actor holds, placing it on the ground beneath the
    /// actor. Returns the released object id, or `None` if hands were empty.
    pub fn detach(&mut self, actor_id: &ActorId) -> Result<Option<ObjectId>, SceneError> {
        let actor = self
            .actors
            .get_mut(actor_id)
            .ok_or_else(|| SceneError::ActorNotFound(actor_id.clone()))?;
        let Some(object_id) = actor.held.take() else {
            return Ok(None);
        };
        let ground = Vec3::new(actor.position.x, 0.0, actor.position.z);
        if let Some(object) = self.objects.get_mut(&object_id) {
            object.attached = false;
            object.position = ground;
        }
        Ok(Some(object_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Shape;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new();
        scene.insert_actor(Actor::new("a1", "Robo", Vec3::new(1.0, 0.0, 2.0)));
        scene.insert_object(SceneObject::new(
            "o1",
            "red box",
            "red",
            Shape::Box,
            Vec3::new(3.0, 0.5, 2.0),
            1.0,
        ));
        scene
    }

    #[test]
    fn test_attach_sets_both_sides_of_the_invariant() {
        let mut scene = sample_scene();
        scene.attach(&"a1".into(), &"o1".into()).unwrap();
        assert_eq!(scene.actor(&"a1".into()).unwrap().held, Some("o1".into()));
        assert!(scene.object(&"o1".into()).unwrap().attached);
    }

    #[test]
    fn test_attach_rejects_busy_actor_and_held_object() {
        let mut scene = sample_scene();
        scene.insert_object(SceneObject::new(
            "o2",
            "blue ball",
            "blue",
            Shape::Sphere,
            Vec3::ZERO,
            0.5,
        ));
        scene.attach(&"a1".into(), &"o1".into()).unwrap();

        let err = scene.attach(&"a1".into(), &"o2".into()).unwrap_err();
        assert!(matches!(err, SceneError::ActorBusy(_)));

        scene.insert_actor(Actor::new("a2", "Other", Vec3::ZERO));
        let err = scene.attach(&"a2".into(), &"o1".into()).unwrap_err();
        assert!(matches!(err, SceneError::ObjectAttached(_)));
    }

    #[test]
    fn test_detach_drops_to_ground_beneath_actor() {
        let mut scene = sample_scene();
        scene.attach(&"a1".into(), &"o1".into()).unwrap();

        let released = scene.detach(&"a1".into()).unwrap();
        assert_eq!(released, Some("o1".into()));

        let object = scene.object(&"o1".into()).unwrap();
        assert!(!object.attached);
        assert_eq!(object.position, Vec3::new(1.0, 0.0, 2.0));
        assert!(scene.actor(&"a1".into()).unwrap().held.is_none());
    }

    #[test]
    fn test_detach_with_empty_hands_is_a_no_op() {
        let mut scene = sample_scene();
        assert_eq!(scene.detach(&"a1".into()).unwrap(), None);
    }

    #[test]
    fn test_unknown_ids_are_reported() {
        let mut scene = sample_scene();
        assert!(matches!(
            scene.attach(&"ghost".into(), &"o1".into()),
            Err(SceneError::ActorNotFound(_))
        ));
        assert!(matches!(
            scene.attach(&"a1".into(), &"ghost".into()),
            Err(SceneError::ObjectNotFound(_))
        ));
    }
}
