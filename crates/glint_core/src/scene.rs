//! Scene container and the nearest-hit query.
//!
//! Objects keep the order they were added in; that order is the tie-break
//! for equal hit parameters and the identity used to exclude a surface from
//! its own shadow rays.

use glint_math::{Interval, Ray, Vec3, RAY_EPSILON};

use crate::{Light, SceneObject};

/// Stable identifier of an object: its insertion index in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(pub usize);

/// The closest valid intersection along a ray.
#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    /// Ray parameter, strictly greater than [`RAY_EPSILON`]
    pub t: f32,
    /// World-space hit point (`origin + t * direction`)
    pub point: Vec3,
    /// Which object was hit
    pub id: ObjectId,
    pub object: &'a SceneObject,
}

/// An ordered set of objects plus the lights that illuminate them.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, returning its id.
    pub fn add_object(&mut self, object: impl Into<SceneObject>) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(object.into());
        id
    }

    /// Add a light. The first light added supplies the global ambient term.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Look up an object by id.
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the closest object along `ray` with `t > RAY_EPSILON`.
    ///
    /// `exclude` skips one object entirely. Returns `None` when nothing
    /// qualifies; on equal `t` the earlier object wins.
    pub fn nearest_hit(&self, ray: &Ray, exclude: Option<ObjectId>) -> Option<Hit<'_>> {
        let valid = Interval::beyond(RAY_EPSILON);
        let mut closest: Option<(f32, usize)> = None;

        for (index, object) in self.objects.iter().enumerate() {
            if exclude == Some(ObjectId(index)) {
                continue;
            }
            let Some(t) = object.intersect(ray) else {
                continue;
            };
            if !valid.surrounds(t) {
                continue;
            }
            if closest.map_or(true, |(best, _)| t < best) {
                closest = Some((t, index));
            }
        }

        closest.map(|(t, index)| Hit {
            t,
            point: ray.at(t),
            id: ObjectId(index),
            object: &self.objects[index],
        })
    }

    /// True if any object other than `exclude` crosses `ray` with
    /// `RAY_EPSILON < t < max_t`.
    ///
    /// Same answer as checking `nearest_hit(..).t < max_t`, but stops at the
    /// first blocker.
    pub fn occluded(&self, ray: &Ray, max_t: f32, exclude: Option<ObjectId>) -> bool {
        let range = Interval::new(RAY_EPSILON, max_t);

        self.objects.iter().enumerate().any(|(index, object)| {
            exclude != Some(ObjectId(index))
                && object.intersect(ray).is_some_and(|t| range.surrounds(t))
        })
    }
}
