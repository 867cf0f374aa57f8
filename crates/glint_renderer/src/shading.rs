//! Phong shading with hard shadows and recursive mirror reflection.

use glint_core::{Color, Hit, Light, Material, ObjectId, Scene};
use glint_math::{reflect, try_normalize, Ray, Vec3, RAY_EPSILON};

use crate::{AmbientMode, RenderConfig, RenderResult};

/// Hard cap on mirror bounces. Shading at this depth casts no reflection ray.
pub const MAX_REFLECTION_DEPTH: u32 = 5;

/// True if something other than `exclude` sits between `point` and the light.
///
/// The shadow ray starts `RAY_EPSILON` towards the light and only blockers
/// closer than the light count. A light exactly at `point` casts no shadow.
pub fn in_shadow(scene: &Scene, point: Vec3, light_position: Vec3, exclude: Option<ObjectId>) -> bool {
    let to_light = light_position - point;
    let Ok(light_dir) = try_normalize(to_light) else {
        return false;
    };

    let shadow_ray = Ray::new(point + light_dir * RAY_EPSILON, light_dir);
    scene.occluded(&shadow_ray, to_light.length(), exclude)
}

/// Color of `hit` as seen along `view_dir` (unit vector from the hit point
/// back towards the viewer).
///
/// `ambient + sum(unshadowed diffuse + specular) + reflectivity * reflected`,
/// each channel clamped to at most 1.
pub fn shade(
    scene: &Scene,
    hit: &Hit<'_>,
    view_dir: Vec3,
    depth: u32,
    config: &RenderConfig,
) -> RenderResult<Color> {
    let material = hit.object.material();
    let normal = hit.object.normal_at(hit.point)?;

    let mut color = ambient(material, scene.lights(), config.ambient);

    for light in scene.lights() {
        if in_shadow(scene, hit.point, light.position(), Some(hit.id)) {
            continue;
        }
        color += phong(material, light, hit.point, normal, view_dir);
    }

    if material.is_reflective() && depth < MAX_REFLECTION_DEPTH {
        let reflect_dir = try_normalize(reflect(-view_dir, normal))?;
        let reflect_ray = Ray::new(hit.point + reflect_dir * RAY_EPSILON, reflect_dir);

        if let Some(next) = scene.nearest_hit(&reflect_ray, None) {
            let next_view = try_normalize(reflect_ray.origin() - next.point)?;
            let reflected = shade(scene, &next, next_view, depth + 1, config)?;
            color += material.reflectivity() * reflected;
        }
    }

    Ok(color.min(Color::ONE))
}

/// Global ambient term.
fn ambient(material: &Material, lights: &[Light], mode: AmbientMode) -> Color {
    match mode {
        AmbientMode::FirstLight => lights
            .first()
            .map_or(Color::ZERO, |light| material.ambient() * light.ambient()),
        AmbientMode::AllLights => lights
            .iter()
            .map(|light| material.ambient() * light.ambient())
            .sum(),
    }
}

/// Diffuse + specular from one unshadowed light.
fn phong(material: &Material, light: &Light, point: Vec3, normal: Vec3, view_dir: Vec3) -> Color {
    let Ok(light_dir) = try_normalize(light.position() - point) else {
        return Color::ZERO;
    };

    let diffuse_strength = normal.dot(light_dir).max(0.0);
    let diffuse = material.diffuse() * light.diffuse() * diffuse_strength;

    let reflect_dir = reflect(-light_dir, normal);
    let specular_strength = view_dir.dot(reflect_dir).max(0.0).powf(material.shininess());
    let specular = material.specular() * light.specular() * specular_strength;

    diffuse + specular
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Plane, Sphere};
    use std::sync::Arc;

    fn matte(ambient: f32) -> Arc<Material> {
        Material::builder(Color::splat(ambient), Color::ONE, Color::ZERO)
            .build()
            .unwrap()
    }

    fn light(position: Vec3, ambient: f32) -> Light {
        Light::new(position, Color::splat(ambient), Color::ONE, Color::ONE).unwrap()
    }

    /// Shade whatever `ray` hits first, viewing back along the ray.
    fn trace(scene: &Scene, ray: &Ray, config: &RenderConfig) -> Option<Color> {
        let hit = scene.nearest_hit(ray, None)?;
        let view = (ray.origin() - hit.point).normalize();
        Some(shade(scene, &hit, view, 0, config).unwrap())
    }

    fn floor_scene(with_blocker: bool) -> Scene {
        let mut scene = Scene::new();
        scene.add_object(Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, matte(0.1)).unwrap());
        if with_blocker {
            scene.add_object(Sphere::new(Vec3::new(0.0, 3.0, -5.0), 1.0, matte(0.1)).unwrap());
        }
        scene.add_light(light(Vec3::new(0.0, 10.0, -5.0), 0.2));
        scene
    }

    #[test]
    fn test_occluded_point_gets_ambient_only() {
        let config = RenderConfig::default();
        // Looking straight down at the floor from under the blocker
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, -1.0, 0.0));

        let shadowed = trace(&floor_scene(true), &ray, &config).unwrap();
        assert!((shadowed - Color::splat(0.02)).length() < 1e-6);

        let lit = trace(&floor_scene(false), &ray, &config).unwrap();
        assert!(lit.x > shadowed.x);
        assert_eq!(lit, Color::ONE);
    }

    #[test]
    fn test_in_shadow() {
        let scene = floor_scene(true);
        let point = Vec3::new(0.0, -1.0, -5.0);
        let light_pos = Vec3::new(0.0, 10.0, -5.0);

        assert!(in_shadow(&scene, point, light_pos, Some(ObjectId(0))));
        // Blocker beyond the light doesn't count
        assert!(!in_shadow(&scene, point, Vec3::new(0.0, 1.0, -5.0), Some(ObjectId(0))));
        // Light on the surface itself
        assert!(!in_shadow(&scene, point, point, None));
    }

    #[test]
    fn test_surface_never_shadows_itself() {
        let mut scene = Scene::new();
        let ball = scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, matte(0.0)).unwrap());

        let light_pos = Vec3::new(0.0, 0.0, 5.0);
        for point in [Vec3::new(0.0, 0.0, -4.0), Vec3::new(0.0, 0.0, -6.0), Vec3::new(1.0, 0.0, -5.0)] {
            assert!(!in_shadow(&scene, point, light_pos, Some(ball)));
        }
    }

    #[test]
    fn test_exclude_skips_only_that_object() {
        let mut scene = Scene::new();
        let ball = scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, matte(0.0)).unwrap());

        // Point behind the sphere, light in front
        let behind = Vec3::new(0.0, 0.0, -7.0);
        let light_pos = Vec3::new(0.0, 0.0, 5.0);
        assert!(in_shadow(&scene, behind, light_pos, None));
        assert!(!in_shadow(&scene, behind, light_pos, Some(ball)));
        assert!(in_shadow(&scene, behind, light_pos, Some(ObjectId(1))));
    }

    #[test]
    fn test_ambient_uses_first_light_only() {
        let material = Material::builder(Color::ONE, Color::ZERO, Color::ZERO)
            .build()
            .unwrap();
        let mut scene = Scene::new();
        scene.add_object(Plane::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, material).unwrap());
        scene.add_light(light(Vec3::new(0.0, 5.0, 0.0), 0.1));
        scene.add_light(light(Vec3::new(0.0, -5.0, 0.0), 0.5));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let first = trace(&scene, &ray, &RenderConfig::default()).unwrap();
        assert!((first - Color::splat(0.1)).length() < 1e-6);

        let config = RenderConfig {
            ambient: AmbientMode::AllLights,
            ..RenderConfig::default()
        };
        let all = trace(&scene, &ray, &config).unwrap();
        assert!((all - Color::splat(0.6)).length() < 1e-6);
    }

    #[test]
    fn test_no_lights_is_black() {
        let mut scene = Scene::new();
        scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, matte(1.0)).unwrap());

        let color = trace(&scene, &Ray::new(Vec3::ZERO, Vec3::NEG_Z), &RenderConfig::default()).unwrap();
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_specular_highlight() {
        let material = Material::builder(Color::ZERO, Color::ZERO, Color::ONE)
            .shininess(1.0)
            .build()
            .unwrap();
        let mut scene = Scene::new();
        scene.add_object(Plane::new(Vec3::ZERO, Vec3::Y, material).unwrap());
        scene.add_light(Light::new(Vec3::new(0.0, 5.0, -5.0), Color::ZERO, Color::ONE, Color::splat(0.5)).unwrap());

        // Viewer and light coincide, so the mirror direction points right at the eye
        let ray = Ray::new(Vec3::new(0.0, 5.0, -5.0), Vec3::new(0.0, -1.0, 0.0));
        let color = trace(&scene, &ray, &RenderConfig::default()).unwrap();
        assert!((color - Color::splat(0.5)).length() < 1e-5);
    }

    #[test]
    fn test_channels_clamped_to_one() {
        let material = Material::builder(Color::ONE, Color::splat(5.0), Color::splat(5.0))
            .build()
            .unwrap();
        let mut scene = Scene::new();
        scene.add_object(Plane::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, material).unwrap());
        scene.add_light(light(Vec3::ZERO, 1.0));

        let color = trace(&scene, &Ray::new(Vec3::ZERO, Vec3::NEG_Z), &RenderConfig::default()).unwrap();
        assert_eq!(color, Color::ONE);
    }

    fn mirror_scene(with_target: bool) -> Scene {
        let mirror = Material::builder(Color::ZERO, Color::ZERO, Color::ZERO)
            .reflectivity(0.5)
            .build()
            .unwrap();
        let red = Material::builder(Color::X, Color::ZERO, Color::ZERO).build().unwrap();

        let mut scene = Scene::new();
        scene.add_object(Plane::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, mirror).unwrap());
        if with_target {
            // Behind the camera, only visible in the mirror
            scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, red).unwrap());
        }
        scene.add_light(light(Vec3::new(0.0, 10.0, 0.0), 1.0));
        scene
    }

    #[test]
    fn test_reflection_adds_weighted_color() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let color = trace(&mirror_scene(true), &ray, &RenderConfig::default()).unwrap();
        assert!((color - Color::new(0.5, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_reflection_miss_adds_nothing() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let color = trace(&mirror_scene(false), &ray, &RenderConfig::default()).unwrap();
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_reflection_terminates_between_mirrors() {
        let mirror = Material::builder(Color::splat(0.1), Color::splat(0.2), Color::ONE)
            .reflectivity(1.0)
            .build()
            .unwrap();
        let mut scene = Scene::new();
        scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, mirror.clone()).unwrap());
        scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, mirror).unwrap());
        scene.add_light(light(Vec3::new(0.0, 5.0, 0.0), 0.5));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let color = trace(&scene, &ray, &RenderConfig::default()).unwrap();
        assert!(color.is_finite());
        assert!(color.max_element() <= 1.0);
    }

    #[test]
    fn test_no_reflection_at_depth_cap() {
        let scene = mirror_scene(true);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = scene.nearest_hit(&ray, None).unwrap();

        let color = shade(&scene, &hit, Vec3::Z, MAX_REFLECTION_DEPTH, &RenderConfig::default()).unwrap();
        assert_eq!(color, Color::ZERO);
    }
}
