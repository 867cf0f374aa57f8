//! The built-in demo scene: a floor, three spheres and two point lights.

use glint_math::Vec3;

use crate::{Color, Light, Material, Plane, Scene, SceneResult, Sphere};

/// Build the demo scene.
///
/// The camera sits at the origin looking down -Z, so everything is placed
/// at negative z.
pub fn demo_scene() -> SceneResult<Scene> {
    let floor = Material::builder(Color::splat(0.1), Color::splat(0.6), Color::splat(0.2))
        .shininess(16.0)
        .reflectivity(0.2)
        .build()?;
    let red = Material::builder(
        Color::new(0.1, 0.0, 0.0),
        Color::new(0.9, 0.1, 0.1),
        Color::ONE,
    )
    .build()?;
    let mirror = Material::builder(Color::splat(0.05), Color::splat(0.1), Color::ONE)
        .shininess(128.0)
        .reflectivity(0.8)
        .build()?;
    let blue = Material::builder(
        Color::new(0.0, 0.0, 0.1),
        Color::new(0.2, 0.3, 0.9),
        Color::splat(0.5),
    )
    .shininess(64.0)
    .reflectivity(0.1)
    .build()?;

    let mut scene = Scene::new();
    scene.add_object(Plane::new(Vec3::new(0.0, -1.5, 0.0), Vec3::Y, floor)?);
    scene.add_object(Sphere::new(Vec3::new(-1.6, 0.0, -6.0), 1.0, red)?);
    scene.add_object(Sphere::new(Vec3::new(1.6, 0.0, -6.0), 1.0, mirror)?);
    scene.add_object(Sphere::new(Vec3::new(0.0, -1.0, -4.5), 0.5, blue)?);

    scene.add_light(Light::new(
        Vec3::new(5.0, 5.0, 0.0),
        Color::splat(0.3),
        Color::splat(0.9),
        Color::ONE,
    )?);
    scene.add_light(Light::new(
        Vec3::new(-4.0, 3.0, -2.0),
        Color::splat(0.1),
        Color::new(0.3, 0.3, 0.4),
        Color::splat(0.3),
    )?);

    log::debug!(
        "Built demo scene: {} objects, {} lights",
        scene.len(),
        scene.lights().len()
    );

    Ok(scene)
}
