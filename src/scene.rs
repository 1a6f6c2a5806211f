//! The boxed-room test scene: a 555-unit room open toward the camera, lit by a
//! ceiling panel, with a tall and a short block inside.

use crate::prelude::*;

/// Room walls face inward, block faces face outward.
pub fn cornell_box() -> HittableList {
    let red = Arc::new(Material::lambertian(Color::new(0.65, 0.05, 0.05)));
    let white = Arc::new(Material::lambertian(Color::new(0.73, 0.73, 0.73)));
    let green = Arc::new(Material::lambertian(Color::new(0.12, 0.45, 0.15)));
    let light = Arc::new(Material::diffuse_light(Color::new(15.0, 15.0, 15.0)));

    let mut world = HittableList::new();

    // Left (green) and right (red) walls as seen from the camera.
    world.add(AaRect::yz(0.0, 555.0, 0.0, 555.0, 555.0, green).flipped());
    world.add(AaRect::yz(0.0, 555.0, 0.0, 555.0, 0.0, red));
    world.add(AaRect::xz(213.0, 343.0, 227.0, 332.0, 554.0, light).flipped());
    world.add(AaRect::xz(0.0, 555.0, 0.0, 555.0, 0.0, white.clone()));
    world.add(AaRect::xz(0.0, 555.0, 0.0, 555.0, 555.0, white.clone()).flipped());
    world.add(AaRect::xy(0.0, 555.0, 0.0, 555.0, 555.0, white.clone()).flipped());

    add_block(&mut world, (265.0, 430.0), 330.0, (295.0, 460.0), &white);
    add_block(&mut world, (130.0, 295.0), 165.0, (65.0, 230.0), &white);

    world
}

/// Five visible faces of a block standing on the floor; the bottom is omitted.
fn add_block(world: &mut HittableList, x: (f64, f64), height: f64, z: (f64, f64), mat: &Arc<Material>) {
    world.add(AaRect::xz(x.0, x.1, z.0, z.1, height, mat.clone()));
    world.add(AaRect::xy(x.0, x.1, 0.0, height, z.0, mat.clone()).flipped());
    world.add(AaRect::xy(x.0, x.1, 0.0, height, z.1, mat.clone()));
    world.add(AaRect::yz(0.0, height, z.0, z.1, x.0, mat.clone()).flipped());
    world.add(AaRect::yz(0.0, height, z.0, z.1, x.1, mat.clone()));
}

/// Pinhole view through the open side of the room.
pub fn cornell_camera(aspect_ratio: f64) -> Camera {
    let look_from = Point3::new(278.0, 278.0, -800.0);
    let look_at = Point3::new(278.0, 278.0, 0.0);
    let vup = Vec3::new(0.0, 1.0, 0.0);
    let focus_dist = 10.0;
    let aperture = 0.0;
    let vfov = 35.0;

    Camera::new(look_from, look_at, vup, vfov, aspect_ratio, aperture, focus_dist)
}
