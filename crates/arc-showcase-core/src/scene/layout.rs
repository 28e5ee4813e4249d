//! Box placement along the arc.

use glam::Vec3;

/// Angle between neighbouring boxes. Zero for fewer than two boxes.
pub fn angle_step(count: usize, total_angle: f32) -> f32 {
    if count > 1 {
        total_angle / (count - 1) as f32
    } else {
        0.0
    }
}

/// World positions for `count` boxes spread evenly over `total_angle`
/// radians, centered on the +Z axis around `center`.
///
/// Box `i` sits at `center + radius * (sin a, 0, cos a)` with `a` running
/// from `-total_angle / 2` to `+total_angle / 2`, at height `y`.
pub fn arc_positions(count: usize, radius: f32, total_angle: f32, center: Vec3, y: f32) -> Vec<Vec3> {
    let step = angle_step(count, total_angle);
    let start = -total_angle / 2.0;

    (0..count)
        .map(|i| {
            let angle = start + i as f32 * step;
            Vec3::new(
                center.x + radius * angle.sin(),
                y,
                center.z + radius * angle.cos(),
            )
        })
        .collect()
}

/// Point the overview cameras look at: the middle of the arc, or the arc
/// center itself when there are no boxes.
pub fn focus_target(count: usize, center: Vec3, radius: f32, y: f32) -> Vec3 {
    if count > 0 {
        Vec3::new(center.x, y, center.z + radius)
    } else {
        Vec3::new(0.0, y, 0.0)
    }
}
