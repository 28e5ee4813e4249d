//! Perspective camera driven by a position and a look-at target.
//!
//! The orientation is never stored on its own: every change of position or
//! target re-derives the view matrix, and every fov/aspect change re-derives
//! the projection. A tween can therefore move the target along a straight
//! line and the camera keeps facing it on each intermediate frame.

use glam::{Mat4, Vec3};

/// A camera placement: where it is, what it looks at, and its vertical
/// field of view in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov: f32,
}

impl Pose {
    pub fn new(position: Vec3, look_at: Vec3, fov: f32) -> Self {
        Self {
            position,
            look_at,
            fov,
        }
    }

    /// Same pose with position and look-at both moved by `offset`.
    pub fn shifted(self, offset: Vec3) -> Self {
        Self {
            position: self.position + offset,
            look_at: self.look_at + offset,
            fov: self.fov,
        }
    }

    /// True when both points are closer than `tolerance` and the fov differs
    /// by less than `tolerance`.
    pub fn is_near(&self, other: &Pose, tolerance: f32) -> bool {
        self.position.distance(other.position) < tolerance
            && self.look_at.distance(other.look_at) < tolerance
            && (self.fov - other.fov).abs() < tolerance
    }
}

/// Live camera state with cached view and projection matrices.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    look_at: Vec3,
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    view: Mat4,
    projection: Mat4,
}

impl Camera {
    /// Camera at the origin looking down -Z.
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            fov,
            aspect: sanitize_aspect(aspect),
            near,
            far,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        camera.update_view();
        camera.update_projection();
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The live look-at target (may be mid-tween).
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.look_at, self.fov)
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_view();
    }

    pub fn set_look_at(&mut self, target: Vec3) {
        self.look_at = target;
        self.update_view();
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
        self.update_projection();
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect);
        self.update_projection();
    }

    /// Jump to `pose` exactly.
    pub fn snap_to(&mut self, pose: &Pose) {
        self.position = pose.position;
        self.look_at = pose.look_at;
        self.fov = pose.fov;
        self.update_view();
        self.update_projection();
    }

    /// Check if the camera already sits at `pose` within `tolerance`.
    pub fn is_at(&self, pose: &Pose, tolerance: f32) -> bool {
        self.pose().is_near(pose, tolerance)
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    fn update_view(&mut self) {
        let forward = self.look_at - self.position;
        if forward.length_squared() < 1e-12 {
            // Degenerate target; keep the previous orientation.
            return;
        }
        // Looking straight up or down leaves Y useless as the up vector.
        let up = if forward.normalize().cross(Vec3::Y).length_squared() < 1e-8 {
            Vec3::NEG_Z
        } else {
            Vec3::Y
        };
        self.view = Mat4::look_at_rh(self.position, self.look_at, up);
    }

    fn update_projection(&mut self) {
        self.projection =
            Mat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.near, self.far);
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
