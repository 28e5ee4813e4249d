//! Scene model: the ground plane, the boxes on the arc, and the lights.

pub mod layout;

use arc_showcase_hal::{FrameHeader, FrameSink, MeshDraw, MeshKind};
use glam::{Mat4, Quat, Vec3};

use crate::camera::Camera;
use crate::config::{Lighting, PresentationConfig};

/// Flat square ground under the arc.
#[derive(Clone, Copy, Debug)]
pub struct GroundPlane {
    pub size: f32,
    pub visible: bool,
}

/// One upright box on the arc.
///
/// Position is fixed at construction; yaw, opacity and visibility are driven
/// by the view transitions.
#[derive(Clone, Debug)]
pub struct ShowBox {
    id: u32,
    position: Vec3,
    initial_yaw: f32,
    /// Rotation about +Y in radians.
    pub yaw: f32,
    /// Material opacity, 0.0-1.0.
    pub opacity: f32,
    pub visible: bool,
}

impl ShowBox {
    fn new(id: u32, position: Vec3) -> Self {
        Self {
            id,
            position,
            initial_yaw: 0.0,
            yaw: 0.0,
            opacity: 1.0,
            visible: true,
        }
    }

    /// 1-based id in arc order.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Yaw recorded at construction; rotation targets are relative to it.
    pub fn initial_yaw(&self) -> f32 {
        self.initial_yaw
    }
}

/// The static scene plus the mutable per-box state.
#[derive(Clone, Debug)]
pub struct Scene {
    ground: GroundPlane,
    boxes: Vec<ShowBox>,
    box_size: Vec3,
    arc_center: Vec3,
    focus_target: Vec3,
    lighting: Lighting,
}

impl Scene {
    /// Place the boxes along the configured arc.
    pub fn new(config: &PresentationConfig) -> Self {
        let half_height = config.box_size.y / 2.0;
        let arc_center = Vec3::new(0.0, half_height, 0.0);

        let boxes = layout::arc_positions(
            config.box_count,
            config.arc_radius,
            config.arc_angle_rad(),
            arc_center,
            half_height,
        )
        .into_iter()
        .enumerate()
        .map(|(i, position)| ShowBox::new(i as u32 + 1, position))
        .collect();

        let focus_target = layout::focus_target(
            config.box_count,
            arc_center,
            config.arc_radius,
            half_height,
        );

        Self {
            ground: GroundPlane {
                size: config.ground_size,
                visible: true,
            },
            boxes,
            box_size: config.box_size,
            arc_center,
            focus_target,
            lighting: config.lighting.clone(),
        }
    }

    pub fn ground(&self) -> &GroundPlane {
        &self.ground
    }

    pub fn ground_mut(&mut self) -> &mut GroundPlane {
        &mut self.ground
    }

    pub fn boxes(&self) -> &[ShowBox] {
        &self.boxes
    }

    pub fn boxes_mut(&mut self) -> &mut [ShowBox] {
        &mut self.boxes
    }

    pub fn box_at(&self, index: usize) -> Option<&ShowBox> {
        self.boxes.get(index)
    }

    pub fn box_at_mut(&mut self, index: usize) -> Option<&mut ShowBox> {
        self.boxes.get_mut(index)
    }

    /// Box extents: width, height, depth.
    pub fn box_size(&self) -> Vec3 {
        self.box_size
    }

    pub fn arc_center(&self) -> Vec3 {
        self.arc_center
    }

    /// Look-at point shared by the overview views.
    pub fn focus_target(&self) -> Vec3 {
        self.focus_target
    }

    /// Submit one frame: the visible ground and every visible box.
    pub fn draw<S: FrameSink>(&self, camera: &Camera, sink: &mut S) -> Result<(), S::Error> {
        let header = FrameHeader {
            view: camera.view_matrix().to_cols_array(),
            projection: camera.projection_matrix().to_cols_array(),
            eye: camera.position().to_array(),
            clear_color: self.lighting.clear_color,
            ambient: self.lighting.ambient,
            sun: self.lighting.sun,
        };
        sink.begin_frame(&header)?;

        if self.ground.visible {
            let model = Mat4::from_scale_rotation_translation(
                Vec3::new(self.ground.size, self.ground.size, 1.0),
                Quat::from_rotation_x(-core::f32::consts::FRAC_PI_2),
                Vec3::ZERO,
            );
            sink.draw_mesh(&MeshDraw {
                mesh: MeshKind::Ground,
                model: model.to_cols_array(),
                color: self.lighting.ground_color,
                opacity: 1.0,
                roughness: 1.0,
                metalness: 0.0,
                cast_shadow: false,
                receive_shadow: true,
            })?;
        }

        for b in self.boxes.iter().filter(|b| b.visible) {
            let model = Mat4::from_scale_rotation_translation(
                self.box_size,
                Quat::from_rotation_y(b.yaw),
                b.position,
            );
            sink.draw_mesh(&MeshDraw {
                mesh: MeshKind::Box { id: b.id },
                model: model.to_cols_array(),
                color: self.lighting.box_color,
                opacity: b.opacity,
                roughness: self.lighting.box_roughness,
                metalness: self.lighting.box_metalness,
                cast_shadow: true,
                receive_shadow: false,
            })?;
        }

        sink.end_frame()
    }
}
