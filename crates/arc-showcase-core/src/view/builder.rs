//! Builds the stock view sequence from the box layout.
//!
//! Order: two overview views, one focus view per box in arc order, the final
//! look at the last box, its four rotation steps, and the fade-out. The last
//! six views all share the final-look pose.

use glam::Vec3;

use super::{PoseSource, RotationStep, View, ViewKind, ViewTable, ViewTableError};
use crate::camera::Pose;
use crate::config::PresentationConfig;
use crate::scene::Scene;

/// Number of overview views at the start of the table.
pub const GENERAL_VIEW_COUNT: usize = 2;

/// Build the view table for a placed scene.
pub fn build_table(config: &PresentationConfig, scene: &Scene) -> Result<ViewTable, ViewTableError> {
    ViewTable::from_views(build_views(config, scene))
}

/// Build the raw view list (clone references unresolved).
pub fn build_views(config: &PresentationConfig, scene: &Scene) -> Vec<View> {
    let rig = &config.rig;
    let target = scene.focus_target();
    let center = scene.arc_center();

    let mut views = Vec::with_capacity(GENERAL_VIEW_COUNT + scene.boxes().len() + 6);

    views.push(View::new(
        "View 1: Top Down",
        ViewKind::General,
        PoseSource::Direct(Pose::new(
            target + Vec3::new(0.0, rig.top_down_height, rig.top_down_back),
            target,
            rig.top_down_fov,
        )),
    ));
    views.push(View::new(
        "View 2: Arc Front",
        ViewKind::General,
        PoseSource::Direct(Pose::new(
            Vec3::new(
                target.x,
                rig.front_height,
                center.z + config.arc_radius + rig.front_distance,
            ),
            target,
            rig.front_fov,
        )),
    ));

    let half_depth = scene.box_size().z / 2.0;
    let mut last_focus = None;
    for (index, b) in scene.boxes().iter().enumerate() {
        let p = b.position();
        let eye = Vec3::new(
            p.x + rig.focus_offset_x,
            rig.focus_height,
            p.z + half_depth + rig.focus_offset_z,
        );
        let pose = Pose::new(eye, Vec3::new(eye.x, eye.y, p.z), rig.focus_fov);
        views.push(View::new(
            format!("View 3.{}: Focus Box {}", index + 1, index + 1),
            ViewKind::BoxFocus { box_index: index },
            PoseSource::Direct(pose),
        ));
        last_focus = Some((index, pose));
    }

    // Without a box there is nothing to look at, rotate or fade.
    let Some((last_box, last_pose)) = last_focus else {
        return views;
    };

    let final_look = views.len();
    views.push(View::new(
        format!("View 4: Shifted Look Box {}", last_box + 1),
        ViewKind::FinalLook {
            box_index: last_box,
        },
        PoseSource::Direct(last_pose.shifted(rig.final_look_shift)),
    ));

    let initial_yaw = scene.boxes()[last_box].initial_yaw();
    for step in RotationStep::ALL {
        let (name, caption) = rotation_labels(step);
        views.push(
            View::new(
                name,
                ViewKind::BoxRotation {
                    box_index: last_box,
                    step,
                    target_yaw: initial_yaw + step.yaw_offset(),
                },
                PoseSource::CloneOf(final_look),
            )
            .with_text(caption),
        );
    }

    views.push(View::new(
        "View 6: Fade Out",
        ViewKind::FinalFade {
            box_index: last_box,
        },
        PoseSource::CloneOf(final_look),
    ));

    views
}

fn rotation_labels(step: RotationStep) -> (&'static str, &'static str) {
    match step {
        RotationStep::Base => ("View 5.1 (Base for Rotation)", "The box is ready to rotate."),
        RotationStep::Quarter => ("View 5.2 (Rotate +90 deg)", "The box turned 90° clockwise."),
        RotationStep::Half => ("View 5.3 (Rotate +180 deg)", "The box turned 180° clockwise."),
        RotationStep::FullTurn => (
            "View 5.4 (Rotate +360 deg)",
            "The box completed a full clockwise turn.",
        ),
    }
}
