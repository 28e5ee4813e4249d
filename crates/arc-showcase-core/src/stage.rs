//! The mutable world a transition acts on: camera, scene and chrome.

use crate::anim::{Animatable, Channel, Value};
use crate::camera::Camera;
use crate::scene::Scene;
use crate::ui::UiState;
use crate::view::effects::{BoxVisibility, SceneEffects};

/// Camera, scene and UI state, owned together so one timeline can drive all
/// three.
#[derive(Clone, Debug)]
pub struct Stage {
    pub camera: Camera,
    pub scene: Scene,
    pub ui: UiState,
}

impl Stage {
    pub fn new(camera: Camera, scene: Scene) -> Self {
        Self {
            camera,
            scene,
            ui: UiState::default(),
        }
    }

    /// Apply the immediate part of a view change.
    ///
    /// `view_box` is the box of the target view. With `hold_fade` set, the
    /// opacities of that box and of the panel keep their current values
    /// instead of being reset to fully opaque.
    pub fn apply_effects(&mut self, effects: &SceneEffects, view_box: Option<usize>, hold_fade: bool) {
        self.ui.footer = effects.footer;
        self.scene.ground_mut().visible = effects.ground_visible;

        match effects.boxes {
            BoxVisibility::All => {
                for b in self.scene.boxes_mut() {
                    b.visible = true;
                    b.opacity = 1.0;
                }
            }
            BoxVisibility::OnlyViewBox => {
                for (i, b) in self.scene.boxes_mut().iter_mut().enumerate() {
                    b.visible = Some(i) == view_box;
                    if b.visible && !hold_fade {
                        b.opacity = 1.0;
                    }
                }
            }
        }

        self.ui.panel.visible = effects.panel_visible;
        if effects.panel_visible && !hold_fade {
            self.ui.panel.opacity = 1.0;
        }
    }
}

impl Animatable for Stage {
    fn read(&self, channel: Channel) -> Value {
        match channel {
            Channel::CameraPosition => Value::Vector(self.camera.position()),
            Channel::LookAt => Value::Vector(self.camera.look_at()),
            Channel::Fov => Value::Scalar(self.camera.fov()),
            Channel::BoxYaw(i) => Value::Scalar(self.scene.box_at(i).map_or(0.0, |b| b.yaw)),
            Channel::BoxOpacity(i) => {
                Value::Scalar(self.scene.box_at(i).map_or(0.0, |b| b.opacity))
            }
            Channel::PanelOpacity => Value::Scalar(self.ui.panel.opacity),
        }
    }

    fn write(&mut self, channel: Channel, value: Value) {
        match (channel, value) {
            // Setting either end re-derives the camera orientation.
            (Channel::CameraPosition, Value::Vector(v)) => self.camera.set_position(v),
            (Channel::LookAt, Value::Vector(v)) => self.camera.set_look_at(v),
            (Channel::Fov, Value::Scalar(s)) => self.camera.set_fov(s),
            (Channel::BoxYaw(i), Value::Scalar(s)) => {
                if let Some(b) = self.scene.box_at_mut(i) {
                    b.yaw = s;
                }
            }
            (Channel::BoxOpacity(i), Value::Scalar(s)) => {
                if let Some(b) = self.scene.box_at_mut(i) {
                    b.opacity = s;
                }
            }
            (Channel::PanelOpacity, Value::Scalar(s)) => self.ui.panel.opacity = s,
            (channel, value) => {
                log::warn!("ignoring {value:?} written to {channel:?}");
            }
        }
    }
}

