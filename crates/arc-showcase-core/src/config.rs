//! Presentation configuration.
//!
//! `PresentationConfig::default()` reproduces the stock presentation: eight
//! boxes on a 48-unit, 42 degree arc.

use std::time::Duration;

use arc_showcase_hal::{AmbientLight, SunLight};
use glam::Vec3;

/// Errors reported by [`PresentationConfig::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Arc radius is not a positive, finite number.
    #[error("arc radius must be positive and finite, got {0}")]
    ArcRadius(f32),

    /// Arc span outside 0-360 degrees.
    #[error("arc span must be within 0..=360 degrees, got {0}")]
    ArcAngle(f32),

    /// A box or ground dimension is not positive.
    #[error("{name} must be positive and finite, got {value}")]
    Dimension { name: &'static str, value: f32 },

    /// An animation duration is negative or not finite.
    #[error("{name} must be non-negative and finite, got {value}")]
    Duration { name: &'static str, value: f32 },

    /// A field of view outside the open interval (0, 180).
    #[error("{name} must be within (0, 180) degrees, got {value}")]
    FieldOfView { name: &'static str, value: f32 },

    /// Near/far clip planes are not `0 < near < far`.
    #[error("clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    ClipPlanes { near: f32, far: f32 },
}

/// Camera placement for each view family.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    /// Height of the top-down camera above the focus target.
    pub top_down_height: f32,
    /// How far the top-down camera sits behind the focus target (+Z).
    pub top_down_back: f32,
    pub top_down_fov: f32,
    /// Eye height of the arc-front camera.
    pub front_height: f32,
    /// Distance of the arc-front camera beyond the arc (+Z).
    pub front_distance: f32,
    pub front_fov: f32,
    /// Eye height for box focus views.
    pub focus_height: f32,
    /// Sideways offset of the focus camera from the box center.
    pub focus_offset_x: f32,
    /// Distance of the focus camera in front of the box's front face.
    pub focus_offset_z: f32,
    pub focus_fov: f32,
    /// Offset applied to both position and look-at of the last focus view
    /// to produce the final look.
    pub final_look_shift: Vec3,
    /// Field of view before the first view is applied.
    pub initial_fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            top_down_height: 40.0,
            top_down_back: 5.0,
            top_down_fov: 60.0,
            front_height: 1.6,
            front_distance: 30.0,
            front_fov: 55.0,
            focus_height: 1.6,
            focus_offset_x: 1.5,
            focus_offset_z: 4.0,
            focus_fov: 50.0,
            final_look_shift: Vec3::new(1.0, -0.5, 0.0),
            initial_fov: 60.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Durations and input debouncing.
#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    /// Camera move duration for every view kind except rotation/fade (seconds).
    pub camera_secs: f32,
    /// Box rotation duration, also the camera duration for rotation views.
    pub rotation_secs: f32,
    /// Fade-out duration, also the camera duration for the fade view.
    pub fade_secs: f32,
    /// How long before the camera move ends the secondary animation starts.
    pub overlap_secs: f32,
    /// A wheel gesture idle for this long is abandoned.
    pub quiet_period: Duration,
    /// Scroll input stays disabled this long after a transition settles.
    pub scroll_lockout: Duration,
    /// Camera is considered already in place within this distance/fov delta.
    pub pose_tolerance: f32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            camera_secs: 1.0,
            rotation_secs: 0.7,
            fade_secs: 0.7,
            overlap_secs: 0.1,
            quiet_period: Duration::from_millis(400),
            scroll_lockout: Duration::from_millis(200),
            pose_tolerance: 0.01,
        }
    }
}

/// Colors, materials and lights.
#[derive(Debug, Clone, PartialEq)]
pub struct Lighting {
    pub clear_color: [u8; 4],
    pub ground_color: [u8; 4],
    pub box_color: [u8; 4],
    pub box_roughness: f32,
    pub box_metalness: f32,
    pub ambient: AmbientLight,
    pub sun: SunLight,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            clear_color: [0xdd, 0xdd, 0xdd, 0xff],
            ground_color: [0x00, 0x80, 0x00, 0xff],
            box_color: [0xff, 0xff, 0xff, 0xff],
            box_roughness: 0.7,
            box_metalness: 0.1,
            ambient: AmbientLight {
                color: [0xff, 0xff, 0xff],
                intensity: 0.5,
            },
            sun: SunLight {
                color: [0xff, 0xff, 0xff],
                intensity: 0.8,
                position: [50.0, 80.0, 40.0],
                shadow_map_size: 2048,
                shadow_extent: 100.0,
                shadow_near: 0.5,
                shadow_far: 200.0,
            },
        }
    }
}

/// Everything needed to build the scene and the view table.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationConfig {
    /// Number of boxes on the arc. Zero is allowed and leaves only the
    /// overview views.
    pub box_count: usize,
    /// Arc radius around the scene origin.
    pub arc_radius: f32,
    /// Total angular span of the arc in degrees.
    pub arc_angle_deg: f32,
    /// Box extents: width (X), height (Y), depth (Z).
    pub box_size: Vec3,
    /// Edge length of the square ground plane.
    pub ground_size: f32,
    pub rig: CameraRig,
    pub timing: Timing,
    pub lighting: Lighting,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            box_count: 8,
            arc_radius: 48.0,
            arc_angle_deg: 42.0,
            box_size: Vec3::new(1.3, 2.44, 0.32),
            ground_size: 200.0,
            rig: CameraRig::default(),
            timing: Timing::default(),
            lighting: Lighting::default(),
        }
    }
}

impl PresentationConfig {
    /// Total arc span in radians.
    pub fn arc_angle_rad(&self) -> f32 {
        self.arc_angle_deg.to_radians()
    }

    /// Check every numeric field for a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.arc_radius.is_finite() && self.arc_radius > 0.0) {
            return Err(ConfigError::ArcRadius(self.arc_radius));
        }
        if !(self.arc_angle_deg.is_finite() && (0.0..=360.0).contains(&self.arc_angle_deg)) {
            return Err(ConfigError::ArcAngle(self.arc_angle_deg));
        }

        positive("box width", self.box_size.x)?;
        positive("box height", self.box_size.y)?;
        positive("box depth", self.box_size.z)?;
        positive("ground size", self.ground_size)?;

        let t = &self.timing;
        non_negative("camera duration", t.camera_secs)?;
        non_negative("rotation duration", t.rotation_secs)?;
        non_negative("fade duration", t.fade_secs)?;
        non_negative("secondary overlap", t.overlap_secs)?;
        non_negative("pose tolerance", t.pose_tolerance)?;

        let rig = &self.rig;
        fov("initial fov", rig.initial_fov)?;
        fov("top-down fov", rig.top_down_fov)?;
        fov("arc-front fov", rig.front_fov)?;
        fov("focus fov", rig.focus_fov)?;
        if !(rig.near > 0.0 && rig.far > rig.near && rig.far.is_finite()) {
            return Err(ConfigError::ClipPlanes {
                near: rig.near,
                far: rig.far,
            });
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Dimension { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Duration { name, value })
    }
}

fn fov(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value < 180.0 {
        Ok(())
    } else {
        Err(ConfigError::FieldOfView { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(PresentationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_boxes_are_valid() {
        let config = PresentationConfig {
            box_count: 0,
            ..PresentationConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_arc() {
        let config = PresentationConfig {
            arc_radius: 0.0,
            ..PresentationConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ArcRadius(0.0)));

        let config = PresentationConfig {
            arc_angle_deg: 400.0,
            ..PresentationConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ArcAngle(400.0)));
    }

    #[test]
    fn rejects_negative_duration() {
        let mut config = PresentationConfig::default();
        config.timing.fade_secs = -0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Duration {
                name: "fade duration",
                ..
            })
        ));
    }

    #[test]
    fn rejects_inverted_clip_planes() {
        let mut config = PresentationConfig::default();
        config.rig.near = 10.0;
        config.rig.far = 5.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ClipPlanes {
                near: 10.0,
                far: 5.0
            })
        );
    }

    #[test]
    fn rejects_flat_fov() {
        let mut config = PresentationConfig::default();
        config.rig.focus_fov = 180.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FieldOfView { .. })
        ));
    }

    #[test]
    fn arc_angle_converts_to_radians() {
        let config = PresentationConfig::default();
        assert!((config.arc_angle_rad() - 42f32.to_radians()).abs() < 1e-6);
    }
}
