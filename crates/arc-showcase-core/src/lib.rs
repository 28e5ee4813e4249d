//! Scroll-driven arc presentation.
//!
//! A fixed sequence of camera views over a ground plane and an arc of upright
//! boxes. Input (wheel deltas, two navigation buttons) moves through the
//! sequence; each move runs a timed camera animation plus, near the end of the
//! sequence, a box rotation or fade-out.
//!
//! The crate owns the state machine and the scene state. Drawing and the page
//! chrome go through the traits in `arc_showcase_hal`.

pub mod anim;
pub mod camera;
pub mod config;
pub mod input;
pub mod scene;
pub mod session;
pub mod stage;
pub mod transition;
pub mod ui;
pub mod view;

pub use config::{CameraRig, ConfigError, Lighting, PresentationConfig, Timing};
pub use session::{Session, SessionError, Viewport};
pub use view::{Pose, View, ViewKind, ViewTable};
