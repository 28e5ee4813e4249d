#![no_std]

//! Platform seams for the presentation.
//!
//! Everything that crosses these traits is plain data (arrays, scalars,
//! string slices) so that the core crate can depend on this one and not the
//! other way round.

/// Abstracts user input across platforms.
pub trait InputSource {
    /// Initialize the input subsystem.
    fn init(&mut self);

    /// Poll for input events. Non-blocking.
    fn poll(&mut self) -> Option<InputEvent>;
}

/// Platform-agnostic input events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse wheel moved. Positive `delta_y` scrolls down (forward).
    Wheel { delta_y: f32 },
    /// A navigation button was pressed.
    Button(NavButton),
    /// The viewport was resized to the given size in pixels.
    Resize { width: u32, height: u32 },
}

/// The two box navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavButton {
    Previous,
    Next,
}

impl NavButton {
    /// Signed index step for this button.
    pub fn step(self) -> isize {
        match self {
            NavButton::Previous => -1,
            NavButton::Next => 1,
        }
    }
}

/// Per-frame camera and lighting header handed to a [`FrameSink`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameHeader {
    /// Column-major view matrix.
    pub view: [f32; 16],
    /// Column-major projection matrix.
    pub projection: [f32; 16],
    /// Camera position in world space.
    pub eye: [f32; 3],
    /// Background clear color (R, G, B, A).
    pub clear_color: [u8; 4],
    pub ambient: AmbientLight,
    pub sun: SunLight,
}

/// Uniform ambient light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: [u8; 3],
    pub intensity: f32,
}

/// Shadow-casting directional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunLight {
    pub color: [u8; 3],
    pub intensity: f32,
    /// Light position; the light points from here toward the origin.
    pub position: [f32; 3],
    /// Shadow map edge length in texels. Zero disables shadows.
    pub shadow_map_size: u32,
    /// Half extent of the orthographic shadow frustum.
    pub shadow_extent: f32,
    pub shadow_near: f32,
    pub shadow_far: f32,
}

/// Which mesh a draw call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    /// The ground plane (unit quad in XY, scaled by the model matrix).
    Ground,
    /// A presentation box (unit cube, scaled by the model matrix).
    Box { id: u32 },
}

/// A single mesh draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshDraw {
    pub mesh: MeshKind,
    /// Column-major model matrix (includes the mesh scale).
    pub model: [f32; 16],
    /// Base color (R, G, B, A).
    pub color: [u8; 4],
    /// Material opacity, 0.0-1.0.
    pub opacity: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

/// Receives one rendered frame per display tick.
pub trait FrameSink {
    type Error: core::fmt::Debug;

    /// Start a frame with the given camera and lights.
    fn begin_frame(&mut self, header: &FrameHeader) -> Result<(), Self::Error>;

    /// Draw one visible mesh.
    fn draw_mesh(&mut self, draw: &MeshDraw) -> Result<(), Self::Error>;

    /// Present the frame.
    fn end_frame(&mut self) -> Result<(), Self::Error>;

    /// The output surface changed size.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), Self::Error>;
}

/// The fixed page chrome driven by the presentation.
///
/// Calls are only made when the corresponding attribute changes.
pub trait UiSurface {
    /// Footer height in viewport-height percent.
    fn set_footer_height_vh(&mut self, vh: u8);

    fn set_nav_arrows_visible(&mut self, visible: bool);

    /// Replace the text panel content.
    fn set_panel_text(&mut self, heading: &str, body: &str);

    fn set_panel_visible(&mut self, visible: bool);

    /// Text panel opacity, 0.0-1.0.
    fn set_panel_opacity(&mut self, opacity: f32);

    fn set_button_disabled(&mut self, button: NavButton, disabled: bool);
}
