//! Headless output surfaces: frames and chrome go to the log.

use std::convert::Infallible;

use arc_showcase_hal::{FrameHeader, FrameSink, MeshDraw, MeshKind, NavButton, UiSurface};

/// Counts frames and draw calls and traces each one.
#[derive(Debug, Default)]
pub struct LogFrameSink {
    frames: u64,
    draws: u64,
    draws_this_frame: u32,
    size: (u32, u32),
}

impl LogFrameSink {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..Self::default()
        }
    }

    /// Completed frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Mesh draws over all frames.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl FrameSink for LogFrameSink {
    type Error = Infallible;

    fn begin_frame(&mut self, header: &FrameHeader) -> Result<(), Self::Error> {
        self.draws_this_frame = 0;
        log::trace!(
            "frame {}: eye ({:.2}, {:.2}, {:.2})",
            self.frames,
            header.eye[0],
            header.eye[1],
            header.eye[2]
        );
        Ok(())
    }

    fn draw_mesh(&mut self, draw: &MeshDraw) -> Result<(), Self::Error> {
        self.draws_this_frame += 1;
        match draw.mesh {
            MeshKind::Ground => log::trace!("  ground"),
            MeshKind::Box { id } => log::trace!(
                "  box {id} at ({:.2}, {:.2}, {:.2}) opacity {:.2}",
                draw.model[12],
                draw.model[13],
                draw.model[14],
                draw.opacity
            ),
        }
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), Self::Error> {
        self.frames += 1;
        self.draws += u64::from(self.draws_this_frame);
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), Self::Error> {
        self.size = (width, height);
        log::debug!("frame sink resized to {width}x{height}");
        Ok(())
    }
}

/// Logs chrome changes; opacity steps go to debug.
#[derive(Debug, Default)]
pub struct ConsoleUi {
    updates: usize,
}

impl ConsoleUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attribute updates received.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl UiSurface for ConsoleUi {
    fn set_footer_height_vh(&mut self, vh: u8) {
        self.updates += 1;
        log::info!("ui: footer {vh}vh");
    }

    fn set_nav_arrows_visible(&mut self, visible: bool) {
        self.updates += 1;
        log::info!("ui: nav arrows {}", if visible { "shown" } else { "hidden" });
    }

    fn set_panel_text(&mut self, heading: &str, body: &str) {
        self.updates += 1;
        log::info!("ui: panel \"{heading}\": {body}");
    }

    fn set_panel_visible(&mut self, visible: bool) {
        self.updates += 1;
        log::info!("ui: panel {}", if visible { "shown" } else { "hidden" });
    }

    fn set_panel_opacity(&mut self, opacity: f32) {
        self.updates += 1;
        log::debug!("ui: panel opacity {opacity:.2}");
    }

    fn set_button_disabled(&mut self, button: NavButton, disabled: bool) {
        self.updates += 1;
        log::info!(
            "ui: {button:?} button {}",
            if disabled { "disabled" } else { "enabled" }
        );
    }
}
