//! One running presentation.
//!
//! [`Session`] owns the view table, the stage, the transition controller and
//! the scroll aggregator, and is the single entry point for input, time and
//! output. Hosts feed it [`InputEvent`]s and frame ticks, then ask it to
//! render and to sync the chrome.

use std::time::Duration;

use arc_showcase_hal::{FrameSink, InputEvent, NavButton, UiSurface};

use crate::camera::Camera;
use crate::config::{ConfigError, PresentationConfig};
use crate::input::{self, ScrollAggregator, ScrollIntent};
use crate::scene::Scene;
use crate::stage::Stage;
use crate::transition::{TickReport, TransitionController};
use crate::ui::{UiState, UiSync};
use crate::view::builder;
use crate::view::{View, ViewTable, ViewTableError};

/// Errors from [`Session::new`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid view table: {0}")]
    ViewTable(#[from] ViewTableError),
}

/// Output surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; 1.0 for a zero-height viewport.
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Height in pixels, the baseline for scroll thresholds.
    pub fn height_px(&self) -> f32 {
        self.height as f32
    }
}

/// A running presentation.
#[derive(Debug)]
pub struct Session {
    table: ViewTable,
    stage: Stage,
    controller: TransitionController,
    scroll: ScrollAggregator,
    viewport: Viewport,
    ui_sync: UiSync,
}

impl Session {
    /// Build the scene and view table and jump straight to the first view.
    pub fn new(config: &PresentationConfig, viewport: Viewport) -> Result<Self, SessionError> {
        config.validate()?;

        let scene = Scene::new(config);
        let table = builder::build_table(config, &scene)?;
        let rig = &config.rig;
        let camera = Camera::new(rig.initial_fov, viewport.aspect(), rig.near, rig.far);

        let mut session = Self {
            table,
            stage: Stage::new(camera, scene),
            controller: TransitionController::new(config.timing.clone(), viewport.height_px()),
            scroll: ScrollAggregator::new(config.timing.quiet_period),
            viewport,
            ui_sync: UiSync::new(),
        };

        log::info!(
            "presentation ready: {} boxes, {} views, viewport {}x{}",
            session.stage.scene.boxes().len(),
            session.table.len(),
            viewport.width,
            viewport.height
        );

        let height = session.viewport.height_px();
        session
            .controller
            .go_to_view(&session.table, &mut session.stage, 0, true, height);

        Ok(session)
    }

    /// Dispatch one input event.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Wheel { delta_y } => {
                self.on_wheel(delta_y);
            }
            InputEvent::Button(button) => {
                self.on_button(button);
            }
            InputEvent::Resize { width, height } => self.on_resize(width, height),
        }
    }

    /// Feed a wheel delta. Returns true if it started a transition.
    pub fn on_wheel(&mut self, delta_y: f32) -> bool {
        if !self.controller.can_process_scroll() || self.controller.is_animating() {
            log::trace!("wheel {delta_y} ignored while locked");
            return false;
        }

        let Some(intent) = self.scroll.accumulate(delta_y, self.controller.threshold()) else {
            return false;
        };

        let current = self.controller.current_index();
        let target = match intent {
            ScrollIntent::Forward => Some(current + 1).filter(|&i| i < self.table.len()),
            ScrollIntent::Backward => current.checked_sub(1),
        };

        self.scroll.reset();
        match target {
            Some(target) => {
                self.scroll.cancel_quiet_timer();
                self.go_to_view(target)
            }
            None => {
                log::trace!("wheel {intent:?} past the end at view {current}");
                false
            }
        }
    }

    /// Press a navigation button. Returns true if it started a transition.
    pub fn on_button(&mut self, button: NavButton) -> bool {
        let focus = self.table.focus_range();
        match input::button_target(&focus, self.controller.current_index(), button) {
            Some(target) => self.go_to_view(target),
            None => {
                log::trace!("{button:?} ignored at view {}", self.controller.current_index());
                false
            }
        }
    }

    /// Viewport changed: update the projection and the threshold.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.stage.camera.set_aspect(self.viewport.aspect());
        self.controller
            .recompute_threshold(&self.table, self.viewport.height_px());
        log::debug!(
            "resized to {width}x{height}, threshold {:.0}",
            self.controller.threshold()
        );
    }

    /// Start an animated transition to `target`. Returns true if it started.
    pub fn go_to_view(&mut self, target: usize) -> bool {
        let height = self.viewport.height_px();
        self.controller
            .go_to_view(&self.table, &mut self.stage, target, false, height)
    }

    /// Advance time by `dt`.
    pub fn tick(&mut self, dt: Duration) -> TickReport {
        let report = self.controller.tick(dt, &mut self.stage);
        if report.scroll_unlocked {
            self.scroll.reset();
        }
        self.scroll.tick(dt, self.controller.is_animating());
        report
    }

    /// Render the current frame.
    pub fn render<S: FrameSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        self.stage.scene.draw(&self.stage.camera, sink)
    }

    /// Push chrome changes since the last sync.
    pub fn sync_ui<U: UiSurface>(&mut self, surface: &mut U) {
        self.ui_sync.push(&self.stage.ui, surface);
    }

    pub fn table(&self) -> &ViewTable {
        &self.table
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn camera(&self) -> &Camera {
        &self.stage.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.stage.scene
    }

    pub fn ui(&self) -> &UiState {
        &self.stage.ui
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn controller(&self) -> &TransitionController {
        &self.controller
    }

    pub fn current_view_index(&self) -> usize {
        self.controller.current_index()
    }

    pub fn current_view(&self) -> Option<&View> {
        self.table.get(self.controller.current_index())
    }

    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    pub fn can_process_scroll(&self) -> bool {
        self.controller.can_process_scroll()
    }

    pub fn accumulated_scroll(&self) -> f32 {
        self.scroll.accumulated()
    }

    pub fn threshold(&self) -> f32 {
        self.controller.threshold()
    }

    /// No transition in flight and scroll input accepted.
    pub fn is_idle(&self) -> bool {
        !self.is_animating() && self.can_process_scroll()
    }
}
