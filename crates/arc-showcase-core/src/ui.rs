//! Page chrome state: footer, navigation arrows, text panel, buttons.
//!
//! [`UiState`] is the model the transitions write to. [`UiSync`] pushes it to
//! a [`UiSurface`], touching only the attributes that changed since the last
//! push.

use arc_showcase_hal::{NavButton, UiSurface};

use crate::scene::Scene;
use crate::view::{ViewKind, ViewTable};

pub use crate::view::effects::FooterTier;

/// The caption panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub visible: bool,
    /// 0.0-1.0. Tweened during the fade-out.
    pub opacity: f32,
    pub heading: String,
    pub body: String,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            visible: false,
            opacity: 1.0,
            heading: String::new(),
            body: String::new(),
        }
    }
}

/// Everything the presentation shows outside the 3D view.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub footer: FooterTier,
    pub nav_arrows_visible: bool,
    pub panel: Panel,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            footer: FooterTier::Compact,
            nav_arrows_visible: false,
            panel: Panel::default(),
            prev_disabled: false,
            next_disabled: false,
        }
    }
}

impl UiState {
    /// Update arrows, caption and button states for the view at `index`.
    ///
    /// Overview views only hide the arrows and leave the panel text as is.
    pub fn show_view(&mut self, table: &ViewTable, scene: &Scene, index: usize) {
        let Some(view) = table.get(index) else {
            return;
        };

        self.nav_arrows_visible = matches!(view.kind, ViewKind::BoxFocus { .. });

        let box_heading = |box_index: usize| {
            scene
                .box_at(box_index)
                .map(|b| format!("Box #{}", b.id()))
                .unwrap_or_default()
        };

        let (heading, body) = match view.kind {
            ViewKind::General => return,
            ViewKind::BoxFocus { box_index } => {
                self.prev_disabled = box_index == 0;
                self.next_disabled = box_index + 1 >= scene.boxes().len();
                (box_heading(box_index), "Focused on the box.")
            }
            ViewKind::FinalLook { box_index } => (box_heading(box_index), "Preparing to rotate."),
            ViewKind::BoxRotation { box_index, .. } => (box_heading(box_index), ""),
            ViewKind::FinalFade { .. } => ("Farewell".to_string(), "The universe collapses..."),
        };

        self.panel.heading = heading;
        self.panel.body = view.text.clone().unwrap_or_else(|| body.to_string());
    }
}

/// Pushes [`UiState`] changes to a surface.
#[derive(Debug, Default)]
pub struct UiSync {
    last: Option<UiState>,
}

impl UiSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget what was pushed; the next push writes every attribute.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Write every attribute of `state` that differs from the previous push.
    pub fn push<U: UiSurface>(&mut self, state: &UiState, surface: &mut U) {
        let last = self.last.as_ref();

        if last.map_or(true, |l| l.footer != state.footer) {
            surface.set_footer_height_vh(state.footer.height_vh());
        }
        if last.map_or(true, |l| l.nav_arrows_visible != state.nav_arrows_visible) {
            surface.set_nav_arrows_visible(state.nav_arrows_visible);
        }
        if last.map_or(true, |l| {
            l.panel.heading != state.panel.heading || l.panel.body != state.panel.body
        }) {
            surface.set_panel_text(&state.panel.heading, &state.panel.body);
        }
        if last.map_or(true, |l| l.panel.visible != state.panel.visible) {
            surface.set_panel_visible(state.panel.visible);
        }
        if last.map_or(true, |l| l.panel.opacity != state.panel.opacity) {
            surface.set_panel_opacity(state.panel.opacity);
        }
        if last.map_or(true, |l| l.prev_disabled != state.prev_disabled) {
            surface.set_button_disabled(NavButton::Previous, state.prev_disabled);
        }
        if last.map_or(true, |l| l.next_disabled != state.next_disabled) {
            surface.set_button_disabled(NavButton::Next, state.next_disabled);
        }

        self.last = Some(state.clone());
    }
}
