//! Tests for chrome state and the diffing push to a UI surface.
//!
//! Uses a mock surface that records every call.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use arc_showcase_core::ui::{UiState, UiSync};
use arc_showcase_core::{PresentationConfig, Session, Viewport};
use arc_showcase_hal::{NavButton, UiSurface};

const FRAME: Duration = Duration::from_millis(16);

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
enum UiCall {
    Footer(u8),
    Arrows(bool),
    Text(String, String),
    PanelVisible(bool),
    PanelOpacity(f32),
    Disabled(NavButton, bool),
}

#[derive(Clone, Default)]
struct MockSurface {
    calls: Rc<RefCell<Vec<UiCall>>>,
}

impl MockSurface {
    fn new() -> Self {
        Self::default()
    }

    /// Take every call recorded so far.
    fn drain(&self) -> Vec<UiCall> {
        self.calls.borrow_mut().drain(..).collect()
    }
}

impl UiSurface for MockSurface {
    fn set_footer_height_vh(&mut self, vh: u8) {
        self.calls.borrow_mut().push(UiCall::Footer(vh));
    }

    fn set_nav_arrows_visible(&mut self, visible: bool) {
        self.calls.borrow_mut().push(UiCall::Arrows(visible));
    }

    fn set_panel_text(&mut self, heading: &str, body: &str) {
        self.calls
            .borrow_mut()
            .push(UiCall::Text(heading.to_string(), body.to_string()));
    }

    fn set_panel_visible(&mut self, visible: bool) {
        self.calls.borrow_mut().push(UiCall::PanelVisible(visible));
    }

    fn set_panel_opacity(&mut self, opacity: f32) {
        self.calls.borrow_mut().push(UiCall::PanelOpacity(opacity));
    }

    fn set_button_disabled(&mut self, button: NavButton, disabled: bool) {
        self.calls
            .borrow_mut()
            .push(UiCall::Disabled(button, disabled));
    }
}

fn session() -> Session {
    let mut s = Session::new(&PresentationConfig::default(), Viewport::new(1280, 720)).unwrap();
    settle(&mut s);
    s
}

fn settle(s: &mut Session) {
    for _ in 0..1000 {
        if s.is_idle() {
            return;
        }
        s.tick(FRAME);
    }
    panic!("session never went idle");
}

fn visit(s: &mut Session, index: usize) {
    assert!(s.go_to_view(index), "go_to_view({index}) refused");
    settle(s);
}

mod sync {
    use super::*;

    #[test]
    fn first_push_writes_everything() {
        let mut surface = MockSurface::new();
        let mut sync = UiSync::new();
        sync.push(&UiState::default(), &mut surface);

        assert_eq!(
            surface.drain(),
            vec![
                UiCall::Footer(8),
                UiCall::Arrows(false),
                UiCall::Text(String::new(), String::new()),
                UiCall::PanelVisible(false),
                UiCall::PanelOpacity(1.0),
                UiCall::Disabled(NavButton::Previous, false),
                UiCall::Disabled(NavButton::Next, false),
            ]
        );
    }

    #[test]
    fn unchanged_state_writes_nothing() {
        let mut surface = MockSurface::new();
        let mut sync = UiSync::new();
        let state = UiState::default();
        sync.push(&state, &mut surface);
        surface.drain();

        sync.push(&state, &mut surface);
        assert!(surface.drain().is_empty());
    }

    #[test]
    fn invalidate_forces_a_full_write() {
        let mut surface = MockSurface::new();
        let mut sync = UiSync::new();
        let state = UiState::default();
        sync.push(&state, &mut surface);
        surface.drain();

        sync.invalidate();
        sync.push(&state, &mut surface);
        assert_eq!(surface.drain().len(), 7);
    }

    #[test]
    fn focus_on_first_box_pushes_only_the_differences() {
        let mut s = session();
        let mut surface = MockSurface::new();
        s.sync_ui(&mut surface);
        surface.drain();

        visit(&mut s, 2);
        s.sync_ui(&mut surface);
        assert_eq!(
            surface.drain(),
            vec![
                UiCall::Arrows(true),
                UiCall::Text("Box #1".to_string(), "Focused on the box.".to_string()),
                UiCall::PanelVisible(true),
                UiCall::Disabled(NavButton::Previous, true),
            ]
        );
    }

    #[test]
    fn fade_pushes_opacity_steps_then_hides() {
        let mut s = session();
        visit(&mut s, 14);
        let mut surface = MockSurface::new();
        s.sync_ui(&mut surface);
        surface.drain();

        s.go_to_view(15);
        let mut opacities = Vec::new();
        let mut hidden = false;
        for _ in 0..100 {
            s.tick(FRAME);
            s.sync_ui(&mut surface);
            for call in surface.drain() {
                match call {
                    UiCall::PanelOpacity(o) => opacities.push(o),
                    UiCall::PanelVisible(false) => hidden = true,
                    _ => {}
                }
            }
        }

        assert!(opacities.len() > 5);
        assert!(opacities.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(opacities.last(), Some(&0.0));
        assert!(hidden);
    }
}

mod captions {
    use super::*;

    #[test]
    fn initial_view_shows_no_panel() {
        let s = session();
        let ui = s.ui();
        assert!(!ui.panel.visible);
        assert!(!ui.nav_arrows_visible);
        assert_eq!(ui.footer.height_vh(), 8);
    }

    #[test]
    fn last_focus_disables_next() {
        let mut s = session();
        visit(&mut s, 9);
        assert!(s.ui().next_disabled);
        assert!(!s.ui().prev_disabled);
        assert_eq!(s.ui().panel.heading, "Box #8");
    }

    #[test]
    fn overview_keeps_previous_text() {
        let mut s = session();
        visit(&mut s, 4);
        visit(&mut s, 1);
        assert_eq!(s.ui().panel.heading, "Box #3");
        assert!(!s.ui().nav_arrows_visible);
    }

    #[test]
    fn look_rotation_and_fade_captions() {
        let mut s = session();
        visit(&mut s, 10);
        assert_eq!(s.ui().panel.body, "Preparing to rotate.");
        assert_eq!(s.ui().footer.height_vh(), 13);
        assert!(!s.ui().nav_arrows_visible);

        visit(&mut s, 11);
        assert_eq!(s.ui().panel.heading, "Box #8");
        assert_eq!(s.ui().panel.body, "The box is ready to rotate.");

        visit(&mut s, 14);
        assert_eq!(s.ui().panel.body, "The box completed a full clockwise turn.");

        s.go_to_view(15);
        assert_eq!(s.ui().panel.heading, "Farewell");
        assert_eq!(s.ui().panel.body, "The universe collapses...");
        assert_eq!(s.ui().footer.height_vh(), 95);
    }
}
