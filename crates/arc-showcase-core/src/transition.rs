//! View transition state machine.
//!
//! The controller is either `Settled(view)` or `Animating(transition)`.
//! Starting a transition applies the view's immediate effects and builds a
//! timeline; when the timeline finishes the controller moves to `Settled`,
//! snapping every animated property to its exact destination, and starts the
//! scroll lockout.

use std::time::Duration;

use crate::anim::{Channel, Ease, Placement, Timeline, Value};
use crate::camera::Pose;
use crate::config::Timing;
use crate::stage::Stage;
use crate::view::effects::effects_for;
use crate::view::threshold::threshold_for;
use crate::view::{ViewKind, ViewTable};

/// A transition in flight.
#[derive(Clone, Debug)]
pub struct Transition {
    target: usize,
    kind: ViewKind,
    pose: Pose,
    timeline: Timeline,
    camera_moved: bool,
}

impl Transition {
    /// Index of the destination view.
    pub fn target(&self) -> usize {
        self.target
    }

    pub fn kind(&self) -> &ViewKind {
        &self.kind
    }

    /// Resolved destination camera pose.
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// False when the camera was already in place and only the box animates.
    pub fn camera_moved(&self) -> bool {
        self.camera_moved
    }
}

/// Controller phase.
#[derive(Clone, Debug)]
pub enum Phase {
    /// At rest on a view.
    Settled(usize),
    Animating(Transition),
}

/// What happened during one [`TransitionController::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// A transition finished on this view.
    pub settled: Option<usize>,
    /// The post-transition lockout ended; scroll input is accepted again.
    pub scroll_unlocked: bool,
}

/// Drives transitions between views and owns the session flags that gate
/// them.
#[derive(Clone, Debug)]
pub struct TransitionController {
    phase: Phase,
    current: usize,
    threshold: f32,
    scroll_enabled: bool,
    lockout: Option<Duration>,
    timing: Timing,
}

impl TransitionController {
    pub fn new(timing: Timing, viewport_height: f32) -> Self {
        Self {
            phase: Phase::Settled(0),
            current: 0,
            threshold: viewport_height,
            scroll_enabled: true,
            lockout: None,
            timing,
        }
    }

    /// Index of the view most recently transitioned to.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Scroll distance needed for the next transition.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating(_))
    }

    /// False while animating and during the lockout that follows.
    pub fn can_process_scroll(&self) -> bool {
        self.scroll_enabled
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn active(&self) -> Option<&Transition> {
        match &self.phase {
            Phase::Animating(t) => Some(t),
            Phase::Settled(_) => None,
        }
    }

    /// Recompute the threshold for the current position, using the previous
    /// view (if any) as the origin.
    pub fn recompute_threshold(&mut self, table: &ViewTable, viewport_height: f32) {
        self.threshold = threshold_for(
            table,
            self.current.checked_sub(1),
            self.current,
            viewport_height,
        );
    }

    /// Start a transition to `target`.
    ///
    /// Ignored while another transition is in flight unless `instant` is
    /// set, and ignored for indices outside the table. An instant transition
    /// first completes any transition in flight, then applies the same
    /// effects and settles immediately.
    ///
    /// Returns true if the transition started.
    pub fn go_to_view(
        &mut self,
        table: &ViewTable,
        stage: &mut Stage,
        target: usize,
        instant: bool,
        viewport_height: f32,
    ) -> bool {
        if self.is_animating() && !instant {
            log::trace!("view {target} requested while animating; dropped");
            return false;
        }
        let (Some(view), Some(pose)) = (table.get(target), table.pose(target)) else {
            log::trace!("view {target} out of range; dropped");
            return false;
        };

        let fade_in_flight = self.active().is_some_and(|t| t.kind.is_fade());
        if instant {
            // Transitions are never cancelled: land the one in flight first.
            let phase = std::mem::replace(&mut self.phase, Phase::Settled(self.current));
            if let Phase::Animating(interrupted) = phase {
                log::debug!("view {} completed early for instant jump", interrupted.target);
                self.finish(&interrupted, stage);
            }
        }
        let previous = self.current;

        self.current = target;
        self.scroll_enabled = false;
        self.lockout = None;
        self.threshold = threshold_for(table, Some(previous), target, viewport_height);

        let hold_fade = view.kind.is_fade() && fade_in_flight;
        stage.apply_effects(&effects_for(&view.kind), view.kind.box_index(), hold_fade);

        let (timeline, camera_moved) = if instant {
            (Timeline::new(), false)
        } else {
            self.build_timeline(&view.kind, &pose, stage)
        };

        log::debug!(
            "view {previous} -> {target} '{}' ({}), {:.2}s{}",
            view.name,
            view.kind.label(),
            timeline.end(),
            if camera_moved { "" } else { ", camera in place" }
        );

        let transition = Transition {
            target,
            kind: view.kind,
            pose,
            timeline,
            camera_moved,
        };

        if instant {
            self.phase = Phase::Settled(target);
            self.finish(&transition, stage);
        } else {
            self.phase = Phase::Animating(transition);
        }

        stage.ui.show_view(table, &stage.scene, target);
        true
    }

    /// Advance the active timeline and the scroll lockout by `dt`.
    pub fn tick(&mut self, dt: Duration, stage: &mut Stage) -> TickReport {
        let mut report = TickReport::default();

        if let Some(remaining) = self.lockout {
            if dt >= remaining {
                self.lockout = None;
                self.scroll_enabled = true;
                report.scroll_unlocked = true;
            } else {
                self.lockout = Some(remaining - dt);
            }
        }

        let finished = match &mut self.phase {
            Phase::Animating(t) => t.timeline.advance(dt.as_secs_f32(), stage),
            Phase::Settled(_) => false,
        };

        if finished {
            let phase = std::mem::replace(&mut self.phase, Phase::Settled(self.current));
            if let Phase::Animating(transition) = phase {
                self.phase = Phase::Settled(transition.target);
                report.settled = Some(transition.target);
                if self.finish(&transition, stage) {
                    report.scroll_unlocked = true;
                }
            }
        }

        report
    }

    fn build_timeline(&self, kind: &ViewKind, pose: &Pose, stage: &mut Stage) -> (Timeline, bool) {
        let t = &self.timing;
        let duration = match kind {
            ViewKind::BoxRotation { .. } => t.rotation_secs,
            ViewKind::FinalFade { .. } => t.fade_secs,
            _ => t.camera_secs,
        };

        let mut timeline = Timeline::new();
        let camera_moved =
            !(kind.is_rotation_or_fade() && stage.camera.is_at(pose, t.pose_tolerance));

        if camera_moved {
            let (ease, at) = (Ease::Power2InOut, Placement::At(0.0));
            timeline
                .add(Channel::CameraPosition, Value::Vector(pose.position), duration, ease, at)
                .add(Channel::LookAt, Value::Vector(pose.look_at), duration, ease, at)
                .add(Channel::Fov, Value::Scalar(pose.fov), duration, ease, at);
        } else {
            stage.camera.set_look_at(pose.look_at);
        }

        let secondary = if camera_moved {
            Placement::AfterLast(-t.overlap_secs)
        } else {
            Placement::At(0.0)
        };

        match *kind {
            ViewKind::BoxRotation {
                box_index,
                target_yaw,
                ..
            } => {
                timeline.add(
                    Channel::BoxYaw(box_index),
                    Value::Scalar(target_yaw),
                    t.rotation_secs,
                    Ease::Power1InOut,
                    secondary,
                );
            }
            ViewKind::FinalFade { box_index } => {
                let box_channel = Channel::BoxOpacity(box_index);
                timeline.add(
                    box_channel,
                    Value::Scalar(0.0),
                    t.fade_secs,
                    Ease::Power1InOut,
                    secondary,
                );
                let start = timeline.start_of(box_channel).unwrap_or(0.0);
                timeline.add(
                    Channel::PanelOpacity,
                    Value::Scalar(0.0),
                    t.fade_secs,
                    Ease::Power1InOut,
                    Placement::At(start),
                );
            }
            _ => {}
        }

        (timeline, camera_moved)
    }

    /// Snap the transition's properties to their exact destinations and
    /// start the lockout. Returns true if scrolling is re-enabled right away.
    fn finish(&mut self, transition: &Transition, stage: &mut Stage) -> bool {
        match transition.kind {
            ViewKind::BoxRotation {
                box_index,
                target_yaw,
                ..
            } => {
                if let Some(b) = stage.scene.box_at_mut(box_index) {
                    b.yaw = target_yaw;
                }
            }
            ViewKind::FinalFade { box_index } => {
                if let Some(b) = stage.scene.box_at_mut(box_index) {
                    b.opacity = 0.0;
                    b.visible = false;
                }
                stage.ui.panel.opacity = 0.0;
                stage.ui.panel.visible = false;
            }
            _ => {}
        }
        stage.camera.snap_to(&transition.pose);
        log::debug!("settled on view {}", transition.target);

        if self.timing.scroll_lockout.is_zero() {
            self.scroll_enabled = true;
            true
        } else {
            self.lockout = Some(self.timing.scroll_lockout);
            false
        }
    }
}
