//! The ordered view table.
//!
//! Views are built once and never change. A view either carries its own pose
//! or clones another view's pose; clone references are resolved when the
//! table is constructed, so consumers only ever see plain [`Pose`] values.

pub mod builder;
pub mod effects;
pub mod threshold;

use core::f32::consts::{FRAC_PI_2, PI, TAU};
use core::ops::Range;

pub use crate::camera::Pose;

/// One of the four box rotation steps.
///
/// The last step is a full revolution, not another quarter turn past the
/// half turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationStep {
    Base,
    Quarter,
    Half,
    FullTurn,
}

impl RotationStep {
    /// All steps in presentation order.
    pub const ALL: [RotationStep; 4] = [
        RotationStep::Base,
        RotationStep::Quarter,
        RotationStep::Half,
        RotationStep::FullTurn,
    ];

    /// Zero-based position within the rotation block.
    pub fn ordinal(self) -> usize {
        match self {
            RotationStep::Base => 0,
            RotationStep::Quarter => 1,
            RotationStep::Half => 2,
            RotationStep::FullTurn => 3,
        }
    }

    /// Yaw added to the box's initial yaw, in radians.
    pub fn yaw_offset(self) -> f32 {
        match self {
            RotationStep::Base => 0.0,
            RotationStep::Quarter => FRAC_PI_2,
            RotationStep::Half => PI,
            RotationStep::FullTurn => TAU,
        }
    }
}

/// What a view does besides placing the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewKind {
    /// Overview of the whole arc.
    General,
    /// Close-up of one box.
    BoxFocus { box_index: usize },
    /// Slightly shifted close-up of the last box, before it rotates.
    FinalLook { box_index: usize },
    /// Turn the box to `target_yaw` (absolute, radians).
    BoxRotation {
        box_index: usize,
        step: RotationStep,
        target_yaw: f32,
    },
    /// Fade the box and the text panel out.
    FinalFade { box_index: usize },
}

impl ViewKind {
    /// The box this view concerns, if any.
    pub fn box_index(&self) -> Option<usize> {
        match *self {
            ViewKind::General => None,
            ViewKind::BoxFocus { box_index }
            | ViewKind::FinalLook { box_index }
            | ViewKind::BoxRotation { box_index, .. }
            | ViewKind::FinalFade { box_index } => Some(box_index),
        }
    }

    /// Rotation and fade views run the short animation and isolate their box.
    pub fn is_rotation_or_fade(&self) -> bool {
        matches!(
            self,
            ViewKind::BoxRotation { .. } | ViewKind::FinalFade { .. }
        )
    }

    pub fn is_fade(&self) -> bool {
        matches!(self, ViewKind::FinalFade { .. })
    }

    /// Short diagnostic label.
    pub fn label(&self) -> &'static str {
        match self {
            ViewKind::General => "general",
            ViewKind::BoxFocus { .. } => "box_focus",
            ViewKind::FinalLook { .. } => "final_look",
            ViewKind::BoxRotation { .. } => "box_rotation",
            ViewKind::FinalFade { .. } => "final_fade",
        }
    }
}

/// Where a view's camera pose comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PoseSource {
    Direct(Pose),
    /// Reuse the pose of an earlier view.
    CloneOf(usize),
}

/// One step of the presentation.
#[derive(Clone, Debug, PartialEq)]
pub struct View {
    /// Diagnostic label.
    pub name: String,
    pub kind: ViewKind,
    pub source: PoseSource,
    /// Caption override for the text panel body.
    pub text: Option<String>,
}

impl View {
    pub fn new(name: impl Into<String>, kind: ViewKind, source: PoseSource) -> Self {
        Self {
            name: name.into(),
            kind,
            source,
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Errors from [`ViewTable::from_views`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewTableError {
    /// A view clones itself, a later view, or an index past the end.
    #[error("view {view} clones view {target}, which is not an earlier view")]
    BadCloneReference { view: usize, target: usize },
}

/// Immutable ordered sequence of views with their resolved poses.
#[derive(Clone, Debug)]
pub struct ViewTable {
    views: Vec<View>,
    poses: Vec<Pose>,
    focus: Range<usize>,
}

impl ViewTable {
    /// Resolve every clone reference and freeze the sequence.
    pub fn from_views(views: Vec<View>) -> Result<Self, ViewTableError> {
        let mut poses: Vec<Pose> = Vec::with_capacity(views.len());
        for (index, view) in views.iter().enumerate() {
            let pose = match view.source {
                PoseSource::Direct(pose) => pose,
                PoseSource::CloneOf(target) => *poses.get(target).ok_or(
                    ViewTableError::BadCloneReference {
                        view: index,
                        target,
                    },
                )?,
            };
            poses.push(pose);
        }

        let focus = focus_block(&views);
        Ok(Self {
            views,
            poses,
            focus,
        })
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&View> {
        self.views.get(index)
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// The camera pose for `index`, with clone references already followed.
    pub fn pose(&self, index: usize) -> Option<Pose> {
        self.poses.get(index).copied()
    }

    /// Index range of the contiguous box-focus block. Empty without boxes.
    pub fn focus_range(&self) -> Range<usize> {
        self.focus.clone()
    }

    /// Index of the view of the given rotation step, if present.
    pub fn rotation_index(&self, step: RotationStep) -> Option<usize> {
        self.views.iter().position(
            |v| matches!(v.kind, ViewKind::BoxRotation { step: s, .. } if s == step),
        )
    }

    pub fn final_look_index(&self) -> Option<usize> {
        self.views
            .iter()
            .position(|v| matches!(v.kind, ViewKind::FinalLook { .. }))
    }

    pub fn final_fade_index(&self) -> Option<usize> {
        self.views
            .iter()
            .position(|v| matches!(v.kind, ViewKind::FinalFade { .. }))
    }
}

fn focus_block(views: &[View]) -> Range<usize> {
    let is_focus = |v: &View| matches!(v.kind, ViewKind::BoxFocus { .. });
    match views.iter().position(is_focus) {
        Some(start) => {
            let len = views[start..].iter().take_while(|v| is_focus(v)).count();
            start..start + len
        }
        None => 0..0,
    }
}
