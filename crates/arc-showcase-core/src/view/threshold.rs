//! Scroll distance required for the next transition.
//!
//! The early rotation steps react to half a screen of wheel travel; every
//! other move needs a full screen.

use super::{RotationStep, ViewKind, ViewTable};

/// Threshold as a fraction of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weight {
    Half,
    Full,
}

impl Weight {
    /// Threshold in pixels for a viewport of the given height.
    pub fn of(self, viewport_height: f32) -> f32 {
        match self {
            Weight::Half => viewport_height / 2.0,
            Weight::Full => viewport_height,
        }
    }
}

/// Weight of the move from `from` to `to`. `None` means no such view.
pub fn weight_for(from: Option<&ViewKind>, to: Option<&ViewKind>) -> Weight {
    use RotationStep::*;

    let (Some(from), Some(to)) = (from, to) else {
        return Weight::Full;
    };

    match (from, to) {
        (ViewKind::FinalLook { .. }, ViewKind::BoxRotation { step: Base, .. }) => Weight::Half,
        (
            ViewKind::BoxRotation {
                step: Base | Quarter,
                ..
            },
            ViewKind::BoxRotation { .. },
        ) => Weight::Half,
        (ViewKind::BoxRotation { step: Half, .. }, ViewKind::BoxRotation { step: FullTurn, .. }) => {
            Weight::Full
        }
        (ViewKind::BoxRotation { step: FullTurn, .. }, ViewKind::FinalFade { .. }) => Weight::Full,
        _ => Weight::Full,
    }
}

/// Threshold in pixels for moving from `from` to `to` within `table`.
pub fn threshold_for(table: &ViewTable, from: Option<usize>, to: usize, viewport_height: f32) -> f32 {
    let from = from.and_then(|i| table.get(i)).map(|v| &v.kind);
    let to = table.get(to).map(|v| &v.kind);
    weight_for(from, to).of(viewport_height)
}
