//! Immediate scene and chrome state for each view kind.
//!
//! These are applied in one step when a transition starts, before any tween
//! runs. Continuous properties (camera, yaw, fade opacity) are not here; the
//! transition's timeline owns those.

use super::ViewKind;

/// Footer height tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FooterTier {
    Compact,
    Raised,
    Full,
}

impl FooterTier {
    /// Height in viewport-height percent.
    pub fn height_vh(self) -> u8 {
        match self {
            FooterTier::Compact => 8,
            FooterTier::Raised => 13,
            FooterTier::Full => 95,
        }
    }
}

/// Which boxes are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxVisibility {
    /// Every box visible and fully opaque.
    All,
    /// Only the view's own box is visible.
    OnlyViewBox,
}

/// Complete immediate effect set for one view kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneEffects {
    pub footer: FooterTier,
    pub ground_visible: bool,
    pub boxes: BoxVisibility,
    pub panel_visible: bool,
}

const OVERVIEW: SceneEffects = SceneEffects {
    footer: FooterTier::Compact,
    ground_visible: true,
    boxes: BoxVisibility::All,
    panel_visible: false,
};

const FOCUS: SceneEffects = SceneEffects {
    footer: FooterTier::Compact,
    ground_visible: true,
    boxes: BoxVisibility::All,
    panel_visible: true,
};

const LOOK: SceneEffects = SceneEffects {
    footer: FooterTier::Raised,
    ground_visible: false,
    boxes: BoxVisibility::All,
    panel_visible: true,
};

const ROTATION: SceneEffects = SceneEffects {
    footer: FooterTier::Raised,
    ground_visible: false,
    boxes: BoxVisibility::OnlyViewBox,
    panel_visible: true,
};

const FADE: SceneEffects = SceneEffects {
    footer: FooterTier::Full,
    ground_visible: false,
    boxes: BoxVisibility::OnlyViewBox,
    panel_visible: true,
};

/// Look up the effect set for a view kind.
pub fn effects_for(kind: &ViewKind) -> SceneEffects {
    match kind {
        ViewKind::General => OVERVIEW,
        ViewKind::BoxFocus { .. } => FOCUS,
        ViewKind::FinalLook { .. } => LOOK,
        ViewKind::BoxRotation { .. } => ROTATION,
        ViewKind::FinalFade { .. } => FADE,
    }
}
