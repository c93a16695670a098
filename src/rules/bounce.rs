//! Bounce detection.
//!
//! A step bounces when it rebounds off the band (the destination is off
//! the field), lands on the border ring, or lands on a point some earlier
//! line already touches. A bounce grants the mover another step.
//!
//! Two border bounces in a row are forbidden. Landing on the border ring
//! counts as a border bounce even when the point was also touched before,
//! so it is refused after an off-field rebound and vice versa.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Direction};
use crate::field::{Field, MoveGraph};

/// What the ball bounced off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BounceKind {
    /// The band, or a point on the border ring.
    Border,
    /// A point already touched by a line.
    Point,
}

/// Result of checking a step for a bounce, before it is committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BounceResolution {
    /// Ordinary step; the turn passes.
    NoBounce,
    /// The step bounces; the mover goes again.
    Bounce(BounceKind),
    /// A second consecutive border bounce. The step is illegal.
    Forbidden,
}

impl BounceResolution {
    /// The bounce kind, if the step bounces.
    #[must_use]
    pub fn kind(self) -> Option<BounceKind> {
        match self {
            BounceResolution::Bounce(kind) => Some(kind),
            BounceResolution::NoBounce | BounceResolution::Forbidden => None,
        }
    }
}

/// Classify the step `pos + dir` against the lines drawn so far.
///
/// `last_bounce` is the kind of the previous bounce this turn, if any.
/// Goal entries must be handled by the caller first: a goal is a scoring
/// step, never a bounce.
#[must_use]
pub fn resolve_bounce(
    field: &Field,
    graph: &MoveGraph,
    pos: Cell,
    dir: Direction,
    last_bounce: Option<BounceKind>,
) -> BounceResolution {
    let dest = pos + dir;
    let after_border = last_bounce == Some(BounceKind::Border);

    if !field.contains(dest) {
        return if after_border {
            BounceResolution::Forbidden
        } else {
            BounceResolution::Bounce(BounceKind::Border)
        };
    }

    let border_point = field.is_border(dest);
    if !border_point && !graph.has_point(dest) {
        return BounceResolution::NoBounce;
    }

    match (border_point, after_border) {
        (true, true) => BounceResolution::Forbidden,
        (true, false) => BounceResolution::Bounce(BounceKind::Border),
        (false, _) => BounceResolution::Bounce(BounceKind::Point),
    }
}
