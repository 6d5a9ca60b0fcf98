//! Collision detection between axis-aligned boxes
//!
//! Plain AABB overlap, except that the reference box can be given a
//! per-axis tolerance. The tolerance is added to the reference's near edge
//! and to the candidate's near edge, so the overlap has to be deeper than
//! the tolerance before it counts. This keeps enemy bites forgiving without
//! being a true geometric inset.

use super::entity::{Body, Bounded};

/// Per-axis overlap tolerance (non-negative)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tolerance {
    pub x: f32,
    pub y: f32,
}

impl Tolerance {
    /// Exact overlap
    pub const NONE: Tolerance = Tolerance { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Check whether `reference` overlaps `candidate` given `tol`
#[inline]
pub fn overlaps(reference: &Body, candidate: &Body, tol: Tolerance) -> bool {
    reference.pos.x + tol.x < candidate.right()
        && reference.right() > candidate.pos.x + tol.x
        && reference.pos.y + tol.y < candidate.bottom()
        && reference.bottom() > candidate.pos.y + tol.y
}

/// Find the first candidate (in iteration order) that overlaps `reference`
pub fn first_collision<'a, T, I>(reference: &Body, candidates: I, tol: Tolerance) -> Option<&'a T>
where
    T: Bounded + 'a,
    I: IntoIterator<Item = &'a T>,
{
    candidates
        .into_iter()
        .find(|candidate| overlaps(reference, candidate.body(), tol))
}
