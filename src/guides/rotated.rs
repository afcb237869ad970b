//! Rotated-edge alignment: coincident parallel edges between boxes that share
//! a non-axis-aligned orientation.
//!
//! Only objects at the same orientation can align this way. When both boxes
//! sit on quarter turns the axis-aligned detector already covers them, so this
//! detector stays silent to avoid duplicate, conflicting guides.

use glam::DVec2;

use crate::bbox::BoundingBox;
use crate::defaults::GUIDE_EXTENSION;
use crate::geometry::{RotatedEdge, angles_match_default, point_to_line_distance, rotated_edges};
use crate::log::trace;

use super::types::DiagonalGuide;

/// A dragged edge within threshold of a parallel target edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAlignment<'a> {
    /// Distance from the dragged edge's midpoint to the target edge's line.
    pub distance: f64,
    /// Correction that puts the dragged edge on the target edge's line.
    pub offset: DVec2,
    pub drag_edge: RotatedEdge<'a>,
    pub target_edge: RotatedEdge<'a>,
}

impl EdgeAlignment<'_> {
    pub fn guide(&self) -> DiagonalGuide {
        create_diagonal_guide(&self.drag_edge, &self.target_edge)
    }
}

/// Whether the pair needs rotated detection at all: either box is off the
/// quarter-turn grid.
pub fn needs_rotated_detection(dragging: &BoundingBox, target: &BoundingBox) -> bool {
    !dragging.is_axis_aligned() || !target.is_axis_aligned()
}

/// Vector that moves `drag_edge` onto the infinite line of `target_edge`.
///
/// Signed distance from the dragged edge's midpoint to the target line,
/// along the target edge's outward normal. Zero for a degenerate target edge.
pub fn edge_alignment_offset(drag_edge: &RotatedEdge<'_>, target_edge: &RotatedEdge<'_>) -> DVec2 {
    let normal = target_edge.outward_normal();
    if normal == DVec2::ZERO {
        return DVec2::ZERO;
    }
    let signed = (target_edge.start - drag_edge.midpoint()).dot(normal);
    normal * signed
}

/// Guide along the target edge spanning both edges plus [`GUIDE_EXTENSION`]
/// at each end.
pub fn create_diagonal_guide(drag_edge: &RotatedEdge<'_>, target_edge: &RotatedEdge<'_>) -> DiagonalGuide {
    let origin = target_edge.start;
    let dir = target_edge.direction();
    if dir == DVec2::ZERO {
        return DiagonalGuide {
            start: target_edge.start,
            end: target_edge.end,
            angle: target_edge.angle,
        };
    }

    let (min, max) = [drag_edge.start, drag_edge.end, target_edge.start, target_edge.end]
        .iter()
        .map(|p| (*p - origin).dot(dir))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| (lo.min(t), hi.max(t)));

    DiagonalGuide {
        start: origin + dir * (min - GUIDE_EXTENSION),
        end: origin + dir * (max + GUIDE_EXTENSION),
        angle: target_edge.angle,
    }
}

/// Closest edge alignment between one dragged box and one target, if any
/// edge pair is within `threshold`.
///
/// Does not check [`needs_rotated_detection`]; the caller decides whether the
/// pair qualifies.
pub fn find_rotated_alignment<'a>(
    dragging: &'a BoundingBox,
    target: &'a BoundingBox,
    threshold: f64,
) -> Option<EdgeAlignment<'a>> {
    if !angles_match_default(dragging.rotation(), target.rotation()) {
        return None;
    }

    let drag_edges = rotated_edges(dragging);
    let target_edges = rotated_edges(target);
    let mut best: Option<EdgeAlignment<'a>> = None;

    for drag_edge in &drag_edges {
        for target_edge in &target_edges {
            if !angles_match_default(drag_edge.angle, target_edge.angle) {
                continue;
            }
            let distance = point_to_line_distance(drag_edge.midpoint(), target_edge.start, target_edge.end);
            if distance > threshold {
                continue;
            }
            if best.is_some_and(|b| b.distance <= distance) {
                continue;
            }
            best = Some(EdgeAlignment {
                distance,
                offset: edge_alignment_offset(drag_edge, target_edge),
                drag_edge: *drag_edge,
                target_edge: *target_edge,
            });
        }
    }
    best
}

/// Globally closest rotated alignment of `dragging` against `boxes`.
pub fn detect_rotated_alignment<'a>(
    dragging: &'a BoundingBox,
    boxes: &'a [BoundingBox],
    threshold: f64,
) -> Option<EdgeAlignment<'a>> {
    let mut best: Option<EdgeAlignment<'a>> = None;
    for target in boxes.iter().filter(|b| b.id() != dragging.id()) {
        if !needs_rotated_detection(dragging, target) {
            continue;
        }
        let Some(candidate) = find_rotated_alignment(dragging, target, threshold) else {
            continue;
        };
        trace!(
            target_id = target.id(),
            distance = candidate.distance,
            drag_side = ?candidate.drag_edge.side,
            target_side = ?candidate.target_edge.side,
            "rotated edge candidate"
        );
        if best.is_none_or(|b| candidate.distance < b.distance) {
            best = Some(candidate);
        }
    }
    best
}
