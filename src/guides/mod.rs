//! Smart guides: snapping a dragged box to its neighbors
//!
//! This module is organized into submodules:
//! - `types`: Result types (guides, distance indicators, results)
//! - `align`: Axis-aligned left/right/center alignment
//! - `rotated`: Parallel-edge alignment between rotated boxes
//! - `distance`: Neighbor gaps and segment distances
//!
//! The two entry points, [`calculate_smart_guides`] and
//! [`calculate_selection_distance`], live here and arbitrate between them.

pub mod align;
pub mod distance;
pub mod rotated;
pub mod types;

pub use types::*;

use glam::dvec2;

use crate::bbox::BoundingBox;
use crate::geometry::angles_match_default;
use crate::log::debug;
use crate::options::SnapOptions;
use crate::types::Axis;

use align::detect_axis_alignments;
use distance::{closest_parallel_edges, neighbor_distances};
use rotated::detect_rotated_alignment;

/// Snap `dragging` (at its proposed position) against `all_boxes`.
///
/// `threshold` is in field units. Boxes sharing the dragged box's id are
/// ignored, so the caller may pass its full shape list. Neighbor distances
/// are capped at [`MAX_DISTANCE`](crate::defaults::MAX_DISTANCE).
pub fn calculate_smart_guides(dragging: &BoundingBox, all_boxes: &[BoundingBox], threshold: f64) -> SmartGuideResult {
    calculate_smart_guides_with(dragging, all_boxes, &SnapOptions::new(threshold))
}

/// [`calculate_smart_guides`] with explicit [`SnapOptions`].
pub fn calculate_smart_guides_with(
    dragging: &BoundingBox,
    all_boxes: &[BoundingBox],
    options: &SnapOptions,
) -> SmartGuideResult {
    let axis = detect_axis_alignments(dragging, all_boxes, options.threshold());
    let rotated = detect_rotated_alignment(dragging, all_boxes, options.threshold());

    // Rotated alignment is the more specific signal; it wins ties.
    let rotated = rotated
        .filter(|r| r.distance <= axis.vertical_distance() && r.distance <= axis.horizontal_distance());

    let (offset, guides, diagonal_guides) = match rotated {
        Some(edge) => {
            debug!(
                dragging = dragging.id(),
                target_id = edge.target_edge.id,
                distance = edge.distance,
                "rotated edge alignment wins"
            );
            (edge.offset, Vec::new(), vec![edge.guide()])
        }
        None => {
            let dx = axis.vertical.map_or(0.0, |m| m.offset(dragging));
            let dy = axis.horizontal.map_or(0.0, |m| m.offset(dragging));
            debug!(
                dragging = dragging.id(),
                vertical = ?axis.vertical,
                horizontal = ?axis.horizontal,
                "axis alignment"
            );
            (dvec2(dx, dy), axis.guides(), Vec::new())
        }
    };

    let snapped = dragging.translated(offset.x, offset.y);
    let distances = neighbor_distances(&snapped, all_boxes, options.max_distance());
    let snapped_at = dragging.top_left() + offset;

    SmartGuideResult {
        snapped_x: snapped_at.x,
        snapped_y: snapped_at.y,
        guides,
        diagonal_guides,
        distances,
    }
}

/// Measure between exactly two selected objects.
///
/// Rotated pairs (either box rotated) must share an orientation and are
/// measured between their closest facing parallel edges. Axis-aligned pairs
/// use the larger of the horizontal and vertical gaps (horizontal on ties).
/// `None` when the boxes overlap on both axes, touch, or have incompatible
/// rotations.
pub fn calculate_selection_distance(a: &BoundingBox, b: &BoundingBox) -> Option<SelectionDistanceResult> {
    if a.is_rotated() || b.is_rotated() {
        return rotated_selection_distance(a, b);
    }

    let gap_x = (b.left() - a.right()).max(a.left() - b.right());
    let gap_y = (b.top() - a.bottom()).max(a.top() - b.bottom());
    if gap_x <= 0.0 && gap_y <= 0.0 {
        return None;
    }

    let (line_start, line_end, axis) = if gap_x >= gap_y {
        let y = shared_mid(a.top(), a.bottom(), b.top(), b.bottom()).unwrap_or((a.center_y() + b.center_y()) / 2.0);
        let (from, to) = if a.right() <= b.left() {
            (a.right(), b.left())
        } else {
            (a.left(), b.right())
        };
        (dvec2(from, y), dvec2(to, y), Axis::X)
    } else {
        let x = shared_mid(a.left(), a.right(), b.left(), b.right()).unwrap_or((a.center_x() + b.center_x()) / 2.0);
        let (from, to) = if a.bottom() <= b.top() {
            (a.bottom(), b.top())
        } else {
            (a.top(), b.bottom())
        };
        (dvec2(x, from), dvec2(x, to), Axis::Y)
    };

    Some(SelectionDistanceResult {
        distance: gap_x.max(gap_y),
        axis,
        line_start,
        line_end,
        direction: (line_end - line_start).normalize_or_zero(),
        angle: None,
    })
}

fn rotated_selection_distance(a: &BoundingBox, b: &BoundingBox) -> Option<SelectionDistanceResult> {
    if !angles_match_default(a.rotation(), b.rotation()) {
        debug!(a = a.id(), b = b.id(), "selection rotations differ");
        return None;
    }
    let gap = closest_parallel_edges(a, b)?.gap;
    if gap.distance <= 0.0 {
        return None;
    }
    Some(SelectionDistanceResult {
        distance: gap.distance,
        axis: Axis::dominant(gap.start, gap.end),
        line_start: gap.start,
        line_end: gap.end,
        direction: (gap.end - gap.start).normalize_or_zero(),
        angle: Some(a.rotation()),
    })
}

/// Middle of the shared part of two ranges, including ranges that only touch.
fn shared_mid(lo_a: f64, hi_a: f64, lo_b: f64, hi_b: f64) -> Option<f64> {
    let lo = lo_a.max(lo_b);
    let hi = hi_a.min(hi_b);
    (lo <= hi).then(|| (lo + hi) / 2.0)
}
