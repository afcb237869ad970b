//! Gaps between shapes, for the "distance to neighbors" overlay and the
//! two-object selection measurement.
//!
//! Two independent paths:
//! - axis-aligned boxes measure side-by-side gaps between facing edges,
//! - rotated boxes measure between their closest facing parallel edges.

use glam::dvec2;

use crate::bbox::BoundingBox;
use crate::geometry::{RotatedEdge, angles_match_default, closest_point_on_segment, rotated_edges};
use crate::types::{Axis, Point};

use super::types::DistanceIndicator;

/// Closest approach between two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentGap {
    pub distance: f64,
    /// Point on the first segment.
    pub start: Point,
    /// Point on the second segment.
    pub end: Point,
}

/// The closest pair of facing parallel edges between two rotated boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePairGap<'a> {
    pub gap: SegmentGap,
    pub edge_a: RotatedEdge<'a>,
    pub edge_b: RotatedEdge<'a>,
}

/// Middle of the shared part of `[lo_a, hi_a]` and `[lo_b, hi_b]`, if the
/// ranges overlap by a positive amount.
fn overlap_mid(lo_a: f64, hi_a: f64, lo_b: f64, hi_b: f64) -> Option<f64> {
    let lo = lo_a.max(lo_b);
    let hi = hi_a.min(hi_b);
    (lo < hi).then(|| (lo + hi) / 2.0)
}

/// Facing-edge gap along one axis, `(from, to)` with `from < to`.
fn facing_gap(a_lo: f64, a_hi: f64, b_lo: f64, b_hi: f64) -> Option<(f64, f64)> {
    if a_hi <= b_lo {
        Some((a_hi, b_lo))
    } else if b_hi <= a_lo {
        Some((b_hi, a_lo))
    } else {
        None
    }
}

fn reportable(distance: f64, max_distance: f64) -> bool {
    distance > 0.0 && distance < max_distance
}

/// Left/right gap between two boxes that share some vertical range.
///
/// `None` when they share no y-range, overlap or touch horizontally, or sit
/// `max_distance` or more apart.
pub fn horizontal_distance(a: &BoundingBox, b: &BoundingBox, max_distance: f64) -> Option<DistanceIndicator> {
    let y = overlap_mid(a.top(), a.bottom(), b.top(), b.bottom())?;
    let (from, to) = facing_gap(a.left(), a.right(), b.left(), b.right())?;
    let distance = to - from;
    if !reportable(distance, max_distance) {
        return None;
    }
    Some(DistanceIndicator {
        axis: Axis::X,
        from,
        to,
        label_position: dvec2((from + to) / 2.0, y),
        distance,
        start_point: Some(dvec2(from, y)),
        end_point: Some(dvec2(to, y)),
    })
}

/// Top/bottom gap between two boxes that share some horizontal range.
pub fn vertical_distance(a: &BoundingBox, b: &BoundingBox, max_distance: f64) -> Option<DistanceIndicator> {
    let x = overlap_mid(a.left(), a.right(), b.left(), b.right())?;
    let (from, to) = facing_gap(a.top(), a.bottom(), b.top(), b.bottom())?;
    let distance = to - from;
    if !reportable(distance, max_distance) {
        return None;
    }
    Some(DistanceIndicator {
        axis: Axis::Y,
        from,
        to,
        label_position: dvec2(x, (from + to) / 2.0),
        distance,
        start_point: Some(dvec2(x, from)),
        end_point: Some(dvec2(x, to)),
    })
}

/// Shortest distance between segments `a` and `b`, assumed parallel.
///
/// When their projections onto `a`'s direction overlap, the separation is
/// measured perpendicular at the middle of the overlap. Otherwise it is the
/// smallest endpoint-to-opposite-segment distance.
pub fn segment_to_segment_distance(a_start: Point, a_end: Point, b_start: Point, b_end: Point) -> SegmentGap {
    let dir = (a_end - a_start).normalize_or_zero();
    if dir != Point::ZERO {
        let len_a = a_start.distance(a_end);
        let t0 = (b_start - a_start).dot(dir);
        let t1 = (b_end - a_start).dot(dir);
        let lo = t0.min(t1).max(0.0);
        let hi = t0.max(t1).min(len_a);
        if lo <= hi {
            let on_a = a_start + dir * ((lo + hi) / 2.0);
            let b_dir = (b_end - b_start).normalize_or_zero();
            let on_b = b_start + b_dir * (on_a - b_start).dot(b_dir);
            return SegmentGap {
                distance: on_a.distance(on_b),
                start: on_a,
                end: on_b,
            };
        }
    }

    let [first, rest @ ..] = [
        (a_start, closest_point_on_segment(a_start, b_start, b_end)),
        (a_end, closest_point_on_segment(a_end, b_start, b_end)),
        (closest_point_on_segment(b_start, a_start, a_end), b_start),
        (closest_point_on_segment(b_end, a_start, a_end), b_end),
    ]
    .map(|(start, end)| SegmentGap {
        distance: start.distance(end),
        start,
        end,
    });
    rest.into_iter()
        .fold(first, |best, gap| if gap.distance < best.distance { gap } else { best })
}

/// An edge faces a point when the point lies on its outward side.
fn faces(edge: &RotatedEdge<'_>, toward: Point) -> bool {
    (toward - edge.midpoint()).dot(edge.outward_normal()) > 0.0
}

/// Closest pair of parallel, mutually facing edges between `a` and `b`.
///
/// `None` when the boxes' rotations differ: there is no meaningful
/// measurement, and no fallback to the axis-aligned path.
pub fn closest_parallel_edges<'a>(a: &'a BoundingBox, b: &'a BoundingBox) -> Option<EdgePairGap<'a>> {
    if !angles_match_default(a.rotation(), b.rotation()) {
        return None;
    }

    let edges_a = rotated_edges(a);
    let edges_b = rotated_edges(b);
    let mut best: Option<EdgePairGap<'a>> = None;

    // With matching box rotations, parallel sides are the parallel edges
    for edge_a in &edges_a {
        for edge_b in &edges_b {
            if !edge_a.side.is_parallel_to(edge_b.side) {
                continue;
            }
            if !faces(edge_a, edge_b.midpoint()) || !faces(edge_b, edge_a.midpoint()) {
                continue;
            }
            let gap = segment_to_segment_distance(edge_a.start, edge_a.end, edge_b.start, edge_b.end);
            if best.is_some_and(|b| b.gap.distance <= gap.distance) {
                continue;
            }
            best = Some(EdgePairGap {
                gap,
                edge_a: *edge_a,
                edge_b: *edge_b,
            });
        }
    }
    best
}

/// Gap between two rotated boxes as an indicator, tagged with the screen axis
/// the measured segment is closer to.
pub fn rotated_distance(a: &BoundingBox, b: &BoundingBox, max_distance: f64) -> Option<DistanceIndicator> {
    let SegmentGap { distance, start, end } = closest_parallel_edges(a, b)?.gap;
    if !reportable(distance, max_distance) {
        return None;
    }
    let axis = Axis::dominant(start, end);
    let (from, to) = {
        let (s, e) = (axis.coord(start), axis.coord(end));
        (s.min(e), s.max(e))
    };
    Some(DistanceIndicator {
        axis,
        from,
        to,
        label_position: (start + end) * 0.5,
        distance,
        start_point: Some(start),
        end_point: Some(end),
    })
}

/// Every reportable gap between `a` and `b`: the rotated path if either box
/// is rotated, otherwise the horizontal and vertical gaps.
pub fn distances_between(a: &BoundingBox, b: &BoundingBox, max_distance: f64) -> Vec<DistanceIndicator> {
    if a.is_rotated() || b.is_rotated() {
        return rotated_distance(a, b, max_distance).into_iter().collect();
    }
    horizontal_distance(a, b, max_distance)
        .into_iter()
        .chain(vertical_distance(a, b, max_distance))
        .collect()
}

/// Closest neighbor gap per axis, x first. Boxes sharing `bbox`'s id are skipped.
pub fn neighbor_distances(bbox: &BoundingBox, boxes: &[BoundingBox], max_distance: f64) -> Vec<DistanceIndicator> {
    let mut best_x: Option<DistanceIndicator> = None;
    let mut best_y: Option<DistanceIndicator> = None;

    for other in boxes.iter().filter(|b| b.id() != bbox.id()) {
        for indicator in distances_between(bbox, other, max_distance) {
            let slot = match indicator.axis {
                Axis::X => &mut best_x,
                Axis::Y => &mut best_y,
            };
            if slot.is_none_or(|b| indicator.distance < b.distance) {
                *slot = Some(indicator);
            }
        }
    }

    best_x.into_iter().chain(best_y).collect()
}
