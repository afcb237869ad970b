//! Geometry primitives: rotation, angle comparison, rotated corners and edges,
//! point/line distances.
//!
//! Conventions: y grows downward, rotations are degrees clockwise from North
//! (the box's "up" edge).

use glam::{DVec2, dvec2};

use crate::bbox::BoundingBox;
use crate::defaults::ANGLE_TOLERANCE_DEG;
use crate::types::Point;

/// Which side of a box an edge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EdgeSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl EdgeSide {
    /// Sides in corner order, starting from the top-left corner.
    pub const ALL: [EdgeSide; 4] = [EdgeSide::Top, EdgeSide::Right, EdgeSide::Bottom, EdgeSide::Left];

    /// Top and bottom are parallel, as are left and right.
    pub fn is_parallel_to(self, other: EdgeSide) -> bool {
        matches!(
            (self, other),
            (EdgeSide::Top | EdgeSide::Bottom, EdgeSide::Top | EdgeSide::Bottom)
                | (EdgeSide::Left | EdgeSide::Right, EdgeSide::Left | EdgeSide::Right)
        )
    }
}

/// One edge of a (possibly rotated) box.
///
/// Derived from a [`BoundingBox`] on every call; never cached, since the box's
/// rotation may change between drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedEdge<'a> {
    pub id: &'a str,
    pub start: Point,
    pub end: Point,
    /// Orientation in `[0, 180)`: an edge and its opposite share an angle.
    pub angle: f64,
    pub side: EdgeSide,
}

impl RotatedEdge<'_> {
    pub fn midpoint(&self) -> Point {
        (self.start + self.end) * 0.5
    }

    /// Unit vector from `start` to `end`, or zero for a degenerate edge.
    pub fn direction(&self) -> DVec2 {
        (self.end - self.start).normalize_or_zero()
    }

    /// Unit normal pointing away from the box interior.
    ///
    /// Corners run clockwise on screen, so the outward side is the direction
    /// rotated a quarter turn counter-clockwise.
    pub fn outward_normal(&self) -> DVec2 {
        let d = self.direction();
        dvec2(d.y, -d.x)
    }
}

/// Rotate `point` about `center` by `degrees` clockwise (screen coordinates).
pub fn rotate_point(point: Point, center: Point, degrees: f64) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let d = point - center;
    dvec2(center.x + d.x * cos - d.y * sin, center.y + d.x * sin + d.y * cos)
}

/// Fold an angle into `[0, 180)`: a line and its half-turn are the same orientation.
pub fn normalize_angle(degrees: f64) -> f64 {
    ((degrees % 180.0) + 180.0) % 180.0
}

/// Whether two orientations are parallel within `tolerance` degrees,
/// including across the 0/180 wraparound.
pub fn angles_match(a: f64, b: f64, tolerance: f64) -> bool {
    let diff = (normalize_angle(a) - normalize_angle(b)).abs();
    diff <= tolerance || diff >= 180.0 - tolerance
}

/// [`angles_match`] with the fixed [`ANGLE_TOLERANCE_DEG`].
pub fn angles_match_default(a: f64, b: f64) -> bool {
    angles_match(a, b, ANGLE_TOLERANCE_DEG)
}

/// Corners of the box after rotation: top-left, top-right, bottom-right, bottom-left.
pub fn rotated_corners(bbox: &BoundingBox) -> [Point; 4] {
    let corners = [
        dvec2(bbox.left(), bbox.top()),
        dvec2(bbox.right(), bbox.top()),
        dvec2(bbox.right(), bbox.bottom()),
        dvec2(bbox.left(), bbox.bottom()),
    ];
    let rotation = bbox.rotation();
    if rotation == 0.0 {
        return corners;
    }

    let center = bbox.center();
    corners.map(|c| rotate_point(c, center, rotation))
}

/// The four edges built from consecutive corners, in [`EdgeSide::ALL`] order.
pub fn rotated_edges(bbox: &BoundingBox) -> [RotatedEdge<'_>; 4] {
    let corners = rotated_corners(bbox);
    let rotation = bbox.rotation();
    std::array::from_fn(|i| RotatedEdge {
        id: bbox.id(),
        start: corners[i],
        end: corners[(i + 1) % 4],
        angle: normalize_angle(rotation + 90.0 * i as f64),
        side: EdgeSide::ALL[i],
    })
}

/// Perpendicular distance from `point` to the infinite line through
/// `line_start` and `line_end`; plain point distance if the line has no length.
pub fn point_to_line_distance(point: Point, line_start: Point, line_end: Point) -> f64 {
    let line = line_end - line_start;
    let len = line.length();
    if len == 0.0 {
        return point.distance(line_start);
    }
    line.perp_dot(point - line_start).abs() / len
}

/// Closest point to `point` on the segment `start..end`.
pub fn closest_point_on_segment(point: Point, start: Point, end: Point) -> Point {
    let seg = end - start;
    let len_sq = seg.length_squared();
    if len_sq == 0.0 {
        return start;
    }
    let t = ((point - start).dot(seg) / len_sq).clamp(0.0, 1.0);
    start + seg * t
}
