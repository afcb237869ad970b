//! Result types handed back to the caller's renderer and shape store.
//!
//! All of these are plain values: stateless rendering hints built fresh per call.

use std::fmt;

use crate::bbox::BoundingBox;
use crate::types::{Axis, Point};

/// Orientation of an axis-aligned guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GuideKind {
    /// Constant x, drawn top to bottom.
    Vertical,
    /// Constant y, drawn left to right.
    Horizontal,
}

/// Which probe of the dragged box lined up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum AlignmentType {
    Left,
    Right,
    CenterX,
    Top,
    Bottom,
    CenterY,
}

impl AlignmentType {
    /// Probes producing vertical guides, in scan order.
    pub const VERTICAL: [AlignmentType; 3] = [AlignmentType::Left, AlignmentType::Right, AlignmentType::CenterX];

    /// Probes producing horizontal guides, in scan order.
    pub const HORIZONTAL: [AlignmentType; 3] = [AlignmentType::Top, AlignmentType::Bottom, AlignmentType::CenterY];

    pub fn kind(self) -> GuideKind {
        match self {
            AlignmentType::Left | AlignmentType::Right | AlignmentType::CenterX => GuideKind::Vertical,
            AlignmentType::Top | AlignmentType::Bottom | AlignmentType::CenterY => GuideKind::Horizontal,
        }
    }

    /// The coordinate this probe reads from a box.
    pub fn probe(self, bbox: &BoundingBox) -> f64 {
        match self {
            AlignmentType::Left => bbox.left(),
            AlignmentType::Right => bbox.right(),
            AlignmentType::CenterX => bbox.center_x(),
            AlignmentType::Top => bbox.top(),
            AlignmentType::Bottom => bbox.bottom(),
            AlignmentType::CenterY => bbox.center_y(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            AlignmentType::Left => "left",
            AlignmentType::Right => "right",
            AlignmentType::CenterX => "centerX",
            AlignmentType::Top => "top",
            AlignmentType::Bottom => "bottom",
            AlignmentType::CenterY => "centerY",
        }
    }
}

/// A vertical or horizontal guide line through `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AlignmentGuide {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: GuideKind,
    /// x for vertical guides, y for horizontal ones.
    pub position: f64,
    /// The dragged box's probe that matched.
    pub alignment: AlignmentType,
}

impl fmt::Display for AlignmentGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            GuideKind::Vertical => "vertical",
            GuideKind::Horizontal => "horizontal",
        };
        write!(f, "{kind} {} ({})", self.position, self.alignment.name())
    }
}

/// Guide along a matched rotated edge, overshooting both shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagonalGuide {
    pub start: Point,
    pub end: Point,
    /// Edge orientation in `[0, 180)`.
    pub angle: f64,
}

impl fmt::Display for DiagonalGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "diagonal ({:.2}, {:.2}) -> ({:.2}, {:.2}) at {:.1}deg",
            self.start.x, self.start.y, self.end.x, self.end.y, self.angle
        )
    }
}

/// Gap between the dragged box and one neighbor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DistanceIndicator {
    /// Screen axis the gap runs along (for rotated gaps: the closer one).
    pub axis: Axis,
    /// Lower end of the gap along `axis`.
    pub from: f64,
    /// Upper end of the gap along `axis`.
    pub to: f64,
    /// Where to draw the label: the middle of the measured segment.
    pub label_position: Point,
    pub distance: f64,
    pub start_point: Option<Point>,
    pub end_point: Option<Point>,
}

impl fmt::Display for DistanceIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}..{} = {}", self.axis, self.from, self.to, self.distance)
    }
}

/// Everything the caller needs after one pointer move.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SmartGuideResult {
    /// Left edge of the dragged box after correction.
    pub snapped_x: f64,
    /// Top edge of the dragged box after correction.
    pub snapped_y: f64,
    pub guides: Vec<AlignmentGuide>,
    pub diagonal_guides: Vec<DiagonalGuide>,
    /// At most one per axis.
    pub distances: Vec<DistanceIndicator>,
}

impl SmartGuideResult {
    /// Correction applied to `dragging`.
    pub fn offset(&self, dragging: &BoundingBox) -> Point {
        Point::new(self.snapped_x, self.snapped_y) - dragging.top_left()
    }

    /// Center of the snapped shape, e.g. `snapped_center(radius, radius)` for a circle.
    pub fn snapped_center(&self, half_width: f64, half_height: f64) -> Point {
        Point::new(self.snapped_x + half_width, self.snapped_y + half_height)
    }

    /// Whether any alignment fired.
    pub fn is_snapped(&self) -> bool {
        !self.guides.is_empty() || !self.diagonal_guides.is_empty()
    }

    /// Closest neighbor distance along `axis`, if one was reported.
    pub fn distance_along(&self, axis: Axis) -> Option<&DistanceIndicator> {
        self.distances.iter().find(|d| d.axis == axis)
    }
}

/// Measurement between exactly two selected objects.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SelectionDistanceResult {
    pub distance: f64,
    pub axis: Axis,
    pub line_start: Point,
    pub line_end: Point,
    /// Unit vector from `line_start` to `line_end`.
    pub direction: Point,
    /// Shared rotation of the pair, only for rotated measurements.
    pub angle: Option<f64>,
}
