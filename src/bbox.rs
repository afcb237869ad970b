//! The bounding box model and the shapes it is built from.
//!
//! Every shape taking part in alignment is reduced to a [`BoundingBox`]: an
//! axis-aligned box plus an optional rotation about its center. Rectangles
//! (garden beds, fences) keep their rotation; circles (plant markers) become
//! their unrotated bounding square.

use enum_dispatch::enum_dispatch;
use glam::dvec2;

use crate::errors::GeometryError;
use crate::types::{Point, check_finite, check_positive};

/// Axis-aligned box with an optional rotation about its center.
///
/// Built only through the validated constructors; fields are read-only so
/// the derived center can never drift from the edges. Moving a box produces a
/// new box ([`BoundingBox::translated`]).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BoundingBox {
    id: String,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    center_x: f64,
    center_y: f64,
    rotation: f64,
}

fn finite(id: &str, shape: &'static str, field: &'static str, value: f64) -> Result<f64, GeometryError> {
    check_finite(value).map_err(|_| GeometryError::NonFinite {
        id: id.to_string(),
        shape,
        field,
        value,
    })
}

fn dimension(id: &str, shape: &'static str, dimension: &'static str, value: f64) -> Result<f64, GeometryError> {
    check_positive(value).map_err(|reason| GeometryError::InvalidDimension {
        id: id.to_string(),
        shape,
        dimension,
        value,
        reason,
    })
}

impl BoundingBox {
    /// Box of a rectangle whose unrotated top-left corner is `(x, y)`.
    ///
    /// `rotation` is in degrees clockwise from North; pass `0.0` for an
    /// axis-aligned rectangle.
    pub fn from_rectangle(
        id: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotation: f64,
    ) -> Result<Self, GeometryError> {
        let id = id.into();
        let x = finite(&id, "rectangle", "x", x)?;
        let y = finite(&id, "rectangle", "y", y)?;
        let width = dimension(&id, "rectangle", "width", width)?;
        let height = dimension(&id, "rectangle", "height", height)?;
        let rotation = finite(&id, "rectangle", "rotation", rotation)?;
        Ok(Self::build(id, x, y, x + width, y + height, rotation))
    }

    /// Square bounding box of a circle. Circles have no orientation.
    pub fn from_circle(id: impl Into<String>, center_x: f64, center_y: f64, radius: f64) -> Result<Self, GeometryError> {
        let id = id.into();
        let center_x = finite(&id, "circle", "center x", center_x)?;
        let center_y = finite(&id, "circle", "center y", center_y)?;
        let radius = dimension(&id, "circle", "radius", radius)?;
        Ok(Self::build(
            id,
            center_x - radius,
            center_y - radius,
            center_x + radius,
            center_y + radius,
            0.0,
        ))
    }

    /// Axis-aligned box from its edge coordinates.
    pub fn from_edges(id: impl Into<String>, left: f64, top: f64, right: f64, bottom: f64) -> Result<Self, GeometryError> {
        let id = id.into();
        let left = finite(&id, "box", "left", left)?;
        let top = finite(&id, "box", "top", top)?;
        let right = finite(&id, "box", "right", right)?;
        let bottom = finite(&id, "box", "bottom", bottom)?;
        dimension(&id, "box", "width", right - left)?;
        dimension(&id, "box", "height", bottom - top)?;
        Ok(Self::build(id, left, top, right, bottom, 0.0))
    }

    fn build(id: String, left: f64, top: f64, right: f64, bottom: f64, rotation: f64) -> Self {
        Self {
            id,
            left,
            right,
            top,
            bottom,
            center_x: (left + right) / 2.0,
            center_y: (top + bottom) / 2.0,
            rotation,
        }
    }

    /// A copy moved by `(dx, dy)`, keeping id and rotation.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::build(
            self.id.clone(),
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
            self.rotation,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    pub fn center(&self) -> Point {
        dvec2(self.center_x, self.center_y)
    }

    pub fn top_left(&self) -> Point {
        dvec2(self.left, self.top)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Degrees clockwise from North; `0.0` when axis-aligned.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Any rotation at all, including quarter turns.
    pub fn is_rotated(&self) -> bool {
        self.rotation != 0.0
    }

    /// Rotation is a multiple of 90°, so edges stay parallel to the screen axes.
    pub fn is_axis_aligned(&self) -> bool {
        self.rotation % 90.0 == 0.0
    }
}

// ============================================================================
// Shapes
// ============================================================================

/// Common behavior for every shape that can be dragged and aligned.
#[enum_dispatch]
pub trait Footprint {
    /// Opaque identifier, copied onto the bounding box.
    fn id(&self) -> &str;

    /// The box the alignment engine works with.
    fn bounding_box(&self) -> Result<BoundingBox, GeometryError>;

    /// The same shape moved by `(dx, dy)`, e.g. at its proposed drag position.
    fn translated(&self, dx: f64, dy: f64) -> Shape;
}

/// A rectangle (bed, fence run) positioned by its unrotated top-left corner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RectangleShape {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: f64,
}

impl RectangleShape {
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}

impl Footprint for RectangleShape {
    fn id(&self) -> &str {
        &self.id
    }

    fn bounding_box(&self) -> Result<BoundingBox, GeometryError> {
        BoundingBox::from_rectangle(self.id.clone(), self.x, self.y, self.width, self.height, self.rotation)
    }

    fn translated(&self, dx: f64, dy: f64) -> Shape {
        Shape::Rectangle(Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        })
    }
}

/// A circle (plant marker) positioned by its center.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CircleShape {
    pub id: String,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl CircleShape {
    pub fn new(id: impl Into<String>, center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            id: id.into(),
            center_x,
            center_y,
            radius,
        }
    }
}

impl Footprint for CircleShape {
    fn id(&self) -> &str {
        &self.id
    }

    fn bounding_box(&self) -> Result<BoundingBox, GeometryError> {
        BoundingBox::from_circle(self.id.clone(), self.center_x, self.center_y, self.radius)
    }

    fn translated(&self, dx: f64, dy: f64) -> Shape {
        Shape::Circle(Self {
            center_x: self.center_x + dx,
            center_y: self.center_y + dy,
            ..self.clone()
        })
    }
}

/// Any shape the engine understands.
#[enum_dispatch(Footprint)]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Shape {
    Rectangle(RectangleShape),
    Circle(CircleShape),
}

/// Build boxes for a set of shapes, keeping the caller's order.
///
/// Fails on the first shape with invalid dimensions.
pub fn boxes_for<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Result<Vec<BoundingBox>, GeometryError> {
    shapes.into_iter().map(Footprint::bounding_box).collect()
}
