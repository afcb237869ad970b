//! Smart alignment guides for dragging shapes on a 2D canvas.
//!
//! While a rectangle or circle is dragged, [`calculate_smart_guides`] snaps
//! its proposed position to nearby objects and reports what to draw:
//! vertical/horizontal alignment lines, a diagonal guide for rotated edges,
//! and distance readouts to the closest neighbors. With exactly two objects
//! selected, [`calculate_selection_distance`] measures the gap between them.
//!
//! All coordinates are field units with y growing downward. Rotations are
//! degrees clockwise from North.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`bbox`] | Bounding boxes and the shapes they are derived from |
//! | [`geometry`] | Rotation, rotated edges, point/line distances |
//! | [`guides`] | Alignment detection, distances, the two entry points |
//! | [`options`] | Snap threshold and distance cap |
//! | [`errors`] | Construction and configuration errors |
//!
//! ```
//! use snapguide::{BoundingBox, calculate_smart_guides};
//!
//! let dragging = BoundingBox::from_rectangle("a", 0.0, 0.0, 10.0, 10.0, 0.0)?;
//! let other = BoundingBox::from_rectangle("b", 15.0, 0.0, 10.0, 10.0, 0.0)?;
//! let result = calculate_smart_guides(&dragging, &[other], 6.0);
//! assert_eq!(result.snapped_x, 5.0);
//! # Ok::<(), snapguide::GeometryError>(())
//! ```

pub mod bbox;
pub mod defaults;
pub mod errors;
pub mod geometry;
pub mod guides;
pub mod log;
pub mod options;
pub mod types;

pub use bbox::{BoundingBox, CircleShape, Footprint, RectangleShape, Shape, boxes_for};
pub use errors::{GeometryError, OptionsError};
pub use guides::{
    AlignmentGuide, AlignmentType, DiagonalGuide, DistanceIndicator, GuideKind, SelectionDistanceResult,
    SmartGuideResult, calculate_selection_distance, calculate_smart_guides, calculate_smart_guides_with,
};
pub use options::SnapOptions;
pub use types::{Axis, NumericError, Point};
