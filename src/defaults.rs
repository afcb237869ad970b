//! Fixed design constants (all in field units unless noted)

/// Two edge orientations closer than this many degrees are treated as parallel.
/// Not user-configurable.
pub const ANGLE_TOLERANCE_DEG: f64 = 1.0;

/// How far a diagonal guide overshoots the matched edges at each end.
pub const GUIDE_EXTENSION: f64 = 24.0;

/// Neighbor distances at or beyond this are not reported (about 10 ft when the
/// field unit is inches). A display-relevance filter, not a geometric limit.
pub const MAX_DISTANCE: f64 = 120.0;

/// Default snap threshold in screen pixels, divided by zoom to get field units.
pub const DEFAULT_SNAP_THRESHOLD_PX: f64 = 6.0;
