//! Error types with diagnostics using miette
//!
//! Only shape construction can fail. "No alignment" and "no gap" are ordinary
//! outcomes and are modelled with `Option`, not errors.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while building a [`BoundingBox`](crate::bbox::BoundingBox)
/// from raw shape dimensions.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{shape} `{id}` has invalid {dimension} {value}: {reason}")]
    #[diagnostic(
        code(snapguide::geometry::invalid_dimension),
        help("widths, heights and radii must be finite and greater than zero")
    )]
    InvalidDimension {
        id: String,
        shape: &'static str,
        dimension: &'static str,
        value: f64,
        reason: NumericError,
    },

    #[error("{shape} `{id}` has non-finite {field} {value}")]
    #[diagnostic(
        code(snapguide::geometry::non_finite),
        help("positions and rotations must be finite numbers")
    )]
    NonFinite {
        id: String,
        shape: &'static str,
        field: &'static str,
        value: f64,
    },
}

/// Errors raised by [`SnapOptions`](crate::options::SnapOptions) constructors.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum OptionsError {
    #[error("invalid snap threshold {value}: {reason}")]
    #[diagnostic(
        code(snapguide::options::invalid_threshold),
        help("the threshold is a distance and must be finite and not negative")
    )]
    InvalidThreshold { value: f64, reason: NumericError },

    #[error("invalid zoom {value}: {reason}")]
    #[diagnostic(
        code(snapguide::options::invalid_zoom),
        help("zoom divides the pixel threshold, so it must be finite and greater than zero")
    )]
    InvalidZoom { value: f64, reason: NumericError },

    #[error("invalid distance cap {value}: {reason}")]
    #[diagnostic(code(snapguide::options::invalid_max_distance))]
    InvalidMaxDistance { value: f64, reason: NumericError },
}
