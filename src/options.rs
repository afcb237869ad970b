//! Per-drag configuration: snap threshold and distance cap.

use crate::defaults::{DEFAULT_SNAP_THRESHOLD_PX, MAX_DISTANCE};
use crate::errors::OptionsError;
use crate::types::{check_non_negative, check_positive};

/// Parameters of one smart-guide evaluation, in field units.
///
/// The threshold is a drag-session parameter: callers usually derive it from
/// a fixed pixel threshold and the current zoom ([`SnapOptions::for_zoom`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOptions {
    threshold: f64,
    max_distance: f64,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SNAP_THRESHOLD_PX,
            max_distance: MAX_DISTANCE,
        }
    }
}

impl SnapOptions {
    /// Create options without validation, with the default distance cap.
    pub(crate) fn new(threshold: f64) -> Self {
        Self {
            threshold,
            max_distance: MAX_DISTANCE,
        }
    }

    /// Create options with validation (rejects NaN, infinite, negative).
    pub fn try_new(threshold: f64) -> Result<Self, OptionsError> {
        let threshold =
            check_non_negative(threshold).map_err(|reason| OptionsError::InvalidThreshold { value: threshold, reason })?;
        Ok(Self::new(threshold))
    }

    /// Convert a screen-pixel threshold at `zoom` into field units.
    pub fn for_zoom(threshold_px: f64, zoom: f64) -> Result<Self, OptionsError> {
        let zoom = check_positive(zoom).map_err(|reason| OptionsError::InvalidZoom { value: zoom, reason })?;
        let threshold_px = check_non_negative(threshold_px)
            .map_err(|reason| OptionsError::InvalidThreshold { value: threshold_px, reason })?;
        Ok(Self::new(threshold_px / zoom))
    }

    /// Replace the neighbor-distance cap. Gaps at or beyond it are not reported.
    pub fn with_max_distance(self, max_distance: f64) -> Result<Self, OptionsError> {
        let max_distance = check_positive(max_distance)
            .map_err(|reason| OptionsError::InvalidMaxDistance { value: max_distance, reason })?;
        Ok(Self { max_distance, ..self })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }
}
