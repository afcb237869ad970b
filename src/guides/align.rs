//! Axis-aligned alignment: left/right/center-x and top/bottom/center-y coincidences.

use crate::bbox::BoundingBox;
use crate::log::trace;

use super::types::{AlignmentGuide, AlignmentType};

/// One probe of the dragged box landing within threshold of a target probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentMatch {
    /// The dragged box's probe.
    pub alignment: AlignmentType,
    /// Coordinate of the target probe it lines up with.
    pub target_value: f64,
    pub distance: f64,
}

impl AlignmentMatch {
    /// Shift along the probe's axis that puts the probe exactly on the target.
    pub fn offset(&self, dragging: &BoundingBox) -> f64 {
        self.target_value - self.alignment.probe(dragging)
    }

    pub fn guide(&self) -> AlignmentGuide {
        AlignmentGuide {
            kind: self.alignment.kind(),
            position: self.target_value,
            alignment: self.alignment,
        }
    }
}

/// Running best match per axis.
///
/// The arg-min is global over every target scanned so far, not per target.
/// A later candidate replaces the best only when strictly closer, so on exact
/// ties the first one found wins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisMatches {
    /// Best match for a vertical guide (x probes).
    pub vertical: Option<AlignmentMatch>,
    /// Best match for a horizontal guide (y probes).
    pub horizontal: Option<AlignmentMatch>,
}

impl AxisMatches {
    /// Compare every probe pair between `dragging` and `target`.
    pub fn scan(&mut self, dragging: &BoundingBox, target: &BoundingBox, threshold: f64) {
        scan_probes(&mut self.vertical, &AlignmentType::VERTICAL, dragging, target, threshold);
        scan_probes(&mut self.horizontal, &AlignmentType::HORIZONTAL, dragging, target, threshold);
    }

    /// Distance of the vertical winner, infinitely far when there is none.
    pub fn vertical_distance(&self) -> f64 {
        self.vertical.map_or(f64::INFINITY, |m| m.distance)
    }

    /// Distance of the horizontal winner, infinitely far when there is none.
    pub fn horizontal_distance(&self) -> f64 {
        self.horizontal.map_or(f64::INFINITY, |m| m.distance)
    }

    pub fn guides(&self) -> Vec<AlignmentGuide> {
        self.vertical.iter().chain(self.horizontal.iter()).map(AlignmentMatch::guide).collect()
    }
}

fn scan_probes(
    best: &mut Option<AlignmentMatch>,
    probes: &[AlignmentType; 3],
    dragging: &BoundingBox,
    target: &BoundingBox,
    threshold: f64,
) {
    for &drag_probe in probes {
        let drag_value = drag_probe.probe(dragging);
        for &target_probe in probes {
            let target_value = target_probe.probe(target);
            let distance = (drag_value - target_value).abs();
            if distance > threshold {
                continue;
            }
            if best.is_some_and(|b| b.distance <= distance) {
                continue;
            }
            trace!(target_id = target.id(), ?drag_probe, ?target_probe, distance, "alignment candidate");
            *best = Some(AlignmentMatch {
                alignment: drag_probe,
                target_value,
                distance,
            });
        }
    }
}

/// Best vertical and horizontal alignment of `dragging` against `boxes`,
/// skipping any box with the dragged box's id.
pub fn detect_axis_alignments(dragging: &BoundingBox, boxes: &[BoundingBox], threshold: f64) -> AxisMatches {
    let mut matches = AxisMatches::default();
    for target in boxes.iter().filter(|b| b.id() != dragging.id()) {
        matches.scan(dragging, target, threshold);
    }
    matches
}
