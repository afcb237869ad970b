//! End-to-end behavior of `calculate_smart_guides`.
//!
//! Run with logging: cargo test --features tracing -- --nocapture
//! (RUST_LOG=snapguide=trace for every candidate)

use approx::assert_abs_diff_eq;
use glam::dvec2;
use snapguide::{
    AlignmentGuide, AlignmentType, BoundingBox, CircleShape, Footprint, GuideKind, RectangleShape, Shape, SnapOptions,
    boxes_for, calculate_smart_guides, calculate_smart_guides_with,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn edges(id: &str, left: f64, top: f64, right: f64, bottom: f64) -> BoundingBox {
    BoundingBox::from_edges(id, left, top, right, bottom).unwrap()
}

fn rect(id: &str, x: f64, y: f64, w: f64, h: f64, rotation: f64) -> BoundingBox {
    BoundingBox::from_rectangle(id, x, y, w, h, rotation).unwrap()
}

/// Direction of a rotated box's top edge and the outward normal of its bottom edge.
fn frame(rotation: f64) -> (glam::DVec2, glam::DVec2) {
    let (sin, cos) = rotation.to_radians().sin_cos();
    (dvec2(cos, sin), dvec2(-sin, cos))
}

fn summary(result: &snapguide::SmartGuideResult) -> String {
    let mut parts = vec![format!("snapped {},{}", result.snapped_x, result.snapped_y)];
    parts.extend(result.guides.iter().map(AlignmentGuide::to_string));
    parts.extend(result.distances.iter().map(ToString::to_string));
    parts.join(" | ")
}

#[test]
fn right_edge_snaps_to_neighbor_left_edge() {
    init_tracing();
    let a = edges("A", 0.0, 0.0, 10.0, 10.0);
    let b = edges("B", 15.0, 0.0, 25.0, 10.0);
    let result = calculate_smart_guides(&a, &[a.clone(), b], 6.0);

    assert_eq!(result.snapped_x, 5.0);
    assert_eq!(result.snapped_y, 0.0);
    assert!(result.guides.contains(&AlignmentGuide {
        kind: GuideKind::Vertical,
        position: 15.0,
        alignment: AlignmentType::Right,
    }));
    assert!(result.guides.contains(&AlignmentGuide {
        kind: GuideKind::Horizontal,
        position: 0.0,
        alignment: AlignmentType::Top,
    }));
    assert!(result.diagonal_guides.is_empty());
    // Snapped flush against B: touching boxes have no gap to show
    assert!(result.distances.is_empty());
    insta::assert_snapshot!(summary(&result), @"snapped 5,0 | vertical 15 (right) | horizontal 0 (top)");
}

#[test]
fn repeated_calls_agree() {
    let a = rect("A", 3.0, 7.0, 12.0, 9.0, 0.0);
    let boxes = vec![
        a.clone(),
        rect("B", 18.0, 2.0, 10.0, 10.0, 0.0),
        rect("C", -20.0, 30.0, 25.0, 5.0, 0.0),
        rect("D", 40.0, 40.0, 20.0, 20.0, 30.0),
    ];
    let first = calculate_smart_guides(&a, &boxes, 6.0);
    let second = calculate_smart_guides(&a, &boxes, 6.0);
    assert_eq!(first, second);

    // Same again through the rotated path
    let (along, normal) = frame(30.0);
    let shift = normal * 20.5 - along * 5.0;
    let tilted = rect("E", shift.x, shift.y, 40.0, 20.0, 30.0);
    let boxes = vec![rect("T", 0.0, 0.0, 40.0, 20.0, 30.0), boxes[1].clone()];
    let first = calculate_smart_guides(&tilted, &boxes, 5.0);
    assert_eq!(first.diagonal_guides.len(), 1);
    assert_eq!(first, calculate_smart_guides(&tilted, &boxes, 5.0));
}

#[test]
fn own_box_is_ignored() {
    let a = edges("A", 0.0, 0.0, 10.0, 10.0);
    // The stored copy of A sits 1 unit away and would otherwise attract it
    let stale = edges("A", 1.0, 1.0, 11.0, 11.0);
    let result = calculate_smart_guides(&a, &[stale], 6.0);
    assert!(!result.is_snapped());
    assert_eq!((result.snapped_x, result.snapped_y), (0.0, 0.0));
    assert!(result.distances.is_empty());
}

#[test]
fn threshold_is_inclusive() {
    let a = edges("A", 0.0, 0.0, 10.0, 10.0);
    let at_threshold = edges("B", 11.0, 500.0, 41.0, 530.0);
    let result = calculate_smart_guides(&a, &[at_threshold], 1.0);
    assert_eq!(result.guides.len(), 1);
    assert_eq!(result.guides[0].position, 11.0);
    assert_eq!(result.snapped_x, 1.0);

    let beyond = edges("B", 11.0 + 1e-9, 500.0, 41.0, 530.0);
    let result = calculate_smart_guides(&a, &[beyond], 1.0);
    assert!(result.guides.is_empty());
    assert_eq!(result.snapped_x, 0.0);
}

#[test]
fn matched_probe_lands_on_guide() {
    let boxes = vec![
        edges("B", 40.0, 10.0, 60.0, 30.0),
        edges("C", 100.0, 55.0, 130.0, 70.0),
        edges("D", -10.0, 90.0, 5.0, 120.0),
    ];
    for (dx, dy) in [(17.0, 8.0), (43.5, 1.0), (-2.0, 52.0), (95.0, 87.0), (61.0, 31.5)] {
        let dragging = rect("A", dx, dy, 20.0, 15.0, 0.0);
        let result = calculate_smart_guides(&dragging, &boxes, 4.0);
        let offset = result.offset(&dragging);
        let snapped = dragging.translated(offset.x, offset.y);
        for guide in &result.guides {
            assert_abs_diff_eq!(guide.alignment.probe(&snapped), guide.position, epsilon = 1e-9);
        }
    }
}

#[test]
fn rotated_alignment_beats_farther_axis_match() {
    init_tracing();
    let (along, normal) = frame(30.0);
    let target = rect("T", 0.0, 0.0, 40.0, 20.0, 30.0);
    let shift = normal * 20.5 - along * 5.0;
    let dragging = rect("D", shift.x, shift.y, 40.0, 20.0, 30.0);

    // Unrotated, D's top sits about 4.75 from T's bottom: an axis match
    // exists, but the rotated edges are only 0.5 apart.
    let result = calculate_smart_guides(&dragging, &[target], 5.0);
    assert!(result.guides.is_empty());
    assert_eq!(result.diagonal_guides.len(), 1);
    assert_abs_diff_eq!(result.diagonal_guides[0].angle, 30.0, epsilon = 1e-9);

    let offset = result.offset(&dragging);
    assert_abs_diff_eq!(offset.x, -normal.x * 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(offset.y, -normal.y * 0.5, epsilon = 1e-9);
}

#[test]
fn coincident_rotated_footprints_prefer_diagonal_guide() {
    // Every probe and every edge coincides: axis and rotated distances tie at 0
    let target = rect("T", 0.0, 0.0, 40.0, 20.0, 30.0);
    let dragging = rect("D", 0.0, 0.0, 40.0, 20.0, 30.0);
    let result = calculate_smart_guides(&dragging, &[target], 5.0);
    assert!(result.guides.is_empty());
    assert_eq!(result.diagonal_guides.len(), 1);
    let offset = result.offset(&dragging);
    assert_abs_diff_eq!(offset.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(offset.y, 0.0, epsilon = 1e-9);
}

#[test]
fn rotations_within_a_degree_still_align() {
    let (along, normal) = frame(30.0);
    let target = rect("T", 0.0, 0.0, 40.0, 20.0, 30.0);
    let shift = normal * 20.5 - along * 5.0;

    let close = rect("D", shift.x, shift.y, 40.0, 20.0, 30.5);
    let result = calculate_smart_guides(&close, std::slice::from_ref(&target), 5.0);
    assert_eq!(result.diagonal_guides.len(), 1);
    assert!(result.guides.is_empty());

    // 1.5 degrees apart: only the unrotated top/bottom match (about 4.75) is left
    let off = rect("D", shift.x, shift.y, 40.0, 20.0, 31.5);
    let result = calculate_smart_guides(&off, &[target], 5.0);
    assert!(result.diagonal_guides.is_empty());
    assert_eq!(result.guides.len(), 1);
    assert_eq!(result.guides[0].kind, GuideKind::Horizontal);
}

#[test]
fn rotated_distances_respect_cap() {
    let (_, normal) = frame(30.0);
    let a = rect("A", 0.0, 0.0, 40.0, 20.0, 30.0);

    let near = normal * (20.0 + 119.9);
    let b = rect("B", near.x, near.y, 40.0, 20.0, 30.0);
    let result = calculate_smart_guides(&a, &[b], 1.0);
    assert!(!result.is_snapped());
    assert_eq!(result.distances.len(), 1);
    assert_abs_diff_eq!(result.distances[0].distance, 119.9, epsilon = 1e-9);
    assert_eq!(result.distances[0].axis, snapguide::Axis::Y);

    let far = normal * (20.0 + 130.0);
    let b = rect("B", far.x, far.y, 40.0, 20.0, 30.0);
    let result = calculate_smart_guides(&a, &[b], 1.0);
    assert!(result.distances.is_empty());
}

#[test]
fn quarter_turn_boxes_use_axis_alignment() {
    let a = rect("A", 0.0, 0.0, 10.0, 10.0, 90.0);
    let b = rect("B", 13.0, 40.0, 10.0, 10.0, 0.0);
    let result = calculate_smart_guides(&a, &[b], 4.0);
    assert!(result.diagonal_guides.is_empty());
    assert_eq!(result.guides.len(), 1);
    assert_eq!(result.guides[0].alignment, AlignmentType::Right);
}

#[test]
fn distances_stay_within_cap() {
    let a = edges("A", 0.0, 0.0, 10.0, 10.0);
    let boxes = vec![
        edges("near-right", 30.0, 2.0, 40.0, 8.0),
        edges("far-right", 200.0, 0.0, 210.0, 10.0),
        edges("just-inside", 2.0, 129.9, 8.0, 140.0),
        edges("at-cap-left", -130.0, 0.0, -120.0, 10.0),
    ];
    let result = calculate_smart_guides(&a, &boxes, 0.5);
    assert!(!result.distances.is_empty());
    for d in &result.distances {
        assert!(d.distance > 0.0 && d.distance < 120.0, "{d}");
    }
    assert_eq!(result.distances.len(), 2);
    assert_abs_diff_eq!(result.distances[1].distance, 119.9, epsilon = 1e-9);
}

#[test]
fn diagonal_neighbors_have_no_distance() {
    let a = edges("A", 0.0, 0.0, 10.0, 10.0);
    let b = edges("B", 20.0, 100.0, 30.0, 110.0);
    let result = calculate_smart_guides(&a, &[b], 1.0);
    assert!(result.distances.is_empty());
}

#[test]
fn wider_cap_reports_farther_neighbors() {
    let a = edges("A", 0.0, 0.0, 10.0, 10.0);
    let b = edges("B", 160.0, 0.0, 170.0, 10.0);
    let options = SnapOptions::for_zoom(6.0, 2.0).unwrap().with_max_distance(500.0).unwrap();
    let result = calculate_smart_guides_with(&a, &[b], &options);
    assert_eq!(result.distances.len(), 1);
    assert_eq!(result.distances[0].distance, 150.0);
}

#[test]
fn dragged_circle_snaps_its_bounding_square() {
    let shapes = vec![
        Shape::from(RectangleShape::new("bed", 0.0, 0.0, 10.0, 10.0)),
        Shape::from(CircleShape::new("tomato", 18.0, 40.0, 5.0)),
    ];
    let boxes = boxes_for(&shapes).unwrap();
    let dragged = shapes[1].translated(0.0, 0.0).bounding_box().unwrap();

    let result = calculate_smart_guides(&dragged, &boxes, 4.0);
    // Left of the circle's square (13) snaps to the bed's right edge (10)
    assert_eq!(result.snapped_x, 10.0);
    assert_eq!(result.snapped_center(5.0, 5.0), dvec2(15.0, 40.0));
}

#[cfg(feature = "serde")]
#[test]
fn result_serializes_for_renderers() {
    let a = edges("A", 0.0, 0.0, 10.0, 10.0);
    let b = edges("B", 15.0, 0.0, 25.0, 10.0);
    let result = calculate_smart_guides(&a, &[b], 6.0);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["snappedX"], 5.0);
    assert_eq!(json["guides"][0]["type"], "vertical");
    assert_eq!(json["guides"][0]["alignment"], "right");

    let back: snapguide::SmartGuideResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}
