//! Content domain: tests for tuning deserialization.

use super::loader::parse_tuning;

#[test]
fn test_parse_full_tuning() {
    let source = r#"
        (
            movement: (
                move_speed: 12.0,
                jump_force: 300.0,
                ground_probe_length: 4.0,
                dash_curve: (keys: [(t: 0.0, v: 0.5), (t: 0.3, v: 1.0)]),
            ),
            camera: (
                zoomed_half_height: 30.0,
            ),
            metrics: (
                endpoint: "https://example.com/report",
            ),
            levels: ["level_1", "level_2", "level_3"],
        )
    "#;

    let tuning = parse_tuning(source).unwrap();
    assert_eq!(tuning.movement.move_speed, 12.0);
    assert_eq!(tuning.movement.jump_force, 300.0);
    assert_eq!(tuning.movement.ground_probe_length, 4.0);
    assert_eq!(tuning.camera.zoomed_half_height, 30.0);
    assert_eq!(tuning.metrics.endpoint, "https://example.com/report");
    assert_eq!(tuning.levels.len(), 3);
    // Curve override applies.
    assert_eq!(tuning.movement.dash_curve.sample(0.0), 0.5);
}

#[test]
fn test_missing_sections_fall_back_to_defaults() {
    let tuning = parse_tuning("()").unwrap();
    assert_eq!(tuning.movement.move_speed, 10.0);
    assert_eq!(tuning.movement.jump_time_limit, 0.3);
    assert_eq!(tuning.movement.ground_probe_length, 3.5);
    assert_eq!(tuning.camera.zoomed_half_height, 25.0);
    assert_eq!(tuning.camera.zoom_duration, 0.4);
    assert!(tuning.metrics.endpoint.is_empty());
    assert!(tuning.levels.is_empty());
}

#[test]
fn test_malformed_tuning_is_an_error() {
    let result = parse_tuning("(movement: (move_speed: \"fast\"))");
    assert!(result.is_err());

    let result = parse_tuning("not ron at all {{{");
    assert!(result.is_err());
}
