//! Movement domain: unit tests for the easing curve and the dash/jump models.

use super::curve::{CurveKey, MotionCurve};
use super::resources::MovementTuning;
use super::state::{DashState, JumpInput, JumpState};

const DT: f32 = 1.0 / 60.0;

fn tuning() -> MovementTuning {
    MovementTuning::default()
}

fn held() -> JumpInput {
    JumpInput {
        held: true,
        just_pressed: false,
        just_released: false,
    }
}

fn pressed() -> JumpInput {
    JumpInput {
        held: true,
        just_pressed: true,
        just_released: false,
    }
}

fn released() -> JumpInput {
    JumpInput {
        held: false,
        just_pressed: false,
        just_released: true,
    }
}

// -----------------------------------------------------------------------------
// MotionCurve tests
// -----------------------------------------------------------------------------

#[test]
fn test_curve_linear_between_keys() {
    let curve = MotionCurve::new(vec![
        CurveKey { t: 0.0, v: 0.0 },
        CurveKey { t: 1.0, v: 2.0 },
    ]);
    assert!((curve.sample(0.5) - 1.0).abs() < 1e-6);
    assert!((curve.sample(0.25) - 0.5).abs() < 1e-6);
}

#[test]
fn test_curve_clamps_outside_domain() {
    let curve = MotionCurve::new(vec![
        CurveKey { t: 0.1, v: 0.3 },
        CurveKey { t: 0.4, v: 1.0 },
    ]);
    assert_eq!(curve.sample(-5.0), 0.3);
    assert_eq!(curve.sample(0.0), 0.3);
    assert_eq!(curve.sample(0.4), 1.0);
    assert_eq!(curve.sample(100.0), 1.0);
}

#[test]
fn test_curve_sorts_unordered_keys() {
    let curve = MotionCurve::new(vec![
        CurveKey { t: 1.0, v: 2.0 },
        CurveKey { t: 0.0, v: 0.0 },
    ]);
    assert!((curve.sample(0.5) - 1.0).abs() < 1e-6);
}

#[test]
fn test_single_key_curve_is_constant() {
    let curve = MotionCurve::new(vec![CurveKey { t: 0.2, v: 0.7 }]);
    assert_eq!(curve.sample(0.0), 0.7);
    assert_eq!(curve.sample(0.2), 0.7);
    assert_eq!(curve.sample(9.0), 0.7);
}

// -----------------------------------------------------------------------------
// DashState tests
// -----------------------------------------------------------------------------

#[test]
fn test_dash_accumulates_while_held() {
    let tuning = tuning();
    let mut dash = DashState::default();
    for _ in 0..6 {
        dash.advance(DT, 1.0, &tuning);
    }
    assert!((dash.press_time() - 6.0 * DT).abs() < 1e-5);
}

#[test]
fn test_dash_resets_on_release() {
    let tuning = tuning();
    let mut dash = DashState::default();
    for _ in 0..60 {
        dash.advance(DT, 1.0, &tuning);
    }
    assert!(dash.press_time() > 0.9);

    let speed = dash.advance(DT, 0.0, &tuning);
    assert_eq!(dash.press_time(), 0.0);
    assert_eq!(speed, 0.0);
}

#[test]
fn test_dash_resets_on_reversal() {
    let tuning = tuning();
    let mut dash = DashState::default();
    for _ in 0..60 {
        dash.advance(DT, 1.0, &tuning);
    }

    let speed = dash.advance(DT, -1.0, &tuning);
    // The reversal tick starts a fresh press.
    assert!((dash.press_time() - DT).abs() < 1e-6);
    assert!(speed < 0.0);
}

#[test]
fn test_dash_speed_follows_curve() {
    let tuning = tuning();
    let mut dash = DashState::default();
    let mut speed = 0.0;
    for _ in 0..30 {
        speed = dash.advance(DT, 1.0, &tuning);
    }
    let expected = tuning.move_speed * tuning.dash_curve.sample(dash.press_time());
    assert!((speed - expected).abs() < 1e-4);
}

// -----------------------------------------------------------------------------
// JumpState tests
// -----------------------------------------------------------------------------

/// Settle the landing latch the way a freshly spawned, grounded player does.
fn grounded_rest(tuning: &MovementTuning) -> JumpState {
    let mut jump = JumpState::default();
    jump.advance(DT, JumpInput::default(), true, tuning);
    assert_eq!(jump.jumps_used(), 0);
    jump
}

#[test]
fn test_jump_initiates_and_follows_curve() {
    let tuning = tuning();
    let mut jump = grounded_rest(&tuning);

    let tick = jump.advance(DT, pressed(), true, &tuning);
    assert!(tick.initiated);
    assert_eq!(jump.jumps_used(), 1);
    let expected = tuning.jump_force * tuning.jump_curve.sample(jump.air_time());
    assert!((tick.vertical_speed - expected).abs() < 1e-4);
    assert!(tick.vertical_speed > 0.0);
}

#[test]
fn test_held_jump_extends_until_time_limit() {
    let tuning = tuning();
    let mut jump = grounded_rest(&tuning);

    jump.advance(DT, pressed(), true, &tuning);

    // Hold through the rest of the budgeted window: speed stays curve-shaped.
    while jump.air_time() + DT < tuning.jump_time_limit {
        let tick = jump.advance(DT, held(), false, &tuning);
        assert!(!tick.initiated);
        let expected = tuning.jump_force * tuning.jump_curve.sample(jump.air_time());
        assert!((tick.vertical_speed - expected).abs() < 1e-4);
    }

    // Once the limit is exceeded the body falls at the constant rate.
    let tick = jump.advance(DT, held(), false, &tuning);
    let tick_after = jump.advance(DT, held(), false, &tuning);
    assert!(tick.vertical_speed > 0.0 || tick.vertical_speed == -tuning.fall_speed);
    assert_eq!(tick_after.vertical_speed, -tuning.fall_speed);
}

#[test]
fn test_second_press_in_air_is_rejected() {
    let tuning = tuning();
    let mut jump = grounded_rest(&tuning);

    jump.advance(DT, pressed(), true, &tuning);
    jump.advance(DT, released(), false, &tuning);

    let tick = jump.advance(DT, pressed(), false, &tuning);
    assert!(!tick.initiated);
    assert_eq!(jump.jumps_used(), 1);
    assert_eq!(tick.vertical_speed, -tuning.fall_speed);
}

#[test]
fn test_landing_with_button_held_does_not_rearm() {
    let tuning = tuning();
    let mut jump = grounded_rest(&tuning);

    // Jump, then keep the button held all the way through the landing.
    jump.advance(DT, pressed(), true, &tuning);
    for _ in 0..30 {
        jump.advance(DT, held(), false, &tuning);
    }
    jump.advance(DT, held(), true, &tuning);
    assert_eq!(jump.jumps_used(), 1, "budget must stay consumed");

    // A fresh press edge while grounded still cannot start a jump.
    let tick = jump.advance(DT, pressed(), true, &tuning);
    assert!(!tick.initiated);

    // Release re-arms the latch; the next grounded tick restores the budget.
    jump.advance(DT, released(), true, &tuning);
    assert_eq!(jump.jumps_used(), 0);

    let tick = jump.advance(DT, pressed(), true, &tuning);
    assert!(tick.initiated);
}

#[test]
fn test_release_in_air_rearms_only_after_ground_contact() {
    let tuning = tuning();
    let mut jump = grounded_rest(&tuning);

    jump.advance(DT, pressed(), true, &tuning);
    jump.advance(DT, released(), false, &tuning);

    // Still airborne: budget remains consumed despite the release.
    assert_eq!(jump.jumps_used(), 1);

    // Touch down: the armed latch resets the budget.
    jump.advance(DT, JumpInput::default(), true, &tuning);
    assert_eq!(jump.jumps_used(), 0);
}
