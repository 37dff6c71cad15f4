//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::curve::{CurveKey, MotionCurve};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_force: f32,
    /// Constant fall rate applied whenever the jump arc is not driving the
    /// body upward. Not integrated acceleration.
    pub fall_speed: f32,
    pub jump_time_limit: f32,
    pub max_jumps: u8,
    pub ground_probe_length: f32,
    pub dash_curve: MotionCurve,
    pub jump_curve: MotionCurve,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            jump_force: 250.0,
            fall_speed: 12.0,
            jump_time_limit: 0.3,
            max_jumps: 1,
            ground_probe_length: 3.5,
            dash_curve: MotionCurve::new(vec![
                CurveKey { t: 0.0, v: 0.25 },
                CurveKey { t: 0.15, v: 0.7 },
                CurveKey { t: 0.4, v: 1.0 },
            ]),
            jump_curve: MotionCurve::new(vec![
                CurveKey { t: 0.0, v: 0.08 },
                CurveKey { t: 0.15, v: 0.05 },
                CurveKey { t: 0.3, v: 0.02 },
            ]),
        }
    }
}

/// Per-tick snapshot of the logical input events the controller consumes.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: f32,
    pub jump_held: bool,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub zoom_just_pressed: bool,
}
