//! Camera domain: tuning and rig resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Half-height of the close-up view, in world units.
    pub default_half_height: f32,
    /// Half-height of the play view.
    pub zoomed_half_height: f32,
    /// Seconds for a full zoom transition.
    pub zoom_duration: f32,
    /// Follow interpolation factor per fixed tick.
    pub follow_smoothing: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            default_half_height: 7.0,
            zoomed_half_height: 25.0,
            zoom_duration: 0.4,
            follow_smoothing: 0.25,
        }
    }
}

/// Captured at startup: where the camera rests before the first zoom.
#[derive(Resource, Debug)]
pub struct CameraRig {
    pub default_position: Vec3,
}
