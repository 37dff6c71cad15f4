//! Data definitions for the RON tuning file.
//!
//! `assets/data/tuning.ron` carries one `TuningFile`; any missing section
//! falls back to the compiled defaults.

use serde::{Deserialize, Serialize};

use crate::camera::CameraTuning;
use crate::metrics::MetricsConfig;
use crate::movement::MovementTuning;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningFile {
    pub movement: MovementTuning,
    pub camera: CameraTuning,
    pub metrics: MetricsConfig,
    pub levels: Vec<String>,
}
