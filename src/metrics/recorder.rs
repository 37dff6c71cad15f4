//! Metrics domain: per-run recording and the report payload.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::time::Stopwatch;
use serde::{Deserialize, Serialize};

use crate::movement::JumpStartedEvent;

/// Where run reports go. Injected from content at startup; an empty endpoint
/// disables dispatch.
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub endpoint: String,
}

/// Accumulates while a level is live; reset on level entry.
#[derive(Resource, Debug, Default)]
pub struct RunMetrics {
    pub time: Stopwatch,
    pub jumps: u32,
}

impl RunMetrics {
    pub fn reset(&mut self) {
        self.time.reset();
        self.jumps = 0;
    }

    pub fn summary(&self, level_id: &str) -> RunSummary {
        RunSummary {
            level: level_id.to_string(),
            seconds: self.time.elapsed_secs(),
            jumps: self.jumps,
        }
    }
}

/// The payload serialized into the report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub level: String,
    pub seconds: f32,
    pub jumps: u32,
}

pub(crate) fn reset_run_metrics(mut metrics: ResMut<RunMetrics>) {
    metrics.reset();
}

pub(crate) fn tick_run_metrics(time: Res<Time>, mut metrics: ResMut<RunMetrics>) {
    metrics.time.tick(time.delta());
}

pub(crate) fn count_jumps(
    mut jump_events: MessageReader<JumpStartedEvent>,
    mut metrics: ResMut<RunMetrics>,
) {
    for _ in jump_events.read() {
        metrics.jumps += 1;
    }
}
