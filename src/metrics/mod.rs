//! Metrics domain: run recording and the end-of-level report.

mod recorder;
mod request;

#[cfg(test)]
mod tests;

pub use recorder::{MetricsConfig, RunMetrics, RunSummary};
pub use request::ReportOutcome;

use bevy::prelude::*;

use crate::core::GameState;
use crate::metrics::recorder::{count_jumps, reset_run_metrics, tick_run_metrics};
use crate::metrics::request::{dispatch_run_report, poll_report_tasks};

pub struct MetricsPlugin;

impl Plugin for MetricsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MetricsConfig>()
            .init_resource::<RunMetrics>()
            .add_systems(OnEnter(GameState::Playing), reset_run_metrics)
            .add_systems(
                Update,
                (tick_run_metrics, count_jumps).run_if(in_state(GameState::Playing)),
            )
            // Dispatch and polling stay live across the level transition.
            .add_systems(Update, (dispatch_run_report, poll_report_tasks));
    }
}
