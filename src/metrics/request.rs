//! Metrics domain: the fire-and-forget run report over HTTP.
//!
//! The request runs detached on the IO task pool. Its entity is not part of
//! any level's cleanup set, so an in-flight report survives the level
//! transition; dropping the task (app shutdown) cancels it. Outcomes are
//! logged and never fed back into gameplay.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::tasks::futures_lite::future;
use bevy::tasks::{IoTaskPool, Task, block_on};

use crate::core::LevelCompletedEvent;
use crate::metrics::recorder::{MetricsConfig, RunMetrics};

/// Outcome taxonomy for a dispatched report.
#[derive(Debug)]
pub enum ReportOutcome {
    /// The endpoint could not be reached at all.
    Connection(String),
    /// The endpoint answered with an error status.
    Protocol(String),
    /// The response arrived but its body could not be read.
    Processing(String),
    /// 2xx with a readable body.
    Success(String),
}

#[derive(Component)]
pub(crate) struct ReportInFlight {
    task: Task<ReportOutcome>,
    level_id: String,
}

pub(crate) fn dispatch_run_report(
    mut commands: Commands,
    mut completed_events: MessageReader<LevelCompletedEvent>,
    config: Res<MetricsConfig>,
    metrics: Res<RunMetrics>,
) {
    for event in completed_events.read() {
        if config.endpoint.is_empty() {
            debug!("No metrics endpoint configured, skipping run report");
            continue;
        }

        let summary = metrics.summary(&event.level_id);
        let payload = match serde_json::to_string(&summary) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to encode run summary: {}", e);
                continue;
            }
        };

        info!(
            "Dispatching run report for '{}' ({:.1}s, {} jumps)",
            event.level_id, summary.seconds, summary.jumps
        );

        let endpoint = config.endpoint.clone();
        let task = IoTaskPool::get().spawn(async move { send_report(&endpoint, &payload) });
        commands.spawn(ReportInFlight {
            task,
            level_id: event.level_id.clone(),
        });
    }
}

fn send_report(endpoint: &str, payload: &str) -> ReportOutcome {
    let client = match reqwest::blocking::Client::builder().build() {
        Ok(client) => client,
        Err(e) => return ReportOutcome::Connection(e.to_string()),
    };

    let response = match client.get(endpoint).query(&[("run", payload)]).send() {
        Ok(response) => response,
        Err(e) if e.is_connect() || e.is_timeout() => {
            return ReportOutcome::Connection(e.to_string());
        }
        Err(e) => return ReportOutcome::Protocol(e.to_string()),
    };

    let status = response.status();
    if !status.is_success() {
        return ReportOutcome::Protocol(format!("HTTP {}", status));
    }

    match response.text() {
        Ok(body) => ReportOutcome::Success(body),
        Err(e) => ReportOutcome::Processing(e.to_string()),
    }
}

/// Drain finished report tasks and log their outcome.
pub(crate) fn poll_report_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut ReportInFlight)>,
) {
    for (entity, mut in_flight) in &mut tasks {
        let Some(outcome) = block_on(future::poll_once(&mut in_flight.task)) else {
            continue;
        };

        match outcome {
            ReportOutcome::Connection(err) => {
                error!("Run report '{}': error: {}", in_flight.level_id, err);
            }
            ReportOutcome::Protocol(err) => {
                error!("Run report '{}': HTTP error: {}", in_flight.level_id, err);
            }
            ReportOutcome::Processing(err) => {
                error!("Run report '{}': error: {}", in_flight.level_id, err);
            }
            ReportOutcome::Success(body) => {
                info!("Run report '{}': received: {}", in_flight.level_id, body);
            }
        }
        commands.entity(entity).despawn();
    }
}
