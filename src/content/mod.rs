//! Content domain: RON tuning load and resource injection.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::TuningFile;
pub use loader::{ContentLoadError, load_tuning_file};

use bevy::prelude::*;
use std::path::Path;

use crate::core::LevelProgress;

const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_tuning);
    }
}

/// Overwrite the compiled defaults with whatever the tuning file provides.
fn load_tuning(mut commands: Commands) {
    match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!("Loaded tuning from {}", TUNING_PATH);
            if !tuning.levels.is_empty() {
                commands.insert_resource(LevelProgress::new(tuning.levels));
            }
            commands.insert_resource(tuning.movement);
            commands.insert_resource(tuning.camera);
            commands.insert_resource(tuning.metrics);
        }
        Err(e) => {
            error!("{}; using built-in tuning defaults", e);
        }
    }
}
