//! Core domain: game states, level sequencing, and tick ordering.

mod events;
mod resources;
mod state;

pub use events::LevelCompletedEvent;
pub use resources::LevelProgress;
pub use state::GameState;

use bevy::prelude::*;

/// Per-frame ordering: sample input, then resolve the camera zoom gate,
/// then run motion against the gate's verdict.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    Input,
    Camera,
    Motion,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<LevelProgress>()
            .add_message::<LevelCompletedEvent>()
            .configure_sets(
                Update,
                (TickSet::Input, TickSet::Camera, TickSet::Motion).chain(),
            )
            .add_systems(Update, finish_boot.run_if(in_state(GameState::Boot)));
    }
}

/// Startup work (content load, camera rig capture) runs before the first
/// `Update`, so the first frame can go straight to `Playing`.
fn finish_boot(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Playing);
}
