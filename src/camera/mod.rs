//! Camera domain: plugin wiring and public exports.

mod resources;
mod systems;
pub(crate) mod zoom;


pub use resources::{CameraRig, CameraTuning};
pub use zoom::{CameraZoom, ZoomFsm, ZoomPhase};

use bevy::prelude::*;

use crate::camera::systems::{
    follow_player, reset_zoom, setup_camera, sync_movement_gate, tick_zoom, toggle_zoom,
};
use crate::core::{GameState, TickSet};

/// Run condition: the zoom FSM currently allows movement.
pub fn zoom_movement_enabled(zoom: Res<CameraZoom>) -> bool {
    zoom.fsm.movement_enabled()
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .init_resource::<CameraZoom>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Playing), reset_zoom)
            .add_systems(
                Update,
                (toggle_zoom, tick_zoom, sync_movement_gate)
                    .chain()
                    .in_set(TickSet::Camera)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedUpdate,
                follow_player.run_if(in_state(GameState::Playing)),
            );
    }
}
