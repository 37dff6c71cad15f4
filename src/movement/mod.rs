//! Movement domain: plugin wiring and public exports.

mod components;
mod curve;
mod events;
mod resources;
pub(crate) mod spawn;
pub(crate) mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{AnimationFlags, Facing, GameLayer, Ground, MotionState, Player};
pub use curve::{CurveKey, MotionCurve};
pub use events::JumpStartedEvent;
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::camera::zoom_movement_enabled;
use crate::core::{GameState, TickSet};
use crate::movement::systems::{
    apply_locomotion, detect_ground, read_input, update_animation_flags, update_facing,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<JumpStartedEvent>()
            .add_systems(
                Update,
                read_input
                    .in_set(TickSet::Input)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    detect_ground,
                    apply_locomotion,
                    update_facing,
                    update_animation_flags,
                )
                    .chain()
                    .in_set(TickSet::Motion)
                    .run_if(in_state(GameState::Playing))
                    .run_if(zoom_movement_enabled),
            );
    }
}
