//! Level domain: plugin wiring and public exports.

mod components;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GoalGate, GoalLatch, KeyHeld, KeyPickup, LevelEntity, Obstacle};

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::spawn::{cleanup_level, reset_goal_latch, spawn_level};
use crate::level::systems::{
    advance_level, apply_obstacle_pushback, collect_key, handle_level_completed, reach_goal,
    track_obstacle_contact,
};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GoalLatch>()
            .add_systems(
                OnEnter(GameState::Playing),
                (reset_goal_latch, spawn_level).chain(),
            )
            .add_systems(OnExit(GameState::Playing), cleanup_level)
            .add_systems(OnEnter(GameState::LevelTransition), advance_level)
            .add_systems(
                Update,
                (
                    collect_key,
                    reach_goal,
                    handle_level_completed,
                    track_obstacle_contact,
                    apply_obstacle_pushback,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
