//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Playing,
    /// One-frame hop between levels: the finished level is torn down on
    /// exit from `Playing` and the next one spawns on re-entry.
    LevelTransition,
}
