//! Movement domain: player components and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::state::{DashState, JumpState};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, walls)
    Ground,
    /// Player character
    Player,
    /// Key and goal sensors
    Pickup,
    /// Push-back hazards
    Obstacle,
}

#[derive(Component, Debug)]
pub struct Player;

/// All mutable motion state for the player, advanced once per tick.
#[derive(Component, Debug, Default)]
pub struct MotionState {
    pub dash: DashState,
    pub jump: JumpState,
    pub on_ground: bool,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Flags handed to the sprite/animation layer each tick.
#[derive(Component, Debug, Default)]
pub struct AnimationFlags {
    pub horizontal_moving: bool,
    pub jumping: bool,
    pub enabled: bool,
}

/// Marker for ground colliders (floors, platforms, walls)
#[derive(Component, Debug)]
pub struct Ground;
