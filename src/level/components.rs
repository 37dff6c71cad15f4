//! Level domain: markers for level-scoped entities and interactables.

use bevy::prelude::*;

/// Everything spawned for the current level carries this for cleanup.
#[derive(Component, Debug)]
pub struct LevelEntity;

/// The collectible that unlocks the goal gate.
#[derive(Component, Debug)]
pub struct KeyPickup;

/// End-of-level gate; only fires while the key is held.
#[derive(Component, Debug)]
pub struct GoalGate;

/// Pushes the player back while contact persists.
#[derive(Component, Debug)]
pub struct Obstacle;

/// Inserted on the player once the key is collected.
#[derive(Component, Debug)]
pub struct KeyHeld;

/// Inserted on the player while overlapping an obstacle.
#[derive(Component, Debug)]
pub struct TouchingObstacle;

/// Latch: set when the goal fires so the contact cannot re-trigger the
/// transition, however many ticks it persists.
#[derive(Resource, Debug, Default)]
pub struct GoalLatch {
    pub fired: bool,
}
