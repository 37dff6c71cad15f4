//! Core domain: events for level flow.

use bevy::ecs::message::Message;

/// Fired exactly once when the goal gate is reached with the key in hand.
#[derive(Debug)]
pub struct LevelCompletedEvent {
    pub level_id: String,
}

impl Message for LevelCompletedEvent {}
