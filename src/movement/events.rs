//! Movement domain: events emitted by locomotion.

use bevy::ecs::message::Message;

/// Fired on the tick a jump is initiated.
#[derive(Debug)]
pub struct JumpStartedEvent;

impl Message for JumpStartedEvent {}
