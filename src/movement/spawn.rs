//! Movement domain: player spawn helper.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{AnimationFlags, GameLayer, MotionState, Player};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(1.0, 2.0);

/// Spawn the player body at `position`. Level setup tags the returned entity
/// for its own cleanup.
pub(crate) fn spawn_player(commands: &mut Commands, position: Vec2) -> Entity {
    commands
        .spawn((
            // Identity & Motion
            (Player, MotionState::default(), AnimationFlags::default()),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // the jump model writes vertical speed directly
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Pickup, GameLayer::Obstacle],
                ),
            ),
        ))
        .id()
}
