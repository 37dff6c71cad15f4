//! Level domain: pickup, goal, and obstacle collision handling.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{GameState, LevelCompletedEvent, LevelProgress};
use crate::level::components::{
    GoalGate, GoalLatch, KeyHeld, KeyPickup, Obstacle, TouchingObstacle,
};
use crate::movement::Player;

/// Shove distance applied each tick while an obstacle contact persists.
const OBSTACLE_PUSHBACK_STEP: f32 = 1.0;

pub(crate) fn collect_key(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    key_query: Query<Entity, With<KeyPickup>>,
    player_query: Query<Entity, With<Player>>,
) {
    let Ok(player_entity) = player_query.single() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let (key_entity, other) = if key_query.get(event.collider1).is_ok() {
            (event.collider1, event.collider2)
        } else if key_query.get(event.collider2).is_ok() {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if other != player_entity {
            continue;
        }

        info!("Key collected");
        commands.entity(player_entity).insert(KeyHeld);
        commands.entity(key_entity).despawn();
    }
}

/// Goal contact while holding the key completes the level, exactly once per
/// contact however long it persists.
pub(crate) fn reach_goal(
    mut collision_start_events: MessageReader<CollisionStart>,
    goal_query: Query<Entity, With<GoalGate>>,
    player_query: Query<Entity, (With<Player>, With<KeyHeld>)>,
    progress: Res<LevelProgress>,
    mut latch: ResMut<GoalLatch>,
    mut completed_events: MessageWriter<LevelCompletedEvent>,
) {
    let Ok(player_entity) = player_query.single() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let is_goal =
            goal_query.get(event.collider1).is_ok() || goal_query.get(event.collider2).is_ok();
        if !is_goal {
            continue;
        }
        if event.collider1 != player_entity && event.collider2 != player_entity {
            continue;
        }
        if latch.fired {
            continue;
        }
        latch.fired = true;

        info!("Goal reached on '{}'", progress.current_id());
        completed_events.write(LevelCompletedEvent {
            level_id: progress.current_id().to_string(),
        });
    }
}

pub(crate) fn handle_level_completed(
    mut completed_events: MessageReader<LevelCompletedEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in completed_events.read() {
        info!("Level '{}' complete, transitioning", event.level_id);
        next_state.set(GameState::LevelTransition);
    }
}

/// Step the sequence forward and re-enter `Playing`; the state hop drives
/// cleanup and respawn.
pub(crate) fn advance_level(
    mut progress: ResMut<LevelProgress>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    progress.advance();
    next_state.set(GameState::Playing);
}

/// Track obstacle overlap through collision start/end pairs.
pub(crate) fn track_obstacle_contact(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    obstacle_query: Query<Entity, With<Obstacle>>,
    player_query: Query<Entity, With<Player>>,
) {
    let Ok(player_entity) = player_query.single() else {
        for _ in collision_start_events.read() {}
        for _ in collision_end_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let is_obstacle = obstacle_query.get(event.collider1).is_ok()
            || obstacle_query.get(event.collider2).is_ok();
        if is_obstacle && (event.collider1 == player_entity || event.collider2 == player_entity) {
            debug!("Obstacle contact started");
            commands.entity(player_entity).insert(TouchingObstacle);
        }
    }

    for event in collision_end_events.read() {
        let is_obstacle = obstacle_query.get(event.collider1).is_ok()
            || obstacle_query.get(event.collider2).is_ok();
        if is_obstacle && (event.collider1 == player_entity || event.collider2 == player_entity) {
            commands.entity(player_entity).remove::<TouchingObstacle>();
        }
    }
}

pub(crate) fn apply_obstacle_pushback(
    mut query: Query<&mut Transform, (With<Player>, With<TouchingObstacle>)>,
) {
    for mut transform in &mut query {
        transform.translation.x -= OBSTACLE_PUSHBACK_STEP;
    }
}
