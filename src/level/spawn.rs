//! Level domain: hand-authored layouts and spawn/cleanup systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::LevelProgress;
use crate::level::components::{GoalGate, GoalLatch, KeyPickup, LevelEntity, Obstacle};
use crate::movement::{GameLayer, Ground};

pub(crate) struct Slab {
    pub pos: Vec2,
    pub size: Vec2,
}

pub(crate) struct LevelLayout {
    pub spawn: Vec2,
    pub key: Vec2,
    pub goal: Vec2,
    pub obstacles: Vec<Vec2>,
    pub slabs: Vec<Slab>,
}

fn slab(x: f32, y: f32, w: f32, h: f32) -> Slab {
    Slab {
        pos: Vec2::new(x, y),
        size: Vec2::new(w, h),
    }
}

/// Layout lookup; unknown ids fall back to the first level.
pub(crate) fn layout_for(level_id: &str) -> LevelLayout {
    match level_id {
        "level_2" => LevelLayout {
            spawn: Vec2::new(30.0, -8.0),
            key: Vec2::new(-32.0, -6.0),
            goal: Vec2::new(15.0, 3.5),
            obstacles: vec![Vec2::new(10.0, -8.2), Vec2::new(-18.0, -8.2)],
            slabs: vec![
                slab(0.0, -10.0, 80.0, 2.0),
                slab(-40.0, 0.0, 2.0, 40.0),
                slab(40.0, 0.0, 2.0, 40.0),
                slab(-32.0, -7.5, 8.0, 1.0),
                slab(-5.0, -5.5, 10.0, 1.0),
                slab(5.0, -2.0, 8.0, 1.0),
                slab(15.0, 1.0, 10.0, 1.0),
            ],
        },
        _ => LevelLayout {
            spawn: Vec2::new(-30.0, -8.0),
            key: Vec2::new(15.0, 2.5),
            goal: Vec2::new(35.0, -7.0),
            obstacles: vec![Vec2::new(8.0, -8.2)],
            slabs: vec![
                slab(0.0, -10.0, 80.0, 2.0),
                slab(-40.0, 0.0, 2.0, 40.0),
                slab(40.0, 0.0, 2.0, 40.0),
                slab(-15.0, -6.0, 10.0, 1.0),
                slab(0.0, -2.5, 10.0, 1.0),
                slab(15.0, 1.0, 10.0, 1.0),
            ],
        },
    }
}

pub(crate) fn spawn_level(mut commands: Commands, progress: Res<LevelProgress>) {
    let level_id = progress.current_id();
    let layout = layout_for(level_id);
    info!("Spawning level '{}'", level_id);

    let slab_color = Color::srgb(0.4, 0.5, 0.4);
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    for piece in &layout.slabs {
        commands.spawn((
            LevelEntity,
            Ground,
            Sprite {
                color: slab_color,
                custom_size: Some(piece.size),
                ..default()
            },
            Transform::from_translation(piece.pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(piece.size.x, piece.size.y),
            ground_layers,
        ));
    }

    // Key: sensor, despawns on pickup.
    commands.spawn((
        LevelEntity,
        KeyPickup,
        Sprite {
            color: Color::srgb(0.95, 0.85, 0.3),
            custom_size: Some(Vec2::splat(0.8)),
            ..default()
        },
        Transform::from_translation(layout.key.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(0.8, 0.8),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Pickup, [GameLayer::Player]),
    ));

    // Goal gate: sensor, fires the level-complete flow.
    commands.spawn((
        LevelEntity,
        GoalGate,
        Sprite {
            color: Color::srgb(0.3, 0.8, 0.4),
            custom_size: Some(Vec2::new(2.0, 4.0)),
            ..default()
        },
        Transform::from_translation(layout.goal.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(2.0, 4.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Pickup, [GameLayer::Player]),
    ));

    // Obstacles: solid hazards that shove the player back on contact.
    for &pos in &layout.obstacles {
        commands.spawn((
            LevelEntity,
            Obstacle,
            Sprite {
                color: Color::srgb(0.8, 0.3, 0.3),
                custom_size: Some(Vec2::splat(1.5)),
                ..default()
            },
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(1.5, 1.5),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Obstacle, [GameLayer::Player]),
        ));
    }

    let player = crate::movement::spawn::spawn_player(&mut commands, layout.spawn);
    commands.entity(player).insert(LevelEntity);
}

pub(crate) fn cleanup_level(mut commands: Commands, query: Query<Entity, With<LevelEntity>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn reset_goal_latch(mut latch: ResMut<GoalLatch>) {
    latch.fired = false;
}
