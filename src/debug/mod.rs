//! Debug overlay for fast iteration: F1 toggles a small info readout with
//! the player's position, ground contact, zoom phase, and run stats.

use bevy::prelude::*;

use crate::camera::CameraZoom;
use crate::core::LevelProgress;
use crate::metrics::RunMetrics;
use crate::movement::{MotionState, Player};

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
}

/// Marker for the info overlay text node.
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, toggle_overlay)
            .add_systems(
                Update,
                update_overlay.run_if(|state: Res<DebugState>| state.show_info),
            );
    }
}

fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }
    state.show_info = !state.show_info;

    if state.show_info {
        spawn_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

fn spawn_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

fn update_overlay(
    zoom: Res<CameraZoom>,
    progress: Res<LevelProgress>,
    metrics: Res<RunMetrics>,
    player_query: Query<(&Transform, &MotionState), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };
    let Some((transform, state)) = player_query.iter().next() else {
        return;
    };

    **text = format!(
        "Level: {}\nPos: ({:.1}, {:.1})\nGrounded: {}\nDash: {:.2}s\nJump: {:.2}s ({} used)\nZoom: {:?} ({:.2}s)\nRun: {:.1}s, {} jumps",
        progress.current_id(),
        transform.translation.x,
        transform.translation.y,
        state.on_ground,
        state.dash.press_time(),
        state.jump.air_time(),
        state.jump.jumps_used(),
        zoom.fsm.phase(),
        zoom.fsm.elapsed(),
        metrics.time.elapsed_secs(),
        metrics.jumps,
    );
}
