//! Camera domain: zoom transitions, smoothed follow, and the movement gate.

use avian2d::prelude::*;
use bevy::camera::ScalingMode;
use bevy::prelude::*;

use crate::camera::resources::{CameraRig, CameraTuning};
use crate::camera::zoom::{CameraZoom, ZoomFsm, ZoomPhase};
use crate::movement::{AnimationFlags, MovementInput, Player};

#[derive(Component, Debug)]
pub(crate) struct MainCamera;

pub(crate) fn setup_camera(mut commands: Commands, tuning: Res<CameraTuning>) {
    let position = Vec3::ZERO;
    commands.spawn((
        MainCamera,
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: tuning.default_half_height * 2.0,
            },
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_translation(position),
    ));
    commands.insert_resource(CameraRig {
        default_position: position,
    });
}

/// Each level starts back in the frozen close-up.
pub(crate) fn reset_zoom(
    tuning: Res<CameraTuning>,
    rig: Res<CameraRig>,
    mut zoom: ResMut<CameraZoom>,
    mut camera_query: Query<(&mut Transform, &mut Projection), With<MainCamera>>,
) {
    zoom.fsm = ZoomFsm::default();
    let Ok((mut transform, mut projection)) = camera_query.single_mut() else {
        return;
    };
    transform.translation = rig.default_position;
    if let Projection::Orthographic(ortho) = projection.as_mut() {
        ortho.scaling_mode = ScalingMode::FixedVertical {
            viewport_height: tuning.default_half_height * 2.0,
        };
    }
}

pub(crate) fn toggle_zoom(input: Res<MovementInput>, mut zoom: ResMut<CameraZoom>) {
    if input.zoom_just_pressed {
        zoom.fsm.toggle();
        info!("Camera zoom toggled: {:?}", zoom.fsm.phase());
    }
}

/// Drive the transition: interpolate the viewport height between the two
/// modes and, while zooming out, carry the camera from the character back to
/// the rig's resting position.
pub(crate) fn tick_zoom(
    time: Res<Time>,
    tuning: Res<CameraTuning>,
    rig: Res<CameraRig>,
    mut zoom: ResMut<CameraZoom>,
    player_query: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut camera_query: Query<(&mut Transform, &mut Projection), With<MainCamera>>,
) {
    if !zoom.fsm.triggered() {
        return;
    }
    let Ok((mut cam_transform, mut projection)) = camera_query.single_mut() else {
        return;
    };

    let (from, to) = match zoom.fsm.phase() {
        ZoomPhase::ZoomingIn | ZoomPhase::Zoomed => {
            (tuning.default_half_height, tuning.zoomed_half_height)
        }
        ZoomPhase::ZoomingOut | ZoomPhase::Normal => {
            (tuning.zoomed_half_height, tuning.default_half_height)
        }
    };
    let zooming_out = zoom.fsm.phase() == ZoomPhase::ZoomingOut;

    let t = zoom.fsm.advance(time.delta_secs(), tuning.zoom_duration);
    let half_height = from + (to - from) * t;

    if let Projection::Orthographic(ortho) = projection.as_mut() {
        ortho.scaling_mode = ScalingMode::FixedVertical {
            viewport_height: half_height * 2.0,
        };
    }

    if zooming_out {
        if let Ok(player) = player_query.single() {
            let src = Vec3::new(
                player.translation.x,
                player.translation.y,
                rig.default_position.z,
            );
            cam_transform.translation = src.lerp(rig.default_position, t);
        }
    }
}

/// Publish the gate's verdict: freeze the body and disable animation while
/// movement is off.
pub(crate) fn sync_movement_gate(
    zoom: Res<CameraZoom>,
    mut query: Query<(&mut LinearVelocity, &mut AnimationFlags), With<Player>>,
) {
    let enabled = zoom.fsm.movement_enabled();
    for (mut velocity, mut flags) in &mut query {
        flags.enabled = enabled;
        if !enabled {
            velocity.0 = Vec2::ZERO;
        }
    }
}

/// Smoothed follow while zoomed in, on the fixed timestep.
pub(crate) fn follow_player(
    zoom: Res<CameraZoom>,
    tuning: Res<CameraTuning>,
    player_query: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if !zoom.fsm.movement_enabled() {
        return;
    }
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok(mut cam_transform) = camera_query.single_mut() else {
        return;
    };
    let target = Vec3::new(
        player.translation.x,
        player.translation.y,
        cam_transform.translation.z,
    );
    cam_transform.translation = cam_transform.translation.lerp(target, tuning.follow_smoothing);
}
