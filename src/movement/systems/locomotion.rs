//! Movement domain: curve-driven locomotion applied to the physics body.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::events::JumpStartedEvent;
use crate::movement::state::JumpInput;
use crate::movement::{AnimationFlags, Facing, MotionState, MovementInput, MovementTuning, Player};

/// Advance the dash and jump models and hand both speeds to the body.
pub(crate) fn apply_locomotion(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut jump_events: MessageWriter<JumpStartedEvent>,
    mut query: Query<(&mut MotionState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut velocity) in &mut query {
        let grounded = state.on_ground;

        let horizontal = state.dash.advance(dt, input.axis, &tuning);
        let jump = state.jump.advance(
            dt,
            JumpInput {
                held: input.jump_held,
                just_pressed: input.jump_just_pressed,
                just_released: input.jump_just_released,
            },
            grounded,
            &tuning,
        );

        if jump.initiated {
            debug!("Jump started");
            jump_events.write(JumpStartedEvent);
        }

        velocity.x = horizontal;
        velocity.y = jump.vertical_speed;
    }
}

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<(&mut MotionState, &mut Sprite), With<Player>>,
) {
    for (mut state, mut sprite) in &mut query {
        if input.axis > 0.0 {
            state.facing = Facing::Right;
        } else if input.axis < 0.0 {
            state.facing = Facing::Left;
        }
        sprite.flip_x = state.facing == Facing::Left;
    }
}

pub(crate) fn update_animation_flags(
    input: Res<MovementInput>,
    mut query: Query<(&MotionState, &mut AnimationFlags), With<Player>>,
) {
    for (state, mut flags) in &mut query {
        flags.horizontal_moving = input.axis != 0.0;
        flags.jumping = !state.on_ground;
    }
}
