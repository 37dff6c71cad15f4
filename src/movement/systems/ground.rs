//! Movement domain: ground detection via a downward ray probe.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MotionState, MovementTuning, Player};

/// Polled once per tick; the boolean feeds both the jump landing latch and
/// the animation gate.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut MotionState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        let origin = transform.translation.truncate();
        let hit = spatial_query.cast_ray(
            origin,
            Dir2::NEG_Y,
            tuning.ground_probe_length,
            true,
            &ground_filter,
        );
        state.on_ground = hit.is_some();

        if state.on_ground != was_on_ground {
            debug!("Ground contact: {}", state.on_ground);
        }
    }
}
