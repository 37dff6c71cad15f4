//! Movement domain: per-tick dash and jump models.
//!
//! Plain state structs advanced once per variable tick. The systems in
//! `systems/locomotion.rs` feed them input snapshots and hand the resulting
//! speeds to the physics body; keeping them free of ECS types makes the
//! timing rules directly testable.

use crate::movement::resources::MovementTuning;

/// Accumulated horizontal press state for the dash curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashState {
    press_time: f32,
    last_dir: i8,
}

impl DashState {
    /// Advance one tick and return the horizontal speed for `axis`.
    ///
    /// Press time accumulates while the axis keeps its sign, resets to zero
    /// when the axis is released, and resets on a sign reversal — the
    /// reversal tick counts as the first tick of the new press.
    pub fn advance(&mut self, dt: f32, axis: f32, tuning: &MovementTuning) -> f32 {
        let dir: i8 = if axis > 0.0 {
            1
        } else if axis < 0.0 {
            -1
        } else {
            0
        };

        if dir == 0 {
            self.press_time = 0.0;
        } else if self.last_dir != 0 && dir != self.last_dir {
            self.press_time = dt;
        } else {
            self.press_time += dt;
        }
        self.last_dir = dir;

        axis * tuning.move_speed * tuning.dash_curve.sample(self.press_time)
    }

    pub fn press_time(&self) -> f32 {
        self.press_time
    }
}

/// Jump button snapshot for one tick, edges included.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpInput {
    pub held: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

/// Result of advancing the jump model one tick.
#[derive(Debug, Clone, Copy)]
pub struct JumpTick {
    pub vertical_speed: f32,
    pub initiated: bool,
}

/// Jump-arc state: time since the jump started, budget used since the last
/// landing, and the landing latch.
#[derive(Debug, Clone, Copy)]
pub struct JumpState {
    air_time: f32,
    jumps_used: u8,
    /// Landing latch. Armed at rest; a grounded tick consumes it while
    /// resetting the budget, and only a release edge re-arms it. Holding the
    /// button through a landing therefore cannot start another jump.
    reset_armed: bool,
}

impl Default for JumpState {
    fn default() -> Self {
        Self {
            air_time: 0.0,
            jumps_used: 0,
            reset_armed: true,
        }
    }
}

impl JumpState {
    /// Advance one tick. A press edge starts a jump while budget and the
    /// jump time limit allow; a held button sustains it until the limit
    /// (variable-height jump); otherwise the body falls at a constant rate.
    pub fn advance(
        &mut self,
        dt: f32,
        input: JumpInput,
        grounded: bool,
        tuning: &MovementTuning,
    ) -> JumpTick {
        let mut initiated = false;
        let vertical_speed = if input.just_pressed
            && self.jumps_used < tuning.max_jumps
            && self.air_time < tuning.jump_time_limit
        {
            self.air_time += dt;
            self.jumps_used += 1;
            initiated = true;
            tuning.jump_force * tuning.jump_curve.sample(self.air_time)
        } else if !input.just_pressed && input.held && self.air_time < tuning.jump_time_limit {
            self.air_time += dt;
            tuning.jump_force * tuning.jump_curve.sample(self.air_time)
        } else {
            -tuning.fall_speed
        };

        if !self.reset_armed {
            self.reset_armed = input.just_released;
        }
        if grounded && self.reset_armed {
            self.air_time = 0.0;
            self.jumps_used = 0;
            self.reset_armed = false;
        }

        JumpTick {
            vertical_speed,
            initiated,
        }
    }

    pub fn air_time(&self) -> f32 {
        self.air_time
    }

    pub fn jumps_used(&self) -> u8 {
        self.jumps_used
    }
}
