//! Camera domain: the zoom state machine.
//!
//! Two stable modes: the frozen close-up (`Normal`) and the play view
//! (`Zoomed`). A toggle flips the target mode and restarts the transition
//! clock, preempting anything in flight. Progress is clamped so a finished
//! transition settles instead of overshooting.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomPhase {
    #[default]
    Normal,
    ZoomingIn,
    Zoomed,
    ZoomingOut,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ZoomFsm {
    phase: ZoomPhase,
    elapsed: f32,
    triggered: bool,
}

impl ZoomFsm {
    pub fn phase(&self) -> ZoomPhase {
        self.phase
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// False until the first toggle; the camera is untouched before then.
    pub fn triggered(&self) -> bool {
        self.triggered
    }

    /// Flip the target mode and restart the transition clock. Last trigger
    /// wins: an in-flight transition is preempted and elapsed returns to 0.
    pub fn toggle(&mut self) {
        self.phase = match self.phase {
            ZoomPhase::Normal | ZoomPhase::ZoomingOut => ZoomPhase::ZoomingIn,
            ZoomPhase::Zoomed | ZoomPhase::ZoomingIn => ZoomPhase::ZoomingOut,
        };
        self.elapsed = 0.0;
        self.triggered = true;
    }

    /// Advance the transition clock and return interpolation progress in
    /// [0, 1]. Settles into the stable phase once the duration elapses;
    /// stable phases report full progress.
    pub fn advance(&mut self, dt: f32, duration: f32) -> f32 {
        match self.phase {
            ZoomPhase::ZoomingIn | ZoomPhase::ZoomingOut => {
                self.elapsed += dt;
                let t = if duration > 0.0 {
                    (self.elapsed / duration).min(1.0)
                } else {
                    1.0
                };
                if t >= 1.0 {
                    self.phase = match self.phase {
                        ZoomPhase::ZoomingIn => ZoomPhase::Zoomed,
                        _ => ZoomPhase::Normal,
                    };
                }
                t
            }
            ZoomPhase::Normal | ZoomPhase::Zoomed => 1.0,
        }
    }

    /// Movement is live while zoomed in or transitioning toward it.
    pub fn movement_enabled(&self) -> bool {
        matches!(self.phase, ZoomPhase::ZoomingIn | ZoomPhase::Zoomed)
    }
}

/// Shared zoom state for the single main camera.
#[derive(Resource, Debug, Default)]
pub struct CameraZoom {
    pub fsm: ZoomFsm,
}
