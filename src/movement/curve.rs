//! Movement domain: designer easing curves.

use serde::{Deserialize, Serialize};

/// One keyframe of a [`MotionCurve`]: at time `t`, multiplier `v`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CurveKey {
    pub t: f32,
    pub v: f32,
}

/// Designer-authored time-to-multiplier mapping, loaded once at startup and
/// read-only afterwards. Samples interpolate linearly between keys and clamp
/// to the nearest endpoint outside the authored domain.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(from = "RawCurve")]
pub struct MotionCurve {
    keys: Vec<CurveKey>,
}

/// Deserialization shim so loaded keys always pass through [`MotionCurve::new`].
#[derive(Deserialize)]
struct RawCurve {
    keys: Vec<CurveKey>,
}

impl From<RawCurve> for MotionCurve {
    fn from(raw: RawCurve) -> Self {
        MotionCurve::new(raw.keys)
    }
}

impl MotionCurve {
    pub fn new(mut keys: Vec<CurveKey>) -> Self {
        keys.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { keys }
    }

    pub fn sample(&self, t: f32) -> f32 {
        let Some(first) = self.keys.first() else {
            // An empty curve degenerates to a unit multiplier.
            return 1.0;
        };
        if t <= first.t {
            return first.v;
        }
        let last = self.keys[self.keys.len() - 1];
        if t >= last.t {
            return last.v;
        }
        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                if span <= f32::EPSILON {
                    return b.v;
                }
                let s = (t - a.t) / span;
                return a.v + (b.v - a.v) * s;
            }
        }
        last.v
    }
}
