//! Easing curves for timeline tweens.
//!
//! Names follow the `powerN.{in,out,inOut}` family used by common web tweening
//! libraries so configs read the same on both sides of the wasm boundary.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ease {
    #[serde(rename = "none", alias = "linear")]
    Linear,
    #[serde(rename = "power1.in")]
    Power1In,
    #[serde(rename = "power1.out")]
    Power1Out,
    #[default]
    #[serde(rename = "power1.inOut")]
    Power1InOut,
    #[serde(rename = "power2.in")]
    Power2In,
    #[serde(rename = "power2.out", alias = "power2")]
    Power2Out,
    #[serde(rename = "power2.inOut")]
    Power2InOut,
}

impl Ease {
    /// Map normalized progress `t` in [0, 1] onto eased progress.
    /// Inputs outside the unit interval are clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1In => ease_in(t, 2),
            Ease::Power1Out => ease_out(t, 2),
            Ease::Power1InOut => ease_in_out(t, 2),
            Ease::Power2In => ease_in(t, 3),
            Ease::Power2Out => ease_out(t, 3),
            Ease::Power2InOut => ease_in_out(t, 3),
        }
    }
}

#[inline]
fn ease_in(t: f32, exp: i32) -> f32 {
    t.powi(exp)
}

#[inline]
fn ease_out(t: f32, exp: i32) -> f32 {
    1.0 - (1.0 - t).powi(exp)
}

#[inline]
fn ease_in_out(t: f32, exp: i32) -> f32 {
    if t < 0.5 {
        0.5 * (2.0 * t).powi(exp)
    } else {
        1.0 - 0.5 * (2.0 - 2.0 * t).powi(exp)
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
