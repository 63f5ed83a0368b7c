//! Input contracts: raw host events and transition direction.

use serde::{Deserialize, Serialize};

/// Which way panels slide during a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Upward / previous section (`-1`).
    Backward,
    /// Downward / next section (`+1`).
    Forward,
}

impl Direction {
    /// `-1.0` for backward, `1.0` for forward. Scales every slide offset.
    #[inline]
    pub fn factor(self) -> f32 {
        match self {
            Direction::Backward => -1.0,
            Direction::Forward => 1.0,
        }
    }

    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }

    /// Negative values mean backward; everything else is forward.
    #[inline]
    pub fn from_sign(sign: i64) -> Self {
        if sign < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// Direction of travel from `current` to `target`; `None` compares as -1.
    pub fn toward(current: Option<usize>, target: usize) -> Self {
        let current = current.map(|c| c as i64).unwrap_or(-1);
        if target as i64 > current {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Raw pointer-family event forwarded by the host. Coordinates are client
/// pixels; wheel deltas are in pixels as reported by the browser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputEvent {
    Wheel {
        #[serde(rename = "deltaY")]
        delta_y: f32,
    },
    TouchStart {
        y: f32,
    },
    TouchMove {
        y: f32,
    },
    TouchEnd,
    PointerDown {
        y: f32,
    },
    PointerMove {
        y: f32,
    },
    PointerUp,
}
