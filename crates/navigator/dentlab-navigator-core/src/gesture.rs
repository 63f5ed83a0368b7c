//! Unified wheel/touch/pointer gesture recognizer.
//!
//! Vertical deltas accumulate until they pass the tolerance, then one
//! directional gesture fires and the accumulator starts over. A delta against
//! the accumulated sign discards what was gathered so far.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::config::GestureConfig;
use crate::inputs::{Direction, InputEvent};

/// Normalized directional gesture. `Up` means content moves up, i.e. the user
/// wants the next section.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gesture {
    Up,
    Down,
}

impl Gesture {
    /// Navigation direction this gesture requests.
    pub fn direction(self) -> Direction {
        match self {
            Gesture::Up => Direction::Forward,
            Gesture::Down => Direction::Backward,
        }
    }
}

/// Result of feeding one event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recognized {
    pub gesture: Option<Gesture>,
    /// Host should call `preventDefault()` so the page never scrolls natively.
    pub prevent_default: bool,
}

#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    cfg: GestureConfig,
    acc: f32,
    pressed: bool,
    last_y: Option<f32>,
}

impl GestureRecognizer {
    pub fn new(cfg: GestureConfig) -> Self {
        Self {
            cfg,
            acc: 0.0,
            pressed: false,
            last_y: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.cfg
    }

    /// Feed one raw event.
    pub fn feed(&mut self, event: &InputEvent) -> Recognized {
        match *event {
            InputEvent::Wheel { delta_y } => {
                let gesture = self.accumulate(delta_y * self.cfg.wheel_speed);
                Recognized {
                    gesture,
                    prevent_default: self.cfg.prevent_default,
                }
            }
            InputEvent::TouchStart { y } | InputEvent::PointerDown { y } => {
                self.press(y);
                Recognized {
                    gesture: None,
                    prevent_default: self.cfg.prevent_default,
                }
            }
            InputEvent::TouchMove { y } | InputEvent::PointerMove { y } => {
                if !self.pressed {
                    return Recognized::default();
                }
                let gesture = match self.last_y.replace(y) {
                    Some(prev) => self.accumulate(y - prev),
                    None => None,
                };
                Recognized {
                    gesture,
                    prevent_default: self.cfg.prevent_default,
                }
            }
            InputEvent::TouchEnd | InputEvent::PointerUp => {
                let was_pressed = self.pressed;
                self.release();
                Recognized {
                    gesture: None,
                    prevent_default: was_pressed && self.cfg.prevent_default,
                }
            }
        }
    }

    fn press(&mut self, y: f32) {
        self.pressed = true;
        self.last_y = Some(y);
        self.acc = 0.0;
    }

    fn release(&mut self) {
        self.pressed = false;
        self.last_y = None;
        self.acc = 0.0;
    }

    fn accumulate(&mut self, delta: f32) -> Option<Gesture> {
        if delta == 0.0 || !delta.is_finite() {
            return None;
        }
        if self.acc != 0.0 && self.acc.signum() != delta.signum() {
            self.acc = 0.0;
        }
        self.acc += delta;
        if self.acc.abs() < self.cfg.tolerance {
            return None;
        }
        let gesture = if self.acc < 0.0 {
            Gesture::Up
        } else {
            Gesture::Down
        };
        trace!("gesture {:?} after {:.1}px", gesture, self.acc);
        self.acc = 0.0;
        Some(gesture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> GestureRecognizer {
        GestureRecognizer::new(GestureConfig::default())
    }

    #[test]
    fn wheel_down_requests_next_section() {
        let mut r = recognizer();
        let out = r.feed(&InputEvent::Wheel { delta_y: 40.0 });
        assert_eq!(out.gesture, Some(Gesture::Up));
        assert_eq!(out.gesture.map(Gesture::direction), Some(Direction::Forward));
        assert!(out.prevent_default);
    }

    #[test]
    fn small_wheel_ticks_accumulate_past_tolerance() {
        let mut r = recognizer();
        assert_eq!(r.feed(&InputEvent::Wheel { delta_y: -4.0 }).gesture, None);
        assert_eq!(r.feed(&InputEvent::Wheel { delta_y: -4.0 }).gesture, None);
        assert_eq!(
            r.feed(&InputEvent::Wheel { delta_y: -4.0 }).gesture,
            Some(Gesture::Down)
        );
        // accumulator restarted
        assert_eq!(r.feed(&InputEvent::Wheel { delta_y: -4.0 }).gesture, None);
    }

    #[test]
    fn reversal_discards_accumulated_motion() {
        let mut r = recognizer();
        assert_eq!(r.feed(&InputEvent::Wheel { delta_y: 8.0 }).gesture, None);
        assert_eq!(r.feed(&InputEvent::Wheel { delta_y: -8.0 }).gesture, None);
        assert_eq!(r.feed(&InputEvent::Wheel { delta_y: 8.0 }).gesture, None);
    }

    #[test]
    fn touch_swipe_up_requests_next_section() {
        let mut r = recognizer();
        r.feed(&InputEvent::TouchStart { y: 300.0 });
        assert_eq!(r.feed(&InputEvent::TouchMove { y: 295.0 }).gesture, None);
        assert_eq!(
            r.feed(&InputEvent::TouchMove { y: 280.0 }).gesture,
            Some(Gesture::Up)
        );
        r.feed(&InputEvent::TouchEnd);
    }

    #[test]
    fn pointer_moves_without_press_are_ignored() {
        let mut r = recognizer();
        let out = r.feed(&InputEvent::PointerMove { y: 10.0 });
        assert_eq!(out, Recognized::default());
        let out = r.feed(&InputEvent::PointerMove { y: 200.0 });
        assert_eq!(out.gesture, None);
    }

    #[test]
    fn pointer_drag_down_requests_previous_section() {
        let mut r = recognizer();
        r.feed(&InputEvent::PointerDown { y: 100.0 });
        let out = r.feed(&InputEvent::PointerMove { y: 130.0 });
        assert_eq!(out.gesture, Some(Gesture::Down));
        r.feed(&InputEvent::PointerUp);
        assert_eq!(r.feed(&InputEvent::PointerMove { y: 400.0 }).gesture, None);
    }
}
