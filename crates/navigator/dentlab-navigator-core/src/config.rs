//! Navigator configuration.
//!
//! Every field has a default matching the production site, so hosts can pass
//! `{}` (or nothing) and override only what differs.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::ease::Ease;
use crate::error::NavigatorError;
use crate::nav_map::NavMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Number of full-page sections on the page.
    pub sections: usize,
    pub transition: TransitionConfig,
    pub gesture: GestureConfig,
    /// Authoritative nav-link table.
    pub nav: NavMap,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            sections: 9,
            transition: TransitionConfig::default(),
            gesture: GestureConfig::default(),
            nav: NavMap::default(),
        }
    }
}

impl NavigatorConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(s: &str) -> Result<Self, NavigatorError> {
        let cfg: NavigatorConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        debug!(
            "loaded navigator config: {} sections, {} nav links",
            cfg.sections,
            cfg.nav.links().len()
        );
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), NavigatorError> {
        if self.sections == 0 {
            return Err(NavigatorError::NoSections);
        }
        self.transition.validate()?;
        self.gesture.validate()?;
        self.nav.validate(self.sections)
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), NavigatorError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NavigatorError::InvalidNumber {
            field,
            value,
            expected: "finite",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), NavigatorError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(NavigatorError::InvalidNumber {
            field,
            value,
            expected: "finite and >= 0",
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), NavigatorError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(NavigatorError::InvalidNumber {
            field,
            value,
            expected: "finite and > 0",
        })
    }
}

/// Timing and geometry of one section transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Seconds for structural motion (wrappers, backgrounds).
    pub duration: f32,
    pub ease: Ease,
    /// Seconds for the content fade/slide.
    pub content_duration: f32,
    pub content_ease: Ease,
    /// Timeline position at which the content tween starts.
    pub content_delay: f32,
    /// Background parallax offset, percent of element height.
    pub background_offset: f32,
    /// Wrapper/content slide offset, percent of element height.
    pub wrapper_offset: f32,
}

impl TransitionConfig {
    /// Durations and the delay must be finite and non-negative; offsets
    /// finite.
    pub fn validate(&self) -> Result<(), NavigatorError> {
        non_negative("transition.duration", self.duration)?;
        non_negative("transition.content_duration", self.content_duration)?;
        non_negative("transition.content_delay", self.content_delay)?;
        finite("transition.background_offset", self.background_offset)?;
        finite("transition.wrapper_offset", self.wrapper_offset)
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: 1.25,
            ease: Ease::Power1InOut,
            content_duration: 1.0,
            content_ease: Ease::Power2Out,
            content_delay: 0.2,
            background_offset: 15.0,
            wrapper_offset: 100.0,
        }
    }
}

/// Gesture recognizer tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Pixels of accumulated motion before a gesture fires.
    pub tolerance: f32,
    /// Multiplier applied to wheel deltas; negative inverts them so a wheel
    /// scroll down reads like a finger swipe up.
    pub wheel_speed: f32,
    pub prevent_default: bool,
}

impl GestureConfig {
    pub fn validate(&self) -> Result<(), NavigatorError> {
        positive("gesture.tolerance", self.tolerance)?;
        finite("gesture.wheel_speed", self.wheel_speed)
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tolerance: 10.0,
            wheel_speed: -1.0,
            prevent_default: true,
        }
    }
}
