//! Coordinated group of offset tweens with one shared completion point.
//!
//! A timeline is built once, primed (so `from_to` tweens show their start
//! values right away), then advanced by host frame deltas until every tween
//! and instant set has fired. There is no seeking and no cancellation.

use crate::ease::{lerp_f32, Ease};
use crate::element::{ElementRef, Property};
use crate::outputs::{Change, Outputs};
use crate::store::PropertyStore;

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub target: ElementRef,
    pub property: Property,
    /// Explicit start value; `None` reads the current value when the tween
    /// first runs.
    pub from: Option<f32>,
    pub to: f32,
    /// Timeline position in seconds.
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
    resolved_from: Option<f32>,
    done: bool,
}

impl Tween {
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.duration.max(0.0)
    }

    fn progress(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((time - self.start) / self.duration).clamp(0.0, 1.0)
    }
}

/// Value written once when the playhead reaches `at`.
#[derive(Clone, Debug, PartialEq)]
pub struct Instant {
    pub target: ElementRef,
    pub property: Property,
    pub value: f32,
    pub at: f32,
    fired: bool,
}

#[derive(Clone, Debug)]
pub struct Timeline {
    tweens: Vec<Tween>,
    instants: Vec<Instant>,
    time: f32,
    default_duration: f32,
    default_ease: Ease,
}

impl Timeline {
    /// New empty timeline whose tweens default to `duration` and `ease`.
    pub fn new(duration: f32, ease: Ease) -> Self {
        Self {
            tweens: Vec::new(),
            instants: Vec::new(),
            time: 0.0,
            default_duration: duration,
            default_ease: ease,
        }
    }

    /// Tween from the element's current value to `to`, starting at `start`,
    /// with the timeline defaults.
    pub fn to(&mut self, target: ElementRef, property: Property, to: f32, start: f32) -> &mut Self {
        self.push_tween(target, property, None, to, start, None, None)
    }

    /// Tween from `from` to `to` with the timeline defaults.
    pub fn from_to(
        &mut self,
        target: ElementRef,
        property: Property,
        from: f32,
        to: f32,
        start: f32,
    ) -> &mut Self {
        self.push_tween(target, property, Some(from), to, start, None, None)
    }

    /// `from_to` with its own duration and easing.
    #[allow(clippy::too_many_arguments)]
    pub fn from_to_with(
        &mut self,
        target: ElementRef,
        property: Property,
        from: f32,
        to: f32,
        start: f32,
        duration: f32,
        ease: Ease,
    ) -> &mut Self {
        self.push_tween(target, property, Some(from), to, start, Some(duration), Some(ease))
    }

    /// Write `value` once the playhead reaches `at`.
    pub fn set_at(&mut self, target: ElementRef, property: Property, value: f32, at: f32) -> &mut Self {
        self.instants.push(Instant {
            target,
            property,
            value,
            at: at.max(0.0),
            fired: false,
        });
        self
    }

    /// Write `value` at the current end of the timeline.
    pub fn then_set(&mut self, target: ElementRef, property: Property, value: f32) -> &mut Self {
        let at = self.duration();
        self.set_at(target, property, value, at)
    }

    #[allow(clippy::too_many_arguments)]
    fn push_tween(
        &mut self,
        target: ElementRef,
        property: Property,
        from: Option<f32>,
        to: f32,
        start: f32,
        duration: Option<f32>,
        ease: Option<Ease>,
    ) -> &mut Self {
        self.tweens.push(Tween {
            target,
            property,
            from,
            to,
            start: start.max(0.0),
            duration: duration.unwrap_or(self.default_duration),
            ease: ease.unwrap_or(self.default_ease),
            resolved_from: from,
            done: false,
        });
        self
    }

    /// Total length: the latest tween end or instant position.
    pub fn duration(&self) -> f32 {
        let tweens = self.tweens.iter().map(Tween::end);
        let instants = self.instants.iter().map(|i| i.at);
        tweens.chain(instants).fold(0.0, f32::max)
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn instants(&self) -> &[Instant] {
        &self.instants
    }

    pub fn is_complete(&self) -> bool {
        self.tweens.iter().all(|t| t.done) && self.instants.iter().all(|i| i.fired)
    }

    /// Render explicit start values immediately, before the first frame.
    pub fn prime(&mut self, store: &mut PropertyStore, out: &mut Outputs) {
        for tween in &self.tweens {
            if let Some(from) = tween.from {
                emit(store, out, tween.target, tween.property, from);
            }
        }
    }

    /// Advance the playhead by `dt` seconds, writing every value that changed.
    /// Returns `true` once the whole timeline has settled.
    pub fn advance(&mut self, dt: f32, store: &mut PropertyStore, out: &mut Outputs) -> bool {
        if dt.is_finite() && dt > 0.0 {
            self.time += dt;
        }
        let time = self.time;

        for tween in self.tweens.iter_mut().filter(|t| !t.done) {
            if time < tween.start {
                continue;
            }
            let (target, property) = (tween.target, tween.property);
            let from = *tween
                .resolved_from
                .get_or_insert_with(|| store.get(target, property));
            let p = tween.progress(time);
            let value = if p >= 1.0 {
                tween.to
            } else {
                lerp_f32(from, tween.to, tween.ease.apply(p))
            };
            emit(store, out, target, property, value);
            if p >= 1.0 {
                tween.done = true;
            }
        }

        for instant in self.instants.iter_mut().filter(|i| !i.fired) {
            if time >= instant.at {
                emit(store, out, instant.target, instant.property, instant.value);
                instant.fired = true;
            }
        }

        self.is_complete()
    }
}

fn emit(
    store: &mut PropertyStore,
    out: &mut Outputs,
    target: ElementRef,
    property: Property,
    value: f32,
) {
    let change = Change {
        target,
        property,
        value,
    };
    store.record(&change);
    out.push_change(change);
}
