//! Section navigator: owns the active full-page section, builds the
//! two-phase slide/fade timeline for each transition, and keeps the nav-bar
//! highlight in step with the active section.
//!
//! Methods:
//! - new, start, go_to_section, on_gesture, handle_input, click_link, update

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::NavigatorConfig;
use crate::element::{ElementRef, Property};
use crate::error::NavigatorError;
use crate::gesture::{Gesture, GestureRecognizer, Recognized};
use crate::highlight::{sync_highlight, Highlight, NavSurface};
use crate::inputs::{Direction, InputEvent};
use crate::nav_map::LinkAction;
use crate::outputs::{Change, NavEvent, Outputs};
use crate::store::PropertyStore;
use crate::timeline::Timeline;

/// Observable navigator state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorState {
    /// Active section; `None` until the first activation.
    pub current_index: Option<usize>,
    /// True exactly while a transition timeline is in flight.
    pub animating: bool,
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Transition {
    Started {
        from: Option<usize>,
        to: usize,
        direction: Direction,
    },
    /// A transition was already in flight; nothing changed.
    Dropped,
}

/// Result of a nav-link click.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClickOutcome {
    Navigated { transition: Transition },
    OpenModal { modal: String },
    /// The click matched no link, or a link with nothing to do.
    Ignored,
}

#[derive(Debug)]
pub struct SectionNavigator {
    cfg: NavigatorConfig,
    state: NavigatorState,
    recognizer: GestureRecognizer,
    timeline: Option<Timeline>,
    store: PropertyStore,
    highlight: Highlight,

    // Writes made between frames, flushed by the next update()
    pending: Outputs,
    // Per-frame outputs
    outputs: Outputs,
}

impl SectionNavigator {
    /// Validate `cfg` and lay out every section's wrappers off-screen.
    pub fn new(cfg: NavigatorConfig) -> Result<Self, NavigatorError> {
        cfg.validate()?;
        let mut nav = Self {
            recognizer: GestureRecognizer::new(cfg.gesture.clone()),
            cfg,
            state: NavigatorState::default(),
            timeline: None,
            store: PropertyStore::new(),
            highlight: Highlight::default(),
            pending: Outputs::default(),
            outputs: Outputs::default(),
        };
        let offset = nav.cfg.transition.wrapper_offset;
        for section in 0..nav.cfg.sections {
            nav.write(ElementRef::outer(section), Property::YPercent, offset);
            nav.write(ElementRef::inner(section), Property::YPercent, -offset);
        }
        Ok(nav)
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.cfg
    }

    pub fn section_count(&self) -> usize {
        self.cfg.sections
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index
    }

    pub fn is_animating(&self) -> bool {
        self.state.animating
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    /// Last value written for an element property.
    pub fn value_of(&self, target: ElementRef, property: Property) -> f32 {
        self.store.get(target, property)
    }

    /// Wrap any integer into `[0, sections)`.
    pub fn resolve(&self, index: i64) -> usize {
        index.rem_euclid(self.cfg.sections as i64) as usize
    }

    /// Enter section 0 moving forward. Called once at startup.
    pub fn start(&mut self) -> Transition {
        self.go_to_section(0, Direction::Forward)
    }

    /// Begin a transition to `target` (wrapped). Dropped while another
    /// transition is in flight. The index and highlight update immediately;
    /// `animating` clears only when the timeline settles in `update`.
    pub fn go_to_section(&mut self, target: i64, direction: Direction) -> Transition {
        if self.state.animating {
            debug!("navigation to {} dropped: transition in flight", target);
            self.pending
                .push_event(NavEvent::RequestDropped { requested: target });
            return Transition::Dropped;
        }

        let index = self.resolve(target);
        let from = self.state.current_index;
        self.state.animating = true;
        self.timeline = Some(self.build_timeline(from, index, direction));

        self.state.current_index = Some(index);
        debug!("section {:?} -> {} ({:?})", from, index, direction);
        self.pending.push_event(NavEvent::TransitionStarted {
            from,
            to: index,
            direction,
        });
        self.refresh_highlight();

        Transition::Started {
            from,
            to: index,
            direction,
        }
    }

    fn build_timeline(&mut self, from: Option<usize>, index: usize, direction: Direction) -> Timeline {
        let t = self.cfg.transition.clone();
        let d = direction.factor();
        let mut tl = Timeline::new(t.duration, t.ease);

        // Re-entering the active section keeps it visible.
        if let Some(prev) = from.filter(|&prev| prev != index) {
            self.write(ElementRef::section(prev), Property::ZIndex, 0.0);
            tl.to(
                ElementRef::background(prev),
                Property::YPercent,
                -t.background_offset * d,
                0.0,
            )
            .then_set(ElementRef::section(prev), Property::AutoAlpha, 0.0);
        }

        self.write(ElementRef::section(index), Property::AutoAlpha, 1.0);
        self.write(ElementRef::section(index), Property::ZIndex, 1.0);

        tl.from_to(
            ElementRef::outer(index),
            Property::YPercent,
            t.wrapper_offset * d,
            0.0,
            0.0,
        )
        .from_to(
            ElementRef::inner(index),
            Property::YPercent,
            -t.wrapper_offset * d,
            0.0,
            0.0,
        )
        .from_to(
            ElementRef::background(index),
            Property::YPercent,
            t.background_offset * d,
            0.0,
            0.0,
        )
        .from_to_with(
            ElementRef::content(index),
            Property::AutoAlpha,
            0.0,
            1.0,
            t.content_delay,
            t.content_duration,
            t.content_ease,
        )
        .from_to_with(
            ElementRef::content(index),
            Property::YPercent,
            t.wrapper_offset * d,
            0.0,
            t.content_delay,
            t.content_duration,
            t.content_ease,
        );

        tl.prime(&mut self.store, &mut self.pending);
        tl
    }

    /// Dispatch a recognized gesture: up → next section, down → previous.
    pub fn on_gesture(&mut self, gesture: Gesture) -> Transition {
        let current = self.state.current_index.map(|c| c as i64).unwrap_or(-1);
        let direction = gesture.direction();
        self.go_to_section(current + direction.sign(), direction)
    }

    /// Feed a raw wheel/touch/pointer event through the recognizer and act on
    /// any gesture it produces.
    pub fn handle_input(&mut self, event: &InputEvent) -> Recognized {
        let recognized = self.recognizer.feed(event);
        if let Some(gesture) = recognized.gesture {
            self.on_gesture(gesture);
        }
        recognized
    }

    /// Resolve a nav-link click by href, falling back to top-level position.
    pub fn click_link(&mut self, href: Option<&str>, position: Option<usize>) -> ClickOutcome {
        let nav = &self.cfg.nav;
        let link = href
            .and_then(|h| nav.by_href(h))
            .or_else(|| position.and_then(|p| nav.by_position(p)));
        let action = match link.and_then(|l| l.click_action()) {
            Some(action) => action,
            None => {
                debug!("click on {:?}/{:?} matched no link action", href, position);
                return ClickOutcome::Ignored;
            }
        };

        match action {
            LinkAction::OpenModal { modal } => {
                self.pending.push_event(NavEvent::OpenModal {
                    modal: modal.clone(),
                });
                ClickOutcome::OpenModal { modal }
            }
            LinkAction::GoTo { section } => {
                let direction = Direction::toward(self.state.current_index, section);
                let transition = self.go_to_section(section as i64, direction);
                ClickOutcome::Navigated { transition }
            }
        }
    }

    /// Clear and re-apply nav marks on a host surface for the current index.
    pub fn sync_highlight(&self, surface: &mut dyn NavSurface) -> Highlight {
        sync_highlight(&self.cfg.nav, self.state.current_index, surface)
    }

    /// Advance the in-flight timeline by `dt` seconds and return this frame's
    /// writes, including any queued since the last frame.
    pub fn update(&mut self, dt: f32) -> &Outputs {
        self.outputs.clear();
        self.outputs.append(&mut self.pending);

        if let Some(tl) = self.timeline.as_mut() {
            if tl.advance(dt, &mut self.store, &mut self.outputs) {
                self.timeline = None;
                self.state.animating = false;
                if let Some(index) = self.state.current_index {
                    debug!("section {} settled", index);
                    self.outputs
                        .push_event(NavEvent::TransitionCompleted { index });
                }
            }
        }

        &self.outputs
    }

    fn refresh_highlight(&mut self) {
        let next = self.cfg.nav.highlight_for(self.state.current_index);
        if next != self.highlight {
            self.pending.push_event(NavEvent::HighlightChanged {
                active: next.to_vec(),
            });
            self.highlight = next;
        }
    }

    fn write(&mut self, target: ElementRef, property: Property, value: f32) {
        let change = Change {
            target,
            property,
            value,
        };
        self.store.record(&change);
        self.pending.push_change(change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> SectionNavigator {
        SectionNavigator::new(NavigatorConfig::default()).unwrap()
    }

    #[test]
    fn resolve_wraps_both_ways() {
        let nav = nav();
        assert_eq!(nav.resolve(-1), 8);
        assert_eq!(nav.resolve(9), 0);
        assert_eq!(nav.resolve(-10), 8);
        assert_eq!(nav.resolve(4), 4);
    }

    #[test]
    fn construction_parks_wrappers_offscreen() {
        let nav = nav();
        assert_eq!(nav.value_of(ElementRef::outer(3), Property::YPercent), 100.0);
        assert_eq!(nav.value_of(ElementRef::inner(3), Property::YPercent), -100.0);
        assert_eq!(nav.current_index(), None);
    }

    #[test]
    fn first_activation_has_no_exit_phase() {
        let mut nav = nav();
        nav.start();
        let tl = nav.timeline.as_ref().unwrap();
        assert_eq!(tl.instants().len(), 0);
        assert_eq!(tl.tweens().len(), 5);
    }

    #[test]
    fn second_transition_adds_exit_phase() {
        let mut nav = nav();
        nav.start();
        nav.update(2.0);
        nav.go_to_section(1, Direction::Forward);
        let tl = nav.timeline.as_ref().unwrap();
        assert_eq!(tl.tweens().len(), 6);
        assert_eq!(tl.instants().len(), 1);
        assert_eq!(nav.value_of(ElementRef::section(0), Property::ZIndex), 0.0);
    }

    #[test]
    fn reentering_active_section_keeps_it_visible() {
        let mut nav = nav();
        nav.start();
        nav.update(2.0);
        nav.go_to_section(9, Direction::Forward);
        nav.update(2.0);
        assert_eq!(nav.value_of(ElementRef::section(0), Property::AutoAlpha), 1.0);
    }
}
