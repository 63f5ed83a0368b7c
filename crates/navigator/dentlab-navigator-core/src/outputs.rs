//! Output contracts from the navigator.
//!
//! Outputs carry the property writes for this frame keyed by [`ElementRef`]
//! and a separate list of semantic events. Adapters apply changes to the host
//! and forward events.

use serde::{Deserialize, Serialize};

use crate::element::{ElementRef, Property};
use crate::inputs::Direction;
use crate::nav_map::LinkId;

/// One property write for this frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub target: ElementRef,
    pub property: Property,
    pub value: f32,
}

/// Discrete signals emitted while navigating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
#[non_exhaustive]
pub enum NavEvent {
    TransitionStarted {
        from: Option<usize>,
        to: usize,
        direction: Direction,
    },
    TransitionCompleted {
        index: usize,
    },
    /// A request arrived while a transition was in flight and was discarded.
    RequestDropped {
        requested: i64,
    },
    HighlightChanged {
        active: Vec<LinkId>,
    },
    OpenModal {
        modal: String,
    },
}

/// Outputs returned by `SectionNavigator::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<NavEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: NavEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }

    /// Move everything from `other` onto the end of this batch.
    pub fn append(&mut self, other: &mut Outputs) {
        self.changes.append(&mut other.changes);
        self.events.append(&mut other.events);
    }

    /// Last value written to `target.property` in this batch, if any.
    pub fn last_value(&self, target: ElementRef, property: Property) -> Option<f32> {
        self.changes
            .iter()
            .rev()
            .find(|c| c.target == target && c.property == property)
            .map(|c| c.value)
    }
}
