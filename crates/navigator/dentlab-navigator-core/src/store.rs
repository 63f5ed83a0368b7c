//! Last-written values per element property.
//!
//! `to` tweens start from whatever an element currently shows, so the
//! navigator mirrors every write it emits here.

use hashbrown::HashMap;

use crate::element::{ElementRef, Property};
use crate::outputs::Change;

#[derive(Debug, Default, Clone)]
pub struct PropertyStore {
    values: HashMap<(ElementRef, Property), f32>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value, or the property's initial value if never written.
    pub fn get(&self, target: ElementRef, property: Property) -> f32 {
        self.values
            .get(&(target, property))
            .copied()
            .unwrap_or_else(|| property.initial())
    }

    #[inline]
    pub fn set(&mut self, target: ElementRef, property: Property, value: f32) {
        self.values.insert((target, property), value);
    }

    #[inline]
    pub fn record(&mut self, change: &Change) {
        self.set(change.target, change.property, change.value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
