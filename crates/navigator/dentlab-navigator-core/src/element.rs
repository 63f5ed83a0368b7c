//! Addressing for the per-section elements a timeline animates.

use serde::{Deserialize, Serialize};

/// Which layer of a section an element is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    /// The full-viewport `section` itself.
    Section,
    /// Background image layer (`.bg`).
    Background,
    /// Outer slide wrapper (`.outer`).
    Outer,
    /// Inner slide wrapper (`.inner`), moves opposite to the outer one.
    Inner,
    /// Content wrapper, or the section heading when a section has none.
    Content,
}

/// One addressable element: a layer of a given section.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementRef {
    pub kind: ElementKind,
    pub section: usize,
}

impl ElementRef {
    #[inline]
    pub const fn new(kind: ElementKind, section: usize) -> Self {
        Self { kind, section }
    }

    #[inline]
    pub const fn section(section: usize) -> Self {
        Self::new(ElementKind::Section, section)
    }

    #[inline]
    pub const fn background(section: usize) -> Self {
        Self::new(ElementKind::Background, section)
    }

    #[inline]
    pub const fn outer(section: usize) -> Self {
        Self::new(ElementKind::Outer, section)
    }

    #[inline]
    pub const fn inner(section: usize) -> Self {
        Self::new(ElementKind::Inner, section)
    }

    #[inline]
    pub const fn content(section: usize) -> Self {
        Self::new(ElementKind::Content, section)
    }
}

/// Animatable style property.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    /// Vertical translate as a percentage of the element's own height.
    YPercent,
    /// Opacity, with `visibility: hidden` applied by hosts when it reaches 0.
    AutoAlpha,
    /// Paint order.
    ZIndex,
}

impl Property {
    /// Value assumed for a property that has never been written.
    pub fn initial(self) -> f32 {
        match self {
            Property::YPercent => 0.0,
            Property::AutoAlpha => 1.0,
            Property::ZIndex => 0.0,
        }
    }
}
