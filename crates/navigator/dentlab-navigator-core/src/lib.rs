//! Dental-lab site navigation core (DOM-agnostic)
//!
//! Owns the full-page section navigator, the tween timeline it drives, the
//! unified wheel/touch/pointer gesture recognizer, and the authoritative
//! nav-link table. Peripheral widgets (carousels, modals, the client marquee)
//! live here as small state machines as well.
//!
//! Nothing in this crate touches a DOM. Every operation produces [`Outputs`]:
//! property changes keyed by [`ElementRef`] plus semantic [`NavEvent`]s. Hosts
//! (the wasm adapter, tests) apply them.

pub mod carousel;
pub mod config;
pub mod ease;
pub mod element;
pub mod error;
pub mod gesture;
pub mod highlight;
pub mod inputs;
pub mod marquee;
pub mod modal;
pub mod nav_map;
pub mod navigator;
pub mod outputs;
pub mod store;
pub mod timeline;

// Re-exports for adapters
pub use carousel::{Breakpoints, Carousel, CarouselView, DotView, SlidePaging};
pub use config::{GestureConfig, NavigatorConfig, TransitionConfig};
pub use ease::Ease;
pub use element::{ElementKind, ElementRef, Property};
pub use error::NavigatorError;
pub use gesture::{Gesture, GestureRecognizer, Recognized};
pub use highlight::{sync_highlight, Highlight, NavSurface};
pub use inputs::{Direction, InputEvent};
pub use marquee::{Marquee, MarqueeDirection, MarqueeRow};
pub use modal::{Category, ModalContent, ModalId, ModalSet, ServiceRow, WorkingDaysCatalog};
pub use nav_map::{LinkAction, LinkId, LinkSlot, NavLink, NavMap};
pub use navigator::{ClickOutcome, NavigatorState, SectionNavigator, Transition};
pub use outputs::{Change, NavEvent, Outputs};
pub use store::PropertyStore;
pub use timeline::{Instant, Timeline, Tween};
