//! Construction-time errors. Navigation itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NavigatorError {
    /// A navigator needs at least one section to wrap indices into.
    #[error("section count must be at least 1")]
    NoSections,

    #[error("nav link {link} ({href}) targets section {section}, but only {count} sections exist")]
    LinkSectionOutOfRange {
        link: u32,
        href: String,
        section: usize,
        count: usize,
    },

    #[error("nav link {link} names parent {parent}, which is not a top-level link")]
    UnknownParent { link: u32, parent: u32 },

    #[error("duplicate nav link id {link}")]
    DuplicateLink { link: u32 },

    #[error("duplicate nav link href {href}")]
    DuplicateHref { href: String },

    /// A timing, offset, or gesture number outside its usable range.
    #[error("{field} = {value} is invalid: must be {expected}")]
    InvalidNumber {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}
