//! The one authoritative relation between nav-bar links and sections.
//!
//! Click resolution and highlight sync both read this table, so a link can
//! never navigate somewhere it would not also light up for.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::NavigatorError;
use crate::highlight::Highlight;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LinkId(pub u32);

/// Where a link sits in the nav bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LinkSlot {
    /// Direct child of the nav bar (or of a `.nav-item`).
    Top,
    /// Entry of the dropdown hanging off `parent`.
    Submenu { parent: LinkId },
}

/// What clicking a link does.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LinkAction {
    GoTo { section: usize },
    OpenModal { modal: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub id: LinkId,
    #[serde(default)]
    pub href: Option<String>,
    pub slot: LinkSlot,
    /// Sections this link is highlighted for.
    #[serde(default)]
    pub sections: Vec<usize>,
    /// Explicit click action; defaults to the first highlighted section.
    #[serde(default)]
    pub action: Option<LinkAction>,
}

impl NavLink {
    fn top(id: u32, href: &str, sections: &[usize]) -> Self {
        Self {
            id: LinkId(id),
            href: Some(href.to_string()),
            slot: LinkSlot::Top,
            sections: sections.to_vec(),
            action: None,
        }
    }

    fn submenu(id: u32, parent: u32, href: &str, section: usize) -> Self {
        Self {
            id: LinkId(id),
            href: Some(href.to_string()),
            slot: LinkSlot::Submenu {
                parent: LinkId(parent),
            },
            sections: vec![section],
            action: None,
        }
    }

    /// Effective click action.
    pub fn click_action(&self) -> Option<LinkAction> {
        self.action.clone().or_else(|| {
            self.sections
                .first()
                .map(|&section| LinkAction::GoTo { section })
        })
    }

    pub fn parent(&self) -> Option<LinkId> {
        match self.slot {
            LinkSlot::Top => None,
            LinkSlot::Submenu { parent } => Some(parent),
        }
    }

    pub fn is_top(&self) -> bool {
        matches!(self.slot, LinkSlot::Top)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMap {
    links: Vec<NavLink>,
}

impl Default for NavMap {
    /// The production nav bar. Section 0 (hero) has no link; innovation,
    /// clients, and contact are reachable only through the About dropdown.
    fn default() -> Self {
        let mut factory = NavLink::top(3, "#china-factory", &[]);
        factory.action = Some(LinkAction::OpenModal {
            modal: "chinaFactory".to_string(),
        });
        Self {
            links: vec![
                NavLink::top(0, "#about", &[1]),
                NavLink::top(1, "#services", &[2]),
                NavLink::top(2, "#workshops", &[3, 4]),
                factory,
                NavLink::top(4, "#working-days", &[7]),
                NavLink::submenu(5, 0, "#innovation", 5),
                NavLink::submenu(6, 0, "#clients", 6),
                NavLink::submenu(7, 0, "#contact", 8),
            ],
        }
    }
}

impl NavMap {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self { links }
    }

    pub fn from_json(s: &str) -> Result<Self, NavigatorError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn get(&self, id: LinkId) -> Option<&NavLink> {
        self.links.iter().find(|l| l.id == id)
    }

    pub fn by_href(&self, href: &str) -> Option<&NavLink> {
        self.links
            .iter()
            .find(|l| l.href.as_deref() == Some(href))
    }

    /// Top-level link at `position`, counting only top-level links in
    /// document order.
    pub fn by_position(&self, position: usize) -> Option<&NavLink> {
        self.links.iter().filter(|l| l.is_top()).nth(position)
    }

    /// Links to mark active while `current` is shown. Submenu hits also mark
    /// their parent.
    pub fn highlight_for(&self, current: Option<usize>) -> Highlight {
        let mut active = BTreeSet::new();
        if let Some(index) = current {
            for link in self.links.iter().filter(|l| l.sections.contains(&index)) {
                active.insert(link.id);
                if let Some(parent) = link.parent() {
                    active.insert(parent);
                }
            }
        }
        Highlight::new(active)
    }

    /// Check every link against `section_count` and the table's own
    /// structure.
    pub fn validate(&self, section_count: usize) -> Result<(), NavigatorError> {
        let mut ids = BTreeSet::new();
        let mut hrefs = BTreeSet::new();
        for link in &self.links {
            if !ids.insert(link.id) {
                return Err(NavigatorError::DuplicateLink { link: link.id.0 });
            }
            if let Some(href) = &link.href {
                if !hrefs.insert(href.as_str()) {
                    return Err(NavigatorError::DuplicateHref { href: href.clone() });
                }
            }
            let explicit = match &link.action {
                Some(LinkAction::GoTo { section }) => Some(*section),
                _ => None,
            };
            for &section in link.sections.iter().chain(explicit.iter()) {
                if section >= section_count {
                    return Err(NavigatorError::LinkSectionOutOfRange {
                        link: link.id.0,
                        href: link.href.clone().unwrap_or_default(),
                        section,
                        count: section_count,
                    });
                }
            }
        }
        for link in &self.links {
            if let Some(parent) = link.parent() {
                let ok = self.get(parent).map(NavLink::is_top).unwrap_or(false);
                if !ok {
                    return Err(NavigatorError::UnknownParent {
                        link: link.id.0,
                        parent: parent.0,
                    });
                }
            }
        }
        Ok(())
    }
}
