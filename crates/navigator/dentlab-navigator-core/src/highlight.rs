//! Nav-bar active-link synchronization.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::nav_map::{LinkId, NavLink, NavMap};

/// The set of links that should carry the active mark.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Highlight {
    active: BTreeSet<LinkId>,
}

impl Highlight {
    pub fn new(active: BTreeSet<LinkId>) -> Self {
        Self { active }
    }

    pub fn is_active(&self, id: LinkId) -> bool {
        self.active.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = LinkId> + '_ {
        self.active.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<LinkId> {
        self.iter().collect()
    }
}

/// Host-side nav bar the highlight is written to.
pub trait NavSurface {
    /// Remove the active mark from every link, submenu entries included.
    fn clear_active(&mut self);
    fn set_active(&mut self, link: &NavLink);
}

/// Clear every mark, then apply the marks for `current`. Returns what was
/// applied. Links missing from `map` are skipped.
pub fn sync_highlight(
    map: &NavMap,
    current: Option<usize>,
    surface: &mut dyn NavSurface,
) -> Highlight {
    let highlight = map.highlight_for(current);
    surface.clear_active();
    for id in highlight.iter() {
        if let Some(link) = map.get(id) {
            surface.set_active(link);
        }
    }
    highlight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct ClassList {
        active: BTreeSet<LinkId>,
        clears: usize,
    }

    impl NavSurface for ClassList {
        fn clear_active(&mut self) {
            self.active.clear();
            self.clears += 1;
        }
        fn set_active(&mut self, link: &NavLink) {
            self.active.insert(link.id);
        }
    }

    #[test]
    fn sync_replaces_previous_marks() {
        let map = NavMap::default();
        let mut dom = ClassList::default();
        sync_highlight(&map, Some(2), &mut dom);
        assert_eq!(dom.active, BTreeSet::from([LinkId(1)]));
        sync_highlight(&map, Some(6), &mut dom);
        assert_eq!(dom.active, BTreeSet::from([LinkId(0), LinkId(6)]));
        assert_eq!(dom.clears, 2);
    }

    #[test]
    fn sync_twice_is_same_as_once() {
        let map = NavMap::default();
        let mut once = ClassList::default();
        sync_highlight(&map, Some(8), &mut once);
        let mut twice = ClassList::default();
        sync_highlight(&map, Some(8), &mut twice);
        sync_highlight(&map, Some(8), &mut twice);
        assert_eq!(once.active, twice.active);
    }

    #[test]
    fn serializes_as_plain_id_list() {
        let map = NavMap::default();
        let json = serde_json::to_string(&map.highlight_for(Some(5))).unwrap();
        assert_eq!(json, "[0,5]");
    }
}
