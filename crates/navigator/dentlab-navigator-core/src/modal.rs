//! Modal dialogs: the working-days price table and the factory gallery.
//!
//! Any open modal locks body scrolling. Escape closes every modal at once.
//! The factory gallery's slider is initialized lazily, the first time its
//! modal opens.

use std::collections::BTreeSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalId(pub String);

impl ModalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn working_days() -> Self {
        Self::new("workingDays")
    }

    pub fn china_factory() -> Self {
        Self::new("chinaFactory")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRow {
    pub service: String,
    pub days: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub services: Vec<ServiceRow>,
}

/// Turnaround times per service, grouped by product category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkingDaysCatalog {
    categories: Vec<Category>,
}

fn category(name: &str, rows: &[(&str, u32)]) -> Category {
    Category {
        name: name.to_string(),
        services: rows
            .iter()
            .map(|(service, days)| ServiceRow {
                service: service.to_string(),
                days: *days,
            })
            .collect(),
    }
}

impl Default for WorkingDaysCatalog {
    fn default() -> Self {
        Self {
            categories: vec![
                category(
                    "Casting Denture",
                    &[
                        ("Framework", 6),
                        ("Framework + Wax rim", 7),
                        ("Framework + set teeth", 7),
                        ("Framework + set teeth + finish", 7),
                        ("Set teeth + Finish", 6),
                        ("Acrylic process (finish)", 6),
                    ],
                ),
                category(
                    "Fixed Restoration",
                    &[("CMC/CMB", 6), ("Full ceramic", 6), ("Implant", 8)],
                ),
                category(
                    "Acrylic Denture",
                    &[
                        ("Set teeth", 6),
                        ("Set teeth + finish", 6),
                        ("Acrylic process (finish)", 6),
                    ],
                ),
                category(
                    "Other",
                    &[
                        ("Tray", 5),
                        ("Bite rim", 5),
                        ("Tray + Bite rim", 6),
                        ("Retainer", 6),
                    ],
                ),
            ],
        }
    }
}

impl WorkingDaysCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn rows(&self, category: &str) -> Option<&[ServiceRow]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.services.as_slice())
    }
}

/// Content currently shown in the working-days modal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalContent {
    pub title: String,
    pub subtitle: String,
    pub rows: Vec<ServiceRow>,
}

#[derive(Clone, Debug)]
pub struct ModalSet {
    known: BTreeSet<ModalId>,
    open: BTreeSet<ModalId>,
    lazy: BTreeSet<ModalId>,
    pending_init: BTreeSet<ModalId>,
    catalog: WorkingDaysCatalog,
    content: Option<ModalContent>,
}

impl Default for ModalSet {
    fn default() -> Self {
        Self::new(WorkingDaysCatalog::default())
    }
}

impl ModalSet {
    /// Registers the working-days modal and the factory gallery (lazy).
    pub fn new(catalog: WorkingDaysCatalog) -> Self {
        let mut set = Self {
            known: BTreeSet::new(),
            open: BTreeSet::new(),
            lazy: BTreeSet::new(),
            pending_init: BTreeSet::new(),
            catalog,
            content: None,
        };
        set.register(ModalId::working_days(), false);
        set.register(ModalId::china_factory(), true);
        set
    }

    /// Add a modal. `lazy_init` modals report a pending init the first time
    /// they open.
    pub fn register(&mut self, id: ModalId, lazy_init: bool) {
        if lazy_init {
            self.lazy.insert(id.clone());
        }
        self.known.insert(id);
    }

    pub fn catalog(&self) -> &WorkingDaysCatalog {
        &self.catalog
    }

    /// Open a registered modal. Unknown ids are ignored.
    pub fn open(&mut self, id: &ModalId) -> bool {
        if !self.known.contains(id) {
            warn!("open requested for unknown modal {}", id.0);
            return false;
        }
        if self.lazy.remove(id) {
            self.pending_init.insert(id.clone());
        }
        debug!("modal {} opened", id.0);
        self.open.insert(id.clone());
        true
    }

    /// Fill the working-days modal with `category` and open it. Unknown
    /// categories leave it closed.
    pub fn open_working_days(&mut self, category: &str) -> Option<&ModalContent> {
        let rows = self.catalog.rows(category)?.to_vec();
        self.content = Some(ModalContent {
            title: category.to_string(),
            subtitle: "Service Details".to_string(),
            rows,
        });
        if !self.open(&ModalId::working_days()) {
            return None;
        }
        self.content.as_ref()
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    pub fn close(&mut self, id: &ModalId) -> bool {
        self.open.remove(id)
    }

    /// Escape key: close every open modal, returning which ones closed.
    pub fn close_all(&mut self) -> Vec<ModalId> {
        std::mem::take(&mut self.open).into_iter().collect()
    }

    /// Clicks on the backdrop close the modal; clicks inside its content do
    /// not.
    pub fn backdrop_click(&mut self, id: &ModalId, on_backdrop: bool) -> bool {
        on_backdrop && self.close(id)
    }

    pub fn is_open(&self, id: &ModalId) -> bool {
        self.open.contains(id)
    }

    pub fn body_scroll_locked(&self) -> bool {
        !self.open.is_empty()
    }

    /// True exactly once per lazy modal, after its first open.
    pub fn take_pending_init(&mut self, id: &ModalId) -> bool {
        self.pending_init.remove(id)
    }
}
