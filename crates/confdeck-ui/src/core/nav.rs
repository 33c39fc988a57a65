//! Navigation menu shared by the navbar and the sidebar.

use crate::core::routing::{CONFIGURATIONS_PATH, ROOT_PATH};

/// A single navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Label shown to the user.
    pub title: &'static str,
    /// Client path the entry links to.
    pub link: &'static str,
}

/// Decides whether an entry link is active for the current path.
pub type ActivePredicate = fn(link: &str, current_path: &str) -> bool;

/// Default entries, in display order.
pub const DEFAULT_ENTRIES: [MenuItem; 2] = [
    MenuItem {
        title: "Home",
        link: ROOT_PATH,
    },
    MenuItem {
        title: "Configurations",
        link: CONFIGURATIONS_PATH,
    },
];

/// Active when the link equals the current path exactly.
#[must_use]
pub fn exact_match(link: &str, current_path: &str) -> bool {
    link == current_path
}

/// Ordered entries plus the predicate used to highlight the active one.
#[derive(Debug, Clone)]
pub struct NavMenu {
    entries: Vec<MenuItem>,
    active: ActivePredicate,
}

impl NavMenu {
    /// Menu with custom entries and predicate.
    #[must_use]
    pub const fn new(entries: Vec<MenuItem>, active: ActivePredicate) -> Self {
        Self { entries, active }
    }

    /// Entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[MenuItem] {
        &self.entries
    }

    /// Whether `item` is active while `current_path` is displayed.
    #[must_use]
    pub fn is_active(&self, item: &MenuItem, current_path: &str) -> bool {
        (self.active)(item.link, current_path)
    }

    /// First active entry, if any.
    #[must_use]
    pub fn active_entry(&self, current_path: &str) -> Option<&MenuItem> {
        self.entries
            .iter()
            .find(|item| self.is_active(item, current_path))
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRIES.to_vec(), exact_match)
    }
}

impl PartialEq for NavMenu {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && std::ptr::fn_addr_eq(self.active, other.active)
    }
}
