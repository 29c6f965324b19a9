//! Row selection
//!
//! Selected ids live independently of pagination. The header checkbox only
//! ever looks at the ids on the visible page.

use std::collections::BTreeSet;

/// Header checkbox state for the visible page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Add or remove one id
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Header checkbox click: deselect the page if it is fully selected,
    /// otherwise select every id on it
    pub fn toggle_page(&mut self, page_ids: &[&str]) {
        if self.check_state(page_ids) == CheckState::Checked {
            for id in page_ids {
                self.ids.remove(*id);
            }
        } else {
            self.ids.extend(page_ids.iter().map(|id| id.to_string()));
        }
    }

    /// Selected ids among the given page
    pub fn count_in(&self, page_ids: &[&str]) -> usize {
        page_ids.iter().filter(|id| self.contains(id)).count()
    }

    pub fn check_state(&self, page_ids: &[&str]) -> CheckState {
        let selected = self.count_in(page_ids);
        if page_ids.is_empty() || selected == 0 {
            CheckState::Unchecked
        } else if selected == page_ids.len() {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }
}
