//! Per-table view state
//!
//! Bundles the pipeline inputs with the selection so each table (participant
//! list, verification batch, new submissions) owns one value.

use crate::pipeline::{self, DataView, SortKey, ViewQuery};
use crate::selection::{CheckState, Selection};
use crate::types::{Participant, ResultFilter};

#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub query: ViewQuery,
    pub selection: Selection,
}

impl TableState {
    pub fn view<'a>(&self, records: &'a [Participant]) -> DataView<'a> {
        pipeline::process(records, &self.query)
    }

    pub fn filter(&self) -> ResultFilter {
        self.query.filter
    }

    /// Changing the filter jumps back to the first page
    pub fn set_filter(&mut self, filter: ResultFilter) {
        if self.query.filter != filter {
            self.query.filter = filter;
            self.query.page = 1;
        }
    }

    pub fn set_search(&mut self, query: &str) {
        if self.query.search != query {
            self.query.search = query.to_string();
            self.query.page = 1;
        }
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.query.sort.toggle(key);
    }

    pub fn go_to_page(&mut self, page: usize, records: &[Participant]) {
        let total = self.view(records).total();
        self.query.page = pipeline::clamp_page(page, total);
    }

    pub fn next_page(&mut self, records: &[Participant]) {
        self.go_to_page(self.query.page + 1, records);
    }

    pub fn previous_page(&mut self, records: &[Participant]) {
        self.go_to_page(self.query.page.saturating_sub(1), records);
    }

    pub fn toggle_row(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    /// Header checkbox on the visible page
    pub fn toggle_page(&mut self, records: &[Participant]) {
        let view = self.view(records);
        let ids = view.page_ids();
        self.selection.toggle_page(&ids);
    }

    pub fn check_state(&self, records: &[Participant]) -> CheckState {
        let view = self.view(records);
        self.selection.check_state(&view.page_ids())
    }

    /// Navigation reset: selection, sort and page go, the filter and search stay
    pub fn reset(&mut self) {
        self.selection.clear();
        self.query.sort.clear();
        self.query.page = 1;
    }
}
