//! Filter → search → sort → paginate
//!
//! Every table in the dashboard renders through [`process`]. The whole
//! pipeline is recomputed from the source list whenever any input changes;
//! it borrows the records and never mutates them.

use crate::types::{Participant, ResultFilter};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Rows per table page
pub const PAGE_SIZE: usize = 10;

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Date,
    Name,
    Company,
    McuNo,
    Result,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Date,
        SortKey::Name,
        SortKey::Company,
        SortKey::McuNo,
        SortKey::Result,
    ];

    /// Compare two records on this column, ascending
    pub fn compare(&self, a: &Participant, b: &Participant) -> Ordering {
        match self {
            // unparseable dates sort before every valid one
            SortKey::Date => a.exam_timestamp().ok().cmp(&b.exam_timestamp().ok()),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Company => a.company.cmp(&b.company),
            SortKey::McuNo => a.mcu_no.cmp(&b.mcu_no),
            SortKey::Result => a.result.label().cmp(b.result.label()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Date => "date",
            SortKey::Name => "name",
            SortKey::Company => "company",
            SortKey::McuNo => "mcu-no",
            SortKey::Result => "result",
        };
        f.write_str(name)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" | "tanggal" => Ok(SortKey::Date),
            "name" | "nama" => Ok(SortKey::Name),
            "company" | "perusahaan" => Ok(SortKey::Company),
            "mcu-no" | "mcu_no" | "mcuno" | "mcu" => Ok(SortKey::McuNo),
            "result" | "hasil" => Ok(SortKey::Result),
            _ => Err(format!(
                "Unknown sort key: {}. Use date, name, company, mcu-no or result",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Column header sort toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key: Some(key), order }
    }

    /// Same key flips the direction, a new key starts ascending
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.order = self.order.flipped();
        } else {
            self.key = Some(key);
            self.order = SortOrder::Asc;
        }
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.order = SortOrder::Asc;
    }

    /// Order indicator for a column header, `None` when unsorted on it
    pub fn indicator(&self, key: SortKey) -> Option<SortOrder> {
        (self.key == Some(key)).then_some(self.order)
    }
}

/// Keep records whose result matches the filter, in input order
pub fn filter_by_result<'a>(records: &'a [Participant], filter: ResultFilter) -> Vec<&'a Participant> {
    records.iter().filter(|p| filter.matches(p)).collect()
}

/// Narrow by free-text query; an empty query keeps everything
pub fn search<'a>(rows: Vec<&'a Participant>, query: &str) -> Vec<&'a Participant> {
    if query.trim().is_empty() {
        return rows;
    }
    rows.into_iter().filter(|p| p.matches_query(query)).collect()
}

/// Stable sort; equal keys keep their incoming order in both directions
pub fn sort_rows(rows: &mut [&Participant], sort: SortState) {
    if let Some(key) = sort.key {
        rows.sort_by(|a, b| sort.order.apply(key.compare(a, b)));
    }
}

/// Number of pages, never less than one
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// Clamp a 1-based page number into range
pub fn clamp_page(page: usize, len: usize) -> usize {
    page.clamp(1, page_count(len))
}

/// Rows of a 1-based page
pub fn page_slice<T>(rows: &[T], page: usize) -> &[T] {
    let page = clamp_page(page, rows.len());
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

/// Inputs to one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub filter: ResultFilter,
    pub search: String,
    pub sort: SortState,
    pub page: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            filter: ResultFilter::All,
            search: String::new(),
            sort: SortState::default(),
            page: 1,
        }
    }
}

/// Output of one pipeline run
#[derive(Debug, Clone)]
pub struct DataView<'a> {
    /// Every row that survived filter and search, sorted
    pub rows: Vec<&'a Participant>,
    /// Effective page after clamping
    pub page: usize,
    pub total_pages: usize,
}

impl<'a> DataView<'a> {
    /// Rows on the current page
    pub fn page_rows(&self) -> &[&'a Participant] {
        page_slice(&self.rows, self.page)
    }

    pub fn page_ids(&self) -> Vec<&'a str> {
        self.page_rows().iter().map(|p| p.id.as_str()).collect()
    }

    pub fn total(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1-based index range shown on the page, e.g. (11, 20)
    pub fn page_range(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let start = (self.page - 1) * PAGE_SIZE + 1;
        Some((start, start + self.page_rows().len() - 1))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Run the whole pipeline
pub fn process<'a>(records: &'a [Participant], query: &ViewQuery) -> DataView<'a> {
    let mut rows = search(filter_by_result(records, query.filter), &query.search);
    sort_rows(&mut rows, query.sort);

    let total_pages = page_count(rows.len());
    let page = clamp_page(query.page, rows.len());

    DataView { rows, page, total_pages }
}
