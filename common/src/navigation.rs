//! Dashboard state machine
//!
//! ```text
//! List --upload--> Verification --confirm/cancel--> List
//! Verification | NewSubmissions --edit--> EditParticipant --save/cancel--> origin
//! ```
//!
//! [`Dashboard`] owns every piece of state a front end needs. Front ends
//! (the CLI session and the desktop app) only translate user input into
//! method calls and render what the getters return.

use crate::error::{Error, Result};
use crate::form::EditSession;
use crate::mock;
use crate::pipeline::{DataView, SortKey};
use crate::selection::CheckState;
use crate::table::TableState;
use crate::types::{find_participant, Participant, ParticipantKind, ResultFilter};
use crate::upload::{self, UploadForm};
use std::collections::VecDeque;

/// Where an edit returns to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnView {
    Verification,
    NewSubmissions,
}

impl From<ReturnView> for View {
    fn from(view: ReturnView) -> Self {
        match view {
            ReturnView::Verification => View::Verification,
            ReturnView::NewSubmissions => View::NewSubmissions,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Verification,
    NewSubmissions,
    EditParticipant { return_to: ReturnView },
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::List => "Daftar Peserta MCU",
            View::Verification => "Verifikasi Data",
            View::NewSubmissions => "Pengajuan Baru",
            View::EditParticipant { .. } => "Edit Data Peserta",
        }
    }

    /// View highlighted in the sidebar; an edit highlights its origin
    pub fn sidebar_view(&self) -> View {
        match self {
            View::EditParticipant { return_to } => (*return_to).into(),
            other => *other,
        }
    }
}

/// Transient messages shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    BatchProcessed,
    ChangesSaved,
    AllProcessed,
    FileRejected(String),
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::BatchProcessed => "Data berhasil diproses!",
            Notification::ChangesSaved => "Perubahan berhasil disimpan!",
            Notification::AllProcessed => "Semua data diproses!",
            Notification::FileRejected(_) => upload::REJECT_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropdown {
    ResultFilter,
    AddNew,
}

pub struct Dashboard {
    individual: Vec<Participant>,
    corporate: Vec<Participant>,
    submissions_individual: Vec<Participant>,
    submissions_corporate: Vec<Participant>,
    pending: Vec<Participant>,

    view: View,
    active_tab: ParticipantKind,
    submissions_tab: ParticipantKind,

    list: TableState,
    verification: TableState,
    submissions: TableState,

    upload: Option<UploadForm>,
    upload_step: u8,
    cancel_confirm_open: bool,
    dropdown: Option<Dropdown>,
    notifications: VecDeque<Notification>,
    edit: Option<EditSession>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    /// Dashboard over the built-in mock data
    pub fn new() -> Self {
        Self::with_records(mock::individual_participants(), mock::corporate_participants())
    }

    pub fn with_records(individual: Vec<Participant>, corporate: Vec<Participant>) -> Self {
        let submissions_individual = individual
            .iter()
            .take(mock::NEW_SUBMISSIONS_INDIVIDUAL)
            .cloned()
            .collect();
        let submissions_corporate = corporate
            .iter()
            .take(mock::NEW_SUBMISSIONS_CORPORATE)
            .cloned()
            .collect();

        Self {
            individual,
            corporate,
            submissions_individual,
            submissions_corporate,
            pending: Vec::new(),
            view: View::List,
            active_tab: ParticipantKind::Individual,
            submissions_tab: ParticipantKind::Individual,
            list: TableState::default(),
            verification: TableState::default(),
            submissions: TableState::default(),
            upload: None,
            upload_step: upload::DEFAULT_STEP_PERCENT,
            cancel_confirm_open: false,
            dropdown: None,
            notifications: VecDeque::new(),
            edit: None,
        }
    }

    /// Progress step used by upload forms opened from now on
    pub fn with_upload_step(mut self, step: u8) -> Self {
        self.upload_step = step;
        self
    }

    // ===== getters =====

    pub fn view(&self) -> View {
        self.view
    }

    pub fn active_tab(&self) -> ParticipantKind {
        self.active_tab
    }

    pub fn submissions_tab(&self) -> ParticipantKind {
        self.submissions_tab
    }

    pub fn result_filter(&self) -> ResultFilter {
        self.list.filter()
    }

    pub fn participants(&self, kind: ParticipantKind) -> &[Participant] {
        match kind {
            ParticipantKind::Individual => &self.individual,
            ParticipantKind::Corporate => &self.corporate,
        }
    }

    pub fn new_submissions(&self, kind: ParticipantKind) -> &[Participant] {
        match kind {
            ParticipantKind::Individual => &self.submissions_individual,
            ParticipantKind::Corporate => &self.submissions_corporate,
        }
    }

    /// The synthesized batch waiting for verification
    pub fn pending(&self) -> &[Participant] {
        &self.pending
    }

    /// Sidebar badge on "Pengajuan Baru"
    pub fn pending_count(&self) -> usize {
        self.submissions_individual.len() + self.submissions_corporate.len()
    }

    /// Whether the Perusahaan column is shown in the current table
    pub fn shows_company(&self) -> bool {
        match self.view {
            View::NewSubmissions => self.submissions_tab.shows_company(),
            _ => self.active_tab.shows_company(),
        }
    }

    fn current(&self) -> Option<(&TableState, &[Participant])> {
        match self.view {
            View::List => Some((&self.list, self.participants(self.active_tab))),
            View::Verification => Some((&self.verification, &self.pending)),
            View::NewSubmissions => {
                Some((&self.submissions, self.new_submissions(self.submissions_tab)))
            }
            View::EditParticipant { .. } => None,
        }
    }

    fn current_mut(&mut self) -> Option<(&mut TableState, &[Participant])> {
        match self.view {
            View::List => {
                let records = match self.active_tab {
                    ParticipantKind::Individual => &self.individual,
                    ParticipantKind::Corporate => &self.corporate,
                };
                Some((&mut self.list, records.as_slice()))
            }
            View::Verification => Some((&mut self.verification, self.pending.as_slice())),
            View::NewSubmissions => {
                let records = match self.submissions_tab {
                    ParticipantKind::Individual => &self.submissions_individual,
                    ParticipantKind::Corporate => &self.submissions_corporate,
                };
                Some((&mut self.submissions, records.as_slice()))
            }
            View::EditParticipant { .. } => None,
        }
    }

    /// Table state of the current view
    pub fn table(&self) -> Option<&TableState> {
        self.current().map(|(table, _)| table)
    }

    /// Pipeline output of the current view; `None` while editing
    pub fn data_view(&self) -> Option<DataView<'_>> {
        self.current().map(|(table, records)| table.view(records))
    }

    pub fn check_state(&self) -> CheckState {
        self.current()
            .map(|(table, records)| table.check_state(records))
            .unwrap_or(CheckState::Unchecked)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.table().is_some_and(|t| t.selection.contains(id))
    }

    pub fn selected_count(&self) -> usize {
        self.table().map_or(0, |t| t.selection.len())
    }

    // ===== dropdowns =====

    pub fn is_dropdown_open(&self, dropdown: Dropdown) -> bool {
        self.dropdown == Some(dropdown)
    }

    /// Opening one dropdown closes the other
    pub fn toggle_dropdown(&mut self, dropdown: Dropdown) {
        self.dropdown = if self.dropdown == Some(dropdown) {
            None
        } else {
            Some(dropdown)
        };
    }

    /// Click anywhere outside an open dropdown
    pub fn close_dropdowns(&mut self) {
        self.dropdown = None;
    }

    // ===== navigation =====

    fn set_view(&mut self, view: View) {
        if self.view == view {
            return;
        }
        tracing::debug!(from = ?self.view, to = ?view, "view change");

        if !matches!(view, View::EditParticipant { .. }) {
            self.edit = None;
        }
        let in_batch = matches!(
            self.view,
            View::Verification
                | View::EditParticipant {
                    return_to: ReturnView::Verification
                }
        );
        let stays_in_batch =
            matches!(view, View::Verification | View::EditParticipant { .. });
        if in_batch && !stays_in_batch {
            self.pending.clear();
            self.cancel_confirm_open = false;
        }
        self.view = view;
        self.dropdown = None;
        if let Some((table, _)) = self.current_mut() {
            table.reset();
        }
    }

    /// Sidebar "Daftar Peserta"
    pub fn show_list(&mut self) {
        self.set_view(View::List);
    }

    /// Sidebar "Pengajuan Baru"
    pub fn show_new_submissions(&mut self) {
        self.set_view(View::NewSubmissions);
    }

    /// Perorangan / Perusahaan tab on the participant list
    pub fn set_tab(&mut self, kind: ParticipantKind) {
        self.dropdown = None;
        if self.active_tab == kind {
            return;
        }
        tracing::debug!(tab = %kind, "tab change");
        self.active_tab = kind;
        self.list.reset();
    }

    pub fn set_submissions_tab(&mut self, kind: ParticipantKind) {
        self.dropdown = None;
        if self.submissions_tab == kind {
            return;
        }
        self.submissions_tab = kind;
        self.submissions.reset();
    }

    // ===== table operations on the current view =====

    /// Result filter of the participant list, shared by both tabs
    pub fn set_result_filter(&mut self, filter: ResultFilter) {
        self.dropdown = None;
        tracing::debug!(filter = %filter, "result filter");
        self.list.set_filter(filter);
    }

    pub fn set_search(&mut self, query: &str) {
        self.dropdown = None;
        if let Some((table, _)) = self.current_mut() {
            table.set_search(query);
        }
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.dropdown = None;
        if let Some((table, _)) = self.current_mut() {
            table.sort_by(key);
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.dropdown = None;
        if let Some((table, records)) = self.current_mut() {
            table.go_to_page(page, records);
        }
    }

    pub fn next_page(&mut self) {
        self.dropdown = None;
        if let Some((table, records)) = self.current_mut() {
            table.next_page(records);
        }
    }

    pub fn previous_page(&mut self) {
        self.dropdown = None;
        if let Some((table, records)) = self.current_mut() {
            table.previous_page(records);
        }
    }

    pub fn toggle_select(&mut self, id: &str) {
        self.dropdown = None;
        if let Some((table, _)) = self.current_mut() {
            table.toggle_row(id);
        }
    }

    pub fn toggle_select_all(&mut self) {
        self.dropdown = None;
        if let Some((table, records)) = self.current_mut() {
            table.toggle_page(records);
        }
    }

    // ===== upload =====

    pub fn upload(&self) -> Option<&UploadForm> {
        self.upload.as_ref()
    }

    pub fn upload_mut(&mut self) -> Option<&mut UploadForm> {
        self.upload.as_mut()
    }

    /// "Tambah Baru" → "Upload Excel (Bulk)"; always starts a fresh form
    pub fn open_upload(&mut self) {
        self.dropdown = None;
        self.upload = Some(UploadForm::new(self.upload_step));
    }

    pub fn close_upload(&mut self) {
        self.upload = None;
    }

    /// Attach a file to the open form, queueing a notification on rejection
    pub fn choose_upload_file(&mut self, name: &str) -> Result<()> {
        let form = self
            .upload
            .as_mut()
            .ok_or(Error::InvalidTransition("upload dialog is not open"))?;
        let outcome = form.choose_file(name);
        if outcome.is_err() {
            self.notify(Notification::FileRejected(name.to_string()));
        }
        outcome
    }

    /// One progress interval; true once the transfer is complete
    pub fn tick_upload(&mut self) -> bool {
        self.upload.as_mut().is_some_and(UploadForm::tick)
    }

    /// Submit the upload form and move to verification of the new batch
    pub fn submit_upload(&mut self) -> Result<()> {
        let form = self
            .upload
            .as_ref()
            .ok_or(Error::InvalidTransition("upload dialog is not open"))?;
        let batch = form.submit()?;

        tracing::info!(
            kind = %batch.kind,
            file = %batch.file_name,
            count = batch.records.len(),
            "batch ready for verification"
        );
        self.upload = None;
        self.set_view(View::List);
        self.active_tab = batch.kind;
        self.list.reset();
        self.pending = batch.records;
        self.verification = TableState::default();
        self.set_view(View::Verification);
        Ok(())
    }

    // ===== verification =====

    pub fn is_cancel_confirm_open(&self) -> bool {
        self.cancel_confirm_open
    }

    /// "Proses Data"
    pub fn confirm_batch(&mut self) -> Result<()> {
        if self.view != View::Verification {
            return Err(Error::InvalidTransition("no batch under verification"));
        }
        tracing::info!(count = self.pending.len(), "batch processed");
        self.set_view(View::List);
        self.notify(Notification::BatchProcessed);
        Ok(())
    }

    /// "Batal" opens the confirmation dialog
    pub fn request_cancel(&mut self) -> Result<()> {
        if self.view != View::Verification {
            return Err(Error::InvalidTransition("no batch under verification"));
        }
        self.cancel_confirm_open = true;
        Ok(())
    }

    /// Keep the batch and close the dialog
    pub fn dismiss_cancel(&mut self) {
        self.cancel_confirm_open = false;
    }

    /// "Batalkan Unggah Data?" confirmed: the batch is discarded
    pub fn confirm_cancel(&mut self) -> Result<()> {
        if !self.cancel_confirm_open {
            return Err(Error::InvalidTransition("cancel was not requested"));
        }
        tracing::info!(count = self.pending.len(), "batch discarded");
        self.set_view(View::List);
        Ok(())
    }

    // ===== new submissions =====

    /// "Proses Semua"
    pub fn process_all_submissions(&mut self) -> Result<()> {
        if self.view != View::NewSubmissions {
            return Err(Error::InvalidTransition("not on the new submissions view"));
        }
        self.set_view(View::List);
        self.notify(Notification::AllProcessed);
        Ok(())
    }

    // ===== edit =====

    /// Open the form for a row of the verification or new-submissions table
    pub fn edit_participant(&mut self, id: &str) -> Result<()> {
        let (return_to, records) = match self.view {
            View::Verification => (ReturnView::Verification, self.pending.as_slice()),
            View::NewSubmissions => (
                ReturnView::NewSubmissions,
                self.new_submissions(self.submissions_tab),
            ),
            _ => return Err(Error::InvalidTransition("rows here cannot be edited")),
        };
        let participant = find_participant(records, id)?.clone();

        self.edit = Some(EditSession::new(participant));
        self.set_view(View::EditParticipant { return_to });
        Ok(())
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn edit_session_mut(&mut self) -> Option<&mut EditSession> {
        self.edit.as_mut()
    }

    fn leave_edit(&mut self) -> Result<()> {
        let View::EditParticipant { return_to } = self.view else {
            return Err(Error::InvalidTransition("no participant is being edited"));
        };
        if let Some(session) = self.edit.take() {
            tracing::debug!(
                id = %session.participant().id,
                changed = session.changed_fields(),
                "edit draft dropped"
            );
        }
        self.set_view(return_to.into());
        Ok(())
    }

    /// "Simpan"; nothing is persisted
    pub fn save_edit(&mut self) -> Result<()> {
        self.leave_edit()?;
        self.notify(Notification::ChangesSaved);
        Ok(())
    }

    pub fn cancel_edit(&mut self) -> Result<()> {
        self.leave_edit()
    }

    // ===== notifications =====

    fn notify(&mut self, notification: Notification) {
        tracing::debug!(message = notification.message(), "notification");
        self.notifications.push_back(notification);
    }

    /// Drain queued notifications, oldest first
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SortOrder;
    use crate::types::InspectionResult;

    fn upload(dashboard: &mut Dashboard, kind: ParticipantKind) {
        dashboard.open_upload();
        let form = dashboard.upload_mut().expect("upload open");
        form.select_kind(kind);
        dashboard.choose_upload_file("data.xlsx").expect("file accepted");
        while !dashboard.tick_upload() {}
        dashboard.submit_upload().expect("submit failed");
    }

    #[test]
    fn test_starts_on_list() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.view(), View::List);
        assert_eq!(dashboard.active_tab(), ParticipantKind::Individual);
        assert!(!dashboard.shows_company());
        assert_eq!(dashboard.pending_count(), 35);
        assert_eq!(dashboard.data_view().expect("list").total(), 20);
    }

    #[test]
    fn test_tab_switch_clears_selection_and_sort() {
        let mut dashboard = Dashboard::new();
        dashboard.sort_by(SortKey::Name);
        dashboard.toggle_select("ind-1");
        dashboard.set_result_filter(ResultFilter::Only(InspectionResult::Normal));

        dashboard.set_tab(ParticipantKind::Corporate);
        let table = dashboard.table().expect("list");
        assert!(table.selection.is_empty());
        assert_eq!(table.query.sort.key, None);
        assert_eq!(dashboard.result_filter(), ResultFilter::Only(InspectionResult::Normal));
        assert!(dashboard.shows_company());
    }

    #[test]
    fn test_same_tab_keeps_state() {
        let mut dashboard = Dashboard::new();
        dashboard.toggle_select("ind-1");
        dashboard.set_tab(ParticipantKind::Individual);
        assert!(dashboard.is_selected("ind-1"));
    }

    #[test]
    fn test_view_switch_clears_selection_and_sort() {
        let mut dashboard = Dashboard::new();
        dashboard.sort_by(SortKey::Date);
        dashboard.toggle_select("ind-2");

        dashboard.show_new_submissions();
        dashboard.show_list();
        let table = dashboard.table().expect("list");
        assert!(table.selection.is_empty());
        assert_eq!(table.query.sort.key, None);
    }

    #[test]
    fn test_sort_toggle_through_dashboard() {
        let mut dashboard = Dashboard::new();
        dashboard.sort_by(SortKey::Name);
        dashboard.sort_by(SortKey::Name);
        let sort = dashboard.table().expect("list").query.sort;
        assert_eq!(sort.key, Some(SortKey::Name));
        assert_eq!(sort.order, SortOrder::Desc);
    }

    #[test]
    fn test_upload_flow_to_verification() {
        let mut dashboard = Dashboard::new();
        upload(&mut dashboard, ParticipantKind::Corporate);

        assert_eq!(dashboard.view(), View::Verification);
        assert_eq!(dashboard.active_tab(), ParticipantKind::Corporate);
        assert!(dashboard.upload().is_none());
        assert_eq!(dashboard.pending().len(), mock::UPLOAD_BATCH_SIZE);
        assert_eq!(dashboard.data_view().expect("verification").total_pages, 2);
        assert!(dashboard.shows_company());
    }

    #[test]
    fn test_rejected_file_notifies() {
        let mut dashboard = Dashboard::new();
        dashboard.open_upload();
        assert!(dashboard.choose_upload_file("data.csv").is_err());

        let notes = dashboard.take_notifications();
        assert_eq!(notes, vec![Notification::FileRejected("data.csv".to_string())]);
        assert_eq!(notes[0].message(), upload::REJECT_MESSAGE);
        assert!(dashboard.take_notifications().is_empty());
    }

    #[test]
    fn test_reopened_upload_is_fresh() {
        let mut dashboard = Dashboard::new();
        dashboard.open_upload();
        dashboard.choose_upload_file("data.xlsx").expect("file accepted");
        dashboard.close_upload();
        dashboard.open_upload();
        assert_eq!(dashboard.upload().and_then(|f| f.file_name()), None);
    }

    #[test]
    fn test_confirm_batch() {
        let mut dashboard = Dashboard::new();
        upload(&mut dashboard, ParticipantKind::Individual);
        dashboard.confirm_batch().expect("confirm failed");

        assert_eq!(dashboard.view(), View::List);
        assert!(dashboard.pending().is_empty());
        assert_eq!(dashboard.take_notifications(), vec![Notification::BatchProcessed]);
    }

    #[test]
    fn test_cancel_requires_confirmation() {
        let mut dashboard = Dashboard::new();
        upload(&mut dashboard, ParticipantKind::Individual);

        assert!(dashboard.confirm_cancel().is_err());
        dashboard.request_cancel().expect("request failed");
        dashboard.dismiss_cancel();
        assert_eq!(dashboard.view(), View::Verification);
        assert_eq!(dashboard.pending().len(), mock::UPLOAD_BATCH_SIZE);

        dashboard.request_cancel().expect("request failed");
        dashboard.confirm_cancel().expect("cancel failed");
        assert_eq!(dashboard.view(), View::List);
        assert!(dashboard.pending().is_empty());
        assert!(dashboard.take_notifications().is_empty());
    }

    #[test]
    fn test_edit_returns_to_verification() {
        let mut dashboard = Dashboard::new();
        upload(&mut dashboard, ParticipantKind::Individual);
        dashboard.toggle_select("new-1");

        dashboard.edit_participant("new-3").expect("edit failed");
        assert_eq!(
            dashboard.view(),
            View::EditParticipant {
                return_to: ReturnView::Verification
            }
        );
        assert_eq!(dashboard.view().sidebar_view(), View::Verification);
        assert!(dashboard.data_view().is_none());
        let session = dashboard.edit_session_mut().expect("session");
        assert_eq!(session.participant().id, "new-3");
        session.set_value("spirometry.2.1", "normal").expect("set failed");

        dashboard.save_edit().expect("save failed");
        assert_eq!(dashboard.view(), View::Verification);
        assert!(dashboard.edit_session().is_none());
        // the batch survives the round trip
        assert_eq!(dashboard.pending().len(), mock::UPLOAD_BATCH_SIZE);
        assert_eq!(dashboard.take_notifications(), vec![Notification::ChangesSaved]);
    }

    #[test]
    fn test_edit_returns_to_new_submissions() {
        let mut dashboard = Dashboard::new();
        dashboard.show_new_submissions();
        dashboard.set_submissions_tab(ParticipantKind::Corporate);
        dashboard.edit_participant("corp-4").expect("edit failed");

        dashboard.cancel_edit().expect("cancel failed");
        assert_eq!(dashboard.view(), View::NewSubmissions);
        assert!(dashboard.take_notifications().is_empty());
    }

    #[test]
    fn test_edit_unknown_or_from_list() {
        let mut dashboard = Dashboard::new();
        assert!(matches!(
            dashboard.edit_participant("ind-1"),
            Err(Error::InvalidTransition(_))
        ));
        dashboard.show_new_submissions();
        assert!(matches!(
            dashboard.edit_participant("ind-11"),
            Err(Error::ParticipantNotFound(_))
        ));
        assert!(dashboard.save_edit().is_err());
    }

    #[test]
    fn test_process_all_submissions() {
        let mut dashboard = Dashboard::new();
        assert!(dashboard.process_all_submissions().is_err());
        dashboard.show_new_submissions();
        assert_eq!(dashboard.data_view().expect("submissions").total(), 10);
        dashboard.set_submissions_tab(ParticipantKind::Corporate);
        assert_eq!(dashboard.data_view().expect("submissions").total(), 25);

        dashboard.process_all_submissions().expect("process failed");
        assert_eq!(dashboard.view(), View::List);
        assert_eq!(dashboard.take_notifications(), vec![Notification::AllProcessed]);
    }

    #[test]
    fn test_dropdowns_are_exclusive() {
        let mut dashboard = Dashboard::new();
        dashboard.toggle_dropdown(Dropdown::ResultFilter);
        assert!(dashboard.is_dropdown_open(Dropdown::ResultFilter));
        dashboard.toggle_dropdown(Dropdown::AddNew);
        assert!(!dashboard.is_dropdown_open(Dropdown::ResultFilter));
        assert!(dashboard.is_dropdown_open(Dropdown::AddNew));

        dashboard.open_upload();
        assert!(!dashboard.is_dropdown_open(Dropdown::AddNew));

        dashboard.toggle_dropdown(Dropdown::ResultFilter);
        dashboard.set_result_filter(ResultFilter::All);
        assert!(!dashboard.is_dropdown_open(Dropdown::ResultFilter));
    }

    #[test]
    fn test_table_events_close_dropdown() {
        let mut dashboard = Dashboard::new();
        dashboard.toggle_dropdown(Dropdown::ResultFilter);
        dashboard.toggle_select("ind-1");
        assert!(!dashboard.is_dropdown_open(Dropdown::ResultFilter));

        dashboard.toggle_dropdown(Dropdown::AddNew);
        dashboard.next_page();
        assert!(!dashboard.is_dropdown_open(Dropdown::AddNew));

        dashboard.toggle_dropdown(Dropdown::ResultFilter);
        dashboard.set_search("budi");
        assert!(!dashboard.is_dropdown_open(Dropdown::ResultFilter));

        dashboard.toggle_dropdown(Dropdown::AddNew);
        dashboard.close_dropdowns();
        assert!(!dashboard.is_dropdown_open(Dropdown::AddNew));
    }

    #[test]
    fn test_select_all_on_second_page() {
        let mut dashboard = Dashboard::new();
        dashboard.set_tab(ParticipantKind::Corporate);
        dashboard.toggle_select("corp-1");
        dashboard.next_page();
        dashboard.toggle_select_all();
        assert_eq!(dashboard.check_state(), CheckState::Checked);
        assert_eq!(dashboard.selected_count(), 11);

        dashboard.previous_page();
        assert_eq!(dashboard.check_state(), CheckState::Indeterminate);
    }

    #[test]
    fn test_sidebar_leaving_verification_discards_batch() {
        let mut dashboard = Dashboard::new();
        upload(&mut dashboard, ParticipantKind::Individual);
        dashboard.show_list();
        assert!(dashboard.pending().is_empty());
    }

    #[test]
    fn test_sidebar_leaving_edit_discards_batch() {
        let mut dashboard = Dashboard::new();
        upload(&mut dashboard, ParticipantKind::Individual);
        dashboard.edit_participant("new-1").expect("edit failed");
        dashboard.show_list();
        assert_eq!(dashboard.view(), View::List);
        assert!(dashboard.pending().is_empty());
        assert!(dashboard.edit_session().is_none());

        upload(&mut dashboard, ParticipantKind::Corporate);
        dashboard.edit_participant("new-1").expect("edit failed");
        dashboard.show_new_submissions();
        assert!(dashboard.pending().is_empty());
    }
}
