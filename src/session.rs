//! Interactive dashboard session
//!
//! Every turn prints the current view and offers the actions that view
//! supports as a dialoguer menu. All state lives in [`Dashboard`]; this
//! module only turns menu picks into method calls.

use crate::commands::{print_current, print_notifications, upload_file_name};
use crate::config::Config;
use crate::error::Result;
use crate::{progress, render};
use dialoguer::{Confirm, Input, Select};
use mcu_dashboard_common::{
    visible_columns, Dashboard, FieldKind, FormField, FormTab, ParticipantKind, ResultFilter,
    SortKey, View,
};
use std::path::PathBuf;
use std::time::Duration;

/// One menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowList,
    ShowNewSubmissions,
    SwitchTab(ParticipantKind),
    FilterResult,
    Search,
    Sort,
    NextPage,
    PreviousPage,
    GoToPage,
    ToggleRow,
    ToggleAll,
    Upload,
    ProcessBatch,
    CancelBatch,
    ProcessAll,
    Edit,
    NextFormTab,
    PreviousFormTab,
    PickFormTab,
    EditField,
    ToggleSection,
    Save,
    CancelEdit,
    Quit,
}

impl Action {
    pub fn label(&self) -> String {
        match self {
            Action::ShowList => "Sidebar: Daftar Peserta".to_string(),
            Action::ShowNewSubmissions => "Sidebar: Pengajuan Baru".to_string(),
            Action::SwitchTab(kind) => format!("Tab {}", kind.label()),
            Action::FilterResult => "Filter hasil".to_string(),
            Action::Search => "Cari".to_string(),
            Action::Sort => "Urutkan".to_string(),
            Action::NextPage => "Halaman berikutnya".to_string(),
            Action::PreviousPage => "Halaman sebelumnya".to_string(),
            Action::GoToPage => "Ke halaman...".to_string(),
            Action::ToggleRow => "Pilih baris".to_string(),
            Action::ToggleAll => "Pilih semua di halaman ini".to_string(),
            Action::Upload => "Tambah Baru: Upload Excel (Bulk)".to_string(),
            Action::ProcessBatch => "Proses Data".to_string(),
            Action::CancelBatch => "Batal".to_string(),
            Action::ProcessAll => "Proses Semua".to_string(),
            Action::Edit => "Edit peserta".to_string(),
            Action::NextFormTab => "Tab berikutnya".to_string(),
            Action::PreviousFormTab => "Tab sebelumnya".to_string(),
            Action::PickFormTab => "Pilih tab...".to_string(),
            Action::EditField => "Ubah isian".to_string(),
            Action::ToggleSection => "Buka/tutup bagian".to_string(),
            Action::Save => "Simpan".to_string(),
            Action::CancelEdit => "Batal".to_string(),
            Action::Quit => "Keluar".to_string(),
        }
    }
}

fn table_actions(dashboard: &Dashboard, actions: &mut Vec<Action>) {
    actions.extend([Action::Search, Action::Sort]);
    if let Some(view) = dashboard.data_view() {
        if view.has_next() {
            actions.push(Action::NextPage);
        }
        if view.has_previous() {
            actions.push(Action::PreviousPage);
        }
        if view.total_pages > 1 {
            actions.push(Action::GoToPage);
        }
    }
}

/// Menu for the current view, sidebar entries first
pub fn available_actions(dashboard: &Dashboard) -> Vec<Action> {
    let mut actions = Vec::new();
    match dashboard.view() {
        View::List => {
            actions.push(Action::ShowNewSubmissions);
            let other = match dashboard.active_tab() {
                ParticipantKind::Individual => ParticipantKind::Corporate,
                ParticipantKind::Corporate => ParticipantKind::Individual,
            };
            actions.push(Action::SwitchTab(other));
            actions.push(Action::FilterResult);
            table_actions(dashboard, &mut actions);
            actions.extend([Action::ToggleRow, Action::ToggleAll, Action::Upload]);
        }
        View::Verification => {
            actions.extend([Action::ShowList, Action::ShowNewSubmissions]);
            table_actions(dashboard, &mut actions);
            actions.extend([
                Action::ToggleRow,
                Action::ToggleAll,
                Action::Edit,
                Action::ProcessBatch,
                Action::CancelBatch,
            ]);
        }
        View::NewSubmissions => {
            actions.push(Action::ShowList);
            let other = match dashboard.submissions_tab() {
                ParticipantKind::Individual => ParticipantKind::Corporate,
                ParticipantKind::Corporate => ParticipantKind::Individual,
            };
            actions.push(Action::SwitchTab(other));
            table_actions(dashboard, &mut actions);
            actions.extend([
                Action::ToggleRow,
                Action::ToggleAll,
                Action::Edit,
                Action::ProcessAll,
            ]);
        }
        View::EditParticipant { .. } => {
            actions.extend([Action::ShowList, Action::ShowNewSubmissions]);
            if let Some(session) = dashboard.edit_session() {
                if session.tab().next().is_some() {
                    actions.push(Action::NextFormTab);
                }
                if session.tab().previous().is_some() {
                    actions.push(Action::PreviousFormTab);
                }
            }
            actions.extend([
                Action::PickFormTab,
                Action::EditField,
                Action::ToggleSection,
                Action::Save,
                Action::CancelEdit,
            ]);
        }
    }
    actions.push(Action::Quit);
    actions
}

/// Apply an action that needs no further input; false if it needs a prompt
pub fn apply_simple(dashboard: &mut Dashboard, action: Action) -> Result<bool> {
    match action {
        Action::ShowList => dashboard.show_list(),
        Action::ShowNewSubmissions => dashboard.show_new_submissions(),
        Action::SwitchTab(kind) => match dashboard.view() {
            View::NewSubmissions => dashboard.set_submissions_tab(kind),
            _ => dashboard.set_tab(kind),
        },
        Action::NextPage => dashboard.next_page(),
        Action::PreviousPage => dashboard.previous_page(),
        Action::ToggleAll => dashboard.toggle_select_all(),
        Action::ProcessBatch => dashboard.confirm_batch()?,
        Action::ProcessAll => dashboard.process_all_submissions()?,
        Action::NextFormTab | Action::PreviousFormTab => {
            if let Some(session) = dashboard.edit_session_mut() {
                let tab = match action {
                    Action::NextFormTab => session.tab().next(),
                    _ => session.tab().previous(),
                };
                if let Some(tab) = tab {
                    session.set_tab(tab);
                }
            }
        }
        Action::Save => dashboard.save_edit()?,
        Action::CancelEdit => dashboard.cancel_edit()?,
        _ => return Ok(false),
    }
    Ok(true)
}

fn print_view(dashboard: &Dashboard) {
    println!();
    match dashboard.view() {
        View::EditParticipant { .. } => {
            let Some(session) = dashboard.edit_session() else {
                return;
            };
            let participant = session.participant();
            println!(
                "📋 {} · {} · {}",
                dashboard.view().title(),
                participant.name,
                participant.mcu_no
            );
            let tabs: Vec<String> = FormTab::ALL
                .iter()
                .map(|t| {
                    if *t == session.tab() {
                        format!("[{}]", t.label())
                    } else {
                        t.label().to_string()
                    }
                })
                .collect();
            println!("{}", tabs.join(" | "));
            if session.is_dirty() {
                println!("{} isian diubah", session.changed_fields());
            }
            render::print_sections(&session.sections(), Some(session));
        }
        View::List | View::Verification | View::NewSubmissions => print_current(dashboard, true),
    }
}

fn prompt_text(prompt: &str, initial: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn prompt_result_filter(dashboard: &mut Dashboard) -> Result<()> {
    let options = ResultFilter::options();
    let labels: Vec<&str> = options.iter().map(|f| f.label()).collect();
    let current = options
        .iter()
        .position(|f| *f == dashboard.result_filter())
        .unwrap_or(0);
    let choice = Select::new()
        .with_prompt("Hasil Pemeriksaan")
        .items(&labels)
        .default(current)
        .interact()?;
    dashboard.set_result_filter(options[choice]);
    Ok(())
}

fn prompt_sort(dashboard: &mut Dashboard) -> Result<()> {
    let keys: Vec<(SortKey, &str)> = visible_columns(dashboard.shows_company())
        .into_iter()
        .filter_map(|c| c.sort_key().map(|k| (k, c.header())))
        .collect();
    let labels: Vec<&str> = keys.iter().map(|(_, header)| *header).collect();
    let choice = Select::new()
        .with_prompt("Urutkan berdasarkan")
        .items(&labels)
        .default(0)
        .interact()?;
    dashboard.sort_by(keys[choice].0);
    Ok(())
}

fn prompt_page(dashboard: &mut Dashboard) -> Result<()> {
    let page: usize = Input::new().with_prompt("Halaman").interact_text()?;
    dashboard.go_to_page(page);
    Ok(())
}

async fn prompt_upload(dashboard: &mut Dashboard, config: &Config) -> Result<()> {
    dashboard.open_upload();

    let kinds = ParticipantKind::ALL;
    let labels: Vec<&str> = kinds.iter().map(|k| k.label()).collect();
    let choice = Select::new()
        .with_prompt("Tipe Peserta")
        .items(&labels)
        .default(0)
        .interact()?;
    if let Some(form) = dashboard.upload_mut() {
        form.select_kind(kinds[choice]);
    }

    let path: String = Input::new()
        .with_prompt("File Excel (.xls/.xlsx)")
        .interact_text()?;
    let name = match upload_file_name(&PathBuf::from(path.trim())) {
        Ok(name) => name,
        Err(e) => {
            dashboard.close_upload();
            return Err(e);
        }
    };
    if dashboard.choose_upload_file(&name).is_err() {
        // the rejection notification is shown by the loop
        dashboard.close_upload();
        return Ok(());
    }

    progress::run_upload_progress(dashboard, Duration::from_millis(config.upload_tick_ms)).await;
    let submit = Confirm::new()
        .with_prompt("Upload Data?")
        .default(true)
        .interact()?;
    if submit {
        dashboard.submit_upload()?;
    } else {
        dashboard.close_upload();
    }
    Ok(())
}

fn prompt_cancel_batch(dashboard: &mut Dashboard) -> Result<()> {
    dashboard.request_cancel()?;
    let discard = Confirm::new()
        .with_prompt("Batalkan Unggah Data? Data yang telah diunggah akan dihapus")
        .default(false)
        .interact()?;
    if discard {
        dashboard.confirm_cancel()?;
    } else {
        dashboard.dismiss_cancel();
    }
    Ok(())
}

fn prompt_row_id(dashboard: &Dashboard, prompt: &str) -> Result<Option<String>> {
    let Some(view) = dashboard.data_view() else {
        return Ok(None);
    };
    let rows = view.page_rows();
    if rows.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = rows
        .iter()
        .map(|p| {
            let mark = if dashboard.is_selected(&p.id) { "[x]" } else { "[ ]" };
            format!("{} {} · {} · {}", mark, p.id, p.name, p.mcu_no)
        })
        .collect();
    let choice = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(rows[choice].id.clone()))
}

fn prompt_form_tab(dashboard: &mut Dashboard) -> Result<()> {
    let Some(session) = dashboard.edit_session_mut() else {
        return Ok(());
    };
    let labels: Vec<&str> = FormTab::ALL.iter().map(|t| t.label()).collect();
    let choice = Select::new()
        .with_prompt("Tab")
        .items(&labels)
        .default(session.tab().index())
        .interact()?;
    session.set_tab(FormTab::ALL[choice]);
    Ok(())
}

fn editable_fields(dashboard: &Dashboard) -> Vec<FormField> {
    let Some(session) = dashboard.edit_session() else {
        return Vec::new();
    };
    session
        .sections()
        .into_iter()
        .filter(|s| !session.is_collapsed(&s.id))
        .flat_map(|s| s.fields)
        .filter(|f| f.kind.is_editable())
        .collect()
}

fn prompt_field(dashboard: &mut Dashboard) -> Result<()> {
    let fields = editable_fields(dashboard);
    let Some(session) = dashboard.edit_session_mut() else {
        return Ok(());
    };
    if fields.is_empty() {
        println!("Tidak ada isian yang bisa diubah");
        return Ok(());
    }

    let labels: Vec<String> = fields
        .iter()
        .map(|f| format!("{} {}: {}", f.id, f.label, session.value(f)))
        .collect();
    let choice = Select::new()
        .with_prompt("Isian")
        .items(&labels)
        .default(0)
        .interact()?;
    let field = &fields[choice];
    let current = session.value(field);

    let value = match &field.kind {
        FieldKind::Choice { options } | FieldKind::Question { options, .. } => {
            let selected = options.iter().position(|o| *o == current).unwrap_or(0);
            let pick = Select::new()
                .with_prompt(field.label)
                .items(&options[..])
                .default(selected)
                .interact()?;
            options[pick].to_string()
        }
        _ => prompt_text(field.label, &current)?,
    };
    session.set_value(&field.id, value)?;
    Ok(())
}

fn prompt_section(dashboard: &mut Dashboard) -> Result<()> {
    let Some(session) = dashboard.edit_session_mut() else {
        return Ok(());
    };
    let sections = session.sections();
    let labels: Vec<String> = sections
        .iter()
        .map(|s| {
            let marker = if session.is_collapsed(&s.id) { "▸" } else { "▾" };
            format!("{} {}", marker, s.title)
        })
        .collect();
    let choice = Select::new()
        .with_prompt("Bagian")
        .items(&labels)
        .default(0)
        .interact()?;
    session.toggle_section(&sections[choice].id);
    Ok(())
}

async fn apply_prompted(dashboard: &mut Dashboard, config: &Config, action: Action) -> Result<()> {
    match action {
        Action::FilterResult => prompt_result_filter(dashboard)?,
        Action::Search => {
            let current = dashboard
                .table()
                .map(|t| t.query.search.clone())
                .unwrap_or_default();
            let query = prompt_text("Cari nama / No MCU / User ID", &current)?;
            dashboard.set_search(&query);
        }
        Action::Sort => prompt_sort(dashboard)?,
        Action::GoToPage => prompt_page(dashboard)?,
        Action::ToggleRow => {
            if let Some(id) = prompt_row_id(dashboard, "Pilih baris")? {
                dashboard.toggle_select(&id);
            }
        }
        Action::Upload => prompt_upload(dashboard, config).await?,
        Action::CancelBatch => prompt_cancel_batch(dashboard)?,
        Action::Edit => {
            if let Some(id) = prompt_row_id(dashboard, "Edit peserta")? {
                dashboard.edit_participant(&id)?;
            }
        }
        Action::PickFormTab => prompt_form_tab(dashboard)?,
        Action::EditField => prompt_field(dashboard)?,
        Action::ToggleSection => prompt_section(dashboard)?,
        _ => {}
    }
    Ok(())
}

/// Run the menu loop until "Keluar"
pub async fn run_session(config: &Config) -> Result<()> {
    println!("🩺 mcu - Dashboard MCU\n");

    let mut dashboard = Dashboard::new().with_upload_step(config.upload_step_percent);
    dashboard.set_tab(config.default_tab);
    dashboard.set_result_filter(config.result_filter()?);

    loop {
        print_view(&dashboard);

        let actions = available_actions(&dashboard);
        let labels: Vec<String> = actions.iter().map(Action::label).collect();
        let choice = Select::new()
            .with_prompt(dashboard.view().title())
            .items(&labels)
            .default(0)
            .interact()?;
        let action = actions[choice];
        if action == Action::Quit {
            break;
        }

        tracing::debug!(?action, "session action");
        let outcome = match apply_simple(&mut dashboard, action) {
            Ok(true) => Ok(()),
            Ok(false) => apply_prompted(&mut dashboard, config, action).await,
            Err(e) => Err(e),
        };
        // a failed action keeps the session alive
        if let Err(e) = outcome {
            eprintln!("✖ {}", e);
        }
        print_notifications(&mut dashboard);
    }

    println!("\n✅ Selesai");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_actions() {
        let dashboard = Dashboard::new();
        let actions = available_actions(&dashboard);
        assert!(actions.contains(&Action::SwitchTab(ParticipantKind::Corporate)));
        assert!(actions.contains(&Action::Upload));
        assert!(actions.contains(&Action::NextPage));
        assert!(!actions.contains(&Action::PreviousPage));
        assert!(actions.contains(&Action::ToggleRow));
        assert!(actions.contains(&Action::ToggleAll));
        assert!(!actions.contains(&Action::Edit));
        assert_eq!(actions.last(), Some(&Action::Quit));
    }

    #[test]
    fn test_select_all_on_list() {
        let mut dashboard = Dashboard::new();
        assert!(apply_simple(&mut dashboard, Action::ToggleAll).expect("select all"));
        assert_eq!(dashboard.selected_count(), 10);

        apply_simple(&mut dashboard, Action::SwitchTab(ParticipantKind::Corporate))
            .expect("switch");
        assert_eq!(dashboard.selected_count(), 0);
    }

    #[test]
    fn test_sidebar_from_edit_drops_batch() {
        let mut dashboard = Dashboard::new();
        dashboard.open_upload();
        dashboard.choose_upload_file("peserta.xlsx").expect("file accepted");
        while !dashboard.tick_upload() {}
        dashboard.submit_upload().expect("submit");
        dashboard.edit_participant("new-2").expect("edit");

        let actions = available_actions(&dashboard);
        assert!(actions.contains(&Action::ShowList));
        apply_simple(&mut dashboard, Action::ShowList).expect("navigate");
        assert_eq!(dashboard.view(), View::List);
        assert!(dashboard.pending().is_empty());
    }

    #[test]
    fn test_submissions_actions_and_process_all() {
        let mut dashboard = Dashboard::new();
        assert!(apply_simple(&mut dashboard, Action::ShowNewSubmissions).expect("navigate"));
        let actions = available_actions(&dashboard);
        assert!(actions.contains(&Action::ProcessAll));
        assert!(actions.contains(&Action::Edit));

        assert!(apply_simple(&mut dashboard, Action::ProcessAll).expect("process"));
        assert_eq!(dashboard.view(), View::List);
        assert_eq!(dashboard.take_notifications().len(), 1);
    }

    #[test]
    fn test_switch_tab_follows_view() {
        let mut dashboard = Dashboard::new();
        dashboard.show_new_submissions();
        apply_simple(&mut dashboard, Action::SwitchTab(ParticipantKind::Corporate))
            .expect("switch");
        assert_eq!(dashboard.submissions_tab(), ParticipantKind::Corporate);
        assert_eq!(dashboard.active_tab(), ParticipantKind::Individual);
    }

    #[test]
    fn test_form_tab_actions() {
        let mut dashboard = Dashboard::new();
        dashboard.show_new_submissions();
        dashboard.edit_participant("ind-1").expect("edit");

        let actions = available_actions(&dashboard);
        assert!(actions.contains(&Action::NextFormTab));
        assert!(!actions.contains(&Action::PreviousFormTab));

        apply_simple(&mut dashboard, Action::NextFormTab).expect("next tab");
        let session = dashboard.edit_session().expect("session");
        assert_eq!(session.tab(), FormTab::Summary);

        apply_simple(&mut dashboard, Action::Save).expect("save");
        assert_eq!(dashboard.view(), View::NewSubmissions);
    }

    #[test]
    fn test_prompted_actions_are_not_simple() {
        let mut dashboard = Dashboard::new();
        assert!(!apply_simple(&mut dashboard, Action::Search).expect("search"));
        assert!(!apply_simple(&mut dashboard, Action::Upload).expect("upload"));
    }
}
