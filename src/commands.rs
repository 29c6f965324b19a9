//! One-shot subcommands

use crate::config::Config;
use crate::error::{McuError, Result};
use crate::logging::LogFormat;
use crate::{progress, render};
use dialoguer::{Confirm, Select};
use mcu_dashboard_common::mock::{participants_for, synthesize_upload_batch};
use mcu_dashboard_common::{
    find_participant, Dashboard, FormSection, FormTab, Participant, ParticipantKind, ResultFilter,
    SortKey, View,
};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// Heading for the table of the current view
pub fn view_title(dashboard: &Dashboard) -> String {
    match dashboard.view() {
        View::List => format!(
            "{} · {} · {}",
            View::List.title(),
            dashboard.active_tab().label(),
            dashboard.result_filter().button_label()
        ),
        View::Verification => format!(
            "{} · {} · {} data",
            View::Verification.title(),
            dashboard.active_tab().label(),
            dashboard.pending().len()
        ),
        View::NewSubmissions => format!(
            "{} · {} · {} menunggu",
            View::NewSubmissions.title(),
            dashboard.submissions_tab().label(),
            dashboard.pending_count()
        ),
        view @ View::EditParticipant { .. } => view.title().to_string(),
    }
}

/// Print the table of the current view, if it has one
pub fn print_current(dashboard: &Dashboard, with_selection: bool) {
    let (Some(table), Some(view)) = (dashboard.table(), dashboard.data_view()) else {
        return;
    };
    render::print_data_view(
        &view_title(dashboard),
        &view,
        dashboard.shows_company(),
        table.query.sort,
        with_selection.then_some(&table.selection),
    );
}

pub fn print_notifications(dashboard: &mut Dashboard) {
    for notification in dashboard.take_notifications() {
        println!("🔔 {}", notification.message());
    }
}

pub struct ListArgs {
    pub tab: Option<ParticipantKind>,
    pub result: Option<ResultFilter>,
    pub search: Option<String>,
    pub sort: Option<SortKey>,
    pub desc: bool,
    pub page: usize,
}

/// Dashboard in the list view with the given options applied
pub fn list_dashboard(config: &Config, args: &ListArgs) -> Result<Dashboard> {
    let mut dashboard = Dashboard::new();
    dashboard.set_tab(args.tab.unwrap_or(config.default_tab));

    let filter = match args.result {
        Some(filter) => filter,
        None => config.result_filter()?,
    };
    dashboard.set_result_filter(filter);

    if let Some(query) = &args.search {
        dashboard.set_search(query);
    }
    if let Some(key) = args.sort {
        dashboard.sort_by(key);
        if args.desc {
            dashboard.sort_by(key);
        }
    }
    dashboard.go_to_page(args.page);
    Ok(dashboard)
}

pub fn run_list(config: &Config, args: &ListArgs) -> Result<()> {
    let dashboard = list_dashboard(config, args)?;
    print_current(&dashboard, false);
    Ok(())
}

pub fn run_submissions(tab: ParticipantKind, page: usize) -> Result<()> {
    let mut dashboard = Dashboard::new();
    dashboard.show_new_submissions();
    dashboard.set_submissions_tab(tab);
    dashboard.go_to_page(page);
    print_current(&dashboard, false);
    Ok(())
}

/// Name of the picked file; the file itself must exist
pub fn upload_file_name(file: &Path) -> Result<String> {
    if !file.is_file() {
        return Err(McuError::InvalidArgument(format!(
            "file not found: {}",
            file.display()
        )));
    }
    file.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| McuError::InvalidArgument(format!("not a file: {}", file.display())))
}

/// Upload, verify, then process or discard the batch
pub async fn run_upload(config: &Config, file: &Path, kind: ParticipantKind, yes: bool) -> Result<()> {
    let mut dashboard = upload_batch(config, file, kind, yes).await?;
    print_notifications(&mut dashboard);
    Ok(())
}

/// Steps of `run_upload`; notifications stay queued on the returned dashboard
pub async fn upload_batch(
    config: &Config,
    file: &Path,
    kind: ParticipantKind,
    yes: bool,
) -> Result<Dashboard> {
    println!("📤 mcu - Upload Excel (Bulk)\n");

    let name = upload_file_name(file)?;
    let mut dashboard = Dashboard::new().with_upload_step(config.upload_step_percent);
    dashboard.open_upload();
    if let Some(form) = dashboard.upload_mut() {
        form.select_kind(kind);
    }

    println!("[1/3] Memeriksa file...");
    if let Err(e) = dashboard.choose_upload_file(&name) {
        for notification in dashboard.take_notifications() {
            eprintln!("✖ {}", notification.message());
        }
        return Err(e.into());
    }
    println!("✔ {} ({})\n", name, kind.label());

    println!("[2/3] Mengunggah...");
    progress::run_upload_progress(&mut dashboard, Duration::from_millis(config.upload_tick_ms)).await;
    dashboard.submit_upload()?;
    println!();

    println!("[3/3] Verifikasi data\n");
    print_current(&dashboard, false);
    println!();

    if yes {
        dashboard.confirm_batch()?;
    } else {
        verify_interactive(&mut dashboard)?;
    }
    Ok(dashboard)
}

/// "Proses Data" or "Batal" with the cancel confirmation
fn verify_interactive(dashboard: &mut Dashboard) -> Result<()> {
    loop {
        let choice = Select::new()
            .with_prompt("Verifikasi")
            .items(&["Proses Data", "Batal"])
            .default(0)
            .interact()?;
        if choice == 0 {
            dashboard.confirm_batch()?;
            return Ok(());
        }

        dashboard.request_cancel()?;
        let discard = Confirm::new()
            .with_prompt("Batalkan Unggah Data? Data yang telah diunggah akan dihapus")
            .default(false)
            .interact()?;
        if discard {
            dashboard.confirm_cancel()?;
            println!("Unggahan dibatalkan");
            return Ok(());
        }
        dashboard.dismiss_cancel();
    }
}

/// Participant by id across both lists; "new-N" ids come from an upload batch
pub fn lookup_participant(id: &str, kind: ParticipantKind) -> Result<Participant> {
    let records = if id.starts_with("new-") {
        synthesize_upload_batch(kind)
    } else if id.starts_with("corp-") {
        participants_for(ParticipantKind::Corporate)
    } else {
        participants_for(ParticipantKind::Individual)
    };
    Ok(find_participant(&records, id)?.clone())
}

#[derive(Serialize)]
pub struct FormTabDump {
    pub tab: FormTab,
    pub label: &'static str,
    pub sections: Vec<FormSection>,
}

#[derive(Serialize)]
pub struct FormDump {
    pub participant: Participant,
    pub tabs: Vec<FormTabDump>,
}

/// Form layout with prefilled values for one tab or all of them
pub fn form_dump(id: &str, tab: Option<FormTab>, batch_kind: ParticipantKind) -> Result<FormDump> {
    let participant = lookup_participant(id, batch_kind)?;
    let tabs = match tab {
        Some(tab) => vec![tab],
        None => FormTab::ALL.to_vec(),
    };
    let tabs = tabs
        .into_iter()
        .map(|tab| FormTabDump {
            tab,
            label: tab.label(),
            sections: tab.sections(&participant),
        })
        .collect();
    Ok(FormDump { participant, tabs })
}

pub fn run_form(id: &str, tab: Option<FormTab>, batch_kind: ParticipantKind, json: bool) -> Result<()> {
    let dump = form_dump(id, tab, batch_kind)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let participant = &dump.participant;
    println!("📋 Edit Data Peserta");
    println!(
        "{} · {} · {} · {}",
        participant.name,
        participant.mcu_no,
        participant.gender.label(),
        participant.result
    );
    for tab in &dump.tabs {
        println!("\n== {} ==", tab.label);
        render::print_sections(&tab.sections, None);
    }
    Ok(())
}

pub struct ConfigArgs {
    pub show: bool,
    pub set_default_tab: Option<ParticipantKind>,
    pub set_default_result: Option<ResultFilter>,
    pub set_log_format: Option<LogFormat>,
}

/// Apply setting changes; returns true when something was changed
pub fn apply_config_changes(config: &mut Config, args: &ConfigArgs) -> bool {
    let mut changed = false;
    if let Some(tab) = args.set_default_tab {
        config.set_default_tab(tab);
        println!("✔ Tab bawaan: {}", tab.label());
        changed = true;
    }
    if let Some(filter) = args.set_default_result {
        config.default_result_filter = filter.label().to_string();
        println!("✔ Filter hasil bawaan: {}", filter.label());
        changed = true;
    }
    if let Some(format) = args.set_log_format {
        config.set_log_format(format);
        println!("✔ Format log: {}", format);
        changed = true;
    }
    changed
}

pub fn run_config(mut config: Config, args: &ConfigArgs) -> Result<()> {
    if apply_config_changes(&mut config, args) {
        config.save()?;
    }

    if args.show {
        println!("Pengaturan:");
        println!("  File: {}", Config::config_path()?.display());
        println!("  Tab bawaan: {}", config.default_tab.label());
        println!("  Filter hasil bawaan: {}", config.default_result_filter);
        println!("  Interval upload: {} ms", config.upload_tick_ms);
        println!("  Langkah upload: {}%", config.upload_step_percent);
        println!("  Format log: {}", config.log_format);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcu_dashboard_common::InspectionResult;

    fn args() -> ListArgs {
        ListArgs {
            tab: None,
            result: None,
            search: None,
            sort: None,
            desc: false,
            page: 1,
        }
    }

    #[test]
    fn test_list_dashboard_defaults() {
        let dashboard = list_dashboard(&Config::default(), &args()).expect("list failed");
        assert_eq!(dashboard.active_tab(), ParticipantKind::Individual);
        assert_eq!(dashboard.data_view().expect("view").total(), 20);
    }

    #[test]
    fn test_list_dashboard_uses_config_defaults() {
        let config = Config {
            default_tab: ParticipantKind::Corporate,
            default_result_filter: "Abnormal".to_string(),
            ..Config::default()
        };
        let dashboard = list_dashboard(&config, &args()).expect("list failed");
        let view = dashboard.data_view().expect("view");
        assert_eq!(view.total(), 8);
        assert!(view.rows.iter().all(|p| p.result == InspectionResult::Abnormal));
    }

    #[test]
    fn test_list_dashboard_sort_desc_and_page() {
        let list = ListArgs {
            tab: Some(ParticipantKind::Corporate),
            sort: Some(SortKey::McuNo),
            desc: true,
            page: 9,
            ..args()
        };
        let dashboard = list_dashboard(&Config::default(), &list).expect("list failed");
        let view = dashboard.data_view().expect("view");
        assert_eq!(view.page, 3);
        assert_eq!(view.page_rows()[0].mcu_no, "J99-MCU-804");
    }

    #[test]
    fn test_lookup_participant() {
        let corp = lookup_participant("corp-3", ParticipantKind::Individual).expect("corp-3");
        assert_eq!(corp.kind(), ParticipantKind::Corporate);
        let batch = lookup_participant("new-2", ParticipantKind::Corporate).expect("new-2");
        assert!(batch.company.is_some());
        assert!(lookup_participant("ind-99", ParticipantKind::Individual).is_err());
    }

    #[test]
    fn test_form_dump_json() {
        let dump = form_dump("ind-2", Some(FormTab::Laboratory), ParticipantKind::Individual)
            .expect("form");
        assert_eq!(dump.tabs.len(), 1);
        let json = serde_json::to_value(&dump).expect("serialize failed");
        assert_eq!(json["participant"]["id"], "ind-2");
        assert_eq!(json["tabs"][0]["tab"], "Laboratory");
        assert!(json["tabs"][0]["sections"].as_array().is_some_and(|s| !s.is_empty()));

        let all = form_dump("corp-1", None, ParticipantKind::Individual).expect("form");
        assert_eq!(all.tabs.len(), 10);
    }

    #[test]
    fn test_form_dump_batch_kind() {
        let individual = form_dump("new-3", None, ParticipantKind::Individual).expect("form");
        assert!(individual.participant.company.is_none());
        let corporate = form_dump("new-3", None, ParticipantKind::Corporate).expect("form");
        assert!(corporate.participant.company.is_some());
    }

    #[test]
    fn test_view_title() {
        let dashboard = Dashboard::new();
        assert_eq!(
            view_title(&dashboard),
            "Daftar Peserta MCU · Perorangan · Hasil Pemeriksaan"
        );
    }

    #[test]
    fn test_apply_config_changes() {
        let mut config = Config::default();
        let unchanged = ConfigArgs {
            show: true,
            set_default_tab: None,
            set_default_result: None,
            set_log_format: None,
        };
        assert!(!apply_config_changes(&mut config, &unchanged));

        let changes = ConfigArgs {
            set_default_tab: Some(ParticipantKind::Corporate),
            set_default_result: Some(ResultFilter::Only(InspectionResult::Kritis)),
            set_log_format: Some(LogFormat::Json),
            ..unchanged
        };
        assert!(apply_config_changes(&mut config, &changes));
        assert_eq!(config.default_tab, ParticipantKind::Corporate);
        assert_eq!(config.default_result_filter, "Kritis");
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
