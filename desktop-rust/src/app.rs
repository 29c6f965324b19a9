use std::time::{Duration, Instant};

use eframe::egui::{self, Color32, RichText};
use mcu_dashboard_common::upload::DEFAULT_TICK_MS;
use mcu_dashboard_common::{
    Dashboard, Dropdown, ParticipantKind, ResultFilter, UploadForm, View,
};

use crate::model::{clicked_outside, UiState};
use crate::theme::{colors, spacing};
use crate::views::form::{self, FormAction};
use crate::views::table::{self, TableAction, TableOptions};
use crate::views::upload::{self, UploadAction};

pub struct DesktopApp {
    dashboard: Dashboard,
    ui: UiState,
    tick_interval: Duration,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self {
            dashboard: Dashboard::new(),
            ui: UiState::default(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

fn report(result: mcu_dashboard_common::Result<()>) {
    if let Err(err) = result {
        tracing::warn!(error = %err, "action rejected");
    }
}

impl DesktopApp {
    fn apply_table_actions(&mut self, actions: Vec<TableAction>) {
        for action in actions {
            match action {
                TableAction::Sort(key) => self.dashboard.sort_by(key),
                TableAction::ToggleRow(id) => self.dashboard.toggle_select(&id),
                TableAction::ToggleAll => self.dashboard.toggle_select_all(),
                TableAction::PreviousPage => self.dashboard.previous_page(),
                TableAction::NextPage => self.dashboard.next_page(),
                TableAction::GoToPage(page) => self.dashboard.go_to_page(page),
                TableAction::Edit(id) => report(self.dashboard.edit_participant(&id)),
            }
        }
    }

    fn apply_form_actions(&mut self, actions: Vec<FormAction>) {
        for action in actions {
            match action {
                FormAction::SetTab(tab) => {
                    if let Some(session) = self.dashboard.edit_session_mut() {
                        session.set_tab(tab);
                    }
                }
                FormAction::SetValue { id, value } => {
                    if let Some(session) = self.dashboard.edit_session_mut() {
                        report(session.set_value(&id, value));
                    }
                }
                FormAction::ToggleSection(id) => {
                    if let Some(session) = self.dashboard.edit_session_mut() {
                        session.toggle_section(&id);
                    }
                }
                FormAction::Save => report(self.dashboard.save_edit()),
                FormAction::Cancel => report(self.dashboard.cancel_edit()),
            }
        }
    }

    fn apply_upload_actions(&mut self, actions: Vec<UploadAction>) {
        for action in actions {
            match action {
                UploadAction::SelectKind(kind) => {
                    if let Some(form) = self.dashboard.upload_mut() {
                        form.select_kind(kind);
                    }
                }
                UploadAction::PickFile => self.pick_upload_file(),
                UploadAction::RemoveFile => {
                    if let Some(form) = self.dashboard.upload_mut() {
                        form.remove_file();
                    }
                    self.ui.stop_upload_clock();
                }
                UploadAction::Submit => report(self.dashboard.submit_upload()),
                UploadAction::Close => self.dashboard.close_upload(),
            }
        }
    }

    fn pick_upload_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Excel", &["xls", "xlsx"])
            .pick_file()
        else {
            return;
        };
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            return;
        };
        tracing::info!(file = %path.display(), "upload file picked");
        self.ui.stop_upload_clock();
        report(self.dashboard.choose_upload_file(&name));
    }

    /// Advance the simulated transfer and keep frames coming while it runs
    fn drive_upload(&mut self, ctx: &egui::Context, now: Instant) {
        let uploading = self.dashboard.upload().is_some_and(UploadForm::is_uploading);
        if !uploading {
            self.ui.stop_upload_clock();
            return;
        }
        if self.ui.upload_tick_due(now, self.tick_interval) {
            self.dashboard.tick_upload();
        }
        ctx.request_repaint_after(self.tick_interval);
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(spacing::MD);
        ui.heading(RichText::new("MCU Dashboard").strong());
        ui.add_space(spacing::LG);

        let current = self.dashboard.view().sidebar_view();
        if ui
            .selectable_label(current == View::List, "Daftar Peserta")
            .clicked()
        {
            self.dashboard.show_list();
        }
        ui.horizontal(|ui| {
            if ui
                .selectable_label(current == View::NewSubmissions, "Pengajuan Baru")
                .clicked()
            {
                self.dashboard.show_new_submissions();
            }
            let badge = RichText::new(format!(" {} ", self.dashboard.pending_count()))
                .small()
                .strong()
                .color(Color32::WHITE)
                .background_color(colors::BADGE);
            ui.label(badge);
        });
        if current == View::Verification {
            ui.label(RichText::new("Verifikasi Data").italics().color(colors::MUTED));
        }
    }

    /// Close the open dropdown on a click outside it and its button
    fn close_on_outside_click(&mut self, ui: &egui::Ui, button: egui::Rect, popup: egui::Rect) {
        let click = ui.input(|i| {
            if i.pointer.any_click() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        if clicked_outside(click, &[button, popup]) {
            self.dashboard.close_dropdowns();
        }
    }

    fn render_list(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for kind in ParticipantKind::ALL {
                if ui
                    .selectable_label(self.dashboard.active_tab() == kind, kind.label())
                    .clicked()
                {
                    self.dashboard.set_tab(kind);
                }
            }
        });
        ui.add_space(spacing::SM);

        ui.horizontal(|ui| {
            let filter_button = ui.button(format!("{} ▾", self.dashboard.result_filter().button_label()));
            if filter_button.clicked() {
                self.dashboard.toggle_dropdown(Dropdown::ResultFilter);
            }
            if self.dashboard.is_dropdown_open(Dropdown::ResultFilter) {
                let current = self.dashboard.result_filter();
                let popup = egui::Area::new(egui::Id::new("result_filter_menu"))
                    .order(egui::Order::Foreground)
                    .fixed_pos(filter_button.rect.left_bottom())
                    .show(ui.ctx(), |ui| {
                        egui::Frame::popup(ui.style()).show(ui, |ui| {
                            for filter in ResultFilter::options() {
                                if ui.selectable_label(current == filter, filter.label()).clicked() {
                                    self.dashboard.set_result_filter(filter);
                                }
                            }
                        });
                    });
                self.close_on_outside_click(ui, filter_button.rect, popup.response.rect);
            }

            self.search_box(ui);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let add_button = ui.button("Tambah Baru ▾");
                if add_button.clicked() {
                    self.dashboard.toggle_dropdown(Dropdown::AddNew);
                }
                if self.dashboard.is_dropdown_open(Dropdown::AddNew) {
                    let popup = egui::Area::new(egui::Id::new("add_new_menu"))
                        .order(egui::Order::Foreground)
                        .fixed_pos(add_button.rect.left_bottom())
                        .show(ui.ctx(), |ui| {
                            egui::Frame::popup(ui.style()).show(ui, |ui| {
                                if ui.button("Upload Excel (Bulk)").clicked() {
                                    self.dashboard.open_upload();
                                }
                            });
                        });
                    self.close_on_outside_click(ui, add_button.rect, popup.response.rect);
                }
                // export is not wired to anything
                let _ = ui.button("Export");
            });
        });
        ui.add_space(spacing::SM);

        let options = TableOptions {
            selectable: true,
            editable: false,
        };
        let actions = table::show(ui, &self.dashboard, options);
        self.apply_table_actions(actions);

        if self.dashboard.selected_count() > 0 {
            ui.label(format!("{} dipilih", self.dashboard.selected_count()));
        }
    }

    fn search_box(&mut self, ui: &mut egui::Ui) {
        let mut query = self
            .dashboard
            .table()
            .map(|t| t.query.search.clone())
            .unwrap_or_default();
        let edit = egui::TextEdit::singleline(&mut query)
            .hint_text("Cari nama / No MCU / User ID")
            .desired_width(220.0);
        if ui.add(edit).changed() {
            self.dashboard.set_search(&query);
        }
    }

    fn render_verification(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!(
                    "{} · {} data",
                    self.dashboard.active_tab().label(),
                    self.dashboard.pending().len()
                ))
                .color(colors::MUTED),
            );
            self.search_box(ui);
        });
        ui.add_space(spacing::SM);

        let options = TableOptions {
            selectable: true,
            editable: true,
        };
        let actions = table::show(ui, &self.dashboard, options);
        self.apply_table_actions(actions);

        ui.separator();
        ui.horizontal(|ui| {
            if self.dashboard.selected_count() > 0 {
                ui.label(format!("{} dipilih", self.dashboard.selected_count()));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let process = egui::Button::new(RichText::new("Proses Data").color(Color32::WHITE))
                    .fill(colors::PRIMARY);
                if ui.add(process).clicked() {
                    report(self.dashboard.confirm_batch());
                }
                if ui.button("Batal").clicked() {
                    report(self.dashboard.request_cancel());
                }
            });
        });
    }

    fn render_new_submissions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for kind in ParticipantKind::ALL {
                let label = format!("{} ({})", kind.label(), self.dashboard.new_submissions(kind).len());
                if ui
                    .selectable_label(self.dashboard.submissions_tab() == kind, label)
                    .clicked()
                {
                    self.dashboard.set_submissions_tab(kind);
                }
            }
            self.search_box(ui);
        });
        ui.add_space(spacing::SM);

        let options = TableOptions {
            selectable: true,
            editable: true,
        };
        let actions = table::show(ui, &self.dashboard, options);
        self.apply_table_actions(actions);

        ui.separator();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let process = egui::Button::new(RichText::new("Proses Semua").color(Color32::WHITE))
                .fill(colors::PRIMARY);
            if ui.add(process).clicked() {
                report(self.dashboard.process_all_submissions());
            }
        });
    }

    fn render_toasts(&self, ctx: &egui::Context) {
        if self.ui.toasts().is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::RIGHT_TOP, [-spacing::MD, spacing::MD])
            .show(ctx, |ui| {
                for toast in self.ui.toasts() {
                    let fill = if toast.is_error { colors::DANGER } else { colors::SUCCESS };
                    egui::Frame::popup(ui.style()).fill(fill).show(ui, |ui| {
                        ui.label(RichText::new(toast.message).color(Color32::WHITE).strong());
                    });
                    ui.add_space(spacing::XS);
                }
            });
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.drive_upload(ctx, now);

        for notification in self.dashboard.take_notifications() {
            self.ui.push_notification(&notification, now);
        }
        if let Some(wait) = self.ui.prune_toasts(now) {
            ctx.request_repaint_after(wait);
        }

        egui::SidePanel::left("sidebar")
            .frame(egui::Frame::side_top_panel(&ctx.style()).fill(colors::SIDEBAR))
            .resizable(false)
            .exact_width(200.0)
            .show(ctx, |ui| {
                self.render_sidebar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.dashboard.view().title());
            ui.separator();
            match self.dashboard.view() {
                View::List => self.render_list(ui),
                View::Verification => self.render_verification(ui),
                View::NewSubmissions => self.render_new_submissions(ui),
                View::EditParticipant { .. } => {
                    let actions = match self.dashboard.edit_session() {
                        Some(session) => form::show(ui, session),
                        None => Vec::new(),
                    };
                    self.apply_form_actions(actions);
                }
            }
        });

        if let Some(form) = self.dashboard.upload() {
            let actions = upload::show(ctx, form);
            self.apply_upload_actions(actions);
        }

        if self.dashboard.is_cancel_confirm_open() {
            match upload::cancel_dialog(ctx) {
                Some(true) => report(self.dashboard.confirm_cancel()),
                Some(false) => self.dashboard.dismiss_cancel(),
                None => {}
            }
        }

        self.render_toasts(ctx);
    }
}
