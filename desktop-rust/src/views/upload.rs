//! Upload modal and the cancel confirmation dialog

use egui::{Align2, RichText, Vec2};
use mcu_dashboard_common::{ParticipantKind, UploadForm};

use crate::theme::{colors, spacing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadAction {
    SelectKind(ParticipantKind),
    PickFile,
    RemoveFile,
    Submit,
    Close,
}

pub fn show(ctx: &egui::Context, form: &UploadForm) -> Vec<UploadAction> {
    let mut actions = Vec::new();
    egui::Window::new("Upload Excel (Bulk)")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.set_min_width(360.0);

            ui.label(RichText::new("Tipe Peserta").strong());
            ui.horizontal(|ui| {
                for kind in ParticipantKind::ALL {
                    if ui.radio(form.kind() == Some(kind), kind.label()).clicked() {
                        actions.push(UploadAction::SelectKind(kind));
                    }
                }
            });
            ui.add_space(spacing::SM);

            ui.label(RichText::new("File").strong());
            match form.file_name() {
                None => {
                    if ui.button("Pilih File (.xls / .xlsx)").clicked() {
                        actions.push(UploadAction::PickFile);
                    }
                }
                Some(name) => {
                    ui.horizontal(|ui| {
                        ui.label(name);
                        if ui.small_button("✖").clicked() {
                            actions.push(UploadAction::RemoveFile);
                        }
                    });
                    if form.is_uploading() {
                        let fraction = f32::from(form.progress()) / 100.0;
                        ui.add(egui::ProgressBar::new(fraction).show_percentage());
                    } else {
                        ui.label(RichText::new("Upload selesai").color(colors::SUCCESS));
                    }
                }
            }

            ui.add_space(spacing::MD);
            ui.horizontal(|ui| {
                if ui.button("Batal").clicked() {
                    actions.push(UploadAction::Close);
                }
                let submit = egui::Button::new(RichText::new("Upload Data").color(egui::Color32::WHITE))
                    .fill(colors::PRIMARY);
                if ui.add_enabled(form.is_ready(), submit).clicked() {
                    actions.push(UploadAction::Submit);
                }
            });
        });
    actions
}

/// "Batalkan Unggah Data?"; Some(true) discards, Some(false) keeps the batch
pub fn cancel_dialog(ctx: &egui::Context) -> Option<bool> {
    let mut answer = None;
    egui::Window::new("Batalkan Unggah Data?")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Data yang telah diunggah akan dihapus.");
            ui.add_space(spacing::MD);
            ui.horizontal(|ui| {
                if ui.button("Tidak").clicked() {
                    answer = Some(false);
                }
                let confirm = egui::Button::new(RichText::new("Ya, Batalkan").color(egui::Color32::WHITE))
                    .fill(colors::DANGER);
                if ui.add(confirm).clicked() {
                    answer = Some(true);
                }
            });
        });
    answer
}
