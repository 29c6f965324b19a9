//! Edit Data Peserta form

use egui::{RichText, Ui};
use mcu_dashboard_common::{EditSession, FieldKind, FormField, FormSection, FormTab};

use crate::theme::{colors, result_color, spacing};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetTab(FormTab),
    SetValue { id: String, value: String },
    ToggleSection(String),
    Save,
    Cancel,
}

pub fn show(ui: &mut Ui, session: &EditSession) -> Vec<FormAction> {
    let mut actions = Vec::new();
    participant_header(ui, session);
    ui.add_space(spacing::SM);

    ui.horizontal_wrapped(|ui| {
        for tab in FormTab::ALL {
            if ui.selectable_label(session.tab() == tab, tab.label()).clicked() {
                actions.push(FormAction::SetTab(tab));
            }
        }
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height((ui.available_height() - 48.0).max(120.0))
        .show(ui, |ui| {
            for section in session.sections() {
                section_frame(ui, session, &section, &mut actions);
                ui.add_space(spacing::SM);
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Batal").clicked() {
            actions.push(FormAction::Cancel);
        }
        let save = egui::Button::new(RichText::new("Simpan").color(egui::Color32::WHITE))
            .fill(colors::PRIMARY);
        if ui.add(save).clicked() {
            actions.push(FormAction::Save);
        }
        if session.is_dirty() {
            ui.label(
                RichText::new(format!("{} isian diubah", session.changed_fields()))
                    .color(colors::MUTED),
            );
        }
    });
    actions
}

fn participant_header(ui: &mut Ui, session: &EditSession) {
    let participant = session.participant();
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(&participant.name).heading().strong());
            ui.label(
                RichText::new(format!(
                    "{} · {} · {}",
                    participant.mcu_no,
                    participant.gender.label(),
                    participant.date
                ))
                .color(colors::MUTED),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // no document is generated
            let _ = ui.button("Download PDF");
            ui.label(
                RichText::new(participant.result.label())
                    .strong()
                    .color(result_color(participant.result)),
            );
        });
    });
}

fn section_frame(
    ui: &mut Ui,
    session: &EditSession,
    section: &FormSection,
    actions: &mut Vec<FormAction>,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        let collapsed = session.is_collapsed(&section.id);
        let marker = if collapsed { "▸" } else { "▾" };
        let title = RichText::new(format!("{} {}", marker, section.title)).strong();
        if ui.add(egui::Button::new(title).frame(false)).clicked() {
            actions.push(FormAction::ToggleSection(section.id.clone()));
        }
        if collapsed {
            return;
        }

        ui.add_space(spacing::XS);
        egui::Grid::new(&section.id)
            .num_columns(3)
            .striped(true)
            .min_col_width(120.0)
            .show(ui, |ui| {
                for field in &section.fields {
                    field_row(ui, session, field, actions);
                    ui.end_row();
                }
            });
    });
}

fn field_row(ui: &mut Ui, session: &EditSession, field: &FormField, actions: &mut Vec<FormAction>) {
    let mut value = session.value(field);
    let mut changed = false;

    match &field.kind {
        FieldKind::SubHeader => {
            ui.label(RichText::new(field.label).strong().color(colors::PRIMARY));
            ui.label("");
            ui.label("");
            return;
        }
        FieldKind::Question { no, .. } | FieldKind::Numbered { no } => {
            ui.label(format!("{}. {}", no, field.label));
        }
        _ => {
            ui.label(field.label);
        }
    }

    match &field.kind {
        FieldKind::Text | FieldKind::Numbered { .. } => {
            changed = ui.text_edit_singleline(&mut value).changed();
            ui.label("");
        }
        FieldKind::LongText => {
            changed = ui
                .add(egui::TextEdit::multiline(&mut value).desired_rows(3))
                .changed();
            ui.label("");
        }
        FieldKind::Choice { options } | FieldKind::Question { options, .. } => {
            egui::ComboBox::from_id_source(&field.id)
                .selected_text(value.clone())
                .show_ui(ui, |ui| {
                    for option in options.iter() {
                        if ui.selectable_label(value == *option, *option).clicked() {
                            value = option.to_string();
                            changed = true;
                        }
                    }
                });
            ui.label("");
        }
        FieldKind::Status => {
            let text = RichText::new(&value).strong();
            ui.label(if value == "Normal" {
                text.color(colors::SUCCESS)
            } else {
                text
            });
            ui.label("");
        }
        FieldKind::Measurement { unit, normal } => {
            ui.horizontal(|ui| {
                changed = ui
                    .add(egui::TextEdit::singleline(&mut value).desired_width(80.0))
                    .changed();
                ui.label(RichText::new(*unit).color(colors::MUTED));
            });
            ui.label(RichText::new(format!("Normal: {}", normal)).small().color(colors::MUTED));
        }
        FieldKind::Image => {
            ui.hyperlink_to("Lihat gambar", &value);
            ui.label("");
        }
        FieldKind::SubHeader => {}
    }

    if changed {
        actions.push(FormAction::SetValue {
            id: field.id.clone(),
            value,
        });
    }
}
