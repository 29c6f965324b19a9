//! Participant table
//!
//! Renders the current view's page and reports clicks back as
//! [`TableAction`]s; the caller applies them after the frame is laid out.

use egui::{RichText, Ui};
use mcu_dashboard_common::{visible_columns, CheckState, Column, Dashboard, DataView, SortKey};

use crate::theme::{colors, result_color, spacing};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    Sort(SortKey),
    ToggleRow(String),
    ToggleAll,
    PreviousPage,
    NextPage,
    GoToPage(usize),
    Edit(String),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableOptions {
    /// Checkbox column with the tri-state header
    pub selectable: bool,
    /// "Edit" button per row
    pub editable: bool,
}

pub fn show(ui: &mut Ui, dashboard: &Dashboard, options: TableOptions) -> Vec<TableAction> {
    let mut actions = Vec::new();
    let (Some(table), Some(view)) = (dashboard.table(), dashboard.data_view()) else {
        return actions;
    };
    let columns = visible_columns(dashboard.shows_company());
    let sort = table.query.sort;
    let num_columns =
        columns.len() + usize::from(options.selectable) + usize::from(options.editable);

    egui::ScrollArea::horizontal().show(ui, |ui| {
        egui::Grid::new("participant_table")
            .striped(true)
            .num_columns(num_columns)
            .min_col_width(48.0)
            .spacing([spacing::MD, spacing::SM])
            .show(ui, |ui| {
                if options.selectable {
                    let state = dashboard.check_state();
                    let mut checked = state == CheckState::Checked;
                    let checkbox = egui::Checkbox::new(&mut checked, "")
                        .indeterminate(state == CheckState::Indeterminate);
                    if ui.add(checkbox).clicked() {
                        actions.push(TableAction::ToggleAll);
                    }
                }
                for column in &columns {
                    let header = RichText::new(column.header_with_indicator(sort)).strong();
                    match column.sort_key() {
                        Some(key) => {
                            if ui.add(egui::Button::new(header).frame(false)).clicked() {
                                actions.push(TableAction::Sort(key));
                            }
                        }
                        None => {
                            ui.label(header);
                        }
                    }
                }
                if options.editable {
                    ui.label(RichText::new("Aksi").strong());
                }
                ui.end_row();

                for participant in view.page_rows() {
                    if options.selectable {
                        let mut selected = dashboard.is_selected(&participant.id);
                        if ui.checkbox(&mut selected, "").clicked() {
                            actions.push(TableAction::ToggleRow(participant.id.clone()));
                        }
                    }
                    for column in &columns {
                        match column {
                            Column::Name => {
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(&participant.name).strong());
                                    ui.label(
                                        RichText::new(&participant.sub_text)
                                            .small()
                                            .color(colors::MUTED),
                                    );
                                });
                            }
                            Column::Result => {
                                ui.label(
                                    RichText::new(column.cell(participant))
                                        .strong()
                                        .color(result_color(participant.result)),
                                );
                            }
                            _ => {
                                ui.label(column.cell(participant));
                            }
                        }
                    }
                    if options.editable && ui.button("Edit").clicked() {
                        actions.push(TableAction::Edit(participant.id.clone()));
                    }
                    ui.end_row();
                }
            });
    });

    if view.is_empty() {
        ui.add_space(spacing::SM);
        ui.label(RichText::new("Tidak ada data").color(colors::MUTED));
    }
    ui.add_space(spacing::SM);
    pagination(ui, &view, &mut actions);
    actions
}

fn pagination(ui: &mut Ui, view: &DataView<'_>, actions: &mut Vec<TableAction>) {
    ui.horizontal(|ui| {
        let summary = match view.page_range() {
            Some((start, end)) => format!("Menampilkan {}-{} dari {} data", start, end, view.total()),
            None => "Menampilkan 0 data".to_string(),
        };
        ui.label(RichText::new(summary).color(colors::MUTED));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // right-to-left: last control first
            if ui.add_enabled(view.has_next(), egui::Button::new("›")).clicked() {
                actions.push(TableAction::NextPage);
            }
            for page in (1..=view.total_pages).rev() {
                if ui.selectable_label(page == view.page, page.to_string()).clicked() {
                    actions.push(TableAction::GoToPage(page));
                }
            }
            if ui.add_enabled(view.has_previous(), egui::Button::new("‹")).clicked() {
                actions.push(TableAction::PreviousPage);
            }
        });
    });
}
