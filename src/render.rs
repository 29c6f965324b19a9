//! Terminal rendering with comfy-table

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use mcu_dashboard_common::{
    visible_columns, CheckState, Column, DataView, EditSession, FieldKind, FormField, FormSection,
    InspectionResult, Participant, Selection, SortState,
};

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: impl Into<String>) -> Cell {
    Cell::new(text.into()).add_attribute(Attribute::Bold)
}

fn result_color(result: InspectionResult) -> Color {
    match result {
        InspectionResult::Normal => Color::Green,
        InspectionResult::Abnormal => Color::Red,
        InspectionResult::Atensi => Color::Yellow,
        InspectionResult::Kritis => Color::Magenta,
    }
}

pub fn check_mark(state: CheckState) -> &'static str {
    match state {
        CheckState::Unchecked => "[ ]",
        CheckState::Indeterminate => "[-]",
        CheckState::Checked => "[x]",
    }
}

fn row_cells(participant: &Participant, columns: &[Column], selected: Option<bool>) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(columns.len() + 2);
    if let Some(selected) = selected {
        cells.push(Cell::new(if selected { "[x]" } else { "[ ]" }));
    }
    cells.push(Cell::new(&participant.id).fg(Color::DarkGrey));
    for column in columns {
        let cell = Cell::new(column.cell(participant));
        cells.push(match column {
            Column::Result => cell
                .fg(result_color(participant.result))
                .add_attribute(Attribute::Bold),
            _ => cell,
        });
    }
    cells
}

/// Table of the current page; a selection adds the checkbox column
pub fn participant_table(
    view: &DataView<'_>,
    shows_company: bool,
    sort: SortState,
    selection: Option<&Selection>,
) -> Table {
    let columns = visible_columns(shows_company);

    let mut header = Vec::new();
    if let Some(selection) = selection {
        header.push(header_cell(check_mark(
            selection.check_state(&view.page_ids()),
        )));
    }
    header.push(header_cell("ID"));
    header.extend(columns.iter().map(|c| header_cell(c.header_with_indicator(sort))));

    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);

    for participant in view.page_rows() {
        let selected = selection.map(|s| s.contains(&participant.id));
        table.add_row(row_cells(participant, &columns, selected));
    }
    table
}

/// "Menampilkan 11-20 dari 25 data · Halaman 2/3"
pub fn page_footer(view: &DataView<'_>) -> String {
    match view.page_range() {
        Some((start, end)) => format!(
            "Menampilkan {}-{} dari {} data · Halaman {}/{}",
            start,
            end,
            view.total(),
            view.page,
            view.total_pages
        ),
        None => format!("Tidak ada data · Halaman {}/{}", view.page, view.total_pages),
    }
}

pub fn print_data_view(
    title: &str,
    view: &DataView<'_>,
    shows_company: bool,
    sort: SortState,
    selection: Option<&Selection>,
) {
    println!("{}", title);
    println!("{}", participant_table(view, shows_company, sort, selection));
    println!("{}", page_footer(view));
    if let Some(selection) = selection {
        if !selection.is_empty() {
            println!("{} dipilih", selection.len());
        }
    }
}

fn field_value_cell(session: Option<&EditSession>, field: &FormField) -> Cell {
    let value = match session {
        Some(session) => session.value(field),
        None => field.default.clone(),
    };
    let cell = Cell::new(&value);
    match field.kind {
        FieldKind::Status if value == "Normal" => cell.fg(Color::Green),
        FieldKind::SubHeader => Cell::new(""),
        _ => cell,
    }
}

fn kind_detail(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Measurement { unit, normal } => format!("{} · normal {}", unit, normal.replace('\n', " ")),
        FieldKind::Choice { options } | FieldKind::Question { options, .. } => options.join("/"),
        FieldKind::Image => "gambar".to_string(),
        FieldKind::Status => "status".to_string(),
        _ => String::new(),
    }
}

fn field_label(kind: &FieldKind, label: &str) -> String {
    match kind {
        FieldKind::Question { no, .. } | FieldKind::Numbered { no } => format!("{}. {}", no, label),
        FieldKind::SubHeader => label.to_uppercase(),
        _ => label.to_string(),
    }
}

/// One form section as a table; collapsed sections show only the title
pub fn section_table(section: &FormSection, session: Option<&EditSession>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Pemeriksaan"),
        header_cell("Hasil"),
        header_cell("Keterangan"),
    ]);
    apply_table_style(&mut table);

    for field in &section.fields {
        let label = Cell::new(field_label(&field.kind, field.label));
        let label = if matches!(field.kind, FieldKind::SubHeader) {
            label.fg(Color::Blue).add_attribute(Attribute::Bold)
        } else {
            label
        };
        table.add_row(vec![
            Cell::new(&field.id).fg(Color::DarkGrey),
            label,
            field_value_cell(session, field),
            Cell::new(kind_detail(&field.kind)),
        ]);
    }
    table
}

pub fn print_sections(sections: &[FormSection], session: Option<&EditSession>) {
    for section in sections {
        let collapsed = session.is_some_and(|s| s.is_collapsed(&section.id));
        let marker = if collapsed { "▸" } else { "▾" };
        println!("\n{} {} ({})", marker, section.title, section.id);
        if !collapsed {
            println!("{}", section_table(section, session));
        }
    }
}
