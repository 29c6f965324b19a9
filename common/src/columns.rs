//! Participant table columns
//!
//! Shared by the terminal table and the desktop grid so both show the same
//! headers in the same order.

use crate::pipeline::{SortKey, SortOrder, SortState};
use crate::types::Participant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Date,
    Name,
    Company,
    McuNo,
    Dob,
    Gender,
    Result,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Date,
        Column::Name,
        Column::Company,
        Column::McuNo,
        Column::Dob,
        Column::Gender,
        Column::Result,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::Date => "Tgl. Periksa",
            Column::Name => "Nama",
            Column::Company => "Perusahaan",
            Column::McuNo => "No MCU",
            Column::Dob => "Tgl. Lahir",
            Column::Gender => "Gender",
            Column::Result => "Hasil",
        }
    }

    /// `None` for columns without a sort control
    pub fn sort_key(&self) -> Option<SortKey> {
        match self {
            Column::Date => Some(SortKey::Date),
            Column::Name => Some(SortKey::Name),
            Column::Company => Some(SortKey::Company),
            Column::McuNo => Some(SortKey::McuNo),
            Column::Result => Some(SortKey::Result),
            Column::Dob | Column::Gender => None,
        }
    }

    /// Plain-text cell content
    pub fn cell(&self, participant: &Participant) -> String {
        match self {
            Column::Date => format!("{} {}", participant.date, participant.time),
            Column::Name => format!("{}\n{}", participant.name, participant.sub_text),
            Column::Company => participant.company.clone().unwrap_or_else(|| "-".to_string()),
            Column::McuNo => participant.mcu_no.clone(),
            Column::Dob => participant.dob.clone(),
            Column::Gender => participant.gender.code().to_string(),
            Column::Result => participant.result.label().to_string(),
        }
    }

    /// Header text with the sort arrow when this column is the sort key
    pub fn header_with_indicator(&self, sort: SortState) -> String {
        let arrow = self
            .sort_key()
            .and_then(|key| sort.indicator(key))
            .map(|order| match order {
                SortOrder::Asc => " ▲",
                SortOrder::Desc => " ▼",
            })
            .unwrap_or("");
        format!("{}{}", self.header(), arrow)
    }
}

/// Columns shown for a table; Perusahaan only on corporate data
pub fn visible_columns(shows_company: bool) -> Vec<Column> {
    Column::ALL
        .into_iter()
        .filter(|c| shows_company || *c != Column::Company)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{corporate_participants, individual_participants};

    #[test]
    fn test_visible_columns() {
        assert_eq!(visible_columns(false).len(), 6);
        assert!(!visible_columns(false).contains(&Column::Company));
        assert_eq!(visible_columns(true).len(), 7);
        assert_eq!(visible_columns(true)[2], Column::Company);
    }

    #[test]
    fn test_cells() {
        let ind = &individual_participants()[0];
        assert_eq!(Column::Date.cell(ind), "20 Jan 2024 10:00 WIB");
        assert_eq!(Column::Name.cell(ind), "BUDI SANTOSO, S.T.\nUser ID : 2399100");
        assert_eq!(Column::Company.cell(ind), "-");
        assert_eq!(Column::Gender.cell(ind), "P");

        let corp = &corporate_participants()[0];
        assert_eq!(Column::Company.cell(corp), "J99 Trans Group");
        assert_eq!(Column::Result.cell(corp), "Normal");
    }

    #[test]
    fn test_header_indicator() {
        let sort = SortState::new(SortKey::Name, SortOrder::Desc);
        assert_eq!(Column::Name.header_with_indicator(sort), "Nama ▼");
        assert_eq!(Column::Date.header_with_indicator(sort), "Tgl. Periksa");
        assert_eq!(Column::Gender.header_with_indicator(sort), "Gender");
    }
}
