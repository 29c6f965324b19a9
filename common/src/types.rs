//! Participant record types
//!
//! Shared by the console front end and the desktop dashboard:
//! - Participant: one MCU record row
//! - InspectionResult: the result category of an examination
//! - ParticipantKind: which collection (tab) a record belongs to
//! - ResultFilter: the "Hasil Pemeriksaan" dropdown selection

use crate::date;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result category of a medical checkup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InspectionResult {
    Normal,
    Abnormal,
    Atensi,
    Kritis,
}

impl InspectionResult {
    pub const ALL: [InspectionResult; 4] = [
        InspectionResult::Normal,
        InspectionResult::Abnormal,
        InspectionResult::Atensi,
        InspectionResult::Kritis,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InspectionResult::Normal => "Normal",
            InspectionResult::Abnormal => "Abnormal",
            InspectionResult::Atensi => "Atensi",
            InspectionResult::Kritis => "Kritis",
        }
    }
}

impl fmt::Display for InspectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InspectionResult {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        InspectionResult::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown result: {}. Use Normal, Abnormal, Atensi or Kritis", s))
    }
}

/// P = Perempuan, L = Laki-laki
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    P,
    L,
}

impl Gender {
    pub fn code(&self) -> &'static str {
        match self {
            Gender::P => "P",
            Gender::L => "L",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::P => "Perempuan",
            Gender::L => "Laki-laki",
        }
    }
}

/// Participant collection, shown as the two list tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantKind {
    /// Perorangan
    #[default]
    Individual,
    /// Perusahaan
    Corporate,
}

impl ParticipantKind {
    pub const ALL: [ParticipantKind; 2] = [ParticipantKind::Individual, ParticipantKind::Corporate];

    pub fn label(&self) -> &'static str {
        match self {
            ParticipantKind::Individual => "Perorangan",
            ParticipantKind::Corporate => "Perusahaan",
        }
    }

    /// Corporate tables carry the extra "Perusahaan" column
    pub fn shows_company(&self) -> bool {
        matches!(self, ParticipantKind::Corporate)
    }
}

impl fmt::Display for ParticipantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantKind::Individual => write!(f, "individual"),
            ParticipantKind::Corporate => write!(f, "corporate"),
        }
    }
}

impl FromStr for ParticipantKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "individual" | "perorangan" | "ind" => Ok(ParticipantKind::Individual),
            "corporate" | "perusahaan" | "corp" => Ok(ParticipantKind::Corporate),
            _ => Err(format!("Unknown participant type: {}. Use individual or corporate", s)),
        }
    }
}

/// Result dropdown selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResultFilter {
    /// Semua Hasil
    #[default]
    All,
    Only(InspectionResult),
}

impl ResultFilter {
    pub const ALL_LABEL: &'static str = "Semua Hasil";

    /// Dropdown entries in display order
    pub fn options() -> [ResultFilter; 5] {
        [
            ResultFilter::All,
            ResultFilter::Only(InspectionResult::Normal),
            ResultFilter::Only(InspectionResult::Abnormal),
            ResultFilter::Only(InspectionResult::Atensi),
            ResultFilter::Only(InspectionResult::Kritis),
        ]
    }

    pub fn matches(&self, participant: &Participant) -> bool {
        match self {
            ResultFilter::All => true,
            ResultFilter::Only(result) => participant.result == *result,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultFilter::All => Self::ALL_LABEL,
            ResultFilter::Only(result) => result.label(),
        }
    }

    /// Text of the closed dropdown button
    pub fn button_label(&self) -> String {
        match self {
            ResultFilter::All => "Hasil Pemeriksaan".to_string(),
            ResultFilter::Only(result) => format!("Hasil: {}", result),
        }
    }
}

impl fmt::Display for ResultFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResultFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(Self::ALL_LABEL) || trimmed.eq_ignore_ascii_case("all") {
            return Ok(ResultFilter::All);
        }
        trimmed.parse::<InspectionResult>().map(ResultFilter::Only)
    }
}

/// One MCU participant row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,

    /// Exam date, "<day> <Mon> <year>"
    pub date: String,

    /// Exam time, e.g. "10:00 WIB"
    pub time: String,

    pub name: String,

    pub user_id: String,

    /// Secondary line under the name (user id or company)
    pub sub_text: String,

    /// Only set for corporate records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    pub mcu_no: String,

    pub dob: String,

    pub gender: Gender,

    pub result: InspectionResult,
}

impl Participant {
    pub fn kind(&self) -> ParticipantKind {
        if self.company.is_some() {
            ParticipantKind::Corporate
        } else {
            ParticipantKind::Individual
        }
    }

    /// Exam date as a sortable millisecond timestamp
    pub fn exam_timestamp(&self) -> Result<i64> {
        date::exam_timestamp(&self.date)
    }

    /// Case-insensitive match against name, MCU number or user id
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.name, &self.mcu_no, &self.user_id]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Look a participant up by id
pub fn find_participant<'a>(records: &'a [Participant], id: &str) -> Result<&'a Participant> {
    records
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| Error::ParticipantNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Participant {
        Participant {
            id: "ind-1".to_string(),
            date: "20 Jan 2024".to_string(),
            time: "10:00 WIB".to_string(),
            name: "BUDI SANTOSO, S.T.".to_string(),
            user_id: "2399100".to_string(),
            sub_text: "User ID : 2399100".to_string(),
            company: None,
            mcu_no: "0002993100".to_string(),
            dob: "12 May 1990".to_string(),
            gender: Gender::P,
            result: InspectionResult::Normal,
        }
    }

    #[test]
    fn test_participant_serialize_camel_case() {
        let json = serde_json::to_string(&sample()).expect("serialize failed");
        assert!(json.contains("\"mcuNo\":\"0002993100\""));
        assert!(json.contains("\"userId\":\"2399100\""));
        assert!(json.contains("\"result\":\"Normal\""));
        assert!(!json.contains("company"));
    }

    #[test]
    fn test_participant_deserialize_corporate() {
        let json = r#"{
            "id": "corp-1",
            "date": "10 Feb 2024",
            "time": "08:30 WIB",
            "name": "AHMAD ZAELANI",
            "userId": "EMP-J99-500",
            "subText": "J99 Trans Group",
            "company": "J99 Trans Group",
            "mcuNo": "J99-MCU-800",
            "dob": "15 Aug 1985",
            "gender": "L",
            "result": "Atensi"
        }"#;

        let participant: Participant = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(participant.kind(), ParticipantKind::Corporate);
        assert_eq!(participant.company.as_deref(), Some("J99 Trans Group"));
        assert_eq!(participant.result, InspectionResult::Atensi);
    }

    #[test]
    fn test_kind_follows_company() {
        let mut participant = sample();
        assert_eq!(participant.kind(), ParticipantKind::Individual);
        participant.company = Some("CV Maju Mapan".to_string());
        assert_eq!(participant.kind(), ParticipantKind::Corporate);
    }

    #[test]
    fn test_result_from_str() {
        assert_eq!("kritis".parse::<InspectionResult>(), Ok(InspectionResult::Kritis));
        assert_eq!(" Normal ".parse::<InspectionResult>(), Ok(InspectionResult::Normal));
        assert!("Unknown".parse::<InspectionResult>().is_err());
    }

    #[test]
    fn test_result_filter_from_str() {
        assert_eq!("Semua Hasil".parse::<ResultFilter>(), Ok(ResultFilter::All));
        assert_eq!("all".parse::<ResultFilter>(), Ok(ResultFilter::All));
        assert_eq!(
            "Atensi".parse::<ResultFilter>(),
            Ok(ResultFilter::Only(InspectionResult::Atensi))
        );
        assert!("Sehat".parse::<ResultFilter>().is_err());
    }

    #[test]
    fn test_result_filter_button_label() {
        assert_eq!(ResultFilter::All.button_label(), "Hasil Pemeriksaan");
        assert_eq!(
            ResultFilter::Only(InspectionResult::Kritis).button_label(),
            "Hasil: Kritis"
        );
    }

    #[test]
    fn test_kind_from_str_accepts_both_languages() {
        assert_eq!("perusahaan".parse::<ParticipantKind>(), Ok(ParticipantKind::Corporate));
        assert_eq!("Individual".parse::<ParticipantKind>(), Ok(ParticipantKind::Individual));
        assert!("team".parse::<ParticipantKind>().is_err());
    }

    #[test]
    fn test_matches_query() {
        let participant = sample();
        assert!(participant.matches_query(""));
        assert!(participant.matches_query("budi"));
        assert!(participant.matches_query("2993100"));
        assert!(participant.matches_query("2399100"));
        assert!(!participant.matches_query("siti"));
    }

    #[test]
    fn test_find_participant_missing() {
        let records = vec![sample()];
        assert!(find_participant(&records, "ind-1").is_ok());
        assert!(matches!(
            find_participant(&records, "ind-2"),
            Err(Error::ParticipantNotFound(_))
        ));
    }
}
