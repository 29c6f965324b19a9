//! Built-in mock participant data
//!
//! Everything the dashboard shows is generated here at start-up; nothing is
//! read from or written to storage.

use crate::types::{Gender, InspectionResult, Participant, ParticipantKind};

/// Size of a synthesized upload batch
pub const UPLOAD_BATCH_SIZE: usize = 15;

/// New submissions taken from the individual list
pub const NEW_SUBMISSIONS_INDIVIDUAL: usize = 10;

/// New submissions taken from the corporate list
pub const NEW_SUBMISSIONS_CORPORATE: usize = 35;

const INDIVIDUAL_COUNT: usize = 20;
const CORPORATE_COUNT: usize = 25;

const INDIVIDUAL_NAMES: [&str; 20] = [
    "BUDI SANTOSO, S.T.",
    "SITI AMINAH",
    "AGUS PRAYOGO",
    "DEWI LESTARI",
    "JOKO SUSILO",
    "RATNA SARI",
    "EKO PRASETYO",
    "SRI WAHYUNI",
    "BAMBANG SUDARMONO",
    "ANI SETIOWATI",
    "RUDI KUSUMA",
    "MAYA INDAH",
    "HENDRA WIJAYA",
    "SISKA AMELIA",
    "DONI SAPUTRA",
    "LIA PERMATA",
    "INDRA LESMANA",
    "WULAN GURITNO",
    "GADING MARTEN",
    "RAISA ANDRIANA",
];

const CORPORATE_NAMES: [&str; 15] = [
    "AHMAD ZAELANI",
    "SRI WAHYUNI",
    "BAMBANG HERMANTO",
    "LULUK FATMAWATI",
    "AGUS SULISTYO",
    "REZA RAHADIAN",
    "DIAN SASTRO",
    "NICHOLAS SAPUTRA",
    "CHELSEA ISLAN",
    "JOE TASLIM",
    "HAMISH DAUD",
    "ADINIA WIRASTI",
    "VINO G BASTIAN",
    "MARSHA TIMOTHY",
    "LUKMAN SARDI",
];

const COMPANIES: [&str; 4] = [
    "J99 Trans Group",
    "PT Mitra Sejahtera",
    "CV Maju Mapan",
    "PT Sumber Makmur",
];

const UPLOAD_NAMES: [&str; 5] = [
    "BAMBANG SUDARMONO",
    "SITI NURHALIZA",
    "ANTO KUSUMA",
    "EKO PRASETYO",
    "DEWI SARTIKA",
];

const UPLOAD_COMPANY: &str = "PT Mitra Sejahtera";

fn alternating_gender(i: usize) -> Gender {
    if i % 2 == 0 {
        Gender::P
    } else {
        Gender::L
    }
}

/// Perorangan list
pub fn individual_participants() -> Vec<Participant> {
    (0..INDIVIDUAL_COUNT)
        .map(|i| Participant {
            id: format!("ind-{}", i + 1),
            date: format!("{} Jan 2024", 20 + (i % 10)),
            time: "10:00 WIB".to_string(),
            name: INDIVIDUAL_NAMES[i % INDIVIDUAL_NAMES.len()].to_string(),
            user_id: format!("239910{}", i),
            sub_text: format!("User ID : 239910{}", i),
            company: None,
            mcu_no: format!("0002993{}", 100 + i),
            dob: "12 May 1990".to_string(),
            gender: alternating_gender(i),
            result: InspectionResult::ALL[i % 4],
        })
        .collect()
}

/// Perusahaan list
pub fn corporate_participants() -> Vec<Participant> {
    (0..CORPORATE_COUNT)
        .map(|i| {
            let company = COMPANIES[i % COMPANIES.len()];
            Participant {
                id: format!("corp-{}", i + 1),
                date: format!("{} Feb 2024", 10 + (i % 10)),
                time: "08:30 WIB".to_string(),
                name: CORPORATE_NAMES[i % CORPORATE_NAMES.len()].to_string(),
                user_id: format!("EMP-J99-{}", 500 + i),
                sub_text: company.to_string(),
                company: Some(company.to_string()),
                mcu_no: format!("J99-MCU-{}", 800 + i),
                dob: "15 Aug 1985".to_string(),
                gender: if i % 3 == 0 { Gender::P } else { Gender::L },
                // corporate records never come back Kritis
                result: InspectionResult::ALL[i % 3],
            }
        })
        .collect()
}

/// Participants for one tab
pub fn participants_for(kind: ParticipantKind) -> Vec<Participant> {
    match kind {
        ParticipantKind::Individual => individual_participants(),
        ParticipantKind::Corporate => corporate_participants(),
    }
}

/// Submissions waiting in the "Pengajuan Baru" queue
pub fn new_submissions(kind: ParticipantKind) -> Vec<Participant> {
    let limit = match kind {
        ParticipantKind::Individual => NEW_SUBMISSIONS_INDIVIDUAL,
        ParticipantKind::Corporate => NEW_SUBMISSIONS_CORPORATE,
    };
    participants_for(kind).into_iter().take(limit).collect()
}

/// Placeholder records produced by an accepted spreadsheet upload
pub fn synthesize_upload_batch(kind: ParticipantKind) -> Vec<Participant> {
    (0..UPLOAD_BATCH_SIZE)
        .map(|i| {
            let (sub_text, company) = match kind {
                ParticipantKind::Individual => (format!("User ID : 239910{}", i), None),
                ParticipantKind::Corporate => {
                    (UPLOAD_COMPANY.to_string(), Some(UPLOAD_COMPANY.to_string()))
                }
            };
            Participant {
                id: format!("new-{}", i + 1),
                date: "30 Jan 2026".to_string(),
                time: "10:00 WIB".to_string(),
                name: UPLOAD_NAMES[i % UPLOAD_NAMES.len()].to_string(),
                user_id: format!("USR-{}", 5000 + i),
                sub_text,
                company,
                mcu_no: format!("000299{}", 300 + i),
                dob: "12 May 1990".to_string(),
                gender: alternating_gender(i),
                result: InspectionResult::ALL[i % 4],
            }
        })
        .collect()
}
