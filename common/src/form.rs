//! Medical examination form ("Edit Data Peserta")
//!
//! The form is a static description: ten tabs, each a list of collapsible
//! sections holding typed fields with default values. Edits are kept in an
//! [`EditSession`] draft and thrown away on save or cancel.

use crate::error::{Error, Result};
use crate::types::Participant;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

const LOCATION: &str = "Malang";
const SIGN_DATE: &str = "21 Januari 2026";
const DOCTOR: &str = "dr. Cesro Maulana Sangka";
const DOCTOR_SIP: &str = "503.2/96.1/KAB/DU/II/2022";
const SIGNATURE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/3/3a/Jon_Kirsch%27s_Signature.png";
const STAMP_URL: &str = "https://img.freepik.com/premium-vector/original-stamp-red-circle-round-tag-rubber-sign-flat-style_662353-847.jpg";
const GRAPH_URL: &str = "https://i.ibb.co/LhygM4V/ecg-ref.png";
const PHOTO_URL: &str = "https://picsum.photos/200/200?random=khodijah";

const NORMAL: &str = "Normal";
const YES_NO: &[&str] = &["Ya", "Tidak"];
const TRUE_FALSE: &[&str] = &["Benar", "Salah"];

const MENTAL_QUESTIONS: [&str; 10] = [
    "Saat ini kita sedang berada dimana?",
    "Tahun berapa sekarang?",
    "Berapakah umur Anda?",
    "Tahun berapa Anda lahir?",
    "Jam brp sekarang? (boleh lihat jam)",
    "Dimana alamat rumah Anda? (RT,RW,Kelurahan)",
    "Mampukah Anda mengenali orang di sekitar?",
    "Tahun berapa Indonesia merdeka?",
    "Siapa nama presiden RI sekarang?",
    "Menghitung mundur dari 20 sampai 1?",
];

const JIWA_QUESTIONS: [&str; 22] = [
    "Apakah Anda sering menderita sakit kepala?",
    "Apakah Anda tidak nafsu makan?",
    "Apakah Anda sulit tidur?",
    "Apakah Anda mudah takut?",
    "Apakah Anda merasa tegang, cemas, atau kawatir?",
    "Apakah Anda tangan Anda gemetar?",
    "Apakah pernernaan Anda terganggu/buruk?",
    "Apakah Anda sulit untuk berpikir jernih?",
    "Apakah Anda merasa tidak bahagia?",
    "Apakah Anda lebih menangis lebih sering?",
    "Apakah Anda merasa sulit untuk menikmati kegiatan sehari-hari?",
    "Apakah Anda sulit untuk mengambil keputusan?",
    "Apakah pekerjaan Anda sehari-hari terganggu?",
    "Apakah Anda tidak mampu melakukan hal-hal yang bermanfaat dalam hidup?",
    "Apakah Anda kehilangan minat pada berbagai hal?",
    "Apakah Anda merasa tidak berharga?",
    "Apakah Anda mempunyai pikiran untuk mengakhiri hidup?",
    "Apakah Anda merasa lelah sepanjang waktu?",
    "Apakah Anda mengalami rasa tidak enak di perut?",
    "Apakah Anda mudah lelah?",
    "Apakah pernah berobat ke dokter Spesialis Jiwa?",
    "Apakah minum obat Psikiatri?",
];

const SUMMARY_PHYSICAL: &str = "Caries +, Gigi Lubang +, Gigi Hilang +, Prehipertensi, obesitas dan lingkar perut berlebih, pemeriksaan mental dan jiwa dalam batas normal";
const SUMMARY_CONCLUSION: &str = "Berdasarkan jenis pemeriksaan yang dilakukan dan kondisi saat ini : Caries +, Gigi Lubang +, Gigi Hilang +, Prehipertensi, obesitas dan lingkar perut berlebih, HBA1C meningkat 6.3 (karena tidak puasa), Kolesterol meningkat (273 mg/dL), Trigliserida meningkat (271 mg/dL), pemeriksaan mental dan jiwa dalam batas normal";
const SUMMARY_ADVICE: &str = "1. Menjaga kesehatan gigi dan mulut serta dapat menjadwalkan ke dokter gigi untuk perawatan gigi.\n2. Menjaga gaya hidup sehat, tidur cukup, mengonsumsi makanan rendah garam dan tinggi serat, berolahraga teratur, dan menjaga berat badan ideal, serta melakukan pemeriksaan tekanan darah secara berkala.\n3. IMT obesitas mengindikasikan penumpukan lemak berlebih di tubuh, yang menandakan kondisi obesitas sentral dan obesitas umum...";
const PULMO_FINDINGS: &str = "- Tidak tampak nodul, infiltrate, massa\n- Sinus phrenicocostalis kanan dan kiri tajam\n- Trakea di tengah\n- Sinus costofrenicus dan diafragma normal\n- Tulang-tulang normal";

/// Tabs of the examination form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum FormTab {
    #[default]
    ParticipantInfo,
    Summary,
    PhysicalExam,
    Laboratory,
    Radiology,
    Ecg,
    MentalHealth,
    Audiometry,
    Spirometry,
    FitnessTest,
}

impl FormTab {
    pub const ALL: [FormTab; 10] = [
        FormTab::ParticipantInfo,
        FormTab::Summary,
        FormTab::PhysicalExam,
        FormTab::Laboratory,
        FormTab::Radiology,
        FormTab::Ecg,
        FormTab::MentalHealth,
        FormTab::Audiometry,
        FormTab::Spirometry,
        FormTab::FitnessTest,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormTab::ParticipantInfo => "Informasi Peserta Dan Akun",
            FormTab::Summary => "Rangkuman Hasil",
            FormTab::PhysicalExam => "Pemeriksaan Fisik",
            FormTab::Laboratory => "Laboratorium",
            FormTab::Radiology => "Radiologi",
            FormTab::Ecg => "ECG",
            FormTab::MentalHealth => "Kesehatan Jiwa",
            FormTab::Audiometry => "Audiometri",
            FormTab::Spirometry => "Spirometri",
            FormTab::FitnessTest => "Fitness Test",
        }
    }

    /// Short key used as field id prefix and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            FormTab::ParticipantInfo => "participant",
            FormTab::Summary => "summary",
            FormTab::PhysicalExam => "physical",
            FormTab::Laboratory => "lab",
            FormTab::Radiology => "radiology",
            FormTab::Ecg => "ecg",
            FormTab::MentalHealth => "mental",
            FormTab::Audiometry => "audiometry",
            FormTab::Spirometry => "spirometry",
            FormTab::FitnessTest => "fitness",
        }
    }

    pub fn index(&self) -> usize {
        FormTab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Option<FormTab> {
        FormTab::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<FormTab> {
        self.index().checked_sub(1).map(|i| FormTab::ALL[i])
    }

    /// Build the sections of this tab, identity fields taken from `participant`
    pub fn sections(&self, participant: &Participant) -> Vec<FormSection> {
        match self {
            FormTab::ParticipantInfo => participant_info(participant),
            FormTab::Summary => summary(),
            FormTab::PhysicalExam => physical_exam(),
            FormTab::Laboratory => laboratory(),
            FormTab::Radiology => radiology(),
            FormTab::Ecg => ecg(),
            FormTab::MentalHealth => mental_health(),
            FormTab::Audiometry => audiometry(),
            FormTab::Spirometry => spirometry(),
            FormTab::FitnessTest => fitness_test(),
        }
    }
}

impl fmt::Display for FormTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FormTab {
    type Err = Error;

    /// Accepts the key or the label, case-insensitive
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        FormTab::ALL
            .iter()
            .copied()
            .find(|tab| {
                tab.key().eq_ignore_ascii_case(needle) || tab.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| Error::UnknownFormTab(s.to_string()))
    }
}

/// How a field is presented and edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    LongText,
    Choice { options: &'static [&'static str] },
    /// Read-only value; "Normal" is highlighted
    Status,
    /// Vital sign or lab row
    Measurement { unit: &'static str, normal: &'static str },
    SubHeader,
    Question { no: usize, options: &'static [&'static str] },
    Numbered { no: usize },
    /// Default value holds the image location
    Image,
}

impl FieldKind {
    pub fn is_editable(&self) -> bool {
        !matches!(self, FieldKind::Status | FieldKind::SubHeader | FieldKind::Image)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub id: String,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSection {
    pub id: String,
    pub title: &'static str,
    pub fields: Vec<FormField>,
}

impl FormSection {
    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }
}

struct SectionBuilder {
    id: String,
    title: &'static str,
    fields: Vec<FormField>,
}

impl SectionBuilder {
    fn new(tab: FormTab, index: usize, title: &'static str) -> Self {
        Self {
            id: format!("{}.{}", tab.key(), index),
            title,
            fields: Vec::new(),
        }
    }

    fn push(mut self, label: &'static str, kind: FieldKind, default: impl Into<String>) -> Self {
        let id = format!("{}.{}", self.id, self.fields.len() + 1);
        self.fields.push(FormField {
            id,
            label,
            kind,
            default: default.into(),
        });
        self
    }

    fn text(self, label: &'static str, default: impl Into<String>) -> Self {
        self.push(label, FieldKind::Text, default)
    }

    fn long_text(self, label: &'static str, default: impl Into<String>) -> Self {
        self.push(label, FieldKind::LongText, default)
    }

    fn status(self, label: &'static str) -> Self {
        self.status_of(label, NORMAL)
    }

    fn status_of(self, label: &'static str, value: &str) -> Self {
        self.push(label, FieldKind::Status, value)
    }

    fn measure(self, label: &'static str, value: &str, unit: &'static str, normal: &'static str) -> Self {
        self.push(label, FieldKind::Measurement { unit, normal }, value)
    }

    fn sub_header(self, label: &'static str) -> Self {
        self.push(label, FieldKind::SubHeader, "")
    }

    fn image(self, label: &'static str, src: &str) -> Self {
        self.push(label, FieldKind::Image, src)
    }

    fn build(self) -> FormSection {
        FormSection {
            id: self.id,
            title: self.title,
            fields: self.fields,
        }
    }
}

fn administration(tab: FormTab, index: usize, title: &'static str) -> FormSection {
    SectionBuilder::new(tab, index, title)
        .text("Lokasi", LOCATION)
        .text("Tanggal", SIGN_DATE)
        .text("Dokter Penanggung Jawab MCU", DOCTOR)
        .text("SIP", DOCTOR_SIP)
        .image("Tanda Tangan Dokter", SIGNATURE_URL)
        .image("Stempel Klinik/Perusahaan", STAMP_URL)
        .build()
}

fn participant_info(participant: &Participant) -> Vec<FormSection> {
    let tab = FormTab::ParticipantInfo;
    vec![
        SectionBuilder::new(tab, 1, "Informasi Peserta")
            .image("Foto Peserta", PHOTO_URL)
            .text("Nama Lengkap", participant.name.as_str())
            .text("Tgl. Lahir", participant.dob.as_str())
            .push(
                "Jenis Kelamin",
                FieldKind::Choice {
                    options: &["Perempuan", "Laki-laki"],
                },
                participant.gender.label(),
            )
            .text("Nomor MCU", participant.mcu_no.as_str())
            .text("Nomor KTP/ID", "3572883990003")
            .text("Tanggal Periksa", participant.date.as_str())
            .build(),
        SectionBuilder::new(tab, 2, "Informasi Akun")
            .text("Email", "khodijah@example.com")
            .text("Nomor Telepon", "081234567890")
            .build(),
    ]
}

fn summary() -> Vec<FormSection> {
    let tab = FormTab::Summary;
    vec![
        SectionBuilder::new(tab, 1, "1. Pemeriksaan Fisik")
            .long_text("Hasil Pemeriksaan Fisik", SUMMARY_PHYSICAL)
            .build(),
        SectionBuilder::new(tab, 2, "2. Laboratorium")
            .status("Hematologi lengkap")
            .status("Fungsi liver")
            .text("Metabolisme karbohidrat", "HBA1C meningkat 6.3 (karena tidak puasa)")
            .text(
                "Profil lemak",
                "Kolesterol meningkat (273 mg/dL), Trigliserida meningkat (271 mg/dL)",
            )
            .status("Fungsi ginjal")
            .status_of("Toksikologi (Kolinesterase)", "Tidak dilakukan pemeriksaan")
            .status("Imunoserologi (HBsAg)")
            .status_of("Golongan darah", "A rhesus + (positive)")
            .status("Urine lengkap")
            .status_of("Cek WUS (kehamilan)", "Negatif")
            .status_of("Feses lengkap", "Negatif")
            .build(),
        SectionBuilder::new(tab, 3, "3. Non Laboratorium")
            .status("Thorax")
            .status("ECG")
            .status("Audiometri")
            .build(),
        SectionBuilder::new(tab, 4, "4. Kesimpulan, Rekomendasi & Saran")
            .long_text("Kesimpulan", SUMMARY_CONCLUSION)
            .text("Rekomendasi", "Istithaah (Lulus)")
            .long_text("Saran", SUMMARY_ADVICE)
            .build(),
        administration(tab, 5, "5. Administrasi & Pengesahan"),
    ]
}

fn physical_exam() -> Vec<FormSection> {
    let tab = FormTab::PhysicalExam;
    let mut body = SectionBuilder::new(tab, 4, "4. Pemeriksaan Fisik");
    for part in ["Kepala", "Mata", "Hidung", "Telinga"] {
        body = body.status(part);
    }
    body = body.text("Kesehatan gigi", "Caries +, Gigi Lubang +, Gigi Hilang +");
    for part in [
        "Tenggorokan",
        "Leher",
        "Dada",
        "Abdomen",
        "Punggung",
        "Ekstrimitas",
        "Rectal",
        "Urogenital",
    ] {
        body = body.status(part);
    }

    vec![
        SectionBuilder::new(tab, 1, "1. Keluhan")
            .long_text("Keluhan", "Tidak ada")
            .build(),
        SectionBuilder::new(tab, 2, "2. Riwayat Penyakit")
            .text("Riwayat Dahulu", "Hipertensi (Rutin amodipin 5mg)")
            .text("Riwayat Keluarga (Bapak)", "HT")
            .text("Riwayat Keluarga (Ibu)", "Tidak ada")
            .text("Riwayat Phobia", "Tidak ada")
            .build(),
        SectionBuilder::new(tab, 3, "3. Kebiasaan")
            .status_of("Merokok/tidak", "Tidak")
            .text("Olahraga/tidak", "Rutin 1x seminggu")
            .status_of("Alkohol/tidak", "Tidak")
            .build(),
        body.build(),
        SectionBuilder::new(tab, 5, "5. Vital Sign")
            .measure("Tekanan Darah", "125/75", "mmHg", "120/80 mmHg")
            .measure("Nadi", "85", "x/mt", "60-100 x/mt")
            .measure("BB/TB", "82/153", "Kg/cm", "-")
            .measure("IMT", "35.03", "-", "18,5 – 24,9")
            .measure("Suhu Tubuh", "36.4", "°C", "36.3°C – 37.2°C")
            .measure("Lingkar Perut", "98", "cm", "Pria < 90, Wanita < 80")
            .measure("Saturasi", "98", "%", "95-100")
            .build(),
        administration(tab, 6, "6. Administrasi & Pengesahan"),
    ]
}

fn laboratory() -> Vec<FormSection> {
    let tab = FormTab::Laboratory;
    vec![
        SectionBuilder::new(tab, 1, "1. Hematologi Lengkap")
            .measure("Hemoglobin (HGB)", "14.4", "g/dL", "11,0 - 18,0")
            .measure("Eritrosit (RBC)", "5.4", "10⁶/µL", "4,20 - 6,00")
            .measure("Leukosit (WBC)", "8.9", "10³/µL", "3,6 - 10,6")
            .measure("Hematokrit (HCT)", "46.7", "%", "40 - 54")
            .measure("Trombosit (PLT)", "304", "10³/µL", "150 - 450")
            .measure("MCV", "88", "fL", "80 - 100")
            .measure("MCH", "26.4", "pg/cell", "26 - 34")
            .measure("MCHC", "30", "g/dL", "32 - 36")
            .measure("RDW", "13.3", "%", "11,5 - 14,5")
            .measure("MPV", "11.2", "fL", "7,2 - 11,1")
            .measure("Limfosit %", "24.8", "%", "18 - 42")
            .measure("Mid Cel %", "5.3", "%", "2 - 11")
            .measure("Granulosit %", "62", "%", "50 - 70")
            .measure("Lymfosit Abs", "2.2", "10³/µL", "0,8 - 4,0")
            .measure("Mid Cel Abs", "0.5", "10³/µL", "0,1 - 1,2")
            .measure("Granulosit Abs", "6.2", "10³/µL", "2,0 - 7,0")
            .measure(
                "LED",
                "30",
                "mm/jam",
                "<50th: L:0-15 P:0-20 >50th: L:0-20 P:0-30\nAnak-anak : 0-10, Ibu Hamil: Tm Awal:18-48 Tm Akhir:30-70",
            )
            .build(),
        SectionBuilder::new(tab, 2, "2. Kimia Klinik")
            .sub_header("Fungsi liver")
            .measure("SGOT", "17", "U/L", "0 - 40")
            .measure("SGPT", "20", "U/L", "0 - 40")
            .measure("Kolinesterase", "-", "U/L", "4.620-11.500")
            .sub_header("Metabolisme karbohidrat")
            .measure("Glukosa Puasa", "-", "mg/dL", "70 - 130")
            .measure("Glukosa Sesaat", "156", "mg/dL", "<200")
            .measure("HBA1C", "6.3", "%", "3,8 - 5,8")
            .sub_header("Fungsi ginjal")
            .measure("Asam Urat", "3.1", "mg/dL", "L=3,5-7,0; P=2,4-6,0")
            .measure("Ureum", "27", "mg/dL", "15 - 55")
            .measure("Kreatinin", "0.6", "mg/dL", "L=0,6-1,2; P=0,5-1,1")
            .sub_header("Profil lemak")
            .measure("Kolesterol total", "273", "mg/dL", "<200")
            .measure("Trigliserida", "271", "mg/dL", "<150")
            .measure("LDL", "-", "mg/dL", "<100")
            .measure("HDL", "-", "mg/dL", ">60")
            .build(),
        SectionBuilder::new(tab, 3, "3. Golongan Darah")
            .measure("Golongan darah", "A rh +", "-", "-")
            .build(),
        SectionBuilder::new(tab, 4, "4. Urine Lengkap")
            .measure("Warna", "Kuning", "(-)", "Kuning")
            .measure("Kejernihan", "Jernih", "(-)", "Jernih")
            .measure("Berat Jenis", "1.015", "(-)", "1.005 - 1.030")
            .measure("pH", "7", "(-)", "5.0 - 8.0")
            .measure("Nitrit", "Negatif", "(-)", "Negatif")
            .measure("Albumin", "Negatif", "(-)", "Negatif")
            .measure("Glukosa", "Negatif", "(-)", "Negatif")
            .measure("Keton", "Negatif", "(-)", "Negatif")
            .measure("Urobilirubin", "Negatif", "(-)", "Negatif")
            .measure("Bilirubin", "Negatif", "(-)", "Negatif")
            .measure("Eritrosit", "0-3", "plp", "0 - 4 plp")
            .measure("Leukosit", "1-2", "plp", "0 - 4 plp")
            .measure("Epitel", "1-4", "plp", "1 - 4 plp")
            .measure("Kristal urine", "Negatif", "(-)", "Negatif")
            .measure("Silinder", "Negatif", "(-)", "Negatif")
            .build(),
        SectionBuilder::new(tab, 5, "5. Cek Kehamilan")
            .measure("Cek kehamilan (WUS)", "Negatif", "-", "-")
            .build(),
        SectionBuilder::new(tab, 6, "6. Feses Lengkap")
            .measure("Warna", "Coklat", "-", "Coklat")
            .measure("Konsistensi", "Lembek", "-", "Lembek")
            .measure("Lendir", "Negatif", "-", "Negatif")
            .measure("Darah Feses", "Negatif", "-", "Negatif")
            .measure("Eritrosit", "0 - 1", "/lp", "0 - 1")
            .measure("Leukosit", "2 - 3", "/lp", "1 - 3")
            .measure("Amoeba", "Negatif", "-", "Negatif")
            .measure("Telur Cacing", "Negatif", "-", "Negatif")
            .measure("Sisa makanan", "Positif", "-", "-")
            .build(),
        administration(tab, 7, "7. Administrasi & Pengesahan"),
    ]
}

fn radiology() -> Vec<FormSection> {
    let tab = FormTab::Radiology;
    vec![
        SectionBuilder::new(tab, 1, "1. Jenis Pemeriksaan")
            .text("FOTO RO", "FOTO THORAX PA")
            .build(),
        SectionBuilder::new(tab, 2, "2. Hasil Rontgen")
            .long_text("Cor", "Bentuk, posisi, dan ukuran normal")
            .long_text("Pulmo", PULMO_FINDINGS)
            .build(),
        SectionBuilder::new(tab, 3, "3. Kesimpulan")
            .long_text("Kesimpulan", "Saat ini cor dan pulmo tak tampak kelainan")
            .build(),
        administration(tab, 4, "4. Administrasi & Pengesahan"),
    ]
}

fn ecg() -> Vec<FormSection> {
    let tab = FormTab::Ecg;
    vec![
        SectionBuilder::new(tab, 1, "1. Hasil Grafik ECG")
            .image("Grafik ECG", GRAPH_URL)
            .build(),
        SectionBuilder::new(tab, 2, "2. Detail Pemeriksaan")
            .text("Irama Sinus", "Sinus Rhythm")
            .text("Denyut Jantung", "97")
            .text("Bacaan ECG", "Normal ECG")
            .build(),
        SectionBuilder::new(tab, 3, "3. Kesimpulan")
            .long_text(
                "Kesimpulan hasil pemeriksaan ECG (denyut jantung)",
                "Dalam batas normal",
            )
            .build(),
        administration(tab, 4, "4. Administrasi & Pengesahan"),
    ]
}

fn mental_health() -> Vec<FormSection> {
    let tab = FormTab::MentalHealth;

    let mut mental = SectionBuilder::new(tab, 1, "1. Pemeriksaan Mental");
    for (i, question) in MENTAL_QUESTIONS.into_iter().enumerate() {
        mental = mental.push(
            question,
            FieldKind::Question {
                no: i + 1,
                options: TRUE_FALSE,
            },
            "Benar",
        );
    }

    let mut jiwa = SectionBuilder::new(tab, 2, "2. Pemeriksaan Kesehatan Jiwa Sederhana");
    for (i, question) in JIWA_QUESTIONS.into_iter().enumerate() {
        jiwa = jiwa.push(
            question,
            FieldKind::Question {
                no: i + 1,
                options: YES_NO,
            },
            "Tidak",
        );
    }

    vec![
        mental.build(),
        jiwa.build(),
        SectionBuilder::new(tab, 3, "3. Pemeriksaan Kognitif")
            .sub_header("a. Mini Cog")
            .text("Menyebutkan 3 kata", "Dapat menyebutkan 3 kata")
            .sub_header("b. Clock drawing test")
            .image("Gambar Jam", GRAPH_URL)
            .sub_header("c. Menyebutkan Kembali 3 kata")
            .text("Recall 3 kata", "Dapat menyebutkan 3 kata")
            .build(),
        administration(tab, 4, "4. Administrasi & Pengesahan"),
    ]
}

fn audiometry() -> Vec<FormSection> {
    let tab = FormTab::Audiometry;
    vec![
        SectionBuilder::new(tab, 1, "1. Grafik Audiometri")
            .image("Grafik Audiometri", GRAPH_URL)
            .build(),
        SectionBuilder::new(tab, 2, "2. Kesimpulan Audiometri")
            .text("Telinga Kanan", "Normal 11.7 dB")
            .text("Telinga Kiri", "Normal 10 dB")
            .long_text(
                "Hasil Akhir Bacaan Audiometri",
                "Telinga kanan: Normal 11.7 dB, Telinga kiri: Normal 10 dB",
            )
            .build(),
        administration(tab, 3, "3. Administrasi & Pengesahan"),
    ]
}

fn spirometry() -> Vec<FormSection> {
    let tab = FormTab::Spirometry;
    vec![
        SectionBuilder::new(tab, 1, "1. Hasil Grafik Spirometri")
            .image("Grafik Spirometri", GRAPH_URL)
            .build(),
        SectionBuilder::new(tab, 2, "2. Kesimpulan")
            .long_text(
                "Kesimpulan hasil pemeriksaan spirometri",
                "gangguan restriksi ringan",
            )
            .build(),
        administration(tab, 3, "3. Administrasi & Pengesahan"),
    ]
}

fn fitness_test() -> Vec<FormSection> {
    let tab = FormTab::FitnessTest;
    let rows = [
        ("Denyut jantung", "140x / menit"),
        ("Kalori", "40"),
        ("Speed", "40"),
        ("Durasi", "5 menit"),
        ("Kunci", "5"),
        ("Jarak", "2 km"),
    ];

    let mut results = SectionBuilder::new(tab, 1, "1. Hasil Pemeriksaan Fitness Test");
    for (i, (label, value)) in rows.into_iter().enumerate() {
        results = results.push(label, FieldKind::Numbered { no: i + 1 }, value);
    }

    vec![
        results.build(),
        SectionBuilder::new(tab, 2, "2. Kesimpulan")
            .long_text(
                "Kesimpulan Fitness Test",
                "Kesimpulan hasil pemeriksaan ECG (denyut jantung): Dalam batas normal",
            )
            .build(),
        administration(tab, 3, "3. Administrasi & Pengesahan"),
    ]
}

/// Editing state of one participant's form
///
/// Values the user has not touched fall back to the field default. The
/// draft never outlives the session: saving and cancelling both drop it.
#[derive(Debug, Clone)]
pub struct EditSession {
    participant: Participant,
    tab: FormTab,
    draft: HashMap<String, String>,
    collapsed: BTreeSet<String>,
}

impl EditSession {
    pub fn new(participant: Participant) -> Self {
        tracing::debug!(id = %participant.id, "edit session opened");
        Self {
            participant,
            tab: FormTab::default(),
            draft: HashMap::new(),
            collapsed: BTreeSet::new(),
        }
    }

    pub fn participant(&self) -> &Participant {
        &self.participant
    }

    pub fn tab(&self) -> FormTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: FormTab) {
        self.tab = tab;
    }

    /// Sections of the active tab
    pub fn sections(&self) -> Vec<FormSection> {
        self.tab.sections(&self.participant)
    }

    fn find_field(&self, id: &str) -> Option<FormField> {
        let prefix = id.split('.').next().unwrap_or_default();
        let tab = prefix.parse::<FormTab>().ok()?;
        tab.sections(&self.participant)
            .into_iter()
            .flat_map(|s| s.fields)
            .find(|f| f.id == id)
    }

    /// Current value: the draft if edited, otherwise the default
    pub fn value(&self, field: &FormField) -> String {
        self.draft
            .get(&field.id)
            .cloned()
            .unwrap_or_else(|| field.default.clone())
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        let field = self
            .find_field(id)
            .ok_or_else(|| Error::UnknownField(id.to_string()))?;
        if !field.kind.is_editable() {
            return Err(Error::ReadOnlyField(id.to_string()));
        }

        let value = value.into();
        if let FieldKind::Choice { options } | FieldKind::Question { options, .. } = &field.kind {
            if !options.contains(&value.as_str()) {
                return Err(Error::InvalidChoice {
                    field: id.to_string(),
                    value,
                });
            }
        }
        if value == field.default {
            self.draft.remove(id);
        } else {
            self.draft.insert(id.to_string(), value);
        }
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        !self.draft.is_empty()
    }

    pub fn changed_fields(&self) -> usize {
        self.draft.len()
    }

    pub fn toggle_section(&mut self, section_id: &str) {
        if !self.collapsed.remove(section_id) {
            self.collapsed.insert(section_id.to_string());
        }
    }

    pub fn is_collapsed(&self, section_id: &str) -> bool {
        self.collapsed.contains(section_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::individual_participants;

    fn session() -> EditSession {
        let participant = individual_participants().remove(0);
        EditSession::new(participant)
    }

    #[test]
    fn test_ten_tabs_in_order() {
        assert_eq!(FormTab::ALL.len(), 10);
        assert_eq!(FormTab::ALL[0].label(), "Informasi Peserta Dan Akun");
        assert_eq!(FormTab::ALL[9].label(), "Fitness Test");
        assert_eq!(FormTab::FitnessTest.next(), None);
        assert_eq!(FormTab::ParticipantInfo.previous(), None);
        assert_eq!(FormTab::Summary.previous(), Some(FormTab::ParticipantInfo));
    }

    #[test]
    fn test_form_tab_from_str() {
        assert_eq!("lab".parse::<FormTab>().unwrap(), FormTab::Laboratory);
        assert_eq!("kesehatan jiwa".parse::<FormTab>().unwrap(), FormTab::MentalHealth);
        assert!("dental".parse::<FormTab>().is_err());
    }

    #[test]
    fn test_identity_prefilled_from_participant() {
        let session = session();
        let sections = session.sections();
        let info = &sections[0];
        let value_of = |label: &str| {
            info.fields
                .iter()
                .find(|f| f.label == label)
                .map(|f| session.value(f))
                .unwrap_or_default()
        };

        assert_eq!(value_of("Nama Lengkap"), "BUDI SANTOSO, S.T.");
        assert_eq!(value_of("Nomor MCU"), "0002993100");
        assert_eq!(value_of("Jenis Kelamin"), "Perempuan");
        assert_eq!(value_of("Tanggal Periksa"), "20 Jan 2024");
        assert_eq!(value_of("Nomor KTP/ID"), "3572883990003");
    }

    #[test]
    fn test_field_ids_unique_per_tab() {
        let participant = individual_participants().remove(0);
        for tab in FormTab::ALL {
            let mut ids = BTreeSet::new();
            for section in tab.sections(&participant) {
                assert!(section.id.starts_with(tab.key()));
                for field in section.fields {
                    assert!(ids.insert(field.id.clone()), "duplicate {}", field.id);
                }
            }
        }
    }

    #[test]
    fn test_administration_closes_clinical_tabs() {
        let participant = individual_participants().remove(0);
        for tab in &FormTab::ALL[1..] {
            let sections = tab.sections(&participant);
            let last = sections.last().expect("tab has sections");
            assert!(last.title.ends_with("Administrasi & Pengesahan"), "{}", tab);
            assert_eq!(last.fields[2].default, DOCTOR);
        }
    }

    #[test]
    fn test_questionnaire_defaults() {
        let participant = individual_participants().remove(0);
        let sections = FormTab::MentalHealth.sections(&participant);
        assert_eq!(sections[0].fields.len(), 10);
        assert!(sections[0].fields.iter().all(|f| f.default == "Benar"));
        assert_eq!(sections[1].fields.len(), 22);
        assert!(sections[1].fields.iter().all(|f| f.default == "Tidak"));
        assert!(matches!(
            sections[1].fields[21].kind,
            FieldKind::Question { no: 22, .. }
        ));
    }

    #[test]
    fn test_draft_edit_and_revert() {
        let mut session = session();
        session.set_tab(FormTab::Spirometry);
        let field = session.sections()[1].fields[0].clone();
        assert_eq!(session.value(&field), "gangguan restriksi ringan");

        session.set_value(&field.id, "normal").expect("set failed");
        assert!(session.is_dirty());
        assert_eq!(session.value(&field), "normal");

        session
            .set_value(&field.id, "gangguan restriksi ringan")
            .expect("set failed");
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_set_value_on_other_tab() {
        let mut session = session();
        session.set_value("fitness.1.4", "10 menit").expect("set failed");
        assert_eq!(session.changed_fields(), 1);
        assert_eq!(session.tab(), FormTab::ParticipantInfo);
    }

    #[test]
    fn test_read_only_and_unknown_fields() {
        let mut session = session();
        // summary.2.1 is the Hematologi status row
        assert!(matches!(
            session.set_value("summary.2.1", "Abnormal"),
            Err(Error::ReadOnlyField(_))
        ));
        assert!(matches!(
            session.set_value("summary.99.1", "x"),
            Err(Error::UnknownField(_))
        ));
    }

    #[test]
    fn test_toggle_section() {
        let mut session = session();
        assert!(!session.is_collapsed("lab.1"));
        session.toggle_section("lab.1");
        assert!(session.is_collapsed("lab.1"));
        session.toggle_section("lab.1");
        assert!(!session.is_collapsed("lab.1"));
    }

    #[test]
    fn test_choice_outside_options() {
        let mut session = session();
        // participant.1.4 is "Jenis Kelamin"
        assert!(matches!(
            session.set_value("participant.1.4", "Lainnya"),
            Err(Error::InvalidChoice { .. })
        ));
        session.set_value("participant.1.4", "Laki-laki").expect("set failed");
        assert_eq!(session.changed_fields(), 1);

        assert!(matches!(
            session.set_value("mental.1.1", "Mungkin"),
            Err(Error::InvalidChoice { .. })
        ));
        assert_eq!(session.changed_fields(), 1);
    }
}
