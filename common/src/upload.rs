//! Bulk upload ("Upload Excel (Bulk)")
//!
//! The spreadsheet is never read. The file name is checked for an Excel
//! extension, a cosmetic progress counter runs to 100%, and submitting
//! produces a fixed batch of placeholder records.

use crate::error::{Error, Result};
use crate::mock;
use crate::types::{Participant, ParticipantKind};
use regex::Regex;

/// Shown when the picked file is not a spreadsheet
pub const REJECT_MESSAGE: &str = "Mohon pilih file format Excel (.xls atau .xlsx)";

/// Default progress step per tick, in percent
pub const DEFAULT_STEP_PERCENT: u8 = 10;

/// Default tick interval of the progress simulation
pub const DEFAULT_TICK_MS: u64 = 150;

lazy_static::lazy_static! {
    static ref EXCEL_NAME: Regex = Regex::new(r"(?i)\.(xls|xlsx)$").unwrap();
}

/// True for names ending in .xls or .xlsx, any case
pub fn is_excel_file_name(name: &str) -> bool {
    EXCEL_NAME.is_match(name.trim())
}

pub fn validate_file_name(name: &str) -> Result<()> {
    if is_excel_file_name(name) {
        Ok(())
    } else {
        tracing::warn!(file = name, "upload rejected, not an Excel file");
        Err(Error::UnsupportedFileType(name.to_string()))
    }
}

/// Simulated transfer progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    percent: u8,
    step: u8,
}

impl UploadProgress {
    pub fn new(step: u8) -> Self {
        Self {
            percent: 0,
            step: step.clamp(1, 100),
        }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100
    }

    /// Advance one interval; returns true once complete
    pub fn tick(&mut self) -> bool {
        if !self.is_complete() {
            self.percent = self.percent.saturating_add(self.step).min(100);
        }
        self.is_complete()
    }
}

/// Result of a submitted upload
#[derive(Debug, Clone)]
pub struct UploadedBatch {
    pub kind: ParticipantKind,
    pub file_name: String,
    pub records: Vec<Participant>,
}

/// State of the upload modal
#[derive(Debug, Clone)]
pub struct UploadForm {
    kind: Option<ParticipantKind>,
    file_name: Option<String>,
    progress: UploadProgress,
    step: u8,
}

impl Default for UploadForm {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_PERCENT)
    }
}

impl UploadForm {
    pub fn new(step: u8) -> Self {
        Self {
            kind: None,
            file_name: None,
            progress: UploadProgress::new(step),
            step,
        }
    }

    pub fn kind(&self) -> Option<ParticipantKind> {
        self.kind
    }

    pub fn select_kind(&mut self, kind: ParticipantKind) {
        self.kind = Some(kind);
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Attach a file; a rejected name leaves the form untouched
    pub fn choose_file(&mut self, name: &str) -> Result<()> {
        validate_file_name(name)?;
        tracing::debug!(file = name, "upload file accepted");
        self.file_name = Some(name.to_string());
        self.progress = UploadProgress::new(self.step);
        Ok(())
    }

    pub fn remove_file(&mut self) {
        self.file_name = None;
        self.progress = UploadProgress::new(self.step);
    }

    pub fn progress(&self) -> u8 {
        self.progress.percent()
    }

    pub fn is_uploading(&self) -> bool {
        self.file_name.is_some() && !self.progress.is_complete()
    }

    /// Advance the simulated transfer; no-op without a file
    pub fn tick(&mut self) -> bool {
        if self.file_name.is_none() {
            return false;
        }
        self.progress.tick()
    }

    /// Submit button enabled state
    pub fn is_ready(&self) -> bool {
        self.kind.is_some() && self.file_name.is_some() && self.progress.is_complete()
    }

    pub fn submit(&self) -> Result<UploadedBatch> {
        let kind = self.kind.ok_or(Error::UploadNotReady("participant type not selected"))?;
        let file_name = self
            .file_name
            .clone()
            .ok_or(Error::UploadNotReady("no file selected"))?;
        if !self.progress.is_complete() {
            return Err(Error::UploadNotReady("upload still in progress"));
        }

        let records = mock::synthesize_upload_batch(kind);
        tracing::info!(kind = %kind, count = records.len(), "upload batch synthesized");
        Ok(UploadedBatch {
            kind,
            file_name,
            records,
        })
    }
}
