//! MCU Dashboard Common Library
//!
//! Participant model, the filter → search → sort → paginate pipeline, row
//! selection, the upload simulation and the dashboard state machine. Shared
//! by the CLI and the desktop app.

pub mod columns;
pub mod date;
pub mod error;
pub mod form;
pub mod mock;
pub mod navigation;
pub mod pipeline;
pub mod selection;
pub mod table;
pub mod types;
pub mod upload;

pub use columns::{visible_columns, Column};
pub use error::{Error, Result};
pub use form::{EditSession, FieldKind, FormField, FormSection, FormTab};
pub use navigation::{Dashboard, Dropdown, Notification, ReturnView, View};
pub use pipeline::{process, DataView, SortKey, SortOrder, SortState, ViewQuery, PAGE_SIZE};
pub use selection::{CheckState, Selection};
pub use table::TableState;
pub use types::{
    find_participant, Gender, InspectionResult, Participant, ParticipantKind, ResultFilter,
};
pub use upload::{UploadForm, UploadProgress, UploadedBatch};
