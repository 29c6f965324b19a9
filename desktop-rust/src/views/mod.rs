//! Central panel views and dialogs

pub mod form;
pub mod table;
pub mod upload;
