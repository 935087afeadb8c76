//! Ptobot Common Library
//!
//! Модель отчёта, сборка/разбор описания и состояние экрана.
//! Используется CLI-клиентом и тестами.

pub mod access;
pub mod catalog;
pub mod description;
pub mod error;
pub mod format;
pub mod history;
pub mod session;
pub mod theme;
pub mod types;

pub use access::AccessList;
pub use description::{collapse_whitespace, encode, summarize, ReportDetails};
pub use error::{Error, Result, ValidationError};
pub use format::format_ru_date;
pub use history::{history_summary, sort_newest_first, HistoryEntry};
pub use session::{ReportSession, ReportSubmission, Tab};
pub use theme::{Palette, Theme};
pub use types::{
    AccessRow, AccessUser, PhotoAttachment, Project, RecordId, ReportCreated, ReportDraft,
    ReportRecord, Role, RootInfo, WorkType,
};
