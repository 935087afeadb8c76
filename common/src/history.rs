//! Строки вкладки «История»

use crate::catalog::{project_name, work_type_name};
use crate::description::summarize;
use crate::format::{format_ru_date, photo_count_label};
use crate::types::{Project, RecordId, ReportRecord, WorkType};
use std::fmt;

/// Однострочная сводка по отчёту
///
/// Отдельные поля записи главнее текста: если сервер вернул объём, технику
/// или людей, сводка строится из них. Старые записи без полей сворачиваются
/// из `description`.
pub fn history_summary(record: &ReportRecord) -> String {
    record
        .details()
        .summary()
        .unwrap_or_else(|| summarize(&record.description))
}

/// Готовая к выводу строка истории
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: RecordId,
    pub date: String,
    pub project: String,
    pub work_type: String,
    pub photo_count: usize,
    pub summary: String,
}

impl HistoryEntry {
    pub fn from_record(
        record: &ReportRecord,
        work_types: &[WorkType],
        projects: &[Project],
    ) -> Self {
        Self {
            id: record.id.clone(),
            date: format_ru_date(record.display_date()),
            project: project_name(projects, &record.project_id).to_string(),
            work_type: work_type_name(work_types, &record.work_type_id).to_string(),
            photo_count: record.photo_urls.len(),
            summary: history_summary(record),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {}", self.id, self.date, self.work_type)?;
        if !self.project.is_empty() {
            write!(f, " ({})", self.project)?;
        }
        write!(f, " [{}]", photo_count_label(self.photo_count))?;
        if !self.summary.is_empty() {
            write!(f, ": {}", self.summary)?;
        }
        Ok(())
    }
}

/// Отсортировать: сначала новые
///
/// Сравнивается дата создания, при её отсутствии дата работ.
pub fn sort_newest_first(records: &mut [ReportRecord]) {
    records.sort_by(|a, b| {
        let key_a = if a.created_at.is_empty() { &a.date } else { &a.created_at };
        let key_b = if b.created_at.is_empty() { &b.date } else { &b.created_at };
        key_b.cmp(key_a)
    });
}
