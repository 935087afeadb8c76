use crate::api::{ReportApi, ReportFilter};
use crate::error::Result;
use ptobot_common::catalog;
use ptobot_common::{
    sort_newest_first, HistoryEntry, Project, ReportDetails, ReportRecord, WorkType,
};

/// История с сервера, новые сверху
pub async fn load_history(api: &ReportApi, filter: &ReportFilter) -> Result<Vec<ReportRecord>> {
    let mut records = api.list_reports(filter).await?;
    sort_newest_first(&mut records);
    Ok(records)
}

/// Демонстрационная история с теми же фильтрами
pub fn demo_history(filter: &ReportFilter) -> Vec<ReportRecord> {
    let mut records: Vec<ReportRecord> = catalog::demo_history()
        .into_iter()
        .filter(|r| matches_filter(r, filter))
        .collect();
    sort_newest_first(&mut records);
    records
}

fn matches_filter(record: &ReportRecord, filter: &ReportFilter) -> bool {
    let field_matches = |wanted: &Option<String>, actual: &str| {
        wanted.as_deref().map(|w| w == actual).unwrap_or(true)
    };
    field_matches(&filter.user_id, &record.user_id)
        && field_matches(&filter.project_id, &record.project_id)
        && field_matches(&filter.work_type_id, &record.work_type_id)
}

/// Строки для вывода; с `full` под строкой печатается комментарий отчёта
pub fn render_history(
    records: &[ReportRecord],
    work_types: &[WorkType],
    projects: &[Project],
    full: bool,
) -> Vec<String> {
    let mut lines = Vec::new();
    for record in records {
        lines.push(HistoryEntry::from_record(record, work_types, projects).to_string());
        if full {
            let details = ReportDetails::from_description(&record.description);
            lines.extend(details.comment.lines().map(|line| format!("    {}", line)));
        }
    }
    lines
}
