//! Форма отчёта в терминале

use crate::error::{PtobotError, Result};
use crate::submit::validate_date;
use dialoguer::{Input, Select};
use ptobot_common::ReportSession;

/// Заполнить черновик сессии через диалог
///
/// Значения, уже стоящие в черновике, предлагаются по умолчанию.
pub fn fill_draft(session: &mut ReportSession) -> Result<()> {
    let project_names: Vec<&str> = session.projects().iter().map(|p| p.name.as_str()).collect();
    let project_ids: Vec<String> = session.projects().iter().map(|p| p.id.clone()).collect();
    let work_type_names: Vec<&str> = session.work_types().iter().map(|w| w.name.as_str()).collect();
    let work_type_ids: Vec<String> = session.work_types().iter().map(|w| w.id.0.clone()).collect();

    let draft = session.draft();
    let project_default = default_index(&project_ids, &draft.project_id);
    let work_type_default = default_index(&work_type_ids, &draft.work_type_id);

    let project = select("Объект", &project_names, project_default)?;
    let work_type = select("Вид работ", &work_type_names, work_type_default)?;

    let date: String = Input::new()
        .with_prompt("Дата работ (ГГГГ-ММ-ДД)")
        .with_initial_text(draft.date.clone())
        .validate_with(|input: &String| validate_date(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()
        .map_err(prompt_error)?;

    let volume = text("Объём", &draft.volume)?;
    let machines = text("Техника", &draft.machine_count)?;
    let people = text("Люди", &draft.worker_count)?;
    let comment = text("Комментарий", &draft.comment)?;

    let draft = session.draft_mut();
    if let Some(id) = project.and_then(|i| project_ids.get(i)) {
        draft.project_id = id.clone();
    }
    if let Some(id) = work_type.and_then(|i| work_type_ids.get(i)) {
        draft.work_type_id = id.clone();
    }
    draft.date = validate_date(&date)?;
    draft.volume = volume;
    draft.machine_count = machines;
    draft.worker_count = people;
    draft.comment = comment;
    Ok(())
}

/// Позиция текущего значения в списке, иначе первая
fn default_index(ids: &[String], current: &str) -> usize {
    ids.iter().position(|id| id == current).unwrap_or(0)
}

fn select(prompt: &str, items: &[&str], default: usize) -> Result<Option<usize>> {
    if items.is_empty() {
        return Ok(None);
    }
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map(Some)
        .map_err(prompt_error)
}

fn text(prompt: &str, initial: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;
    Ok(value.trim().to_string())
}

fn prompt_error(e: dialoguer::Error) -> PtobotError {
    PtobotError::Prompt(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_index() {
        let ids = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        assert_eq!(default_index(&ids, "2"), 1);
        assert_eq!(default_index(&ids, "9"), 0);
        assert_eq!(default_index(&[], "1"), 0);
    }
}
