//! Отправка отчёта
//!
//! Черновик → проверка → multipart на сервер → очистка черновика.
//! При ошибке черновик остаётся, повтор делает пользователь.

use crate::api::ReportApi;
use crate::error::{PtobotError, Result};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use ptobot_common::{RecordId, ReportSession};
use tracing::{info, warn};

/// Сегодняшняя дата в формате YYYY-MM-DD
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Проверить дату YYYY-MM-DD
pub fn validate_date(date: &str) -> Result<String> {
    let trimmed = date.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| PtobotError::InvalidDate(date.to_string()))
}

/// Полоса прогресса отправки (0..100)
pub fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(100);
    if let Ok(style) = ProgressStyle::with_template("{msg} [{bar:30}] {pos}%") {
        bar.set_style(style.progress_chars("=> "));
    }
    bar.set_message("Отправка");
    bar
}

/// Отправить черновик сессии
///
/// Возвращает id созданного отчёта. Состояние сессии (флаг отправки,
/// прогресс, черновик) обновляется в любом исходе.
pub async fn submit_draft(
    session: &mut ReportSession,
    api: &ReportApi,
    progress: &ProgressBar,
) -> Result<RecordId> {
    let submission = session.begin_submission()?;
    progress.set_position(u64::from(session.progress()));

    let outcome = api.submit_report(&submission).await;
    session.mark_uploaded();
    progress.set_position(u64::from(session.progress()));

    match outcome {
        Ok(created) => {
            session.finish_submission::<String>(Ok(created.id.clone()));
            progress.set_position(u64::from(session.progress()));
            progress.finish_and_clear();
            info!(id = %created.id, "report submitted");
            Ok(created.id)
        }
        Err(e) => {
            session.finish_submission(Err(&e));
            progress.abandon();
            warn!(error = %e, "report submission failed");
            Err(e)
        }
    }
}
