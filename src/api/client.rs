//! HTTP-клиент бэкенда отчётов
//!
//! - GET  /work_types: справочник видов работ
//! - POST /reports: создание отчёта (multipart)
//! - GET  /reports: история с фильтрами
//! - GET  /: состояние сервера

use crate::config::Config;
use crate::error::{PtobotError, Result};
use ptobot_common::catalog::default_work_types;
use ptobot_common::{ReportCreated, ReportRecord, ReportSubmission, RootInfo, WorkType};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Фильтры истории; пустые не отправляются
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_type_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReportApi {
    base_url: String,
    client: Client,
    legacy_photo_field: bool,
}

impl ReportApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            legacy_photo_field: false,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api = Self::new(config.base_url(), Duration::from_secs(config.timeout_seconds))?;
        Ok(api.with_legacy_photo_field(config.legacy_photo_field))
    }

    /// Отправлять одно фото в поле `photo` вместо списка `photos`
    pub fn with_legacy_photo_field(mut self, enabled: bool) -> Self {
        self.legacy_photo_field = enabled;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Справочник видов работ с сервера
    pub async fn fetch_work_types(&self) -> Result<Vec<WorkType>> {
        let url = self.url("/work_types");
        debug!(%url, "fetching work types");

        let response = check_status(self.client.get(&url).send().await?).await?;
        response
            .json::<Vec<WorkType>>()
            .await
            .map_err(|e| PtobotError::ApiParse(format!("work_types: {}", e)))
    }

    /// Справочник видов работ; при любой ошибке или пустом ответе встроенный
    pub async fn work_types_or_default(&self) -> Vec<WorkType> {
        match self.fetch_work_types().await {
            Ok(rows) if !rows.is_empty() => rows,
            Ok(_) => {
                debug!("server returned empty work type list, using built-in catalog");
                default_work_types()
            }
            Err(e) => {
                debug!(error = %e, "work type fetch failed, using built-in catalog");
                default_work_types()
            }
        }
    }

    /// Отправить отчёт
    ///
    /// Успех только при 2xx и наличии `id` в ответе. Повторов нет.
    pub async fn submit_report(&self, submission: &ReportSubmission) -> Result<ReportCreated> {
        let url = self.url("/reports");
        let form = self.build_form(submission)?;
        debug!(%url, photos = submission.photos.len(), "submitting report");

        let response = check_status(self.client.post(&url).multipart(form).send().await?).await?;
        let body = response.text().await?;
        serde_json::from_str::<ReportCreated>(&body)
            .map_err(|e| PtobotError::ApiParse(format!("reports: {}", e)))
    }

    fn build_form(&self, submission: &ReportSubmission) -> Result<Form> {
        let mut form = Form::new()
            .text("user_id", submission.user_id.clone())
            .text("project_id", submission.project_id.clone())
            .text("work_type_id", submission.work_type_id.clone())
            .text("date", submission.date.clone())
            .text("description", submission.description.clone())
            .text("people", submission.people.clone())
            .text("volume", submission.volume.clone())
            .text("machines", submission.machines.clone());

        if self.legacy_photo_field {
            if submission.photos.len() > 1 {
                warn!(
                    count = submission.photos.len(),
                    "legacy photo field accepts one photo, sending the first"
                );
            }
            if let Some(photo) = submission.photos.first() {
                form = form.part("photo", photo_part(photo)?);
            }
        } else {
            for photo in &submission.photos {
                form = form.part("photos", photo_part(photo)?);
            }
        }

        Ok(form)
    }

    /// Отчёты с сервера
    pub async fn list_reports(&self, filter: &ReportFilter) -> Result<Vec<ReportRecord>> {
        let url = self.url("/reports");
        debug!(%url, ?filter, "listing reports");

        let response = check_status(self.client.get(&url).query(filter).send().await?).await?;
        response
            .json::<Vec<ReportRecord>>()
            .await
            .map_err(|e| PtobotError::ApiParse(format!("reports: {}", e)))
    }

    /// Корневой URL: состояние и ссылки
    pub async fn root_info(&self) -> Result<RootInfo> {
        let url = self.url("/");
        let response = check_status(self.client.get(&url).send().await?).await?;
        response
            .json::<RootInfo>()
            .await
            .map_err(|e| PtobotError::ApiParse(format!("root: {}", e)))
    }
}

fn photo_part(photo: &ptobot_common::PhotoAttachment) -> Result<Part> {
    let part = Part::bytes(photo.bytes.clone())
        .file_name(photo.file_name.clone())
        .mime_str(&photo.content_type)?;
    Ok(part)
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(PtobotError::Api {
        status: status.as_u16(),
        message: error_message(&body, status.canonical_reason()),
    })
}

/// Текст ошибки из ответа сервера
///
/// FastAPI кладёт причину в `detail`; иначе берётся тело или статус.
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        match value.get("detail") {
            Some(serde_json::Value::String(detail)) => return detail.clone(),
            Some(detail) if !detail.is_null() => return detail.to_string(),
            _ => {}
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.chars().take(200).collect();
    }
    reason.unwrap_or("unknown error").to_string()
}
