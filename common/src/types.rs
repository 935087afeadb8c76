//! Типы данных отчётов
//!
//! - WorkType / Project: справочники формы
//! - ReportDraft: черновик, который заполняет пользователь
//! - ReportRecord: отчёт, сохранённый на сервере
//! - AccessRow: назначение проектов подрядчику

use crate::description::{encode, ReportDetails};
use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Идентификатор на проводе: сервер отдаёт то строку, то число
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Text(text) => RecordId(text),
            Wire::Int(value) => RecordId(value.to_string()),
            Wire::Float(value) => RecordId(value.to_string()),
        })
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

/// Вид работ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkType {
    pub id: RecordId,
    pub name: String,
}

impl WorkType {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: RecordId::from(id),
            name: name.to_string(),
        }
    }
}

/// Объект строительства
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub address: String,
}

/// Прикреплённая фотография
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for PhotoAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoAttachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Черновик отчёта
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDraft {
    pub project_id: String,
    pub work_type_id: String,
    /// Дата в формате YYYY-MM-DD
    pub date: String,
    pub volume: String,
    pub machine_count: String,
    pub worker_count: String,
    pub comment: String,
    pub photos: Vec<PhotoAttachment>,
}

impl ReportDraft {
    /// Черновик со значениями формы по умолчанию
    pub fn with_defaults(date: &str) -> Self {
        Self {
            project_id: "1".into(),
            work_type_id: "2".into(),
            date: date.to_string(),
            ..Default::default()
        }
    }

    /// Проверка перед отправкой: выбран вид работ и есть хотя бы одно фото
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.work_type_id.trim().is_empty() {
            return Err(ValidationError::MissingWorkType);
        }
        if self.photos.is_empty() {
            return Err(ValidationError::MissingPhotos);
        }
        Ok(())
    }

    /// Текст поля `description`
    pub fn description(&self) -> String {
        encode(
            &self.comment,
            &self.volume,
            &self.machine_count,
            &self.worker_count,
        )
    }

    pub fn details(&self) -> ReportDetails {
        ReportDetails {
            comment: self.comment.clone(),
            volume: self.volume.clone(),
            machines: self.machine_count.clone(),
            people: self.worker_count.clone(),
        }
    }

    /// Очистить поля после успешной отправки.
    ///
    /// Проект, вид работ и дата остаются выбранными.
    pub fn reset(&mut self) {
        self.volume.clear();
        self.machine_count.clear();
        self.worker_count.clear();
        self.comment.clear();
        self.photos.clear();
    }
}

/// Отчёт, сохранённый на сервере
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRecord {
    pub id: RecordId,
    pub user_id: String,
    pub project_id: String,
    pub work_type_id: String,
    pub description: String,
    pub people: String,
    pub volume: String,
    pub machines: String,
    pub date: String,
    pub created_at: String,
    #[serde(alias = "photos")]
    pub photo_urls: Vec<String>,
}

impl ReportRecord {
    /// Показатели из отдельных полей записи
    pub fn details(&self) -> ReportDetails {
        ReportDetails {
            comment: String::new(),
            volume: self.volume.clone(),
            machines: self.machines.clone(),
            people: self.people.clone(),
        }
    }

    /// Дата работ, у старых записей берётся дата создания
    pub fn display_date(&self) -> &str {
        if !self.date.is_empty() {
            &self.date
        } else {
            self.created_at.get(..10).unwrap_or(&self.created_at)
        }
    }
}

/// Ответ на создание отчёта
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportCreated {
    pub id: RecordId,
}

/// Ответ корневого URL бэкенда
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootInfo {
    pub status: String,
    pub message: String,
    pub docs_url: String,
    pub work_types_url: String,
    pub reports_url: String,
}

/// Роль в панели доступа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Reporter,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Reporter => write!(f, "reporter"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessUser {
    pub id: u64,
    pub name: String,
}

/// Строка панели доступа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRow {
    pub user: AccessUser,
    pub projects: Vec<String>,
    pub role: Role,
}
