//! Состояние экрана отчётов
//!
//! Одна сессия = один экран: вкладки, черновик, справочники и флаг отправки.
//! Пока флаг `sending` поднят, новая отправка не начинается.

use crate::access::AccessList;
use crate::catalog;
use crate::error::{Error, Result};
use crate::theme::Theme;
use crate::types::{PhotoAttachment, Project, RecordId, ReportDraft, WorkType};
use std::fmt;

/// Вкладка экрана
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Report,
    History,
    Access,
}

/// Прогресс отправки, в процентах
pub const PROGRESS_STARTED: u8 = 30;
pub const PROGRESS_UPLOADED: u8 = 80;
pub const PROGRESS_DONE: u8 = 100;

/// Снимок черновика, который уходит на сервер
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSubmission {
    pub user_id: String,
    pub project_id: String,
    pub work_type_id: String,
    pub date: String,
    pub description: String,
    pub people: String,
    pub volume: String,
    pub machines: String,
    pub photos: Vec<PhotoAttachment>,
}

#[derive(Debug, Clone)]
pub struct ReportSession {
    user_id: String,
    tab: Tab,
    theme: Theme,
    logo_url: Option<String>,
    draft: ReportDraft,
    work_types: Vec<WorkType>,
    projects: Vec<Project>,
    access: AccessList,
    sending: bool,
    progress: u8,
    last_report_id: Option<RecordId>,
    last_error: Option<String>,
}

impl ReportSession {
    /// Новая сессия со встроенными справочниками
    pub fn new(user_id: &str, today: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            tab: Tab::default(),
            theme: Theme::default(),
            logo_url: None,
            draft: ReportDraft::with_defaults(today),
            work_types: catalog::default_work_types(),
            projects: catalog::projects(),
            access: AccessList::new(catalog::access_rows()),
            sending: false,
            progress: 0,
            last_report_id: None,
            last_error: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }

    /// Пустая строка означает «логотипа нет»
    pub fn set_logo_url(&mut self, logo_url: Option<String>) {
        self.logo_url = logo_url.filter(|url| !url.trim().is_empty());
    }

    pub fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ReportDraft {
        &mut self.draft
    }

    pub fn work_types(&self) -> &[WorkType] {
        &self.work_types
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn access(&self) -> &AccessList {
        &self.access
    }

    pub fn access_mut(&mut self) -> &mut AccessList {
        &mut self.access
    }

    /// Подставить справочник видов работ с сервера
    ///
    /// Пустой список игнорируется. Если вид работ в черновике не выбран,
    /// выбирается первый из нового списка. Возвращает `true`, если
    /// справочник заменён.
    pub fn apply_work_types(&mut self, rows: Vec<WorkType>) -> bool {
        if rows.is_empty() {
            return false;
        }
        if self.draft.work_type_id.is_empty() {
            self.draft.work_type_id = rows[0].id.0.clone();
        }
        self.work_types = rows;
        true
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn last_report_id(&self) -> Option<&RecordId> {
        self.last_report_id.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Начать отправку
    ///
    /// Ошибка, если отправка уже идёт или черновик не прошёл проверку.
    /// В обоих случаях состояние не меняется.
    pub fn begin_submission(&mut self) -> Result<ReportSubmission> {
        if self.sending {
            return Err(Error::SubmissionInFlight);
        }
        self.draft.validate()?;

        self.sending = true;
        self.progress = PROGRESS_STARTED;
        self.last_error = None;

        let draft = &self.draft;
        Ok(ReportSubmission {
            user_id: self.user_id.clone(),
            project_id: draft.project_id.clone(),
            work_type_id: draft.work_type_id.clone(),
            date: draft.date.clone(),
            description: draft.description(),
            people: draft.worker_count.clone(),
            volume: draft.volume.clone(),
            machines: draft.machine_count.clone(),
            photos: draft.photos.clone(),
        })
    }

    /// Сервер ответил, разбираем ответ
    pub fn mark_uploaded(&mut self) {
        if self.sending {
            self.progress = PROGRESS_UPLOADED;
        }
    }

    /// Завершить отправку
    ///
    /// При успехе черновик очищается, при ошибке остаётся как был, чтобы
    /// пользователь мог отправить ещё раз.
    pub fn finish_submission<E: fmt::Display>(
        &mut self,
        outcome: std::result::Result<RecordId, E>,
    ) {
        self.sending = false;
        match outcome {
            Ok(id) => {
                self.progress = PROGRESS_DONE;
                self.draft.reset();
                self.last_report_id = Some(id);
                self.last_error = None;
            }
            Err(e) => {
                self.progress = 0;
                self.last_error = Some(e.to_string());
            }
        }
    }
}
