use thiserror::Error;

#[derive(Error, Debug)]
pub enum PtobotError {
    #[error("Ошибка настроек: {0}")]
    Config(String),

    #[error("Файл не найден: {0}")]
    FileNotFound(String),

    #[error("Фото не найдены: {0}")]
    NoPhotosFound(String),

    #[error("Неверная дата: {0} (ожидается ГГГГ-ММ-ДД)")]
    InvalidDate(String),

    #[error("Ошибка сети: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Ошибка при отправке отчёта (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Не удалось разобрать ответ сервера: {0}")]
    ApiParse(String),

    #[error("Ошибка JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка ввода: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] ptobot_common::Error),
}

impl From<ptobot_common::ValidationError> for PtobotError {
    fn from(error: ptobot_common::ValidationError) -> Self {
        PtobotError::Common(error.into())
    }
}

pub type Result<T> = std::result::Result<T, PtobotError>;
