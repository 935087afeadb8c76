//! Типы ошибок

use thiserror::Error;

/// Ошибка проверки черновика перед отправкой.
///
/// Тексты совпадают с сообщениями, которые видит пользователь.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Выберите вид работ")]
    MissingWorkType,

    #[error("Пожалуйста, выберите фото!")]
    MissingPhotos,
}

/// Общий тип ошибки
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Отчёт уже отправляется")]
    SubmissionInFlight,
}

/// Псевдоним Result
pub type Result<T> = std::result::Result<T, Error>;
