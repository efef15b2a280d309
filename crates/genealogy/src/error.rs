//! Ошибки загрузки и экспорта росписи.

use std::path::PathBuf;

use thiserror::Error;

/// Главная ошибка крейта.
///
/// Ошибки уровня строки сюда не попадают: некорректные строки и поля
/// поглощаются парсером. Наружу выходят только сбои файловой системы
/// и сериализации.
#[derive(Debug, Error)]
pub enum Error {
    /// Исходный файл не существует.
    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Ошибка ввода/вывода, включая невалидный UTF-8 во входе.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Удобный alias для Result с [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
