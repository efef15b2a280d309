//! # e2e-tests - End-to-end тесты CLI `genealogy-export`
//!
//! ## Фикстуры
//!
//! Тестовые файлы расположены в `fixtures/`:
//! - `raw_page.txt` — выгрузка росписи с заголовком, сносками,
//!   повторяющимся номером Соса и строками неполной/избыточной ширины

use std::path::PathBuf;

/// Получить путь к директории фикстур.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Получить путь к фикстуре по имени файла.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}
