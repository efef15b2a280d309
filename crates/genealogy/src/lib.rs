//! Библиотека разбора поколенных росписей, пронумерованных по Соса-Страдоницу.
//!
//! Крейт превращает табличную выгрузку (колонки через табуляцию, одна
//! персона на строку) в коллекцию [`Person`] и сериализует её в JSON:
//!
//! - [`line`] — разбор одной строки и нормализация полей
//! - [`reader`] — потоковое чтение и сборка коллекции по номеру Соса
//! - [`export`] — запись отсортированного JSON-массива
//!
//! # Быстрый старт
//!
//! ```
//! use genealogy::prelude::*;
//!
//! let input = "No\tPersonne\n1\tH Jean Dupont\n3\tF Marie\t\t\t\t\t\t3 enfants\n";
//! let people = load_people(input.as_bytes()).unwrap();
//!
//! assert_eq!(people.len(), 2);
//! assert_eq!(people[&3].generation, 1);
//! assert_eq!(people[&3].children_count, Some(3));
//!
//! let mut json = Vec::new();
//! write_people(people.values(), &mut json).unwrap();
//! ```

pub mod error;
pub mod export;
pub mod line;
pub mod person;
pub mod reader;

pub use error::{Error, Result};

/// Часто используемые типы и функции.
pub mod prelude {
    pub use crate::{
        error::{Error, Result},
        export::{export_people, write_people},
        line::parse_line,
        person::{Gender, Person},
        reader::{People, PersonReader, load_people, load_people_from_path},
    };
}
