//! Экспорт персон в JSON.
//!
//! Документ: массив объектов, отсортированный по `id`, с отступом в два
//! пробела. Не-ASCII символы записываются как есть.

use std::{fs, io::Write, path::Path};

use tracing::debug;

use crate::{error::Result, person::Person};

/// Сериализует персоны в `writer` в порядке возрастания `id`.
///
/// Возвращает количество записанных персон.
///
/// # Пример
///
/// ```
/// use genealogy::export::write_people;
/// use genealogy::line::parse_line;
///
/// let people = [parse_line("9\tÉlise").unwrap(), parse_line("1\tH Jean").unwrap()];
/// let mut output = Vec::new();
///
/// assert_eq!(write_people(&people, &mut output).unwrap(), 2);
/// let json = String::from_utf8(output).unwrap();
/// assert!(json.find("\"id\": 1").unwrap() < json.find("\"id\": 9").unwrap());
/// assert!(json.contains("Élise"));
/// ```
pub fn write_people<'a, W: Write>(
    people: impl IntoIterator<Item = &'a Person>,
    writer: W,
) -> Result<usize> {
    let mut sorted: Vec<&Person> = people.into_iter().collect();
    sorted.sort_by_key(|person| person.id);

    serde_json::to_writer_pretty(writer, &sorted)?;
    Ok(sorted.len())
}

/// Записывает персоны в файл `destination`, создавая недостающие каталоги.
///
/// Существующий файл перезаписывается. Документ целиком собирается в памяти
/// до записи, поэтому ошибка сериализации не оставляет частичного файла.
///
/// # Ошибки
///
/// [`Error::Io`](crate::Error::Io), если каталог или файл не удалось создать.
pub fn export_people<'a>(
    people: impl IntoIterator<Item = &'a Person>,
    destination: impl AsRef<Path>,
) -> Result<usize> {
    let destination = destination.as_ref();
    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut buffer = Vec::new();
    let count = write_people(people, &mut buffer)?;
    fs::write(destination, buffer)?;

    debug!(count, path = %destination.display(), "genealogy exported");
    Ok(count)
}
