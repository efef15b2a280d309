//! Потоковое чтение росписи и сборка коллекции персон.
//!
//! [`PersonReader`] читает строки из любого [`Read`] и отдаёт только строки
//! с данными. [`load_people`] собирает их в отображение `id -> Person`.

use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::Path,
};

use tracing::{debug, trace, warn};

use crate::{
    error::{Error, Result},
    line::parse_line,
    person::Person,
};

/// Коллекция персон по номеру Соса.
pub type People = HashMap<u64, Person>;

/// Потоковый reader персон.
///
/// Реализует [`Iterator`]: каждая строка с данными превращается в
/// [`Person`], остальные (заголовки, пустые строки, сноски) пропускаются
/// без ошибки. Ошибка ввода/вывода завершает итерацию.
///
/// # Пример
///
/// ```
/// use std::io::Cursor;
///
/// use genealogy::reader::PersonReader;
///
/// let input = "No\tNom\n1\tH Jean\n\n2\tF Marie\n";
/// let mut reader = PersonReader::new(Cursor::new(input));
/// let ids: Vec<u64> = reader.by_ref().map(|p| p.unwrap().id).collect();
///
/// assert_eq!(ids, vec![1, 2]);
/// assert_eq!(reader.lines_read(), 4);
/// assert_eq!(reader.lines_skipped(), 2);
/// ```
pub struct PersonReader<R> {
    inner: BufReader<R>,
    /// Буфер текущей строки, переиспользуется между вызовами.
    line: String,
    lines_read: usize,
    records_read: usize,
    finished: bool,
}

impl<R: Read> PersonReader<R> {
    /// Создаёт новый reader поверх [`BufReader`].
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            line: String::new(),
            lines_read: 0,
            records_read: 0,
            finished: false,
        }
    }

    /// Количество прочитанных строк. После выдачи записи это номер её строки (с 1).
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Количество выданных записей.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Количество пропущенных строк без данных.
    #[must_use]
    pub fn lines_skipped(&self) -> usize {
        self.lines_read - self.records_read
    }

    /// Извлекает внутренний reader.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: Read> Iterator for PersonReader<R> {
    type Item = Result<Person>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.line.clear();
            match self.inner.read_line(&mut self.line) {
                Ok(0) => {
                    self.finished = true;
                    return None;
                }
                Ok(_) => {
                    self.lines_read += 1;
                    if let Some(person) = parse_line(&self.line) {
                        self.records_read += 1;
                        return Some(Ok(person));
                    }
                    trace!(line = self.lines_read, "skipping non-data line");
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

/// Загружает все персоны из потока.
///
/// При повторе номера Соса побеждает более поздняя строка; повтор
/// логируется на уровне `warn`.
///
/// # Ошибки
///
/// [`Error::Io`], если чтение не удалось или вход не является UTF-8.
pub fn load_people<R: Read>(reader: R) -> Result<People> {
    let mut reader = PersonReader::new(reader);
    let mut people = People::new();
    let mut seen_at: HashMap<u64, usize> = HashMap::new();

    while let Some(person) = reader.next() {
        let person = person?;
        let line = reader.lines_read();

        if let Some(previous_line) = seen_at.insert(person.id, line) {
            warn!(id = person.id, previous_line, line, "duplicate Sosa number, keeping later record");
        }
        people.insert(person.id, person);
    }

    debug!(
        people = people.len(),
        lines = reader.lines_read(),
        skipped = reader.lines_skipped(),
        "genealogy loaded"
    );
    Ok(people)
}

/// Открывает файл и загружает из него персоны.
///
/// Файл закрывается при выходе из функции, в том числе при ошибке чтения.
///
/// # Ошибки
///
/// [`Error::SourceNotFound`], если файла нет; [`Error::Io`] при прочих сбоях.
pub fn load_people_from_path(path: impl AsRef<Path>) -> Result<People> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::SourceNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;
    load_people(file)
}
