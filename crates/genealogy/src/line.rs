//! Разбор одной строки росписи в [`Person`].
//!
//! Строка состоит из колонок, разделённых табуляцией:
//!
//! | #  | Колонка                         |
//! |----|---------------------------------|
//! | 1  | номер Соса                      |
//! | 2  | маркер пола и имя (`H Jean`)    |
//! | 3  | дата рождения                   |
//! | 4  | место рождения                  |
//! | 5  | супруг(а)                       |
//! | 6  | дата союза                      |
//! | 7  | место союза                     |
//! | 8  | число детей (`3 enfants`)       |
//! | 9  | дата смерти                     |
//! | 10 | место смерти                    |
//! | 11 | возраст на момент смерти        |
//! | 12 | профессии                       |
//!
//! Парсер не возвращает ошибок: заголовки и пустые строки дают `None`,
//! а некорректные поля превращаются в отсутствующие значения.

use std::borrow::Cow;

use crate::person::{Gender, Person};

/// Ожидаемое число колонок в строке данных.
pub const COLUMN_COUNT: usize = 12;

/// Разделитель колонок.
const DELIMITER: char = '\t';

/// Разбирает одну строку файла.
///
/// Возвращает `None`, если строка не начинается с цифры (после ведущих
/// пробелов) или в первой колонке нет ни одной цифры.
///
/// # Пример
///
/// ```
/// use genealogy::line::parse_line;
/// use genealogy::person::Gender;
///
/// let person = parse_line("4\tH Jean Dupont\t1850\tLyon\n").unwrap();
/// assert_eq!(person.id, 4);
/// assert_eq!(person.generation, 2);
/// assert_eq!(person.gender, Some(Gender::Male));
/// assert_eq!(person.name, "Jean Dupont");
/// assert_eq!(person.birth_place.as_deref(), Some("Lyon"));
///
/// assert!(parse_line("No\tNom\tNaissance").is_none());
/// assert!(parse_line("").is_none());
/// ```
#[must_use]
pub fn parse_line(raw_line: &str) -> Option<Person> {
    if !is_data_line(raw_line) {
        return None;
    }

    let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    let columns: Vec<&str> = line.split(DELIMITER).collect();

    let id = parse_sosa(columns[0])?;

    let [
        _,
        person_field,
        birth_date,
        birth_place,
        spouse,
        union_date,
        union_place,
        children_count,
        death_date,
        death_place,
        age_at_death,
        professions,
    ] = reconcile_columns(&columns);

    let (gender, name) = parse_person_field(&person_field);

    Some(Person {
        id,
        generation: Person::generation_of(id),
        gender,
        name,
        birth_date: normalize(&birth_date),
        birth_place: normalize(&birth_place),
        spouse: normalize(&spouse),
        union_date: normalize(&union_date),
        union_place: normalize(&union_place),
        children_count: parse_children(&children_count),
        death_date: normalize(&death_date),
        death_place: normalize(&death_place),
        age_at_death: normalize(&age_at_death),
        professions: normalize(&professions),
    })
}

/// Строка содержит данные, если после ведущих пробелов она начинается с цифры.
#[must_use]
pub fn is_data_line(raw_line: &str) -> bool {
    raw_line.trim_start().starts_with(|c: char| c.is_ascii_digit())
}

/// Приводит колонки к ровно [`COLUMN_COUNT`] значениям.
///
/// Недостающие колонки дополняются пустыми строками. Лишние колонки
/// считаются продолжением последней (профессии) и склеиваются через пробел.
///
/// # Пример
///
/// ```
/// use genealogy::line::{COLUMN_COUNT, reconcile_columns};
///
/// let short = reconcile_columns(&["1", "Jean"]);
/// assert_eq!(short[1], "Jean");
/// assert_eq!(short[COLUMN_COUNT - 1], "");
///
/// let mut long = vec!["x"; COLUMN_COUNT - 1];
/// long.extend(["a", "b", "c"]);
/// assert_eq!(reconcile_columns(&long)[COLUMN_COUNT - 1], "a b c");
/// ```
#[must_use]
pub fn reconcile_columns<'a>(columns: &[&'a str]) -> [Cow<'a, str>; COLUMN_COUNT] {
    let last = COLUMN_COUNT - 1;
    let overflow = columns.len() > COLUMN_COUNT;

    std::array::from_fn(|i| match columns.get(i) {
        Some(_) if i == last && overflow => Cow::Owned(columns[last..].join(" ")),
        Some(value) => Cow::Borrowed(*value),
        None => Cow::Borrowed(""),
    })
}

/// Извлекает номер Соса: удаляет все нецифровые символы и разбирает остаток.
///
/// Номер `0` и числа, не помещающиеся в `u64`, считаются отсутствующими.
///
/// # Пример
///
/// ```
/// use genealogy::line::parse_sosa;
///
/// assert_eq!(parse_sosa(" 12."), Some(12));
/// assert_eq!(parse_sosa("1 024"), Some(1024));
/// assert_eq!(parse_sosa("n/a"), None);
/// ```
#[must_use]
pub fn parse_sosa(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok().filter(|&id| id > 0)
}

/// Разбирает колонку персоны на маркер пола и имя.
///
/// Маркер: буква `H` или `F` и пробел после неё. Без маркера
/// всё содержимое колонки (после обрезки) становится именем.
///
/// # Пример
///
/// ```
/// use genealogy::line::parse_person_field;
/// use genealogy::person::Gender;
///
/// assert_eq!(parse_person_field("F  Marie "), (Some(Gender::Female), "Marie".to_string()));
/// assert_eq!(parse_person_field("Marie Curie"), (None, "Marie Curie".to_string()));
/// ```
#[must_use]
pub fn parse_person_field(value: &str) -> (Option<Gender>, String) {
    let cleaned = value.trim();
    let mut chars = cleaned.chars();

    let gender = match (chars.next(), chars.next()) {
        (Some(marker), Some(' ')) => Gender::from_marker(marker),
        _ => None,
    };

    match gender {
        Some(gender) => (Some(gender), chars.as_str().trim().to_string()),
        None => (None, cleaned.to_string()),
    }
}

/// Находит первую группу цифр в любом месте строки.
///
/// # Пример
///
/// ```
/// use genealogy::line::parse_children;
///
/// assert_eq!(parse_children("3 enfants"), Some(3));
/// assert_eq!(parse_children("trois (3)"), Some(3));
/// assert_eq!(parse_children("aucun"), None);
/// ```
#[must_use]
pub fn parse_children(value: &str) -> Option<u32> {
    let start = value.find(|c: char| c.is_ascii_digit())?;
    let rest = &value[start..];
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// Обрезает пробелы; пустой результат означает отсутствие значения.
#[must_use]
pub fn normalize(value: &str) -> Option<String> {
    let cleaned = value.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_line() -> String {
        [
            "12",
            "F Anne Martin",
            "3 mars 1802",
            "Rouen",
            "Pierre Leroy",
            "1825",
            "Caen",
            "5 enfants",
            "1870",
            "Paris",
            "68 ans",
            "couturière",
        ]
        .join("\t")
    }

    #[test]
    fn test_parse_full_line() {
        let person = parse_line(&format!("{}\n", full_line())).unwrap();

        assert_eq!(person.id, 12);
        assert_eq!(person.generation, 3);
        assert_eq!(person.gender, Some(Gender::Female));
        assert_eq!(person.name, "Anne Martin");
        assert_eq!(person.birth_date.as_deref(), Some("3 mars 1802"));
        assert_eq!(person.birth_place.as_deref(), Some("Rouen"));
        assert_eq!(person.spouse.as_deref(), Some("Pierre Leroy"));
        assert_eq!(person.union_date.as_deref(), Some("1825"));
        assert_eq!(person.union_place.as_deref(), Some("Caen"));
        assert_eq!(person.children_count, Some(5));
        assert_eq!(person.death_date.as_deref(), Some("1870"));
        assert_eq!(person.death_place.as_deref(), Some("Paris"));
        assert_eq!(person.age_at_death.as_deref(), Some("68 ans"));
        assert_eq!(person.professions.as_deref(), Some("couturière"));
    }

    #[test]
    fn test_crlf_terminator_is_removed() {
        let person = parse_line(&format!("{}\r\n", full_line())).unwrap();
        assert_eq!(person.professions.as_deref(), Some("couturière"));
    }

    #[test]
    fn test_ineligible_lines() {
        assert!(parse_line("No\tNom\tNaissance\n").is_none());
        assert!(parse_line("").is_none());
        assert!(parse_line("   \n").is_none());
        assert!(parse_line("* note de bas de page").is_none());
    }

    #[test]
    fn test_leading_whitespace_is_allowed() {
        let person = parse_line("  7\tH Louis").unwrap();
        assert_eq!(person.id, 7);
        assert_eq!(person.generation, 2);
    }

    #[test]
    fn test_leading_tab_leaves_first_column_empty() {
        assert!(parse_line("\t5\tH Louis").is_none());
    }

    #[test]
    fn test_zero_id_is_rejected() {
        assert!(parse_line("0\tH Louis").is_none());
    }

    #[test]
    fn test_id_overflow_is_rejected() {
        assert!(parse_line("99999999999999999999999\tH Louis").is_none());
    }

    #[test]
    fn test_short_line_is_padded() {
        let person = parse_line("3\tF Marie\t1900\tNantes\tPaul").unwrap();

        assert_eq!(person.id, 3);
        assert_eq!(person.spouse.as_deref(), Some("Paul"));
        assert_eq!(person.union_date, None);
        assert_eq!(person.children_count, None);
        assert_eq!(person.professions, None);
    }

    #[test]
    fn test_long_line_overflows_into_professions() {
        let mut columns: Vec<String> = (1..=15).map(|i| format!("c{i}")).collect();
        columns[0] = "9".to_string();
        let person = parse_line(&columns.join("\t")).unwrap();

        assert_eq!(person.age_at_death.as_deref(), Some("c11"));
        assert_eq!(person.professions.as_deref(), Some("c12 c13 c14 c15"));
    }

    #[test]
    fn test_overflow_of_blank_columns_is_absent() {
        let line = format!("1\tJean{}", "\t".repeat(14));
        let person = parse_line(&line).unwrap();
        assert_eq!(person.professions, None);
    }

    #[test]
    fn test_reconcile_exact_count_is_borrowed() {
        let columns = vec!["v"; COLUMN_COUNT];
        let reconciled = reconcile_columns(&columns);
        assert!(reconciled.iter().all(|c| matches!(c, Cow::Borrowed(_)) && *c == "v"));
    }

    #[test]
    fn test_person_field_markers() {
        assert_eq!(
            parse_person_field("H Jean Dupont"),
            (Some(Gender::Male), "Jean Dupont".to_string())
        );
        assert_eq!(parse_person_field("F Marie"), (Some(Gender::Female), "Marie".to_string()));
        assert_eq!(parse_person_field("Marie Curie"), (None, "Marie Curie".to_string()));
        assert_eq!(parse_person_field("X Jean"), (None, "X Jean".to_string()));
        assert_eq!(parse_person_field("Hugo"), (None, "Hugo".to_string()));
        assert_eq!(parse_person_field("H "), (None, "H".to_string()));
        assert_eq!(parse_person_field(""), (None, String::new()));
    }

    #[test]
    fn test_marker_without_name_becomes_name() {
        let person = parse_line("6\tH  \t1800").unwrap();
        assert_eq!(person.gender, None);
        assert_eq!(person.name, "H");

        let person = parse_line("6\t\t1800").unwrap();
        assert_eq!(person.name, "");
    }

    #[test]
    fn test_children_count_extraction() {
        assert_eq!(parse_children("3 enfants"), Some(3));
        assert_eq!(parse_children("env. 12 ou 13"), Some(12));
        assert_eq!(parse_children("aucun"), None);
        assert_eq!(parse_children(""), None);
        assert_eq!(parse_children("0"), Some(0));
        assert_eq!(parse_children("99999999999"), None);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Lyon \t"), Some("Lyon".to_string()));
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn test_sosa_strips_non_digits() {
        assert_eq!(parse_sosa("No 16"), Some(16));
        assert_eq!(parse_sosa("007"), Some(7));
        assert_eq!(parse_sosa(""), None);
    }
}
