//! Модель данных персоны из поколенной росписи.

use serde::{Deserialize, Serialize};

/// Пол персоны, заданный маркером в начале колонки с именем.
///
/// В JSON сериализуется буквой маркера исходного файла.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Мужчина, маркер `H` (homme).
    #[serde(rename = "H")]
    Male,
    /// Женщина, маркер `F` (femme).
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Возвращает букву маркера.
    ///
    /// # Пример
    /// ```
    /// use genealogy::person::Gender;
    /// assert_eq!(Gender::Male.marker(), 'H');
    /// assert_eq!(Gender::Female.marker(), 'F');
    /// ```
    #[must_use]
    pub const fn marker(&self) -> char {
        match self {
            Self::Male => 'H',
            Self::Female => 'F',
        }
    }

    /// Распознаёт букву маркера. Любая другая буква даёт `None`.
    #[must_use]
    pub const fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'H' => Some(Self::Male),
            'F' => Some(Self::Female),
            _ => None,
        }
    }
}

/// Предок, пронумерованный по системе Соса-Страдоница.
///
/// Все текстовые поля либо отсутствуют, либо непусты после обрезки пробелов:
/// пустая строка никогда не хранится. Поле `generation` всегда вычисляется
/// из `id` и не читается из входных данных.
///
/// # Пример
///
/// ```
/// use genealogy::person::{Gender, Person};
///
/// let person = Person::new(5, Some(Gender::Female), "Marie Curie".to_string());
/// assert_eq!(person.generation, 2);
/// assert_eq!(person.birth_date, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Номер Соса, уникальный ключ записи.
    pub id: u64,
    /// Поколение: номер старшего установленного бита `id`.
    pub generation: u32,
    pub gender: Option<Gender>,
    /// Имя; может быть пустым, если колонка была пустой.
    pub name: String,
    pub birth_date: Option<String>,
    pub birth_place: Option<String>,
    /// Имя супруга(и).
    pub spouse: Option<String>,
    pub union_date: Option<String>,
    pub union_place: Option<String>,
    /// Число детей, извлечённое из первой группы цифр колонки.
    pub children_count: Option<u32>,
    pub death_date: Option<String>,
    pub death_place: Option<String>,
    /// Возраст на момент смерти, свободный текст без разбора.
    pub age_at_death: Option<String>,
    /// Профессии, свободный текст.
    pub professions: Option<String>,
}

impl Person {
    /// Создаёт персону без описательных полей.
    ///
    /// `id` должен быть положительным: номер Соса начинается с 1.
    #[must_use]
    pub fn new(id: u64, gender: Option<Gender>, name: String) -> Self {
        Self {
            id,
            generation: Self::generation_of(id),
            gender,
            name,
            birth_date: None,
            birth_place: None,
            spouse: None,
            union_date: None,
            union_place: None,
            children_count: None,
            death_date: None,
            death_place: None,
            age_at_death: None,
            professions: None,
        }
    }

    /// Вычисляет поколение по номеру Соса: `floor(log2(id))`.
    ///
    /// Для `id = 0` возвращает 0, хотя такие номера парсер отбрасывает.
    ///
    /// # Пример
    /// ```
    /// use genealogy::person::Person;
    ///
    /// assert_eq!(Person::generation_of(1), 0);
    /// assert_eq!(Person::generation_of(3), 1);
    /// assert_eq!(Person::generation_of(8), 3);
    /// ```
    #[must_use]
    pub const fn generation_of(id: u64) -> u32 {
        match id.checked_ilog2() {
            Some(generation) => generation,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_matches_highest_bit() {
        let cases = [(1, 0), (2, 1), (3, 1), (4, 2), (7, 2), (8, 3), (1023, 9), (1024, 10)];
        for (id, generation) in cases {
            assert_eq!(Person::generation_of(id), generation, "id = {id}");
        }
        assert_eq!(Person::generation_of(u64::MAX), 63);
    }

    #[test]
    fn test_gender_marker_roundtrip() {
        for gender in [Gender::Male, Gender::Female] {
            assert_eq!(Gender::from_marker(gender.marker()), Some(gender));
        }
        assert_eq!(Gender::from_marker('X'), None);
        assert_eq!(Gender::from_marker('h'), None);
    }

    #[test]
    fn test_serializes_all_keys_with_nulls() {
        let person = Person::new(1, None, "Jean".to_string());
        let json = serde_json::to_value(&person).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 14);
        assert_eq!(object["id"], 1);
        assert_eq!(object["generation"], 0);
        assert!(object["gender"].is_null());
        assert!(object["children_count"].is_null());
        assert!(object["professions"].is_null());
    }

    #[test]
    fn test_gender_serializes_as_marker_letter() {
        let person = Person::new(2, Some(Gender::Male), "Jean".to_string());
        let json = serde_json::to_string(&person).unwrap();
        assert!(json.contains("\"gender\":\"H\""));
    }
}
