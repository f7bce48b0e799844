//! The student-records drill: an in-memory registry keyed by id, with the
//! calendar arithmetic for the hundredth-day feast.
use ahash::AHashMap;
use std::fmt;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian rule: divisible by 4 but not by 100, or divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[(month - 1) as usize]
    }
}

/// Calendar date. Only `is_valid` dates are accepted into the registry.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn is_valid(&self) -> bool {
        self.month >= 1
            && self.month <= 12
            && self.day >= 1
            && self.day <= days_in_month(self.year, self.month)
    }

    /// The date of the hundredth day of life, the stored date counting as
    /// day one. Months and years roll over, February tracking the leap
    /// rule of whichever year the walk is in.
    pub fn hundredth_day(&self) -> Date {
        let mut year = self.year;
        let mut month = self.month;
        let mut day = self.day + 99;
        while day > days_in_month(year, month) {
            day -= days_in_month(year, month);
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }
        Date { year, month, day }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub birthday: Date,
}

pub enum RecordsError {
    /// A record with the same id is already present.
    DuplicateId(u32),

    /// The supplied birthday is not a calendar date.
    InvalidDate(Date),
}

impl RecordsError {
    /// Returns a human friendly error message.
    pub fn message(&self) -> String {
        match *self {
            RecordsError::DuplicateId(id) => format!("a student with id {} already exists", id),
            RecordsError::InvalidDate(date) => format!("{} is not a calendar date", date),
        }
    }
}

impl fmt::Debug for RecordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl fmt::Display for RecordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RecordsError {}

/// In-memory student store keyed by id.
pub struct Registry {
    students: AHashMap<u32, Student>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            students: AHashMap::new(),
        }
    }

    pub fn with_capacity(slots: usize) -> Self {
        Self {
            students: AHashMap::with_capacity(slots),
        }
    }

    /// Inserts a student, rejecting duplicate ids and invalid birthdays.
    pub fn add(&mut self, student: Student) -> Result<(), RecordsError> {
        if !student.birthday.is_valid() {
            return Err(RecordsError::InvalidDate(student.birthday));
        }
        if self.students.contains_key(&student.id) {
            return Err(RecordsError::DuplicateId(student.id));
        }
        self.students.insert(student.id, student);
        Ok(())
    }

    pub fn find(&self, id: u32) -> Option<&Student> {
        self.students.get(&id)
    }

    pub fn remove(&mut self, id: u32) -> Option<Student> {
        self.students.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: u32, name: &str, birthday: Date) -> Student {
        Student {
            id,
            name: name.to_owned(),
            birthday,
        }
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn date_validity() {
        assert!(Date::new(2024, 2, 29).is_valid());
        assert!(!Date::new(2023, 2, 29).is_valid());
        assert!(!Date::new(2023, 0, 1).is_valid());
        assert!(!Date::new(2023, 13, 1).is_valid());
        assert!(!Date::new(2023, 4, 31).is_valid());
    }

    #[test]
    fn hundredth_day_within_a_year() {
        // leap year: Jan 31 + Feb 29 + Mar 31 consume 91 of the 99 days
        assert_eq!(Date::new(2024, 1, 1).hundredth_day(), Date::new(2024, 4, 9));
        assert_eq!(Date::new(2023, 1, 1).hundredth_day(), Date::new(2023, 4, 10));
    }

    #[test]
    fn hundredth_day_rolls_the_year() {
        assert_eq!(
            Date::new(2023, 12, 31).hundredth_day(),
            Date::new(2024, 4, 8)
        );
    }

    #[test]
    fn registry_add_find_remove() {
        let mut registry = Registry::with_capacity(10);
        registry
            .add(student(1, "Ada", Date::new(2005, 6, 15)))
            .expect("fresh id");
        registry
            .add(student(2, "Brian", Date::new(2006, 1, 2)))
            .expect("fresh id");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find(1).map(|s| s.name.as_str()), Some("Ada"));
        assert!(registry.find(3).is_none());
        assert!(registry.remove(1).is_some());
        assert!(registry.find(1).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut registry = Registry::new();
        registry
            .add(student(7, "Ada", Date::new(2005, 6, 15)))
            .expect("fresh id");
        let err = registry.add(student(7, "Grace", Date::new(2004, 3, 3)));
        assert!(matches!(err, Err(RecordsError::DuplicateId(7))));
    }

    #[test]
    fn invalid_birthdays_are_rejected() {
        let mut registry = Registry::new();
        let err = registry.add(student(9, "Eve", Date::new(2023, 2, 29)));
        assert!(matches!(err, Err(RecordsError::InvalidDate(_))));
        assert!(registry.is_empty());
    }
}
