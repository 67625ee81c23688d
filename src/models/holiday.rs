use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::HolidayError;

/// Holiday entity: one employee's approved time-off date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub id: String,
    pub employee_name: String,
    pub department: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Inclusive expansion of the range, derived once at creation
    pub days: Vec<NaiveDate>,
    pub created_at: String,
}

impl Holiday {
    /// Create a new holiday with a generated id and derived day sequence.
    /// Callers must have validated `end_date >= start_date` beforehand.
    pub fn new(
        employee_name: String,
        department: Option<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            employee_name,
            department,
            start_date,
            end_date,
            days: expand_days(start_date, end_date),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Expand an inclusive date range into the ordered sequence of days it covers.
pub fn expand_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

/// Fields for which distinct stored values can be queried.
/// Closed set: anything else coming from a client is rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompleteField {
    EmployeeName,
    Department,
}

impl AutocompleteField {
    pub fn column(&self) -> &'static str {
        match self {
            AutocompleteField::EmployeeName => "employee_name",
            AutocompleteField::Department => "department",
        }
    }
}

impl std::str::FromStr for AutocompleteField {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee_name" => Ok(AutocompleteField::EmployeeName),
            "department" => Ok(AutocompleteField::Department),
            other => Err(HolidayError::InvalidField(other.to_string())),
        }
    }
}

// ========== DTOs (Data Transfer Objects) ==========

/// Request to create a new holiday
#[derive(Debug, Deserialize)]
pub struct CreateHolidayRequest {
    pub employee_name: String,
    #[serde(default)]
    pub department: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Response containing full holiday data
#[derive(Debug, Serialize)]
pub struct HolidayResponse {
    pub id: String,
    pub employee_name: String,
    pub department: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<NaiveDate>,
}

impl From<Holiday> for HolidayResponse {
    fn from(holiday: Holiday) -> Self {
        Self {
            id: holiday.id,
            employee_name: holiday.employee_name,
            department: holiday.department,
            start_date: holiday.start_date,
            end_date: holiday.end_date,
            days: holiday.days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn expand_days_covers_range_inclusive() {
        let days = expand_days(date(2024, 1, 10), date(2024, 1, 12));
        assert_eq!(
            days,
            vec![date(2024, 1, 10), date(2024, 1, 11), date(2024, 1, 12)]
        );
    }

    #[test]
    fn expand_days_single_day_range() {
        let days = expand_days(date(2024, 3, 1), date(2024, 3, 1));
        assert_eq!(days, vec![date(2024, 3, 1)]);
    }

    #[test]
    fn expand_days_crosses_month_boundary() {
        let days = expand_days(date(2024, 2, 28), date(2024, 3, 2));
        // 2024 is a leap year
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], date(2024, 2, 28));
        assert_eq!(days[1], date(2024, 2, 29));
        assert_eq!(days[3], date(2024, 3, 2));
    }

    #[test]
    fn expand_days_is_strictly_increasing() {
        let days = expand_days(date(2023, 12, 20), date(2024, 1, 5));
        assert_eq!(days.len(), 17);
        for pair in days.windows(2) {
            assert_eq!(pair[1], pair[0].succ_opt().unwrap());
        }
    }

    #[test]
    fn autocomplete_field_parses_allowed_names_only() {
        assert_eq!(
            "employee_name".parse::<AutocompleteField>().unwrap(),
            AutocompleteField::EmployeeName
        );
        assert_eq!(
            "department".parse::<AutocompleteField>().unwrap(),
            AutocompleteField::Department
        );
        assert!("salary".parse::<AutocompleteField>().is_err());
    }
}
