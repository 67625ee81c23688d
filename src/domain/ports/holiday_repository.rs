use chrono::NaiveDate;

use crate::{
    database::Database,
    domain::errors::HolidayResult,
    models::{AutocompleteField, Holiday},
};

/// Persistence handle for holiday records. Constructed by the caller and
/// injected into the service, so the storage lifecycle stays explicit.
#[derive(Clone)]
pub struct HolidayRepository {
    db: Database,
}

impl HolidayRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a holiday; the backing store guarantees the overlap check and
    /// the insert run as a single logical unit.
    pub async fn insert_holiday(&self, holiday: &Holiday) -> HolidayResult<()> {
        self.db.insert_holiday(holiday).await
    }

    /// All holidays ordered by start date
    pub async fn list_holidays(&self) -> HolidayResult<Vec<Holiday>> {
        self.db.list_holidays().await
    }

    /// Holidays for one employee intersecting the given inclusive range
    pub async fn find_overlapping_holidays(
        &self,
        employee_name: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> HolidayResult<Vec<Holiday>> {
        self.db
            .find_overlapping_holidays(employee_name, start, end)
            .await
    }

    /// Delete by id; true when a record was removed
    pub async fn delete_holiday(&self, id: &str) -> HolidayResult<bool> {
        self.db.delete_holiday(id).await
    }

    /// Distinct values currently stored for an autocomplete field
    pub async fn distinct_field_values(
        &self,
        field: AutocompleteField,
    ) -> HolidayResult<Vec<String>> {
        self.db.distinct_field_values(field).await
    }
}
