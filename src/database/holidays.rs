use chrono::NaiveDate;
use sqlx::{any::AnyRow, Row};

use crate::{
    database::Database,
    domain::errors::{HolidayError, HolidayResult},
    models::{AutocompleteField, Holiday},
};

/// Decode a raw row into a typed holiday. Missing or ill-typed columns,
/// unparsable dates and broken day lists all surface as `MalformedRecord`.
fn decode_row(row: &AnyRow) -> HolidayResult<Holiday> {
    let id: String = row.try_get("id")?;
    let employee_name: String = row.try_get("employee_name")?;
    let department: Option<String> = row.try_get("department")?;
    let start_raw: String = row.try_get("start_date")?;
    let end_raw: String = row.try_get("end_date")?;
    let days_raw: String = row.try_get("days")?;
    let created_at: String = row.try_get("created_at")?;

    let start_date = start_raw.parse::<NaiveDate>().map_err(|e| {
        HolidayError::MalformedRecord(format!("holiday {}: bad start_date '{}': {}", id, start_raw, e))
    })?;
    let end_date = end_raw.parse::<NaiveDate>().map_err(|e| {
        HolidayError::MalformedRecord(format!("holiday {}: bad end_date '{}': {}", id, end_raw, e))
    })?;
    let days: Vec<NaiveDate> = serde_json::from_str(&days_raw).map_err(|e| {
        HolidayError::MalformedRecord(format!("holiday {}: bad days column: {}", id, e))
    })?;

    Ok(Holiday {
        id,
        employee_name,
        department,
        start_date,
        end_date,
        days,
        created_at,
    })
}

const SELECT_COLUMNS: &str =
    "id, employee_name, department, start_date, end_date, days, created_at";

impl Database {
    /// Insert a new holiday. The overlap predicate is re-checked inside the
    /// transaction so two racing inserts for the same employee cannot both
    /// commit.
    pub async fn insert_holiday(&self, holiday: &Holiday) -> HolidayResult<()> {
        let mut tx = self.pool().begin().await?;

        let conflicts: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM holidays
             WHERE employee_name = ? AND start_date <= ? AND end_date >= ?",
        )
        .bind(&holiday.employee_name)
        .bind(holiday.end_date.to_string())
        .bind(holiday.start_date.to_string())
        .fetch_one(&mut *tx)
        .await?;

        if conflicts > 0 {
            return Err(HolidayError::OverlapConflict {
                employee_name: holiday.employee_name.clone(),
                start: holiday.start_date,
                end: holiday.end_date,
            });
        }

        let days = serde_json::to_string(&holiday.days)
            .map_err(|e| HolidayError::Internal(format!("failed to encode days: {}", e)))?;

        sqlx::query(
            "INSERT INTO holidays (id, employee_name, department, start_date, end_date, days, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&holiday.id)
        .bind(&holiday.employee_name)
        .bind(holiday.department.as_deref())
        .bind(holiday.start_date.to_string())
        .bind(holiday.end_date.to_string())
        .bind(days)
        .bind(&holiday.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Get all holidays, earliest range first. The id tie-breaker keeps the
    /// order stable when ranges share a start date.
    pub async fn list_holidays(&self) -> HolidayResult<Vec<Holiday>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM holidays ORDER BY start_date ASC, id ASC",
            SELECT_COLUMNS
        ))
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(decode_row).collect()
    }

    /// Holidays for one employee whose range intersects [start, end].
    /// Dates are stored as ISO strings, so lexicographic comparison in SQL
    /// matches date order.
    pub async fn find_overlapping_holidays(
        &self,
        employee_name: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> HolidayResult<Vec<Holiday>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM holidays
             WHERE employee_name = ? AND start_date <= ? AND end_date >= ?
             ORDER BY start_date ASC, id ASC",
            SELECT_COLUMNS
        ))
        .bind(employee_name)
        .bind(end.to_string())
        .bind(start.to_string())
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(decode_row).collect()
    }

    /// Delete a holiday by id, returning whether a record was removed.
    pub async fn delete_holiday(&self, id: &str) -> HolidayResult<bool> {
        let result = sqlx::query("DELETE FROM holidays WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Distinct stored values for an autocomplete field. NULL departments
    /// are excluded; the column name comes from the closed field enum, never
    /// from client input.
    pub async fn distinct_field_values(
        &self,
        field: AutocompleteField,
    ) -> HolidayResult<Vec<String>> {
        let column = field.column();
        let values: Vec<String> = sqlx::query_scalar(&format!(
            "SELECT DISTINCT {} FROM holidays WHERE {} IS NOT NULL ORDER BY {} ASC",
            column, column, column
        ))
        .fetch_all(self.pool())
        .await?;

        Ok(values)
    }
}
