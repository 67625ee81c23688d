use uuid::Uuid;

use crate::{
    domain::errors::{HolidayError, HolidayResult},
    domain::ports::HolidayRepository,
    models::{AutocompleteField, CreateHolidayRequest, Holiday},
};

/// Service for holiday record management: validates requests, enforces the
/// per-employee overlap rule and coordinates persistence.
#[derive(Clone)]
pub struct HolidayService {
    holiday_repo: HolidayRepository,
}

impl HolidayService {
    pub fn new(holiday_repo: HolidayRepository) -> Self {
        Self { holiday_repo }
    }

    /// Create a new holiday from a validated request
    pub async fn create_holiday(&self, request: CreateHolidayRequest) -> HolidayResult<Holiday> {
        // 1. Validate employee name
        let employee_name = request.employee_name.trim().to_string();
        if employee_name.is_empty() {
            return Err(HolidayError::Validation(
                "employee name cannot be empty".to_string(),
            ));
        }

        // 2. Validate date ordering
        if request.end_date < request.start_date {
            return Err(HolidayError::InvalidRange {
                start: request.start_date,
                end: request.end_date,
            });
        }

        // 3. Reject ranges that intersect an existing holiday for the same
        //    employee. Reported with the conflicting record's range so the
        //    caller can render a useful message.
        let conflicts = self
            .holiday_repo
            .find_overlapping_holidays(&employee_name, request.start_date, request.end_date)
            .await?;
        if let Some(existing) = conflicts.first() {
            return Err(HolidayError::OverlapConflict {
                employee_name,
                start: existing.start_date,
                end: existing.end_date,
            });
        }

        // 4. Build the record (generated id, derived day sequence)
        let department = request.department.and_then(|d| {
            let d = d.trim().to_string();
            if d.is_empty() {
                None
            } else {
                Some(d)
            }
        });
        let holiday = Holiday::new(employee_name, department, request.start_date, request.end_date);

        // 5. Persist; the insert re-checks the overlap inside a transaction,
        //    so a concurrent create for the same employee cannot slip in
        //    between step 3 and here.
        self.holiday_repo.insert_holiday(&holiday).await?;

        Ok(holiday)
    }

    /// List all holidays, earliest range first
    pub async fn list_holidays(&self) -> HolidayResult<Vec<Holiday>> {
        self.holiday_repo.list_holidays().await
    }

    /// Delete a holiday by id
    pub async fn delete_holiday(&self, id: &str) -> HolidayResult<()> {
        // Malformed ids can never match a stored record
        if Uuid::parse_str(id).is_err() {
            return Err(HolidayError::InvalidIdentifier(id.to_string()));
        }

        if self.holiday_repo.delete_holiday(id).await? {
            Ok(())
        } else {
            Err(HolidayError::NotFound(id.to_string()))
        }
    }

    /// Distinct stored values for a client-visible field
    pub async fn autocomplete(&self, field: &str) -> HolidayResult<Vec<String>> {
        let field: AutocompleteField = field.parse()?;
        self.holiday_repo.distinct_field_values(field).await
    }
}
