use chrono::NaiveDate;
use timeoff::database::Database;
use timeoff::domain::ports::HolidayRepository;
use timeoff::models::CreateHolidayRequest;
use timeoff::services::HolidayService;

pub fn holiday_service(db: &Database) -> HolidayService {
    HolidayService::new(HolidayRepository::new(db.clone()))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn create_request(
    employee_name: &str,
    department: Option<&str>,
    start: NaiveDate,
    end: NaiveDate,
) -> CreateHolidayRequest {
    CreateHolidayRequest {
        employee_name: employee_name.to_string(),
        department: department.map(str::to_string),
        start_date: start,
        end_date: end,
    }
}
