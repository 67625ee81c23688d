use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    api::middleware::{ApiResult, AppState},
    domain::ports::HolidayRepository,
    models::{CreateHolidayRequest, HolidayResponse},
    services::HolidayService,
};

fn holiday_service(state: &AppState) -> HolidayService {
    HolidayService::new(HolidayRepository::new(state.db.clone()))
}

/// GET /holidays - List all holidays
pub async fn list_holidays(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<HolidayResponse>>> {
    let service = holiday_service(&state);

    let holidays = service.list_holidays().await?;

    Ok(Json(
        holidays.into_iter().map(HolidayResponse::from).collect(),
    ))
}

/// POST /holidays - Create a new holiday
pub async fn create_holiday(
    State(state): State<AppState>,
    Json(req): Json<CreateHolidayRequest>,
) -> ApiResult<(StatusCode, Json<HolidayResponse>)> {
    let service = holiday_service(&state);

    let holiday = service.create_holiday(req).await?;

    Ok((StatusCode::CREATED, Json(HolidayResponse::from(holiday))))
}

/// DELETE /holidays/:id - Delete a holiday by id
pub async fn delete_holiday(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let service = holiday_service(&state);

    service.delete_holiday(&id).await?;

    Ok(Json(json!({ "message": "Holiday deleted" })))
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteQuery {
    pub field: String,
}

/// GET /holidays/autocomplete?field=... - Distinct values for a field
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteQuery>,
) -> ApiResult<Json<Vec<String>>> {
    let service = holiday_service(&state);

    let values = service.autocomplete(&params.field).await?;

    Ok(Json(values))
}
