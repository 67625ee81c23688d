// Integration tests for autocomplete field suggestions
use timeoff::domain::errors::HolidayError;

mod helpers;
use helpers::*;

#[tokio::test]
async fn test_employee_names_deduplicated() {
    let db = setup_test_db().await;
    let service = holiday_service(&db);

    service
        .create_holiday(create_request("Ana", None, date(2024, 1, 1), date(2024, 1, 3)))
        .await
        .expect("Failed to create holiday");
    service
        .create_holiday(create_request("Ana", None, date(2024, 2, 1), date(2024, 2, 3)))
        .await
        .expect("Failed to create holiday");
    service
        .create_holiday(create_request("Ben", None, date(2024, 1, 1), date(2024, 1, 3)))
        .await
        .expect("Failed to create holiday");

    let values = service
        .autocomplete("employee_name")
        .await
        .expect("Failed to autocomplete");
    assert_eq!(values, vec!["Ana".to_string(), "Ben".to_string()]);
}

#[tokio::test]
async fn test_department_values_exclude_missing() {
    let db = setup_test_db().await;
    let service = holiday_service(&db);

    service
        .create_holiday(create_request(
            "Ana",
            Some("Engineering"),
            date(2024, 1, 1),
            date(2024, 1, 3),
        ))
        .await
        .expect("Failed to create holiday");
    service
        .create_holiday(create_request("Ben", None, date(2024, 1, 1), date(2024, 1, 3)))
        .await
        .expect("Failed to create holiday");
    service
        .create_holiday(create_request(
            "Cara",
            Some("Sales"),
            date(2024, 1, 1),
            date(2024, 1, 3),
        ))
        .await
        .expect("Failed to create holiday");

    let values = service
        .autocomplete("department")
        .await
        .expect("Failed to autocomplete");
    assert_eq!(values, vec!["Engineering".to_string(), "Sales".to_string()]);
}

#[tokio::test]
async fn test_empty_store_yields_no_suggestions() {
    let db = setup_test_db().await;
    let service = holiday_service(&db);

    let values = service
        .autocomplete("employee_name")
        .await
        .expect("Failed to autocomplete");
    assert!(values.is_empty());
}

#[tokio::test]
async fn test_unknown_field_rejected() {
    let db = setup_test_db().await;
    let service = holiday_service(&db);

    let err = service.autocomplete("salary").await.unwrap_err();
    assert!(matches!(err, HolidayError::InvalidField(_)));
}
