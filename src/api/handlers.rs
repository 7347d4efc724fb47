//! HTTP request handlers for the billing and payroll engine API.
//!
//! Each handler parses the JSON body, runs the relevant calculators and
//! renders the result. Display strings are produced through the
//! workspace settings held in [`AppState`].

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    InvoiceDraft, calculate_salary_breakdown, estimate_budget, normalize_items, suggest_periods,
    validate_invoice, validate_salary_period,
};
use crate::money::round2;
use crate::settings::{format_money, resolve_timezone};

use super::request::{
    EstimateRequest, InvoicePreviewRequest, PeriodValidationRequest, SalaryCalculationRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, EstimateResponse, InvoicePreviewResponse, SalaryResponse,
    ValidationOutcome,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/project/estimate", post(estimate_handler))
        .route("/invoice/preview", post(invoice_preview_handler))
        .route("/invoice/validate", post(invoice_validate_handler))
        .route("/salary/calculate", post(salary_calculate_handler))
        .route("/salary/validate-period", post(period_validate_handler))
        .route("/salary/period-suggestions", get(period_suggestions_handler))
        .with_state(state)
}

/// Unpacks a JSON body, turning axum rejections into error responses.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed serde error
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

fn error_response(error: crate::error::EngineError, correlation_id: Uuid) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    let api_error: ApiErrorResponse = error.into();
    api_error.into_response()
}

/// Handler for POST /project/estimate.
///
/// Computes the budget estimate for a payment schedule over a date
/// range, plus its formatted display string.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let estimate = estimate_budget(&request.schedule, &request.range);
    info!(
        correlation_id = %correlation_id,
        payment_type = ?request.schedule.payment_type,
        estimated_total = %estimate.estimated_total,
        "Estimate completed"
    );

    let estimated_total_display = format_money(Some(estimate.estimated_total), state.settings());
    Json(EstimateResponse {
        estimate,
        estimated_total_display,
    })
    .into_response()
}

/// Handler for POST /invoice/preview.
///
/// Recomputes every line amount server-side and returns the totals with
/// their formatted display strings.
async fn invoice_preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<InvoicePreviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing invoice preview request");

    let mut request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let total_amount = normalize_items(&mut request.items);
    let paid_amount = round2(request.paid_amount);
    let balance_amount = total_amount - paid_amount;

    info!(
        correlation_id = %correlation_id,
        items_count = request.items.len(),
        total_amount = %total_amount,
        "Invoice preview completed"
    );

    let settings = state.settings();
    Json(InvoicePreviewResponse {
        items: request.items,
        total_amount,
        paid_amount,
        balance_amount,
        total_display: format_money(Some(total_amount), settings),
        balance_display: format_money(Some(balance_amount), settings),
    })
    .into_response()
}

/// Handler for POST /invoice/validate.
///
/// Returns 200 when the draft passes, or 400 with the complete list of
/// violations so the form can mark every offending field at once.
async fn invoice_validate_handler(
    payload: Result<Json<InvoiceDraft>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing invoice validation request");

    let draft = match parse_json(payload, correlation_id) {
        Ok(draft) => draft,
        Err(response) => return response,
    };

    match validate_invoice(&draft) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, "Invoice draft valid");
            Json(ValidationOutcome::passed()).into_response()
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /salary/calculate.
async fn salary_calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary calculation request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let breakdown = calculate_salary_breakdown(
        &request.rate_info,
        &request.attendance,
        &request.deductions,
        request.adhoc_deductions,
    );

    info!(
        correlation_id = %correlation_id,
        present_days = request.attendance.present_days,
        gross_salary = %breakdown.gross_salary,
        net_pay = %breakdown.net_pay,
        "Salary calculation completed"
    );

    let settings = state.settings();
    Json(SalaryResponse {
        gross_salary_display: format_money(Some(breakdown.gross_salary), settings),
        net_pay_display: format_money(Some(breakdown.net_pay), settings),
        breakdown,
    })
    .into_response()
}

/// Handler for POST /salary/validate-period.
async fn period_validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period validation request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let today = workspace_today(&state);
    match validate_salary_period(&request.input, request.gross_salary, today) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, "Salary period valid");
            Json(ValidationOutcome::passed()).into_response()
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for GET /salary/period-suggestions.
async fn period_suggestions_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let today = workspace_today(&state);
    let suggestions = suggest_periods(today);
    info!(
        correlation_id = %correlation_id,
        count = suggestions.len(),
        "Period suggestions produced"
    );
    Json(suggestions).into_response()
}

/// The current date in the workspace timezone.
///
/// Period validation treats "today" as a wall-clock date, so the
/// configured offset matters near midnight.
fn workspace_today(state: &AppState) -> chrono::NaiveDate {
    let offset = resolve_timezone(&state.settings().date_time.timezone);
    Utc::now().with_timezone(&offset).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateRange, LineItem, PaymentSchedule, PaymentType};
    use crate::settings::WorkspaceSettings;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_router() -> Router {
        create_router(AppState::new(WorkspaceSettings::default()))
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");
        let request = builder
            .body(match body {
                Some(value) => Body::from(value.to_string()),
                None => Body::empty(),
            })
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_estimate_endpoint_returns_total_and_display() {
        let body = json!({
            "schedule": {
                "payment_type": "daily",
                "rate": "500",
                "working_days_per_week": 6
            },
            "range": { "start": "2024-01-01", "end": "2024-01-14" }
        });
        let (status, value) = send(test_router(), "POST", "/project/estimate", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["estimated_total"], "6000.00");
        assert_eq!(value["estimated_total_display"], "$ 6000.00");
        assert_eq!(value["working_days"], 12);
    }

    #[tokio::test]
    async fn test_invoice_preview_recomputes_amounts() {
        let body = json!({
            "items": [
                { "description": "Design", "quantity": "2", "rate": "150.005", "amount": "0" },
                { "description": "Build", "quantity": "1", "rate": "100", "amount": "999" }
            ],
            "paid_amount": "50"
        });
        let (status, value) = send(test_router(), "POST", "/invoice/preview", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["items"][0]["amount"], "300.01");
        assert_eq!(value["items"][1]["amount"], "100.00");
        assert_eq!(value["total_amount"], "400.01");
        assert_eq!(value["balance_amount"], "350.01");
        assert_eq!(value["total_display"], "$ 400.01");
    }

    #[tokio::test]
    async fn test_invoice_validate_collects_violations() {
        let body = json!({
            "billed_to": "client_007",
            "items": [
                { "description": "", "quantity": "0", "rate": "-1", "amount": "0" }
            ],
            "paid_amount": "20000"
        });
        let (status, value) = send(test_router(), "POST", "/invoice/validate", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["code"], "VALIDATION_ERROR");
        let violations = value["violations"].as_array().unwrap();
        assert!(violations.iter().any(|v| v == "Paid amount cannot exceed total amount"));
        assert!(violations.iter().any(|v| v == "Item 1: description is required"));
    }

    #[tokio::test]
    async fn test_invoice_validate_passes_clean_draft() {
        let body = json!({
            "billed_to": "client_007",
            "items": [
                { "description": "Design", "quantity": "2", "rate": "150", "amount": "300" }
            ],
            "paid_amount": "100"
        });
        let (status, value) = send(test_router(), "POST", "/invoice/validate", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["valid"], true);
    }

    #[tokio::test]
    async fn test_salary_calculate_reference_breakdown() {
        let body = json!({
            "rate_info": { "salary_type": "daily", "base_rate": "800", "overtime_rate": "120" },
            "attendance": {
                "working_days_in_period": 26,
                "present_days": 20,
                "absent_days": 6,
                "overtime_hours": "5"
            },
            "adhoc_deductions": "300"
        });
        let (status, value) = send(test_router(), "POST", "/salary/calculate", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["gross_salary"], "16600.00");
        assert_eq!(value["net_pay"], "16300.00");
        assert_eq!(value["net_pay_display"], "$ 16300.00");
    }

    #[tokio::test]
    async fn test_period_validation_rejects_long_period() {
        let body = json!({
            "worker_id": "worker_042",
            "period_from": "2024-02-01",
            "period_to": "2024-03-10",
            "deductions": "0",
            "gross_salary": "16600"
        });
        let (status, value) = send(test_router(), "POST", "/salary/validate-period", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let violations = value["violations"].as_array().unwrap();
        assert!(violations.iter().any(|v| v == "Salary period cannot exceed 31 days"));
    }

    #[tokio::test]
    async fn test_period_suggestions_end_today_or_earlier() {
        let (status, value) = send(test_router(), "GET", "/salary/period-suggestions", None).await;
        assert_eq!(status, StatusCode::OK);
        let suggestions = value.as_array().unwrap();
        assert_eq!(suggestions.len(), 3);
        let today = workspace_today(&AppState::new(WorkspaceSettings::default()));
        for suggestion in suggestions {
            let end =
                NaiveDate::from_str(suggestion["range"]["end"].as_str().unwrap()).unwrap();
            assert!(end <= today);
        }
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/project/estimate")
            .header("Content-Type", "application/json")
            .body(Body::from("{invalid json"))
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_field_reports_validation_error() {
        let body = json!({ "range": { "start": "2024-01-01", "end": "2024-01-14" } });
        let (status, value) = send(test_router(), "POST", "/project/estimate", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["code"], "VALIDATION_ERROR");
    }

    #[test]
    fn test_estimate_math_behind_the_endpoint() {
        let schedule = PaymentSchedule {
            payment_type: PaymentType::Daily,
            rate: dec("500"),
            working_days_per_week: 6,
            overtime_rate: None,
            overtime_hours: None,
        };
        let range = DateRange::between(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
        );
        let estimate = estimate_budget(&schedule, &range);
        assert_eq!(estimate.estimated_total, dec("6000.00"));
    }

    #[test]
    fn test_preview_balance_uses_line_totals() {
        let mut items = vec![LineItem::new("Design", dec("2"), dec("150.005"))];
        let total = normalize_items(&mut items);
        assert_eq!(total, dec("300.01"));
    }
}
