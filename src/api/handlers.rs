//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::{BatchPayRequest, NewEmployee, NewWorkLog};
use crate::store::LogStore;

use super::request::{
    DashboardQuery, LoginRequest, NoteRequest, PayWeekRequest, PostShiftRequest, TakeShiftRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, MessageResponse, PaidToggled, PayWeekResponse, WorkLogCreated,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/login", post(login_handler))
        .route(
            "/api/employees",
            get(list_employees_handler).post(add_employee_handler),
        )
        .route("/api/employees/:id", delete(delete_employee_handler))
        .route(
            "/api/work-logs",
            get(list_work_logs_handler).post(add_work_log_handler),
        )
        .route("/api/work-logs/:id/notes", post(set_note_handler))
        .route("/api/work-logs/:id/toggle-paid", post(toggle_paid_handler))
        .route("/api/work-logs/batch-pay", post(batch_pay_handler))
        .route("/api/payroll/weekly", get(weekly_summary_handler))
        .route("/api/payroll/weekly/pay", post(pay_week_handler))
        .route("/api/dashboard/stats", get(dashboard_handler))
        .route(
            "/api/shift-requests",
            get(open_shift_requests_handler).post(post_shift_request_handler),
        )
        .route("/api/shift-requests/:id/take", post(take_shift_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns a body that failed to deserialize into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

fn error_response(correlation_id: Uuid, error: PayrollError) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    let api_error: ApiErrorResponse = error.into();
    json_response(api_error.status, api_error.error)
}

fn respond<T: Serialize>(
    correlation_id: Uuid,
    started: Instant,
    status: StatusCode,
    result: Result<T, PayrollError>,
) -> Response {
    match result {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                status = status.as_u16(),
                duration_us = started.elapsed().as_micros(),
                "Request completed"
            );
            json_response(status, body)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /api/login.
async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(correlation_id = %correlation_id, username = %request.username, "Login attempt");
    respond(
        correlation_id,
        started,
        StatusCode::OK,
        state
            .store()
            .authenticate(&request.username, &request.password),
    )
}

/// Handler for GET /api/employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    respond(Uuid::new_v4(), Instant::now(), StatusCode::OK, state.store().list_employees())
}

/// Handler for POST /api/employees.
///
/// Responds with the employee and the credentials of their new account.
async fn add_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let new_employee = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(correlation_id = %correlation_id, "Adding employee");
    respond(
        correlation_id,
        started,
        StatusCode::CREATED,
        state.store().add_employee(new_employee),
    )
}

/// Handler for DELETE /api/employees/:id.
async fn delete_employee_handler(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    info!(correlation_id = %correlation_id, employee_id = id, "Deleting employee");
    respond(
        correlation_id,
        started,
        StatusCode::OK,
        state
            .store()
            .delete_employee(id)
            .map(|()| MessageResponse::new("Employee deleted")),
    )
}

/// Handler for GET /api/work-logs.
///
/// Returns the raw logs, newest first.
async fn list_work_logs_handler(State(state): State<AppState>) -> Response {
    respond(Uuid::new_v4(), Instant::now(), StatusCode::OK, state.store().work_logs())
}

/// Handler for POST /api/work-logs.
async fn add_work_log_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewWorkLog>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let new_log = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = new_log.employee_id,
        date = %new_log.date,
        "Adding work log"
    );
    respond(
        correlation_id,
        started,
        StatusCode::CREATED,
        state.store().add_work_log(new_log).map(|id| WorkLogCreated {
            id,
            message: "Work log added".to_string(),
        }),
    )
}

/// Handler for POST /api/work-logs/:id/notes.
async fn set_note_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    respond(
        correlation_id,
        started,
        StatusCode::OK,
        state
            .store()
            .set_note(id, request.note)
            .map(|()| MessageResponse::new("Note saved")),
    )
}

/// Handler for POST /api/work-logs/:id/toggle-paid.
async fn toggle_paid_handler(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    info!(correlation_id = %correlation_id, log_id = id, "Toggling payment status");
    respond(
        correlation_id,
        started,
        StatusCode::OK,
        state.store().toggle_paid(id).map(|is_paid| PaidToggled {
            id,
            is_paid,
            message: "Payment status updated".to_string(),
        }),
    )
}

/// Handler for POST /api/work-logs/batch-pay.
async fn batch_pay_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchPayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        log_count = request.log_ids.len(),
        "Processing batch pay"
    );
    respond(correlation_id, started, StatusCode::OK, state.payroll().pay_logs(&request))
}

/// Handler for GET /api/payroll/weekly.
async fn weekly_summary_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let result = state.payroll().weekly_summary();

    if let Ok(buckets) = &result {
        let outstanding: Decimal = buckets.iter().map(|b| b.unpaid_cost).sum();
        info!(
            correlation_id = %correlation_id,
            buckets = buckets.len(),
            outstanding = %state.config().config().format_money(outstanding),
            "Weekly summary served"
        );
    }

    respond(correlation_id, started, StatusCode::OK, result)
}

/// Handler for POST /api/payroll/weekly/pay.
///
/// Pays every unpaid entry in the requested bucket and returns the
/// confirmation together with the refreshed weekly summary.
async fn pay_week_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayWeekRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = request.employee_id,
        week_start = %request.week_start,
        "Processing weekly pay"
    );
    respond(
        correlation_id,
        started,
        StatusCode::OK,
        state
            .payroll()
            .pay_week(request.employee_id, request.week_start)
            .map(|outcome| PayWeekResponse {
                confirmation: outcome.confirmation,
                weekly: outcome.buckets,
            }),
    )
}

/// Handler for GET /api/dashboard/stats.
async fn dashboard_handler(
    State(state): State<AppState>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Query string error"
            );
            return json_response(StatusCode::BAD_REQUEST, ApiError::validation_error(body_text));
        }
    };

    let today = query.today.unwrap_or_else(|| Utc::now().date_naive());
    respond(correlation_id, started, StatusCode::OK, state.payroll().dashboard(today))
}

/// Handler for GET /api/shift-requests.
async fn open_shift_requests_handler(State(state): State<AppState>) -> Response {
    respond(
        Uuid::new_v4(),
        Instant::now(),
        StatusCode::OK,
        state.store().open_shift_requests(),
    )
}

/// Handler for POST /api/shift-requests.
async fn post_shift_request_handler(
    State(state): State<AppState>,
    payload: Result<Json<PostShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        username = %request.session.username,
        date = %request.date,
        "Posting shift request"
    );
    respond(
        correlation_id,
        started,
        StatusCode::CREATED,
        state
            .store()
            .post_shift_request(&request.session, request.date),
    )
}

/// Handler for POST /api/shift-requests/:id/take.
async fn take_shift_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<TakeShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        request_id = id,
        username = %request.session.username,
        "Taking shift"
    );
    respond(
        correlation_id,
        started,
        StatusCode::OK,
        state.store().take_shift(&request.session, id),
    )
}
