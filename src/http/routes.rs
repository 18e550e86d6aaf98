//! Request handlers and the JSON error type

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, info};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::features::reminders::{parse_due_time, Reminder};

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct RemindersResponse {
    pub reminders: Vec<Reminder>,
}

#[derive(Debug, Deserialize)]
pub struct CreateReminderRequest {
    pub title: Option<String>,
    pub note: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateReminderResponse {
    pub success: bool,
    pub reminder: Reminder,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.router.context().start_time.elapsed().as_secs(),
    }))
}

/// Route typed or transcribed text, wake word included
pub async fn command(
    State(state): State<AppState>,
    payload: Result<Json<CommandRequest>, JsonRejection>,
) -> Result<Json<CommandResponse>, ApiError> {
    let Json(payload) = payload?;
    let routed = state.router.handle_text(&payload.text).await;
    Ok(Json(CommandResponse {
        response: routed.response,
    }))
}

pub async fn list_reminders(
    State(state): State<AppState>,
) -> Result<Json<RemindersResponse>, ApiError> {
    let reminders = state.reminders().list().await?;
    Ok(Json(RemindersResponse { reminders }))
}

pub async fn create_reminder(
    State(state): State<AppState>,
    payload: Result<Json<CreateReminderRequest>, JsonRejection>,
) -> Result<Json<CreateReminderResponse>, ApiError> {
    let Json(payload) = payload?;
    let title = payload
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::bad_request("Title and time are required."))?;
    let raw_time = payload
        .time
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::bad_request("Title and time are required."))?;
    let due_at = parse_due_time(raw_time)
        .ok_or_else(|| ApiError::bad_request(format!("Unrecognized time '{raw_time}'.")))?;

    let reminder = state
        .reminders()
        .add(title, payload.note.as_deref(), due_at)
        .await?;
    info!("Created reminder {} via API for {}", reminder.id, reminder.due_at);
    Ok(Json(CreateReminderResponse {
        success: true,
        reminder,
    }))
}

pub async fn delete_reminder(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Path(id) = id?;
    if !state.reminders().delete(id).await? {
        return Err(ApiError::new(
            StatusCode::NOT_FOUND,
            format!("No reminder with id {id}."),
        ));
    }
    Ok(Json(SuccessResponse { success: true }))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

/// Error returned by handlers, rendered as `{"success": false, "error": ...}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        error!("❌ Request failed: {err:#}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal error.")
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
