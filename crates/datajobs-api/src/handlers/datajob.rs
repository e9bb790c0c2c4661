//! Data job CRUD and background-process handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use validator::Validate;

use datajobs_core::AppError;
use datajobs_core::types::DataJobId;
use datajobs_entity::{DataJobChanges, DataJobStatus, NewDataJob};

use crate::dto::request::{CreateDataJobRequest, UpdateDataJobRequest};
use crate::dto::response::{DataJobResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Run `validator` on a request body, surfacing field errors as details.
fn check_body<T: Validate>(body: &T) -> Result<(), ApiError> {
    body.validate().map_err(|errors| {
        let details = serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null);
        ApiError(AppError::validation("Invalid request body").with_details(details))
    })
}

/// GET /api/datajobs
pub async fn list_datajobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<DataJobResponse>>, ApiError> {
    let jobs = state.datajob_service.list().await?;
    Ok(Json(jobs.iter().map(DataJobResponse::from).collect()))
}

/// GET /api/datajobs/status/{status}
pub async fn list_datajobs_by_status(
    State(state): State<AppState>,
    Path(status): Path<DataJobStatus>,
) -> Result<Json<Vec<DataJobResponse>>, ApiError> {
    let jobs = state.datajob_service.list_by_status(status).await?;
    Ok(Json(jobs.iter().map(DataJobResponse::from).collect()))
}

/// GET /api/datajobs/{id}
pub async fn get_datajob(
    State(state): State<AppState>,
    Path(id): Path<DataJobId>,
) -> Result<Json<DataJobResponse>, ApiError> {
    let job = state.datajob_service.get(id).await?;
    Ok(Json(DataJobResponse::from(job)))
}

/// POST /api/datajobs
pub async fn create_datajob(
    State(state): State<AppState>,
    Json(req): Json<CreateDataJobRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    check_body(&req)?;

    let job = state
        .datajob_service
        .create(NewDataJob {
            name: req.name,
            file_path_to_process: req.file_path_to_process,
        })
        .await?;

    let location = format!("/api/datajobs/{}", job.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(DataJobResponse::from(job)),
    ))
}

/// PUT /api/datajobs/{id}
pub async fn update_datajob(
    State(state): State<AppState>,
    Path(id): Path<DataJobId>,
    Json(req): Json<UpdateDataJobRequest>,
) -> Result<StatusCode, ApiError> {
    check_body(&req)?;

    state
        .datajob_service
        .update(
            id,
            DataJobChanges {
                name: req.name,
                file_path_to_process: req.file_path_to_process,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/datajobs/{id}
pub async fn delete_datajob(
    State(state): State<AppState>,
    Path(id): Path<DataJobId>,
) -> Result<StatusCode, ApiError> {
    state.datajob_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/datajobs/startProcess/{id}
pub async fn start_process(
    State(state): State<AppState>,
    Path(id): Path<DataJobId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.datajob_service.start_process(id).await?;
    Ok(Json(MessageResponse {
        message: "Background process started".to_string(),
    }))
}

/// GET /api/datajobs/status/process/{id}
pub async fn get_process_status(
    State(state): State<AppState>,
    Path(id): Path<DataJobId>,
) -> Result<Json<DataJobStatus>, ApiError> {
    let status = state.datajob_service.process_status(id).await?;
    Ok(Json(status))
}

/// GET /api/datajobs/results/{id}
pub async fn get_process_results(
    State(state): State<AppState>,
    Path(id): Path<DataJobId>,
) -> Result<Json<Vec<String>>, ApiError> {
    let results = state.datajob_service.process_results(id).await?;
    Ok(Json(results))
}
