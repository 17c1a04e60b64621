use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{complaintdb::ComplaintExt, userdb::UserExt, zonedb::ZoneExt},
    dtos::complaintdtos::{
        AdminComplaintListResponseDto, AssignOfficerDto, AssignedComplaintQueryDto,
        AssignmentData, AssignmentResponseDto, ComplaintData, ComplaintListResponseDto,
        ComplaintQueryDto, ComplaintResponseDto, LodgeComplaintDto, UpdateComplaintStatusDto,
    },
    error::{ErrorMessage, HttpError},
    middleware::{role_check, JWTAuthMiddeware},
    models::{complaintmodel::ComplaintStatus, usermodel::UserRole},
    utils::photo,
    AppState,
};

const MAX_PHOTO_SIZE_MB: usize = 5;

pub fn complaints_handler() -> Router {
    Router::new()
        .route(
            "/",
            post(lodge_complaint).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Citizen])
            })),
        )
        .route(
            "/my",
            get(get_my_complaints).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Citizen])
            })),
        )
        .route(
            "/all",
            get(get_all_complaints).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Admin])
            })),
        )
        .route(
            "/assigned",
            get(get_assigned_complaints).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Officer])
            })),
        )
        .route(
            "/:complaint_id/assign",
            post(assign_officer).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Admin])
            })),
        )
        .route(
            "/:complaint_id/status",
            put(update_status).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Admin, UserRole::Officer])
            })),
        )
}

pub async fn lodge_complaint(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    Json(body): Json<LodgeComplaintDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    if let Some(zone_id) = body.zone_id {
        let zone = app_state
            .db_client
            .get_zone(zone_id)
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?;

        if zone.is_none() {
            return Err(HttpError::not_found("Zone not found"));
        }
    }

    let photo_path = match body.photo.as_deref() {
        Some(data) => {
            if !photo::validate_photo_size(data, MAX_PHOTO_SIZE_MB) {
                return Err(HttpError::bad_request(format!(
                    "Photo must not be larger than {} MB",
                    MAX_PHOTO_SIZE_MB
                )));
            }

            let path = photo::store_complaint_photo(data, &app_state.env.upload_dir)
                .await
                .map_err(|e| HttpError::server_error(e.to_string()))?;

            Some(path)
        }
        None => None,
    };

    let complaint = app_state
        .db_client
        .save_complaint(
            user.user.id,
            body.zone_id,
            body.title,
            body.description,
            photo_path,
            body.location,
            body.latitude,
            body.longitude,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    tracing::info!("complaint {} lodged by {}", complaint.id, user.user.email);

    Ok(Json(ComplaintResponseDto {
        status: "success".to_string(),
        data: ComplaintData { complaint },
    }))
}

pub async fn get_my_complaints(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let complaints = app_state
        .db_client
        .get_citizen_complaints(user.user.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let results = complaints.len() as i64;

    Ok(Json(ComplaintListResponseDto {
        status: "success".to_string(),
        complaints,
        results,
    }))
}

pub async fn get_all_complaints(
    Query(query_params): Query<ComplaintQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1) as u32;
    let search = query_params.q.as_deref();

    let complaints = app_state
        .db_client
        .search_complaints(search, page, 10)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let count = app_state
        .db_client
        .get_complaint_count(search)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(AdminComplaintListResponseDto {
        status: "success".to_string(),
        complaints,
        results: count,
    }))
}

pub async fn get_assigned_complaints(
    Query(query_params): Query<AssignedComplaintQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1) as u32;
    let search = query_params.q.as_deref();

    let complaints = app_state
        .db_client
        .get_assigned_complaints(user.user.id, search, query_params.status, page, 5)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let count = app_state
        .db_client
        .get_assigned_complaint_count(user.user.id, search, query_params.status)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ComplaintListResponseDto {
        status: "success".to_string(),
        complaints,
        results: count,
    }))
}

pub async fn assign_officer(
    Path(complaint_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<AssignOfficerDto>,
) -> Result<impl IntoResponse, HttpError> {
    let complaint = app_state
        .db_client
        .get_complaint(complaint_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let complaint = complaint.ok_or(HttpError::not_found("Complaint not found"))?;

    let officer = app_state
        .db_client
        .get_user(Some(body.officer_id), None, None)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let officer = officer.ok_or(HttpError::not_found("Officer not found"))?;

    if officer.role != UserRole::Officer {
        return Err(HttpError::bad_request("Selected user is not an officer"));
    }

    if !complaint
        .status
        .can_transition_to(ComplaintStatus::InProgress)
    {
        return Err(HttpError::bad_request("Complaint can no longer be assigned"));
    }

    let (assignment, complaint) = app_state
        .db_client
        .assign_officer(complaint_id, body.officer_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    tracing::info!("complaint {} assigned to {}", complaint.id, officer.email);

    Ok(Json(AssignmentResponseDto {
        status: "success".to_string(),
        data: AssignmentData {
            assignment,
            complaint,
        },
    }))
}

pub async fn update_status(
    Path(complaint_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    Json(body): Json<UpdateComplaintStatusDto>,
) -> Result<impl IntoResponse, HttpError> {
    let complaint = app_state
        .db_client
        .get_complaint(complaint_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let complaint = complaint.ok_or(HttpError::not_found("Complaint not found"))?;

    if user.user.role == UserRole::Officer {
        let assignment = app_state
            .db_client
            .get_assignment(complaint_id)
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?;

        let owns_assignment = assignment
            .map(|a| a.officer_id == user.user.id)
            .unwrap_or(false);

        if !owns_assignment {
            return Err(HttpError::new(
                ErrorMessage::PermissionDenied.to_string(),
                StatusCode::FORBIDDEN,
            ));
        }
    }

    if !complaint.status.can_transition_to(body.status) {
        return Err(HttpError::bad_request(format!(
            "Cannot move a {} complaint to {}",
            complaint.status.to_str(),
            body.status.to_str()
        )));
    }

    let complaint = app_state
        .db_client
        .update_complaint_status(complaint_id, body.status)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    tracing::info!(
        "complaint {} moved to {}",
        complaint.id,
        complaint.status.to_str()
    );

    Ok(Json(ComplaintResponseDto {
        status: "success".to_string(),
        data: ComplaintData { complaint },
    }))
}
