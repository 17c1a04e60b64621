use std::sync::Arc;

use axum::{
    middleware, response::IntoResponse, routing::get, Extension, Json, Router,
};

use crate::{
    db::analyticsdb::AnalyticsExt,
    dtos::analyticsdtos::{ComplaintAnalyticsResponseDto, DashboardAnalyticsResponseDto},
    error::HttpError,
    middleware::role_check,
    models::usermodel::UserRole,
    AppState,
};

pub fn analytics_handler() -> Router {
    Router::new()
        .route(
            "/complaints",
            get(get_complaint_analytics).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Admin])
            })),
        )
        .route(
            "/dashboard",
            get(get_dashboard_analytics).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Admin, UserRole::Officer])
            })),
        )
}

pub async fn get_complaint_analytics(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let status_counts = app_state
        .db_client
        .complaint_status_counts()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let zone_counts = app_state
        .db_client
        .complaint_zone_counts()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let monthly = app_state
        .db_client
        .monthly_complaint_counts()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ComplaintAnalyticsResponseDto {
        status: "success".to_string(),
        complaint_status_counts: status_counts,
        complaint_zone_counts: zone_counts,
        monthly_complaints: monthly,
    }))
}

pub async fn get_dashboard_analytics(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let total_complaints = app_state
        .db_client
        .total_complaints()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let complaints_by_status = app_state
        .db_client
        .complaint_status_counts()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let complaints_assigned = app_state
        .db_client
        .total_assignments()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let avg_rating = app_state
        .db_client
        .average_testimonial_rating()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let complaints_by_zone = app_state
        .db_client
        .complaint_zone_counts()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let complaints_by_month = app_state
        .db_client
        .current_month_complaints()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(DashboardAnalyticsResponseDto {
        status: "success".to_string(),
        total_complaints,
        complaints_by_status,
        complaints_assigned,
        avg_rating,
        complaints_by_zone,
        complaints_by_month,
    }))
}
