use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{feedbackdb::FeedbackExt, zonedb::ZoneExt},
    dtos::feedbackdtos::{
        ContactListResponseDto, ContactMessageDto, ContactQueryDto, HomeResponseDto,
        SubmitTestimonialDto, TestimonialData, TestimonialListResponseDto, TestimonialQueryDto,
        TestimonialResponseDto,
    },
    dtos::userdtos::Response,
    error::HttpError,
    middleware::{role_check, JWTAuthMiddeware},
    models::usermodel::UserRole,
    AppState,
};

pub fn feedback_handler() -> Router {
    Router::new()
        .route("/testimonials", post(submit_testimonial))
        .route(
            "/testimonials/all",
            get(get_testimonials).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Admin])
            })),
        )
        .route(
            "/testimonials/:testimonial_id/approval",
            put(toggle_testimonial_approval).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Admin])
            })),
        )
        .route(
            "/testimonials/:testimonial_id",
            delete(delete_testimonial).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Admin])
            })),
        )
        .route(
            "/contacts",
            get(get_contacts).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Admin])
            })),
        )
        .route(
            "/contacts/:contact_id",
            delete(delete_contact).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Admin])
            })),
        )
}

/// Public landing payload: approved testimonials plus the zone list,
/// no authentication required.
pub async fn home(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let testimonials = app_state
        .db_client
        .get_approved_testimonials(6)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let zones = app_state
        .db_client
        .get_all_zones()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(HomeResponseDto {
        status: "success".to_string(),
        testimonials,
        zones,
    }))
}

pub async fn submit_contact(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<ContactMessageDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    app_state
        .db_client
        .save_contact(body.name, body.email, body.message)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(Response {
        status: "success",
        message: "Thank you for contacting us. We'll get back to you soon!".to_string(),
    }))
}

pub async fn submit_testimonial(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    Json(body): Json<SubmitTestimonialDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let testimonial = app_state
        .db_client
        .save_testimonial(user.user.id, body.content, body.rating)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(TestimonialResponseDto {
        status: "success".to_string(),
        data: TestimonialData { testimonial },
    }))
}

pub async fn get_testimonials(
    Query(query_params): Query<TestimonialQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1) as u32;
    let search = query_params.search.as_deref();

    let testimonials = app_state
        .db_client
        .get_testimonials(search, page, 10)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let count = app_state
        .db_client
        .get_testimonial_count(search)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(TestimonialListResponseDto {
        status: "success".to_string(),
        testimonials,
        results: count,
    }))
}

pub async fn toggle_testimonial_approval(
    Path(testimonial_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let existing = app_state
        .db_client
        .get_testimonial(testimonial_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if existing.is_none() {
        return Err(HttpError::not_found("Testimonial not found"));
    }

    let testimonial = app_state
        .db_client
        .toggle_testimonial_approval(testimonial_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(TestimonialResponseDto {
        status: "success".to_string(),
        data: TestimonialData { testimonial },
    }))
}

pub async fn delete_testimonial(
    Path(testimonial_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let deleted = app_state
        .db_client
        .delete_testimonial(testimonial_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if deleted == 0 {
        return Err(HttpError::not_found("Testimonial not found"));
    }

    Ok(Json(Response {
        status: "success",
        message: "Testimonial deleted successfully".to_string(),
    }))
}

pub async fn get_contacts(
    Query(query_params): Query<ContactQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1) as u32;
    let search = query_params.search.as_deref();

    let contacts = app_state
        .db_client
        .get_contacts(search, page, 10)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let count = app_state
        .db_client
        .get_contact_count(search)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ContactListResponseDto {
        status: "success".to_string(),
        contacts,
        results: count,
    }))
}

pub async fn delete_contact(
    Path(contact_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let deleted = app_state
        .db_client
        .delete_contact(contact_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if deleted == 0 {
        return Err(HttpError::not_found("Contact not found"));
    }

    Ok(Json(Response {
        status: "success",
        message: "Contact deleted successfully".to_string(),
    }))
}
