use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    middleware,
    response::IntoResponse,
    routing::{get, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::zonedb::ZoneExt,
    dtos::userdtos::Response,
    dtos::zonedtos::{
        CreateZoneDto, UpdateZoneDto, ZoneData, ZoneListResponseDto, ZoneQueryDto,
        ZoneResponseDto,
    },
    error::HttpError,
    middleware::role_check,
    models::usermodel::UserRole,
    AppState,
};

pub fn zones_handler() -> Router {
    Router::new()
        .route(
            "/",
            get(get_zones)
                .post(create_zone)
                .layer(middleware::from_fn(|state, req, next| {
                    role_check(state, req, next, vec![UserRole::Admin])
                })),
        )
        .route(
            "/:zone_id",
            put(update_zone)
                .delete(delete_zone)
                .layer(middleware::from_fn(|state, req, next| {
                    role_check(state, req, next, vec![UserRole::Admin])
                })),
        )
}

pub async fn get_zones(
    Query(query_params): Query<ZoneQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1) as u32;
    let search = query_params.search.as_deref();

    let zones = app_state
        .db_client
        .get_zones(search, page, 5)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let count = app_state
        .db_client
        .get_zone_count(search)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ZoneListResponseDto {
        status: "success".to_string(),
        zones,
        results: count,
    }))
}

pub async fn create_zone(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateZoneDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let existing = app_state
        .db_client
        .get_zone_by_name(&body.name)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if existing.is_some() {
        return Err(HttpError::conflict("A zone with this name already exists"));
    }

    let zone = app_state
        .db_client
        .save_zone(body.name, body.description)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    tracing::info!("zone {} created", zone.name);

    Ok(Json(ZoneResponseDto {
        status: "success".to_string(),
        data: ZoneData { zone },
    }))
}

pub async fn update_zone(
    Path(zone_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<UpdateZoneDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let existing = app_state
        .db_client
        .get_zone(zone_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if existing.is_none() {
        return Err(HttpError::not_found("Zone not found"));
    }

    let name_clash = app_state
        .db_client
        .get_zone_by_name(&body.name)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if let Some(other) = name_clash {
        if other.id != zone_id {
            return Err(HttpError::conflict("A zone with this name already exists"));
        }
    }

    let zone = app_state
        .db_client
        .update_zone(zone_id, body.name, body.description)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ZoneResponseDto {
        status: "success".to_string(),
        data: ZoneData { zone },
    }))
}

pub async fn delete_zone(
    Path(zone_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let deleted = app_state
        .db_client
        .delete_zone(zone_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if deleted == 0 {
        return Err(HttpError::not_found("Zone not found"));
    }

    Ok(Json(Response {
        status: "success",
        message: "Zone deleted successfully".to_string(),
    }))
}
