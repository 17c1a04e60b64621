use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    middleware,
    response::IntoResponse,
    routing::{delete, get, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{analyticsdb::AnalyticsExt, userdb::UserExt},
    dtos::analyticsdtos::UserDashboardResponseDto,
    dtos::userdtos::{
        FilterUserDto, ProfileUpdateDto, Response, UserData, UserListResponseDto,
        UserPasswordUpdateDto, UserQueryDto, UserResponseDto,
    },
    error::{ErrorMessage, HttpError},
    middleware::{role_check, JWTAuthMiddeware},
    models::usermodel::UserRole,
    utils::password,
    AppState,
};

pub fn users_handler() -> Router {
    Router::new()
        .route(
            "/me",
            get(get_me).layer(middleware::from_fn(|state, req, next| {
                role_check(
                    state,
                    req,
                    next,
                    vec![UserRole::Admin, UserRole::Officer, UserRole::Citizen],
                )
            })),
        )
        .route("/dashboard", get(get_dashboard))
        .route("/profile", put(update_profile))
        .route("/password", put(update_password))
        .route(
            "/citizens",
            get(get_citizens).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Admin])
            })),
        )
        .route(
            "/citizens/:user_id",
            delete(delete_citizen).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Admin])
            })),
        )
        .route(
            "/officers",
            get(get_officers).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Admin])
            })),
        )
        .route(
            "/officers/:user_id",
            delete(delete_officer).layer(middleware::from_fn(|state, req, next| {
                role_check(state, req, next, vec![UserRole::Admin])
            })),
        )
}

pub async fn get_me(
    Extension(_app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let filtered_user = FilterUserDto::filter_user(&user.user);

    let response_data = UserResponseDto {
        status: "success".to_string(),
        data: UserData {
            user: filtered_user,
        },
    };

    Ok(Json(response_data))
}

pub async fn get_dashboard(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
) -> Result<impl IntoResponse, HttpError> {
    let counts = match user.user.role {
        UserRole::Citizen => app_state
            .db_client
            .citizen_status_counts(user.user.id)
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?,
        UserRole::Officer => app_state
            .db_client
            .officer_status_counts(user.user.id)
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?,
        UserRole::Admin => app_state
            .db_client
            .complaint_status_counts()
            .await
            .map_err(|e| HttpError::server_error(e.to_string()))?,
    };

    Ok(Json(UserDashboardResponseDto {
        status: "success".to_string(),
        role: user.user.role.to_str().to_string(),
        complaint_status_counts: counts,
    }))
}

pub async fn update_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    Json(body): Json<ProfileUpdateDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let updated_user = app_state
        .db_client
        .update_user_profile(user.user.id, body.name, body.phone)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let filtered_user = FilterUserDto::filter_user(&updated_user);

    Ok(Json(UserResponseDto {
        status: "success".to_string(),
        data: UserData {
            user: filtered_user,
        },
    }))
}

pub async fn update_password(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user): Extension<JWTAuthMiddeware>,
    Json(body): Json<UserPasswordUpdateDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let result = app_state
        .db_client
        .get_user(Some(user.user.id), None, None)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let current_user = result.ok_or(HttpError::unauthorized(
        ErrorMessage::UserNoLongerExist.to_string(),
    ))?;

    let password_matched = password::compare(&body.old_password, &current_user.password)
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if !password_matched {
        return Err(HttpError::bad_request("Old password is incorrect"));
    }

    let hashed_password =
        password::hash(&body.new_password).map_err(|e| HttpError::server_error(e.to_string()))?;

    app_state
        .db_client
        .update_user_password(user.user.id, hashed_password)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(Response {
        status: "success",
        message: "Password changed successfully".to_string(),
    }))
}

pub async fn get_citizens(
    Query(query_params): Query<UserQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    list_users_by_role(app_state, query_params, UserRole::Citizen).await
}

pub async fn get_officers(
    Query(query_params): Query<UserQueryDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    list_users_by_role(app_state, query_params, UserRole::Officer).await
}

async fn list_users_by_role(
    app_state: Arc<AppState>,
    query_params: UserQueryDto,
    role: UserRole,
) -> Result<impl IntoResponse, HttpError> {
    query_params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let page = query_params.page.unwrap_or(1) as u32;
    let search = query_params.search.as_deref();

    let users = app_state
        .db_client
        .get_users_by_role(role, search, page, 10)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    let count = app_state
        .db_client
        .get_user_count_by_role(role, search)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(UserListResponseDto {
        status: "success".to_string(),
        users: FilterUserDto::filter_users(&users),
        results: count,
    }))
}

pub async fn delete_citizen(
    Path(user_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let deleted = app_state
        .db_client
        .delete_user_with_role(user_id, UserRole::Citizen)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if deleted == 0 {
        return Err(HttpError::not_found("Citizen not found"));
    }

    Ok(Json(Response {
        status: "success",
        message: "Citizen deleted successfully".to_string(),
    }))
}

pub async fn delete_officer(
    Path(user_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let deleted = app_state
        .db_client
        .delete_user_with_role(user_id, UserRole::Officer)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if deleted == 0 {
        return Err(HttpError::not_found("Officer not found"));
    }

    Ok(Json(Response {
        status: "success",
        message: "Officer deleted successfully".to_string(),
    }))
}
