use std::sync::Arc;

use axum::{middleware, routing::{get, post}, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        analytics::analytics_handler,
        auth::auth_handler,
        complaints::complaints_handler,
        feedback::{feedback_handler, home, submit_contact},
        users::users_handler,
        zones::zones_handler,
    },
    middleware::auth,
    AppState,
};

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .route("/home", get(home))
        .route("/contact", post(submit_contact))
        .nest("/auth", auth_handler())
        .nest(
            "/users",
            users_handler().layer(middleware::from_fn(auth)),
        )
        .nest(
            "/zones",
            zones_handler().layer(middleware::from_fn(auth)),
        )
        .nest(
            "/complaints",
            complaints_handler().layer(middleware::from_fn(auth)),
        )
        .nest(
            "/feedback",
            feedback_handler().layer(middleware::from_fn(auth)),
        )
        .nest(
            "/analytics",
            analytics_handler().layer(middleware::from_fn(auth)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_check_reports_ok() {
        let Json(body) = health_check().await;
        assert_eq!(body["status"], "ok");
    }
}
