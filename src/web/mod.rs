pub mod routes;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{delete, get, get_service, post},
    Json, Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use serde_json::json;
use tokio::sync::RwLock;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::services::registration_service::RegistrationError;
use crate::store::Catalog;

/// Shared handle to the catalog, injected as router state. One lock over the
/// whole catalog keeps the check-then-mutate sequences serialized.
pub type SharedCatalog = Arc<RwLock<Catalog>>;

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        let status = match self {
            RegistrationError::ActivityNotFound => StatusCode::NOT_FOUND,
            RegistrationError::DuplicateSignup | RegistrationError::NotRegistered => {
                StatusCode::BAD_REQUEST
            }
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Builds the whole application. Tests call this with a fresh catalog so
/// every case runs against isolated state.
pub fn router(catalog: SharedCatalog) -> Router {
    Router::new()
        // The frontend lives under /static; the root just points there.
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/activities", get(routes::activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(routes::activities::unregister_handler),
        )
        // Static files
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        // Layers
        .layer(CatchPanicLayer::new())
        // State
        .with_state(catalog)
}
