use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::services::registration_service;
use crate::web::SharedCatalog;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

/// GET /activities — the whole catalog as a JSON object keyed by name.
pub async fn list_activities_handler(State(catalog): State<SharedCatalog>) -> Json<Value> {
    let mut body = serde_json::Map::new();
    for (name, activity) in registration_service::list(&catalog).await {
        body.insert(name, serde_json::to_value(activity).unwrap_or(Value::Null));
    }
    Json(Value::Object(body))
}

/// POST /activities/:activity_name/signup?email=…
pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(catalog): State<SharedCatalog>,
) -> impl IntoResponse {
    match registration_service::signup(&catalog, &activity_name, &query.email).await {
        Ok(confirmation) => Json(json!({
            "message": format!(
                "Signed up {} for {}",
                confirmation.email, confirmation.activity
            ),
        }))
        .into_response(),
        Err(e) => {
            warn!("Signup rejected for {}: {}", activity_name, e);
            e.into_response()
        }
    }
}

/// DELETE /activities/:activity_name/unregister?email=…
pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(catalog): State<SharedCatalog>,
) -> impl IntoResponse {
    match registration_service::unregister(&catalog, &activity_name, &query.email).await {
        Ok(confirmation) => Json(json!({
            "message": format!(
                "Unregistered {} from {}",
                confirmation.email, confirmation.activity
            ),
        }))
        .into_response(),
        Err(e) => {
            warn!("Unregister rejected for {}: {}", activity_name, e);
            e.into_response()
        }
    }
}
