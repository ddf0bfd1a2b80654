use std::sync::Arc;

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE, ORIGIN},
        Method,
    },
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handler::*, AppState};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Preflight OPTIONS requests are answered here and never reach a handler
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE, ORIGIN]);

    Router::new()
        .route("/todos", get(get_todos).post(create_todo))
        .route("/todos/:id", delete(delete_todo))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
