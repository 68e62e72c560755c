//! API routes for employee-api

pub mod employee;
pub mod health;


use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Create the application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/add_employee", post(employee::add_employee))
        .route("/update_employee/{empid}", put(employee::update_employee))
        .route("/delete_employee/{empid}", delete(employee::delete_employee))
        .route("/get_employee", get(employee::get_employee))
        .route(
            "/get_employees_with_department",
            get(employee::list_employees_with_department),
        )
        .route("/health", get(health::health_check))
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB
        // CORS - any origin
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response (inner, sees the ID set below)
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - Generate unique ID for each request unless the client sent one
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
