use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// HTTP health service builder.
#[derive(Debug, Clone)]
pub struct HealthApi {
    state: Arc<HealthState>,
}

#[derive(Debug)]
struct HealthState {
    message: String,
}

impl HealthApi {
    /// Create a health API answering with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            state: Arc::new(HealthState {
                message: message.into(),
            }),
        }
    }

    /// Build axum router with mounted endpoints.
    ///
    /// Routes:
    /// - GET /health - Health status
    /// - GET / - Health status
    /// - OPTIONS * - CORS preflight
    /// - anything else - 404
    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(health))
            .route("/health", get(health))
            .fallback(not_found)
            .with_state(self.state)
            .layer(middleware::from_fn(cors))
    }
}

// ============================================================================
// Response types
// ============================================================================

/// Body of a healthy response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Configured message.
    pub message: String,
}

/// Body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Reason phrase.
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health, GET /
async fn health(State(state): State<Arc<HealthState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: state.message.clone(),
    })
}

/// Any unrouted path.
async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not Found".to_string(),
        }),
    )
}

/// Answers preflights and marks every response as readable from any origin.
async fn cors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = if method == Method::OPTIONS {
        (
            StatusCode::NO_CONTENT,
            [
                (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"),
                (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            ],
        )
            .into_response()
    } else {
        next.run(request).await
    };

    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    debug!(%method, path = %path, status = response.status().as_u16(), "health request");
    response
}
