use super::{handlers, state::AppState};
use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Paths served by [`build_router`], listed at startup.
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("/api/loyverse/data", "comprehensive data"),
    ("/api/loyverse/items", "items passthrough"),
    ("/api/loyverse/modifiers", "modifiers only"),
    ("/api/loyverse/modifier-groups", "modifier groups"),
    ("/api/loyverse/variants", "items with variants"),
    ("/api/loyverse/{endpoint}", "generic proxy"),
];

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/loyverse/data", get(handlers::data))
        .route("/api/loyverse-data", get(handlers::data))
        .route("/api/loyverse/items", get(handlers::items))
        .route("/api/items", get(handlers::items))
        .route("/api/loyverse/modifiers", get(handlers::modifiers))
        .route("/api/loyverse-modifiers", get(handlers::modifiers))
        .route("/api/loyverse/modifier-groups", get(handlers::modifier_groups))
        .route("/api/loyverse-modifier-groups", get(handlers::modifier_groups))
        .route("/api/loyverse/variants", get(handlers::variants))
        .route("/api/loyverse-variants", get(handlers::variants))
        .route("/api/loyverse/{*endpoint}", get(handlers::passthrough))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .with_state(state)
        .layer(middleware::from_fn(answer_options))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Any OPTIONS request is answered with an empty 200, preflight or not.
async fn answer_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    next.run(request).await
}
