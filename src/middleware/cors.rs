use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// The browser extension runs on arbitrary Canvas origins, so every origin
/// is allowed.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any)
}
