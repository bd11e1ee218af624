//! General-purpose middleware for the API.
//!
//! Layers applied to the whole router regardless of route: request tracing
//! and conversion of handler panics into 500 responses.

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub fn with_common_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
