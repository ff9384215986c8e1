pub mod submit;

use axum::routing::post;
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new().route(
        "/api/submit",
        post(submit::submit).fallback(submit::method_not_allowed),
    )
}
