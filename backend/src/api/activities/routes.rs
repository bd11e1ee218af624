//! Defines the HTTP routes for listing activities and changing their rosters.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{list_activities, signup_for_activity, unregister_from_activity};
use crate::state::AppState;

pub fn activities_router() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(signup_for_activity),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_from_activity),
        )
}
