//! Data resource routes.

use super::with_trailing_slash;
use crate::handlers::data::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn data_routes(state: AppState) -> Router {
    let router = with_trailing_slash(Router::new(), "/api/data", get(list).post(create));
    with_trailing_slash(router, "/api/data/:id", get(read).put(update).delete(delete_handler)).with_state(state)
}
