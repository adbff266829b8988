use std::time::Duration;

use axum::{
    Json,
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::crate_version;
use serde::{Deserialize, Serialize};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    core::{self, error::PlanError, plan::Plan, request::AllocationRequest},
    prelude::*,
};

pub fn router(request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(get_root))
        .route("/productionplan", post(post_production_plan))
        .layer((TraceLayer::new_for_http(), TimeoutLayer::new(request_timeout)))
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Message {
    pub message: String,
}

async fn get_root() -> Json<Message> {
    Json(Message { message: format!("powerplan {} is up", crate_version!()) })
}

#[instrument(skip_all, fields(load = %request.load, n_plants = request.powerplants.len()))]
async fn post_production_plan(
    Json(request): Json<AllocationRequest>,
) -> Result<Json<Plan>, PlanError> {
    core::plan(&request).map(Json)
}

impl PlanError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Configuration { .. } => StatusCode::BAD_REQUEST,
            Self::Infeasible { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Invariant { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PlanError {
    fn into_response(self) -> Response {
        if self.is_input_error() {
            warn!("rejecting the request: {self:#}");
        } else {
            error!("failed to compute the production plan: {self:#}");
        }
        (self.status_code(), Json(Message { message: self.to_string() })).into_response()
    }
}
