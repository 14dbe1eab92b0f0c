use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use super::json_body;
use crate::{
    domain::roast::{RoastRequest, RoastResponse, RoastService, RoastServiceApi},
    error::AppResult,
};

pub struct RoastController {
    service: Arc<RoastService>,
}

impl RoastController {
    pub fn new(service: Arc<RoastService>) -> Self {
        Self { service }
    }

    /// POST /api/roast - Generate a roast from a preference summary
    pub async fn generate(
        State(controller): State<Arc<RoastController>>,
        payload: Result<Json<RoastRequest>, JsonRejection>,
    ) -> AppResult<Json<RoastResponse>> {
        let request = json_body(payload)?;

        let response = controller.service.generate_roast(request).await?;

        Ok(Json(response))
    }
}
