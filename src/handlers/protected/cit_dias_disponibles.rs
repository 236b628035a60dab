// handlers/protected/cit_dias_disponibles.rs - GET /v2/cit_dias_disponibles[/proximo]

use axum::extract::Extension;
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::config;
use crate::database::models::CitDiaInhabil;
use crate::database::{DatabaseManager, Entity, Totals};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Query};
use crate::services::cit_dias_disponibles::{cit_dias_disponibles, CitDiaDisponible, HORIZON_DAYS};
use crate::services::today;

#[derive(Debug, Default, Deserialize)]
pub struct DiasParams {
    pub limit: Option<i64>,
}

pub async fn list(
    Extension(user): Extension<CurrentUser>,
    Query(params): Query<DiasParams>,
) -> ApiResult<Totals<CitDiaDisponible>> {
    user.can_view(CitDiaInhabil::MODULE)?;
    let limit = params.limit.unwrap_or(config::config().pagination.default_limit);
    if limit < 1 {
        return Err(ApiError::unprocessable_entity("limit", "ensure this value is greater than or equal to 1"));
    }
    let limit = limit.min(HORIZON_DAYS) as usize;
    let items = cit_dias_disponibles(&DatabaseManager::pool()?, today(), limit).await?;
    Ok(ApiResponse::success(Totals::new(items, |_| 1)))
}

/// The next available day
pub async fn proximo(Extension(user): Extension<CurrentUser>) -> ApiResult<CitDiaDisponible> {
    user.can_view(CitDiaInhabil::MODULE)?;
    let next = cit_dias_disponibles(&DatabaseManager::pool()?, today(), 1)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::not_found("No hay días disponibles"))?;
    Ok(ApiResponse::success(next))
}
