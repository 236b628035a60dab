// handlers/protected/cit_citas.rs - GET /v2/cit_citas and its aggregations

use axum::extract::Extension;
use chrono::NaiveDate;
use serde::Deserialize;

use super::{paginate, CreadoParams, PageParams};
use crate::auth::CurrentUser;
use crate::database::models::{CantidadAgendada, CantidadCreada, CitCita};
use crate::database::{DatabaseManager, Entity, Page, Totals};
use crate::middleware::{ApiResponse, ApiResult, Query};
use crate::services::cit_citas::{cit_citas_filter, CitCitasParams};
use crate::services::{cantidades, today};
use crate::validation::{resolve_range, UpperBound};

#[derive(Debug, Default, Deserialize)]
pub struct InicioParams {
    pub inicio: Option<NaiveDate>,
    pub inicio_desde: Option<NaiveDate>,
    pub inicio_hasta: Option<NaiveDate>,
}

pub async fn list(
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageParams>,
    Query(params): Query<CitCitasParams>,
) -> ApiResult<Page<CitCita>> {
    user.can_view(CitCita::MODULE)?;
    let filter = cit_citas_filter(&DatabaseManager::pool()?, &params, today()).await?;
    paginate(&user, filter, page).await
}

/// GET /v2/cit_citas/calcular_cantidades_creados_por_dia
pub async fn cantidades_creados_por_dia(
    Extension(user): Extension<CurrentUser>,
    Query(params): Query<CreadoParams>,
) -> ApiResult<Totals<CantidadCreada>> {
    user.can_view(CitCita::MODULE)?;
    let range = resolve_range(
        "Creado",
        params.creado,
        params.creado_desde,
        params.creado_hasta,
        today(),
        UpperBound::Today,
    )?;
    let items = cantidades::creados_por_dia(&DatabaseManager::pool()?, CitCita::TABLE, range, true).await?;
    Ok(ApiResponse::success(Totals::new(items, |c| c.cantidad)))
}

/// GET /v2/cit_citas/calcular_cantidades_agendadas_por_oficina_servicio
pub async fn cantidades_agendadas_por_oficina_servicio(
    Extension(user): Extension<CurrentUser>,
    Query(params): Query<InicioParams>,
) -> ApiResult<Totals<CantidadAgendada>> {
    user.can_view(CitCita::MODULE)?;
    let range = resolve_range(
        "Inicio",
        params.inicio,
        params.inicio_desde,
        params.inicio_hasta,
        today(),
        UpperBound::Unbounded,
    )?;
    let items = cantidades::agendadas_por_oficina_servicio(&DatabaseManager::pool()?, range).await?;
    Ok(ApiResponse::success(Totals::new(items, |c| c.cantidad)))
}
