// handlers/protected/cit_clientes_registros.rs - GET /v2/cit_clientes_registros

use axum::extract::Extension;
use serde::Deserialize;

use super::{paginate, CreadoParams, PageParams};
use crate::auth::CurrentUser;
use crate::database::models::{CantidadCreada, CitClienteRegistro};
use crate::database::{DatabaseManager, Entity, Page, Totals};
use crate::middleware::{ApiResponse, ApiResult, Query};
use crate::services::{cantidades, today};
use crate::validation::{resolve_range, UpperBound};

#[derive(Debug, Default, Deserialize)]
pub struct CitClientesRegistrosParams {
    pub ya_registrado: Option<bool>,
}

pub async fn list(
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageParams>,
    Query(params): Query<CitClientesRegistrosParams>,
) -> ApiResult<Page<CitClienteRegistro>> {
    user.can_view(CitClienteRegistro::MODULE)?;
    let mut filter = CitClienteRegistro::filter()?;
    if let Some(flag) = params.ya_registrado {
        filter.eq(&CitClienteRegistro::column("ya_registrado"), flag)?;
    }
    paginate(&user, filter, page).await
}

/// GET /v2/cit_clientes_registros/calcular_cantidades_creados_por_dia
pub async fn cantidades_creados_por_dia(
    Extension(user): Extension<CurrentUser>,
    Query(params): Query<CreadoParams>,
) -> ApiResult<Totals<CantidadCreada>> {
    user.can_view(CitClienteRegistro::MODULE)?;
    let range = resolve_range(
        "Creado",
        params.creado,
        params.creado_desde,
        params.creado_hasta,
        today(),
        UpperBound::Today,
    )?;
    let items = cantidades::creados_por_dia(&DatabaseManager::pool()?, CitClienteRegistro::TABLE, range, false).await?;
    Ok(ApiResponse::success(Totals::new(items, |c| c.cantidad)))
}
