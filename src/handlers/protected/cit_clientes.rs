// handlers/protected/cit_clientes.rs - GET /v2/cit_clientes and its daily counts

use axum::extract::Extension;

use super::{paginate, CreadoParams, PageParams};
use crate::auth::CurrentUser;
use crate::database::models::{CantidadCreada, CitCliente};
use crate::database::{DatabaseManager, Entity, Page, Totals};
use crate::middleware::{ApiResponse, ApiResult, Query};
use crate::services::cit_clientes::{cit_clientes_filter, CitClientesParams};
use crate::services::{cantidades, today};
use crate::validation::{resolve_range, UpperBound};

pub async fn list(
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageParams>,
    Query(params): Query<CitClientesParams>,
) -> ApiResult<Page<CitCliente>> {
    user.can_view(CitCliente::MODULE)?;
    let filter = cit_clientes_filter(&params, today())?;
    paginate(&user, filter, page).await
}

/// GET /v2/cit_clientes/calcular_cantidades_creados_por_dia
pub async fn cantidades_creados_por_dia(
    Extension(user): Extension<CurrentUser>,
    Query(params): Query<CreadoParams>,
) -> ApiResult<Totals<CantidadCreada>> {
    user.can_view(CitCliente::MODULE)?;
    let range = resolve_range(
        "Creado",
        params.creado,
        params.creado_desde,
        params.creado_hasta,
        today(),
        UpperBound::Today,
    )?;
    let items = cantidades::creados_por_dia(&DatabaseManager::pool()?, CitCliente::TABLE, range, false).await?;
    Ok(ApiResponse::success(Totals::new(items, |c| c.cantidad)))
}
