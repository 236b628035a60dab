// handlers/protected/cit_servicios.rs - GET /v2/cit_servicios

use axum::extract::Extension;
use serde::Deserialize;

use super::{paginate, PageParams};
use crate::auth::CurrentUser;
use crate::database::models::{CitCategoria, CitServicio};
use crate::database::{DatabaseManager, Entity, Page, Repository};
use crate::middleware::{ApiResult, Query};

#[derive(Debug, Default, Deserialize)]
pub struct CitServiciosParams {
    pub cit_categoria_id: Option<i64>,
}

pub async fn list(
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageParams>,
    Query(params): Query<CitServiciosParams>,
) -> ApiResult<Page<CitServicio>> {
    user.can_view(CitServicio::MODULE)?;
    let mut filter = CitServicio::filter()?;
    if let Some(id) = params.cit_categoria_id {
        Repository::<CitCategoria>::new(DatabaseManager::pool()?).get(id).await?;
        filter.eq(&CitServicio::column("cit_categoria_id"), id)?;
    }
    paginate(&user, filter, page).await
}
