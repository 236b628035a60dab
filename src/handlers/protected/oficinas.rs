// handlers/protected/oficinas.rs - GET /v2/oficinas

use axum::extract::Extension;
use serde::Deserialize;

use super::{paginate, PageParams};
use crate::auth::CurrentUser;
use crate::database::models::Oficina;
use crate::database::{Entity, Page};
use crate::middleware::{ApiResult, Query};

#[derive(Debug, Default, Deserialize)]
pub struct OficinasParams {
    pub distrito_id: Option<i64>,
    pub es_jurisdiccional: Option<bool>,
    pub puede_agendar_citas: Option<bool>,
}

pub async fn list(
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageParams>,
    Query(params): Query<OficinasParams>,
) -> ApiResult<Page<Oficina>> {
    user.can_view(Oficina::MODULE)?;
    let mut filter = Oficina::filter()?;
    if let Some(id) = params.distrito_id {
        filter.eq(&Oficina::column("distrito_id"), id)?;
    }
    if let Some(flag) = params.es_jurisdiccional {
        filter.eq(&Oficina::column("es_jurisdiccional"), flag)?;
    }
    if let Some(flag) = params.puede_agendar_citas {
        filter.eq(&Oficina::column("puede_agendar_citas"), flag)?;
    }
    paginate(&user, filter, page).await
}
