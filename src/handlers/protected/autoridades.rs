// handlers/protected/autoridades.rs - GET /v2/autoridades

use axum::extract::Extension;
use serde::Deserialize;

use super::{paginate, PageParams};
use crate::auth::CurrentUser;
use crate::database::models::Autoridad;
use crate::database::{Entity, Page};
use crate::middleware::{ApiResult, Query};

#[derive(Debug, Default, Deserialize)]
pub struct AutoridadesParams {
    pub distrito_id: Option<i64>,
    pub es_jurisdiccional: Option<bool>,
    pub es_notaria: Option<bool>,
}

pub async fn list(
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageParams>,
    Query(params): Query<AutoridadesParams>,
) -> ApiResult<Page<Autoridad>> {
    user.can_view(Autoridad::MODULE)?;
    let mut filter = Autoridad::filter()?;
    if let Some(id) = params.distrito_id {
        filter.eq(&Autoridad::column("distrito_id"), id)?;
    }
    if let Some(flag) = params.es_jurisdiccional {
        filter.eq(&Autoridad::column("es_jurisdiccional"), flag)?;
    }
    if let Some(flag) = params.es_notaria {
        filter.eq(&Autoridad::column("es_notaria"), flag)?;
    }
    paginate(&user, filter, page).await
}
