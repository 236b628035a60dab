// handlers/protected/permisos.rs - GET /v2/permisos

use axum::extract::Extension;
use serde::Deserialize;

use super::{paginate, PageParams};
use crate::auth::CurrentUser;
use crate::database::models::Permiso;
use crate::database::{Entity, Page};
use crate::middleware::{ApiResult, Query};

#[derive(Debug, Default, Deserialize)]
pub struct PermisosParams {
    pub rol_id: Option<i64>,
    pub modulo_id: Option<i64>,
}

pub async fn list(
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageParams>,
    Query(params): Query<PermisosParams>,
) -> ApiResult<Page<Permiso>> {
    user.can_view(Permiso::MODULE)?;
    let mut filter = Permiso::filter()?;
    if let Some(id) = params.rol_id {
        filter.eq(&Permiso::column("rol_id"), id)?;
    }
    if let Some(id) = params.modulo_id {
        filter.eq(&Permiso::column("modulo_id"), id)?;
    }
    paginate(&user, filter, page).await
}
