// handlers/protected/usuarios_roles.rs - GET /v2/usuarios_roles

use axum::extract::Extension;
use serde::Deserialize;

use super::{paginate, PageParams};
use crate::auth::CurrentUser;
use crate::database::models::UsuarioRol;
use crate::database::{Entity, Page};
use crate::middleware::{ApiResult, Query};

#[derive(Debug, Default, Deserialize)]
pub struct UsuariosRolesParams {
    pub rol_id: Option<i64>,
    pub usuario_id: Option<i64>,
}

pub async fn list(
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageParams>,
    Query(params): Query<UsuariosRolesParams>,
) -> ApiResult<Page<UsuarioRol>> {
    user.can_view(UsuarioRol::MODULE)?;
    let mut filter = UsuarioRol::filter()?;
    if let Some(id) = params.rol_id {
        filter.eq(&UsuarioRol::column("rol_id"), id)?;
    }
    if let Some(id) = params.usuario_id {
        filter.eq(&UsuarioRol::column("usuario_id"), id)?;
    }
    paginate(&user, filter, page).await
}
