// handlers/protected/usuarios.rs - GET /v2/usuarios

use axum::extract::Extension;

use super::{paginate, PageParams};
use crate::auth::CurrentUser;
use crate::database::models::Usuario;
use crate::database::{DatabaseManager, Entity, Page};
use crate::middleware::{ApiResult, Query};
use crate::services::usuarios::{usuarios_filter, UsuariosParams};

pub async fn list(
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageParams>,
    Query(params): Query<UsuariosParams>,
) -> ApiResult<Page<Usuario>> {
    user.can_view(Usuario::MODULE)?;
    let filter = usuarios_filter(&DatabaseManager::pool()?, &params).await?;
    paginate(&user, filter, page).await
}
