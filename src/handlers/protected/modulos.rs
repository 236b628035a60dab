// handlers/protected/modulos.rs - GET /v2/modulos

use axum::extract::Extension;
use serde::Deserialize;

use super::{paginate, PageParams};
use crate::auth::CurrentUser;
use crate::database::models::Modulo;
use crate::database::{Entity, Page};
use crate::middleware::{ApiResult, Query};

#[derive(Debug, Default, Deserialize)]
pub struct ModulosParams {
    pub en_navegacion: Option<bool>,
}

pub async fn list(
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageParams>,
    Query(params): Query<ModulosParams>,
) -> ApiResult<Page<Modulo>> {
    user.can_view(Modulo::MODULE)?;
    let mut filter = Modulo::filter()?;
    if let Some(flag) = params.en_navegacion {
        filter.eq(&Modulo::column("en_navegacion"), flag)?;
    }
    paginate(&user, filter, page).await
}
