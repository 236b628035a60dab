// handlers/protected/mod.rs - Protected handlers (bearer token required)
//
// Every handler receives the active `CurrentUser` from the middleware stack
// and checks the module permission before touching the database.
pub mod autoridades;
pub mod cit_citas;
pub mod cit_clientes;
pub mod cit_clientes_registros;
pub mod cit_dias_disponibles;
pub mod cit_servicios;
pub mod modulos;
pub mod oficinas;
pub mod permisos;
pub mod profile;
pub mod usuarios;
pub mod usuarios_roles;

use axum::extract::Extension;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::config;
use crate::database::{DatabaseManager, Entity, Page, PageRequest, Repository};
use crate::error::ApiError;
use crate::filter::Filter;
use crate::middleware::{ApiResponse, ApiResult, Path, Query};

/// `limit` and `offset` of every listing
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct PageParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageParams {
    pub fn resolve(&self) -> Result<PageRequest, ApiError> {
        let pagination = &config::config().pagination;
        let limit = self.limit.unwrap_or(pagination.default_limit);
        let offset = self.offset.unwrap_or(0);
        if limit < 1 {
            return Err(ApiError::unprocessable_entity("limit", "ensure this value is greater than or equal to 1"));
        }
        if offset < 0 {
            return Err(ApiError::unprocessable_entity("offset", "ensure this value is greater than or equal to 0"));
        }
        Ok(PageRequest {
            limit: limit.min(pagination.max_limit),
            offset,
        })
    }
}

/// Single-day or range query of the creation aggregations
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CreadoParams {
    pub creado: Option<NaiveDate>,
    pub creado_desde: Option<NaiveDate>,
    pub creado_hasta: Option<NaiveDate>,
}

/// Page through `filter`; callers check the permission first
pub(crate) async fn paginate<T: Entity>(user: &CurrentUser, filter: Filter, page: PageParams) -> ApiResult<Page<T>> {
    let page = page.resolve()?;
    let pool = DatabaseManager::pool()?;
    let result = Repository::<T>::new(pool).paginate(filter, page).await?;
    tracing::debug!("'{}' listed {} of {} from {}", user.username, result.items.len(), result.total, T::TABLE);
    Ok(ApiResponse::success(result))
}

/// GET /v2/<resource> for resources without filters
pub async fn list<T: Entity>(
    Extension(user): Extension<CurrentUser>,
    Query(page): Query<PageParams>,
) -> ApiResult<Page<T>> {
    user.can_view(T::MODULE)?;
    paginate::<T>(&user, T::filter()?, page).await
}

/// GET /v2/<resource>/:id
pub async fn detail<T: Entity>(Extension(user): Extension<CurrentUser>, Path(id): Path<i64>) -> ApiResult<T> {
    user.can_view(T::MODULE)?;
    let pool = DatabaseManager::pool()?;
    let row = Repository::<T>::new(pool).get(id).await?;
    Ok(ApiResponse::success(row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn defaults_apply_when_absent() {
        let page = PageParams::default().resolve().unwrap();
        assert_eq!(page.limit, config::config().pagination.default_limit);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn limit_is_capped() {
        let page = PageParams { limit: Some(1_000_000), offset: Some(5) }.resolve().unwrap();
        assert_eq!(page.limit, config::config().pagination.max_limit);
        assert_eq!(page.offset, 5);
    }

    #[test]
    fn invalid_paging_is_unprocessable() {
        let zero = PageParams { limit: Some(0), offset: None }.resolve().unwrap_err();
        assert_eq!(zero.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let negative = PageParams { limit: None, offset: Some(-1) }.resolve().unwrap_err();
        assert_eq!(negative.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
