use serde::Deserialize;
use sqlx::PgPool;

use crate::auth::{verify_password, CurrentUser, Permissions};
use crate::database::models::{Autoridad, Oficina, Usuario, UsuarioInDb};
use crate::database::query_builder::fetch_all_as;
use crate::database::{DatabaseError, Entity, Repository};
use crate::filter::{Filter, SqlResult};
use crate::validation::safe_clave;

const PERMISSIONS_SQL: &str = "\
    SELECT modulos.nombre AS modulo, MAX(permisos.nivel) AS nivel \
    FROM usuarios_roles \
    JOIN roles ON roles.id = usuarios_roles.rol_id \
    JOIN permisos ON permisos.rol_id = roles.id \
    JOIN modulos ON modulos.id = permisos.modulo_id \
    WHERE usuarios_roles.usuario_id = $1 \
    AND usuarios_roles.estatus = 'A' AND roles.estatus = 'A' \
    AND permisos.estatus = 'A' AND modulos.estatus = 'A' \
    GROUP BY modulos.nombre";

#[derive(Debug, sqlx::FromRow)]
struct Grant {
    modulo: String,
    nivel: i32,
}

/// Look up a user by email regardless of its status
pub async fn find_user(pool: &PgPool, email: &str) -> Result<Option<CurrentUser>, DatabaseError> {
    let mut filter = Filter::new(Usuario::TABLE)?
        .source(Usuario::SOURCE)
        .columns(&format!("{}, {}", Usuario::COLUMNS, UsuarioInDb::COLUMNS));
    filter.include_inactive();
    filter.eq(&Usuario::column("email"), email)?;
    filter.limit(1, None)?;
    let sql = filter.to_sql()?;

    let Some(record) = fetch_all_as::<UsuarioInDb>(pool, &sql).await?.into_iter().next() else {
        return Ok(None);
    };
    let permissions = load_permissions(pool, record.usuario.id).await?;
    Ok(Some(CurrentUser::new(record, permissions)))
}

async fn load_permissions(pool: &PgPool, usuario_id: i32) -> Result<Permissions, DatabaseError> {
    let sql = SqlResult {
        query: PERMISSIONS_SQL.to_string(),
        params: vec![usuario_id.into()],
    };
    let grants = fetch_all_as::<Grant>(pool, &sql).await?;
    Ok(Permissions::from_grants(grants.into_iter().map(|g| (g.modulo, g.nivel))))
}

/// The user behind `username` when `password` matches its stored hash
pub async fn authenticate_user(pool: &PgPool, username: &str, password: &str) -> Result<Option<CurrentUser>, DatabaseError> {
    let Some(user) = find_user(pool, username).await? else {
        return Ok(None);
    };
    if !verify_password(password, user.password_hash()) {
        return Ok(None);
    }
    Ok(Some(user))
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct UsuariosParams {
    pub autoridad_id: Option<i64>,
    pub oficina_id: Option<i64>,
    pub oficina_clave: Option<String>,
}

pub async fn usuarios_filter(pool: &PgPool, params: &UsuariosParams) -> Result<Filter, DatabaseError> {
    let mut filter = Usuario::filter()?;
    if let Some(id) = params.autoridad_id {
        Repository::<Autoridad>::new(pool.clone()).get(id).await?;
        filter.eq(&Usuario::column("autoridad_id"), id)?;
    }
    if let Some(id) = params.oficina_id {
        Repository::<Oficina>::new(pool.clone()).get(id).await?;
        filter.eq(&Usuario::column("oficina_id"), id)?;
    } else if let Some(clave) = &params.oficina_clave {
        let clave = safe_clave(clave)?;
        filter.in_select(&Usuario::column("oficina_id"), "oficinas", "id", "clave", clave)?;
    }
    Ok(filter)
}
