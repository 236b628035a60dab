use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Permiso {
    pub id: i32,
    pub rol_id: i32,
    pub rol_nombre: String,
    pub modulo_id: i32,
    pub modulo_nombre: String,
    pub nombre: String,
    pub nivel: i32,
}

impl Entity for Permiso {
    const TABLE: &'static str = "permisos";
    const SOURCE: &'static str = "permisos \
        JOIN roles ON roles.id = permisos.rol_id \
        JOIN modulos ON modulos.id = permisos.modulo_id";
    const COLUMNS: &'static str = "permisos.id, permisos.rol_id, roles.nombre AS rol_nombre, \
        permisos.modulo_id, modulos.nombre AS modulo_nombre, permisos.nombre, permisos.nivel";
    const ORDER: &'static str = "permisos.id";
    const LABEL: &'static str = "ese permiso";
    const MODULE: &'static str = "PERMISOS";
}
