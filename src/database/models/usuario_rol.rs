use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UsuarioRol {
    pub id: i32,
    pub rol_id: i32,
    pub rol_nombre: String,
    pub usuario_id: i32,
    pub usuario_email: String,
    pub usuario_nombre: String,
    pub descripcion: String,
}

impl Entity for UsuarioRol {
    const TABLE: &'static str = "usuarios_roles";
    const SOURCE: &'static str = "usuarios_roles \
        JOIN roles ON roles.id = usuarios_roles.rol_id \
        JOIN usuarios ON usuarios.id = usuarios_roles.usuario_id";
    const COLUMNS: &'static str = "usuarios_roles.id, usuarios_roles.rol_id, roles.nombre AS rol_nombre, \
        usuarios_roles.usuario_id, usuarios.email AS usuario_email, \
        CONCAT_WS(' ', usuarios.nombres, usuarios.apellido_paterno, usuarios.apellido_materno) AS usuario_nombre, \
        usuarios_roles.descripcion";
    const ORDER: &'static str = "usuarios_roles.id";
    const LABEL: &'static str = "ese usuario-rol";
    const MODULE: &'static str = "USUARIOS ROLES";
}
