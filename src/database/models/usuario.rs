use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Usuario {
    pub id: i32,
    pub distrito_id: i32,
    pub distrito_nombre: String,
    pub distrito_nombre_corto: String,
    pub autoridad_id: i32,
    pub autoridad_clave: String,
    pub autoridad_descripcion: String,
    pub autoridad_descripcion_corta: String,
    pub oficina_id: i32,
    pub oficina_clave: String,
    pub oficina_descripcion: String,
    pub oficina_descripcion_corta: String,
    pub email: String,
    pub nombres: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub curp: String,
    pub puesto: String,
    pub telefono_celular: String,
}

impl Entity for Usuario {
    const TABLE: &'static str = "usuarios";
    const SOURCE: &'static str = "usuarios \
        JOIN autoridades ON autoridades.id = usuarios.autoridad_id \
        JOIN distritos ON distritos.id = autoridades.distrito_id \
        JOIN oficinas ON oficinas.id = usuarios.oficina_id";
    const COLUMNS: &'static str = "usuarios.id, autoridades.distrito_id, \
        distritos.nombre AS distrito_nombre, distritos.nombre_corto AS distrito_nombre_corto, \
        usuarios.autoridad_id, autoridades.clave AS autoridad_clave, \
        autoridades.descripcion AS autoridad_descripcion, \
        autoridades.descripcion_corta AS autoridad_descripcion_corta, \
        usuarios.oficina_id, oficinas.clave AS oficina_clave, \
        oficinas.descripcion AS oficina_descripcion, oficinas.descripcion_corta AS oficina_descripcion_corta, \
        usuarios.email, usuarios.nombres, usuarios.apellido_paterno, usuarios.apellido_materno, \
        usuarios.curp, usuarios.puesto, usuarios.telefono_celular";
    const ORDER: &'static str = "usuarios.email";
    const LABEL: &'static str = "ese usuario";
    const MODULE: &'static str = "USUARIOS";
}

/// A user row as needed for authentication; never serialized
#[derive(Debug, Clone, FromRow)]
pub struct UsuarioInDb {
    #[sqlx(flatten)]
    pub usuario: Usuario,
    pub contrasena: String,
    pub estatus: String,
}

impl UsuarioInDb {
    pub const COLUMNS: &'static str = "usuarios.contrasena, usuarios.estatus";
}
