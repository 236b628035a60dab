use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CitClienteRegistro {
    pub id: i32,
    pub nombres: String,
    pub apellido_primero: String,
    pub apellido_segundo: String,
    pub curp: String,
    pub telefono: String,
    pub email: String,
    pub expiracion: NaiveDateTime,
    pub cadena_validar: String,
    pub mensajes_cantidad: i32,
    pub ya_registrado: bool,
}

impl Entity for CitClienteRegistro {
    const TABLE: &'static str = "cit_clientes_registros";
    const SOURCE: &'static str = "cit_clientes_registros";
    const COLUMNS: &'static str = "cit_clientes_registros.id, cit_clientes_registros.nombres, \
        cit_clientes_registros.apellido_primero, cit_clientes_registros.apellido_segundo, \
        cit_clientes_registros.curp, cit_clientes_registros.telefono, cit_clientes_registros.email, \
        cit_clientes_registros.expiracion, cit_clientes_registros.cadena_validar, \
        cit_clientes_registros.mensajes_cantidad, cit_clientes_registros.ya_registrado";
    const ORDER: &'static str = "cit_clientes_registros.id desc";
    const LABEL: &'static str = "ese registro de cliente";
    const MODULE: &'static str = "CIT CLIENTES REGISTROS";
}
