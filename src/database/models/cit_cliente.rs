use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CitCliente {
    pub id: i32,
    pub creado: NaiveDateTime,
    pub nombres: String,
    pub apellido_primero: String,
    pub apellido_segundo: String,
    pub curp: String,
    pub telefono: String,
    pub email: String,
    pub limite_citas_pendientes: i32,
}

impl Entity for CitCliente {
    const TABLE: &'static str = "cit_clientes";
    const SOURCE: &'static str = "cit_clientes";
    const COLUMNS: &'static str = "cit_clientes.id, cit_clientes.creado, cit_clientes.nombres, \
        cit_clientes.apellido_primero, cit_clientes.apellido_segundo, cit_clientes.curp, \
        cit_clientes.telefono, cit_clientes.email, cit_clientes.limite_citas_pendientes";
    const ORDER: &'static str = "cit_clientes.id desc";
    const LABEL: &'static str = "ese cliente";
    const MODULE: &'static str = "CIT CLIENTES";
}
