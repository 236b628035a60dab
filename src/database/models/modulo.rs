use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Modulo {
    pub id: i32,
    pub nombre: String,
    pub nombre_corto: String,
    pub icono: String,
    pub ruta: String,
    pub en_navegacion: bool,
}

impl Entity for Modulo {
    const TABLE: &'static str = "modulos";
    const SOURCE: &'static str = "modulos";
    const COLUMNS: &'static str =
        "modulos.id, modulos.nombre, modulos.nombre_corto, modulos.icono, modulos.ruta, modulos.en_navegacion";
    const ORDER: &'static str = "modulos.nombre";
    const LABEL: &'static str = "ese módulo";
    const MODULE: &'static str = "MODULOS";
}
