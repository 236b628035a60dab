use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Distrito {
    pub id: i32,
    pub nombre: String,
    pub nombre_corto: String,
    pub es_distrito_judicial: bool,
}

impl Entity for Distrito {
    const TABLE: &'static str = "distritos";
    const SOURCE: &'static str = "distritos";
    const COLUMNS: &'static str =
        "distritos.id, distritos.nombre, distritos.nombre_corto, distritos.es_distrito_judicial";
    const ORDER: &'static str = "distritos.nombre";
    const LABEL: &'static str = "ese distrito";
    const MODULE: &'static str = "DISTRITOS";
}
