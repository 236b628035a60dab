use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CitServicio {
    pub id: i32,
    pub cit_categoria_id: i32,
    pub cit_categoria_nombre: String,
    pub clave: String,
    pub descripcion: String,
    pub duracion: NaiveTime,
    pub documentos_limite: i32,
}

impl Entity for CitServicio {
    const TABLE: &'static str = "cit_servicios";
    const SOURCE: &'static str =
        "cit_servicios JOIN cit_categorias ON cit_categorias.id = cit_servicios.cit_categoria_id";
    const COLUMNS: &'static str = "cit_servicios.id, cit_servicios.cit_categoria_id, \
        cit_categorias.nombre AS cit_categoria_nombre, cit_servicios.clave, cit_servicios.descripcion, \
        cit_servicios.duracion, cit_servicios.documentos_limite";
    const ORDER: &'static str = "cit_servicios.clave";
    const LABEL: &'static str = "ese servicio";
    const MODULE: &'static str = "CIT SERVICIOS";
}
