use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Oficina {
    pub id: i32,
    pub distrito_id: i32,
    pub distrito_nombre: String,
    pub distrito_nombre_corto: String,
    pub domicilio_id: i32,
    pub clave: String,
    pub descripcion: String,
    pub descripcion_corta: String,
    pub es_jurisdiccional: bool,
    pub puede_agendar_citas: bool,
    pub apertura: NaiveTime,
    pub cierre: NaiveTime,
    pub limite_personas: i32,
}

impl Entity for Oficina {
    const TABLE: &'static str = "oficinas";
    const SOURCE: &'static str = "oficinas JOIN distritos ON distritos.id = oficinas.distrito_id";
    const COLUMNS: &'static str = "oficinas.id, oficinas.distrito_id, \
        distritos.nombre AS distrito_nombre, distritos.nombre_corto AS distrito_nombre_corto, \
        oficinas.domicilio_id, oficinas.clave, oficinas.descripcion, oficinas.descripcion_corta, \
        oficinas.es_jurisdiccional, oficinas.puede_agendar_citas, \
        oficinas.apertura, oficinas.cierre, oficinas.limite_personas";
    const ORDER: &'static str = "oficinas.clave";
    const LABEL: &'static str = "esa oficina";
    const MODULE: &'static str = "OFICINAS";
}
