use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Autoridad {
    pub id: i32,
    pub distrito_id: i32,
    pub distrito_nombre: String,
    pub distrito_nombre_corto: String,
    pub materia_id: i32,
    pub materia_nombre: String,
    pub clave: String,
    pub descripcion: String,
    pub descripcion_corta: String,
    pub es_jurisdiccional: bool,
    pub es_notaria: bool,
    pub organo_jurisdiccional: String,
}

impl Entity for Autoridad {
    const TABLE: &'static str = "autoridades";
    const SOURCE: &'static str = "autoridades \
        JOIN distritos ON distritos.id = autoridades.distrito_id \
        JOIN materias ON materias.id = autoridades.materia_id";
    const COLUMNS: &'static str = "autoridades.id, autoridades.distrito_id, \
        distritos.nombre AS distrito_nombre, distritos.nombre_corto AS distrito_nombre_corto, \
        autoridades.materia_id, materias.nombre AS materia_nombre, \
        autoridades.clave, autoridades.descripcion, autoridades.descripcion_corta, \
        autoridades.es_jurisdiccional, autoridades.es_notaria, autoridades.organo_jurisdiccional";
    const ORDER: &'static str = "autoridades.clave";
    const LABEL: &'static str = "esa autoridad";
    const MODULE: &'static str = "AUTORIDADES";
}
