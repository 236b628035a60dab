use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Materia {
    pub id: i32,
    pub nombre: String,
}

impl Entity for Materia {
    const TABLE: &'static str = "materias";
    const SOURCE: &'static str = "materias";
    const COLUMNS: &'static str = "materias.id, materias.nombre";
    const ORDER: &'static str = "materias.nombre";
    const LABEL: &'static str = "esa materia";
    const MODULE: &'static str = "MATERIAS";
}
