use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CitCategoria {
    pub id: i32,
    pub nombre: String,
}

impl Entity for CitCategoria {
    const TABLE: &'static str = "cit_categorias";
    const SOURCE: &'static str = "cit_categorias";
    const COLUMNS: &'static str = "cit_categorias.id, cit_categorias.nombre";
    const ORDER: &'static str = "cit_categorias.nombre";
    const LABEL: &'static str = "esa categoría";
    const MODULE: &'static str = "CIT CATEGORIAS";
}
