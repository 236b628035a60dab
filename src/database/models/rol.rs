use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rol {
    pub id: i32,
    pub nombre: String,
}

impl Entity for Rol {
    const TABLE: &'static str = "roles";
    const SOURCE: &'static str = "roles";
    const COLUMNS: &'static str = "roles.id, roles.nombre";
    const ORDER: &'static str = "roles.nombre";
    const LABEL: &'static str = "ese rol";
    const MODULE: &'static str = "ROLES";
}
