use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CitDiaInhabil {
    pub id: i32,
    pub fecha: NaiveDate,
    pub descripcion: String,
}

impl Entity for CitDiaInhabil {
    const TABLE: &'static str = "cit_dias_inhabiles";
    const SOURCE: &'static str = "cit_dias_inhabiles";
    const COLUMNS: &'static str =
        "cit_dias_inhabiles.id, cit_dias_inhabiles.fecha, cit_dias_inhabiles.descripcion";
    const ORDER: &'static str = "cit_dias_inhabiles.fecha desc";
    const LABEL: &'static str = "ese día inhábil";
    const MODULE: &'static str = "CIT DIAS INHABILES";
}
