use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Rows created on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CantidadCreada {
    pub creado: NaiveDate,
    pub cantidad: i64,
}

/// Appointments booked for one office and service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CantidadAgendada {
    pub oficina: String,
    pub servicio: String,
    pub cantidad: i64,
}
