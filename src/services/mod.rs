pub mod cantidades;
pub mod cit_citas;
pub mod cit_clientes;
pub mod cit_dias_disponibles;
pub mod usuarios;

use chrono::{Local, NaiveDate};

/// Current local date, evaluated on every call
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
