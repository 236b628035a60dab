use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use crate::database::repository::Entity;

/// Lifecycle state of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EstadoCita {
    Asistio,
    Cancelo,
    Pendiente,
}

impl EstadoCita {
    /// States shown in listings; cancelled appointments are hidden
    pub const LISTABLE: [EstadoCita; 2] = [EstadoCita::Asistio, EstadoCita::Pendiente];

    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoCita::Asistio => "ASISTIO",
            EstadoCita::Cancelo => "CANCELO",
            EstadoCita::Pendiente => "PENDIENTE",
        }
    }
}

impl fmt::Display for EstadoCita {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstadoCita {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ASISTIO" => Ok(EstadoCita::Asistio),
            "CANCELO" => Ok(EstadoCita::Cancelo),
            "PENDIENTE" => Ok(EstadoCita::Pendiente),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CitCita {
    pub id: i32,
    pub creado: NaiveDateTime,
    pub cit_cliente_id: i32,
    pub cit_cliente_nombre: String,
    pub cit_cliente_curp: String,
    pub cit_cliente_email: String,
    pub cit_servicio_id: i32,
    pub cit_servicio_clave: String,
    pub cit_servicio_descripcion: String,
    pub oficina_id: i32,
    pub oficina_clave: String,
    pub oficina_descripcion_corta: String,
    pub inicio: NaiveDateTime,
    pub termino: NaiveDateTime,
    pub notas: String,
    pub estado: String,
}

impl Entity for CitCita {
    const TABLE: &'static str = "cit_citas";
    const SOURCE: &'static str = "cit_citas \
        JOIN cit_clientes ON cit_clientes.id = cit_citas.cit_cliente_id \
        JOIN cit_servicios ON cit_servicios.id = cit_citas.cit_servicio_id \
        JOIN oficinas ON oficinas.id = cit_citas.oficina_id";
    const COLUMNS: &'static str = "cit_citas.id, cit_citas.creado, cit_citas.cit_cliente_id, \
        CONCAT_WS(' ', cit_clientes.nombres, cit_clientes.apellido_primero, cit_clientes.apellido_segundo) AS cit_cliente_nombre, \
        cit_clientes.curp AS cit_cliente_curp, cit_clientes.email AS cit_cliente_email, \
        cit_citas.cit_servicio_id, cit_servicios.clave AS cit_servicio_clave, \
        cit_servicios.descripcion AS cit_servicio_descripcion, \
        cit_citas.oficina_id, oficinas.clave AS oficina_clave, \
        oficinas.descripcion_corta AS oficina_descripcion_corta, \
        cit_citas.inicio, cit_citas.termino, COALESCE(cit_citas.notas, '') AS notas, cit_citas.estado";
    const ORDER: &'static str = "cit_citas.id desc";
    const LABEL: &'static str = "esa cita";
    const MODULE: &'static str = "CIT CITAS";
}
