use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use sqlx::PgPool;

use crate::database::models::{CitCita, CitCliente, CitServicio, EstadoCita, Oficina};
use crate::database::{DatabaseError, Entity, Repository};
use crate::filter::Filter;
use crate::validation::{safe_clave, safe_email, safe_string, within_history, DateRange, UpperBound};

/// Query parameters of the appointment listing
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CitCitasParams {
    pub cit_cliente_id: Option<i64>,
    pub cit_cliente_email: Option<String>,
    pub cit_servicio_id: Option<i64>,
    pub oficina_id: Option<i64>,
    pub oficina_clave: Option<String>,
    pub fecha: Option<NaiveDate>,
    pub inicio_desde: Option<NaiveDateTime>,
    pub inicio_hasta: Option<NaiveDateTime>,
    pub estado: Option<String>,
    pub creado_desde: Option<NaiveDate>,
    pub creado_hasta: Option<NaiveDate>,
}

/// Build the listing filter, checking that referenced rows exist and are active
pub async fn cit_citas_filter(pool: &PgPool, params: &CitCitasParams, today: NaiveDate) -> Result<Filter, DatabaseError> {
    if let Some(id) = params.cit_cliente_id {
        Repository::<CitCliente>::new(pool.clone()).get(id).await?;
    }
    if let Some(id) = params.cit_servicio_id {
        Repository::<CitServicio>::new(pool.clone()).get(id).await?;
    }
    if let Some(id) = params.oficina_id {
        Repository::<Oficina>::new(pool.clone()).get(id).await?;
    }
    apply_params(CitCita::filter()?, params, today)
}

/// Everything of the listing filter that needs no lookups
pub(crate) fn apply_params(mut filter: Filter, params: &CitCitasParams, today: NaiveDate) -> Result<Filter, DatabaseError> {
    filter.in_values(&CitCita::column("estado"), EstadoCita::LISTABLE.iter().map(|e| e.as_str()))?;

    if let Some(id) = params.cit_cliente_id {
        filter.eq(&CitCita::column("cit_cliente_id"), id)?;
    } else if let Some(email) = &params.cit_cliente_email {
        let email = safe_email(email, true)?;
        filter.in_select(&CitCita::column("cit_cliente_id"), "cit_clientes", "id", "email", email)?;
    }

    if let Some(id) = params.cit_servicio_id {
        filter.eq(&CitCita::column("cit_servicio_id"), id)?;
    }

    if let Some(id) = params.oficina_id {
        filter.eq(&CitCita::column("oficina_id"), id)?;
    } else if let Some(clave) = &params.oficina_clave {
        let clave = safe_clave(clave)?;
        filter.in_select(&CitCita::column("oficina_id"), "oficinas", "id", "clave", clave)?;
    }

    if let Some(fecha) = params.fecha {
        filter.gte(&CitCita::column("inicio"), fecha.and_time(NaiveTime::MIN))?;
        filter.lte(&CitCita::column("inicio"), end_of_day(fecha))?;
    } else {
        if let Some(desde) = params.inicio_desde {
            filter.gte(&CitCita::column("inicio"), desde)?;
        }
        if let Some(hasta) = params.inicio_hasta {
            filter.lte(&CitCita::column("inicio"), hasta)?;
        }
    }

    if let Some(estado) = &params.estado {
        let estado: EstadoCita = safe_string(estado)
            .parse()
            .map_err(|_| DatabaseError::NotValidParam("El estado no es válido".to_string()))?;
        filter.eq(&CitCita::column("estado"), estado.as_str())?;
    }

    if let Some(desde) = params.creado_desde {
        if !within_history(desde, today, UpperBound::Today) {
            return Err(DatabaseError::OutOfRange("Creado desde fuera de rango".to_string()));
        }
        if let Some(start) = DateRange::day(desde).start() {
            filter.gte(&CitCita::column("creado"), start)?;
        }
    }
    if let Some(hasta) = params.creado_hasta {
        if !within_history(hasta, today, UpperBound::Today) {
            return Err(DatabaseError::OutOfRange("Creado hasta fuera de rango".to_string()));
        }
        if let Some(end) = DateRange::day(hasta).end_exclusive() {
            filter.lt(&CitCita::column("creado"), end)?;
        }
    }

    if params.fecha.is_some() {
        filter.order("cit_citas.inicio")?;
    } else {
        filter.order("cit_citas.id desc")?;
    }
    Ok(filter)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SqlValue;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 5, 15)
    }

    fn build(params: CitCitasParams) -> Result<Filter, DatabaseError> {
        apply_params(CitCita::filter().unwrap(), &params, today())
    }

    #[test]
    fn listing_hides_cancelled_and_orders_by_id_desc() {
        let sql = build(CitCitasParams::default()).unwrap().to_sql().unwrap();
        assert!(sql.query.contains("\"cit_citas\".\"estado\" IN ($2, $3)"));
        assert!(sql.query.ends_with("ORDER BY \"cit_citas\".\"id\" DESC"));
    }

    #[test]
    fn fecha_overrides_inicio_bounds_and_orders_by_inicio() {
        let params = CitCitasParams {
            fecha: Some(date(2024, 5, 20)),
            inicio_desde: Some(date(2023, 1, 1).and_hms_opt(0, 0, 0).unwrap()),
            ..Default::default()
        };
        let sql = build(params).unwrap().to_sql().unwrap();
        assert_eq!(sql.params.len(), 5);
        assert_eq!(sql.params[3], SqlValue::Timestamp(date(2024, 5, 20).and_hms_opt(0, 0, 0).unwrap()));
        assert_eq!(sql.params[4], SqlValue::Timestamp(date(2024, 5, 20).and_hms_opt(23, 59, 59).unwrap()));
        assert!(sql.query.ends_with("ORDER BY \"cit_citas\".\"inicio\" ASC"));
    }

    #[test]
    fn estado_is_sanitized_and_checked() {
        let ok = build(CitCitasParams { estado: Some(" pendiente ".into()), ..Default::default() }).unwrap();
        let sql = ok.to_where_sql().unwrap();
        assert_eq!(sql.params.last(), Some(&SqlValue::Text("PENDIENTE".into())));

        let err = build(CitCitasParams { estado: Some("AGENDADA".into()), ..Default::default() }).unwrap_err();
        assert!(matches!(err, DatabaseError::NotValidParam(ref m) if m == "El estado no es válido"));
    }

    #[test]
    fn creado_bounds_must_be_within_history() {
        let future = build(CitCitasParams { creado_hasta: Some(date(2024, 5, 16)), ..Default::default() });
        assert!(matches!(future, Err(DatabaseError::OutOfRange(ref m)) if m == "Creado hasta fuera de rango"));

        let old = build(CitCitasParams { creado_desde: Some(date(2021, 12, 31)), ..Default::default() });
        assert!(matches!(old, Err(DatabaseError::OutOfRange(ref m)) if m == "Creado desde fuera de rango"));

        assert!(build(CitCitasParams { creado_desde: Some(today()), ..Default::default() }).is_ok());
    }

    #[test]
    fn lookups_by_email_and_clave_use_subqueries() {
        let params = CitCitasParams {
            cit_cliente_email: Some("Persona@Correo.mx".into()),
            oficina_clave: Some("slt-j1-civ".into()),
            ..Default::default()
        };
        let sql = build(params).unwrap().to_where_sql().unwrap();
        assert!(sql
            .query
            .contains("\"cit_citas\".\"cit_cliente_id\" IN (SELECT \"id\" FROM \"cit_clientes\" WHERE \"email\" = $4)"));
        assert_eq!(sql.params[3], SqlValue::Text("persona@correo.mx".into()));
        assert_eq!(sql.params[4], SqlValue::Text("SLT-J1-CIV".into()));
    }

    #[test]
    fn bad_clave_is_rejected() {
        let err = build(CitCitasParams { oficina_clave: Some("NO VALIDA".into()), ..Default::default() }).unwrap_err();
        assert!(matches!(err, DatabaseError::NotValidParam(_)));
    }
}
