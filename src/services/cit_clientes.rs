use chrono::NaiveDate;
use serde::Deserialize;

use crate::database::models::CitCliente;
use crate::database::{DatabaseError, Entity};
use crate::filter::Filter;
use crate::validation::{safe_curp, safe_email, safe_string, within_history, DateRange, UpperBound};

#[derive(Debug, Default, Clone, Deserialize)]
pub struct CitClientesParams {
    pub nombres: Option<String>,
    pub apellido_primero: Option<String>,
    pub apellido_segundo: Option<String>,
    pub curp: Option<String>,
    pub email: Option<String>,
    pub creado_desde: Option<NaiveDate>,
    pub creado_hasta: Option<NaiveDate>,
}

pub fn cit_clientes_filter(params: &CitClientesParams, today: NaiveDate) -> Result<Filter, DatabaseError> {
    let mut filter = CitCliente::filter()?;

    let names = [
        ("nombres", &params.nombres),
        ("apellido_primero", &params.apellido_primero),
        ("apellido_segundo", &params.apellido_segundo),
    ];
    for (column, value) in names {
        if let Some(value) = value {
            let fragment = safe_string(value);
            if !fragment.is_empty() {
                filter.contains(&CitCliente::column(column), &fragment)?;
            }
        }
    }

    if let Some(curp) = &params.curp {
        filter.contains(&CitCliente::column("curp"), &safe_curp(curp, true)?)?;
    }
    if let Some(email) = &params.email {
        filter.contains(&CitCliente::column("email"), &safe_email(email, true)?)?;
    }

    if let Some(desde) = params.creado_desde {
        if !within_history(desde, today, UpperBound::Today) {
            return Err(DatabaseError::OutOfRange("Creado desde fuera de rango".to_string()));
        }
        if let Some(start) = DateRange::day(desde).start() {
            filter.gte(&CitCliente::column("creado"), start)?;
        }
    }
    if let Some(hasta) = params.creado_hasta {
        if !within_history(hasta, today, UpperBound::Today) {
            return Err(DatabaseError::OutOfRange("Creado hasta fuera de rango".to_string()));
        }
        if let Some(end) = DateRange::day(hasta).end_exclusive() {
            filter.lt(&CitCliente::column("creado"), end)?;
        }
    }

    filter.order(CitCliente::ORDER)?;
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SqlValue;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    #[test]
    fn names_match_as_uppercase_fragments() {
        let params = CitClientesParams {
            nombres: Some("maría".into()),
            apellido_segundo: Some("   ".into()),
            ..Default::default()
        };
        let sql = cit_clientes_filter(&params, today()).unwrap().to_where_sql().unwrap();
        assert_eq!(sql.params.len(), 2);
        assert!(sql.query.ends_with("\"cit_clientes\".\"nombres\" ILIKE $2"));
        assert_eq!(sql.params[1], SqlValue::Text("%MARIA%".into()));
    }

    #[test]
    fn invalid_email_is_rejected() {
        let params = CitClientesParams { email: Some("no valido".into()), ..Default::default() };
        assert!(matches!(cit_clientes_filter(&params, today()), Err(DatabaseError::NotValidParam(_))));
    }

    #[test]
    fn future_creado_is_out_of_range() {
        let params = CitClientesParams {
            creado_desde: NaiveDate::from_ymd_opt(2030, 1, 1),
            ..Default::default()
        };
        assert!(matches!(cit_clientes_filter(&params, today()), Err(DatabaseError::OutOfRange(_))));
    }
}
