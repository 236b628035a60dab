use sqlx::PgPool;

use crate::database::models::{CantidadAgendada, CantidadCreada, EstadoCita};
use crate::database::query_builder::fetch_all_as;
use crate::database::DatabaseError;
use crate::filter::{Filter, SqlResult};
use crate::validation::DateRange;

/// Rows of `table` created per day within `range`, oldest day first.
///
/// Counts every row created, active or not. With `listable_citas` only
/// appointments in a listable state are counted.
pub async fn creados_por_dia(
    pool: &PgPool,
    table: &str,
    range: DateRange,
    listable_citas: bool,
) -> Result<Vec<CantidadCreada>, DatabaseError> {
    let sql = creados_por_dia_sql(table, range, listable_citas)?;
    fetch_all_as(pool, &sql).await
}

pub(crate) fn creados_por_dia_sql(table: &str, range: DateRange, listable_citas: bool) -> Result<SqlResult, DatabaseError> {
    let mut filter = Filter::new(table)?;
    filter.include_inactive();
    let creado = format!("{}.creado", table);
    if let Some(start) = range.start() {
        filter.gte(&creado, start)?;
    }
    if let Some(end) = range.end_exclusive() {
        filter.lt(&creado, end)?;
    }
    if listable_citas {
        filter.in_values(&format!("{}.estado", table), EstadoCita::LISTABLE.iter().map(|e| e.as_str()))?;
    }
    let where_result = filter.to_where_sql()?;
    let query = format!(
        "SELECT DATE({t}.creado) AS creado, COUNT({t}.id) AS cantidad FROM {t} WHERE {w} \
         GROUP BY DATE({t}.creado) ORDER BY DATE({t}.creado)",
        t = filter.table_name(),
        w = where_result.query
    );
    Ok(SqlResult { query, params: where_result.params })
}

/// Active appointments per office and service keys whose start falls in `range`
pub async fn agendadas_por_oficina_servicio(pool: &PgPool, range: DateRange) -> Result<Vec<CantidadAgendada>, DatabaseError> {
    let sql = agendadas_por_oficina_servicio_sql(range)?;
    fetch_all_as(pool, &sql).await
}

pub(crate) fn agendadas_por_oficina_servicio_sql(range: DateRange) -> Result<SqlResult, DatabaseError> {
    const SOURCE: &str = "cit_citas \
        JOIN cit_servicios ON cit_servicios.id = cit_citas.cit_servicio_id \
        JOIN oficinas ON oficinas.id = cit_citas.oficina_id";

    let mut filter = Filter::new("cit_citas")?.source(SOURCE);
    filter.eq("cit_servicios.estatus", "A")?;
    filter.eq("oficinas.estatus", "A")?;
    filter.in_values("cit_citas.estado", EstadoCita::LISTABLE.iter().map(|e| e.as_str()))?;
    if let Some(start) = range.start() {
        filter.gte("cit_citas.inicio", start)?;
    }
    if let Some(end) = range.end_exclusive() {
        filter.lt("cit_citas.inicio", end)?;
    }
    let where_result = filter.to_where_sql()?;
    let query = format!(
        "SELECT oficinas.clave AS oficina, cit_servicios.clave AS servicio, COUNT(*) AS cantidad \
         FROM {} WHERE {} GROUP BY oficinas.clave, cit_servicios.clave ORDER BY oficinas.clave, cit_servicios.clave",
        SOURCE, where_result.query
    );
    Ok(SqlResult { query, params: where_result.params })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SqlValue;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn creados_groups_by_day_without_soft_delete() {
        let range = DateRange { desde: Some(day(1)), hasta: Some(day(15)) };
        let sql = creados_por_dia_sql("cit_clientes", range, false).unwrap();
        assert_eq!(
            sql.query,
            "SELECT DATE(cit_clientes.creado) AS creado, COUNT(cit_clientes.id) AS cantidad FROM cit_clientes \
             WHERE \"cit_clientes\".\"creado\" >= $1 AND \"cit_clientes\".\"creado\" < $2 \
             GROUP BY DATE(cit_clientes.creado) ORDER BY DATE(cit_clientes.creado)"
        );
        assert_eq!(sql.params[1], SqlValue::Timestamp(day(16).and_hms_opt(0, 0, 0).unwrap()));
    }

    #[test]
    fn creados_de_citas_only_counts_listable_states() {
        let range = DateRange { desde: None, hasta: Some(day(15)) };
        let sql = creados_por_dia_sql("cit_citas", range, true).unwrap();
        assert!(sql.query.contains("\"cit_citas\".\"estado\" IN ($2, $3)"));
        assert_eq!(sql.params[1], SqlValue::Text("ASISTIO".into()));
        assert_eq!(sql.params[2], SqlValue::Text("PENDIENTE".into()));
    }

    #[test]
    fn agendadas_require_active_offices_and_services() {
        let sql = agendadas_por_oficina_servicio_sql(DateRange::day(day(20))).unwrap();
        assert!(sql.query.starts_with("SELECT oficinas.clave AS oficina"));
        assert!(sql.query.contains("\"cit_citas\".\"estatus\" = $1"));
        assert!(sql.query.contains("\"cit_servicios\".\"estatus\" = $2"));
        assert!(sql.query.contains("\"oficinas\".\"estatus\" = $3"));
        assert!(sql.query.ends_with("GROUP BY oficinas.clave, cit_servicios.clave ORDER BY oficinas.clave, cit_servicios.clave"));
        assert_eq!(sql.params.len(), 7);
    }
}
