use super::error::FilterError;
use super::types::{FilterOp, FilterWhereInfo, FilterWhereOptions, SqlValue};

/// Soft-delete column present on every table of the store
pub const ESTATUS_COLUMN: &str = "estatus";
pub const ESTATUS_ACTIVE: &str = "A";

pub struct FilterWhere {
    param_values: Vec<SqlValue>,
    param_index: usize,
}

impl FilterWhere {
    pub fn new(starting_param_index: usize) -> Self {
        Self {
            param_values: vec![],
            param_index: starting_param_index,
        }
    }

    /// Render the WHERE body (without the keyword) and its bound values.
    /// `table` owns the soft-delete column.
    pub fn generate(
        table: &str,
        conditions: &[FilterWhereInfo],
        starting_param_index: usize,
        options: &FilterWhereOptions,
    ) -> Result<(String, Vec<SqlValue>), FilterError> {
        let mut filter_where = Self::new(starting_param_index);
        filter_where.build(table, conditions, options)
    }

    fn build(
        &mut self,
        table: &str,
        conditions: &[FilterWhereInfo],
        options: &FilterWhereOptions,
    ) -> Result<(String, Vec<SqlValue>), FilterError> {
        let mut sql_conditions = vec![];
        if !options.include_inactive {
            let column = quote_identifier(&format!("{}.{}", table, ESTATUS_COLUMN));
            let param = self.param(SqlValue::Text(ESTATUS_ACTIVE.to_string()));
            sql_conditions.push(format!("{} = {}", column, param));
        }
        for condition in conditions {
            sql_conditions.push(self.build_sql_condition(condition)?);
        }
        let where_clause = if sql_conditions.is_empty() { "1=1".to_string() } else { sql_conditions.join(" AND ") };
        Ok((where_clause, std::mem::take(&mut self.param_values)))
    }

    fn build_sql_condition(&mut self, condition: &FilterWhereInfo) -> Result<String, FilterError> {
        match condition {
            FilterWhereInfo::Compare { column, operator, data } => {
                let quoted_column = quote_identifier(column);
                match (operator, data) {
                    (FilterOp::Eq, SqlValue::Null) => Ok(format!("{} IS NULL", quoted_column)),
                    (FilterOp::Neq, SqlValue::Null) => Ok(format!("{} IS NOT NULL", quoted_column)),
                    (_, SqlValue::Null) => Err(FilterError::InvalidOperatorData(format!(
                        "{} cannot compare against NULL",
                        operator.to_sql()
                    ))),
                    _ => Ok(format!("{} {} {}", quoted_column, operator.to_sql(), self.param(data.clone()))),
                }
            }
            FilterWhereInfo::In { column, values } => {
                if values.is_empty() {
                    return Ok("1=0".to_string());
                }
                let params: Vec<String> = values.iter().map(|v| self.param(v.clone())).collect();
                Ok(format!("{} IN ({})", quote_identifier(column), params.join(", ")))
            }
            FilterWhereInfo::InSelect { column, select } => Ok(format!(
                "{} IN (SELECT {} FROM {} WHERE {} = {})",
                quote_identifier(column),
                quote_identifier(&select.select_column),
                quote_identifier(&select.table),
                quote_identifier(&select.where_column),
                self.param(select.value.clone())
            )),
        }
    }

    fn param(&mut self, value: SqlValue) -> String {
        self.param_values.push(value);
        self.param_index += 1;
        format!("${}", self.param_index)
    }
}

/// Quote each dotted segment: `cit_citas.inicio` -> `"cit_citas"."inicio"`
pub fn quote_identifier(name: &str) -> String {
    name.split('.')
        .map(|part| format!("\"{}\"", part.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(".")
}
