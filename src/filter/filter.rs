use super::error::FilterError;
use super::filter_order::FilterOrder;
use super::filter_where::{quote_identifier, FilterWhere};
use super::types::{FilterOp, FilterOrderInfo, FilterWhereInfo, FilterWhereOptions, SqlResult, SqlValue, SubSelect};

/// Parameterized SELECT builder over one primary table, optionally joined.
///
/// The primary table owns the soft-delete column; every query excludes
/// inactive rows unless [`Filter::include_inactive`] is called.
#[derive(Debug, Clone)]
pub struct Filter {
    table_name: String,
    source: Option<String>,
    select_columns: Option<String>,
    conditions: Vec<FilterWhereInfo>,
    order_data: Vec<FilterOrderInfo>,
    limit: Option<i64>,
    offset: Option<i64>,
    options: FilterWhereOptions,
}

impl Filter {
    pub fn new(table_name: impl Into<String>) -> Result<Self, FilterError> {
        let table_name = table_name.into();
        Self::validate_table_name(&table_name)?;
        Ok(Self {
            table_name,
            source: None,
            select_columns: None,
            conditions: vec![],
            order_data: vec![],
            limit: None,
            offset: None,
            options: FilterWhereOptions::default(),
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// FROM clause including joins. Static SQL owned by the caller.
    pub fn source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    /// Select list. Static SQL owned by the caller.
    pub fn columns(mut self, columns: &str) -> Self {
        self.select_columns = Some(columns.to_string());
        self
    }

    pub fn include_inactive(&mut self) -> &mut Self {
        self.options.include_inactive = true;
        self
    }

    pub fn compare(&mut self, column: &str, operator: FilterOp, data: impl Into<SqlValue>) -> Result<&mut Self, FilterError> {
        Self::validate_column(column)?;
        self.conditions.push(FilterWhereInfo::Compare {
            column: column.to_string(),
            operator,
            data: data.into(),
        });
        Ok(self)
    }

    pub fn eq(&mut self, column: &str, data: impl Into<SqlValue>) -> Result<&mut Self, FilterError> {
        self.compare(column, FilterOp::Eq, data)
    }

    pub fn gte(&mut self, column: &str, data: impl Into<SqlValue>) -> Result<&mut Self, FilterError> {
        self.compare(column, FilterOp::Gte, data)
    }

    pub fn lte(&mut self, column: &str, data: impl Into<SqlValue>) -> Result<&mut Self, FilterError> {
        self.compare(column, FilterOp::Lte, data)
    }

    pub fn lt(&mut self, column: &str, data: impl Into<SqlValue>) -> Result<&mut Self, FilterError> {
        self.compare(column, FilterOp::Lt, data)
    }

    /// Case-insensitive substring match
    pub fn contains(&mut self, column: &str, fragment: &str) -> Result<&mut Self, FilterError> {
        self.compare(column, FilterOp::ILike, format!("%{}%", fragment))
    }

    pub fn in_values<V: Into<SqlValue>>(&mut self, column: &str, values: impl IntoIterator<Item = V>) -> Result<&mut Self, FilterError> {
        Self::validate_column(column)?;
        self.conditions.push(FilterWhereInfo::In {
            column: column.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        });
        Ok(self)
    }

    /// `column IN (SELECT select_column FROM table WHERE where_column = value)`
    pub fn in_select(
        &mut self,
        column: &str,
        table: &str,
        select_column: &str,
        where_column: &str,
        value: impl Into<SqlValue>,
    ) -> Result<&mut Self, FilterError> {
        Self::validate_column(column)?;
        Self::validate_table_name(table)?;
        Self::validate_column(select_column)?;
        Self::validate_column(where_column)?;
        self.conditions.push(FilterWhereInfo::InSelect {
            column: column.to_string(),
            select: SubSelect {
                table: table.to_string(),
                select_column: select_column.to_string(),
                where_column: where_column.to_string(),
                value: value.into(),
            },
        });
        Ok(self)
    }

    pub fn order(&mut self, order_spec: &str) -> Result<&mut Self, FilterError> {
        let order_info = FilterOrder::parse(order_spec)?;
        for info in &order_info {
            Self::validate_column(&info.column)?;
        }
        self.order_data = order_info;
        Ok(self)
    }

    pub fn limit(&mut self, limit: i64, offset: Option<i64>) -> Result<&mut Self, FilterError> {
        if limit < 0 {
            return Err(FilterError::InvalidLimit("Limit must be non-negative".to_string()));
        }
        if let Some(off) = offset {
            if off < 0 {
                return Err(FilterError::InvalidOffset("Offset must be non-negative".to_string()));
            }
        }

        // Apply max limit from config
        let max_limit = crate::config::CONFIG.pagination.max_limit;
        let applied_limit = if limit > max_limit {
            tracing::debug!("Limit {} exceeds max {}, capping to max", limit, max_limit);
            max_limit
        } else {
            limit
        };

        self.limit = Some(applied_limit);
        self.offset = offset;
        Ok(self)
    }

    pub fn has_order(&self) -> bool {
        !self.order_data.is_empty()
    }

    pub fn applied_limit(&self) -> Option<i64> {
        self.limit
    }

    pub fn to_sql(&self) -> Result<SqlResult, FilterError> {
        let where_result = self.to_where_sql()?;
        let query = [
            format!("SELECT {}", self.build_select_clause()),
            format!("FROM {}", self.build_source()),
            format!("WHERE {}", where_result.query),
            FilterOrder::generate(&self.order_data),
            self.build_limit_clause(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        Ok(SqlResult { query, params: where_result.params })
    }

    pub fn to_where_sql(&self) -> Result<SqlResult, FilterError> {
        let (query, params) = FilterWhere::generate(&self.table_name, &self.conditions, 0, &self.options)?;
        Ok(SqlResult { query, params })
    }

    pub fn to_count_sql(&self) -> Result<SqlResult, FilterError> {
        let where_result = self.to_where_sql()?;
        let query = format!("SELECT COUNT(*) AS count FROM {} WHERE {}", self.build_source(), where_result.query);
        Ok(SqlResult { query, params: where_result.params })
    }

    fn validate_table_name(name: &str) -> Result<(), FilterError> {
        if !Self::is_identifier(name) {
            return Err(FilterError::InvalidTableName(format!("Invalid table name format: {}", name)));
        }
        Ok(())
    }

    fn validate_column(column: &str) -> Result<(), FilterError> {
        if column.is_empty() || !column.split('.').all(Self::is_identifier) {
            return Err(FilterError::InvalidColumn(format!("Invalid column name format: {}", column)));
        }
        Ok(())
    }

    fn is_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }

    fn build_source(&self) -> String {
        self.source.clone().unwrap_or_else(|| quote_identifier(&self.table_name))
    }

    fn build_select_clause(&self) -> String {
        self.select_columns.clone().unwrap_or_else(|| "*".to_string())
    }

    fn build_limit_clause(&self) -> String {
        match (self.limit, self.offset) {
            (Some(l), Some(o)) => format!("LIMIT {} OFFSET {}", l, o),
            (Some(l), None) => format!("LIMIT {}", l),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn rejects_bad_identifiers() {
        assert!(Filter::new("").is_err());
        assert!(Filter::new("1citas").is_err());
        assert!(Filter::new("citas; DROP TABLE usuarios").is_err());

        let mut filter = Filter::new("cit_citas").unwrap();
        assert!(filter.eq("estado\" OR 1=1 --", "X").is_err());
        assert!(filter.eq("cit_citas..estado", "X").is_err());
        assert!(filter.order("id; DELETE").is_err());
    }

    #[test]
    fn builds_select_with_joins_order_and_page() {
        let mut filter = Filter::new("oficinas")
            .unwrap()
            .source("oficinas JOIN distritos ON distritos.id = oficinas.distrito_id")
            .columns("oficinas.id, distritos.nombre AS distrito_nombre");
        filter.eq("oficinas.puede_agendar_citas", true).unwrap();
        filter.order("oficinas.clave").unwrap();
        filter.limit(10, Some(20)).unwrap();

        let sql = filter.to_sql().unwrap();
        assert_eq!(
            sql.query,
            "SELECT oficinas.id, distritos.nombre AS distrito_nombre \
             FROM oficinas JOIN distritos ON distritos.id = oficinas.distrito_id \
             WHERE \"oficinas\".\"estatus\" = $1 AND \"oficinas\".\"puede_agendar_citas\" = $2 \
             ORDER BY \"oficinas\".\"clave\" ASC LIMIT 10 OFFSET 20"
        );
        assert_eq!(sql.params, vec![SqlValue::Text("A".into()), SqlValue::Bool(true)]);
    }

    #[test]
    fn count_ignores_order_and_limit() {
        let mut filter = Filter::new("cit_citas").unwrap();
        filter.gte("inicio", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()).unwrap();
        filter.order("id desc").unwrap();
        filter.limit(5, None).unwrap();

        let sql = filter.to_count_sql().unwrap();
        assert_eq!(
            sql.query,
            "SELECT COUNT(*) AS count FROM \"cit_citas\" WHERE \"cit_citas\".\"estatus\" = $1 AND \"inicio\" >= $2"
        );
        assert_eq!(sql.params.len(), 2);
    }

    #[test]
    fn limit_is_capped_and_validated() {
        let mut filter = Filter::new("usuarios").unwrap();
        assert!(filter.limit(-1, None).is_err());
        assert!(filter.limit(10, Some(-5)).is_err());

        filter.limit(i64::MAX, None).unwrap();
        assert_eq!(filter.applied_limit(), Some(crate::config::CONFIG.pagination.max_limit));
    }

    #[test]
    fn contains_wraps_fragment() {
        let mut filter = Filter::new("cit_clientes").unwrap();
        filter.contains("nombres", "MARIA").unwrap();
        let sql = filter.to_where_sql().unwrap();
        assert!(sql.query.ends_with("\"nombres\" ILIKE $2"));
        assert_eq!(sql.params[1], SqlValue::Text("%MARIA%".into()));
    }
}
