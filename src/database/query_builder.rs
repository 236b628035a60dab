use sqlx::{self, postgres::PgArguments, FromRow, PgPool, Row};

use crate::database::manager::DatabaseError;
use crate::filter::{Filter, SqlResult, SqlValue};

pub struct QueryBuilder<T> {
    filter: Filter,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> QueryBuilder<T>
where
    T: for<'r> FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
{
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn select_all(self, pool: &PgPool) -> Result<Vec<T>, DatabaseError> {
        let sql_result = self.filter.to_sql()?;
        tracing::debug!("select: {}", sql_result.query);
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }
        let rows = q.fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn select_optional(self, pool: &PgPool) -> Result<Option<T>, DatabaseError> {
        let sql_result = self.filter.to_sql()?;
        tracing::debug!("select: {}", sql_result.query);
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }
        let row = q.fetch_optional(pool).await?;
        Ok(row)
    }

    pub async fn count(&self, pool: &PgPool) -> Result<i64, DatabaseError> {
        let sql_result = self.filter.to_count_sql()?;
        count_with(pool, &sql_result).await
    }
}

/// Run a hand-assembled statement (aggregations) and map its rows
pub async fn fetch_all_as<O>(pool: &PgPool, sql_result: &SqlResult) -> Result<Vec<O>, DatabaseError>
where
    O: for<'r> FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
{
    tracing::debug!("select: {}", sql_result.query);
    let mut q = sqlx::query_as::<_, O>(&sql_result.query);
    for p in sql_result.params.iter() {
        q = bind_param_query_as(q, p);
    }
    Ok(q.fetch_all(pool).await?)
}

async fn count_with(pool: &PgPool, sql_result: &SqlResult) -> Result<i64, DatabaseError> {
    let mut q = sqlx::query(&sql_result.query);
    for p in sql_result.params.iter() {
        q = bind_param_query(q, p);
    }
    let row = q.fetch_one(pool).await?;
    let count: i64 = row.try_get("count")?;
    Ok(count)
}

pub(crate) fn bind_param_query<'q>(
    q: sqlx::query::Query<'q, sqlx::Postgres, PgArguments>,
    v: &'q SqlValue,
) -> sqlx::query::Query<'q, sqlx::Postgres, PgArguments> {
    match v {
        SqlValue::Null => {
            let none: Option<String> = None;
            q.bind(none)
        }
        SqlValue::Bool(b) => q.bind(*b),
        SqlValue::Int(i) => q.bind(*i),
        SqlValue::Text(s) => q.bind(s.as_str()),
        SqlValue::Date(d) => q.bind(*d),
        SqlValue::Timestamp(ts) => q.bind(*ts),
    }
}

pub(crate) fn bind_param_query_as<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    v: &'q SqlValue,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, sqlx::postgres::PgRow>,
{
    match v {
        SqlValue::Null => {
            let none: Option<String> = None;
            q.bind(none)
        }
        SqlValue::Bool(b) => q.bind(*b),
        SqlValue::Int(i) => q.bind(*i),
        SqlValue::Text(s) => q.bind(s.as_str()),
        SqlValue::Date(d) => q.bind(*d),
        SqlValue::Timestamp(ts) => q.bind(*ts),
    }
}
