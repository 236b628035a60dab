use serde::Serialize;
use sqlx::{self, postgres::PgRow, FromRow, PgPool};

use crate::database::manager::DatabaseError;
use crate::database::pagination::{Page, PageRequest};
use crate::database::query_builder::QueryBuilder;
use crate::filter::filter_where::{quote_identifier, ESTATUS_ACTIVE};
use crate::filter::{Filter, SqlValue};

/// A row type exposed by the API, read from one primary table (plus joins)
pub trait Entity: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static {
    /// Primary table, owner of `id` and `estatus`
    const TABLE: &'static str;
    /// FROM clause with the joins the select list needs
    const SOURCE: &'static str;
    const COLUMNS: &'static str;
    /// Listing order when the caller sets none
    const ORDER: &'static str;
    /// Demonstrative used in messages: "ese distrito", "esa oficina"
    const LABEL: &'static str;
    /// Permission module guarding reads
    const MODULE: &'static str;

    fn filter() -> Result<Filter, DatabaseError> {
        Ok(Filter::new(Self::TABLE)?.source(Self::SOURCE).columns(Self::COLUMNS))
    }

    fn column(name: &str) -> String {
        format!("{}.{}", Self::TABLE, name)
    }
}

pub struct Repository<T> {
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Entity> Repository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Count and fetch one page of the filtered rows
    pub async fn paginate(&self, mut filter: Filter, page: PageRequest) -> Result<Page<T>, DatabaseError> {
        if !filter.has_order() {
            filter.order(T::ORDER)?;
        }
        let total = QueryBuilder::<T>::new(filter.clone()).count(&self.pool).await?;
        filter.limit(page.limit, Some(page.offset))?;
        let limit = filter.applied_limit().unwrap_or(page.limit);
        let items = QueryBuilder::<T>::new(filter).select_all(&self.pool).await?;
        Ok(Page {
            items,
            total,
            limit,
            offset: page.offset,
        })
    }

    /// Every filtered row, for internal lookups that are not paginated
    pub async fn select_any(&self, mut filter: Filter) -> Result<Vec<T>, DatabaseError> {
        if !filter.has_order() {
            filter.order(T::ORDER)?;
        }
        QueryBuilder::<T>::new(filter).select_all(&self.pool).await
    }

    /// Fetch an active row by id
    pub async fn get(&self, id: i64) -> Result<T, DatabaseError> {
        self.get_by("id", id).await
    }

    /// Fetch an active row by a unique column of the primary table
    pub async fn get_by(&self, column: &str, value: impl Into<SqlValue>) -> Result<T, DatabaseError> {
        let value = value.into();
        self.check_active(column, &value).await?;
        let mut filter = T::filter()?;
        filter.eq(&T::column(column), value)?;
        QueryBuilder::<T>::new(filter)
            .select_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::NotExists(format!("No existe {}", T::LABEL)))
    }

    async fn check_active(&self, column: &str, value: &SqlValue) -> Result<(), DatabaseError> {
        let sql = format!(
            "SELECT estatus FROM {} WHERE {} = $1 LIMIT 1",
            quote_identifier(T::TABLE),
            quote_identifier(column)
        );
        let q = crate::database::query_builder::bind_param_query(sqlx::query(&sql), value);
        let row = q.fetch_optional(&self.pool).await?;
        let estatus: String = match row {
            Some(row) => sqlx::Row::try_get(&row, "estatus")?,
            None => return Err(DatabaseError::NotExists(format!("No existe {}", T::LABEL))),
        };
        if estatus != ESTATUS_ACTIVE {
            return Err(DatabaseError::IsDeleted(format!("No es activo {}, está eliminado", T::LABEL)));
        }
        Ok(())
    }
}
