//! sqlx implementation of the store gateway.
//!
//! SQL is assembled from the static table registry only; every value is a bound
//! parameter.

use async_trait::async_trait;
use basearch_api::StoreError;
use basearch_db::models::{EntityTable, ID_COLUMN};
use basearch_db::{Constraint, Record, StoreGateway};
use uuid::Uuid;

use crate::executor::Executor;
use crate::utils::{bind_null, bind_value, TryFromRow};

/// Store gateway running every statement on the unit of work's transaction.
#[derive(Clone)]
pub struct PgStoreGateway {
    pub executor: Executor,
}

impl PgStoreGateway {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

fn column_list(table: &EntityTable) -> String {
    std::iter::once(ID_COLUMN)
        .chain(table.columns.iter().map(|c| c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn select_by_id_sql(table: &EntityTable) -> String {
    format!("SELECT {} FROM {} WHERE {ID_COLUMN} = $1", column_list(table), table.name)
}

pub(crate) fn select_sql(table: &'static EntityTable, constraints: &[Constraint]) -> Result<String, StoreError> {
    let mut sql = format!("SELECT {} FROM {}", column_list(table), table.name);
    for (i, constraint) in constraints.iter().enumerate() {
        if table.column(constraint.column).is_none() {
            return Err(StoreError::UnknownColumn {
                table: table.name,
                column: constraint.column,
            });
        }
        sql.push_str(if i == 0 { " WHERE " } else { " AND " });
        sql.push_str(&format!("{} = ${}", constraint.column, i + 1));
    }
    Ok(sql)
}

pub(crate) fn update_sql(table: &EntityTable) -> String {
    let assignments = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", c.name, i + 2))
        .collect::<Vec<_>>()
        .join(", ");
    format!("UPDATE {} SET {assignments} WHERE {ID_COLUMN} = $1", table.name)
}

#[async_trait]
impl StoreGateway for PgStoreGateway {
    async fn fetch_by_id(&self, table: &'static EntityTable, id: Uuid) -> Result<Option<Record>, StoreError> {
        let sql = select_by_id_sql(table);
        let query = sqlx::query(&sql).bind(id);

        let row = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(StoreError::TransactionConsumed)?;
            query.fetch_optional(&mut **transaction).await?
        };
        row.map(|row| Record::try_from_row(table, &row)).transpose()
    }

    async fn query(
        &self,
        table: &'static EntityTable,
        constraints: &[Constraint],
    ) -> Result<Vec<Record>, StoreError> {
        let sql = select_sql(table, constraints)?;
        let mut query = sqlx::query(&sql);
        for constraint in constraints {
            query = bind_value(query, &constraint.value);
        }

        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(StoreError::TransactionConsumed)?;
            query.fetch_all(&mut **transaction).await?
        };

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(Record::try_from_row(table, &row)?);
        }
        Ok(records)
    }

    async fn update(&self, table: &'static EntityTable, record: &Record) -> Result<(), StoreError> {
        let sql = update_sql(table);
        let mut query = sqlx::query(&sql).bind(record.id());
        for column in table.columns {
            query = match record.get(column.name) {
                Some(value) => bind_value(query, value),
                None => bind_null(query, column.kind),
            };
        }

        let result = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or(StoreError::TransactionConsumed)?;
            query.execute(&mut **transaction).await?
        };

        if result.rows_affected() == 0 {
            return Err(StoreError::MissingRow {
                table: table.name,
                id: record.id().to_string(),
            });
        }
        Ok(())
    }
}
