use basearch_api::StoreError;
use basearch_db::models::{AttributeValue, ColumnDef, EntityTable, ValueKind, ID_COLUMN};
use basearch_db::Record;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Postgres, Row};
use uuid::Uuid;

pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// A trait for converting a database row into a store record.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion for rows of `table`.
    fn try_from_row(table: &'static EntityTable, row: &R) -> Result<Self, StoreError>;
}

impl TryFromRow<PgRow> for Record {
    fn try_from_row(table: &'static EntityTable, row: &PgRow) -> Result<Self, StoreError> {
        let id: Uuid = row
            .try_get(ID_COLUMN)
            .map_err(|e| decode_error(table, ID_COLUMN, e))?;

        let mut record = Record::new(table.name, id);
        for column in table.columns {
            record.set(column.name, get_column_value(table, column, row)?);
        }
        Ok(record)
    }
}

/// Reads one registered column, rejecting NULL in a required column.
pub fn get_column_value(
    table: &'static EntityTable,
    column: &'static ColumnDef,
    row: &PgRow,
) -> Result<Option<AttributeValue>, StoreError> {
    let value = match column.kind {
        ValueKind::Text => row
            .try_get::<Option<String>, _>(column.name)
            .map(|v| v.map(AttributeValue::Text)),
        ValueKind::Integer => row
            .try_get::<Option<i64>, _>(column.name)
            .map(|v| v.map(AttributeValue::Integer)),
        ValueKind::Boolean => row
            .try_get::<Option<bool>, _>(column.name)
            .map(|v| v.map(AttributeValue::Boolean)),
        ValueKind::Uuid => row
            .try_get::<Option<Uuid>, _>(column.name)
            .map(|v| v.map(AttributeValue::Uuid)),
    }
    .map_err(|e| decode_error(table, column.name, e))?;

    if value.is_none() && !column.nullable {
        return Err(StoreError::Decode {
            table: table.name,
            column: column.name,
            message: "NULL in a required column".to_string(),
        });
    }
    Ok(value)
}

pub fn bind_value<'q>(query: PgQuery<'q>, value: &'q AttributeValue) -> PgQuery<'q> {
    match value {
        AttributeValue::Text(v) => query.bind(v.as_str()),
        AttributeValue::Integer(v) => query.bind(*v),
        AttributeValue::Boolean(v) => query.bind(*v),
        AttributeValue::Uuid(v) => query.bind(*v),
    }
}

/// Binds a NULL typed after the column, so Postgres can infer the parameter type.
pub fn bind_null(query: PgQuery<'_>, kind: ValueKind) -> PgQuery<'_> {
    match kind {
        ValueKind::Text => query.bind(None::<String>),
        ValueKind::Integer => query.bind(None::<i64>),
        ValueKind::Boolean => query.bind(None::<bool>),
        ValueKind::Uuid => query.bind(None::<Uuid>),
    }
}

fn decode_error(table: &'static EntityTable, column: &'static str, err: sqlx::Error) -> StoreError {
    StoreError::Decode {
        table: table.name,
        column,
        message: err.to_string(),
    }
}
