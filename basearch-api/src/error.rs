use thiserror::Error;

/// Failures surfaced by the entity access layer and everything built on it.
///
/// "Not found" is deliberately absent: a lookup that matches nothing returns
/// `Ok(None)`.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Ambiguous result: {matches} {entity} rows matched a lookup expected to be unique")]
    AmbiguousResult { entity: &'static str, matches: usize },

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AccessError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AccessError::InvalidArgument(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AccessError::InvalidArgument(_))
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, AccessError::AmbiguousResult { .. })
    }
}

pub type AccessResult<T> = Result<T, AccessError>;

/// Failures raised by a store gateway implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("No {table} row with id {id}")]
    MissingRow { table: &'static str, id: String },

    #[error("Could not decode column '{column}' of {table}: {message}")]
    Decode {
        table: &'static str,
        column: &'static str,
        message: String,
    },

    #[error("{column} is not a registered column of {table}")]
    UnknownColumn { table: &'static str, column: &'static str },

    #[error("Transaction has been consumed")]
    TransactionConsumed,

    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Problems parsing or building a [`crate::Locale`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("locale tag is empty")]
    Empty,

    #[error("locale {part} '{value}' is longer than {max} characters")]
    TooLong {
        part: &'static str,
        value: String,
        max: usize,
    },

    #[error("locale {part} '{value}' must be alphanumeric")]
    Malformed { part: &'static str, value: String },

    #[error("locale tag '{0}' has more than three parts")]
    TooManyParts(String),

    #[error("locale variant requires a region")]
    VariantWithoutRegion,
}

impl From<LocaleError> for AccessError {
    fn from(err: LocaleError) -> Self {
        AccessError::InvalidArgument(err.to_string())
    }
}
