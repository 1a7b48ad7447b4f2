//! Database initialization and cleanup utilities
//!
//! Runs the SQL files under `migrations/` (ascending) and `cleanup/` (descending).

use sqlx::PgPool;
use std::cmp::Reverse;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Create the schema and seed the language catalog
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use basearch_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    run_scripts(pool, "migrations", ScriptOrder::Ascending).await
}

/// Drop everything `init_database` created, including the migration history
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    run_scripts(pool, "cleanup", ScriptOrder::Descending).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptOrder {
    Ascending,
    Descending,
}

/// `.sql` files of a directory under the crate root, sorted by file name.
fn sql_scripts(dir_name: &str, order: ScriptOrder) -> std::io::Result<Vec<PathBuf>> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(dir_name);
    let mut scripts = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    scripts.retain(|path| path.extension().is_some_and(|ext| ext == "sql"));

    match order {
        ScriptOrder::Ascending => scripts.sort_by_key(|path| path.file_name().map(OsStr::to_os_string)),
        ScriptOrder::Descending => {
            scripts.sort_by_key(|path| Reverse(path.file_name().map(OsStr::to_os_string)))
        }
    }
    Ok(scripts)
}

async fn run_scripts(pool: &PgPool, dir_name: &str, order: ScriptOrder) -> Result<(), sqlx::Error> {
    for script in sql_scripts(dir_name, order)? {
        let sql = fs::read_to_string(&script)?;
        tracing::debug!(script = %script.display(), "running sql script");
        sqlx::raw_sql(&sql).execute(pool).await?;
    }
    Ok(())
}
