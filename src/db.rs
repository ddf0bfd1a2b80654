use std::str::FromStr;

use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqlitePool,
};

use crate::{config::Config, error::StartupError, model::seed_users};

const CREATE_USERS_TABLE: &str = r#"CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL
    );"#;

const CREATE_TODOS_TABLE: &str = r#"CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        task TEXT NOT NULL,
        user_id TEXT,
        FOREIGN KEY(user_id) REFERENCES users(id)
    );"#;

/// Opens the shared connection pool, creating the database file if it does not exist.
///
/// Every pooled connection enforces foreign keys.
pub async fn connect(config: &Config) -> Result<SqlitePool, StartupError> {
    let url = &config.database_url;
    let open_err = |source| StartupError::Open {
        url: url.clone(),
        source,
    };

    // Check if the database exists, if not, create it
    if !Sqlite::database_exists(url).await.unwrap_or(false) {
        tracing::info!(%url, "creating database");
        Sqlite::create_database(url).await.map_err(open_err)?;
    } else {
        tracing::debug!(%url, "database already exists");
    }

    let options = SqliteConnectOptions::from_str(url)
        .map_err(open_err)?
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(open_err)?;

    tracing::info!(max_connections = config.max_connections, "connected to database");
    Ok(pool)
}

/// Creates the tables and seed users if absent. Safe to run on every start.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), StartupError> {
    create_and_seed(pool).await.map_err(StartupError::Schema)?;
    tracing::info!("todo schema ready");
    Ok(())
}

async fn create_and_seed(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(CREATE_USERS_TABLE).execute(&mut *tx).await?;
    sqlx::query(CREATE_TODOS_TABLE).execute(&mut *tx).await?;

    for user in seed_users() {
        sqlx::query("INSERT OR IGNORE INTO users (id, name) VALUES (?, ?)")
            .bind(&user.id)
            .bind(&user.name)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await
}

#[cfg(test)]
pub(crate) async fn test_pool() -> (tempfile::TempDir, SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        database_url: format!("sqlite://{}", dir.path().join("todos.db").display()),
        max_connections: 4,
    };
    let pool = connect(&config).await.unwrap();
    init_schema(&pool).await.unwrap();
    (dir, pool)
}
