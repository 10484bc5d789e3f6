// src/db.rs
use crate::error::AppResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

pub async fn create_db_pool(database_url: &str) -> AppResult<SqlitePool> {
    tracing::info!("Ligando à base de dados: {}", database_url);
    let options = SqliteConnectOptions::from_str(database_url)?;
    pool_from_options(options).await
}

/// Cria o pool e sincroniza o esquema (tabelas criadas se não existirem).
pub async fn pool_from_options(options: SqliteConnectOptions) -> AppResult<SqlitePool> {
    // Criar o ficheiro se não existir; esperar em vez de falhar se a DB estiver ocupada
    let options = options
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Executando migrações da base de dados...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrações concluídas.");

    Ok(pool)
}

/// Pool sobre um ficheiro SQLite descartável, para testes.
#[cfg(test)]
pub async fn test_pool() -> (SqlitePool, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let options = SqliteConnectOptions::new().filename(dir.path().join("teste.db"));
    let pool = pool_from_options(options).await.unwrap();
    (pool, dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn schema_sync_creates_both_tables() {
        let (pool, _dir) = test_pool().await;

        let tabelas: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('alunos', 'disciplinas') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(tabelas, vec!["alunos", "disciplinas"]);
    }

    #[tokio::test]
    async fn schema_sync_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repetido.db");

        let primeiro = pool_from_options(SqliteConnectOptions::new().filename(&path))
            .await
            .unwrap();
        primeiro.close().await;

        let segundo = pool_from_options(SqliteConnectOptions::new().filename(&path)).await;
        assert!(segundo.is_ok());
    }
}
