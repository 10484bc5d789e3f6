// src/state.rs
use sqlx::SqlitePool;

/// Estado partilhado pelos handlers: a ligação à base de dados,
/// criada uma vez no arranque.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

// Permite extrair o pool da DB diretamente
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}
