// src/web/mod.rs
pub mod aluno_handlers;
pub mod disciplina_handlers;
pub mod routes;

use crate::error::{AppError, AppResult};

/// Id do path. Um id que não é inteiro não corresponde a nenhum registo.
pub(crate) fn parse_id(raw: &str, entidade: &'static str) -> AppResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        tracing::debug!("Id '{}' inválido para {}", raw, entidade);
        AppError::NotFound(entidade)
    })
}
