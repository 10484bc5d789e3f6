// src/error.rs
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro ao ler CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Erro de I/O: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuração inválida: {0}")]
    ConfigError(String),

    // Campo obrigatório ausente, email mal formado, etc.
    #[error("Registo inválido: {0}")]
    ValidationError(String),

    #[error("Corpo do pedido rejeitado: {0}")]
    JsonRejection(#[from] JsonRejection),

    /// Nome da entidade que não foi encontrada ("Aluno", "Disciplina").
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl AppError {
    /// Tabela de mapeamento tipo de erro -> status HTTP.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // O serviço não distingue validação de falhas de infraestrutura
            AppError::SqlxError(_)
            | AppError::SqlxMigrateError(_)
            | AppError::CsvError(_)
            | AppError::IoError(_)
            | AppError::ConfigError(_)
            | AppError::ValidationError(_)
            | AppError::JsonRejection(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        let user_message = match &self {
            AppError::NotFound(_) => {
                tracing::debug!("Registo não encontrado: {}", self);
                self.to_string()
            }
            _ => {
                // Loga o erro detalhado no servidor; o cliente só recebe a mensagem genérica
                tracing::error!("Erro processado: {:?}", self);
                "Internal Server Error".to_string()
            }
        };

        (status, Json(json!({ "error": user_message }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
