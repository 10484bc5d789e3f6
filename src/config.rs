// src/config.rs
use crate::error::{AppError, AppResult};
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://banco.db";
pub const DEFAULT_PORT: u16 = 3000;

/// Configuração lida do ambiente. O `.env` é carregado pelos binários no arranque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(env::var("DATABASE_URL").ok(), env::var("PORT").ok())
    }

    fn from_vars(database_url: Option<String>, port: Option<String>) -> AppResult<Self> {
        let database_url = database_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match port {
            Some(p) => p
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::ConfigError(format!("PORT '{}' inválida: {}", p, e)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}

/// Inicializa o logging (tracing) com filtro vindo de RUST_LOG.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer())
        .init();
}
