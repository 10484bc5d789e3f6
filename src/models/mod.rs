// src/models/mod.rs
pub mod aluno;
pub mod disciplina;

use crate::error::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Verificação sintática de email: `local@dominio.tld`, sem espaços,
/// sem rótulos de domínio vazios nem ponto final.
pub fn email_valido(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| {
            Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("regex de email é constante")
        })
        .is_match(email)
}

/// Distingue campo ausente (`None`) de `null` explícito (`Some(None)`) nos patches.
/// Usar com `#[serde(default, deserialize_with = "campo_patch")]`.
pub(crate) fn campo_patch<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub(crate) fn obrigatorio<T>(campo: &Option<T>, nome: &str) -> AppResult {
    match campo {
        Some(_) => Ok(()),
        None => Err(AppError::ValidationError(format!("campo '{}' é obrigatório", nome))),
    }
}

/// Um campo obrigatório pode faltar num patch, mas não pode ser anulado.
pub(crate) fn nao_nulo<T>(campo: &Option<Option<T>>, nome: &str) -> AppResult {
    match campo {
        Some(None) => Err(AppError::ValidationError(format!("campo '{}' não pode ser nulo", nome))),
        _ => Ok(()),
    }
}

pub(crate) fn validar_email(email: &str) -> AppResult {
    if email_valido(email) {
        Ok(())
    } else {
        Err(AppError::ValidationError(format!("email '{}' inválido", email)))
    }
}
