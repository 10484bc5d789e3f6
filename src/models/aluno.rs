// src/models/aluno.rs
use super::{campo_patch, nao_nulo, obrigatorio, validar_email};
use crate::error::AppResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Linha da tabela `alunos`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Aluno {
    pub id: i64, // SQLite usa i64 para inteiros
    pub nome: String,
    pub matricula: String,
    pub data_nascimento: Option<NaiveDate>, // YYYY-MM-DD
    pub endereco: Option<String>,
    pub email: String,
}

/// Dados para criar um aluno (corpo do POST ou linha do CSV).
/// Tudo opcional na desserialização; `validar` decide o que falta.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NovoAluno {
    pub nome: Option<String>,
    pub matricula: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub endereco: Option<String>,
    pub email: Option<String>,
}

impl NovoAluno {
    pub fn validar(&self) -> AppResult {
        obrigatorio(&self.nome, "nome")?;
        obrigatorio(&self.matricula, "matricula")?;
        match &self.email {
            Some(email) => validar_email(email),
            None => obrigatorio(&self.email, "email"),
        }
    }
}

/// Atualização parcial (PUT): `None` = não mexer, `Some(None)` = NULL.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AlunoPatch {
    #[serde(default, deserialize_with = "campo_patch")]
    pub nome: Option<Option<String>>,
    #[serde(default, deserialize_with = "campo_patch")]
    pub matricula: Option<Option<String>>,
    #[serde(default, deserialize_with = "campo_patch")]
    pub data_nascimento: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "campo_patch")]
    pub endereco: Option<Option<String>>,
    #[serde(default, deserialize_with = "campo_patch")]
    pub email: Option<Option<String>>,
}

impl AlunoPatch {
    pub fn validar(&self) -> AppResult {
        nao_nulo(&self.nome, "nome")?;
        nao_nulo(&self.matricula, "matricula")?;
        nao_nulo(&self.email, "email")?;
        if let Some(Some(email)) = &self.email {
            validar_email(email)?;
        }
        Ok(())
    }
}
