// src/models/disciplina.rs
use super::{campo_patch, nao_nulo, obrigatorio};
use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Linha da tabela `disciplinas`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Disciplina {
    pub id: i64,
    pub nome: String,
    pub codigo: String, // único
    pub carga_horaria: i64,
    pub professor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NovaDisciplina {
    pub nome: Option<String>,
    pub codigo: Option<String>,
    pub carga_horaria: Option<i64>,
    pub professor: Option<String>,
}

impl NovaDisciplina {
    pub fn validar(&self) -> AppResult {
        obrigatorio(&self.nome, "nome")?;
        obrigatorio(&self.codigo, "codigo")?;
        obrigatorio(&self.carga_horaria, "carga_horaria")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DisciplinaPatch {
    #[serde(default, deserialize_with = "campo_patch")]
    pub nome: Option<Option<String>>,
    #[serde(default, deserialize_with = "campo_patch")]
    pub codigo: Option<Option<String>>,
    #[serde(default, deserialize_with = "campo_patch")]
    pub carga_horaria: Option<Option<i64>>,
    #[serde(default, deserialize_with = "campo_patch")]
    pub professor: Option<Option<String>>,
}

impl DisciplinaPatch {
    pub fn validar(&self) -> AppResult {
        nao_nulo(&self.nome, "nome")?;
        nao_nulo(&self.codigo, "codigo")?;
        nao_nulo(&self.carga_horaria, "carga_horaria")
    }
}
