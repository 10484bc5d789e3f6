// src/web/aluno_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::aluno::{Aluno, AlunoPatch, NovoAluno},
    services::aluno_service,
    state::AppState,
    web::parse_id,
};
use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
};

const ENTIDADE: &str = "Aluno";

// GET /alunos
pub async fn listar_alunos(State(state): State<AppState>) -> AppResult<Json<Vec<Aluno>>> {
    let alunos = aluno_service::listar(&state.db_pool).await?;
    Ok(Json(alunos))
}

// GET /alunos/{id}
pub async fn buscar_aluno(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Aluno>> {
    let id = parse_id(&id, ENTIDADE)?;
    aluno_service::buscar(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(ENTIDADE))
}

// POST /alunos
pub async fn criar_aluno(
    State(state): State<AppState>,
    payload: Result<Json<NovoAluno>, JsonRejection>,
) -> AppResult<Json<Aluno>> {
    let Json(novo) = payload?;
    let aluno = aluno_service::criar(&state.db_pool, &novo).await?;
    Ok(Json(aluno))
}

// PUT /alunos/{id}
pub async fn atualizar_aluno(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AlunoPatch>, JsonRejection>,
) -> AppResult<Json<Aluno>> {
    let id = parse_id(&id, ENTIDADE)?;
    let Json(patch) = payload?;
    aluno_service::atualizar(&state.db_pool, id, patch)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(ENTIDADE))
}

// DELETE /alunos/{id}
pub async fn remover_aluno(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, ENTIDADE)?;
    if aluno_service::remover(&state.db_pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(ENTIDADE))
    }
}
