// src/web/disciplina_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::disciplina::{Disciplina, DisciplinaPatch, NovaDisciplina},
    services::disciplina_service,
    state::AppState,
    web::parse_id,
};
use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
};

const ENTIDADE: &str = "Disciplina";

pub async fn listar_disciplinas(State(state): State<AppState>) -> AppResult<Json<Vec<Disciplina>>> {
    Ok(Json(disciplina_service::listar(&state.db_pool).await?))
}

pub async fn buscar_disciplina(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Disciplina>> {
    let id = parse_id(&id, ENTIDADE)?;
    disciplina_service::buscar(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(ENTIDADE))
}

pub async fn criar_disciplina(
    State(state): State<AppState>,
    payload: Result<Json<NovaDisciplina>, JsonRejection>,
) -> AppResult<Json<Disciplina>> {
    let Json(nova) = payload?;
    Ok(Json(disciplina_service::criar(&state.db_pool, &nova).await?))
}

pub async fn atualizar_disciplina(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DisciplinaPatch>, JsonRejection>,
) -> AppResult<Json<Disciplina>> {
    let id = parse_id(&id, ENTIDADE)?;
    let Json(patch) = payload?;
    disciplina_service::atualizar(&state.db_pool, id, patch)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(ENTIDADE))
}

pub async fn remover_disciplina(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, ENTIDADE)?;
    match disciplina_service::remover(&state.db_pool, id).await? {
        true => Ok(StatusCode::NO_CONTENT),
        false => Err(AppError::NotFound(ENTIDADE)),
    }
}
