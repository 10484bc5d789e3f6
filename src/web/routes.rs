// src/web/routes.rs
use crate::{
    state::AppState,
    web::{aluno_handlers, disciplina_handlers},
};
use axum::{routing::get, Router};

pub fn create_router(app_state: AppState) -> Router {
    let aluno_routes = Router::new()
        .route("/alunos", get(aluno_handlers::listar_alunos).post(aluno_handlers::criar_aluno))
        .route(
            "/alunos/{id}",
            get(aluno_handlers::buscar_aluno)
                .put(aluno_handlers::atualizar_aluno)
                .delete(aluno_handlers::remover_aluno),
        );

    let disciplina_routes = Router::new()
        .route(
            "/disciplinas",
            get(disciplina_handlers::listar_disciplinas).post(disciplina_handlers::criar_disciplina),
        )
        .route(
            "/disciplinas/{id}",
            get(disciplina_handlers::buscar_disciplina)
                .put(disciplina_handlers::atualizar_disciplina)
                .delete(disciplina_handlers::remover_disciplina),
        );

    Router::new()
        .merge(aluno_routes)
        .merge(disciplina_routes)
        .with_state(app_state)
}
