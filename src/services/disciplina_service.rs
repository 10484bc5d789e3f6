// src/services/disciplina_service.rs
use crate::{
    error::AppResult,
    models::disciplina::{Disciplina, DisciplinaPatch, NovaDisciplina},
};
use sqlx::SqlitePool;

pub async fn listar(db_pool: &SqlitePool) -> AppResult<Vec<Disciplina>> {
    tracing::debug!("Buscando todas as disciplinas...");
    let disciplinas = sqlx::query_as::<_, Disciplina>(
        "SELECT id, nome, codigo, carga_horaria, professor FROM disciplinas ORDER BY id ASC",
    )
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Encontradas {} disciplinas.", disciplinas.len());
    Ok(disciplinas)
}

pub async fn buscar(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Disciplina>> {
    tracing::debug!("Buscando disciplina por ID: {}", id);
    let disciplina = sqlx::query_as::<_, Disciplina>(
        "SELECT id, nome, codigo, carga_horaria, professor FROM disciplinas WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(disciplina)
}

/// Código duplicado falha na constraint UNIQUE.
pub async fn criar(db_pool: &SqlitePool, nova: &NovaDisciplina) -> AppResult<Disciplina> {
    nova.validar()?;

    let disciplina = sqlx::query_as::<_, Disciplina>(
        r#"
        INSERT INTO disciplinas (nome, codigo, carga_horaria, professor)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, nome, codigo, carga_horaria, professor
        "#,
    )
    .bind(&nova.nome)
    .bind(&nova.codigo)
    .bind(nova.carga_horaria)
    .bind(&nova.professor)
    .fetch_one(db_pool)
    .await?;

    tracing::info!("✅ Disciplina {} criada ({}).", disciplina.id, disciplina.codigo);
    Ok(disciplina)
}

pub async fn atualizar(
    db_pool: &SqlitePool,
    id: i64,
    patch: DisciplinaPatch,
) -> AppResult<Option<Disciplina>> {
    patch.validar()?;
    tracing::info!("Atualizando disciplina: {}", id);

    let disciplina = sqlx::query_as::<_, Disciplina>(
        r#"
        UPDATE disciplinas
        SET
            nome = CASE WHEN ?1 THEN ?2 ELSE nome END,
            codigo = CASE WHEN ?3 THEN ?4 ELSE codigo END,
            carga_horaria = CASE WHEN ?5 THEN ?6 ELSE carga_horaria END,
            professor = CASE WHEN ?7 THEN ?8 ELSE professor END
        WHERE id = ?9
        RETURNING id, nome, codigo, carga_horaria, professor
        "#,
    )
    .bind(patch.nome.is_some())
    .bind(patch.nome.flatten())
    .bind(patch.codigo.is_some())
    .bind(patch.codigo.flatten())
    .bind(patch.carga_horaria.is_some())
    .bind(patch.carga_horaria.flatten())
    .bind(patch.professor.is_some())
    .bind(patch.professor.flatten())
    .bind(id)
    .fetch_optional(db_pool)
    .await?;

    if disciplina.is_none() {
        tracing::warn!("Falha ao atualizar: disciplina '{}' não encontrada.", id);
    }
    Ok(disciplina)
}

pub async fn remover(db_pool: &SqlitePool, id: i64) -> AppResult<bool> {
    let rows_affected = sqlx::query("DELETE FROM disciplinas WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao remover: disciplina '{}' não encontrada.", id);
    } else {
        tracing::info!("🗑️ Disciplina {} removida.", id);
    }
    Ok(rows_affected > 0)
}
