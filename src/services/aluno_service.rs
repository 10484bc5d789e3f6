// src/services/aluno_service.rs
use crate::{
    error::AppResult,
    models::aluno::{Aluno, AlunoPatch, NovoAluno},
};
use sqlx::SqlitePool;

/// Busca todos os alunos, ordenados por id.
pub async fn listar(db_pool: &SqlitePool) -> AppResult<Vec<Aluno>> {
    tracing::debug!("Buscando todos os alunos...");
    let alunos = sqlx::query_as::<_, Aluno>(
        r#"
        SELECT id, nome, matricula, data_nascimento, endereco, email
        FROM alunos
        ORDER BY id ASC
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Encontrados {} alunos.", alunos.len());
    Ok(alunos)
}

pub async fn buscar(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Aluno>> {
    tracing::debug!("Buscando aluno por ID: {}", id);
    let aluno = sqlx::query_as::<_, Aluno>(
        r#"
        SELECT id, nome, matricula, data_nascimento, endereco, email
        FROM alunos
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(aluno)
}

/// Insere um aluno e devolve a linha criada (com o id gerado).
/// Email duplicado falha na constraint UNIQUE da tabela.
pub async fn criar(db_pool: &SqlitePool, novo: &NovoAluno) -> AppResult<Aluno> {
    novo.validar()?;

    let aluno = sqlx::query_as::<_, Aluno>(
        r#"
        INSERT INTO alunos (nome, matricula, data_nascimento, endereco, email)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, nome, matricula, data_nascimento, endereco, email
        "#,
    )
    .bind(&novo.nome)
    .bind(&novo.matricula)
    .bind(novo.data_nascimento)
    .bind(&novo.endereco)
    .bind(&novo.email)
    .fetch_one(db_pool)
    .await?;

    tracing::info!("✅ Aluno {} criado ({}).", aluno.id, aluno.email);
    Ok(aluno)
}

/// Aplica o patch numa única instrução e devolve a linha já atualizada.
/// `None` se nenhum aluno tiver este id.
pub async fn atualizar(db_pool: &SqlitePool, id: i64, patch: AlunoPatch) -> AppResult<Option<Aluno>> {
    patch.validar()?;
    tracing::info!("Atualizando aluno: {}", id);

    // Cada coluna: (foi enviada?, novo valor). Não enviada => mantém o valor atual.
    let aluno = sqlx::query_as::<_, Aluno>(
        r#"
        UPDATE alunos
        SET
            nome = CASE WHEN ?1 THEN ?2 ELSE nome END,
            matricula = CASE WHEN ?3 THEN ?4 ELSE matricula END,
            data_nascimento = CASE WHEN ?5 THEN ?6 ELSE data_nascimento END,
            endereco = CASE WHEN ?7 THEN ?8 ELSE endereco END,
            email = CASE WHEN ?9 THEN ?10 ELSE email END
        WHERE id = ?11
        RETURNING id, nome, matricula, data_nascimento, endereco, email
        "#,
    )
    .bind(patch.nome.is_some())
    .bind(patch.nome.flatten())
    .bind(patch.matricula.is_some())
    .bind(patch.matricula.flatten())
    .bind(patch.data_nascimento.is_some())
    .bind(patch.data_nascimento.flatten())
    .bind(patch.endereco.is_some())
    .bind(patch.endereco.flatten())
    .bind(patch.email.is_some())
    .bind(patch.email.flatten())
    .bind(id)
    .fetch_optional(db_pool)
    .await?;

    if aluno.is_none() {
        tracing::warn!("Falha ao atualizar: aluno '{}' não encontrado.", id);
    }
    Ok(aluno)
}

/// `true` se uma linha foi apagada.
pub async fn remover(db_pool: &SqlitePool, id: i64) -> AppResult<bool> {
    let rows_affected = sqlx::query("DELETE FROM alunos WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao remover: aluno '{}' não encontrado.", id);
        Ok(false)
    } else {
        tracing::info!("🗑️ Aluno {} removido.", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::test_pool, error::AppError};
    use chrono::NaiveDate;

    fn ana() -> NovoAluno {
        NovoAluno {
            nome: Some("Ana Silva".into()),
            matricula: Some("2024001".into()),
            data_nascimento: NaiveDate::from_ymd_opt(2001, 5, 10),
            endereco: Some("Rua A, 10".into()),
            email: Some("ana@example.com".into()),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_same_record() {
        let (pool, _dir) = test_pool().await;

        let criado = criar(&pool, &ana()).await.unwrap();
        assert_eq!(criado.id, 1);
        assert_eq!(criado.nome, "Ana Silva");
        assert_eq!(criado.data_nascimento, NaiveDate::from_ymd_opt(2001, 5, 10));

        let lido = buscar(&pool, criado.id).await.unwrap();
        assert_eq!(lido, Some(criado));
    }

    #[tokio::test]
    async fn list_is_ordered_and_empty_when_no_rows() {
        let (pool, _dir) = test_pool().await;
        assert!(listar(&pool).await.unwrap().is_empty());

        criar(&pool, &ana()).await.unwrap();
        let bruno = NovoAluno {
            nome: Some("Bruno".into()),
            email: Some("bruno@example.com".into()),
            ..ana()
        };
        criar(&pool, &bruno).await.unwrap();

        let ids: Vec<i64> = listar(&pool).await.unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn duplicate_email_fails_and_keeps_first() {
        let (pool, _dir) = test_pool().await;
        let primeiro = criar(&pool, &ana()).await.unwrap();

        let err = criar(&pool, &ana()).await.unwrap_err();
        assert!(matches!(err, AppError::SqlxError(_)));

        assert_eq!(buscar(&pool, primeiro.id).await.unwrap(), Some(primeiro));
        assert_eq!(listar(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let (pool, _dir) = test_pool().await;
        let original = criar(&pool, &ana()).await.unwrap();

        let patch = AlunoPatch {
            endereco: Some(Some("Rua B, 20".into())),
            ..Default::default()
        };
        let atualizado = atualizar(&pool, original.id, patch).await.unwrap().unwrap();

        assert_eq!(atualizado.endereco.as_deref(), Some("Rua B, 20"));
        assert_eq!(atualizado.nome, original.nome);
        assert_eq!(atualizado.email, original.email);
        assert_eq!(atualizado.data_nascimento, original.data_nascimento);
        assert_eq!(buscar(&pool, original.id).await.unwrap(), Some(atualizado));
    }

    #[tokio::test]
    async fn update_can_clear_optional_field() {
        let (pool, _dir) = test_pool().await;
        let original = criar(&pool, &ana()).await.unwrap();

        let patch = AlunoPatch { data_nascimento: Some(None), ..Default::default() };
        let atualizado = atualizar(&pool, original.id, patch).await.unwrap().unwrap();
        assert_eq!(atualizado.data_nascimento, None);
    }

    #[tokio::test]
    async fn update_and_delete_missing_id() {
        let (pool, _dir) = test_pool().await;
        assert_eq!(atualizar(&pool, 42, AlunoPatch::default()).await.unwrap(), None);
        assert!(!remover(&pool, 42).await.unwrap());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let (pool, _dir) = test_pool().await;
        let primeiro = criar(&pool, &ana()).await.unwrap();
        assert!(remover(&pool, primeiro.id).await.unwrap());
        assert_eq!(buscar(&pool, primeiro.id).await.unwrap(), None);

        let segundo = criar(&pool, &ana()).await.unwrap();
        assert!(segundo.id > primeiro.id);
    }
}
