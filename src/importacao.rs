// src/importacao.rs
//! Carga de alunos e disciplinas a partir de CSV.
//!
//! Cada linha é independente: uma falha (parse ou insert) é registada e a
//! carga continua. Os inserts são aguardados um a um, pelo que quando a
//! função devolve todas as linhas já foram gravadas ou rejeitadas.
use crate::{
    error::AppResult,
    models::{aluno::NovoAluno, disciplina::NovaDisciplina},
    services::{aluno_service, disciplina_service},
};
use serde::de::DeserializeOwned;
use sqlx::SqlitePool;

pub const ALUNOS_CSV: &str = "alunos.csv";
pub const DISCIPLINAS_CSV: &str = "disciplinas.csv";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResumoImportacao {
    pub inseridos: usize,
    pub falhas: usize,
}

/// Linha do CSV (1 = cabeçalho) e o registo lido, ou o erro de parse.
type Linha<T> = (u64, Result<T, csv::Error>);

/// Lê o CSV inteiro; o cabeçalho define o mapeamento coluna -> campo.
/// Colunas a mais (com ou sem cabeçalho) são ignoradas, células vazias viram `None`.
fn ler_linhas<T: DeserializeOwned>(conteudo: &str) -> AppResult<Vec<Linha<T>>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(conteudo.as_bytes());

    // Cabeçalho ilegível invalida o ficheiro todo
    reader.headers()?;

    let linhas = reader
        .deserialize::<T>()
        .enumerate()
        .map(|(i, registo)| {
            let linha = match &registo {
                Err(e) => e.position().map(|p| p.line()).unwrap_or(i as u64 + 2),
                Ok(_) => i as u64 + 2,
            };
            (linha, registo)
        })
        .collect();

    Ok(linhas)
}

pub async fn importar_alunos(db_pool: &SqlitePool, conteudo: &str) -> AppResult<ResumoImportacao> {
    let mut resumo = ResumoImportacao::default();

    for (linha, registo) in ler_linhas::<NovoAluno>(conteudo)? {
        let resultado = match registo {
            Ok(novo) => aluno_service::criar(db_pool, &novo).await.map(|_| ()),
            Err(e) => Err(e.into()),
        };
        match resultado {
            Ok(()) => {
                resumo.inseridos += 1;
                tracing::info!("Aluno da linha {} inserido.", linha);
            }
            Err(e) => {
                resumo.falhas += 1;
                tracing::error!("Erro ao inserir aluno da linha {}: {}", linha, e);
            }
        }
    }

    Ok(resumo)
}

pub async fn importar_disciplinas(
    db_pool: &SqlitePool,
    conteudo: &str,
) -> AppResult<ResumoImportacao> {
    let mut resumo = ResumoImportacao::default();

    for (linha, registo) in ler_linhas::<NovaDisciplina>(conteudo)? {
        let resultado = match registo {
            Ok(nova) => disciplina_service::criar(db_pool, &nova).await.map(|_| ()),
            Err(e) => Err(e.into()),
        };
        match resultado {
            Ok(()) => {
                resumo.inseridos += 1;
                tracing::info!("Disciplina da linha {} inserida.", linha);
            }
            Err(e) => {
                resumo.falhas += 1;
                tracing::error!("Erro ao inserir disciplina da linha {}: {}", linha, e);
            }
        }
    }

    Ok(resumo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn imports_single_student_row() {
        let (pool, _dir) = test_pool().await;
        let csv = "nome,matricula,data_nascimento,endereco,email\n\
                   Ana Silva,2024001,2001-05-10,\"Rua A, 10\",ana@example.com\n";

        let resumo = importar_alunos(&pool, csv).await.unwrap();
        assert_eq!(resumo, ResumoImportacao { inseridos: 1, falhas: 0 });

        let alunos = aluno_service::listar(&pool).await.unwrap();
        assert_eq!(alunos.len(), 1);
        let ana = &alunos[0];
        assert_eq!(ana.nome, "Ana Silva");
        assert_eq!(ana.matricula, "2024001");
        assert_eq!(ana.data_nascimento, NaiveDate::from_ymd_opt(2001, 5, 10));
        assert_eq!(ana.endereco.as_deref(), Some("Rua A, 10"));
        assert_eq!(ana.email, "ana@example.com");
    }

    #[tokio::test]
    async fn bad_rows_do_not_abort_the_batch() {
        let (pool, _dir) = test_pool().await;
        let csv = "nome,matricula,data_nascimento,endereco,email\n\
                   Ana,1,,,ana@example.com\n\
                   Repetida,2,,,ana@example.com\n\
                   Data Ruim,3,10/05/2001,,data@example.com\n\
                   Bruno,4,,,bruno@example.com\n";

        let resumo = importar_alunos(&pool, csv).await.unwrap();
        assert_eq!(resumo, ResumoImportacao { inseridos: 2, falhas: 2 });

        let nomes: Vec<String> =
            aluno_service::listar(&pool).await.unwrap().into_iter().map(|a| a.nome).collect();
        assert_eq!(nomes, vec!["Ana", "Bruno"]);
    }

    #[tokio::test]
    async fn extra_columns_are_ignored() {
        let (pool, _dir) = test_pool().await;
        let csv = "codigo,nome,carga_horaria,professor,sala\n\
                   MAT101,Cálculo I,60,Prof. Lima,B12\n";

        let resumo = importar_disciplinas(&pool, csv).await.unwrap();
        assert_eq!(resumo, ResumoImportacao { inseridos: 1, falhas: 0 });

        let disciplinas = disciplina_service::listar(&pool).await.unwrap();
        assert_eq!(disciplinas.len(), 1);
        assert_eq!(disciplinas[0].codigo, "MAT101");
        assert_eq!(disciplinas[0].carga_horaria, 60);
        assert_eq!(disciplinas[0].professor.as_deref(), Some("Prof. Lima"));
    }

    #[tokio::test]
    async fn unlabelled_trailing_cells_are_ignored() {
        let (pool, _dir) = test_pool().await;
        let csv = "nome,matricula,data_nascimento,endereco,email\n\
                   Bia,2,,,bia@example.com,extra\n";

        let resumo = importar_alunos(&pool, csv).await.unwrap();
        assert_eq!(resumo, ResumoImportacao { inseridos: 1, falhas: 0 });

        let alunos = aluno_service::listar(&pool).await.unwrap();
        assert_eq!(alunos.len(), 1);
        assert_eq!(alunos[0].email, "bia@example.com");
    }

    #[tokio::test]
    async fn empty_required_cell_fails_the_row() {
        let (pool, _dir) = test_pool().await;
        let csv = "codigo,nome,carga_horaria,professor\n\
                   FIS101,Física I,,\n";

        let resumo = importar_disciplinas(&pool, csv).await.unwrap();
        assert_eq!(resumo, ResumoImportacao { inseridos: 0, falhas: 1 });
        assert!(disciplina_service::listar(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_required_column_fails_each_row() {
        let (pool, _dir) = test_pool().await;
        let csv = "nome,matricula\nAna,1\n";

        let resumo = importar_alunos(&pool, csv).await.unwrap();
        assert_eq!(resumo, ResumoImportacao { inseridos: 0, falhas: 1 });
        assert!(aluno_service::listar(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rerun_reports_uniqueness_failures() {
        let (pool, _dir) = test_pool().await;
        let csv = "nome,codigo,carga_horaria\nCálculo I,MAT101,60\n";

        importar_disciplinas(&pool, csv).await.unwrap();
        let segunda = importar_disciplinas(&pool, csv).await.unwrap();

        assert_eq!(segunda, ResumoImportacao { inseridos: 0, falhas: 1 });
        assert_eq!(disciplina_service::listar(&pool).await.unwrap().len(), 1);
    }
}
