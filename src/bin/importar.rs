// src/bin/importar.rs
//
// Carga única de `alunos.csv` e `disciplinas.csv` (diretório atual) para a DB.
use anyhow::Context;
use escola::{
    config::Config,
    db,
    importacao::{self, ALUNOS_CSV, DISCIPLINAS_CSV},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    escola::config::init_tracing("escola=info,importar=info,sqlx=warn");

    let config = Config::from_env()?;
    let db_pool = db::create_db_pool(&config.database_url).await?;

    // Ficheiros lidos inteiros para memória antes de inserir
    let alunos_csv = tokio::fs::read_to_string(ALUNOS_CSV)
        .await
        .with_context(|| format!("Falha ao ler {}", ALUNOS_CSV))?;
    let disciplinas_csv = tokio::fs::read_to_string(DISCIPLINAS_CSV)
        .await
        .with_context(|| format!("Falha ao ler {}", DISCIPLINAS_CSV))?;

    let alunos = importacao::importar_alunos(&db_pool, &alunos_csv).await;
    let disciplinas = importacao::importar_disciplinas(&db_pool, &disciplinas_csv).await;

    // Todos os inserts já terminaram aqui
    db_pool.close().await;

    let alunos = alunos.with_context(|| format!("Falha ao importar {}", ALUNOS_CSV))?;
    let disciplinas =
        disciplinas.with_context(|| format!("Falha ao importar {}", DISCIPLINAS_CSV))?;

    tracing::info!(
        "✅ Importação concluída: alunos {} inseridos / {} falhas; disciplinas {} inseridas / {} falhas.",
        alunos.inseridos,
        alunos.falhas,
        disciplinas.inseridos,
        disciplinas.falhas
    );

    Ok(())
}
