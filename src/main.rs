// src/main.rs

// --- Imports ---
use axum::serve;
use escola::{config::Config, db, state::AppState, web};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuração do Logging (Tracing) ---
    escola::config::init_tracing("escola=debug,tower_http=info,sqlx=warn");

    tracing::info!("🚀 Iniciando servidor escola...");
    let config = Config::from_env()?;

    // --- Configuração da Base de Dados (tabelas criadas se não existirem) ---
    let db_pool = match db::create_db_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("❌ Falha crítica ao inicializar a base de dados: {}", e);
            return Err(anyhow::anyhow!("Falha ao conectar/migrar DB: {}", e));
        }
    };
    tracing::info!("Database and tables synced.");

    // --- Criação do Estado da Aplicação ---
    let app_state = AppState {
        db_pool: db_pool.clone(),
    };

    // --- Configuração do Endereço e Listener ---
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("❌ Falha ao iniciar listener na porta {}: {}", config.port, e);
            return Err(e.into());
        }
    };

    // --- Criação do Router e Aplicação das Camadas (Middlewares) ---
    let app = web::routes::create_router(app_state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    // --- Início do Servidor ---
    tracing::info!("📡 Server is running on http://localhost:{}", config.port);
    let resultado = serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // Fecha as ligações à DB antes de sair
    db_pool.close().await;
    tracing::info!("👋 Servidor encerrado, base de dados fechada.");

    if let Err(e) = resultado {
        tracing::error!("❌ Erro fatal no servidor: {}", e);
        return Err(e.into());
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Falha ao escutar Ctrl-C: {}", e);
        // Sem sinal não há como encerrar com ordem; segue a servir
        std::future::pending::<()>().await;
    }
    tracing::info!("Sinal de encerramento recebido.");
}
