use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_api::application::{ports::logging::Logger, services::ApplicationServices};
use user_api::config::AppConfig;
use user_api::domain::user::UserRepository;
use user_api::infrastructure::{
    database,
    logging::TracingLogger,
    repositories::{InMemoryUserRepository, PostgresUserRepository},
};
use user_api::presentation::http::{
    controllers::user::UserController, routes::build_router, state::HttpState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let user_repo = init_user_repository(&config).await?;
    let services = ApplicationServices::new(user_repo);

    let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new(UserController::NAME));
    let state = HttpState::new(&services, logger);

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn init_user_repository(config: &AppConfig) -> Result<Arc<dyn UserRepository>> {
    if let Some(url) = config.database_url() {
        let pool = database::init_pool(url, config.database_max_connections()).await?;
        database::run_migrations(&pool).await?;
        tracing::info!("using postgres user repository");
        return Ok(Arc::new(PostgresUserRepository::new(pool)));
    }

    let repo = match config.user_seed_path() {
        Some(path) => InMemoryUserRepository::from_seed_file(path)?,
        None => InMemoryUserRepository::default(),
    };
    tracing::warn!(users = repo.len(), "DATABASE_URL not set, using in-memory user repository");
    Ok(Arc::new(repo))
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
