use news_core::application::{
    ports::{
        security::TokenVerifier, storage::FileStore, time::Clock, util::TokenGenerator,
    },
    services::{ApplicationServices, ServiceSettings},
};
use news_core::config::AppConfig;
use news_core::domain::{
    news::{NewsReadRepository, NewsWriteRepository},
    upload::UploadPolicy,
    user::UserRepository,
};
use news_core::infrastructure::{
    database,
    repositories::{SqliteNewsReadRepository, SqliteNewsWriteRepository, SqliteUserRepository},
    security::HmacTokenVerifier,
    storage::LocalFileStore,
    time::SystemClock,
    util::UuidTokenGenerator,
};
use news_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));
    let news_write_repo: Arc<dyn NewsWriteRepository> =
        Arc::new(SqliteNewsWriteRepository::new(Arc::clone(&pool)));
    let news_read_repo: Arc<dyn NewsReadRepository> =
        Arc::new(SqliteNewsReadRepository::new(Arc::clone(&pool)));

    let local_store =
        LocalFileStore::new(config.images_dir().clone(), config.staging_dir().clone());
    local_store.ensure_dirs().await?;
    let file_store: Arc<dyn FileStore> = Arc::new(local_store);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let token_verifier: Arc<dyn TokenVerifier> = Arc::new(HmacTokenVerifier::new(
        config.auth_token_secret(),
        Arc::clone(&clock),
    )?);
    let tokens: Arc<dyn TokenGenerator> = Arc::new(UuidTokenGenerator);

    let settings = ServiceSettings {
        upload_policy: UploadPolicy::new(
            config.max_image_bytes(),
            config.allowed_image_types().iter().cloned(),
        ),
        public_base_url: config.public_base_url().to_string(),
        orphan_grace: chrono::Duration::from_std(config.orphan_grace())?,
    };

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&user_repo),
        Arc::clone(&news_write_repo),
        Arc::clone(&news_read_repo),
        Arc::clone(&file_store),
        Arc::clone(&token_verifier),
        Arc::clone(&tokens),
        Arc::clone(&clock),
        settings,
    ));

    if let Some(every) = config.orphan_sweep_interval() {
        spawn_orphan_sweep(Arc::clone(&services), every);
    }

    let state = HttpState {
        services: Arc::clone(&services),
        images_dir: config.images_dir().clone(),
        max_request_bytes: config.max_request_bytes(),
        allowed_origins: config.allowed_origins().to_vec(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn spawn_orphan_sweep(services: Arc<ApplicationServices>, every: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match services.image_janitor.sweep().await {
                Ok(report) => tracing::info!(
                    removed = report.removed,
                    kept = report.kept,
                    failed = report.failed,
                    "orphan image sweep finished"
                ),
                Err(err) => tracing::warn!(error = %err, "orphan image sweep failed"),
            }
        }
    });
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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
