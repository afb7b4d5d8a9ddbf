mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    bot, config::Config, error::AppError, scheduler::prune_restores, startup, state::AppState,
    store::build_store,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let store = build_store(config.store_backend, &db);

    tracing::info!("Using {:?} configuration store", config.store_backend);

    let bot_client = bot::start::init_bot(&config, store.clone()).await?;
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let _scheduler = prune_restores::start_scheduler(store.clone()).await?;

    let router = server::router::router()
        .with_state(AppState::new(
            db,
            store,
            http_client,
            oauth_client,
            config.app_url.clone(),
        ))
        .layer(session);

    let listener = TcpListener::bind(config.web_addr).await?;
    tracing::info!("Dashboard listening on {}", config.web_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
