mod model;
mod server;

use crate::server::{
    bot::{self, state::BotState},
    config::Config,
    error::AppError,
    router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let (keys, bot_config) = startup::load_stores(&config).await?;
    let listener = startup::bind_listener(config.api_port).await?;
    let http_client = startup::setup_reqwest_client()?;

    tracing::info!("Starting server");

    startup::spawn_public_address_discovery(http_client, &config);

    let app = router::router().with_state(AppState::new(keys.clone()));
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("API server error: {}", e);
        }
    });

    let bot_client = bot::start::init_bot(&config, BotState::new(&config, keys, bot_config)).await?;
    bot::start::start_bot(bot_client).await?;

    Ok(())
}
