use game_channels::{bot, config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let settings = startup::load_channel_settings(&config)?;

    tracing::info!("Starting game channel bot");

    let client = bot::start::init_bot(&config, settings).await?;
    bot::start::start_bot(client).await
}
