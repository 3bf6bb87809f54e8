mod bot;
mod config;
mod irc;

use crate::bot::Bot;
use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostic sink: every outbound line at DEBUG, session failures at
    // ERROR. Append-only from the bot's point of view — nothing reads it.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let cfg = config::load_config()?;
    let mut bot = Bot::new(cfg);

    // The run loop retries forever; only the termination signal ends the
    // process, immediately and without draining the queue.
    tokio::select! {
        _ = bot.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted, shutting down");
        }
    }

    Ok(())
}
