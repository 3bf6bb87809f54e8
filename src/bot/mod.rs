//! The bot proper: connect, register, then receive/react until the
//! transport fails, and reconnect forever.

pub mod processor;

pub use processor::EventProcessor;

use crate::config::BotConfig;
use crate::irc::commands;
use crate::irc::connection::{Connection, TransportError};
use crate::irc::queue::OutboundQueue;
use std::time::Duration;
use tracing::{error, info};

/// Fixed-delay retry policy, isolated so the run loop never hardcodes
/// timing. No growth, no retry cap: the bot is meant to outlive flaky
/// servers, not give up on them.
#[derive(Debug, Clone, Copy)]
pub struct ReconnectPolicy {
    delay: Duration,
}

impl ReconnectPolicy {
    pub fn fixed(delay: Duration) -> Self {
        Self { delay }
    }

    /// Pause before the next connect attempt.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// The registration batch sent after every successful connect, in order.
pub fn startup_sequence(nick: &str, channel: &str) -> Vec<String> {
    vec![
        commands::authenticate(nick),
        commands::set_nickname(nick),
        commands::join_channel(channel),
        commands::ping(),
    ]
}

pub struct Bot {
    config: BotConfig,
    connection: Connection,
    queue: OutboundQueue,
    processor: EventProcessor,
    policy: ReconnectPolicy,
}

impl Bot {
    pub fn new(config: BotConfig) -> Self {
        let connection = Connection::new(
            &config.server.host,
            config.server.port,
            Duration::from_secs(config.server.timeout_secs),
        );
        let processor = EventProcessor::new(&config);
        let policy =
            ReconnectPolicy::fixed(Duration::from_secs(config.server.reconnect_delay_secs));
        Self {
            config,
            connection,
            queue: OutboundQueue::new(),
            processor,
            policy,
        }
    }

    /// Run until the process is terminated. Every session failure is logged,
    /// the connection is torn down, and a fresh connect is attempted after
    /// the policy delay. Only the termination signal (raced against this
    /// future in `main`) stops the loop.
    pub async fn run(&mut self) {
        loop {
            if let Err(e) = self.session().await {
                error!("session ended: {}", e);
                self.connection.close();
                tokio::time::sleep(self.policy.delay()).await;
            }
        }
    }

    /// One connect-register-react cycle. Returns only by transport error.
    async fn session(&mut self) -> Result<(), TransportError> {
        info!(
            "connecting to {}:{}",
            self.config.server.host, self.config.server.port
        );
        self.connection.connect().await?;
        info!(
            "connected, registering as {} in {}",
            self.config.server.nickname, self.config.server.channel
        );
        self.queue.extend(startup_sequence(
            &self.config.server.nickname,
            &self.config.server.channel,
        ));
        self.flush().await?;

        loop {
            let raw = match self.connection.receive().await? {
                Some(raw) => raw,
                // Read timeout: no data yet, not a failure. Take another lap.
                None => continue,
            };
            let replies = self.processor.handle_raw_line(&raw);
            self.queue.extend(replies);
            self.flush().await?;
        }
    }

    /// Drain the queue front-to-back onto the wire.
    async fn flush(&mut self) -> Result<(), TransportError> {
        while let Some(line) = self.queue.pop() {
            self.connection.send(&line).await?;
        }
        Ok(())
    }
}
