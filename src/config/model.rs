//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the bot starts with a missing or partial
//! config file. The record is immutable after startup.

use serde::{Deserialize, Serialize};

/// Root bot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub replies: RepliesConfig,
    #[serde(default)]
    pub moderation: ModerationConfig,
    #[serde(default)]
    pub keepalive: KeepaliveConfig,
}

/// Where to connect and who to be.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Hostname or IP address of the IRC server.
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Channel to join, `#`-prefixed by convention.
    #[serde(default = "default_channel")]
    pub channel: String,
    #[serde(default = "default_nickname")]
    pub nickname: String,
    /// Read timeout in seconds; a silent server is re-polled at this cadence.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Pause between reconnect attempts. Fixed — no backoff growth.
    #[serde(default = "default_reconnect_delay")]
    pub reconnect_delay_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            channel: default_channel(),
            nickname: default_nickname(),
            timeout_secs: default_timeout(),
            reconnect_delay_secs: default_reconnect_delay(),
        }
    }
}

/// Canned chat replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepliesConfig {
    /// Pool of responses for lines that address the bot directly
    /// (`<nick>: ...`); one is picked at random.
    #[serde(default = "default_responses")]
    pub responses: Vec<String>,
    /// Keyword that triggers a reply even when the bot is not addressed.
    #[serde(default = "default_trigger_keyword")]
    pub trigger_keyword: String,
    #[serde(default = "default_trigger_response")]
    pub trigger_response: String,
}

impl Default for RepliesConfig {
    fn default() -> Self {
        Self {
            responses: default_responses(),
            trigger_keyword: default_trigger_keyword(),
            trigger_response: default_trigger_response(),
        }
    }
}

/// Greet-then-kick policy for flagged joiners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationConfig {
    /// Substring matched against joining nicks. Empty disables the policy.
    #[serde(default)]
    pub watch_pattern: String,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Second greeting line; the joining nick is appended.
    #[serde(default = "default_greeting_with_nick")]
    pub greeting_with_nick: String,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            watch_pattern: String::new(),
            greeting: default_greeting(),
            greeting_with_nick: default_greeting_with_nick(),
        }
    }
}

/// PONG token policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeepaliveConfig {
    /// Echo the server's PING token instead of replying with the fixed one.
    /// Strict servers validate the echoed token; the fixed token is enough
    /// for servers that only care that *something* came back.
    #[serde(default)]
    pub echo_token: bool,
}

fn default_host() -> String {
    "irc.libera.chat".to_string()
}
fn default_port() -> u16 {
    6667
}
fn default_channel() -> String {
    "#ircwarden".to_string()
}
fn default_nickname() -> String {
    "ircwarden".to_string()
}
fn default_timeout() -> u64 {
    120
}
fn default_reconnect_delay() -> u64 {
    1
}
fn default_responses() -> Vec<String> {
    vec!["At your service.".to_string()]
}
fn default_trigger_keyword() -> String {
    "message".to_string()
}
fn default_trigger_response() -> String {
    "Someone said the magic word.".to_string()
}
fn default_greeting() -> String {
    "Welcome!".to_string()
}
fn default_greeting_with_nick() -> String {
    "Goodbye".to_string()
}
