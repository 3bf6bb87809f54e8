//! Rule evaluation over inbound events.
//!
//! One entry point, [`EventProcessor::handle_raw_line`], turns a raw read
//! into the list of protocol lines to send back. The three rules (chat
//! message, join, keepalive) are independent and non-exclusive: a read that
//! matches several markers produces the concatenation of their outputs, in
//! event order. The processor is total — any input, however malformed,
//! yields a (possibly empty) list and never an error.

use crate::config::BotConfig;
use crate::irc::commands;
use crate::irc::parser::{parse_line, IrcEvent};
use rand::RngExt;

/// Holds the bot identity and reply material; stateless between calls.
pub struct EventProcessor {
    nickname: String,
    responses: Vec<String>,
    trigger_keyword: String,
    trigger_response: String,
    watch_pattern: String,
    greeting: String,
    greeting_with_nick: String,
    echo_ping_token: bool,
}

impl EventProcessor {
    pub fn new(config: &BotConfig) -> Self {
        Self {
            nickname: config.server.nickname.clone(),
            responses: config.replies.responses.clone(),
            trigger_keyword: config.replies.trigger_keyword.clone(),
            trigger_response: config.replies.trigger_response.clone(),
            watch_pattern: config.moderation.watch_pattern.clone(),
            greeting: config.moderation.greeting.clone(),
            greeting_with_nick: config.moderation.greeting_with_nick.clone(),
            echo_ping_token: config.keepalive.echo_token,
        }
    }

    /// Map one raw read to zero or more outbound lines.
    pub fn handle_raw_line(&self, raw: &str) -> Vec<String> {
        let mut out = Vec::new();
        for event in parse_line(raw) {
            match event {
                IrcEvent::PrivMsg {
                    sender,
                    target,
                    body,
                } => out.extend(self.on_privmsg(&sender, &target, &body)),
                IrcEvent::Join { sender, channel } => {
                    out.extend(self.on_join(&sender, &channel))
                }
                IrcEvent::Ping { token } => out.push(self.on_ping(&token)),
            }
        }
        out
    }

    fn on_privmsg(&self, sender: &str, target: &str, body: &str) -> Vec<String> {
        let addressed = format!("{}:", self.nickname);
        if body.contains(&addressed) {
            let reply = format!("{}: {}", sender, self.pick_response());
            vec![commands::private_message(target, &reply)]
        } else if body.contains(&self.nickname) {
            // Mentioned but not addressed: deliberately stay quiet.
            Vec::new()
        } else if !self.trigger_keyword.is_empty() && body.contains(&self.trigger_keyword) {
            vec![commands::private_message(target, &self.trigger_response)]
        } else {
            // A dedicated "<nick>: help" arm would be unreachable here: the
            // direct-address arm above already matches any "<nick>: ..."
            // text, help requests included.
            Vec::new()
        }
    }

    /// Greet-then-kick policy for joiners whose nick matches the watch
    /// pattern. An empty pattern disables the policy rather than matching
    /// every nick.
    fn on_join(&self, nick: &str, channel: &str) -> Vec<String> {
        if self.watch_pattern.is_empty() || !nick.contains(&self.watch_pattern) {
            return Vec::new();
        }
        vec![
            commands::private_message(channel, &self.greeting),
            commands::private_message(
                channel,
                &format!("{} {}", self.greeting_with_nick, nick),
            ),
            commands::kick(channel, nick),
        ]
    }

    fn on_ping(&self, token: &str) -> String {
        if self.echo_ping_token && !token.is_empty() {
            commands::pong_with_token(token)
        } else {
            commands::pong()
        }
    }

    fn pick_response(&self) -> &str {
        if self.responses.is_empty() {
            return "";
        }
        let mut rng = rand::rng();
        &self.responses[rng.random_range(0..self.responses.len())]
    }
}
