//! Wire-format IRC command builders.
//!
//! Each function is a pure formatter producing a single newline-terminated
//! protocol line. Inputs are trusted strings: callers must not pass text
//! containing embedded newlines, since no escaping is performed here.

/// Fixed token used for both sides of the keepalive exchange.
pub const KEEPALIVE_TOKEN: &str = "pingis";

/// `USER <nick> <nick> <nick> :+<nick>` — initial registration.
///
/// Username, hostname, servername, and realname are all set to the nick;
/// a single-identity bot has nothing more interesting to report.
pub fn authenticate(nick: &str) -> String {
    format!("USER {} {} {} :+{}\n", nick, nick, nick, nick)
}

/// `NICK <nickname>` — nickname registration.
pub fn set_nickname(nick: &str) -> String {
    format!("NICK {}\n", nick)
}

/// `JOIN <channel>` — join a channel.
pub fn join_channel(channel: &str) -> String {
    format!("JOIN {}\n", channel)
}

/// `PING :<token>` — client-initiated keepalive.
pub fn ping() -> String {
    format!("PING :{}\n", KEEPALIVE_TOKEN)
}

/// `PONG :<token>` — keepalive reply with the fixed token.
pub fn pong() -> String {
    format!("PONG :{}\n", KEEPALIVE_TOKEN)
}

/// `PONG :<token>` — keepalive reply echoing the server's token, for
/// servers that validate the echo.
pub fn pong_with_token(token: &str) -> String {
    format!("PONG :{}\n", token)
}

/// `PRIVMSG <target> :<text>` — chat message to a user or channel.
pub fn private_message(target: &str, text: &str) -> String {
    format!("PRIVMSG {} :{}\n", target, text)
}

/// `KICK <channel> <nick> ` — remove a user from a channel. The trailing
/// space carries an empty kick reason.
pub fn kick(channel: &str, nick: &str) -> String {
    format!("KICK {} {} \n", channel, nick)
}
