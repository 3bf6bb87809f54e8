//! Inbound line tokenizer.
//!
//! Classifies one raw read from the server into zero or more tagged events.
//! Reads are not guaranteed to be pre-split into protocol messages — a
//! single `recv` can return several lines in one blob — so the three
//! recognition markers are tested independently against the whole text and
//! one input may yield more than one event. Events are emitted in a fixed
//! order: chat message, join, keepalive.
//!
//! Extraction uses the protocol's fixed delimiters: the sender nick is the
//! text between the leading `:` and the first `!`; the target or channel is
//! the text after the last marker occurrence, up to the ` :` that begins the
//! trailing parameter.

/// One recognized protocol event in a raw read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrcEvent {
    /// A chat message to a user or channel.
    PrivMsg {
        sender: String,
        target: String,
        body: String,
    },
    /// A user joined a channel.
    Join { sender: String, channel: String },
    /// Server keepalive challenge. `token` is whatever followed `PING :`.
    Ping { token: String },
}

const PRIVMSG_MARKER: &str = " PRIVMSG ";
const JOIN_MARKER: &str = " JOIN ";
const PING_MARKER: &str = "PING :";

/// Tokenize a raw read into tagged events.
///
/// Total over all inputs: text matching no marker (server numerics, MOTD
/// noise, the empty string) yields an empty vec, never an error.
pub fn parse_line(raw: &str) -> Vec<IrcEvent> {
    let line = raw.trim_end_matches(['\r', '\n']);
    let mut events = Vec::new();

    if line.contains(PRIVMSG_MARKER) {
        let (target, body) = after_marker(line, PRIVMSG_MARKER);
        events.push(IrcEvent::PrivMsg {
            sender: sender_of(line),
            target,
            body,
        });
    }
    if line.contains(JOIN_MARKER) {
        let (channel, _) = after_marker(line, JOIN_MARKER);
        events.push(IrcEvent::Join {
            sender: sender_of(line),
            channel,
        });
    }
    if let Some(pos) = line.find(PING_MARKER) {
        events.push(IrcEvent::Ping {
            token: line[pos + PING_MARKER.len()..].to_string(),
        });
    }

    events
}

/// Nick portion of the `:nick!user@host` prefix.
fn sender_of(line: &str) -> String {
    line.split('!')
        .next()
        .unwrap_or(line)
        .trim_start_matches(':')
        .to_string()
}

/// Split the text after the last occurrence of `marker` into the parameter
/// before ` :` and the trailing body after it.
fn after_marker(line: &str, marker: &str) -> (String, String) {
    let rest = line.rsplit(marker).next().unwrap_or("");
    match rest.split_once(" :") {
        Some((param, body)) => (param.to_string(), body.to_string()),
        None => (rest.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privmsg_extraction() {
        let events = parse_line(":alice!u@h PRIVMSG #lounge :bot: hello\r\n");
        assert_eq!(
            events,
            vec![IrcEvent::PrivMsg {
                sender: "alice".into(),
                target: "#lounge".into(),
                body: "bot: hello".into(),
            }]
        );
    }

    #[test]
    fn test_join_extraction() {
        let events = parse_line(":lurker!u@h JOIN #lounge");
        assert_eq!(
            events,
            vec![IrcEvent::Join {
                sender: "lurker".into(),
                channel: "#lounge".into(),
            }]
        );
    }

    #[test]
    fn test_ping_keeps_token() {
        let events = parse_line(":irc.example.net PING :abc123");
        assert_eq!(
            events,
            vec![IrcEvent::Ping {
                token: "abc123".into()
            }]
        );
    }

    #[test]
    fn test_unrecognized_and_empty_yield_nothing() {
        assert!(parse_line("").is_empty());
        assert!(parse_line(":irc.example.net 001 warden :Welcome").is_empty());
        assert!(parse_line("NOTICE AUTH :*** Looking up your hostname").is_empty());
    }

    #[test]
    fn test_one_blob_many_events() {
        let blob = ":alice!u@h PRIVMSG #lounge :bot: hi\r\n:lurker!u@h JOIN #lounge\r\nPING :xyz\r\n";
        let events = parse_line(blob);
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], IrcEvent::PrivMsg { .. }));
        assert!(matches!(events[1], IrcEvent::Join { .. }));
        assert!(matches!(events[2], IrcEvent::Ping { .. }));
    }

    #[test]
    fn test_privmsg_without_trailing_param() {
        // Malformed but must not panic.
        let events = parse_line(":a!u@h PRIVMSG #lounge");
        assert_eq!(
            events,
            vec![IrcEvent::PrivMsg {
                sender: "a".into(),
                target: "#lounge".into(),
                body: String::new(),
            }]
        );
    }
}
