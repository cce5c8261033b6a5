//! Fan-out and history replay plumbing shared by the command handlers.

use crate::session::Context;
use crate::state::Message;
use linechat_proto::Reply;
use tracing::debug;

/// Append a message to a room and fan the formatted line out to every member
/// with a bound connection, the sender included.
///
/// Fire-and-forget: members without a live connection are simply skipped,
/// nothing is queued for later.
pub fn deliver(ctx: &mut Context<'_>, room_name: &str, message: Message) {
    let line = message.formatted();
    let recipients = ctx.registry.append_message(room_name, message);
    debug!(
        room = %room_name,
        recipients = recipients.len(),
        "Delivering message"
    );
    for conn in recipients {
        ctx.hub.send_to(conn, Reply::msg(line.clone()));
    }
}

/// Replay the most recent stored messages of a room to this session, oldest
/// first, one `msg` line each.
pub fn replay_recent(ctx: &Context<'_>, room_name: &str) {
    let Some(room) = ctx.registry.room(room_name) else {
        return;
    };
    for message in room.recent(ctx.hub.replay_depth) {
        ctx.reply(Reply::msg(message.formatted()));
    }
}

/// Split `msg`/`privmsg` arguments into target names and the message body.
///
/// Targets are the tokens before the first one starting with `|`; the body is
/// everything from there on, with the single leading `|` stripped and the
/// remainder trimmed. No divider at all yields an empty body.
pub fn split_targets<'a>(args: &[&'a str]) -> (Vec<&'a str>, String) {
    let split = args
        .iter()
        .position(|arg| arg.starts_with(linechat_proto::DIVIDER))
        .unwrap_or(args.len());
    let targets = args[..split].to_vec();
    let rest = args[split..].join(" ");
    let body = rest.strip_prefix(linechat_proto::DIVIDER).unwrap_or(&rest);
    (targets, body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_targets_and_body() {
        let (targets, body) = split_targets(&["a", "b", "|", "hello", "there"]);
        assert_eq!(targets, vec!["a", "b"]);
        assert_eq!(body, "hello there");
    }

    #[test]
    fn divider_may_be_glued_to_body() {
        let (targets, body) = split_targets(&["a", "|hello", "there"]);
        assert_eq!(targets, vec!["a"]);
        assert_eq!(body, "hello there");
    }

    #[test]
    fn missing_divider_means_empty_body() {
        let (targets, body) = split_targets(&["a", "b"]);
        assert_eq!(targets, vec!["a", "b"]);
        assert_eq!(body, "");
    }

    #[test]
    fn no_targets_before_divider() {
        let (targets, body) = split_targets(&["|", "hi"]);
        assert!(targets.is_empty());
        assert_eq!(body, "hi");
    }

    #[test]
    fn strips_only_one_divider() {
        let (_, body) = split_targets(&["a", "|", "|", "weird"]);
        assert_eq!(body, "| weird");
    }
}
