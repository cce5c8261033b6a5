//! Message routing: room broadcast, IM join, IM send.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::helpers;
use crate::session::Context;
use crate::state::Message;
use chrono::Local;
use linechat_proto::{Reply, ReplyKind, im_room_name, is_im_name};
use tracing::info;

/// `msg <room> [<room> ...] | <text>` - broadcast to joined ordinary rooms.
///
/// Target validation is all-or-nothing: any unknown, unjoined, or IM target
/// aborts the whole send with no message stored anywhere. On success each
/// target room gets its own copy of the message, all sharing one timestamp.
pub fn msg(ctx: &mut Context<'_>, args: &[&str]) -> HandlerResult {
    let sender = ctx.require_user()?.to_string();
    let (targets, body) = helpers::split_targets(args);

    for &name in &targets {
        let room = ctx
            .registry
            .room(name)
            .ok_or_else(|| HandlerError::UnknownRoom(name.to_string()))?;
        if !room.has_member(&sender) {
            return Err(HandlerError::NotMember(name.to_string()));
        }
        if is_im_name(name) {
            return Err(HandlerError::ReservedRoomName);
        }
    }
    if body.is_empty() {
        return Err(HandlerError::EmptyMessageBody);
    }
    if targets.is_empty() {
        return Err(HandlerError::NoTargetRooms);
    }

    let sent_at = Local::now();
    for &name in &targets {
        let message = Message::new(name, &sender, sent_at, &body);
        helpers::deliver(ctx, name, message);
    }
    Ok(())
}

/// `im <user> [<user> ...]` - join (creating on first use) the canonical IM
/// room for a participant set, then replay recent history.
///
/// Every named participant must exist; all unknown names are reported, one
/// error line each, before the command fails. Only the caller is added as a
/// member - the other participants each issue their own `im`.
pub fn im(ctx: &mut Context<'_>, args: &[&str]) -> HandlerResult {
    let requester = ctx.require_user()?.to_string();
    if args.is_empty() {
        return Err(HandlerError::BadArgumentCount {
            usage: "im <user> [<user> ...]",
        });
    }

    let mut participants: Vec<&str> = args.to_vec();
    participants.push(&requester);
    participants.sort_unstable();
    participants.dedup();

    let unknown: Vec<String> = participants
        .iter()
        .filter(|name| ctx.registry.user(name).is_none())
        .map(|name| name.to_string())
        .collect();
    if !unknown.is_empty() {
        return Err(HandlerError::UnknownUsers(unknown));
    }

    let room_name = im_room_name(&requester, args.iter().copied());
    let created = ctx.registry.room(&room_name).is_none();
    ctx.registry.ensure_im_room(&room_name);
    ctx.registry.join_room(&requester, &room_name);
    if created {
        info!(room = %room_name, "IM room created");
    }
    ctx.reply(Reply::new(
        ReplyKind::Im,
        format!("Joined IMs between {}!", participants.join(", ")),
    ));
    helpers::replay_recent(ctx, &room_name);
    Ok(())
}

/// `privmsg <user> [<user> ...] | <text>` - send to an already-joined IM room.
///
/// Resolves the same canonical room name as `im`, but never creates the room
/// and never joins anyone: delivery goes to current members only, with no
/// mailboxing for participants who have not joined.
pub fn privmsg(ctx: &mut Context<'_>, args: &[&str]) -> HandlerResult {
    let sender = ctx.require_user()?.to_string();
    let (targets, body) = helpers::split_targets(args);
    if body.is_empty() {
        return Err(HandlerError::EmptyMessageBody);
    }
    if targets.is_empty() {
        return Err(HandlerError::NoTargetRooms);
    }

    let room_name = im_room_name(&sender, targets.iter().copied());
    let room = ctx
        .registry
        .room(&room_name)
        .ok_or(HandlerError::IMRoomNotStarted)?;
    if !room.has_member(&sender) {
        return Err(HandlerError::NotMember(room_name));
    }

    let message = Message::new(&room_name, &sender, Local::now(), &body);
    helpers::deliver(ctx, &room_name, message);
    Ok(())
}
