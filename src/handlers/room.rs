//! Room lifecycle and presence queries: create, join, leave, list.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::helpers;
use crate::session::Context;
use linechat_proto::{Reply, ReplyKind, is_im_name};
use tracing::info;

/// `create <room>` - create an ordinary room.
pub fn create(ctx: &mut Context<'_>, args: &[&str]) -> HandlerResult {
    ctx.require_user()?;
    if args.is_empty() {
        return Err(HandlerError::BadArgumentCount { usage: "create <room>" });
    }
    let name = args[0];
    let prefix = ctx.prefix();
    ctx.registry.create_room(name, prefix)?;
    info!(room = %name, "Room created");
    ctx.reply(Reply::new(
        ReplyKind::Create,
        format!("Created new room '{name}'!"),
    ));
    Ok(())
}

/// `join <room>` - join an existing ordinary room and replay recent history.
pub fn join(ctx: &mut Context<'_>, args: &[&str]) -> HandlerResult {
    let user = ctx.require_user()?.to_string();
    if args.is_empty() {
        return Err(HandlerError::BadArgumentCount { usage: "join <room>" });
    }
    let name = args[0];
    if is_im_name(name) {
        return Err(HandlerError::ReservedRoomName);
    }
    let room = ctx
        .registry
        .room(name)
        .ok_or_else(|| HandlerError::UnknownRoom(name.to_string()))?;
    if room.has_member(&user) {
        return Err(HandlerError::AlreadyMember(name.to_string()));
    }

    ctx.registry.join_room(&user, name);
    info!(user = %user, room = %name, "Joined room");
    ctx.reply(Reply::new(ReplyKind::Join, format!("Joined room '{name}'!")));
    helpers::replay_recent(ctx, name);
    Ok(())
}

/// `leave <room> [<room> ...]` - leave rooms, all-or-nothing.
///
/// Pass 1 validates every argument; if any is unknown, an IM room, or not
/// joined, the whole command is rejected and no membership changes. Pass 2
/// performs the leaves only once everything validated.
pub fn leave(ctx: &mut Context<'_>, args: &[&str]) -> HandlerResult {
    let user = ctx.require_user()?.to_string();
    if args.is_empty() {
        return Err(HandlerError::BadArgumentCount {
            usage: "leave <room> [<room> ...]",
        });
    }

    for &name in args {
        if is_im_name(name) {
            return Err(HandlerError::ReservedRoomName);
        }
        let room = ctx
            .registry
            .room(name)
            .ok_or_else(|| HandlerError::UnknownRoom(name.to_string()))?;
        if !room.has_member(&user) {
            return Err(HandlerError::NotMember(name.to_string()));
        }
    }

    for &name in args {
        ctx.registry.leave_room(&user, name);
        info!(user = %user, room = %name, "Left room");
        ctx.reply(Reply::new(ReplyKind::Leave, format!("Left room '{name}'")));
    }
    Ok(())
}

/// `list rooms` | `list users` | `list users <room>` - presence queries.
pub fn list(ctx: &mut Context<'_>, args: &[&str]) -> HandlerResult {
    let user = ctx.require_user()?.to_string();
    const USAGE: &str = "list rooms|users [<room>]";
    let Some(&subject) = args.first() else {
        return Err(HandlerError::BadArgumentCount { usage: USAGE });
    };

    match (subject, args.get(1)) {
        ("rooms", None) => {
            let names = ctx.registry.list_room_names();
            ctx.reply(Reply::new(
                ReplyKind::List,
                format!("Rooms: {}", names.join(", ")),
            ));
            Ok(())
        }
        ("users", None) => {
            let mut entries: Vec<String> = ctx
                .registry
                .users()
                .map(|u| {
                    let presence = if u.is_active() { "online" } else { "offline" };
                    format!("{} ({presence})", u.name)
                })
                .collect();
            entries.sort_unstable();
            ctx.reply(Reply::new(
                ReplyKind::List,
                format!("Users: {}", entries.join(", ")),
            ));
            Ok(())
        }
        ("users", Some(&room_name)) => {
            if is_im_name(room_name) {
                return Err(HandlerError::ReservedRoomName);
            }
            let room = ctx
                .registry
                .room(room_name)
                .ok_or_else(|| HandlerError::UnknownRoom(room_name.to_string()))?;
            if !room.has_member(&user) {
                return Err(HandlerError::NotMember(room_name.to_string()));
            }
            let mut members: Vec<&str> = room.members().collect();
            members.sort_unstable();
            ctx.reply(Reply::new(
                ReplyKind::List,
                format!("Users in '{room_name}': {}", members.join(", ")),
            ));
            Ok(())
        }
        _ => Err(HandlerError::BadArgumentCount { usage: USAGE }),
    }
}
