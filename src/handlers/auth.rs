//! Greeting, login, and logout.

use crate::error::{HandlerError, HandlerResult};
use crate::session::Context;
use crate::state::Registered;
use linechat_proto::{Reply, ReplyKind};
use tracing::info;

/// `open` - greeting, valid in every session state.
pub fn open(ctx: &mut Context<'_>) -> HandlerResult {
    let prefix = ctx.prefix();
    ctx.reply(Reply::new(
        ReplyKind::Open,
        format!(
            "Welcome to {}! Use {prefix}login to get started",
            ctx.hub.server_name
        ),
    ));
    Ok(())
}

/// `login <username> <password>` - register-or-authenticate.
///
/// An unseen name creates the user and captures the password without
/// authenticating; the client must log in a second time to verify. A known
/// name authenticates only when inactive and the password matches.
pub fn login(ctx: &mut Context<'_>, args: &[&str]) -> HandlerResult {
    if ctx.user.is_some() {
        return Err(HandlerError::AlreadyAuthenticated);
    }
    if args.len() < 2 {
        return Err(HandlerError::BadArgumentCount {
            usage: "login <username> <password>",
        });
    }
    let (name, password) = (args[0], args[1]);

    let newly_registered = match ctx.registry.register_or_fetch(name, password) {
        Registered::New => true,
        Registered::Existing(user) => {
            if user.is_active() {
                return Err(HandlerError::AlreadyLoggedIn(name.to_string()));
            }
            if !user.check_password(password) {
                return Err(HandlerError::InvalidCredentials);
            }
            user.bind(ctx.conn_id);
            false
        }
    };

    if newly_registered {
        info!(user = %name, "Registered new user");
        // Registration is reported on the error keyword, as clients expect.
        ctx.reply(Reply::error(format!(
            "Registering new user '{name}'. Please login again to verify password"
        )));
    } else {
        *ctx.user = Some(name.to_string());
        info!(conn = ctx.conn_id, user = %name, "User logged in");
        ctx.reply(Reply::new(
            ReplyKind::Login,
            format!("Login successful. Welcome to the chat room, {name}!"),
        ));
    }
    Ok(())
}

/// `logout` (and aliases) - leave every room, deauthenticate, close.
pub fn logout(ctx: &mut Context<'_>) -> HandlerResult {
    let name = ctx.require_user()?.to_string();
    ctx.registry.logout_user(&name);
    *ctx.user = None;
    *ctx.closing = true;
    info!(conn = ctx.conn_id, user = %name, "User logged out");
    ctx.reply(Reply::new(
        ReplyKind::Close,
        format!("Log out successful. Goodbye, {name}!"),
    ));
    Ok(())
}
