//! Chat command handlers.
//!
//! Each handler validates its preconditions against the locked registry,
//! mutates shared state, and queues replies. Handlers never perform blocking
//! I/O; outgoing lines go onto per-connection queues and the network layer
//! writes them out. A handler that returns `Err` has made no state change
//! unless its doc says otherwise.

pub mod auth;
pub mod helpers;
pub mod messaging;
pub mod room;
