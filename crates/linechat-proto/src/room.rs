//! Room naming rules.
//!
//! Room names are partitioned into the reserved IM namespace (any name whose
//! first two characters are `im`, case-insensitively) and ordinary names.
//! Ordinary names may not contain the `|` divider or the command prefix
//! character, since both would break `msg` argument scanning.

use crate::DIVIDER;
use thiserror::Error;

/// Why a proposed room name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoomNameError {
    /// The name falls inside the reserved IM namespace.
    #[error("room name is reserved for IMs")]
    Reserved,
    /// The name contains the divider or the command prefix.
    #[error("room name contains a forbidden character")]
    ForbiddenChar,
}

/// Whether `name` lies in the reserved IM namespace.
pub fn is_im_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 2
        && bytes[0].eq_ignore_ascii_case(&b'i')
        && bytes[1].eq_ignore_ascii_case(&b'm')
}

/// Validate an ordinary room name against the reserved namespace and the
/// forbidden-character rules.
pub fn validate_room_name(name: &str, prefix: char) -> Result<(), RoomNameError> {
    if is_im_name(name) {
        return Err(RoomNameError::Reserved);
    }
    if name.contains(DIVIDER) || name.contains(prefix) {
        return Err(RoomNameError::ForbiddenChar);
    }
    Ok(())
}

/// Canonical IM room name for a participant set.
///
/// The requester is always part of the set; participants are deduplicated and
/// sorted, so every permutation of the same set yields the identical name.
pub fn im_room_name<'a, I>(requester: &'a str, participants: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names: Vec<&str> = participants.into_iter().collect();
    names.push(requester);
    names.sort_unstable();
    names.dedup();
    format!("IM {}", names.join(" "))
}
