use crate::constant::{STORIES_JID, S_WHATSAPP_NET};
use crate::utils::codec::jid_decode;
use crate::utils::phone::{is_hidden_number, is_international_number, BRAZIL_PLAN};

/// Whether both JIDs address the same base user, devices and agents aside.
pub fn are_jids_same_user(a: &str, b: &str) -> bool {
    jid_decode(a).map(|j| j.user) == jid_decode(b).map(|j| j.user)
}

pub fn is_jid_meta_ia(jid: &str) -> bool {
    jid.ends_with("@bot")
}

pub fn is_jid_user(jid: &str) -> bool {
    jid.ends_with(S_WHATSAPP_NET)
}

pub fn is_lid_user(jid: &str) -> bool {
    jid.ends_with("@lid")
}

pub fn is_jid_broadcast(jid: &str) -> bool {
    jid.ends_with("@broadcast")
}

pub fn is_jid_group(jid: &str) -> bool {
    jid.ends_with("@g.us")
}

pub fn is_jid_status_broadcast(jid: &str) -> bool {
    jid == STORIES_JID
}

pub fn is_jid_newsletter(jid: &str) -> bool {
    jid.ends_with("@newsletter")
}

/// Whether the JID belongs to a bot account on the legacy user domain.
///
/// Newer bot ids may live on other domains; the `c.us` restriction is kept
/// as-is because callers depend on the historical behavior.
pub fn is_jid_bot(jid: &str) -> bool {
    let user = jid.split('@').next().unwrap_or("");
    BRAZIL_PLAN.is_bot_id(user) && jid.ends_with("@c.us")
}

pub fn is_international_jid(jid: &str) -> bool {
    jid_decode(jid).is_some_and(|j| is_international_number(&j.user))
}

pub fn is_hidden_number_jid(jid: &str) -> bool {
    jid_decode(jid).is_some_and(|j| is_hidden_number(&j.user))
}
