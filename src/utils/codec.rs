use paris::info;

use crate::types::jid::{FullJid, JidServer, JidUser};
use crate::utils::phone::normalize_phone_number;

/// Hook receiving each intermediate step of a decode.
///
/// Decode itself stays pure; the hook decides whether anything leaves the
/// function. See [`LogTrace`] for the logging implementation.
pub trait DecodeTrace {
    fn step(&self, stage: &str, value: &str);
}

/// The default hook: drops every step.
pub struct NoTrace;

impl DecodeTrace for NoTrace {
    fn step(&self, _stage: &str, _value: &str) {}
}

/// Forwards decode steps to the logger when `verbose` is set.
pub struct LogTrace {
    pub verbose: bool,
}

impl DecodeTrace for LogTrace {
    fn step(&self, stage: &str, value: &str) {
        if self.verbose {
            info!("jid decode [{}] {}", stage, value);
        }
    }
}

/// Builds `user[_agent][:device]@server`.
///
/// A zero agent or device is treated as absent, matching the wire format
/// where the primary device carries no suffix. An empty user is legal and
/// produces e.g. `@g.us`.
pub fn jid_encode(
    user: JidUser<'_>,
    server: impl AsRef<str>,
    device: Option<u16>,
    agent: Option<u8>,
) -> String {
    let mut out = match user {
        JidUser::Phone(raw) => normalize_phone_number(raw),
        JidUser::Opaque(id) => id.to_string(),
        JidUser::Empty => String::new(),
    };
    if let Some(agent) = agent.filter(|a| *a != 0) {
        out.push('_');
        out.push_str(&agent.to_string());
    }
    if let Some(device) = device.filter(|d| *d != 0) {
        out.push(':');
        out.push_str(&device.to_string());
    }
    out.push('@');
    out.push_str(server.as_ref());
    out
}

/// Parses a JID, or `None` when the text holds no `@` separator.
///
/// Everything after the first `@` is taken as the server verbatim. A
/// `_agent` suffix on the user part is stripped and not reconstructed; a
/// `:device` suffix is parsed when numeric and non-empty.
pub fn jid_decode(jid: &str) -> Option<FullJid> {
    jid_decode_traced(jid, &NoTrace)
}

/// [`jid_decode`] with an injectable step hook.
pub fn jid_decode_traced(jid: &str, trace: &dyn DecodeTrace) -> Option<FullJid> {
    trace.step("input", jid);
    let Some((user_combined, server)) = jid.split_once('@') else {
        trace.step("result", "no separator");
        return None;
    };
    trace.step("server", server);
    trace.step("user-combined", user_combined);

    let mut parts = user_combined.split(':');
    let user_agent = parts.next().unwrap_or("");
    let device_suffix = parts.next();

    let user = user_agent.split('_').next().unwrap_or("").to_string();
    let device = device_suffix
        .filter(|d| !d.is_empty())
        .and_then(|d| d.parse::<u16>().ok());
    trace.step("user", &user);
    if let Some(device) = device {
        trace.step("device", &device.to_string());
    }

    Some(FullJid { user, device, server: server.to_string() })
}

/// Canonical user JID: normalized user, legacy `c.us` migrated to
/// `s.whatsapp.net`, device and agent dropped. Empty string when the input
/// does not decode.
pub fn jid_normalized_user(jid: &str) -> String {
    let Some(decoded) = jid_decode(jid) else {
        return String::new();
    };
    let server = if decoded.server == JidServer::LegacyUser.as_str() {
        JidServer::User.as_str()
    } else {
        decoded.server.as_str()
    };
    jid_encode(JidUser::Phone(&decoded.user), server, None, None)
}
