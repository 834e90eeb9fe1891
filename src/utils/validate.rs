use crate::types::jid::{JidServer, JidUser};
use crate::utils::classify::{is_hidden_number_jid, is_international_jid};
use crate::utils::codec::{jid_decode, jid_encode};

/// JID for a raw phone number: normalized user, no device or agent.
/// User chats live on `JidServer::default()` (`s.whatsapp.net`).
pub fn create_valid_jid(number: &str, server: JidServer) -> String {
    jid_encode(JidUser::Phone(number), server, None, None)
}

/// Repairs a JID whose user is an international or hidden number by
/// re-normalizing the user and re-encoding with the same server and device.
/// Any other input comes back verbatim, malformed or not.
pub fn validate_and_fix_jid(jid: &str) -> String {
    if is_international_jid(jid) || is_hidden_number_jid(jid) {
        if let Some(decoded) = jid_decode(jid) {
            return jid_encode(
                JidUser::Phone(&decoded.user),
                decoded.server.as_str(),
                decoded.device,
                None,
            );
        }
    }
    jid.to_string()
}
