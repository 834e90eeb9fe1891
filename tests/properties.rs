//! Property tests for the addressing core: encode/decode round trips,
//! normalization idempotence, and the decode failure sentinel.

use proptest::prelude::*;
use wajid::{
    jid_decode, jid_encode, jid_normalized_user, normalize_phone_number, validate_and_fix_jid,
    JidServer, JidUser,
};

const SERVERS: &[JidServer] = &[
    JidServer::LegacyUser,
    JidServer::User,
    JidServer::Group,
    JidServer::Broadcast,
    JidServer::Call,
    JidServer::Lid,
    JidServer::Newsletter,
    JidServer::Bot,
];

fn any_server() -> impl Strategy<Value = JidServer> {
    proptest::sample::select(SERVERS)
}

proptest! {
    /// Encoding a digit user and decoding it back yields the normalized
    /// user and the same server.
    #[test]
    fn prop_round_trip(user in "[0-9]{0,15}", server in any_server()) {
        let jid = jid_encode(JidUser::Phone(&user), server, None, None);
        let decoded = jid_decode(&jid).expect("encoded jids always decode");
        prop_assert_eq!(decoded.user, normalize_phone_number(&user));
        prop_assert_eq!(decoded.server, server.as_str());
        prop_assert_eq!(decoded.device, None);
    }

    /// The device survives the round trip; zero means absent.
    #[test]
    fn prop_device_round_trip(user in "[0-9]{1,15}", device in 0u16..=u16::MAX) {
        let jid = jid_encode(JidUser::Phone(&user), JidServer::User, Some(device), None);
        let decoded = jid_decode(&jid).expect("encoded jids always decode");
        let expected = if device == 0 { None } else { Some(device) };
        prop_assert_eq!(decoded.device, expected);
    }

    /// The agent is write-only: encoded, then dropped by decode.
    #[test]
    fn prop_agent_is_stripped(user in "[0-9]{1,15}", agent in 1u8..=u8::MAX) {
        let jid = jid_encode(JidUser::Phone(&user), JidServer::User, None, Some(agent));
        let decoded = jid_decode(&jid).expect("encoded jids always decode");
        prop_assert_eq!(decoded.user, normalize_phone_number(&user));
    }

    /// Normalization is a fixpoint after one application.
    #[test]
    fn prop_normalize_idempotent(raw in "[0-9]{0,16}") {
        let once = normalize_phone_number(&raw);
        prop_assert_eq!(normalize_phone_number(&once), once);
    }

    /// Formatting characters never change the outcome.
    #[test]
    fn prop_normalize_ignores_formatting(raw in "[0-9]{0,13}") {
        let decorated = format!("+{} ({})", &raw[..raw.len() / 2], &raw[raw.len() / 2..]);
        prop_assert_eq!(normalize_phone_number(&decorated), normalize_phone_number(&raw));
    }

    /// Text without a separator never decodes.
    #[test]
    fn prop_decode_requires_separator(text in "[^@]*") {
        prop_assert!(jid_decode(&text).is_none());
    }

    /// Normalized user JIDs never keep the legacy domain.
    #[test]
    fn prop_normalized_user_leaves_legacy_domain(user in "[0-9]{1,15}") {
        let jid = format!("{user}@c.us");
        let normalized = jid_normalized_user(&jid);
        prop_assert!(normalized.ends_with("@s.whatsapp.net"));
    }

    /// Repairing a repaired JID changes nothing further.
    #[test]
    fn prop_validate_and_fix_stabilizes(user in "[0-9]{1,15}") {
        let jid = format!("{user}@s.whatsapp.net");
        let fixed = validate_and_fix_jid(&jid);
        prop_assert_eq!(validate_and_fix_jid(&fixed), fixed);
    }
}
