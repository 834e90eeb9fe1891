//! JID addressing for the WhatsApp Web protocol: encoding and decoding of
//! participant identifiers (`user[_agent][:device]@server`) and the phone
//! number heuristics used to bring raw numbers into canonical form.

pub mod constant;
pub mod types;
pub mod utils;

pub use constant::{META_AI_JID, OFFICIAL_BIZ_JID, PSA_WID, SERVER_JID, STORIES_JID, S_WHATSAPP_NET};
pub use types::jid::{FullJid, JidServer, JidUser};
pub use utils::classify::{
    are_jids_same_user, is_hidden_number_jid, is_international_jid, is_jid_bot, is_jid_broadcast,
    is_jid_group, is_jid_meta_ia, is_jid_newsletter, is_jid_status_broadcast, is_jid_user,
    is_lid_user,
};
pub use utils::codec::{
    jid_decode, jid_decode_traced, jid_encode, jid_normalized_user, DecodeTrace, LogTrace, NoTrace,
};
pub use utils::phone::{
    is_hidden_number, is_international_number, normalize_phone_number, NumberPlan, BRAZIL_PLAN,
};
pub use utils::validate::{create_valid_jid, validate_and_fix_jid};
