use std::fmt;

/// The addressing domains a JID can live on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JidServer {
    /// `c.us`, the legacy user domain.
    LegacyUser,
    /// `s.whatsapp.net`, the current user domain.
    #[default]
    User,
    /// `g.us`, group chats.
    Group,
    Broadcast,
    Call,
    /// `lid`, the privacy-preserving user alias domain.
    Lid,
    Newsletter,
    Bot,
}

impl JidServer {
    pub const fn as_str(self) -> &'static str {
        match self {
            JidServer::LegacyUser => "c.us",
            JidServer::User => "s.whatsapp.net",
            JidServer::Group => "g.us",
            JidServer::Broadcast => "broadcast",
            JidServer::Call => "call",
            JidServer::Lid => "lid",
            JidServer::Newsletter => "newsletter",
            JidServer::Bot => "bot",
        }
    }
}

impl AsRef<str> for JidServer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for JidServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user part handed to `jid_encode`.
///
/// `Phone` text is run through phone normalization before encoding;
/// `Opaque` ids (groups, newsletters, pre-normalized numeric ids) are
/// written out verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JidUser<'a> {
    Phone(&'a str),
    Opaque(&'a str),
    Empty,
}

/// A decoded JID.
///
/// `server` is kept as the raw text after the `@` since decode accepts any
/// domain; absence of `device` means the primary device, never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullJid {
    pub user: String,
    pub device: Option<u16>,
    pub server: String,
}

impl FullJid {
    /// 1 for the `lid` alias domain, 0 for everything else. Derived from
    /// `server`, so it can never disagree with it.
    pub fn domain_type(&self) -> u8 {
        u8::from(self.server == JidServer::Lid.as_str())
    }
}
