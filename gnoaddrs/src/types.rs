use std::{
    collections::HashSet,
    fmt::{Debug, Display},
};

///
/// Address
///
/// An account identifier exactly as it appeared in the indexer response, e.g. `g1abc...`.
/// No bech32 validation happens here; the extractor pattern is the only constraint.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Address({})", self.0)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

///
/// UniqueAddressSet
///
/// Every distinct address seen during one run.
pub type UniqueAddressSet = HashSet<Address>;

///
/// RawResponse
///
/// The undecoded body returned by the indexer. It is only ever scanned as text.
pub struct RawResponse {
    pub body: String,
}

impl RawResponse {
    pub fn new(body: String) -> Self {
        Self { body }
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }
}

impl Debug for RawResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RawResponse {{ {} bytes }}", self.body.len())
    }
}

///
/// MessageKind
///
/// The transaction message variants the indexer query selects, and the
/// address-bearing fields each one carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Fund transfer
    BankMsgSend,
    /// Contract call
    MsgCall,
    /// Package addition
    MsgAddPackage,
    /// Package execution
    MsgRun,
}

impl MessageKind {
    pub const ALL: [MessageKind; 4] = [
        MessageKind::BankMsgSend,
        MessageKind::MsgCall,
        MessageKind::MsgAddPackage,
        MessageKind::MsgRun,
    ];

    /// GraphQL `__typename` of the variant.
    pub fn typename(&self) -> &'static str {
        match self {
            MessageKind::BankMsgSend => "BankMsgSend",
            MessageKind::MsgCall => "MsgCall",
            MessageKind::MsgAddPackage => "MsgAddPackage",
            MessageKind::MsgRun => "MsgRun",
        }
    }

    pub fn address_fields(&self) -> &'static [&'static str] {
        match self {
            MessageKind::BankMsgSend => &["from_address", "to_address"],
            MessageKind::MsgCall | MessageKind::MsgRun => &["caller"],
            MessageKind::MsgAddPackage => &["creator"],
        }
    }
}

impl Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.typename())
    }
}
