use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::{
    PeerIdError, JSON_PRIV_KEY_UNSUPPORTED, JSON_PUB_KEY_UNSUPPORTED, KEY_ARGUMENTS_UNSUPPORTED,
    MARSHAL_UNSUPPORTED, SET_PRIV_KEY_UNSUPPORTED, SET_PUB_KEY_UNSUPPORTED,
};
use crate::domain::json::PeerIdJson;
use crate::domain::key::MarshaledKey;
use crate::domain::shape::{Comparand, IdShape};
use crate::infrastructure::codec::{self, PeerMultihash};

/// Prefix shared by every base58 sha2-256 multihash.
const SHA256_B58_PREFIX: &str = "Qm";
const MAX_PRINT_RUNES: usize = 6;

/// Immutable peer identifier backed by a multihash.
///
/// Lite variant: there is no key material attached, so key-related
/// operations always fail instead of degrading silently.
#[derive(Clone)]
pub struct PeerId {
    id: Vec<u8>,
    multihash: PeerMultihash,
    id_b58: String,
}

impl PeerId {
    pub fn new(id: Vec<u8>) -> Result<Self, PeerIdError> {
        let multihash = codec::decode(&id)?;
        let id_b58 = codec::to_b58_string(&id);
        tracing::debug!("Constructed peer id {}", id_b58);
        Ok(Self {
            id,
            multihash,
            id_b58,
        })
    }

    /// Constructor shape of key-capable peer ids. Any key fails here.
    pub fn with_keys(
        id: Vec<u8>,
        priv_key: Option<MarshaledKey>,
        pub_key: Option<MarshaledKey>,
    ) -> Result<Self, PeerIdError> {
        if priv_key.is_some() || pub_key.is_some() {
            tracing::warn!("Rejected peer id construction with key material");
            return Err(PeerIdError::Unsupported(KEY_ARGUMENTS_UNSUPPORTED));
        }
        Self::new(id)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PeerIdError> {
        Self::new(bytes.to_vec())
    }

    pub fn from_hex_string(s: &str) -> Result<Self, PeerIdError> {
        Self::new(codec::from_hex_string(s)?)
    }

    pub fn from_b58_string(s: &str) -> Result<Self, PeerIdError> {
        Self::new(codec::from_b58_string(s)?)
    }

    /// The id is decoded first, so a malformed id is reported ahead of any
    /// key field.
    pub fn from_json(obj: &PeerIdJson) -> Result<Self, PeerIdError> {
        let id = codec::from_b58_string(&obj.id)?;

        if obj.has_priv_key() {
            tracing::warn!("Rejected peer id json carrying a private key");
            return Err(PeerIdError::Unsupported(JSON_PRIV_KEY_UNSUPPORTED));
        }
        if obj.has_pub_key() {
            tracing::warn!("Rejected peer id json carrying a public key");
            return Err(PeerIdError::Unsupported(JSON_PUB_KEY_UNSUPPORTED));
        }

        Self::new(id)
    }

    pub fn from_json_str(s: &str) -> Result<Self, PeerIdError> {
        let obj: PeerIdJson = serde_json::from_str(s)?;
        Self::from_json(&obj)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.id
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.id.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.id
    }

    /// Computed on every call.
    pub fn to_hex_string(&self) -> String {
        codec::to_hex_string(&self.id)
    }

    pub fn to_b58_string(&self) -> &str {
        &self.id_b58
    }

    /// Short form for logs, e.g. `<peer.ID aozNR7>`. Not unique.
    pub fn to_print(&self) -> String {
        let pid = self
            .id_b58
            .strip_prefix(SHA256_B58_PREFIX)
            .unwrap_or(&self.id_b58);
        let short: String = pid.chars().take(MAX_PRINT_RUNES).collect();
        format!("<peer.ID {}>", short)
    }

    pub fn to_json(&self) -> PeerIdJson {
        PeerIdJson::new(self.id_b58.clone())
    }

    /// Multihash function code, e.g. `0x12` for sha2-256.
    pub fn code(&self) -> u64 {
        self.multihash.code()
    }

    pub fn digest(&self) -> &[u8] {
        self.multihash.digest()
    }

    pub fn multihash(&self) -> &PeerMultihash {
        &self.multihash
    }

    pub fn set_id(&mut self, _id: Vec<u8>) -> Result<(), PeerIdError> {
        Err(PeerIdError::Immutable)
    }

    pub fn set_priv_key(&mut self, _key: MarshaledKey) -> Result<(), PeerIdError> {
        Err(PeerIdError::Unsupported(SET_PRIV_KEY_UNSUPPORTED))
    }

    pub fn set_pub_key(&mut self, _key: MarshaledKey) -> Result<(), PeerIdError> {
        Err(PeerIdError::Unsupported(SET_PUB_KEY_UNSUPPORTED))
    }

    pub fn priv_key(&self) -> Option<&MarshaledKey> {
        None
    }

    pub fn pub_key(&self) -> Option<&MarshaledKey> {
        None
    }

    pub fn marshal_priv_key(&self) -> Result<Vec<u8>, PeerIdError> {
        Err(PeerIdError::Unsupported(MARSHAL_UNSUPPORTED))
    }

    pub fn marshal_pub_key(&self) -> Result<Vec<u8>, PeerIdError> {
        Err(PeerIdError::Unsupported(MARSHAL_UNSUPPORTED))
    }

    /// Compares against raw bytes or anything shaped like a peer id.
    pub fn is_equal<'a>(&self, other: impl Into<Comparand<'a>>) -> Result<bool, PeerIdError> {
        match other.into() {
            Comparand::Bytes(bytes) => Ok(self.id.as_slice() == bytes),
            Comparand::Shape(shape) => shape
                .id_bytes()
                .map(|bytes| self.id.as_slice() == bytes)
                .ok_or(PeerIdError::InvalidComparand),
        }
    }

    /// Without keys there is nothing to check the id against.
    pub fn is_valid(&self) -> Result<(), PeerIdError> {
        Err(PeerIdError::KeysNotMatch)
    }
}

impl IdShape for PeerId {
    fn id_bytes(&self) -> Option<&[u8]> {
        Some(&self.id)
    }

    fn id_b58_string(&self) -> Option<&str> {
        Some(&self.id_b58)
    }
}

impl PartialEq for PeerId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PeerId {}

impl PartialEq<[u8]> for PeerId {
    fn eq(&self, other: &[u8]) -> bool {
        self.id.as_slice() == other
    }
}

impl PartialEq<Vec<u8>> for PeerId {
    fn eq(&self, other: &Vec<u8>) -> bool {
        &self.id == other
    }
}

impl Hash for PeerId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl AsRef<[u8]> for PeerId {
    fn as_ref(&self) -> &[u8] {
        &self.id
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PeerId").field(&self.id_b58).finish()
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id_b58)
    }
}

impl FromStr for PeerId {
    type Err = PeerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_b58_string(s)
    }
}

impl TryFrom<Vec<u8>> for PeerId {
    type Error = PeerIdError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl Serialize for PeerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PeerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let obj = PeerIdJson::deserialize(deserializer)?;
        PeerId::from_json(&obj).map_err(serde::de::Error::custom)
    }
}
