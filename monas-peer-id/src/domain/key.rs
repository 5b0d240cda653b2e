/// Serialized key material, as produced by a key-capable peer id.
///
/// The lite peer id never interprets these bytes; every operation that takes
/// one fails with [`PeerIdError::Unsupported`](crate::domain::error::PeerIdError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarshaledKey(Vec<u8>);

impl MarshaledKey {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for MarshaledKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
