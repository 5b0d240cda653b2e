//! Multihash codec used by [`PeerId`](crate::domain::peer_id::PeerId).
//!
//! The `multihash` crate is the only authority on well-formedness; nothing
//! here inspects the byte layout itself.

use crate::domain::error::PeerIdError;
use multihash::Multihash;

/// Largest digest accepted, in bytes. Covers sha2-512, blake2b-512 and the
/// identity-hashed keys libp2p inlines into peer ids (at most 42 bytes).
/// Well-formed multihashes with a longer digest are rejected as
/// [`PeerIdError::InvalidMultihash`].
pub const MAX_DIGEST_SIZE: usize = 64;

pub type PeerMultihash = Multihash<MAX_DIGEST_SIZE>;

/// Decode and validate a multihash. Trailing bytes are rejected.
pub fn decode(bytes: &[u8]) -> Result<PeerMultihash, PeerIdError> {
    PeerMultihash::from_bytes(bytes).map_err(|e| {
        tracing::debug!("Rejected multihash of {} bytes: {}", bytes.len(), e);
        PeerIdError::from(e)
    })
}

pub fn to_b58_string(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

pub fn from_b58_string(s: &str) -> Result<Vec<u8>, PeerIdError> {
    bs58::decode(s).into_vec().map_err(|e| {
        tracing::debug!("Failed to decode base58 peer id {:?}: {}", s, e);
        PeerIdError::from(e)
    })
}

pub fn to_hex_string(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub fn from_hex_string(s: &str) -> Result<Vec<u8>, PeerIdError> {
    hex::decode(s).map_err(|e| {
        tracing::debug!("Failed to decode hex peer id {:?}: {}", s, e);
        PeerIdError::from(e)
    })
}
