//! Structural recognition of peer identifiers.
//!
//! Two builds of this crate produce distinct `PeerId` types, so a nominal
//! type check cannot tell that both are peer ids. Anything that exposes the
//! identity bytes and the cached base58 form is treated as one.

use crate::domain::peer_id::PeerId;

/// The two fields that make a value look like a peer id.
pub trait IdShape {
    fn id_bytes(&self) -> Option<&[u8]>;

    fn id_b58_string(&self) -> Option<&str>;
}

/// Best-effort check: id bytes present (possibly empty) and a non-empty
/// base58 string. Does not validate the bytes as a multihash.
pub fn is_peer_id(value: &dyn IdShape) -> bool {
    let has_id = value.id_bytes().is_some();
    let has_b58 = value.id_b58_string().is_some_and(|s| !s.is_empty());
    has_id && has_b58
}

/// Right-hand side of [`PeerId::is_equal`].
#[derive(Clone, Copy)]
pub enum Comparand<'a> {
    Bytes(&'a [u8]),
    Shape(&'a dyn IdShape),
}

impl<'a> From<&'a [u8]> for Comparand<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Comparand::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Comparand<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Comparand::Bytes(bytes.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Comparand<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Comparand::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a PeerId> for Comparand<'a> {
    fn from(peer_id: &'a PeerId) -> Self {
        Comparand::Shape(peer_id)
    }
}

impl<'a> From<&'a dyn IdShape> for Comparand<'a> {
    fn from(shape: &'a dyn IdShape) -> Self {
        Comparand::Shape(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ForeignPeerId {
        id: Vec<u8>,
        id_b58: String,
    }

    impl IdShape for ForeignPeerId {
        fn id_bytes(&self) -> Option<&[u8]> {
            Some(&self.id)
        }

        fn id_b58_string(&self) -> Option<&str> {
            Some(&self.id_b58)
        }
    }

    struct Unrelated;

    impl IdShape for Unrelated {
        fn id_bytes(&self) -> Option<&[u8]> {
            None
        }

        fn id_b58_string(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn test_foreign_shape_is_recognised() {
        let foreign = ForeignPeerId {
            id: vec![0x00, 0x03, b'a', b'b', b'c'],
            id_b58: "161g3c".to_string(),
        };
        assert!(is_peer_id(&foreign));
    }

    #[test]
    fn test_missing_fields_are_not_a_peer_id() {
        assert!(!is_peer_id(&Unrelated));

        let half = ForeignPeerId {
            id: vec![0x00, 0x00],
            id_b58: String::new(),
        };
        assert!(!is_peer_id(&half));
    }

    #[test]
    fn test_empty_id_bytes_still_count_as_present() {
        let empty_id = ForeignPeerId {
            id: Vec::new(),
            id_b58: "11".to_string(),
        };
        assert!(is_peer_id(&empty_id));
    }

    #[test]
    fn test_own_peer_id_is_recognised() {
        let peer_id = PeerId::from_b58_string("161g3c").unwrap();
        assert!(is_peer_id(&peer_id));
    }
}
