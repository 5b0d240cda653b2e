//! Completion-handler entry points.
//!
//! Key-capable peer ids derive keys asynchronously and report through a
//! handler. The lite variant keeps the same calling convention, but every
//! handler runs synchronously and exactly once before the call returns.

use crate::domain::error::{PeerIdError, NOT_SUPPORTED_IN_LITE};
use crate::domain::json::PeerIdJson;
use crate::domain::key::MarshaledKey;
use crate::domain::peer_id::PeerId;

/// Key generation options of key-capable peer ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateOptions {
    pub bits: u32,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self { bits: 2048 }
    }
}

pub fn create<F>(options: Option<CreateOptions>, done: F)
where
    F: FnOnce(Result<PeerId, PeerIdError>),
{
    let options = options.unwrap_or_default();
    tracing::warn!("Rejected peer id creation ({} bit key) in lite", options.bits);
    done(Err(PeerIdError::Unsupported(NOT_SUPPORTED_IN_LITE)));
}

pub fn create_from_pub_key<F>(_key: &MarshaledKey, done: F)
where
    F: FnOnce(Result<PeerId, PeerIdError>),
{
    tracing::warn!("Rejected peer id creation from public key in lite");
    done(Err(PeerIdError::Unsupported(NOT_SUPPORTED_IN_LITE)));
}

pub fn create_from_priv_key<F>(_key: &MarshaledKey, done: F)
where
    F: FnOnce(Result<PeerId, PeerIdError>),
{
    tracing::warn!("Rejected peer id creation from private key in lite");
    done(Err(PeerIdError::Unsupported(NOT_SUPPORTED_IN_LITE)));
}

/// A missing handler is returned as an error without decoding anything.
/// Every other outcome goes through the handler.
pub fn create_from_json<F>(obj: &PeerIdJson, done: Option<F>) -> Result<(), PeerIdError>
where
    F: FnOnce(Result<PeerId, PeerIdError>),
{
    let done = done.ok_or(PeerIdError::MissingArgument("callback"))?;
    done(PeerId::from_json(obj));
    Ok(())
}

pub fn is_valid<F>(peer_id: &PeerId, done: F)
where
    F: FnOnce(Result<(), PeerIdError>),
{
    done(peer_id.is_valid());
}

#[cfg(test)]
mod tests {
    use super::*;

    type Handler = fn(Result<PeerId, PeerIdError>);

    const HELLO_B58: &str = "QmaozNR7DZHQK1ZcU9p7QdrshMvXqWK6gpu5rmrkPdT3L4";

    #[test]
    fn test_create_reports_unsupported() {
        let mut outcome = None;
        create(None, |res| outcome = Some(res));
        assert!(outcome.unwrap().unwrap_err().is_unsupported());

        let mut outcome = None;
        create(Some(CreateOptions { bits: 512 }), |res| outcome = Some(res));
        assert!(outcome.unwrap().unwrap_err().is_unsupported());
    }

    #[test]
    fn test_create_from_keys_reports_unsupported() {
        let key = MarshaledKey::new(vec![8, 1, 18, 32]);

        let mut calls = 0;
        create_from_pub_key(&key, |res| {
            calls += 1;
            assert!(res.unwrap_err().is_unsupported());
        });
        create_from_priv_key(&key, |res| {
            calls += 1;
            assert!(res.unwrap_err().is_unsupported());
        });
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_create_from_json_delivers_peer_id() {
        let obj = PeerIdJson::new(HELLO_B58.to_string());
        let mut outcome = None;
        create_from_json(
            &obj,
            Some(|res: Result<PeerId, PeerIdError>| outcome = Some(res)),
        )
        .unwrap();

        let peer_id = outcome.unwrap().unwrap();
        assert_eq!(peer_id.to_b58_string(), HELLO_B58);
    }

    #[test]
    fn test_create_from_json_delivers_decode_error() {
        let obj = PeerIdJson::new("0OIl".to_string());
        let mut outcome = None;
        let returned = create_from_json(
            &obj,
            Some(|res: Result<PeerId, PeerIdError>| outcome = Some(res)),
        );

        assert!(returned.is_ok());
        assert!(outcome.unwrap().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_create_from_json_requires_handler() {
        // even a malformed record reports the missing handler first
        let obj = PeerIdJson::new("0OIl".to_string());
        let err = create_from_json::<Handler>(&obj, None).unwrap_err();
        assert!(matches!(err, PeerIdError::MissingArgument("callback")));
    }

    #[test]
    fn test_is_valid_reports_keys_not_match() {
        let peer_id = PeerId::from_b58_string(HELLO_B58).unwrap();
        let mut outcome = None;
        is_valid(&peer_id, |res| outcome = Some(res));
        assert!(matches!(outcome, Some(Err(PeerIdError::KeysNotMatch))));
    }
}
