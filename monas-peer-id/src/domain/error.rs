use thiserror::Error;

#[derive(Debug, Error)]
pub enum PeerIdError {
    #[error("invalid id provided: malformed hex ({0})")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("invalid id provided: malformed base58 ({0})")]
    InvalidBase58(#[from] bs58::decode::Error),
    #[error("invalid id provided: not a multihash ({0})")]
    InvalidMultihash(#[from] multihash::Error),
    #[error("Id is immutable")]
    Immutable,
    #[error("{0}")]
    Unsupported(&'static str),
    #[error("{0} is required")]
    MissingArgument(&'static str),
    #[error("not valid Id")]
    InvalidComparand,
    #[error("Keys not match")]
    KeysNotMatch,
    #[error("invalid peer id json: {0}")]
    Json(#[from] serde_json::Error),
}

impl PeerIdError {
    /// True for every failure caused by the input bytes or text itself.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PeerIdError::InvalidHex(_)
                | PeerIdError::InvalidBase58(_)
                | PeerIdError::InvalidMultihash(_)
                | PeerIdError::Json(_)
        )
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, PeerIdError::Unsupported(_))
    }
}

pub(crate) const NOT_SUPPORTED_IN_LITE: &str = "not supported in lite";
pub(crate) const KEY_ARGUMENTS_UNSUPPORTED: &str =
    "private/public key arguments unsupported in lite";
pub(crate) const SET_PRIV_KEY_UNSUPPORTED: &str = "set private key unsupported in lite";
pub(crate) const SET_PUB_KEY_UNSUPPORTED: &str = "set public key unsupported in lite";
pub(crate) const MARSHAL_UNSUPPORTED: &str = "marshaling keys unsupported in lite";
pub(crate) const JSON_PRIV_KEY_UNSUPPORTED: &str =
    "create from JSON with private key not supported in lite";
pub(crate) const JSON_PUB_KEY_UNSUPPORTED: &str =
    "create from JSON with public key not supported in lite";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_classification() {
        let hex_err = PeerIdError::from(hex::FromHexError::OddLength);
        assert!(hex_err.is_invalid_input());
        assert!(!hex_err.is_unsupported());

        assert!(PeerIdError::Unsupported(NOT_SUPPORTED_IN_LITE).is_unsupported());
        assert!(!PeerIdError::Immutable.is_invalid_input());
        assert!(!PeerIdError::KeysNotMatch.is_invalid_input());
    }

    #[test]
    fn test_messages() {
        assert_eq!(PeerIdError::Immutable.to_string(), "Id is immutable");
        assert_eq!(PeerIdError::KeysNotMatch.to_string(), "Keys not match");
        assert_eq!(
            PeerIdError::MissingArgument("callback").to_string(),
            "callback is required"
        );
        assert_eq!(
            PeerIdError::Unsupported(NOT_SUPPORTED_IN_LITE).to_string(),
            "not supported in lite"
        );
    }
}
