pub mod error;
pub mod json;
pub mod key;
pub mod peer_id;
pub mod shape;

pub use error::PeerIdError;
pub use json::PeerIdJson;
pub use key::MarshaledKey;
pub use peer_id::PeerId;
pub use shape::{is_peer_id, Comparand, IdShape};
