use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Node identity record in the layout of the go-ipfs config file.
///
/// The lite peer id only ever writes `id`. Key fields are kept in the type so
/// records written by key-capable implementations still parse, and can then
/// be rejected explicitly. Their content is never interpreted, so any JSON
/// value is accepted there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerIdJson {
    pub id: String,
    #[serde(rename = "privKey", default, skip_serializing_if = "Option::is_none")]
    pub priv_key: Option<Value>,
    #[serde(rename = "pubKey", default, skip_serializing_if = "Option::is_none")]
    pub pub_key: Option<Value>,
}

impl PeerIdJson {
    pub fn new(id: String) -> Self {
        Self {
            id,
            priv_key: None,
            pub_key: None,
        }
    }

    /// `null`, `false`, `0` and `""` count as absent.
    pub fn has_priv_key(&self) -> bool {
        self.priv_key.as_ref().is_some_and(is_set)
    }

    pub fn has_pub_key(&self) -> bool {
        self.pub_key.as_ref().is_some_and(is_set)
    }
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
