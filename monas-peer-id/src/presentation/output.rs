use serde::{Deserialize, Serialize};

use crate::domain::error::PeerIdError;
use crate::domain::json::PeerIdJson;
use crate::domain::peer_id::PeerId;

/// How a peer id is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Base58,
    Hex,
    Json,
    Print,
}

/// How a peer id is read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InputEncoding {
    #[default]
    Base58,
    Hex,
    Json,
}

pub fn parse_peer_id(input: &str, encoding: InputEncoding) -> Result<PeerId, PeerIdError> {
    let input = input.trim();
    match encoding {
        InputEncoding::Base58 => PeerId::from_b58_string(input),
        InputEncoding::Hex => PeerId::from_hex_string(input),
        InputEncoding::Json => {
            let obj: PeerIdJson = serde_json::from_str(input)?;
            PeerId::from_json(&obj)
        }
    }
}

pub fn render(peer_id: &PeerId, format: OutputFormat) -> Result<String, PeerIdError> {
    let rendered = match format {
        OutputFormat::Base58 => peer_id.to_b58_string().to_string(),
        OutputFormat::Hex => peer_id.to_hex_string(),
        OutputFormat::Json => serde_json::to_string(&peer_id.to_json())?,
        OutputFormat::Print => peer_id.to_print(),
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_HEX: &str = "1220b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";
    const HELLO_B58: &str = "QmaozNR7DZHQK1ZcU9p7QdrshMvXqWK6gpu5rmrkPdT3L4";

    #[test]
    fn test_render_each_format() {
        let peer_id = PeerId::from_b58_string(HELLO_B58).unwrap();

        assert_eq!(render(&peer_id, OutputFormat::Base58).unwrap(), HELLO_B58);
        assert_eq!(render(&peer_id, OutputFormat::Hex).unwrap(), HELLO_HEX);
        assert_eq!(
            render(&peer_id, OutputFormat::Json).unwrap(),
            format!(r#"{{"id":"{}"}}"#, HELLO_B58)
        );
        assert_eq!(
            render(&peer_id, OutputFormat::Print).unwrap(),
            "<peer.ID aozNR7>"
        );
    }

    #[test]
    fn test_parse_each_encoding() {
        let from_b58 = parse_peer_id(HELLO_B58, InputEncoding::Base58).unwrap();
        let from_hex = parse_peer_id(&format!(" {}\n", HELLO_HEX), InputEncoding::Hex).unwrap();
        let from_json = parse_peer_id(
            &format!(r#"{{"id":"{}"}}"#, HELLO_B58),
            InputEncoding::Json,
        )
        .unwrap();

        assert_eq!(from_b58, from_hex);
        assert_eq!(from_b58, from_json);
    }

    #[test]
    fn test_parse_wrong_encoding_fails() {
        // hex digits include '0', which base58 never uses
        let result = parse_peer_id(HELLO_HEX, InputEncoding::Base58);
        assert!(result.unwrap_err().is_invalid_input());

        let result = parse_peer_id("{not json", InputEncoding::Json);
        assert!(matches!(result, Err(PeerIdError::Json(_))));
    }
}
