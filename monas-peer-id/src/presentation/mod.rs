pub mod output;

pub use output::{parse_peer_id, render, InputEncoding, OutputFormat};
