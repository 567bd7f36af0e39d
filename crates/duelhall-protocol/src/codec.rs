//! Codec trait and the JSON implementation.
//!
//! The connection handler never calls `serde_json` directly; it goes
//! through a [`Codec`] so the framing format can change without touching
//! the room layer.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Encodes Rust values to bytes and decodes bytes back.
pub trait Codec: Send + Sync + 'static {
    /// `true` when encoded output is always valid UTF-8 and should go out
    /// as text frames.
    const TEXT: bool;

    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed or don't
    /// match the expected shape.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

/// JSON codec using `serde_json`. Browser clients speak this.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    const TEXT: bool = true;

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientAction, GameKind, ServerEvent};

    #[test]
    fn test_json_codec_decodes_client_action() {
        let codec = JsonCodec;
        let action: ClientAction = codec
            .decode(br#"{"type":"join","kind":"battleship"}"#)
            .unwrap();
        assert_eq!(
            action,
            ClientAction::Join {
                kind: GameKind::Battleship,
                room_id: None
            }
        );
    }

    #[test]
    fn test_json_codec_output_is_utf8() {
        let codec = JsonCodec;
        let bytes = codec.encode(&ServerEvent::PlayerLeft).unwrap();
        assert!(JsonCodec::TEXT);
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), r#"{"type":"player_left"}"#);
    }

    #[test]
    fn test_json_codec_decode_garbage_is_error() {
        let result: Result<ClientAction, _> = JsonCodec.decode(b"\x00\x01 not json");
        assert!(matches!(result, Err(ProtocolError::Decode(_))));
    }
}
