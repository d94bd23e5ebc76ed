//! Decode collaborators used by `Pipeline::decode_with`.

use serde::de::DeserializeOwned;

/// Turns response bytes into a `T`.
pub trait Decoder<T> {
    type Error: std::error::Error + Send + Sync + 'static;

    fn decode(&self, bytes: &[u8]) -> Result<T, Self::Error>;
}

/// JSON decoding through `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl<T: DeserializeOwned> Decoder<T> for Json {
    type Error = serde_json::Error;

    fn decode(&self, bytes: &[u8]) -> Result<T, Self::Error> {
        serde_json::from_slice(bytes)
    }
}
