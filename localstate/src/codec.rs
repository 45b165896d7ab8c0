use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{LocalStateError, LocalStateResult};

/// Text representation of a value in the store.
pub trait Codec<T> {
    fn encode(&self, value: &T) -> LocalStateResult<String>;
    fn decode(&self, text: &str) -> LocalStateResult<T>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl<T: Serialize + DeserializeOwned> Codec<T> for JsonCodec {
    fn encode(&self, value: &T) -> LocalStateResult<String> {
        serde_json::to_string(value).map_err(LocalStateError::serialize)
    }

    fn decode(&self, text: &str) -> LocalStateResult<T> {
        serde_json::from_str(text).map_err(LocalStateError::deserialize)
    }
}
