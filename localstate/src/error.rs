use std::error::Error;
use std::fmt;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

pub type LocalStateResult<T> = Result<T, LocalStateError>;

#[derive(Debug)]
pub enum LocalStateError {
    StoreUnavailable,
    Read(String),
    Write(String),
    Serialize(String),
    Deserialize(String),
    #[cfg(target_arch = "wasm32")]
    Js(JsValue),
}

impl LocalStateError {
    // serde_json uses one error type for both directions
    pub fn serialize(error: serde_json::Error) -> Self {
        LocalStateError::Serialize(error.to_string())
    }

    pub fn deserialize(error: serde_json::Error) -> Self {
        LocalStateError::Deserialize(error.to_string())
    }
}

impl fmt::Display for LocalStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalStateError::StoreUnavailable => {
                write!(f, "Storage is not available")
            }
            LocalStateError::Read(msg) => {
                write!(f, "Failed to read from storage: {}", msg)
            }
            LocalStateError::Write(msg) => {
                write!(f, "Failed to write to storage: {}", msg)
            }
            LocalStateError::Serialize(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            LocalStateError::Deserialize(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
            #[cfg(target_arch = "wasm32")]
            LocalStateError::Js(e) => write!(
                f,
                "JsError: {}",
                e.as_string().unwrap_or_else(|| "Unknown error".to_string())
            ),
        }
    }
}

impl Error for LocalStateError {}

#[cfg(target_arch = "wasm32")]
impl From<JsValue> for LocalStateError {
    fn from(e: JsValue) -> Self {
        LocalStateError::Js(e)
    }
}
