mod binding;
mod codec;
mod diagnostics;
mod error;
mod hook;
mod options;

pub mod storage;

pub use binding::{PersistentBinding, Update};
pub use codec::{Codec, JsonCodec};
pub use diagnostics::{DiagnosticSink, LogSink};
pub use error::{LocalStateError, LocalStateResult};
pub use hook::{
    use_local_storage, use_local_storage_with_options, use_session_storage,
    LocalStorageState, StorageSetter,
};
pub use options::LocalStateOptions;
pub use storage::{MemoryStorage, StorageProvider};
