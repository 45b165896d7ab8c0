use std::fmt;
use std::rc::Rc;

use crate::codec::{Codec, JsonCodec};
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::storage::{self, StorageProvider};

/// Settings shared by the bindings a component creates.
///
/// Defaults to browser `localStorage` (when available), JSON text and
/// error logging through `log`.
pub struct LocalStateOptions<T> {
    pub(crate) prefix: Option<String>,
    pub(crate) storage: Option<Rc<dyn StorageProvider>>,
    pub(crate) codec: Rc<dyn Codec<T>>,
    pub(crate) diagnostics: Rc<dyn DiagnosticSink>,
}

impl<T> LocalStateOptions<T>
where
    JsonCodec: Codec<T>,
{
    pub fn new() -> Self {
        Self::from_codec(Rc::new(JsonCodec))
    }
}

impl<T> Default for LocalStateOptions<T>
where
    JsonCodec: Codec<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LocalStateOptions<T> {
    /// Options for values that are not JSON serializable.
    pub fn from_codec(codec: Rc<dyn Codec<T>>) -> Self {
        Self {
            prefix: None,
            storage: storage::local_storage(),
            codec,
            diagnostics: Rc::new(LogSink),
        }
    }

    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_storage<S: StorageProvider + 'static>(
        mut self,
        storage: Rc<S>,
    ) -> Self {
        self.storage = Some(storage as Rc<dyn StorageProvider>);
        self
    }

    pub fn with_shared_storage(
        mut self,
        storage: Option<Rc<dyn StorageProvider>>,
    ) -> Self {
        self.storage = storage;
        self
    }

    /// Behave as a non-interactive render would: nothing is read or written.
    pub fn without_storage(mut self) -> Self {
        self.storage = None;
        self
    }

    pub fn with_codec<C: Codec<T> + 'static>(mut self, codec: C) -> Self {
        self.codec = Rc::new(codec);
        self
    }

    pub fn with_diagnostics<D: DiagnosticSink + 'static>(
        mut self,
        diagnostics: Rc<D>,
    ) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn storage_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }

    pub fn has_storage(&self) -> bool {
        self.storage.is_some()
    }
}

impl<T> Clone for LocalStateOptions<T> {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            storage: self.storage.clone(),
            codec: Rc::clone(&self.codec),
            diagnostics: Rc::clone(&self.diagnostics),
        }
    }
}

impl<T> fmt::Debug for LocalStateOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalStateOptions")
            .field("prefix", &self.prefix)
            .field("has_storage", &self.storage.is_some())
            .finish()
    }
}
