use crate::options::LocalStateOptions;

const READ_ERROR: &str = "Error getting value from storage";
const WRITE_ERROR: &str = "Error writing value to storage";

/// New value for a binding: either given as-is, or derived from the
/// current value.
pub enum Update<T> {
    Value(T),
    With(Box<dyn FnOnce(&T) -> T>),
}

impl<T> Update<T> {
    pub fn with<F: FnOnce(&T) -> T + 'static>(f: F) -> Self {
        Update::With(Box::new(f))
    }

    pub fn resolve(self, current: &T) -> T {
        match self {
            Update::Value(value) => value,
            Update::With(f) => f(current),
        }
    }
}

impl<T> From<T> for Update<T> {
    fn from(value: T) -> Self {
        Update::Value(value)
    }
}

/// Reads `key` from the configured store, falling back to `initial` when
/// there is no store, no entry, or the entry cannot be read.
pub(crate) fn load_from_storage<T: Clone>(
    key: &str,
    initial: &T,
    options: &LocalStateOptions<T>,
) -> T {
    let storage = match &options.storage {
        Some(storage) => storage,
        None => return initial.clone(),
    };

    // an empty entry counts as no entry
    let loaded = storage.get_item(key).and_then(|item| {
        item.filter(|text| !text.is_empty())
            .map(|text| options.codec.decode(&text))
            .transpose()
    });

    match loaded {
        Ok(Some(value)) => value,
        Ok(None) => initial.clone(),
        Err(e) => {
            options.diagnostics.report(READ_ERROR, &e);
            initial.clone()
        }
    }
}

/// Best-effort write of `value` under `key`. Failures are reported, never
/// retried.
pub(crate) fn save_to_storage<T>(
    key: &str,
    value: &T,
    options: &LocalStateOptions<T>,
) {
    if let Some(storage) = &options.storage {
        let result = options
            .codec
            .encode(value)
            .and_then(|text| storage.set_item(key, &text));
        if let Err(e) = result {
            options.diagnostics.report(WRITE_ERROR, &e);
        }
    }
}

/// A value bound to a storage key, independent of any UI framework.
///
/// The stored value is read once, at creation. Until [`attach`] is called
/// [`value`] keeps returning the initial value, so a first render on the
/// client matches what a render without storage would have produced.
///
/// [`attach`]: PersistentBinding::attach
/// [`value`]: PersistentBinding::value
pub struct PersistentBinding<T> {
    key: String,
    initial: T,
    state: T,
    attached: bool,
    options: LocalStateOptions<T>,
}

impl<T: Clone> PersistentBinding<T> {
    pub fn new(key: &str, initial: T, options: LocalStateOptions<T>) -> Self {
        let key = options.storage_key(key);
        let state = load_from_storage(&key, &initial, &options);
        Self {
            key,
            initial,
            state,
            attached: false,
            options,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &T {
        if self.attached {
            &self.state
        } else {
            &self.initial
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn attach(&mut self) {
        if !self.attached {
            log::debug!("Binding attached: {}", self.key);
            self.attached = true;
        }
    }

    pub fn set(&mut self, value: T) {
        self.state = value;
        save_to_storage(&self.key, &self.state, &self.options);
    }

    pub fn update<F: FnOnce(&T) -> T>(&mut self, f: F) {
        let value = f(&self.state);
        self.set(value);
    }

    pub fn apply(&mut self, update: Update<T>) {
        let value = update.resolve(&self.state);
        self.set(value);
    }
}
