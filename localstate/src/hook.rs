use leptos::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::binding::{load_from_storage, save_to_storage, Update};
use crate::options::LocalStateOptions;
use crate::storage;

struct StorageTarget<T> {
    key: String,
    options: LocalStateOptions<T>,
}

/// Writes to a value created by [`use_local_storage`] and friends.
///
/// Every call notifies subscribers, also when the value did not change,
/// and then makes a single attempt to persist the new value.
pub struct StorageSetter<T: 'static> {
    state: RwSignal<T>,
    target: StoredValue<StorageTarget<T>>,
}

impl<T: 'static> Clone for StorageSetter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for StorageSetter<T> {}

impl<T: 'static> StorageSetter<T> {
    pub fn set(&self, value: T) {
        self.state.set(value);
        self.persist();
    }

    /// Derive the new value from the current one, not from the value the
    /// caller last rendered.
    pub fn update<F: FnOnce(&T) -> T>(&self, f: F) {
        let value = self.state.with_untracked(f);
        self.set(value);
    }

    pub fn apply(&self, update: Update<T>) {
        let value = self.state.with_untracked(|current| update.resolve(current));
        self.set(value);
    }

    fn persist(&self) {
        self.target.with_value(|target| {
            self.state.with_untracked(|value| {
                save_to_storage(&target.key, value, &target.options)
            })
        });
    }
}

/// Reactive state of a storage binding, before it is wired to the
/// component lifecycle.
pub struct LocalStorageState<T: 'static> {
    initial: StoredValue<T>,
    stored: RwSignal<T>,
    attached: RwSignal<bool>,
    setter: StorageSetter<T>,
}

impl<T: 'static> Clone for LocalStorageState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for LocalStorageState<T> {}

impl<T: Clone + 'static> LocalStorageState<T> {
    pub fn new(key: &str, initial: T, options: LocalStateOptions<T>) -> Self {
        let key = options.storage_key(key);
        let stored =
            create_rw_signal(load_from_storage(&key, &initial, &options));
        let setter = StorageSetter {
            state: stored,
            target: store_value(StorageTarget { key, options }),
        };
        Self {
            initial: store_value(initial),
            stored,
            attached: create_rw_signal(false),
            setter,
        }
    }

    pub fn attach(&self) {
        if !self.attached.get_untracked() {
            self.setter
                .target
                .with_value(|target| log::debug!("Binding attached: {}", target.key));
            self.attached.set(true);
        }
    }

    pub fn is_attached(&self) -> Signal<bool> {
        self.attached.into()
    }

    pub fn value(&self) -> Signal<T> {
        let initial = self.initial;
        let stored = self.stored;
        let attached = self.attached;
        Signal::derive(move || {
            if attached.get() {
                stored.get()
            } else {
                initial.get_value()
            }
        })
    }

    pub fn setter(&self) -> StorageSetter<T> {
        self.setter
    }
}

/// Binds `key` in the browser's `localStorage` to a reactive value.
///
/// Returns `initial` until the component has been mounted on the client,
/// after which the value read from storage is used. Outside the browser
/// nothing is read or written.
pub fn use_local_storage<T>(
    key: &str,
    initial: T,
) -> (Signal<T>, StorageSetter<T>)
where
    T: Clone + Serialize + DeserializeOwned + 'static,
{
    use_local_storage_with_options(key, initial, LocalStateOptions::new())
}

/// Same as [`use_local_storage`], backed by `sessionStorage`.
pub fn use_session_storage<T>(
    key: &str,
    initial: T,
) -> (Signal<T>, StorageSetter<T>)
where
    T: Clone + Serialize + DeserializeOwned + 'static,
{
    let options = LocalStateOptions::new()
        .with_shared_storage(storage::session_storage());
    use_local_storage_with_options(key, initial, options)
}

pub fn use_local_storage_with_options<T: Clone + 'static>(
    key: &str,
    initial: T,
    options: LocalStateOptions<T>,
) -> (Signal<T>, StorageSetter<T>) {
    let state = LocalStorageState::new(key, initial, options);

    // effects run after the first render on the client and never on the
    // server, which is the moment storage-derived values may be shown
    create_effect(move |_| state.attach());

    (state.value(), state.setter())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::diagnostics::testing::RecordingSink;
    use crate::storage::{MemoryStorage, StorageProvider};

    fn memory_options(
        storage: &Rc<MemoryStorage>,
    ) -> LocalStateOptions<i32> {
        LocalStateOptions::new().with_storage(storage.clone())
    }

    #[test]
    fn test_count_scenario() {
        let runtime = create_runtime();
        let storage = Rc::new(MemoryStorage::new());

        let state = LocalStorageState::new("count", 0, memory_options(&storage));
        let value = state.value();
        let set_value = state.setter();

        state.attach();
        assert_eq!(value.get_untracked(), 0);

        set_value.set(5);
        assert_eq!(value.get_untracked(), 5);
        assert_eq!(storage.get_item("count").unwrap(), Some("5".to_string()));

        set_value.update(|n| n + 1);
        assert_eq!(value.get_untracked(), 6);

        runtime.dispose();
    }

    #[test]
    fn test_initial_value_until_attached() {
        let runtime = create_runtime();
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item("count", "12").unwrap();

        let state = LocalStorageState::new("count", 0, memory_options(&storage));
        let value = state.value();
        assert!(!state.is_attached().get_untracked());
        assert_eq!(value.get_untracked(), 0);

        state.attach();
        assert!(state.is_attached().get_untracked());
        assert_eq!(value.get_untracked(), 12);

        runtime.dispose();
    }

    #[test]
    fn test_writes_before_attach_are_persisted() {
        let runtime = create_runtime();
        let storage = Rc::new(MemoryStorage::new());

        let state = LocalStorageState::new("count", 0, memory_options(&storage));
        let value = state.value();
        state.setter().set(3);

        // still gated, but already stored
        assert_eq!(value.get_untracked(), 0);
        assert_eq!(storage.get_item("count").unwrap(), Some("3".to_string()));

        state.attach();
        assert_eq!(value.get_untracked(), 3);

        runtime.dispose();
    }

    #[test]
    fn test_updater_twice() {
        let runtime = create_runtime();
        let storage = Rc::new(MemoryStorage::new());

        let state = LocalStorageState::new("count", 0, memory_options(&storage));
        state.attach();
        let set_value = state.setter();
        set_value.apply(Update::with(|n| n + 1));
        set_value.apply(Update::with(|n| n + 1));

        assert_eq!(state.value().get_untracked(), 2);
        assert_eq!(storage.get_item("count").unwrap(), Some("2".to_string()));

        runtime.dispose();
    }

    #[test]
    fn test_malformed_entry() {
        let runtime = create_runtime();
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item("count", "not json").unwrap();
        let sink = Rc::new(RecordingSink::default());

        let options = memory_options(&storage).with_diagnostics(sink.clone());
        let state = LocalStorageState::new("count", 9, options);
        state.attach();

        assert_eq!(state.value().get_untracked(), 9);
        assert_eq!(sink.count(), 1);

        runtime.dispose();
    }

    #[test]
    fn test_empty_entry() {
        let runtime = create_runtime();
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item("count", "").unwrap();
        let sink = Rc::new(RecordingSink::default());

        let options = memory_options(&storage).with_diagnostics(sink.clone());
        let state = LocalStorageState::new("count", 5, options);
        state.attach();

        assert_eq!(state.value().get_untracked(), 5);
        assert_eq!(sink.count(), 0);

        runtime.dispose();
    }

    #[test]
    fn test_use_local_storage_with_options() {
        let runtime = create_runtime();
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item("lumni:count", "12").unwrap();
        let sink = Rc::new(RecordingSink::default());

        let options = memory_options(&storage)
            .with_prefix("lumni")
            .with_diagnostics(sink.clone());
        let (count, set_count) =
            use_local_storage_with_options("count", 0, options);

        // attached by the effect once it has run
        assert_eq!(count.get_untracked(), 12);

        set_count.update(|n| n + 1);
        assert_eq!(count.get_untracked(), 13);
        assert_eq!(
            storage.get_item("lumni:count").unwrap(),
            Some("13".to_string())
        );

        set_count.set(2);
        assert_eq!(count.get_untracked(), 2);
        assert_eq!(
            storage.get_item("lumni:count").unwrap(),
            Some("2".to_string())
        );
        assert_eq!(sink.count(), 0);

        runtime.dispose();
    }

    #[test]
    fn test_use_local_storage_outside_browser() {
        let runtime = create_runtime();

        let (count, set_count) = use_local_storage("count", 1);
        assert_eq!(count.get_untracked(), 1);

        set_count.update(|n| n * 10);
        assert_eq!(count.get_untracked(), 10);

        runtime.dispose();
    }

    #[test]
    fn test_session_storage_outside_browser() {
        let runtime = create_runtime();

        let options = LocalStateOptions::<i32>::new()
            .with_shared_storage(storage::session_storage());
        assert!(!options.has_storage());

        let state = LocalStorageState::new("count", 4, options);
        state.attach();
        state.setter().set(8);
        assert_eq!(state.value().get_untracked(), 8);

        runtime.dispose();
    }
}
