//! Theme state shared by every mounted view.
//!
//! A [`ThemeStore`] owns the current [`Theme`] and writes every change through
//! a [`ThemeStorage`] backend. Views register with [`ThemeStore::subscribe`]
//! and are called back synchronously, in subscription order, whenever the
//! theme changes. Everything here runs on the UI thread, so state lives in
//! `Cell`/`RefCell` and is shared with `Rc`.

use core::cell::{Cell, RefCell};
use core::fmt;
use std::rc::{Rc, Weak};

use crate::error::{PersistenceError, ThemeError};
use crate::theme::Theme;

/// Key/value backend holding the persisted theme name.
pub trait ThemeStorage {
    fn load(&self) -> Result<Option<String>, PersistenceError>;
    fn save(&self, value: &str) -> Result<(), PersistenceError>;
}

impl<S: ThemeStorage + ?Sized> ThemeStorage for Rc<S> {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        (**self).load()
    }

    fn save(&self, value: &str) -> Result<(), PersistenceError> {
        (**self).save(value)
    }
}

/// In-memory backend, for hosts without browser storage and for tests.
///
/// With [`MemoryStorage::set_failing`] every access errors out, the same way
/// a disabled or full browser storage would.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    value: RefCell<Option<String>>,
    failing: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let storage = Self::default();
        storage.value.replace(Some(value.into()));
        storage
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    fn check(&self) -> Result<(), PersistenceError> {
        if self.failing.get() {
            Err(PersistenceError::new("storage is unavailable"))
        } else {
            Ok(())
        }
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        self.check()?;
        Ok(self.value.borrow().clone())
    }

    fn save(&self, value: &str) -> Result<(), PersistenceError> {
        self.check()?;
        self.value.replace(Some(value.to_string()));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

type Listener = Rc<dyn Fn(Theme)>;

#[derive(Default)]
struct Subscribers {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Listener)>>,
}

impl Subscribers {
    fn insert(&self, listener: Listener) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, listener));
        id
    }

    fn remove(&self, id: u64) {
        self.entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
    }

    fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    fn notify(&self, theme: Theme) {
        // listeners may (un)subscribe or set the theme while being called
        let listeners: Vec<Listener> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(theme);
        }
    }
}

/// Keeps a listener registered until dropped.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct Subscription {
    id: u64,
    subscribers: Weak<Subscribers>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.remove(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

pub struct ThemeStore<S> {
    storage: S,
    current: Cell<Theme>,
    subscribers: Rc<Subscribers>,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Reads the persisted theme, falling back to [`Theme::default`] when
    /// nothing usable is stored.
    pub fn initialize(storage: S) -> Self {
        let theme = match storage.load() {
            Ok(Some(value)) => value.parse().unwrap_or_else(|err| {
                log::warn!("ignoring stored theme: {}", err);
                Theme::default()
            }),
            Ok(None) => {
                log::debug!("no theme preference");
                Theme::default()
            }
            Err(err) => {
                log::error!("failed to load theme: {}", err);
                Theme::default()
            }
        };
        log::debug!("theme-scheme: {}", theme);
        Self {
            storage,
            current: Cell::new(theme),
            subscribers: Rc::default(),
        }
    }

    pub fn current_theme(&self) -> Theme {
        self.current.get()
    }

    /// Persists `theme`, makes it current and notifies subscribers if it
    /// differs from the previous one.
    ///
    /// A storage failure does not stop the in-memory update; it is only
    /// reported back once subscribers have run.
    pub fn set_theme(&self, theme: Theme) -> Result<(), PersistenceError> {
        let saved = self.storage.save(theme.as_str());
        if let Err(err) = &saved {
            log::error!("failed to persist theme: {}", err);
        }

        let previous = self.current.replace(theme);
        if previous != theme {
            log::debug!("theme-scheme: {} -> {}", previous, theme);
            self.subscribers.notify(theme);
        }
        saved
    }

    /// Like [`ThemeStore::set_theme`], but takes the theme by name.
    /// Unknown names are rejected before anything is written.
    pub fn set_theme_named(&self, name: &str) -> Result<(), ThemeError> {
        let theme: Theme = name.parse()?;
        self.set_theme(theme)?;
        Ok(())
    }

    pub fn toggle(&self) -> Result<Theme, PersistenceError> {
        let theme = self.current_theme().toggled();
        self.set_theme(theme).map(|()| theme)
    }

    pub fn subscribe(&self, listener: impl Fn(Theme) + 'static) -> Subscription {
        let id = self.subscribers.insert(Rc::new(listener));
        Subscription {
            id,
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S> fmt::Debug for ThemeStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current.get())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<Theme>>>, impl Fn(Theme) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |theme| sink.borrow_mut().push(theme))
    }

    #[test]
    fn empty_storage_defaults_to_light() {
        let store = ThemeStore::initialize(MemoryStorage::new());

        assert_eq!(store.current_theme(), Theme::Light);
    }

    #[test]
    fn unreadable_or_garbage_storage_defaults_to_light() {
        let failing = MemoryStorage::with_value("dark");
        failing.set_failing(true);
        assert_eq!(ThemeStore::initialize(failing).current_theme(), Theme::Light);

        let garbage = MemoryStorage::with_value("sepia");
        assert_eq!(ThemeStore::initialize(garbage).current_theme(), Theme::Light);
    }

    #[test]
    fn theme_survives_reinitialize_over_same_storage() {
        let storage = Rc::new(MemoryStorage::new());

        for theme in [Theme::Dark, Theme::Light] {
            let store = ThemeStore::initialize(storage.clone());
            store.set_theme(theme).unwrap();
            drop(store);

            let fresh = ThemeStore::initialize(storage.clone());
            assert_eq!(fresh.current_theme(), theme);
        }
        assert_eq!(storage.value().as_deref(), Some("light"));
    }

    #[test]
    fn change_notifies_subscriber_once_before_returning() {
        let store = ThemeStore::initialize(MemoryStorage::new());
        let (seen, listener) = recorder();
        let _subscription = store.subscribe(listener);

        store.set_theme(Theme::Dark).unwrap();

        assert_eq!(*seen.borrow(), vec![Theme::Dark]);
    }

    #[test]
    fn setting_same_theme_writes_but_does_not_notify() {
        let store = ThemeStore::initialize(MemoryStorage::new());
        let (seen, listener) = recorder();
        let _subscription = store.subscribe(listener);

        store.set_theme(Theme::Light).unwrap();

        assert!(seen.borrow().is_empty());
        assert_eq!(store.storage().writes(), 1);
    }

    #[test]
    fn all_subscribers_are_notified_in_order() {
        let store = ThemeStore::initialize(MemoryStorage::new());
        let order = Rc::new(RefCell::new(Vec::new()));
        let subscriptions: Vec<Subscription> = (0..3)
            .map(|i| {
                let order = order.clone();
                store.subscribe(move |_| order.borrow_mut().push(i))
            })
            .collect();

        store.toggle().unwrap();

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert_eq!(subscriptions.len(), store.subscriber_count());
    }

    #[test]
    fn dropped_subscription_is_not_notified() {
        let store = ThemeStore::initialize(MemoryStorage::new());
        let (seen, listener) = recorder();
        let subscription = store.subscribe(listener);
        subscription.unsubscribe();

        store.set_theme(Theme::Dark).unwrap();

        assert!(seen.borrow().is_empty());
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn invalid_name_is_rejected_without_side_effects() {
        let store = ThemeStore::initialize(MemoryStorage::with_value("dark"));
        let (seen, listener) = recorder();
        let _subscription = store.subscribe(listener);

        let result = store.set_theme_named("purple");

        assert_eq!(result, Err(ThemeError::InvalidTheme("purple".to_string())));
        assert_eq!(store.current_theme(), Theme::Dark);
        assert!(seen.borrow().is_empty());
        assert_eq!(store.storage().writes(), 0);
    }

    #[test]
    fn valid_name_is_applied() {
        let store = ThemeStore::initialize(MemoryStorage::new());

        store.set_theme_named("dark").unwrap();

        assert_eq!(store.current_theme(), Theme::Dark);
        assert_eq!(store.storage().value().as_deref(), Some("dark"));
    }

    #[test]
    fn persistence_failure_still_updates_and_notifies() {
        let store = ThemeStore::initialize(MemoryStorage::new());
        store.storage().set_failing(true);
        let (seen, listener) = recorder();
        let _subscription = store.subscribe(listener);

        let result = store.set_theme_named("dark");

        assert!(matches!(result, Err(ThemeError::Persistence(_))));
        assert_eq!(store.current_theme(), Theme::Dark);
        assert_eq!(*seen.borrow(), vec![Theme::Dark]);
    }

    #[test]
    fn listener_may_reenter_the_store() {
        let store = Rc::new(ThemeStore::initialize(MemoryStorage::new()));
        let inner = Rc::downgrade(&store);
        let late = Rc::new(RefCell::new(None));
        let late_slot = late.clone();
        let _subscription = store.subscribe(move |theme| {
            if let Some(store) = inner.upgrade() {
                assert_eq!(store.current_theme(), theme);
                late_slot.replace(Some(store.subscribe(|_| {})));
            }
        });

        store.set_theme(Theme::Dark).unwrap();

        assert!(late.borrow().is_some());
        assert_eq!(store.subscriber_count(), 2);
    }
}
