use super::listeners::Listeners;
use super::subscription::Subscription;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

struct Shared<T> {
    value: Mutex<T>,
    listeners: Listeners<T>,
}

/// Holds the latest value of one input. Cloning yields another handle to the
/// same cell.
pub struct Cell<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Cell<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Cell<T> {
    pub fn new(value: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                value: Mutex::new(value),
                listeners: Listeners::new(),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.shared.value.lock().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.value.lock())
    }

    /// Stores `value` and notifies every listener, even if the value did not
    /// change.
    pub fn set(&self, value: T) {
        *self.shared.value.lock() = value.clone();
        self.shared.listeners.notify(&value);
    }

    /// Delivers the current value right away, then every later write.
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let cb: Arc<dyn Fn(&T) + Send + Sync> = Arc::new(f);
        let current = self.get();
        let sub = self.register(cb.clone());
        cb(&current);
        sub
    }

    /// Delivers later writes only.
    pub fn observe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        self.register(Arc::new(f))
    }

    pub fn listener_count(&self) -> usize {
        self.shared.listeners.len()
    }

    fn register(&self, cb: Arc<dyn Fn(&T) + Send + Sync>) -> Subscription {
        let id = self.shared.listeners.add(cb);
        let weak: Weak<Shared<T>> = Arc::downgrade(&self.shared);
        Subscription::from_fn(move || {
            if let Some(shared) = weak.upgrade() {
                shared.listeners.remove(id);
            }
        })
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Cell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("value", &*self.shared.value.lock())
            .field("listeners", &self.shared.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_gets_current_then_writes() {
        let cell = Cell::new(Some(String::new()));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let s = seen.clone();
        let _sub = cell.subscribe(move |v: &Option<String>| s.lock().push(v.clone()));
        cell.set(Some("a".into()));
        cell.set(None);

        assert_eq!(*seen.lock(), vec![Some(String::new()), Some("a".into()), None]);
    }

    #[test]
    fn observe_skips_current() {
        let cell = Cell::new(5);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let s = seen.clone();
        let _sub = cell.observe(move |v| s.lock().push(*v));
        cell.set(6);

        assert_eq!(*seen.lock(), vec![6]);
    }

    #[test]
    fn listener_may_read_the_cell() {
        let cell = Cell::new(1);
        let reader = cell.clone();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let s = seen.clone();
        let _sub = cell.observe(move |_| s.lock().push(reader.get()));
        cell.set(2);

        assert_eq!(*seen.lock(), vec![2]);
    }

    #[test]
    fn dropped_subscription_is_removed() {
        let cell = Cell::new(0);
        let sub = cell.observe(|_| {});
        assert_eq!(cell.listener_count(), 1);
        drop(sub);
        assert_eq!(cell.listener_count(), 0);
    }

    #[test]
    fn subscription_outliving_cell_is_harmless() {
        let cell = Cell::new(0);
        let sub = cell.observe(|_| {});
        drop(cell);
        drop(sub);
    }
}
