use super::listeners::Listeners;
use super::subscription::Subscription;
use std::sync::{Arc, Weak};

/// Payload-less event source, e.g. a button tap. Fires with no listener are
/// lost.
#[derive(Clone)]
pub struct Trigger {
    listeners: Arc<Listeners<()>>,
}

impl Default for Trigger {
    fn default() -> Self {
        Self::new()
    }
}

impl Trigger {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Listeners::new()),
        }
    }

    /// Returns how many listeners saw the event.
    pub fn fire(&self) -> usize {
        let n = self.listeners.notify(&());
        if n == 0 {
            tracing::trace!("trigger fired without listeners");
        }
        n
    }

    pub fn subscribe(&self, f: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = self.listeners.add(Arc::new(move |_: &()| f()));
        let weak: Weak<Listeners<()>> = Arc::downgrade(&self.listeners);
        Subscription::from_fn(move || {
            if let Some(listeners) = weak.upgrade() {
                listeners.remove(id);
            }
        })
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trigger")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
