/// Handle to a registered listener. Dropping it (or calling [`cancel`])
/// removes the listener.
///
/// [`cancel`]: Subscription::cancel
#[must_use = "dropping a Subscription removes its listener right away"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn from_fn(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(f) = self.cancel.take() {
            f();
        }
    }

    /// Keeps the listener alive for as long as its source lives.
    pub fn detach(mut self) {
        self.cancel = None;
    }

    pub fn store_in(self, bag: &mut SubscriptionBag) {
        bag.store(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.cancel.take() {
            f();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// A set of subscriptions that all end together.
#[derive(Debug, Default)]
pub struct SubscriptionBag {
    subs: Vec<Subscription>,
}

impl SubscriptionBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&mut self, sub: Subscription) {
        self.subs.push(sub);
    }

    pub fn len(&self) -> usize {
        self.subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    pub fn clear(&mut self) {
        self.subs.clear();
    }
}
