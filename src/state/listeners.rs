use parking_lot::Mutex;
use std::sync::Arc;

pub(crate) type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Ordered listener list shared by cells and triggers.
pub(crate) struct Listeners<T> {
    inner: Mutex<ListenerList<T>>,
}

struct ListenerList<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ListenerList {
                next_id: 1,
                entries: Vec::new(),
            }),
        }
    }

    pub fn add(&self, cb: Callback<T>) -> u64 {
        let mut g = self.inner.lock();
        let id = g.next_id;
        g.next_id += 1;
        g.entries.push((id, cb));
        id
    }

    pub fn remove(&self, id: u64) -> bool {
        let mut g = self.inner.lock();
        let before = g.entries.len();
        g.entries.retain(|(eid, _)| *eid != id);
        g.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Calls every listener in subscription order. The lock is released
    /// before the first call so listeners may subscribe, unsubscribe or
    /// write to other cells.
    pub fn notify(&self, value: &T) -> usize {
        let snapshot: Vec<Callback<T>> = {
            let g = self.inner.lock();
            g.entries.iter().map(|(_, cb)| cb.clone()).collect()
        };
        for cb in &snapshot {
            cb(value);
        }
        snapshot.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_removable() {
        let l: Listeners<u8> = Listeners::new();
        let a = l.add(Arc::new(|_| {}));
        let b = l.add(Arc::new(|_| {}));
        assert_ne!(a, b);
        assert_eq!(l.len(), 2);
        assert!(l.remove(a));
        assert!(!l.remove(a));
        assert_eq!(l.len(), 1);
    }

    #[test]
    fn notify_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let l: Listeners<u8> = Listeners::new();
        for tag in 0..3u8 {
            let seen = seen.clone();
            l.add(Arc::new(move |v| seen.lock().push((tag, *v))));
        }
        assert_eq!(l.notify(&7), 3);
        assert_eq!(*seen.lock(), vec![(0, 7), (1, 7), (2, 7)]);
    }
}
