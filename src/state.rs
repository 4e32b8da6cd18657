//! Reactive primitives the view-models are built from.
//!
//! A [`Cell`] holds the latest value of an input and notifies its listeners
//! synchronously on every write. A [`Trigger`] carries payload-less events
//! (button taps). Both hand out [`Subscription`]s that detach the listener
//! when dropped.

mod cell;
mod listeners;
mod subscription;
mod trigger;

pub use cell::Cell;
pub use subscription::{Subscription, SubscriptionBag};
pub use trigger::Trigger;

use std::sync::Arc;

/// Combine-latest over `cells`: `compute` runs once right away and then after
/// every write to any of the cells, always over the current values of all of
/// them. Each result is passed to `sink`.
pub fn derive<T, R, F, S>(cells: &[&Cell<T>], compute: F, sink: S) -> Subscription
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&[T]) -> R + Send + Sync + 'static,
    S: Fn(R) + Send + Sync + 'static,
{
    let sources: Vec<Cell<T>> = cells.iter().map(|c| (*c).clone()).collect();
    let run = Arc::new(move || {
        let values: Vec<T> = sources.iter().map(Cell::get).collect();
        sink(compute(&values));
    });

    let mut bag = SubscriptionBag::new();
    for cell in cells {
        let run = run.clone();
        bag.store(cell.observe(move |_| run()));
    }
    run();

    Subscription::from_fn(move || drop(bag))
}
