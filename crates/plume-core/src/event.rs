//! Typed event channels.
//!
//! An [`Event<T>`] is a synchronous pub/sub channel: subscribers register a
//! callback and every `dispatch` delivers the payload to all of them, in
//! registration order, on the dispatching thread. This is the seam between
//! editor notifications and UI reactions.
//!
//! Handlers must not dispatch back into the same event from within a
//! dispatch; the subscriber list is read-locked for the duration of the
//! delivery.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Global counter for generating unique subscription IDs.
static SUBSCRIPTION_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

type Handler<T> = Box<dyn Fn(&T) + Send + Sync>;

struct Subscriber<T> {
    id: u64,
    handler: Handler<T>,
}

/// A synchronous typed event channel.
///
/// Cloning an `Event` yields another handle to the same subscriber list, so
/// a component can hand out the channel while retaining the right to
/// dispatch on it.
pub struct Event<T> {
    subscribers: Arc<RwLock<Vec<Subscriber<T>>>>,
}

impl<T> Clone for Event<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T> Default for Event<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Event<T> {
    /// Create a new event channel with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a callback. Returns a [`Subscription`] for later removal.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SUBSCRIPTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.subscribers.write().push(Subscriber {
            id,
            handler: Box::new(handler),
        });
        tracing::trace!("Added subscriber (id: {})", id);
        Subscription { id }
    }

    /// Remove a subscriber.
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut subscribers = self.subscribers.write();
        if let Some(pos) = subscribers.iter().position(|s| s.id == subscription.id) {
            subscribers.remove(pos);
            tracing::trace!("Removed subscriber (id: {})", subscription.id);
            true
        } else {
            false
        }
    }

    /// Deliver a payload to all subscribers, in registration order.
    pub fn dispatch(&self, payload: &T) {
        let subscribers = self.subscribers.read();
        for subscriber in subscribers.iter() {
            (subscriber.handler)(payload);
        }
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}

/// Handle returned by [`Event::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
}
