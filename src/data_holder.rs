//! The observable model: a single integer and the callbacks watching it.


use portable_atomic_util::Arc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spin::Mutex;
use tracing::debug;

use crate::{Bounds, Config, Result, Value};

type Subscriber = Arc<Box<dyn Fn(Value) + Send + Sync>>;

/// Handle returned by [`DataHolder::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionHandle, Subscriber)>,
}

/// Owns a single integer value and a subscriber list notified on change.
///
/// The value starts at `0` and only changes through
/// [`regenerate`](Self::regenerate) or [`regenerate_in`](Self::regenerate_in).
/// Every change is published synchronously: all subscribers have run by the
/// time the regenerate call returns. Subscribers run in registration order
/// with no internal lock held, so a subscriber may call back into the holder.
///
/// # Example
///
/// ```rust
/// use passive_view::{Config, DataHolder};
///
/// let holder = DataHolder::with_config(Config::default().with_seed(42));
/// let handle = holder.subscribe(|value| println!("new value: {value}"));
///
/// let value = holder.regenerate();
/// assert!((1..=10).contains(&value));
/// assert_eq!(holder.value(), value);
///
/// holder.unsubscribe(handle);
/// ```
pub struct DataHolder {
    value: Mutex<Value>,
    bounds: Bounds,
    rng: Mutex<StdRng>,
    subscribers: Mutex<Subscribers>,
}

impl DataHolder {
    /// Create a holder with the default `[1, 10]` bounds and an OS-seeded
    /// random source.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            value: Mutex::new(0),
            bounds: config.bounds,
            rng: Mutex::new(rng),
            subscribers: Mutex::new(Subscribers {
                next_id: 0,
                entries: Vec::new(),
            }),
        }
    }

    /// The current value.
    pub fn value(&self) -> Value {
        *self.value.lock()
    }

    /// The range used by [`regenerate`](Self::regenerate).
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().entries.len()
    }

    /// Replace the value with a random integer inside the configured bounds
    /// and publish it. Returns the new value.
    pub fn regenerate(&self) -> Value {
        self.regenerate_within(self.bounds)
    }

    /// Replace the value with a uniformly random integer in `[lo, hi]` and
    /// publish it.
    ///
    /// Fails with [`Error::InvalidRange`](crate::Error::InvalidRange) when
    /// `lo > hi`; the value is left unchanged and nobody is notified.
    pub fn regenerate_in(&self, lo: Value, hi: Value) -> Result<Value> {
        let bounds = Bounds::new(lo, hi)?;
        Ok(self.regenerate_within(bounds))
    }

    fn regenerate_within(&self, bounds: Bounds) -> Value {
        let value = self.rng.lock().random_range(bounds.lo()..=bounds.hi());
        *self.value.lock() = value;
        debug!(value, lo = bounds.lo(), hi = bounds.hi(), "value regenerated");

        self.publish(value);
        value
    }

    /// Register a callback invoked with every new value.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: Fn(Value) + Send + Sync + 'static,
    {
        let mut subscribers = self.subscribers.lock();
        let handle = SubscriptionHandle(subscribers.next_id);
        subscribers.next_id += 1;
        subscribers.entries.push((handle, Arc::new(Box::new(callback))));
        debug!(?handle, "subscriber added");
        handle
    }

    /// Remove a subscriber. Returns `false` if the handle was already gone.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.entries.len();
        subscribers.entries.retain(|(id, _)| *id != handle);
        let removed = subscribers.entries.len() != before;
        debug!(?handle, removed, "unsubscribe");
        removed
    }

    fn publish(&self, value: Value) {
        // Snapshot so callbacks can re-enter without deadlocking on the list.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .lock()
            .entries
            .iter()
            .map(|(_, subscriber)| subscriber.clone())
            .collect();

        for subscriber in subscribers {
            (**subscriber)(value);
        }
    }
}

impl Default for DataHolder {
    fn default() -> Self {
        Self::new()
    }
}
