//! The host event loop boundary: lifecycle signals in, coordinator calls out.

use flume::{Receiver, Sender};
use tracing::debug;

use crate::{Coordinator, DisplaySurface, Result};

/// Lifecycle signals a host UI environment delivers to a [`HostLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// The display surface is ready; the coordinator should bind.
    ViewReady,
    /// The display surface is about to be discarded.
    ViewDestroyed,
}

/// Cloneable handle used by the host to send [`Lifecycle`] signals.
///
/// Wraps a lock-free channel sender, so it can be cloned freely and used
/// from any thread. Signals are always handled on the thread running the
/// [`HostLoop`].
pub struct HostSignals(Sender<Lifecycle>);

impl Clone for HostSignals {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl HostSignals {
    pub fn send(&self, signal: Lifecycle) {
        self.0.send(signal).ok();
    }

    pub fn view_ready(&self) {
        self.send(Lifecycle::ViewReady);
    }

    pub fn view_destroyed(&self) {
        self.send(Lifecycle::ViewDestroyed);
    }
}

/// Drives a [`Coordinator`] from host lifecycle signals.
///
/// `ViewReady` starts the coordinator and `ViewDestroyed` tears it down and
/// ends the loop. Button taps never pass through here: they reach the data
/// holder directly through the handler the coordinator registers on the
/// surface.
///
/// # Example
///
/// ```rust
/// use passive_view::{Coordinator, HostLoop, TestSurface};
///
/// let surface = TestSurface::new();
/// let mut host = HostLoop::new(Coordinator::new(surface.clone()));
///
/// let signals = host.signals();
/// signals.view_ready();
/// signals.view_destroyed();
///
/// futures::executor::block_on(host.run()).unwrap();
/// assert_eq!(surface.label().as_deref(), Some("0"));
/// assert!(!host.coordinator().is_subscribed());
/// ```
pub struct HostLoop<S>
where
    S: DisplaySurface + Send + 'static,
{
    coordinator: Coordinator<S>,
    receiver: Receiver<Lifecycle>,
    signals: HostSignals,
}

impl<S> HostLoop<S>
where
    S: DisplaySurface + Send + 'static,
{
    /// Create a loop around an unstarted coordinator.
    ///
    /// Nothing happens until [`run`](Self::run) is awaited.
    pub fn new(coordinator: Coordinator<S>) -> Self {
        let (sender, receiver) = flume::unbounded();

        Self {
            coordinator,
            receiver,
            signals: HostSignals(sender),
        }
    }

    /// A handle for delivering lifecycle signals to this loop.
    pub fn signals(&self) -> HostSignals {
        self.signals.clone()
    }

    pub fn coordinator(&self) -> &Coordinator<S> {
        &self.coordinator
    }

    /// Process signals until `ViewDestroyed` arrives.
    ///
    /// Errors from [`Coordinator::start`] end the loop and are returned.
    pub async fn run(&mut self) -> Result<()> {
        while let Ok(signal) = self.receiver.recv_async().await {
            if !self.step(signal)? {
                break;
            }
        }
        Ok(())
    }

    /// Handle one signal. Returns `false` once the loop should stop.
    fn step(&mut self, signal: Lifecycle) -> Result<bool> {
        debug!(?signal, "lifecycle signal");
        match signal {
            Lifecycle::ViewReady => {
                self.coordinator.start()?;
                Ok(true)
            }
            Lifecycle::ViewDestroyed => {
                self.coordinator.teardown();
                Ok(false)
            }
        }
    }

    #[cfg(any(test, feature = "testing"))]
    /// Handle every queued signal without waiting for new ones.
    ///
    /// Only available with the `testing` feature. Returns `false` once
    /// `ViewDestroyed` has been handled.
    pub fn process_events(&mut self) -> Result<bool> {
        while let Ok(signal) = self.receiver.try_recv() {
            if !self.step(signal)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    #[cfg(any(test, feature = "testing"))]
    /// Run the loop to completion on the current thread.
    ///
    /// Only available with the `testing` feature.
    pub fn run_blocking(&mut self) -> Result<()> {
        futures::executor::block_on(self.run())
    }
}
