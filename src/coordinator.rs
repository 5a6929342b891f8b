//! The presenter that binds a [`DataHolder`] to a [`DisplaySurface`].

use portable_atomic_util::{Arc, Weak};
use spin::Mutex;
use tracing::{info, trace, warn};

use crate::{Config, DataHolder, DisplaySurface, Error, Result, SubscriptionHandle};

/// Lifecycle phase of a [`Coordinator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, but [`Coordinator::start`] has not run yet.
    Uninitialized,
    /// The data holder exists, the initial value is rendered and the
    /// surface's events are wired.
    Bound,
}

struct Binding {
    data_holder: Arc<DataHolder>,
    subscription: Option<SubscriptionHandle>,
}

/// Wires surface events to data holder mutations and data holder changes to
/// surface rendering.
///
/// The coordinator owns both the surface and the data holder. The callbacks
/// it installs only hold weak references back to them: the tap handler
/// (owned by the surface) reaches the data holder through a [`Weak`], and
/// the change subscriber (owned by the data holder) reaches the surface
/// through a [`Weak`]. Neither keeps the other alive.
///
/// The subscription is released by [`teardown`](Self::teardown), which also
/// runs when the coordinator is dropped.
///
/// Surface implementations must not invoke the tap handler from inside
/// [`DisplaySurface::set_label_text`] or [`DisplaySurface::on_button_tap`].
pub struct Coordinator<S>
where
    S: DisplaySurface + Send + 'static,
{
    config: Config,
    surface: Arc<Mutex<S>>,
    binding: Option<Binding>,
}

impl<S> Coordinator<S>
where
    S: DisplaySurface + Send + 'static,
{
    /// Create an unstarted coordinator with the default [`Config`].
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, Config::default())
    }

    pub fn with_config(surface: S, config: Config) -> Self {
        Self {
            config,
            surface: Arc::new(Mutex::new(surface)),
            binding: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        match self.binding {
            Some(_) => Phase::Bound,
            None => Phase::Uninitialized,
        }
    }

    /// The data holder, once [`start`](Self::start) has run.
    pub fn data_holder(&self) -> Option<&Arc<DataHolder>> {
        self.binding.as_ref().map(|binding| &binding.data_holder)
    }

    /// Whether the change subscription is still active.
    pub fn is_subscribed(&self) -> bool {
        self.binding
            .as_ref()
            .is_some_and(|binding| binding.subscription.is_some())
    }

    /// Bind the surface to a fresh data holder.
    ///
    /// - Creates the data holder from the coordinator's [`Config`].
    /// - Renders the initial value.
    /// - Wires the button tap to [`DataHolder::regenerate`].
    /// - Subscribes a callback that renders every new value.
    ///
    /// Returns [`Error::AlreadyStarted`] if called more than once.
    pub fn start(&mut self) -> Result<()> {
        if self.binding.is_some() {
            return Err(Error::AlreadyStarted);
        }

        let data_holder = Arc::new(DataHolder::with_config(self.config));

        {
            let mut surface = self.surface.lock();
            surface.set_label_text(&data_holder.value().to_string());

            let holder: Weak<DataHolder> = Arc::downgrade(&data_holder);
            surface.on_button_tap(Box::new(move || match holder.upgrade() {
                Some(holder) => {
                    holder.regenerate();
                }
                None => warn!("button tapped after the data holder was released"),
            }));
        }

        let surface: Weak<Mutex<S>> = Arc::downgrade(&self.surface);
        let subscription = data_holder.subscribe(move |value| {
            if let Some(surface) = surface.upgrade() {
                let text = value.to_string();
                trace!(%text, "rendering label");
                surface.lock().set_label_text(&text);
            }
        });

        info!(?subscription, initial = data_holder.value(), "coordinator bound");

        self.binding = Some(Binding {
            data_holder,
            subscription: Some(subscription),
        });
        Ok(())
    }

    /// Release the change subscription. Safe to call more than once.
    pub fn teardown(&mut self) {
        let Some(binding) = self.binding.as_mut() else {
            return;
        };

        if let Some(handle) = binding.subscription.take() {
            binding.data_holder.unsubscribe(handle);
            info!(?handle, "coordinator torn down");
        }
    }
}

impl<S> Drop for Coordinator<S>
where
    S: DisplaySurface + Send + 'static,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
