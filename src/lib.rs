//! A small Model-View-Presenter (passive view) library.
//!
//! A single screen holds a label and a button. Tapping the button replaces a
//! number with a random one and the label shows the new number. Three roles
//! carry this:
//!
//! - [`DataHolder`]: the model. Owns the number and notifies subscribers
//!   synchronously whenever it changes.
//! - [`DisplaySurface`]: the passive view. Renders text and reports taps,
//!   nothing else.
//! - [`Coordinator`]: the presenter. Binds taps to
//!   [`DataHolder::regenerate`] and changes to
//!   [`DisplaySurface::set_label_text`].
//!
//! A [`HostLoop`] adapts a host's lifecycle signals ("view ready",
//! "view destroyed") to [`Coordinator::start`] and [`Coordinator::teardown`].
//!
//! ## Example
//!
//! ```rust
//! use passive_view::{Config, Coordinator, DisplaySurface, TapHandler};
//!
//! #[derive(Default)]
//! struct Screen {
//!     label: String,
//!     on_tap: Option<TapHandler>,
//! }
//!
//! impl DisplaySurface for Screen {
//!     fn set_label_text(&mut self, text: &str) {
//!         self.label = text.to_string();
//!     }
//!
//!     fn on_button_tap(&mut self, handler: TapHandler) {
//!         self.on_tap = Some(handler);
//!     }
//! }
//!
//! let mut coordinator = Coordinator::with_config(Screen::default(), Config::default());
//! coordinator.start().unwrap();
//!
//! let holder = coordinator.data_holder().unwrap();
//! assert_eq!(holder.value(), 0);
//!
//! holder.regenerate_in(5, 5).unwrap();
//! assert_eq!(holder.value(), 5);
//!
//! coordinator.teardown();
//! ```

// Module declarations
mod config;
mod coordinator;
mod data_holder;
mod error;
mod host;
mod surface;

/// The integer type held by a [`DataHolder`].
pub type Value = i64;

// Public re-exports
pub use config::{Bounds, Config};
pub use coordinator::{Coordinator, Phase};
pub use data_holder::{DataHolder, SubscriptionHandle};
pub use error::{Error, Result};
pub use host::{HostLoop, HostSignals, Lifecycle};
pub use surface::{DisplaySurface, TapHandler};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use surface::TestSurface;
#[cfg(test)]
pub(crate) use surface::MockDisplaySurface;
