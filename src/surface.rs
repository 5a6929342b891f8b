//! The passive display surface: a label and a button, no logic.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Handler invoked when the surface's button is tapped.
pub type TapHandler = Box<dyn Fn() + Send + Sync>;

/// Rendering and event surface driven by a [`Coordinator`](crate::Coordinator).
///
/// Implement this trait to plug the coordinator into a UI toolkit, a
/// terminal, or a test double. Implementations hold no logic: they render
/// whatever text they are given and forward button taps to the registered
/// handler.
///
/// # Example
///
/// ```rust
/// use passive_view::{DisplaySurface, TapHandler};
///
/// struct ConsoleSurface {
///     on_tap: Option<TapHandler>,
/// }
///
/// impl DisplaySurface for ConsoleSurface {
///     fn set_label_text(&mut self, text: &str) {
///         println!("label: {text}");
///     }
///
///     fn on_button_tap(&mut self, handler: TapHandler) {
///         self.on_tap = Some(handler);
///     }
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait DisplaySurface {
    /// Replace the label's text.
    fn set_label_text(&mut self, text: &str);

    /// Register the button's tap handler. A later registration replaces an
    /// earlier one.
    fn on_button_tap(&mut self, handler: TapHandler);
}

#[cfg(any(test, feature = "testing"))]
#[derive(Default)]
struct TestSurfaceState {
    labels: Vec<String>,
    tap_handler: Option<Arc<TapHandler>>,
}

#[cfg(any(test, feature = "testing"))]
/// Recording surface for tests.
///
/// Only available with the `testing` feature.
///
/// Clones share the same state, so a test can hand one clone to a
/// [`Coordinator`](crate::Coordinator) and keep another to read the label
/// and simulate taps.
///
/// # Example
///
/// ```rust
/// use passive_view::{Coordinator, TestSurface};
///
/// let surface = TestSurface::new();
/// let mut coordinator = Coordinator::new(surface.clone());
/// coordinator.start().unwrap();
///
/// assert_eq!(surface.label().as_deref(), Some("0"));
///
/// surface.tap();
/// let value = coordinator.data_holder().unwrap().value();
/// assert_eq!(surface.label(), Some(value.to_string()));
/// ```
pub struct TestSurface {
    state: Arc<Mutex<TestSurfaceState>>,
}

#[cfg(any(test, feature = "testing"))]
impl Clone for TestSurface {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for TestSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl DisplaySurface for TestSurface {
    fn set_label_text(&mut self, text: &str) {
        self.state.lock().labels.push(text.to_string());
    }

    fn on_button_tap(&mut self, handler: TapHandler) {
        self.state.lock().tap_handler = Some(Arc::new(handler));
    }
}

#[cfg(any(test, feature = "testing"))]
impl TestSurface {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(TestSurfaceState::default())),
        }
    }

    /// The text currently displayed, if anything has been rendered.
    pub fn label(&self) -> Option<String> {
        self.state.lock().labels.last().cloned()
    }

    /// Number of times the label has been set.
    pub fn render_count(&self) -> usize {
        self.state.lock().labels.len()
    }

    /// Access every label text rendered so far, oldest first.
    pub fn with_labels<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[String]) -> R,
    {
        let state = self.state.lock();
        f(&state.labels)
    }

    pub fn has_tap_handler(&self) -> bool {
        self.state.lock().tap_handler.is_some()
    }

    /// Simulate a button tap. Returns `false` when no handler is registered.
    ///
    /// The handler runs after the surface's lock is released, so it may
    /// render back into this surface.
    pub fn tap(&self) -> bool {
        let handler = self.state.lock().tap_handler.clone();
        match handler {
            Some(handler) => {
                (**handler)();
                true
            }
            None => false,
        }
    }
}
