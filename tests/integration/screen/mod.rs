use std::sync::{Arc, Mutex};

use passive_view::{DisplaySurface, TapHandler};

#[cfg_attr(test, mockall::automock)]
pub(crate) trait LabelSink {
    fn render(&self, text: String);
}

type TapSlot = Arc<Mutex<Option<TapHandler>>>;

/// Surface that forwards label renders to a [`LabelSink`] and keeps its tap
/// handler where a [`Button`] can reach it.
pub(crate) struct Screen {
    pub(crate) sink: Box<dyn LabelSink + Send>,
    pub(crate) tap: TapSlot,
}

impl DisplaySurface for Screen {
    fn set_label_text(&mut self, text: &str) {
        self.sink.render(text.to_string());
    }

    fn on_button_tap(&mut self, handler: TapHandler) {
        *self.tap.lock().unwrap() = Some(handler);
    }
}

/// The test's side of the screen's button.
pub(crate) struct Button(pub(crate) TapSlot);

impl Button {
    pub(crate) fn press(&self) -> bool {
        let handler = self.0.lock().unwrap();
        match handler.as_ref() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}
