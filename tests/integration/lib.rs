mod screen;

use std::sync::{Arc, Mutex};

use mockall::{predicate::eq, Sequence};
use passive_view::{Bounds, Config, Coordinator, HostLoop};
pub(crate) use screen::*;

mod lifecycle_tests;
mod tap_and_render_tests;

pub(crate) struct IntegrationTest {
    pub(crate) host: HostLoop<Screen>,
    pub(crate) button: Button,
}

pub(crate) fn build_integration_test() -> IntegrationTestBuilder {
    IntegrationTestBuilder {
        config: Config::default(),
        expected_renders: Vec::new(),
    }
}

pub(crate) struct IntegrationTestBuilder {
    config: Config,
    expected_renders: Vec<&'static str>,
}

impl IntegrationTestBuilder {
    pub(crate) fn given_bounds(mut self, lo: i64, hi: i64) -> Self {
        self.config = self.config.with_bounds(Bounds::new(lo, hi).unwrap());
        self
    }

    /// Renders the label must receive, in order. Any other render fails the
    /// test.
    pub(crate) fn expecting_renders(mut self, renders: &[&'static str]) -> Self {
        self.expected_renders.extend_from_slice(renders);
        self
    }

    pub(crate) fn build(self) -> IntegrationTest {
        let mut sink = MockLabelSink::new();
        let mut sequence = Sequence::new();
        for text in self.expected_renders {
            sink.expect_render()
                .with(eq(text.to_string()))
                .times(1)
                .in_sequence(&mut sequence)
                .return_const(());
        }

        let tap = Arc::new(Mutex::new(None));
        let screen = Screen {
            sink: Box::new(sink),
            tap: tap.clone(),
        };

        IntegrationTest {
            host: HostLoop::new(Coordinator::with_config(screen, self.config)),
            button: Button(tap),
        }
    }
}
