// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::Error;
use crate::event::Event;
use crate::event::RoutingType;
use crate::layout::ReportLayout;
use crate::sink::Sink;

/// A handle to an already configured error reporting client, such as a Sentry hub.
///
/// The client is configured by the application and injected into [`External`]; the sink never
/// initializes any global state.
pub trait ErrorReporter: fmt::Debug + Send + Sync + 'static {
    /// Ship one message.
    fn capture_message(&self, message: &str) -> Result<(), Error>;

    /// Wait up to `timeout` for pending messages to be delivered.
    ///
    /// Returns `false` if the timeout elapsed first.
    fn flush(&self, timeout: Duration) -> bool {
        let _ = timeout;
        true
    }
}

impl<T: ErrorReporter + ?Sized> ErrorReporter for Arc<T> {
    fn capture_message(&self, message: &str) -> Result<(), Error> {
        (**self).capture_message(message)
    }

    fn flush(&self, timeout: Duration) -> bool {
        (**self).flush(timeout)
    }
}

/// A sink that forwards events to an [`ErrorReporter`].
///
/// Messages are formatted by [`ReportLayout`]; the time layout is not used.
#[derive(Debug)]
pub struct External<R> {
    reporter: R,
    layout: ReportLayout,
    accepted: Vec<RoutingType>,
    flush_timeout: Duration,
}

impl<R: ErrorReporter> External<R> {
    /// Create a sink tagging every message with `app_id`.
    pub fn new(reporter: R, app_id: impl Into<String>) -> Self {
        Self {
            reporter,
            layout: ReportLayout::new(app_id),
            accepted: vec![RoutingType::ANY],
            flush_timeout: Duration::from_secs(2),
        }
    }

    /// Set the routing types the sink accepts.
    ///
    /// Default to [`RoutingType::ANY`].
    pub fn accept(mut self, types: impl IntoIterator<Item = RoutingType>) -> Self {
        self.accepted = types.into_iter().collect();
        self
    }

    /// Set how long each write waits for delivery.
    ///
    /// Default to 2 seconds.
    pub fn flush_timeout(mut self, timeout: Duration) -> Self {
        self.flush_timeout = timeout;
        self
    }

    /// The injected client.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}

impl<R: ErrorReporter> Sink for External<R> {
    fn write(&self, event: &Event, _: &str) -> Result<(), Error> {
        let message = self.layout.format(event);
        let result = self.reporter.capture_message(&message);
        self.reporter.flush(self.flush_timeout);
        result
    }

    fn accepted_types(&self) -> Vec<RoutingType> {
        self.accepted.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::Source;

    #[derive(Debug, Default)]
    struct CollectingReporter {
        messages: Mutex<Vec<String>>,
        flushes: Mutex<Vec<Duration>>,
        fail: bool,
    }

    impl ErrorReporter for CollectingReporter {
        fn capture_message(&self, message: &str) -> Result<(), Error> {
            if self.fail {
                return Err(Error::new("reporter is down"));
            }
            self.messages.lock().unwrap().push(message.to_string());
            Ok(())
        }

        fn flush(&self, timeout: Duration) -> bool {
            self.flushes.lock().unwrap().push(timeout);
            true
        }
    }

    #[test]
    fn test_external_ships_and_flushes() {
        let sink = External::new(CollectingReporter::default(), "app")
            .accept([RoutingType::ERROR_FLOW])
            .flush_timeout(Duration::from_millis(10));

        let event = Event::critical("db down").with_source(Source::MAIN);
        sink.write(&event, "unused").unwrap();

        let reporter = sink.reporter();
        assert_eq!(
            *reporter.messages.lock().unwrap(),
            vec!["[app] CRITICAL [MAIN] db down".to_string()]
        );
        assert_eq!(
            *reporter.flushes.lock().unwrap(),
            vec![Duration::from_millis(10)]
        );
        assert_eq!(sink.accepted_types(), vec![RoutingType::ERROR_FLOW]);
    }

    #[test]
    fn test_external_propagates_client_errors() {
        let reporter = CollectingReporter {
            fail: true,
            ..Default::default()
        };
        let sink = External::new(reporter, "app");
        let err = sink.write(&Event::error("x"), "").unwrap_err();
        assert_eq!(err.message(), "reporter is down");
    }
}
