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

use std::sync::Arc;

use crate::Event;
use crate::Level;
use crate::Processor;
use crate::RoutingType;
use crate::Source;

struct LogCrateLogger(Arc<Processor>);

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Log::enabled(self.0.as_ref(), metadata)
    }

    fn log(&self, record: &log::Record) {
        log::Log::log(self.0.as_ref(), record);
    }

    fn flush(&self) {}
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_boxed_logger`] so that all records from the log crate are
/// turned into events and dispatched through `processor`.
///
/// Records map to events as follows:
///
/// | log     | level  | routing type            |
/// |---------|--------|-------------------------|
/// | `Error` | ERROR  | [`RoutingType::ANY`]     |
/// | `Warn`  | WARNING| [`RoutingType::ANY`]     |
/// | `Info`  | INFO   | [`RoutingType::ANY`]     |
/// | `Debug` | INFO   | [`RoutingType::DEBUG`]   |
/// | `Trace` | INFO   | [`RoutingType::VERBOSE`] |
///
/// The record target becomes a bracketed source.
///
/// This function will set the global maximum log level to `Trace`. To override this, call
/// [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
pub fn try_setup_log_crate(processor: Arc<Processor>) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(LogCrateLogger(processor)))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// See [`try_setup_log_crate`] for how records are mapped.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use eventforth::Processor;
/// use eventforth::sink::Console;
///
/// let processor = Arc::new(Processor::builder().sink(Console::default()).build());
/// eventforth::bridge::setup_log_crate(processor);
///
/// log::info!("This is an info message.");
/// ```
pub fn setup_log_crate(processor: Arc<Processor>) {
    try_setup_log_crate(processor).expect(
        "eventforth::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}

impl log::Log for Processor {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        // log records never carry PANIC or FATAL, so there is nothing to escalate
        let _ = Processor::log(self, record_event(record));
    }

    fn flush(&self) {}
}

fn record_event(record: &log::Record) -> Event {
    let (level, routing_type) = match record.level() {
        log::Level::Error => (Level::Err, RoutingType::ANY),
        log::Level::Warn => (Level::Warn, RoutingType::ANY),
        log::Level::Info => (Level::Info, RoutingType::ANY),
        log::Level::Debug => (Level::Info, RoutingType::DEBUG),
        log::Level::Trace => (Level::Info, RoutingType::VERBOSE),
    };

    let source = if record.target().is_empty() {
        Source::EMPTY
    } else {
        Source::bracketed(record.target().to_string())
    };

    Event::empty()
        .with_level(level)
        .with_routing_type(routing_type)
        .with_source(source)
        .with_text(record.args().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Recorder;

    #[test]
    fn test_record_mapping() {
        let recorder = Recorder::default().accept([RoutingType::DEBUG]);
        let processor = Processor::builder().sink(recorder.clone()).build();

        for level in [
            log::Level::Error,
            log::Level::Warn,
            log::Level::Info,
            log::Level::Debug,
            log::Level::Trace,
        ] {
            log::Log::log(
                &processor,
                &log::Record::builder()
                    .args(format_args!("payload {}", 42))
                    .level(level)
                    .target("net::client")
                    .build(),
            );
        }

        let events = recorder.events();
        let summary = events
            .iter()
            .map(|e| (e.level(), e.routing_type().as_str().to_string()))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![
                (Level::Err, "Any".to_string()),
                (Level::Warn, "Any".to_string()),
                (Level::Info, "Any".to_string()),
                (Level::Info, "Debug".to_string()),
            ]
        );
        assert!(events.iter().all(|e| e.text() == "payload 42"));
        assert_eq!(events[0].source(), &Source::bracketed("net::client"));
    }
}
