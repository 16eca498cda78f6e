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

//! The dispatcher that stamps events and fans them out to sinks.

use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use crossbeam_channel::Sender;
use jiff::Zoned;

use crate::Error;
use crate::event::Event;
use crate::event::Level;
use crate::event::RoutingType;
use crate::event::Source;
use crate::sink::Sink;
use crate::trap::Trap;

mod builder;
mod escalation;
mod failure;

pub use self::builder::ProcessorBuilder;
pub use self::escalation::Escalation;
pub use self::failure::Failure;

/// The central dispatcher.
///
/// A processor owns a list of sinks. Each logged event is stamped (ID, time, forced overrides)
/// and written to every sink whose accepted routing types match it. Logging runs synchronously
/// on the caller's thread, and all methods take `&self`, so a processor can be shared behind an
/// `Arc` or a `static`.
///
/// # Examples
///
/// ```
/// use eventforth::Event;
/// use eventforth::Processor;
/// use eventforth::RoutingType;
/// use eventforth::sink::Recorder;
///
/// let errors = Recorder::default().accept([RoutingType::ERROR_FLOW]);
/// let processor = Processor::builder().sink(errors.clone()).build();
///
/// let _ = processor.log(Event::info("started").main());
/// let _ = processor.log(Event::error("lost connection").error_flow());
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug)]
pub struct Processor {
    assign_ids: bool,
    time_layout: String,
    trap: Box<dyn Trap>,
    sinks: RwLock<Vec<Box<dyn Sink>>>,
    overrides: RwLock<Overrides>,
    errors: RwLock<Option<Sender<Error>>>,
    events: RwLock<Option<Sender<Event>>>,
}

#[derive(Debug, Default, Clone)]
struct Overrides {
    source: Option<Source>,
    level: Option<Level>,
}

impl Processor {
    /// Create a new [`ProcessorBuilder`].
    pub fn builder() -> ProcessorBuilder {
        ProcessorBuilder::default()
    }

    /// The time layout handed to sinks.
    pub fn time_layout(&self) -> &str {
        &self.time_layout
    }

    /// Whether logged events get an ID assigned.
    pub fn assigns_ids(&self) -> bool {
        self.assign_ids
    }

    /// The number of registered sinks.
    pub fn sink_count(&self) -> usize {
        read(&self.sinks).len()
    }

    /// Stamp `event` and write it to every matching sink.
    ///
    /// The event gets an ID if ID assignment is enabled and it has none, the current time unless
    /// its time is frozen, and the forced source and level if set. A sink receives the event
    /// once, when one of its accepted types equals the event's type, is [`RoutingType::ANY`], or
    /// the event itself is routed as [`RoutingType::ANY`].
    ///
    /// Write failures never stop the fan-out. They are sent to the error channel when one is
    /// configured.
    ///
    /// When an event channel is set, the stamped event is forwarded there and
    /// [`Escalation::None`] is returned. Otherwise PANIC and FATAL events return the matching
    /// escalation, which the caller performs with [`Escalation::escalate`].
    pub fn log(&self, event: Event) -> Escalation {
        let event = self.stamp(event);
        self.dispatch(&event);
        self.finish(event)
    }

    /// Log `failure` if there is one, once per routing type in `types`.
    ///
    /// - `None` logs nothing.
    /// - A raw error is logged at [`Level::Err`] with its message as text.
    /// - An event is logged only when its level is above [`Level::Warn`].
    ///
    /// With no routing types the failure is logged once as [`RoutingType::ANY`]. With ID
    /// assignment enabled, all duplicates share one ID. The strongest escalation of the batch is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventforth::Processor;
    /// use eventforth::RoutingType;
    /// use eventforth::sink::Recorder;
    ///
    /// let recorder = Recorder::default();
    /// let processor = Processor::builder().sink(recorder.clone()).build();
    ///
    /// let result = std::fs::read("/definitely/not/here");
    /// let _ = processor.log_err_only(result.err(), &[RoutingType::MAIN, RoutingType::ERROR_FLOW]);
    /// assert_eq!(recorder.len(), 2);
    /// ```
    pub fn log_err_only(
        &self,
        failure: Option<impl Into<Failure>>,
        types: &[RoutingType],
    ) -> Escalation {
        self.log_failure(failure.map(Into::into), None, types)
    }

    /// Like [`Processor::log_err_only`], with the level forced to [`Level::Panic`].
    pub fn panic_in_case_err(
        &self,
        failure: Option<impl Into<Failure>>,
        types: &[RoutingType],
    ) -> Escalation {
        self.log_failure(failure.map(Into::into), Some(Level::Panic), types)
    }

    /// Like [`Processor::log_err_only`], with the level forced to [`Level::Fatal`].
    pub fn fatal_in_case_err(
        &self,
        failure: Option<impl Into<Failure>>,
        types: &[RoutingType],
    ) -> Escalation {
        self.log_failure(failure.map(Into::into), Some(Level::Fatal), types)
    }

    /// Overwrite the source of every subsequently logged event.
    pub fn force_source(&self, source: Source) {
        write(&self.overrides).source = Some(source);
    }

    /// Overwrite the level of every subsequently logged event.
    pub fn force_level(&self, level: Level) {
        write(&self.overrides).level = Some(level);
    }

    /// Register an additional sink.
    pub fn add_sink(&self, sink: impl Into<Box<dyn Sink>>) {
        write(&self.sinks).push(sink.into());
    }

    /// Register additional sinks.
    pub fn add_sinks(&self, sinks: impl IntoIterator<Item = Box<dyn Sink>>) {
        write(&self.sinks).extend(sinks);
    }

    /// Forward every subsequently logged event to `sender`.
    ///
    /// In this mode PANIC and FATAL events no longer request escalation; the receiving side
    /// decides what to do with them.
    pub fn set_event_channel(&self, sender: Sender<Event>) {
        *write(&self.events) = Some(sender);
    }

    /// Stop reporting write failures and drop the error sender.
    ///
    /// The channel disconnects once the caller's own senders are gone.
    pub fn unset_error_channel(&self) {
        write(&self.errors).take();
    }

    fn stamp(&self, mut event: Event) -> Event {
        if self.assign_ids && event.id().is_empty() {
            event = event.with_id(new_id());
        }
        if !event.is_time_frozen() {
            event = event.with_time(Zoned::now());
        }

        let overrides = read(&self.overrides).clone();
        if let Some(source) = overrides.source {
            event = event.with_source(source);
        }
        if let Some(level) = overrides.level {
            event = event.with_level(level);
        }
        event
    }

    fn dispatch(&self, event: &Event) {
        let sinks = read(&self.sinks);
        for (index, sink) in sinks.iter().enumerate() {
            if !accepts(event, &sink.accepted_types()) {
                continue;
            }
            if let Err(err) = sink.write(event, &self.time_layout) {
                self.report(index, event, err);
            }
        }
    }

    fn report(&self, index: usize, event: &Event, err: Error) {
        let errors = read(&self.errors);
        let Some(sender) = errors.as_ref() else {
            return;
        };

        let err = Error::new("error making log record")
            .with_context("sink", index)
            .with_context("event_id", event.id())
            .with_source(err);
        if let Err(err) = sender.try_send(err) {
            let reason = if err.is_full() { "full" } else { "disconnected" };
            self.trap.trap(
                &Error::new("failed to report dispatch error")
                    .with_context("channel", reason)
                    .with_source(err.into_inner()),
            );
        }
    }

    fn finish(&self, event: Event) -> Escalation {
        if let Some(sender) = read(&self.events).as_ref() {
            if let Err(err) = sender.try_send(event) {
                let reason = if err.is_full() { "full" } else { "disconnected" };
                let event = err.into_inner();
                self.trap.trap(
                    &Error::new("failed to forward event")
                        .with_context("channel", reason)
                        .with_context("event_id", event.id())
                        .with_context("text", event.text()),
                );
            }
            return Escalation::None;
        }

        match event.level() {
            Level::Panic => Escalation::Panic(event.text().to_string()),
            Level::Fatal => Escalation::Fatal,
            _ => Escalation::None,
        }
    }

    fn log_failure(
        &self,
        failure: Option<Failure>,
        level: Option<Level>,
        types: &[RoutingType],
    ) -> Escalation {
        let Some(mut event) = failure.and_then(failure_event) else {
            return Escalation::None;
        };
        if let Some(level) = level {
            event = event.with_level(level);
        }
        if self.assign_ids && event.id().is_empty() {
            event = event.with_id(new_id());
        }

        if types.is_empty() {
            return self.log(event);
        }
        types.iter().fold(Escalation::None, |escalation, routing_type| {
            let next = self.log(event.clone().with_routing_type(routing_type.clone()));
            escalation.strongest(next)
        })
    }
}

fn failure_event(failure: Failure) -> Option<Event> {
    match failure {
        Failure::Raw(text) => Some(Event::error(text)),
        Failure::Event(event) if event.level().is_error() => {
            Some(event.with_routing_type(RoutingType::ANY))
        }
        Failure::Event(_) => None,
    }
}

fn accepts(event: &Event, accepted: &[RoutingType]) -> bool {
    let routing_type = event.routing_type();
    routing_type.is_any() || accepted.iter().any(|t| routing_type.matches(t))
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}
