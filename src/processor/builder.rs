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

use std::sync::RwLock;

use crossbeam_channel::Sender;

use crate::Error;
use crate::event::Event;
use crate::layout::DEFAULT_TIME_LAYOUT;
use crate::processor::Overrides;
use crate::processor::Processor;
use crate::sink::Sink;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// A builder for configuring a [`Processor`].
///
/// # Examples
///
/// ```
/// use eventforth::Processor;
/// use eventforth::sink::Console;
///
/// let (tx, rx) = crossbeam_channel::unbounded();
/// let processor = Processor::builder()
///     .assign_ids(true)
///     .time_layout("%Y-%m-%d %H:%M:%S")
///     .report_errors(tx)
///     .sink(Console::default())
///     .build();
/// # drop((processor, rx));
/// ```
#[must_use = "call `build` to create the processor"]
#[derive(Debug)]
pub struct ProcessorBuilder {
    assign_ids: bool,
    time_layout: String,
    errors: Option<Sender<Error>>,
    events: Option<Sender<Event>>,
    trap: Box<dyn Trap>,
    sinks: Vec<Box<dyn Sink>>,
}

impl Default for ProcessorBuilder {
    fn default() -> Self {
        Self {
            assign_ids: false,
            time_layout: DEFAULT_TIME_LAYOUT.to_string(),
            errors: None,
            events: None,
            trap: Box::new(DefaultTrap::default()),
            sinks: vec![],
        }
    }
}

impl ProcessorBuilder {
    /// Assign a fresh UUID to every logged event that has no ID yet.
    ///
    /// Default to `false`.
    pub fn assign_ids(mut self, assign_ids: bool) -> Self {
        self.assign_ids = assign_ids;
        self
    }

    /// Set the strftime layout passed to sinks for rendering event times.
    ///
    /// An empty layout falls back to [`DEFAULT_TIME_LAYOUT`].
    pub fn time_layout(mut self, layout: impl Into<String>) -> Self {
        let layout = layout.into();
        self.time_layout = if layout.is_empty() {
            DEFAULT_TIME_LAYOUT.to_string()
        } else {
            layout
        };
        self
    }

    /// Report sink write failures to `sender`.
    ///
    /// Without a sender, write failures are silently discarded.
    pub fn report_errors(mut self, sender: Sender<Error>) -> Self {
        self.errors = Some(sender);
        self
    }

    /// Forward every logged event to `sender` instead of requesting escalation.
    ///
    /// See [`Processor::set_event_channel`].
    pub fn forward_events(mut self, sender: Sender<Event>) -> Self {
        self.events = Some(sender);
        self
    }

    /// Set the trap that receives hand-offs dropped on full or closed channels.
    ///
    /// Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Register a sink.
    pub fn sink(mut self, sink: impl Into<Box<dyn Sink>>) -> Self {
        self.sinks.push(sink.into());
        self
    }

    /// Register several sinks at once.
    pub fn sinks(mut self, sinks: impl IntoIterator<Item = Box<dyn Sink>>) -> Self {
        self.sinks.extend(sinks);
        self
    }

    /// Build the processor.
    pub fn build(self) -> Processor {
        let ProcessorBuilder {
            assign_ids,
            time_layout,
            errors,
            events,
            trap,
            sinks,
        } = self;

        Processor {
            assign_ids,
            time_layout,
            trap,
            sinks: RwLock::new(sinks),
            overrides: RwLock::new(Overrides::default()),
            errors: RwLock::new(errors),
            events: RwLock::new(events),
        }
    }
}
