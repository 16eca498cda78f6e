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

use crate::event::DisplayFormat;
use crate::event::Event;
use crate::event::RoutingType;
use crate::event::Source;

/// A preset for events that share a source, routing type or format.
///
/// Only non-default fields are applied: an empty source, the [`RoutingType::ANY`] type and
/// [`DisplayFormat::None`] leave the constructed event unchanged.
///
/// # Examples
///
/// ```
/// use eventforth::EventTemplate;
/// use eventforth::RoutingType;
/// use eventforth::Source;
///
/// let template = EventTemplate::default()
///     .source(Source::MAIN)
///     .routing_type(RoutingType::DEBUG);
///
/// let event = template.note("event from default template");
/// assert_eq!(event.source(), &Source::MAIN);
/// assert_eq!(event.routing_type(), &RoutingType::DEBUG);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTemplate {
    source: Source,
    routing_type: RoutingType,
    format: DisplayFormat,
    time_frozen: bool,
}

impl EventTemplate {
    /// Set the source applied to new events.
    pub fn source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    /// Set the routing type applied to new events.
    pub fn routing_type(mut self, routing_type: RoutingType) -> Self {
        self.routing_type = routing_type;
        self
    }

    /// Set the format applied to new events.
    pub fn format(mut self, format: DisplayFormat) -> Self {
        self.format = format;
        self
    }

    /// Freeze the time of new events.
    pub fn freeze_time(mut self) -> Self {
        self.time_frozen = true;
        self
    }

    /// Apply this template to an existing event.
    pub fn apply(&self, mut event: Event) -> Event {
        if !self.source.is_empty() {
            event = event.with_source(self.source.clone());
        }
        if !self.routing_type.is_any() {
            event = event.with_routing_type(self.routing_type.clone());
        }
        if !self.format.is_none() {
            event = event.with_format(self.format);
        }
        if self.time_frozen {
            event = event.freeze_time();
        }
        event
    }

    /// See [`Event::empty`].
    pub fn empty(&self) -> Event {
        self.apply(Event::empty())
    }

    /// See [`Event::info`].
    pub fn info(&self, text: impl Into<String>) -> Event {
        self.apply(Event::info(text))
    }

    /// See [`Event::note`].
    pub fn note(&self, text: impl Into<String>) -> Event {
        self.apply(Event::note(text))
    }

    /// See [`Event::warning`].
    pub fn warning(&self, text: impl Into<String>) -> Event {
        self.apply(Event::warning(text))
    }

    /// See [`Event::error`].
    pub fn error(&self, text: impl Into<String>) -> Event {
        self.apply(Event::error(text))
    }

    /// See [`Event::critical`].
    pub fn critical(&self, text: impl Into<String>) -> Event {
        self.apply(Event::critical(text))
    }

    /// See [`Event::panic`].
    pub fn panic(&self, text: impl Into<String>) -> Event {
        self.apply(Event::panic(text))
    }

    /// See [`Event::fatal`].
    pub fn fatal(&self, text: impl Into<String>) -> Event {
        self.apply(Event::fatal(text))
    }
}
