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

//! Events and the attributes they carry.

use jiff::Zoned;

mod format;
mod level;
mod routing;
mod source;
mod template;

pub use self::format::DisplayFormat;
pub use self::level::Level;
pub use self::routing::RoutingType;
pub use self::source::Source;
pub use self::template::EventTemplate;

/// An event to be dispatched by a [`Processor`](crate::Processor).
///
/// Events are values: every mutator consumes the event and returns the modified copy, so an
/// event can be kept around and logged several times. Combined with [`Event::freeze_time`] this
/// records a batch of related messages under one timestamp:
///
/// ```
/// use eventforth::Event;
///
/// let batch = Event::error("disk almost full").freeze_time();
/// let second = batch.clone().with_text("and the same moment something else happened");
///
/// assert_eq!(batch.time(), second.time());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    id: String,
    level: Level,
    routing_type: RoutingType,
    source: Source,
    time: Zoned,
    text: String,
    format: DisplayFormat,
    time_frozen: bool,
}

impl Default for Event {
    fn default() -> Self {
        Event::empty()
    }
}

impl Event {
    fn with_level_and_text(level: Level, text: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            level,
            routing_type: RoutingType::ANY,
            source: Source::EMPTY,
            time: Zoned::now(),
            text: text.into(),
            format: DisplayFormat::None,
            time_frozen: false,
        }
    }

    /// An [`Level::Info`] event with no text.
    pub fn empty() -> Self {
        Event::with_level_and_text(Level::Info, "")
    }

    /// An [`Level::Info`] event.
    pub fn info(text: impl Into<String>) -> Self {
        Event::with_level_and_text(Level::Info, text)
    }

    /// A [`Level::Note`] event.
    pub fn note(text: impl Into<String>) -> Self {
        Event::with_level_and_text(Level::Note, text)
    }

    /// A [`Level::Warn`] event.
    pub fn warning(text: impl Into<String>) -> Self {
        Event::with_level_and_text(Level::Warn, text)
    }

    /// A [`Level::Err`] event.
    pub fn error(text: impl Into<String>) -> Self {
        Event::with_level_and_text(Level::Err, text)
    }

    /// A [`Level::Crit`] event.
    pub fn critical(text: impl Into<String>) -> Self {
        Event::with_level_and_text(Level::Crit, text)
    }

    /// A [`Level::Panic`] event.
    pub fn panic(text: impl Into<String>) -> Self {
        Event::with_level_and_text(Level::Panic, text)
    }

    /// A [`Level::Fatal`] event.
    pub fn fatal(text: impl Into<String>) -> Self {
        Event::with_level_and_text(Level::Fatal, text)
    }
}

impl Event {
    /// The event ID, empty until assigned.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The severity.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The routing type.
    pub fn routing_type(&self) -> &RoutingType {
        &self.routing_type
    }

    /// The source tag.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// The time the event happened, or was last dispatched if the time is not frozen.
    pub fn time(&self) -> &Zoned {
        &self.time
    }

    /// The message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The presentation hint.
    pub fn format(&self) -> DisplayFormat {
        self.format
    }

    /// Whether the dispatcher keeps the event's time as is.
    pub fn is_time_frozen(&self) -> bool {
        self.time_frozen
    }
}

impl Event {
    /// Replace the message body.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Keep the current time on every dispatch instead of refreshing it.
    pub fn freeze_time(mut self) -> Self {
        self.time_frozen = true;
        self
    }

    /// Let the dispatcher refresh the time on every dispatch.
    pub fn unfreeze_time(mut self) -> Self {
        self.time_frozen = false;
        self
    }

    /// Replace the time. Only sticks through dispatch if the time is frozen.
    pub fn with_time(mut self, time: Zoned) -> Self {
        self.time = time;
        self
    }

    /// Replace the source.
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    /// Drop the ID, so a dispatcher assigning IDs gives the event a fresh one.
    pub fn clear_id(mut self) -> Self {
        self.id.clear();
        self
    }

    /// Set an explicit ID. The dispatcher keeps IDs that are already set.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Replace the severity.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Replace the routing type.
    pub fn with_routing_type(mut self, routing_type: RoutingType) -> Self {
        self.routing_type = routing_type;
        self
    }

    /// Replace the presentation hint.
    pub fn with_format(mut self, format: DisplayFormat) -> Self {
        self.format = format;
        self
    }

    /// Route to [`RoutingType::ANY`].
    pub fn any(self) -> Self {
        self.with_routing_type(RoutingType::ANY)
    }

    /// Route to [`RoutingType::MAIN`].
    pub fn main(self) -> Self {
        self.with_routing_type(RoutingType::MAIN)
    }

    /// Route to [`RoutingType::ERROR_FLOW`].
    pub fn error_flow(self) -> Self {
        self.with_routing_type(RoutingType::ERROR_FLOW)
    }

    /// Route to [`RoutingType::VERBOSE`].
    pub fn verbose(self) -> Self {
        self.with_routing_type(RoutingType::VERBOSE)
    }

    /// Route to [`RoutingType::DEBUG`].
    pub fn debug(self) -> Self {
        self.with_routing_type(RoutingType::DEBUG)
    }
}
