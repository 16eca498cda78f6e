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

use std::io;

use crate::Error;
use crate::event::Event;

/// A value handed to [`Processor::log_err_only`](crate::Processor::log_err_only) and its
/// escalating siblings.
///
/// Raw errors are always logged. Prebuilt events are only logged when their level is above
/// [`Level::Warn`](crate::Level::Warn).
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// A plain error, reduced to its message.
    Raw(String),
    /// An event built by the caller.
    Event(Event),
}

impl Failure {
    /// Build a failure from any error.
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        Failure::Raw(err.to_string())
    }
}

impl From<Event> for Failure {
    fn from(event: Event) -> Self {
        Failure::Event(event)
    }
}

impl From<Error> for Failure {
    fn from(err: Error) -> Self {
        Failure::Raw(err.to_string())
    }
}

impl From<io::Error> for Failure {
    fn from(err: io::Error) -> Self {
        Failure::Raw(err.to_string())
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Failure::Raw(format!("{err:#}"))
    }
}
