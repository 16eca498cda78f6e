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

//! Sinks that record events.

use std::fmt;

use crate::Error;
use crate::event::Event;
use crate::event::RoutingType;

mod console;
mod external;
pub mod file;
mod testing;

pub use self::console::Console;
pub use self::external::ErrorReporter;
pub use self::external::External;
pub use self::file::CsvFile;
pub use self::file::FileBuilder;
pub use self::file::JsonFile;
pub use self::file::TextFile;
pub use self::testing::Recorder;

/// A component that records or displays events.
///
/// Implementors must be safe to call from several threads at once: the
/// [`Processor`](crate::Processor) invokes [`Sink::write`] on the caller's thread.
pub trait Sink: fmt::Debug + Send + Sync + 'static {
    /// Record one event, rendering its time with `time_layout` if the sink prints times.
    ///
    /// # Errors
    ///
    /// Returns an error if the event could not be recorded. Errors are not retried.
    fn write(&self, event: &Event, time_layout: &str) -> Result<(), Error>;

    /// The routing types this sink accepts.
    ///
    /// Queried on every dispatch, so a sink may change its answer between calls.
    fn accepted_types(&self) -> Vec<RoutingType>;
}

impl<T: Sink> From<T> for Box<dyn Sink> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

