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
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::event::Event;
use crate::event::RoutingType;
use crate::sink::Sink;

/// A sink that keeps every written event in memory, for tests of code that logs.
///
/// Clones share the same storage, so one clone can be handed to the
/// [`Processor`](crate::Processor) while the test keeps another.
///
/// # Examples
///
/// ```
/// use eventforth::Event;
/// use eventforth::Processor;
/// use eventforth::sink::Recorder;
///
/// let recorder = Recorder::default();
/// let processor = Processor::builder().sink(recorder.clone()).build();
///
/// let _ = processor.log(Event::info("hello"));
/// assert_eq!(recorder.events()[0].text(), "hello");
/// ```
#[derive(Debug, Clone)]
pub struct Recorder {
    records: Arc<Mutex<Vec<(Event, String)>>>,
    accepted: Arc<Mutex<Vec<RoutingType>>>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            records: Arc::new(Mutex::new(vec![])),
            accepted: Arc::new(Mutex::new(vec![RoutingType::ANY])),
        }
    }
}

impl Recorder {
    /// Set the routing types the sink accepts.
    ///
    /// Default to [`RoutingType::ANY`]. The list is shared between clones and may be changed
    /// while the sink is registered.
    pub fn accept(self, types: impl IntoIterator<Item = RoutingType>) -> Self {
        self.set_accepted(types);
        self
    }

    /// Replace the accepted routing types of this sink and all its clones.
    pub fn set_accepted(&self, types: impl IntoIterator<Item = RoutingType>) {
        *lock(&self.accepted) = types.into_iter().collect();
    }

    /// The events written so far.
    pub fn events(&self) -> Vec<Event> {
        lock(&self.records)
            .iter()
            .map(|(event, _)| event.clone())
            .collect()
    }

    /// The time layouts passed along with each written event.
    pub fn time_layouts(&self) -> Vec<String> {
        lock(&self.records)
            .iter()
            .map(|(_, layout)| layout.clone())
            .collect()
    }

    /// The last written event.
    pub fn last(&self) -> Option<Event> {
        lock(&self.records).last().map(|(event, _)| event.clone())
    }

    /// The number of written events.
    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    /// Whether nothing was written.
    pub fn is_empty(&self) -> bool {
        lock(&self.records).is_empty()
    }

    /// Forget the written events.
    pub fn clear(&self) {
        lock(&self.records).clear();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

impl Sink for Recorder {
    fn write(&self, event: &Event, time_layout: &str) -> Result<(), Error> {
        lock(&self.records).push((event.clone(), time_layout.to_string()));
        Ok(())
    }

    fn accepted_types(&self) -> Vec<RoutingType> {
        lock(&self.accepted).clone()
    }
}
