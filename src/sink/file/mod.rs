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

//! Sinks writing events to files that rotate after a period without writes.
//!
//! Files are named `<base>-<year>_<month>_<day>_<hour>_<minute>_<second>.<ext>` from the local
//! time they were created at.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use eventforth::Event;
//! use eventforth::Processor;
//! use eventforth::RoutingType;
//! use eventforth::sink::FileBuilder;
//!
//! let csv = FileBuilder::new("logs/app")
//!     .truncate(true)
//!     .rotation(Duration::from_secs(60))
//!     .accept([RoutingType::ERROR_FLOW])
//!     .build_csv()
//!     .unwrap();
//!
//! let processor = Processor::builder().assign_ids(true).sink(csv).build();
//! let _ = processor.log(Event::error("disk almost full").error_flow());
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::Error;
use crate::event::RoutingType;
use crate::layout::CSV_HEADER;
use crate::layout::CsvLayout;
use crate::layout::JsonLayout;
use crate::layout::TextLayout;

mod clock;
mod csv;
mod json;
mod rolling;
mod text;

pub use self::csv::CsvFile;
pub use self::json::JsonFile;
pub use self::text::TextFile;

use self::clock::Clock;
use self::rolling::RollingFile;

/// A builder for configuring the file sinks.
#[derive(Debug)]
pub struct FileBuilder {
    base_path: PathBuf,
    truncate: bool,
    rotation: Duration,
    accepted: Vec<RoutingType>,
    clock: Clock,
}

impl FileBuilder {
    /// Create a new file sink builder.
    ///
    /// `base_path` is the path prefix of every created file; missing parent directories are
    /// created.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            truncate: false,
            rotation: Duration::ZERO,
            accepted: vec![RoutingType::ANY],
            clock: Clock::DefaultClock,
        }
    }

    /// Truncate the first file if it already exists, instead of appending to it.
    ///
    /// CSV sinks write their header only to truncated files. Files created by rotation are
    /// always truncated.
    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    /// Start a new file when a write comes in more than `rotation` after the previous one.
    ///
    /// Default to [`Duration::ZERO`], which never rotates.
    pub fn rotation(mut self, rotation: Duration) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the routing types the sink accepts.
    ///
    /// Default to [`RoutingType::ANY`].
    pub fn accept(mut self, types: impl IntoIterator<Item = RoutingType>) -> Self {
        self.accepted = types.into_iter().collect();
        self
    }

    #[cfg(test)]
    fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn open(
        self,
        extension: &'static str,
        header: Option<&'static str>,
    ) -> Result<(RollingFile, Vec<RoutingType>), Error> {
        let FileBuilder {
            base_path,
            truncate,
            rotation,
            accepted,
            clock,
        } = self;
        let file = RollingFile::new(base_path, extension, header, truncate, rotation, clock)?;
        Ok((file, accepted))
    }

    /// Build a [`TextFile`] writing tab-separated lines to `.log` files.
    ///
    /// # Errors
    ///
    /// Return an error if the directory or the file cannot be created.
    pub fn build_text(self) -> Result<TextFile, Error> {
        let (file, accepted) = self.open(text::EXTENSION, None)?;
        Ok(TextFile::new(file, TextLayout::default(), accepted))
    }

    /// Build a [`TextFile`] writing only the event text to `.log` files.
    ///
    /// # Errors
    ///
    /// Return an error if the directory or the file cannot be created.
    pub fn build_pure_text(self) -> Result<TextFile, Error> {
        let (file, accepted) = self.open(text::EXTENSION, None)?;
        Ok(TextFile::new(file, TextLayout::default().pure_text(), accepted))
    }

    /// Build a [`JsonFile`] writing JSON objects to `.json` files.
    ///
    /// # Errors
    ///
    /// Return an error if the directory or the file cannot be created.
    pub fn build_json(self) -> Result<JsonFile, Error> {
        let (file, accepted) = self.open(json::EXTENSION, None)?;
        Ok(JsonFile::new(file, JsonLayout::default(), accepted))
    }

    /// Build a [`CsvFile`] writing semicolon-delimited rows to `.csv` files.
    ///
    /// # Errors
    ///
    /// Return an error if the directory or the file cannot be created, or the header cannot be
    /// written.
    pub fn build_csv(self) -> Result<CsvFile, Error> {
        let (file, accepted) = self.open(csv::EXTENSION, Some(CSV_HEADER))?;
        Ok(CsvFile::new(file, CsvLayout::default(), accepted))
    }
}
