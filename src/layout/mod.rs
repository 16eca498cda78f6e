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

//! Layouts turning events into the bytes a sink writes.

use jiff::Zoned;

use crate::Error;

mod csv;
mod json;
mod report;
mod text;

pub use self::csv::CSV_HEADER;
pub use self::csv::CsvLayout;
pub use self::json::JsonLayout;
pub use self::report::ReportLayout;
pub use self::text::TextLayout;

/// The time layout used when none is configured, in the style of the Unix `date` command.
///
/// Layouts are `strftime`-like format strings as understood by [`jiff::fmt::strtime`].
pub const DEFAULT_TIME_LAYOUT: &str = "%a %b %e %H:%M:%S %Z %Y";

/// Render `time` according to `layout`.
///
/// # Errors
///
/// Fails when the layout contains an unknown directive or asks for data the time cannot provide.
pub fn format_time(time: &Zoned, layout: &str) -> Result<String, Error> {
    jiff::fmt::strtime::format(layout, time)
        .map_err(|err| Error::from_time_error(err).with_context("layout", layout))
}
