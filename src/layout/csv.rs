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

use crate::Error;
use crate::event::Event;
use crate::layout::format_time;

/// The header row written at the top of every freshly created CSV file.
pub const CSV_HEADER: &str = "Event ID;Time;Level;Source;Text;\n";

/// A layout that formats events as semicolon-delimited rows.
///
/// Output format:
///
/// ```text
/// Event ID;Time;Level;Source;Text;
/// 6f1c1e6a-2f60-4d55-9d89-8d1f5c4c2c11;Sat Aug 10 17:12:52 CST 2024;ERROR;[MAIN];Hello error!;
/// ```
///
/// Fields are written as is, without quoting.
#[derive(Default, Debug, Clone)]
pub struct CsvLayout {}

impl CsvLayout {
    /// Format an event into a single row, including the trailing newline.
    pub fn format(&self, event: &Event, time_layout: &str) -> Result<String, Error> {
        Ok(format!(
            "{};{};{};{};{};\n",
            event.id(),
            format_time(event.time(), time_layout)?,
            event.level(),
            event.source(),
            event.text(),
        ))
    }
}
