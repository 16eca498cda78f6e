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

use serde::Serialize;

use crate::Error;
use crate::event::Event;
use crate::layout::format_time;

/// A JSON layout for formatting events.
///
/// Output format:
///
/// ```json
/// {"id":"","time":"Sat Aug 10 17:12:52 CST 2024","level":"ERROR","source":"[MAIN]","text":"Hello error!"}
/// ```
///
/// Every key is always present and every value is a string.
#[derive(Default, Debug, Clone)]
pub struct JsonLayout {}

#[derive(Debug, Clone, Serialize)]
struct RecordLine<'a> {
    id: &'a str,
    time: String,
    level: &'a str,
    source: String,
    text: &'a str,
}

impl JsonLayout {
    /// Format an event into a single JSON object, without a trailing newline.
    pub fn format(&self, event: &Event, time_layout: &str) -> Result<Vec<u8>, Error> {
        let record_line = RecordLine {
            id: event.id(),
            time: format_time(event.time(), time_layout)?,
            level: event.level().as_str(),
            source: event.source().to_string(),
            text: event.text(),
        };

        serde_json::to_vec(&record_line).map_err(Error::from_json_error)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use jiff::Zoned;

    use super::*;
    use crate::Source;

    #[test]
    fn test_json_record() {
        let event = Event::critical("quote \" and\nnewline")
            .with_id("abc")
            .with_source(Source::DEBUG)
            .with_time(Zoned::from_str("2024-08-10T17:12:52[UTC]").unwrap());

        let bytes = JsonLayout::default().format(&event, "%Y-%m-%d").unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(!text.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["time"], "2024-08-10");
        assert_eq!(value["level"], "CRITICAL");
        assert_eq!(value["source"], "[DEBUG]");
        assert_eq!(value["text"], "quote \" and\nnewline");
    }
}
