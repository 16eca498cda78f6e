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

use std::path::PathBuf;

use jiff::Timestamp;

use crate::Error;
use crate::event::Event;
use crate::event::RoutingType;
use crate::layout::JsonLayout;
use crate::sink::Sink;
use crate::sink::file::RollingFile;

pub(super) const EXTENSION: &str = "json";

/// A sink that appends JSON objects to rotating `.json` files.
///
/// Records are separated by `,\n` and never wrapped in an array, so a file is not a valid JSON
/// document by itself. Wrap its content in `[` and `]` before parsing it:
///
/// ```text
/// {"id":"","time":"...","level":"INFO","source":"","text":"first"},
/// {"id":"","time":"...","level":"INFO","source":"","text":"second"}
/// ```
#[derive(Debug)]
pub struct JsonFile {
    file: RollingFile,
    layout: JsonLayout,
    accepted: Vec<RoutingType>,
}

impl JsonFile {
    pub(super) fn new(file: RollingFile, layout: JsonLayout, accepted: Vec<RoutingType>) -> Self {
        Self {
            file,
            layout,
            accepted,
        }
    }

    /// The path of the file currently written to.
    pub fn current_path(&self) -> PathBuf {
        self.file.current_path()
    }

    /// The time of the last write, or of the sink creation if nothing was written yet.
    pub fn last_write(&self) -> Timestamp {
        self.file.last_write()
    }

    /// Flush the active file.
    pub fn flush(&self) -> Result<(), Error> {
        self.file.flush()
    }
}

impl Sink for JsonFile {
    fn write(&self, event: &Event, time_layout: &str) -> Result<(), Error> {
        self.file.write_with(|first| {
            let record = self.layout.format(event, time_layout)?;
            if first {
                return Ok(record);
            }
            let mut bytes = Vec::with_capacity(record.len() + 2);
            bytes.extend_from_slice(b",\n");
            bytes.extend_from_slice(&record);
            Ok(bytes)
        })
    }

    fn accepted_types(&self) -> Vec<RoutingType> {
        self.accepted.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::str::FromStr;
    use std::time::Duration;

    use jiff::Span;
    use jiff::Zoned;
    use tempfile::TempDir;

    use super::*;
    use crate::sink::FileBuilder;
    use crate::sink::file::clock::Clock;
    use crate::sink::file::clock::ManualClock;

    fn read_records(path: PathBuf) -> Vec<serde_json::Value> {
        let content = fs::read_to_string(path).unwrap();
        serde_json::from_str(&format!("[{content}]")).unwrap()
    }

    #[test]
    fn test_json_file_framing() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let sink = FileBuilder::new(dir.path().join("some"))
            .accept([RoutingType::ANY, RoutingType::ERROR_FLOW])
            .build_json()
            .unwrap();
        assert_eq!(
            sink.accepted_types(),
            vec![RoutingType::ANY, RoutingType::ERROR_FLOW]
        );

        sink.write(&Event::info("first"), "%Y").unwrap();
        sink.write(&Event::error("second").with_id("2"), "%Y").unwrap();

        let content = fs::read_to_string(sink.current_path()).unwrap();
        assert!(content.starts_with('{'));
        assert_eq!(content.matches(",\n").count(), 1);
        assert!(content.ends_with('}'));

        let records = read_records(sink.current_path());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["text"], "first");
        assert_eq!(records[1]["id"], "2");
        assert_eq!(records[1]["level"], "ERROR");
    }

    #[test]
    fn test_json_file_rotation_starts_without_separator() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let start = Zoned::from_str("2024-08-10T00:00:00[UTC]").unwrap();
        let clock = ManualClock::new(start.clone());
        let sink = FileBuilder::new(dir.path().join("rotating"))
            .rotation(Duration::from_secs(60))
            .clock(Clock::ManualClock(clock.clone()))
            .build_json()
            .unwrap();

        sink.write(&Event::info("a"), "%Y").unwrap();
        sink.write(&Event::info("b"), "%Y").unwrap();
        let first_path = sink.current_path();

        clock.set_now(start.checked_add(Span::new().minutes(5)).unwrap());
        sink.write(&Event::info("c"), "%Y").unwrap();
        let second_path = sink.current_path();

        assert_ne!(first_path, second_path);
        assert_eq!(read_records(first_path).len(), 2);
        let records = read_records(second_path.clone());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["text"], "c");
        assert!(fs::read_to_string(second_path).unwrap().starts_with('{'));
    }
}
