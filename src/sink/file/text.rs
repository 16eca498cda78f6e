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
use crate::layout::TextLayout;
use crate::sink::Sink;
use crate::sink::file::RollingFile;

pub(super) const EXTENSION: &str = "log";

/// A sink that appends tab-separated lines, or bare event text, to rotating `.log` files.
///
/// See [`TextLayout`] for the line format.
#[derive(Debug)]
pub struct TextFile {
    file: RollingFile,
    layout: TextLayout,
    accepted: Vec<RoutingType>,
}

impl TextFile {
    pub(super) fn new(file: RollingFile, layout: TextLayout, accepted: Vec<RoutingType>) -> Self {
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

impl Sink for TextFile {
    fn write(&self, event: &Event, time_layout: &str) -> Result<(), Error> {
        self.file
            .write_with(|_| Ok(self.layout.format(event, time_layout)?.into_bytes()))
    }

    fn accepted_types(&self) -> Vec<RoutingType> {
        self.accepted.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::str::FromStr;

    use jiff::Zoned;
    use tempfile::TempDir;

    use super::*;
    use crate::sink::FileBuilder;

    fn fixed_event(text: &str) -> Event {
        Event::info(text)
            .with_time(Zoned::from_str("2024-08-10T17:12:52[UTC]").unwrap())
            .freeze_time()
    }

    #[test]
    fn test_text_file_types() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let sink = FileBuilder::new(dir.path().join("some"))
            .accept([RoutingType::ANY, RoutingType::ERROR_FLOW])
            .build_text()
            .unwrap();

        assert_eq!(
            sink.accepted_types(),
            vec![RoutingType::ANY, RoutingType::ERROR_FLOW]
        );
        assert_eq!(sink.current_path().extension().unwrap(), "log");
    }

    #[test]
    fn test_text_file_lines() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let full = FileBuilder::new(dir.path().join("full"))
            .build_text()
            .unwrap();
        let pure = FileBuilder::new(dir.path().join("pure"))
            .build_pure_text()
            .unwrap();

        let before = pure.last_write();
        for sink in [&full, &pure] {
            sink.write(&fixed_event("event1").with_id("id1"), "%H:%M:%S")
                .unwrap();
            sink.write(&fixed_event("event2"), "%H:%M:%S").unwrap();
            sink.flush().unwrap();
        }

        assert_eq!(
            fs::read_to_string(full.current_path()).unwrap(),
            "id1\t17:12:52\tINFO\tevent1\n17:12:52\tINFO\tevent2\n"
        );
        assert_eq!(
            fs::read_to_string(pure.current_path()).unwrap(),
            "event1\nevent2\n"
        );
        assert!(pure.last_write() >= before);
    }

    #[test]
    fn test_text_file_reports_bad_time_layout() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let sink = FileBuilder::new(dir.path().join("bad")).build_text().unwrap();

        assert!(sink.write(&fixed_event("event1"), "%Y-%").is_err());
        assert_eq!(fs::read_to_string(sink.current_path()).unwrap(), "");
    }
}
