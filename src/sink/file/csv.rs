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
use crate::layout::CsvLayout;
use crate::sink::Sink;
use crate::sink::file::RollingFile;

pub(super) const EXTENSION: &str = "csv";

/// A sink that appends semicolon-delimited rows to rotating `.csv` files.
///
/// Every truncated or rotated file starts with [`CSV_HEADER`](crate::layout::CSV_HEADER).
#[derive(Debug)]
pub struct CsvFile {
    file: RollingFile,
    layout: CsvLayout,
    accepted: Vec<RoutingType>,
}

impl CsvFile {
    pub(super) fn new(file: RollingFile, layout: CsvLayout, accepted: Vec<RoutingType>) -> Self {
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

impl Sink for CsvFile {
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
    use std::time::Duration;

    use jiff::Span;
    use jiff::Zoned;
    use tempfile::TempDir;

    use super::*;
    use crate::layout::CSV_HEADER;
    use crate::sink::FileBuilder;
    use crate::sink::file::clock::Clock;
    use crate::sink::file::clock::ManualClock;

    #[test]
    fn test_header_only_in_truncate_mode() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let truncated = FileBuilder::new(dir.path().join("truncated"))
            .truncate(true)
            .build_csv()
            .unwrap();
        let appended = FileBuilder::new(dir.path().join("appended"))
            .build_csv()
            .unwrap();

        assert_eq!(
            fs::read_to_string(truncated.current_path()).unwrap(),
            CSV_HEADER
        );
        assert_eq!(fs::read_to_string(appended.current_path()).unwrap(), "");
    }

    #[test]
    fn test_rows_follow_header() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let sink = FileBuilder::new(dir.path().join("some"))
            .truncate(true)
            .accept([RoutingType::ANY, RoutingType::ERROR_FLOW])
            .build_csv()
            .unwrap();
        assert_eq!(
            sink.accepted_types(),
            vec![RoutingType::ANY, RoutingType::ERROR_FLOW]
        );

        let event = Event::info("event1")
            .with_time(Zoned::from_str("2024-08-10T17:12:52[UTC]").unwrap())
            .freeze_time();
        sink.write(&event, "%H:%M:%S").unwrap();

        assert_eq!(
            fs::read_to_string(sink.current_path()).unwrap(),
            format!("{CSV_HEADER};17:12:52;INFO;;event1;\n")
        );
    }

    #[test]
    fn test_rotated_file_gets_header_and_no_old_rows() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let start = Zoned::from_str("2024-08-10T00:00:00[UTC]").unwrap();
        let clock = ManualClock::new(start.clone());
        let sink = FileBuilder::new(dir.path().join("rotating"))
            .truncate(true)
            .rotation(Duration::from_secs(60))
            .clock(Clock::ManualClock(clock.clone()))
            .build_csv()
            .unwrap();

        let mut paths = vec![sink.current_path()];
        let mut cur = start;
        for i in 0..3 {
            cur = cur.checked_add(Span::new().minutes(2)).unwrap();
            clock.set_now(cur.clone());
            sink.write(&Event::info(format!("row{i}")), "%H:%M").unwrap();
            paths.push(sink.current_path());
        }

        // the first file only ever held the header
        assert_eq!(fs::read_to_string(&paths[0]).unwrap(), CSV_HEADER);
        for (i, path) in paths.iter().skip(1).enumerate() {
            let content = fs::read_to_string(path).unwrap();
            let lines = content.lines().collect::<Vec<_>>();
            assert_eq!(lines.len(), 2, "{content}");
            assert_eq!(format!("{}\n", lines[0]), CSV_HEADER);
            assert!(lines[1].ends_with(&format!("row{i};")));
        }
        let distinct = paths.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(distinct.len(), 4);
    }
}
