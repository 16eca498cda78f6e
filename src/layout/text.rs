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

/// A layout that formats events as tab-separated text lines.
///
/// Output format:
///
/// ```text
/// 6f1c1e6a-2f60-4d55-9d89-8d1f5c4c2c11	Sat Aug 10 17:12:52 CST 2024	ERROR	[MAIN]	Hello error!
/// Sat Aug 10 17:12:53 CST 2024	INFO	Hello info!
/// ```
///
/// An empty ID or an empty source is left out together with its separator. In pure text mode
/// only the event text is written.
#[derive(Default, Debug, Clone)]
pub struct TextLayout {
    pure_text: bool,
}

impl TextLayout {
    /// Only print the event text, without ID, time, level or source.
    pub fn pure_text(mut self) -> Self {
        self.pure_text = true;
        self
    }

    /// Whether the layout only prints the event text.
    pub fn is_pure_text(&self) -> bool {
        self.pure_text
    }

    /// Format an event into a single line, including the trailing newline.
    pub fn format(&self, event: &Event, time_layout: &str) -> Result<String, Error> {
        if self.pure_text {
            return Ok(format!("{}\n", event.text()));
        }

        let mut fields = Vec::with_capacity(5);
        if !event.id().is_empty() {
            fields.push(event.id().to_string());
        }
        fields.push(format_time(event.time(), time_layout)?);
        fields.push(event.level().to_string());
        if !event.source().is_empty() {
            fields.push(event.source().to_string());
        }
        fields.push(event.text().to_string());

        let mut line = fields.join("\t");
        line.push('\n');
        Ok(line)
    }
}
